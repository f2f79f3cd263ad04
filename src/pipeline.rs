use crate::bayes::{NaiveBayesClassifier, TrainOptions};
use crate::config::{Config, PREVIEW_ROWS};
use crate::dataset::{Dataset, Value};
use crate::error::PipelineError;
use crate::loader::{self, Schema};
use crate::persistence;
use anyhow::{Context, Result};
use log::{debug, info};
use std::io::{self, Write};
use std::path::Path;

/// Reads a dataset and makes sure it has a class attribute.
pub fn load_dataset(path: &Path) -> Result<Dataset, PipelineError> {
    let dataset = loader::load_file(path).map_err(|source| PipelineError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        "loaded {} rows with {} attributes from {}",
        dataset.num_rows(),
        dataset.num_attributes(),
        path.display()
    );
    Ok(dataset)
}

/// Reads records to be labeled by `classifier`, interpreting them with the
/// schema it was trained on.
pub fn load_unlabeled(
    path: &Path,
    classifier: &NaiveBayesClassifier,
) -> Result<Dataset, PipelineError> {
    let schema = Schema {
        attributes: classifier.header(),
        class_index: classifier.class_index(),
    };
    let dataset = loader::load_file_with_schema(path, schema).map_err(|source| {
        PipelineError::FileRead {
            path: path.to_path_buf(),
            source,
        }
    })?;
    info!("loaded {} rows to classify from {}", dataset.num_rows(), path.display());
    Ok(dataset)
}

/// Writes the attributes, the class index and the first few rows.
pub fn describe<W: Write>(dataset: &Dataset, out: &mut W) -> io::Result<()> {
    for (i, attribute) in dataset.attributes.iter().enumerate() {
        writeln!(out, "attribute {} = {}", i, attribute)?;
    }
    match dataset.class_index {
        Some(index) => writeln!(out, "class index = {}", index)?,
        None => writeln!(out, "class index = -1")?,
    }
    for row in dataset.rows.iter().take(PREVIEW_ROWS) {
        writeln!(out, "instance = {}", dataset.format_row(row))?;
    }
    Ok(())
}

pub fn train(
    dataset: &Dataset,
    options: TrainOptions,
) -> Result<NaiveBayesClassifier, PipelineError> {
    info!(
        "training naive bayes on {:?}, class {:?} (supervised discretization: {})",
        dataset.relation,
        dataset.class_attribute().map(|a| a.name.as_str()),
        options.supervised_discretization
    );
    let classifier = NaiveBayesClassifier::train(dataset, options)?;
    debug!("{}", classifier);
    Ok(classifier)
}

pub fn persist(classifier: &NaiveBayesClassifier, path: &Path) -> Result<(), PipelineError> {
    persistence::save_model(classifier, path).map_err(|source| PipelineError::Storage {
        path: path.to_path_buf(),
        source,
    })?;
    info!("model saved to {}", path.display());
    Ok(())
}

pub fn reload(path: &Path) -> Result<NaiveBayesClassifier, PipelineError> {
    let classifier = persistence::load_model(path).map_err(|source| PipelineError::Storage {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        "model loaded from {} (supervised discretization: {})",
        path.display(),
        classifier.supervised_discretization()
    );
    Ok(classifier)
}

/// Returns a copy of `dataset` whose class values are the classifier's
/// predictions. The first failing row aborts the whole batch.
pub fn classify_all(
    classifier: &NaiveBayesClassifier,
    dataset: &Dataset,
) -> Result<Dataset, PipelineError> {
    classifier.check_header(dataset)?;

    let class_index = classifier.class_index();
    let mut labeled = dataset.clone();
    for (i, row) in labeled.rows.iter_mut().enumerate() {
        let class = classifier
            .predict(row)
            .map_err(|source| PipelineError::ClassifyRow { row: i, source })?;
        debug!("row {}: predicted class {}", i, class);
        row[class_index] = Value::Nominal(class);
    }

    info!("classified {} rows", labeled.num_rows());
    Ok(labeled)
}

/// Runs every step once, printing the datasets to `out`. Returns the labeled
/// dataset.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<Dataset> {
    // Building the model:
    let data = load_dataset(&config.data_file).context("loading training data")?;
    describe(&data, out).context("describing training data")?;

    let classifier = train(&data, config.options).context("training")?;
    persist(&classifier, &config.model_file).context("saving model")?;
    let from_file = reload(&config.model_file).context("reloading model")?;

    // Using the model:
    let unknown =
        load_unlabeled(&config.unknown_file, &from_file).context("loading unlabeled data")?;
    writeln!(out, "\nunclassified instances =\n{}", unknown)?;

    let labeled = classify_all(&from_file, &unknown).context("classifying")?;
    writeln!(out, "\nlabeled instances =\n{}", labeled)?;

    Ok(labeled)
}
