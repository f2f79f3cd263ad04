use crate::dataset::{Attribute, AttributeKind, Dataset, Value};
use crate::discretize;
use crate::error::{ClassifyError, TrainingError};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest factor a single attribute may contribute to a class score.
const MIN_PROBABILITY: f64 = 1e-75;

/// Precision used for numeric attributes with fewer than two distinct values.
const DEFAULT_PRECISION: f64 = 0.01;

#[derive(Debug, Clone, Copy, Default)]
pub struct TrainOptions {
    /// Bin numeric attributes with class-aware cut points instead of fitting
    /// a normal distribution per class.
    pub supervised_discretization: bool,
}

/// Laplace-smoothed frequency table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct DiscreteEstimator {
    counts: Vec<f64>,
    total: f64,
}

impl DiscreteEstimator {
    fn laplace(symbols: usize) -> Self {
        DiscreteEstimator {
            counts: vec![1.0; symbols],
            total: symbols as f64,
        }
    }

    fn add(&mut self, symbol: usize) {
        self.counts[symbol] += 1.0;
        self.total += 1.0;
    }

    fn probability(&self, symbol: usize) -> f64 {
        if self.total == 0.0 {
            return 0.0;
        }
        self.counts.get(symbol).map_or(0.0, |count| count / self.total)
    }
}

/// Normal distribution over values rounded to `precision`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct NormalEstimator {
    precision: f64,
    weight: f64,
    sum: f64,
    sum_sq: f64,
    mean: f64,
    std_dev: f64,
}

impl NormalEstimator {
    fn new(precision: f64) -> Self {
        NormalEstimator {
            precision,
            weight: 0.0,
            sum: 0.0,
            sum_sq: 0.0,
            mean: 0.0,
            std_dev: precision / 6.0,
        }
    }

    fn round(&self, value: f64) -> f64 {
        (value / self.precision).round() * self.precision
    }

    fn add(&mut self, value: f64) {
        let value = self.round(value);
        self.weight += 1.0;
        self.sum += value;
        self.sum_sq += value * value;

        self.mean = self.sum / self.weight;
        let std_dev = ((self.sum_sq - self.mean * self.sum).abs() / self.weight).sqrt();
        if std_dev > 1e-10 {
            self.std_dev = std_dev.max(self.precision / 6.0);
        }
    }

    fn probability(&self, value: f64) -> f64 {
        if self.weight == 0.0 {
            return 0.0;
        }
        let value = self.round(value);
        let half = self.precision / 2.0;
        let z_lower = (value - self.mean - half) / self.std_dev;
        let z_upper = (value - self.mean + half) / self.std_dev;
        normal_cdf(z_upper) - normal_cdf(z_lower)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
enum Estimator {
    /// Nominal attribute, or numeric attribute binned at `cut_points`.
    Discrete {
        cut_points: Option<Vec<f64>>,
        per_class: Vec<DiscreteEstimator>,
    },
    Normal { per_class: Vec<NormalEstimator> },
}

impl Estimator {
    fn add(&mut self, value: Value, class: usize) {
        match self {
            Estimator::Discrete {
                cut_points,
                per_class,
            } => {
                if let Some(symbol) = symbol(cut_points.as_deref(), value) {
                    per_class[class].add(symbol);
                }
            }
            Estimator::Normal { per_class } => {
                if let Value::Numeric(v) = value {
                    per_class[class].add(v);
                }
            }
        }
    }

    fn probability(&self, value: Value, class: usize) -> Option<f64> {
        match self {
            Estimator::Discrete {
                cut_points,
                per_class,
            } => symbol(cut_points.as_deref(), value).map(|s| per_class[class].probability(s)),
            Estimator::Normal { per_class } => match value {
                Value::Numeric(v) => Some(per_class[class].probability(v)),
                _ => None,
            },
        }
    }
}

fn symbol(cut_points: Option<&[f64]>, value: Value) -> Option<usize> {
    match (cut_points, value) {
        (Some(cuts), Value::Numeric(v)) => Some(discretize::interval(cuts, v)),
        (None, Value::Nominal(index)) => Some(index),
        _ => None,
    }
}

/// A Naive Bayes model over nominal and numeric attributes with a nominal
/// class. Keeps the training schema so it can refuse foreign datasets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NaiveBayesClassifier {
    relation: String,
    header: Vec<Attribute>,
    class_index: usize,
    supervised_discretization: bool,
    class_distribution: DiscreteEstimator,
    /// One slot per attribute; `None` at the class index.
    estimators: Vec<Option<Estimator>>,
}

impl NaiveBayesClassifier {
    pub fn train(dataset: &Dataset, options: TrainOptions) -> Result<Self, TrainingError> {
        if dataset.rows.is_empty() {
            return Err(TrainingError::Empty);
        }
        let class_index = dataset.class_index.ok_or(TrainingError::NoClass)?;
        let class_attribute =
            dataset
                .attributes
                .get(class_index)
                .ok_or(TrainingError::ClassOutOfRange {
                    index: class_index,
                    count: dataset.num_attributes(),
                })?;
        if !class_attribute.is_nominal() {
            return Err(TrainingError::NumericClass(class_attribute.name.clone()));
        }
        let num_classes = class_attribute.num_values();

        // Only rows with a known class take part in training:
        let labeled: Vec<(&[Value], usize)> = dataset
            .rows
            .iter()
            .filter_map(|row| match row[class_index] {
                Value::Nominal(class) => Some((row.as_slice(), class)),
                _ => None,
            })
            .collect();
        if labeled.is_empty() {
            return Err(TrainingError::NoLabeledRows);
        }
        let dropped = dataset.num_rows() - labeled.len();
        if dropped > 0 {
            warn!("ignoring {} rows without a class value", dropped);
        }

        let estimators: Vec<Option<Estimator>> = dataset
            .attributes
            .iter()
            .enumerate()
            .map(|(index, attribute)| {
                if index == class_index {
                    return None;
                }
                Some(match &attribute.kind {
                    AttributeKind::Nominal(values) => Estimator::Discrete {
                        cut_points: None,
                        per_class: vec![DiscreteEstimator::laplace(values.len()); num_classes],
                    },
                    AttributeKind::Numeric if options.supervised_discretization => {
                        let mut pairs: Vec<(f64, usize)> = labeled
                            .iter()
                            .filter_map(|&(row, class)| match row[index] {
                                Value::Numeric(v) => Some((v, class)),
                                _ => None,
                            })
                            .collect();
                        let cuts = discretize::cut_points(&mut pairs, num_classes);
                        debug!("cut points for {:?}: {:?}", attribute.name, cuts);
                        let intervals = cuts.len() + 1;
                        Estimator::Discrete {
                            cut_points: Some(cuts),
                            per_class: vec![DiscreteEstimator::laplace(intervals); num_classes],
                        }
                    }
                    AttributeKind::Numeric => {
                        let values = labeled.iter().map(|&(row, _)| row[index]);
                        let precision = numeric_precision(values);
                        debug!("precision for {:?}: {}", attribute.name, precision);
                        Estimator::Normal {
                            per_class: vec![NormalEstimator::new(precision); num_classes],
                        }
                    }
                })
            })
            .collect();

        let mut classifier = NaiveBayesClassifier {
            relation: dataset.relation.clone(),
            header: dataset.attributes.clone(),
            class_index,
            supervised_discretization: options.supervised_discretization,
            class_distribution: DiscreteEstimator::laplace(num_classes),
            estimators,
        };

        for &(row, class) in &labeled {
            classifier.class_distribution.add(class);
            for (estimator, &value) in classifier.estimators.iter_mut().zip(row.iter()) {
                if let Some(estimator) = estimator {
                    if !value.is_missing() {
                        estimator.add(value, class);
                    }
                }
            }
        }

        Ok(classifier)
    }

    pub fn class_index(&self) -> usize {
        self.class_index
    }

    pub fn class_attribute(&self) -> &Attribute {
        &self.header[self.class_index]
    }

    /// Attributes of the training data, class included.
    pub fn header(&self) -> &[Attribute] {
        &self.header
    }

    /// Checks that the estimator tables agree with the header. A model that
    /// passes can classify rows and be displayed without indexing out of
    /// bounds.
    pub fn validate(&self) -> Result<(), String> {
        let class_attribute = self
            .header
            .get(self.class_index)
            .ok_or_else(|| format!("class index {} out of range", self.class_index))?;
        let num_classes = class_attribute.num_values();
        if !class_attribute.is_nominal() || num_classes == 0 {
            return Err(format!("class {:?} has no labels", class_attribute.name));
        }
        if self.class_distribution.counts.len() != num_classes {
            return Err("class distribution does not match the class labels".to_string());
        }
        if self.estimators.len() != self.header.len() {
            return Err(format!(
                "{} estimators for {} attributes",
                self.estimators.len(),
                self.header.len()
            ));
        }

        for (index, (attribute, estimator)) in
            self.header.iter().zip(self.estimators.iter()).enumerate()
        {
            let consistent = match (estimator, &attribute.kind) {
                (None, _) => index == self.class_index,
                (Some(_), _) if index == self.class_index => false,
                (Some(Estimator::Discrete { cut_points, per_class }), kind) => {
                    let symbols = match (cut_points, kind) {
                        (None, AttributeKind::Nominal(values)) => Some(values.len()),
                        (Some(cuts), AttributeKind::Numeric) => Some(cuts.len() + 1),
                        _ => None,
                    };
                    symbols.is_some_and(|symbols| {
                        per_class.len() == num_classes
                            && per_class.iter().all(|table| table.counts.len() == symbols)
                    })
                }
                (Some(Estimator::Normal { per_class }), AttributeKind::Numeric) => {
                    per_class.len() == num_classes
                }
                (Some(Estimator::Normal { .. }), AttributeKind::Nominal(_)) => false,
            };
            if !consistent {
                return Err(format!("estimator for {:?} does not fit", attribute.name));
            }
        }
        Ok(())
    }

    pub fn supervised_discretization(&self) -> bool {
        self.supervised_discretization
    }

    /// Cut points chosen for a discretized numeric attribute.
    pub fn cut_points(&self, attribute: usize) -> Option<&[f64]> {
        match self.estimators.get(attribute)? {
            Some(Estimator::Discrete {
                cut_points: Some(cuts),
                ..
            }) => Some(cuts.as_slice()),
            _ => None,
        }
    }

    /// Checks that `dataset` has the schema this model was trained on.
    pub fn check_header(&self, dataset: &Dataset) -> Result<(), ClassifyError> {
        if dataset.num_attributes() != self.header.len() {
            return Err(ClassifyError::SchemaMismatch(format!(
                "expected {} attributes, found {}",
                self.header.len(),
                dataset.num_attributes()
            )));
        }
        if dataset.class_index != Some(self.class_index) {
            return Err(ClassifyError::SchemaMismatch(format!(
                "expected class index {}, found {:?}",
                self.class_index, dataset.class_index
            )));
        }
        if let Some((ours, theirs)) = self
            .header
            .iter()
            .zip(dataset.attributes.iter())
            .find(|(ours, theirs)| ours != theirs)
        {
            return Err(ClassifyError::SchemaMismatch(format!(
                "expected `{}`, found `{}`",
                ours, theirs
            )));
        }
        Ok(())
    }

    /// Normalized class probabilities for one row. The row's own class value
    /// is ignored, and so are missing values.
    pub fn distribution(&self, row: &[Value]) -> Result<Vec<f64>, ClassifyError> {
        if row.len() != self.header.len() {
            return Err(ClassifyError::RowWidth {
                expected: self.header.len(),
                found: row.len(),
            });
        }

        let num_classes = self.class_attribute().num_values();
        let mut scores: Vec<f64> = (0..num_classes)
            .map(|class| self.class_distribution.probability(class).ln())
            .collect();

        for ((attribute, estimator), &value) in
            self.header.iter().zip(self.estimators.iter()).zip(row.iter())
        {
            let Some(estimator) = estimator else {
                continue;
            };
            if value.is_missing() {
                continue;
            }
            if !attribute.accepts(value) {
                return Err(ClassifyError::BadValue(attribute.name.clone()));
            }
            for (class, score) in scores.iter_mut().enumerate() {
                let p = estimator
                    .probability(value, class)
                    .ok_or_else(|| ClassifyError::BadValue(attribute.name.clone()))?;
                *score += p.max(MIN_PROBABILITY).ln();
            }
        }

        let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let mut probabilities: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
        let total: f64 = probabilities.iter().sum();
        probabilities.iter_mut().for_each(|p| *p /= total);

        Ok(probabilities)
    }

    /// Predicts the class value index for a row. Ties go to the first class.
    pub fn predict(&self, row: &[Value]) -> Result<usize, ClassifyError> {
        let distribution = self.distribution(row)?;
        let (best, _) = distribution.iter().enumerate().fold(
            (0, f64::NEG_INFINITY),
            |(best, best_p), (class, &p)| {
                if p > best_p {
                    (class, p)
                } else {
                    (best, best_p)
                }
            },
        );
        Ok(best)
    }
}

impl fmt::Display for NaiveBayesClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Naive Bayes classifier for {:?}", self.relation)?;
        let class_attribute = self.class_attribute();
        if let AttributeKind::Nominal(labels) = &class_attribute.kind {
            let priors: Vec<String> = labels
                .iter()
                .enumerate()
                .map(|(class, label)| {
                    format!("{} {:.4}", label, self.class_distribution.probability(class))
                })
                .collect();
            writeln!(f, "class {}: {}", class_attribute.name, priors.join(", "))?;
        }
        for (index, (attribute, estimator)) in
            self.header.iter().zip(self.estimators.iter()).enumerate()
        {
            if let Some(cuts) = self.cut_points(index) {
                writeln!(f, "{}: {} intervals {:?}", attribute.name, cuts.len() + 1, cuts)?;
                continue;
            }
            match estimator {
                Some(Estimator::Discrete { .. }) => {
                    writeln!(f, "{}: {} values", attribute.name, attribute.num_values())?
                }
                Some(Estimator::Normal { per_class }) => {
                    let params: Vec<String> = per_class
                        .iter()
                        .map(|n| format!("mean {:.4} sd {:.4}", n.mean, n.std_dev))
                        .collect();
                    writeln!(f, "{}: {}", attribute.name, params.join("; "))?
                }
                None => {}
            }
        }
        Ok(())
    }
}

/// Mean gap between distinct sorted values.
fn numeric_precision(values: impl Iterator<Item = Value>) -> f64 {
    let mut values: Vec<f64> = values
        .filter_map(|value| match value {
            Value::Numeric(v) => Some(v),
            _ => None,
        })
        .collect();
    values.sort_by(f64::total_cmp);

    let mut distinct = 0;
    let mut delta_sum = 0.0;
    for pair in values.windows(2) {
        if pair[1] != pair[0] {
            delta_sum += pair[1] - pair[0];
            distinct += 1;
        }
    }

    if distinct > 0 {
        delta_sum / distinct as f64
    } else {
        DEFAULT_PRECISION
    }
}

fn normal_cdf(z: f64) -> f64 {
    0.5 * erfc(-z / std::f64::consts::SQRT_2)
}

/// Complementary error function, fractional error below 1.2e-7.
fn erfc(x: f64) -> f64 {
    let z = x.abs();
    let t = 1.0 / (1.0 + 0.5 * z);
    let r = t * (-z * z - 1.265_512_23
        + t * (1.000_023_68
            + t * (0.374_091_96
                + t * (0.096_784_18
                    + t * (-0.186_288_06
                        + t * (0.278_868_07
                            + t * (-1.135_203_98
                                + t * (1.488_515_87 + t * (-0.822_152_23 + t * 0.170_872_77)))))))))
        .exp();
    if x >= 0.0 {
        r
    } else {
        2.0 - r
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arff;

    const WEATHER: &str = "\
@relation weather
@attribute outlook {sunny, overcast, rainy}
@attribute temperature numeric
@attribute humidity numeric
@attribute windy {TRUE, FALSE}
@attribute play {yes, no}
@data
sunny,85,85,FALSE,no
sunny,80,90,TRUE,no
overcast,83,86,FALSE,yes
rainy,70,96,FALSE,yes
rainy,68,80,FALSE,yes
rainy,65,70,TRUE,no
overcast,64,65,TRUE,yes
sunny,72,95,FALSE,no
sunny,69,70,FALSE,yes
rainy,75,80,FALSE,yes
sunny,75,70,TRUE,yes
overcast,72,90,TRUE,yes
overcast,81,75,FALSE,yes
rainy,71,91,TRUE,no
";

    fn weather() -> Dataset {
        let mut data = arff::parse(WEATHER).unwrap();
        data.class_index = Some(4);
        data
    }

    fn discretized() -> TrainOptions {
        TrainOptions {
            supervised_discretization: true,
        }
    }

    #[test]
    fn learns_class_prior_with_laplace_smoothing() {
        let model = NaiveBayesClassifier::train(&weather(), discretized()).unwrap();
        // 9 yes, 5 no, each count starting at one.
        let prior = &model.class_distribution;
        assert!((prior.probability(0) - 10.0 / 16.0).abs() < 1e-12);
        assert!((prior.probability(1) - 6.0 / 16.0).abs() < 1e-12);
    }

    #[test]
    fn distribution_sums_to_one() {
        let data = weather();
        for options in [TrainOptions::default(), discretized()] {
            let model = NaiveBayesClassifier::train(&data, options).unwrap();
            for row in &data.rows {
                let dist = model.distribution(row).unwrap();
                assert_eq!(dist.len(), 2);
                assert!((dist.iter().sum::<f64>() - 1.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn overcast_days_are_for_playing() {
        let data = weather();
        let model = NaiveBayesClassifier::train(&data, discretized()).unwrap();
        let row = vec![
            Value::Nominal(1),
            Value::Numeric(70.0),
            Value::Numeric(80.0),
            Value::Nominal(1),
            Value::Missing,
        ];
        assert_eq!(model.predict(&row).unwrap(), 0);
    }

    #[test]
    fn weather_temperatures_stay_in_one_interval() {
        let model = NaiveBayesClassifier::train(&weather(), discretized()).unwrap();
        assert_eq!(model.cut_points(1), Some(&[][..]));
        assert_eq!(model.cut_points(0), None);
        assert_eq!(model.cut_points(4), None);
        assert!(model.supervised_discretization());
    }

    #[test]
    fn discretization_separates_numeric_classes() {
        let mut data = Dataset::new(
            "bands",
            vec![
                Attribute::numeric("x"),
                Attribute::nominal("label", vec!["low", "high"]),
            ],
        );
        for v in 0..20 {
            let class = if v < 10 { 0 } else { 1 };
            data.push_row(vec![Value::Numeric(v as f64), Value::Nominal(class)])
                .unwrap();
        }
        data.class_index = Some(1);

        let model = NaiveBayesClassifier::train(&data, discretized()).unwrap();
        assert_eq!(model.cut_points(0), Some(&[9.5][..]));
        assert_eq!(model.predict(&[Value::Numeric(3.0), Value::Missing]).unwrap(), 0);
        assert_eq!(model.predict(&[Value::Numeric(42.0), Value::Missing]).unwrap(), 1);

        let gaussian = NaiveBayesClassifier::train(&data, TrainOptions::default()).unwrap();
        assert_eq!(gaussian.cut_points(0), None);
        assert_eq!(gaussian.predict(&[Value::Numeric(2.0), Value::Missing]).unwrap(), 0);
        assert_eq!(gaussian.predict(&[Value::Numeric(17.0), Value::Missing]).unwrap(), 1);
    }

    #[test]
    fn all_missing_row_falls_back_to_prior() {
        let model = NaiveBayesClassifier::train(&weather(), discretized()).unwrap();
        let row = vec![Value::Missing; 5];
        assert_eq!(model.predict(&row).unwrap(), 0);
    }

    #[test]
    fn rejects_untrainable_datasets() {
        let mut empty = weather();
        empty.rows.clear();
        assert!(matches!(
            NaiveBayesClassifier::train(&empty, discretized()),
            Err(TrainingError::Empty)
        ));

        let mut no_class = weather();
        no_class.class_index = None;
        assert!(matches!(
            NaiveBayesClassifier::train(&no_class, discretized()),
            Err(TrainingError::NoClass)
        ));

        let mut numeric_class = weather();
        numeric_class.class_index = Some(1);
        assert!(matches!(
            NaiveBayesClassifier::train(&numeric_class, discretized()),
            Err(TrainingError::NumericClass(name)) if name == "temperature"
        ));

        let mut out_of_range = weather();
        out_of_range.class_index = Some(9);
        assert!(matches!(
            NaiveBayesClassifier::train(&out_of_range, discretized()),
            Err(TrainingError::ClassOutOfRange { index: 9, count: 5 })
        ));

        let mut unlabeled = weather();
        unlabeled.rows.iter_mut().for_each(|row| row[4] = Value::Missing);
        assert!(matches!(
            NaiveBayesClassifier::train(&unlabeled, discretized()),
            Err(TrainingError::NoLabeledRows)
        ));
    }

    #[test]
    fn rejects_bad_rows() {
        let model = NaiveBayesClassifier::train(&weather(), discretized()).unwrap();
        assert!(matches!(
            model.predict(&[Value::Nominal(0)]),
            Err(ClassifyError::RowWidth { expected: 5, found: 1 })
        ));
        let row = vec![
            Value::Nominal(7),
            Value::Numeric(70.0),
            Value::Numeric(80.0),
            Value::Nominal(1),
            Value::Missing,
        ];
        assert!(matches!(
            model.predict(&row),
            Err(ClassifyError::BadValue(name)) if name == "outlook"
        ));
    }

    #[test]
    fn header_check_spots_foreign_schemas() {
        let data = weather();
        let model = NaiveBayesClassifier::train(&data, discretized()).unwrap();
        assert!(model.check_header(&data).is_ok());

        let mut renamed = data.clone();
        renamed.attributes[0] = Attribute::nominal("sky", vec!["sunny", "overcast", "rainy"]);
        assert!(matches!(
            model.check_header(&renamed),
            Err(ClassifyError::SchemaMismatch(_))
        ));

        let mut other_class = data.clone();
        other_class.class_index = Some(3);
        assert!(model.check_header(&other_class).is_err());
    }

    #[test]
    fn validate_rejects_inconsistent_tables() {
        for options in [TrainOptions::default(), discretized()] {
            let model = NaiveBayesClassifier::train(&weather(), options).unwrap();
            assert_eq!(model.validate(), Ok(()));

            let mut bad_class = model.clone();
            bad_class.class_index = 9;
            assert!(bad_class.validate().is_err());

            let mut numeric_class = model.clone();
            numeric_class.class_index = 1;
            assert!(numeric_class.validate().is_err());

            let mut short = model.clone();
            short.estimators.pop();
            assert!(short.validate().is_err());

            let mut swapped = model.clone();
            swapped.estimators.swap(0, 1);
            assert!(swapped.validate().is_err());

            let mut relabeled = model.clone();
            relabeled.header[0] = Attribute::nominal("outlook", vec!["sunny"]);
            assert!(relabeled.validate().is_err());

            let mut priors = model.clone();
            priors.class_distribution = DiscreteEstimator::laplace(3);
            assert!(priors.validate().is_err());
        }
    }

    #[test]
    fn normal_estimator_matches_density() {
        let mut normal = NormalEstimator::new(0.01);
        for v in [1.0, 2.0, 3.0] {
            normal.add(v);
        }
        assert!((normal.mean - 2.0).abs() < 1e-9);
        // density at the mean times the interval width
        let expected = 0.01 / (normal.std_dev * (2.0 * std::f64::consts::PI).sqrt());
        assert!((normal.probability(2.0) - expected).abs() < 1e-6);
        assert_eq!(NormalEstimator::new(0.01).probability(1.0), 0.0);
    }

    #[test]
    fn precision_is_mean_gap() {
        let values = [3.0, 1.0, 1.0, 5.0].map(Value::Numeric);
        assert_eq!(numeric_precision(values.into_iter()), 2.0);
        assert_eq!(numeric_precision([Value::Missing].into_iter()), DEFAULT_PRECISION);
    }

    #[test]
    fn erfc_matches_known_values() {
        assert!((erfc(0.0) - 1.0).abs() < 1e-7);
        assert!((erfc(1.0) - 0.157_299_207).abs() < 1e-6);
        assert!((erfc(-1.0) - 1.842_700_793).abs() < 1e-6);
    }
}
