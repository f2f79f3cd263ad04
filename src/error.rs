use std::path::PathBuf;
use thiserror::Error;

/// A malformed line in a dataset file.
#[derive(Debug, Error)]
#[error("line {line}: {message}")]
pub struct ParseError {
    pub line: usize,
    pub message: String,
}

impl ParseError {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        ParseError {
            line,
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed arff: {0}")]
    Arff(#[from] ParseError),

    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed csv: {0}")]
    CsvLayout(String),

    #[error("unsupported file extension: {0:?}")]
    UnsupportedFormat(String),
}

#[derive(Debug, Error)]
pub enum TrainingError {
    #[error("dataset has no rows")]
    Empty,

    #[error("class attribute is not set")]
    NoClass,

    #[error("class index {index} is out of range for {count} attributes")]
    ClassOutOfRange { index: usize, count: usize },

    #[error("class attribute {0:?} is not nominal")]
    NumericClass(String),

    #[error("no row carries a class value")]
    NoLabeledRows,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("not a model file")]
    BadMagic,

    #[error("could not encode model: {0}")]
    Encode(#[source] bincode::Error),

    #[error("could not decode model: {0}")]
    Decode(#[source] bincode::Error),

    #[error("inconsistent model: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("dataset schema does not match the training schema: {0}")]
    SchemaMismatch(String),

    #[error("expected {expected} values, found {found}")]
    RowWidth { expected: usize, found: usize },

    #[error("illegal value for attribute {0:?}")]
    BadValue(String),
}

/// Failure of one of the pipeline steps.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("could not read dataset {}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: LoadError,
    },

    #[error("could not train classifier")]
    Training(#[from] TrainingError),

    #[error("model storage failed for {}", .path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: StorageError,
    },

    #[error("could not classify dataset")]
    Classification(#[from] ClassifyError),

    #[error("could not classify row {row}")]
    ClassifyRow {
        row: usize,
        #[source]
        source: ClassifyError,
    },
}
