use crate::bayes::TrainOptions;
use clap::Parser;
use std::path::PathBuf;

/// Labeled training data
pub const DATA_FILE: &str = "testdata/weather.arff";
/// Records to label with the trained model
pub const UNKNOWN_FILE: &str = "testdata/unknown_weather.arff";
/// Where the trained model is written and read back from
pub const MODEL_FILE: &str = "testdata/naive_bayes.model";

/// Rows shown when describing the training data
pub const PREVIEW_ROWS: usize = 5;

/// First bytes of every model file
pub const MODEL_MAGIC: &[u8] = b"NBMODEL\x01";

/// Train a Naive Bayes classifier, save it, load it back and label new data.
#[derive(Debug, Parser)]
#[command(name = "bayes_runner")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Labeled training data (.arff or .csv)
    #[arg(default_value = DATA_FILE)]
    pub data: PathBuf,

    /// Unlabeled records to classify
    #[arg(long, default_value = UNKNOWN_FILE)]
    pub unknown: PathBuf,

    /// Model file to write and reload
    #[arg(long, default_value = MODEL_FILE)]
    pub model: PathBuf,

    /// Fit normal distributions to numeric attributes instead of binning them
    #[arg(long)]
    pub no_discretize: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub data_file: PathBuf,
    pub unknown_file: PathBuf,
    pub model_file: PathBuf,
    pub options: TrainOptions,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from(DATA_FILE),
            unknown_file: PathBuf::from(UNKNOWN_FILE),
            model_file: PathBuf::from(MODEL_FILE),
            options: TrainOptions {
                supervised_discretization: true,
            },
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            data_file: cli.data,
            unknown_file: cli.unknown,
            model_file: cli.model,
            options: TrainOptions {
                supervised_discretization: !cli.no_discretize,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_paths() {
        let config = Config::from(Cli::parse_from(["bayes_runner"]));
        let default = Config::default();
        assert_eq!(config.data_file, default.data_file);
        assert_eq!(config.unknown_file, default.unknown_file);
        assert_eq!(config.model_file, default.model_file);
        assert!(config.options.supervised_discretization);
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::from(Cli::parse_from([
            "bayes_runner",
            "train.csv",
            "--unknown",
            "new.csv",
            "--model",
            "out.model",
            "--no-discretize",
        ]));
        assert_eq!(config.data_file, PathBuf::from("train.csv"));
        assert_eq!(config.unknown_file, PathBuf::from("new.csv"));
        assert_eq!(config.model_file, PathBuf::from("out.model"));
        assert!(!config.options.supervised_discretization);
    }
}
