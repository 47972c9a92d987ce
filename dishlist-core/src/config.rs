//! Run configuration.
//!
//! Values come from three layers, later ones winning: built-in defaults,
//! an optional TOML file, then command-line flags (applied by the binary).
//!
//! ```toml
//! dataset_path = "../data/Dish.csv"
//! stop_words_path = "../data/MenuStopWords.txt"
//! output_path = "../data/CleanedDishList.csv"
//! progress_interval = 50000
//!
//! [rules]
//! min_dish_len = 3
//! max_words = 6
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use dishlist_types::DishRules;
use serde::Deserialize;

use crate::error::PipelineError;

pub const DEFAULT_DATASET_PATH: &str = "../data/Dish.csv";
pub const DEFAULT_STOP_WORDS_PATH: &str = "../data/MenuStopWords.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "../data/CleanedDishList.csv";
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 50_000;

/// Everything a cleaning run needs to know.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Input CSV; column 1 holds comma-joined dish candidates.
    pub dataset_path: PathBuf,
    /// Newline-delimited stop words.
    pub stop_words_path: PathBuf,
    /// Destination of the cleaned, sorted dish list.
    pub output_path: PathBuf,
    /// Rows between progress log lines. Zero disables progress logging.
    pub progress_interval: u64,
    /// Validator thresholds.
    pub rules: DishRules,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            stop_words_path: PathBuf::from(DEFAULT_STOP_WORDS_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            rules: DishRules::default(),
        }
    }
}

impl PipelineConfig {
    /// Parses a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Reads and parses a TOML configuration file.
    pub fn from_toml_file(path: &Path) -> Result<Self, PipelineError> {
        let text = fs::read_to_string(path).map_err(|e| PipelineError::io(path, e))?;
        Self::from_toml_str(&text).map_err(|source| PipelineError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
