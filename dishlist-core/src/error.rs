//! Error type for the cleaning pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Failures that end a cleaning run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A required input file is not on disk.
    #[error("{} does not exist, cannot proceed", path.display())]
    MissingFile { path: PathBuf },
    /// Reading or writing a file failed.
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The dataset could not be decoded, or the output could not be encoded.
    #[error(transparent)]
    Csv(#[from] csv::Error),
    /// The configuration file is not valid TOML for [`crate::PipelineConfig`].
    #[error("invalid configuration file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl PipelineError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
