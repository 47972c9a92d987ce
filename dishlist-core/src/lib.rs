//! Cleans free-text dish names pulled from historical menu datasets.
//!
//! The crate turns a CSV of raw, comma-joined dish candidates into a
//! deduplicated, sorted list of plausible dish names:
//!
//! - [`analyzer`]: normalization, word splitting and validity rules
//! - [`stopwords`]: the known non-dish strings to drop
//! - [`catalog`]: the set of accepted dishes
//! - [`pipeline`]: the batch run tying them together
//!
//! Processing is single threaded and synchronous.

pub mod analyzer;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod stopwords;

pub use analyzer::{DishNormalizer, DishValidator};
pub use catalog::DishCatalog;
pub use config::PipelineConfig;
pub use error::PipelineError;
pub use pipeline::{run_pipeline, write_dishes, DishPipeline};
pub use stopwords::StopWords;

pub use dishlist_types::{DishRules, RejectReason, RunStats};
