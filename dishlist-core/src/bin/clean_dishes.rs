//! Dish List Cleaning Tool
//!
//! Reads the menu dish dataset, cleans every dish candidate and writes the
//! deduplicated, sorted list of dish names.
//!
//! ## Usage
//!
//! ```bash
//! # Use the default ../data layout
//! ./target/release/clean_dishes
//!
//! # Explicit paths
//! ./target/release/clean_dishes --dataset Dish.csv \
//!     --stop-words MenuStopWords.txt --output CleanedDishList.csv
//!
//! # Settings from a TOML file, with a flag on top
//! ./target/release/clean_dishes --config dishlist.toml --progress-interval 10000
//! ```
//!
//! ## Exit Status
//!
//! - `0`: the cleaned list was written
//! - `1`: an input file is missing or the run failed

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use log::error;

use dishlist_core::config::PipelineConfig;
use dishlist_core::{logging, run_pipeline, PipelineError};

/// Normalize and filter dish names from a menu dataset.
#[derive(Debug, Parser)]
#[command(name = "clean_dishes", version, about)]
struct Cli {
    /// Dataset CSV; column 1 holds comma-joined dish names.
    #[arg(long, value_name = "PATH")]
    dataset: Option<PathBuf>,
    /// Stop-word file, one entry per line.
    #[arg(long, value_name = "PATH")]
    stop_words: Option<PathBuf>,
    /// Where to write the cleaned list.
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,
    /// TOML file with run settings; flags take precedence.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Rows between progress messages (0 disables them).
    #[arg(long, value_name = "ROWS")]
    progress_interval: Option<u64>,
    /// Increase logging verbosity (-v, -vv).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<PipelineConfig> {
        let mut config = match &self.config {
            Some(path) => PipelineConfig::from_toml_file(path)?,
            None => PipelineConfig::default(),
        };

        if let Some(path) = self.dataset {
            config.dataset_path = path;
        }
        if let Some(path) = self.stop_words {
            config.stop_words_path = path;
        }
        if let Some(path) = self.output {
            config.output_path = path;
        }
        if let Some(rows) = self.progress_interval {
            config.progress_interval = rows;
        }

        Ok(config)
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(err) = run(cli) {
        // Missing inputs are already reported where they are detected.
        if !matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::MissingFile { .. })
        ) {
            error!("{err:#}");
        }
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.into_config()?;
    run_pipeline(&config)?;
    Ok(())
}
