//! The cleaning run: read the dataset, clean every candidate, write the list.
//!
//! ## Row handling
//!
//! The dataset is a CSV file with a header row. Column 1 of every data row
//! holds a comma-joined list of dish candidates; column 0 and any further
//! columns are ignored. Each candidate is normalized, validated and checked
//! against the stop words before it lands in the [`DishCatalog`].
//!
//! Rows with fewer than two columns are skipped with a warning and counted
//! in [`RunStats::malformed_rows`]. Any other read error ends the run.
//!
//! ## Output
//!
//! One dish per record, single column, no header, minimal quoting, sorted
//! ascending. Records end with `\r\n`, the usual CSV terminator.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use std::time::Instant;

use csv::{QuoteStyle, ReaderBuilder, StringRecord, WriterBuilder};
use dishlist_types::RunStats;
use log::{debug, error, info, trace, warn};
use memchr::memchr_iter;

use crate::analyzer::{DishNormalizer, DishValidator};
use crate::catalog::DishCatalog;
use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::stopwords::StopWords;

/// Column holding the comma-joined dish candidates.
const DISH_COLUMN: usize = 1;

/// Separator between candidates inside [`DISH_COLUMN`].
const CANDIDATE_SEPARATOR: u8 = b',';

/// Runs the whole job described by `config`.
///
/// Loads the stop words, cleans the dataset and writes the output file.
/// Either input missing is fatal; in that case no output file is created.
pub fn run_pipeline(config: &PipelineConfig) -> Result<RunStats, PipelineError> {
    let stop_words = StopWords::load(&config.stop_words_path)?;
    let pipeline = DishPipeline::new(config, stop_words);
    pipeline.run(&config.dataset_path, &config.output_path)
}

/// Cleans dish candidates against a fixed stop-word set.
///
/// Holds no per-run state, so one pipeline can process several inputs.
#[derive(Debug)]
pub struct DishPipeline {
    normalizer: DishNormalizer,
    validator: DishValidator,
    stop_words: StopWords,
    progress_interval: u64,
}

impl DishPipeline {
    /// Creates a pipeline using the rules and progress interval in `config`.
    pub fn new(config: &PipelineConfig, stop_words: StopWords) -> Self {
        Self {
            normalizer: DishNormalizer::new(),
            validator: DishValidator::new(config.rules),
            stop_words,
            progress_interval: config.progress_interval,
        }
    }

    /// Stop words this pipeline filters against.
    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Cleans `dataset` and writes the sorted list to `output`.
    pub fn run(&self, dataset: &Path, output: &Path) -> Result<RunStats, PipelineError> {
        if !dataset.exists() {
            error!("{} does not exist, cannot proceed", dataset.display());
            return Err(PipelineError::MissingFile {
                path: dataset.to_path_buf(),
            });
        }

        debug!(
            "filtering against {} stop words with {:?}",
            self.stop_words().len(),
            self.validator.rules()
        );
        info!("Started processing file");
        let started = Instant::now();

        let input = File::open(dataset).map_err(|e| PipelineError::io(dataset, e))?;
        let (catalog, mut stats) = self.collect(input)?;
        let dishes = catalog.into_sorted();
        stats.dishes = dishes.len() as u64;
        info!("Dish count = {}", dishes.len());

        stats.processing = started.elapsed();
        info!(
            "Finished processing in {:.6} seconds",
            stats.processing.as_secs_f64()
        );

        info!("Writing cleaned up menu items to {}", output.display());
        let started = Instant::now();

        let out = File::create(output).map_err(|e| PipelineError::io(output, e))?;
        write_dishes(out, &dishes)?;

        stats.writing = started.elapsed();
        info!(
            "Finished writing to disk in {:.6} seconds",
            stats.writing.as_secs_f64()
        );
        info!("Summary: {}", stats);

        Ok(stats)
    }

    /// Reads CSV rows from `reader` and returns the accepted dishes.
    ///
    /// The first row is treated as a header and skipped. The returned
    /// stats cover everything except `dishes` and the timings.
    pub fn collect<R: Read>(&self, reader: R) -> Result<(DishCatalog, RunStats), PipelineError> {
        let mut rows = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut catalog = DishCatalog::new();
        let mut stats = RunStats::default();
        let mut record = StringRecord::new();
        let mut buf = String::new();

        while rows.read_record(&mut record)? {
            stats.rows += 1;

            match record.get(DISH_COLUMN) {
                Some(field) => self.clean_field(field, &mut buf, &mut catalog, &mut stats),
                None => {
                    stats.malformed_rows += 1;
                    let line = record.position().map_or(0, |p| p.line());
                    warn!(
                        "Skipping line {}: expected at least {} columns, found {}",
                        line,
                        DISH_COLUMN + 1,
                        record.len()
                    );
                }
            }

            if self.progress_interval > 0 && stats.rows % self.progress_interval == 0 {
                info!("Processed {} lines", stats.rows);
            }
        }

        Ok((catalog, stats))
    }

    fn clean_field(
        &self,
        field: &str,
        buf: &mut String,
        catalog: &mut DishCatalog,
        stats: &mut RunStats,
    ) {
        let mut start = 0usize;
        for i in memchr_iter(CANDIDATE_SEPARATOR, field.as_bytes()) {
            self.clean_candidate(&field[start..i], buf, catalog, stats);
            start = i + 1;
        }
        self.clean_candidate(&field[start..], buf, catalog, stats);
    }

    fn clean_candidate(
        &self,
        raw: &str,
        buf: &mut String,
        catalog: &mut DishCatalog,
        stats: &mut RunStats,
    ) {
        stats.candidates += 1;
        self.normalizer.normalize_into(raw, buf);

        if let Err(reason) = self.validator.check(buf) {
            stats.rejected.record(&reason);
            trace!("rejected {:?} [{}]: {}", raw, reason.label(), reason);
            return;
        }

        if self.stop_words.contains(buf) {
            stats.stop_word_hits += 1;
            trace!("stop word {:?}", buf);
            return;
        }

        if !catalog.insert(buf) {
            stats.duplicates += 1;
        }
    }
}

/// Writes `dishes` as a one-column CSV with no header.
pub fn write_dishes<W: Write>(writer: W, dishes: &[String]) -> Result<(), PipelineError> {
    let mut out = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .from_writer(writer);

    for dish in dishes {
        out.write_record([dish.as_str()])?;
    }

    out.flush().map_err(csv::Error::from)?;
    Ok(())
}
