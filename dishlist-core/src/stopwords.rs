//! Menu stop words.
//!
//! A stop word is a string that can look like a dish but is known not to
//! be one ("dinner", "wine list"). Entries are expected in normalized form
//! already; the loader only trims each line.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use log::{debug, error};
use rustc_hash::FxHashSet;

use crate::error::PipelineError;

/// Read-only set of stop words for one run.
#[derive(Debug, Default, Clone)]
pub struct StopWords {
    words: FxHashSet<String>,
}

impl StopWords {
    /// An empty set: nothing is filtered.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the set from lines; each is trimmed and blanks are skipped.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = lines
            .into_iter()
            .filter_map(|line| {
                let word = line.as_ref().trim();
                (!word.is_empty()).then(|| word.to_owned())
            })
            .collect();
        Self { words }
    }

    /// Reads newline-delimited stop words from `reader`.
    pub fn from_reader<R: Read>(reader: R) -> std::io::Result<Self> {
        let lines = BufReader::new(reader)
            .lines()
            .collect::<std::io::Result<Vec<_>>>()?;
        Ok(Self::from_lines(lines))
    }

    /// Loads the stop-word file at `path`.
    ///
    /// A missing file is fatal for the run and is logged before returning.
    pub fn load(path: &Path) -> Result<Self, PipelineError> {
        if !path.exists() {
            error!("{} does not exist, cannot proceed", path.display());
            return Err(PipelineError::MissingFile {
                path: path.to_path_buf(),
            });
        }

        let file = File::open(path).map_err(|e| PipelineError::io(path, e))?;
        let stop_words = Self::from_reader(file).map_err(|e| PipelineError::io(path, e))?;
        debug!(
            "loaded {} stop words from {}",
            stop_words.len(),
            path.display()
        );
        Ok(stop_words)
    }

    /// True if `dish` is a stop word.
    #[inline]
    pub fn contains(&self, dish: &str) -> bool {
        self.words.contains(dish)
    }

    /// Number of stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn lines_are_trimmed_and_blanks_skipped() {
        let stop_words = StopWords::from_lines(["dinner\n", "  wine list  ", "", "   "]);
        assert_eq!(stop_words.len(), 2);
        assert!(stop_words.contains("dinner"));
        assert!(stop_words.contains("wine list"));
    }

    #[test]
    fn entries_are_not_normalized() {
        let stop_words = StopWords::from_lines(["Dinner"]);
        assert!(stop_words.contains("Dinner"));
        assert!(!stop_words.contains("dinner"));
    }

    #[test]
    fn from_reader_handles_crlf() {
        let input = "dinner\r\nlunch\r\n\r\nsupper";
        let stop_words = StopWords::from_reader(input.as_bytes()).unwrap();
        assert_eq!(stop_words.len(), 3);
        assert!(stop_words.contains("lunch"));
        assert!(stop_words.contains("supper"));
    }

    #[test]
    fn load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "dinner").unwrap();
        writeln!(file, "a la carte").unwrap();

        let stop_words = StopWords::load(file.path()).unwrap();
        assert_eq!(stop_words.len(), 2);
        assert!(stop_words.contains("a la carte"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("MenuStopWords.txt");

        let err = StopWords::load(&path).unwrap_err();
        assert!(matches!(err, PipelineError::MissingFile { .. }));
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn empty_set() {
        let stop_words = StopWords::empty();
        assert!(stop_words.is_empty());
        assert!(!stop_words.contains("soup"));
    }
}
