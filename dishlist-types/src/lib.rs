//! Core types shared by the dishlist crates.
//!
//! This crate holds the vocabulary the cleaning pipeline speaks:
//!
//! - **Rules**: the thresholds a normalized dish must satisfy
//! - **Rejections**: why a candidate was thrown away
//! - **Statistics**: counters and timings reported after a run
//!
//! It has no required dependencies. Enable the `serde` feature to load
//! [`DishRules`] from configuration files.

#![warn(missing_docs)]

use core::fmt;
use core::time::Duration;

/// Default minimum character length of a dish name.
///
/// Also the threshold for the "substantial word" rule: at least one word
/// must be strictly longer than this.
pub const MIN_DISH_LEN: usize = 3;

/// Default maximum number of words in a dish name.
pub const MAX_WORDS_IN_DISH: usize = 6;

/// Thresholds applied by the dish validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DishRules {
    /// Minimum length (in characters) of the whole dish name.
    pub min_dish_len: usize,
    /// Maximum number of space-separated words.
    pub max_words: usize,
}

impl Default for DishRules {
    fn default() -> Self {
        Self {
            min_dish_len: MIN_DISH_LEN,
            max_words: MAX_WORDS_IN_DISH,
        }
    }
}

/// Reason a normalized dish candidate was rejected.
///
/// Variants are listed in the order the validator checks them; the first
/// failing rule wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Dish is shorter than the minimum length.
    TooShort {
        /// Length of the candidate in characters.
        length: usize,
        /// The minimum required length.
        min_length: usize,
    },
    /// Dish contains something other than `a-z` and whitespace.
    InvalidCharacter {
        /// First offending character.
        ch: char,
    },
    /// Dish has more words than allowed.
    TooManyWords {
        /// Number of words found.
        count: usize,
        /// The maximum allowed.
        max_words: usize,
    },
    /// No word is longer than the minimum length.
    NoSubstantialWord {
        /// Length a word must exceed.
        min_length: usize,
    },
    /// More than one word is a single letter.
    MultipleSingleLetterWords,
}

impl RejectReason {
    /// Short stable label, used in logs and summaries.
    pub const fn label(&self) -> &'static str {
        match self {
            RejectReason::TooShort { .. } => "too_short",
            RejectReason::InvalidCharacter { .. } => "invalid_character",
            RejectReason::TooManyWords { .. } => "too_many_words",
            RejectReason::NoSubstantialWord { .. } => "no_substantial_word",
            RejectReason::MultipleSingleLetterWords => "multiple_single_letters",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::TooShort { length, min_length } => {
                write!(
                    f,
                    "dish too short: {} chars (min: {} chars)",
                    length, min_length
                )
            }
            RejectReason::InvalidCharacter { ch } => {
                write!(f, "dish contains invalid character {:?}", ch)
            }
            RejectReason::TooManyWords { count, max_words } => {
                write!(f, "dish has {} words (max: {})", count, max_words)
            }
            RejectReason::NoSubstantialWord { min_length } => {
                write!(f, "dish has no word longer than {} chars", min_length)
            }
            RejectReason::MultipleSingleLetterWords => {
                write!(f, "dish has more than one single-letter word")
            }
        }
    }
}

impl core::error::Error for RejectReason {}

/// Per-reason rejection counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RejectCounts {
    /// Candidates below the minimum length (includes empty ones).
    pub too_short: u64,
    /// Candidates with digits, leftover symbols or non-ASCII letters.
    pub invalid_character: u64,
    /// Candidates with too many words.
    pub too_many_words: u64,
    /// Candidates made only of short words.
    pub no_substantial_word: u64,
    /// Candidates with two or more single-letter words.
    pub multiple_single_letters: u64,
}

impl RejectCounts {
    /// Bumps the counter matching `reason`.
    #[inline]
    pub fn record(&mut self, reason: &RejectReason) {
        let slot = match reason {
            RejectReason::TooShort { .. } => &mut self.too_short,
            RejectReason::InvalidCharacter { .. } => &mut self.invalid_character,
            RejectReason::TooManyWords { .. } => &mut self.too_many_words,
            RejectReason::NoSubstantialWord { .. } => &mut self.no_substantial_word,
            RejectReason::MultipleSingleLetterWords => &mut self.multiple_single_letters,
        };
        *slot += 1;
    }

    /// Sum over every reason.
    pub const fn total(&self) -> u64 {
        self.too_short
            + self.invalid_character
            + self.too_many_words
            + self.no_substantial_word
            + self.multiple_single_letters
    }
}

/// Counters and timings for one cleaning run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunStats {
    /// Data rows read (header excluded, malformed rows included).
    pub rows: u64,
    /// Rows skipped because they had fewer than two columns.
    pub malformed_rows: u64,
    /// Raw dish candidates seen.
    pub candidates: u64,
    /// Candidates that failed validation, by reason.
    pub rejected: RejectCounts,
    /// Valid candidates dropped because they are stop words.
    pub stop_word_hits: u64,
    /// Valid candidates already present in the catalog.
    pub duplicates: u64,
    /// Unique dishes in the final list.
    pub dishes: u64,
    /// Time spent reading and cleaning.
    pub processing: Duration,
    /// Time spent writing the output.
    pub writing: Duration,
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rows ({} malformed), {} candidates, {} dishes, {} duplicates, {} stop words",
            self.rows,
            self.malformed_rows,
            self.candidates,
            self.dishes,
            self.duplicates,
            self.stop_word_hits
        )?;

        let rejected = self.rejected.total();
        if rejected > 0 {
            write!(
                f,
                ", rejected {} (short={}, chars={}, words={}, substance={}, letters={})",
                rejected,
                self.rejected.too_short,
                self.rejected.invalid_character,
                self.rejected.too_many_words,
                self.rejected.no_substantial_word,
                self.rejected.multiple_single_letters
            )?;
        }

        Ok(())
    }
}
