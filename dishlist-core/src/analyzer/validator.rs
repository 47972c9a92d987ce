//! Heuristic validity check for normalized dish names.
//!
//! A dish passes when all of the following hold, checked in this order:
//!
//! 1. at least `min_dish_len` characters long
//! 2. only `a-z` and whitespace characters
//! 3. at most `max_words` space-separated words
//! 4. some word is longer than `min_dish_len`
//! 5. no more than one single-letter word
//!
//! The first failing rule is reported as a [`RejectReason`].

use dishlist_types::{DishRules, RejectReason};
use smallvec::SmallVec;

use super::words::Words;

#[inline(always)]
fn is_dish_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_whitespace()
}

/// Applies [`DishRules`] to normalized candidates.
///
/// ```
/// use dishlist_core::analyzer::DishValidator;
///
/// let validator = DishValidator::default();
/// assert!(validator.is_valid("grilled salmon"));
/// assert!(!validator.is_valid("pie"));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct DishValidator {
    rules: DishRules,
}

impl DishValidator {
    /// Creates a validator for the given rules.
    pub const fn new(rules: DishRules) -> Self {
        Self { rules }
    }

    /// Rules this validator applies.
    pub const fn rules(&self) -> &DishRules {
        &self.rules
    }

    /// Returns the first rule `dish` breaks, if any.
    pub fn check(&self, dish: &str) -> Result<(), RejectReason> {
        let min_length = self.rules.min_dish_len;

        let length = dish.chars().count();
        if length < min_length {
            return Err(RejectReason::TooShort { length, min_length });
        }

        if let Some(ch) = dish.chars().find(|&c| !is_dish_char(c)) {
            return Err(RejectReason::InvalidCharacter { ch });
        }

        // Non-space whitespace stays inside words and can be multi-byte.
        let lengths: SmallVec<[usize; 8]> =
            Words::new(dish).map(|word| word.chars().count()).collect();

        if lengths.len() > self.rules.max_words {
            return Err(RejectReason::TooManyWords {
                count: lengths.len(),
                max_words: self.rules.max_words,
            });
        }

        if !lengths.iter().any(|&len| len > min_length) {
            return Err(RejectReason::NoSubstantialWord { min_length });
        }

        if lengths.iter().filter(|&&len| len == 1).count() > 1 {
            return Err(RejectReason::MultipleSingleLetterWords);
        }

        Ok(())
    }

    /// True when `dish` passes every rule.
    #[inline]
    pub fn is_valid(&self, dish: &str) -> bool {
        self.check(dish).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::DishNormalizer;
    use proptest::prelude::*;

    fn check(dish: &str) -> Result<(), RejectReason> {
        DishValidator::default().check(dish)
    }

    #[test]
    fn pie_has_no_substantial_word() {
        assert_eq!(
            check("pie"),
            Err(RejectReason::NoSubstantialWord { min_length: 3 })
        );
    }

    #[test]
    fn two_single_letters_rejected() {
        assert_eq!(
            check("a b roast"),
            Err(RejectReason::MultipleSingleLetterWords)
        );
    }

    #[test]
    fn one_single_letter_allowed() {
        assert!(check("a roast").is_ok());
        assert!(check("vitamin c salad").is_ok());
    }

    #[test]
    fn grilled_salmon_passes() {
        assert!(check("grilled salmon").is_ok());
    }

    #[test]
    fn soup_passes() {
        assert!(check("soup").is_ok());
    }

    #[test]
    fn digits_rejected() {
        assert_eq!(
            check("chicken65"),
            Err(RejectReason::InvalidCharacter { ch: '6' })
        );
    }

    #[test]
    fn short_dishes_rejected() {
        assert_eq!(
            check(""),
            Err(RejectReason::TooShort {
                length: 0,
                min_length: 3
            })
        );
        assert_eq!(
            check("ab"),
            Err(RejectReason::TooShort {
                length: 2,
                min_length: 3
            })
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // Two characters, four bytes: still too short.
        assert_eq!(
            check("éé"),
            Err(RejectReason::TooShort {
                length: 2,
                min_length: 3
            })
        );
    }

    #[test]
    fn word_lengths_count_characters() {
        // Three characters, five bytes: no word is longer than three.
        assert_eq!(
            check("ab\u{3000}"),
            Err(RejectReason::NoSubstantialWord { min_length: 3 })
        );
        // A lone ideographic space is a one-character word.
        assert_eq!(
            check("\u{3000} y roast"),
            Err(RejectReason::MultipleSingleLetterWords)
        );
        // "x\u{2003}y" is one three-character word, not a single letter.
        assert!(check("x\u{2003}y roast").is_ok());
    }

    #[test]
    fn accented_letters_rejected() {
        assert_eq!(
            check("crème brûlée"),
            Err(RejectReason::InvalidCharacter { ch: 'è' })
        );
    }

    #[test]
    fn uppercase_and_punctuation_rejected() {
        assert!(check("Soup").is_err());
        assert!(check("soup!").is_err());
    }

    #[test]
    fn six_words_allowed_seven_rejected() {
        assert!(check("one two three four five sixes").is_ok());
        assert_eq!(
            check("one two three four five six seven"),
            Err(RejectReason::TooManyWords {
                count: 7,
                max_words: 6
            })
        );
    }

    #[test]
    fn word_of_exactly_min_len_is_not_substantial() {
        assert!(check("ham egg").is_err());
        assert!(check("ham eggs").is_ok());
    }

    #[test]
    fn double_space_counts_empty_word() {
        // "a  b  roast" splits into a, "", b, "", roast: two single letters.
        assert_eq!(
            check("a  b  roast"),
            Err(RejectReason::MultipleSingleLetterWords)
        );
    }

    #[test]
    fn custom_rules() {
        let validator = DishValidator::new(DishRules {
            min_dish_len: 2,
            max_words: 2,
        });
        assert!(validator.is_valid("pie"));
        assert!(!validator.is_valid("ham and eggs"));
        assert_eq!(validator.rules().max_words, 2);
    }

    proptest! {
        #[test]
        fn accepted_dishes_are_normalization_fixed_points(s in "[a-zA-Z '&,.\\-]{0,40}") {
            let normalizer = DishNormalizer::default();
            let dish = normalizer.normalize(&s);
            if check(&dish).is_ok() {
                prop_assert_eq!(normalizer.normalize(&dish), dish.clone());
                prop_assert!(dish.chars().all(|c| c == ' ' || c.is_ascii_lowercase()));
            }
        }
    }
}
