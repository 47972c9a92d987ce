//! Word splitting for normalized dish names.
//!
//! Splits on the ASCII space byte and nothing else. Unlike a search
//! tokenizer, empty segments are kept: `"ham  eggs"` yields `"ham"`, `""`,
//! `"eggs"`, and the empty string yields a single empty word. Normalized
//! input never contains such segments, but the validator is also usable on
//! raw strings and counts words the same way in both cases.

use memchr::memchr;

/// Iterator over the space-separated words of a dish name.
///
/// Words are slices of the input, nothing is allocated.
///
/// ```
/// use dishlist_core::analyzer::words::Words;
///
/// let words: Vec<&str> = Words::new("grilled salmon").collect();
/// assert_eq!(words, ["grilled", "salmon"]);
/// ```
#[derive(Debug, Clone)]
pub struct Words<'d> {
    rest: Option<&'d str>,
}

impl<'d> Words<'d> {
    /// Starts splitting `dish`.
    #[inline]
    pub const fn new(dish: &'d str) -> Self {
        Self { rest: Some(dish) }
    }
}

impl<'d> Iterator for Words<'d> {
    type Item = &'d str;

    #[inline]
    fn next(&mut self) -> Option<&'d str> {
        let rest = self.rest?;
        match memchr(b' ', rest.as_bytes()) {
            Some(i) => {
                // 0x20 is never part of a multi-byte sequence, so both
                // halves stay on char boundaries.
                self.rest = Some(&rest[i + 1..]);
                Some(&rest[..i])
            }
            None => {
                self.rest = None;
                Some(rest)
            }
        }
    }
}
