/// Character removed outright instead of being turned into a space.
const APOSTROPHE: char = '\'';

#[inline(always)]
const fn is_space_byte(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Dish name normalizer.
///
/// Performs the following operations, in order:
/// - Converts all characters to lowercase (Unicode-aware)
/// - Deletes apostrophes (`O'Brien` becomes `obrien`)
/// - Turns every other ASCII punctuation character into a space
/// - Collapses whitespace runs into single spaces
/// - Removes leading/trailing whitespace
///
/// Accented and other non-ASCII letters are kept as they are. The operation
/// is total and idempotent.
///
/// # Examples
///
/// ```
/// use dishlist_core::analyzer::DishNormalizer;
///
/// let normalizer = DishNormalizer::default();
/// assert_eq!(normalizer.normalize("Mac & Cheese"), "mac cheese");
/// assert_eq!(normalizer.normalize("O'Brien's Stew"), "obriens stew");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct DishNormalizer;

impl DishNormalizer {
    /// Creates a new normalizer.
    pub const fn new() -> Self {
        Self
    }

    /// Normalizes a dish candidate into an existing String buffer.
    ///
    /// Clears the buffer before writing and reuses its capacity.
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();
        if input.is_empty() {
            return;
        }
        out.reserve(input.len());

        if input.is_ascii() {
            normalize_ascii(input.as_bytes(), out);
        } else {
            normalize_unicode(input, out);
        }
    }

    /// Normalizes a dish candidate and returns a new String.
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }
}

/// Byte loop for the common all-ASCII case.
fn normalize_ascii(bytes: &[u8], out: &mut String) {
    let mut pending_space = false;

    for &b in bytes {
        if b == b'\'' {
            continue;
        }
        if is_space_byte(b) || b.is_ascii_punctuation() {
            pending_space = true;
            continue;
        }
        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        out.push(b.to_ascii_lowercase() as char);
    }
}

fn normalize_unicode(input: &str, out: &mut String) {
    let mut pending_space = false;

    for ch in input.chars() {
        for lowered in ch.to_lowercase() {
            if lowered == APOSTROPHE {
                continue;
            }
            if lowered.is_whitespace() || lowered.is_ascii_punctuation() {
                pending_space = true;
                continue;
            }
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(lowered);
        }
    }
}
