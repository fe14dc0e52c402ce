//! Normalization of text values before they become CSV cells.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Line breaks inside free-text elements, with the indentation around them.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]*[\r\n]+\s*").expect("valid regex"));

/// Normalize an extracted value for tabular output.
///
/// Applies Unicode NFC composition and folds line breaks into single spaces
/// so that multi-line descriptions (mission statements, grant purposes) stay
/// on a single CSV row. Whitespace within a line is left untouched.
///
/// # Examples
/// ```
/// use irs990_extractor::text::normalize_value;
///
/// assert_eq!(normalize_value("  To serve\n   the community "), "To serve the community");
/// assert_eq!(normalize_value("Suite  4"), "Suite  4");
/// ```
pub fn normalize_value(text: &str) -> String {
    let composed: String = text.nfc().collect();
    LINE_BREAK.replace_all(composed.trim(), " ").into_owned()
}
