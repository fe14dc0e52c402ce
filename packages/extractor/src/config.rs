//! Configuration constants and validation functions for the extractor.

use std::path::Path;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::{ExtractorError, Result};

/// Default base directory scanned for filings.
pub const DEFAULT_INPUT_DIR: &str = "data";

/// Default directory receiving the CSV tables.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// File extension of e-file documents (matched case-insensitively).
pub const FILING_EXTENSION: &str = "xml";

/// Country written for every filer address.
///
/// Only `USAddress` filer blocks have been observed in e-file data, so the
/// filer country is not read from the document.
pub const FILER_COUNTRY: &str = "US";

/// Date pattern: YYYY-MM-DD.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"));

/// Parse a `YYYY-MM-DD` date as found in `TaxPeriodBeginDt`.
///
/// # Examples
/// ```
/// use chrono::Datelike;
/// use irs990_extractor::config::parse_date;
///
/// assert_eq!(parse_date("2019-07-01").unwrap().year(), 2019);
/// assert!(parse_date("2019-13-01").is_err());
/// assert!(parse_date("07/01/2019").is_err());
/// ```
pub fn parse_date(date_str: &str) -> Result<NaiveDate> {
    if !DATE_PATTERN.is_match(date_str) {
        return Err(ExtractorError::InvalidDate(date_str.to_string()));
    }

    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| ExtractorError::InvalidDate(date_str.to_string()))
}

/// Validate that the input path exists and is a directory.
pub fn validate_input_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ExtractorError::InvalidInput(format!(
            "Input directory does not exist: {}",
            path.display()
        )));
    }
    if !path.is_dir() {
        return Err(ExtractorError::InvalidInput(format!(
            "Input path is not a directory: {}",
            path.display()
        )));
    }
    Ok(())
}

/// Check whether a path looks like an e-file document.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use irs990_extractor::config::is_filing_file;
///
/// assert!(is_filing_file(Path::new("2019/201900001_public.xml")));
/// assert!(is_filing_file(Path::new("UPPER.XML")));
/// assert!(!is_filing_file(Path::new("index.csv")));
/// ```
pub fn is_filing_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(FILING_EXTENSION))
}
