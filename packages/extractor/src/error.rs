//! Error types for the extractor.
//!
//! Document-level errors (`Structure`, `MultipleMatches`, `MissingValue`,
//! `UnknownVariant`, ...) abort processing of the current filing. The driver
//! wraps them in `Document` so the offending path travels with the error.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the extractor library.
#[derive(Debug, Error)]
pub enum ExtractorError {
    /// A required element is absent.
    #[error("Missing required XML element <{element}> in <{context}>")]
    Structure { element: String, context: String },

    /// More than one element matched where exactly one was expected.
    #[error("Expected a single <{element}> in <{context}>, found {count}")]
    MultipleMatches {
        element: String,
        context: String,
        count: usize,
    },

    /// An element was found but carries no text.
    #[error("Element <{element}> in <{context}> has no text value")]
    MissingValue { element: String, context: String },

    /// The declared return type is not one of the known form variants.
    #[error("Unknown return type '{0}'. Expected one of 990, 990EZ, 990PF")]
    UnknownVariant(String),

    /// Address element of a kind the formatter does not know.
    #[error("Unsupported address element <{0}>")]
    UnsupportedAddress(String),

    /// Invalid date format.
    #[error("Invalid date format: '{0}'. Expected YYYY-MM-DD (e.g., 2019-07-01)")]
    InvalidDate(String),

    /// Invalid command-line input (paths and the like).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Failure while processing a single filing.
    #[error("{}: {source}", .path.display())]
    Document {
        path: PathBuf,
        #[source]
        source: Box<ExtractorError>,
    },

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization error.
    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),

    /// Directory traversal error.
    #[error("Failed to scan input directory: {0}")]
    Walk(#[from] walkdir::Error),
}

impl ExtractorError {
    /// Build a `Structure` error for a missing element.
    pub fn structure(element: impl Into<String>, context: impl Into<String>) -> Self {
        Self::Structure {
            element: element.into(),
            context: context.into(),
        }
    }

    /// Build a `MissingValue` error for an element without text.
    pub fn missing_value(element: impl Into<String>, context: impl Into<String>) -> Self {
        Self::MissingValue {
            element: element.into(),
            context: context.into(),
        }
    }

    /// Attach the path of the filing being processed.
    #[must_use]
    pub fn in_document(self, path: impl Into<PathBuf>) -> Self {
        Self::Document {
            path: path.into(),
            source: Box::new(self),
        }
    }

    /// Whether the error is a violation of the expected document structure.
    #[must_use]
    pub fn is_structural(&self) -> bool {
        match self {
            Self::Structure { .. }
            | Self::MultipleMatches { .. }
            | Self::UnsupportedAddress(_) => true,
            Self::Document { source, .. } => source.is_structural(),
            _ => false,
        }
    }
}

/// Result type alias for extractor operations.
pub type Result<T> = std::result::Result<T, ExtractorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structure_display() {
        let err = ExtractorError::structure("ReturnHeader", "Return");
        assert_eq!(
            err.to_string(),
            "Missing required XML element <ReturnHeader> in <Return>"
        );
    }

    #[test]
    fn test_multiple_matches_display() {
        let err = ExtractorError::MultipleMatches {
            element: "EIN".to_string(),
            context: "Filer".to_string(),
            count: 2,
        };
        assert_eq!(err.to_string(), "Expected a single <EIN> in <Filer>, found 2");
    }

    #[test]
    fn test_unknown_variant_display() {
        let err = ExtractorError::UnknownVariant("990T".to_string());
        assert!(err.to_string().contains("990T"));
    }

    #[test]
    fn test_document_wrapping_keeps_classification() {
        let err = ExtractorError::structure("Filer", "ReturnHeader").in_document("data/a.xml");
        assert!(err.is_structural());
        assert!(err.to_string().starts_with("data/a.xml: "));

        let err = ExtractorError::InvalidDate("2019/07/01".to_string()).in_document("b.xml");
        assert!(!err.is_structural());
    }
}
