//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Invalid model: {0}")]
    InvalidModel(String),

    #[error("Unknown fallback policy: {0}")]
    UnknownFallbackPolicy(String),
}

/// Errors raised by the extraction pipeline.
///
/// Kept narrower than the failure the use case reports, so each stage can be
/// tested on its own.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// No line in the input opens a statement.
    #[error("No query found in response")]
    NoQueryFound,

    /// A candidate was extracted but lacks the mandatory keyword.
    #[error("Invalid query (missing {keyword}): {candidate}")]
    InvalidQuery { keyword: String, candidate: String },
}

impl ExtractionError {
    pub fn is_no_query_found(&self) -> bool {
        matches!(self, ExtractionError::NoQueryFound)
    }

    pub fn is_invalid_query(&self) -> bool {
        matches!(self, ExtractionError::InvalidQuery { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_query_found_display() {
        assert_eq!(
            ExtractionError::NoQueryFound.to_string(),
            "No query found in response"
        );
    }

    #[test]
    fn test_invalid_query_display() {
        let error = ExtractionError::InvalidQuery {
            keyword: "MATCH".to_string(),
            candidate: "Sorry;".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid query (missing MATCH): Sorry;");
    }

    #[test]
    fn test_kind_checks() {
        assert!(ExtractionError::NoQueryFound.is_no_query_found());
        assert!(!ExtractionError::NoQueryFound.is_invalid_query());
        let invalid = ExtractionError::InvalidQuery {
            keyword: "MATCH".to_string(),
            candidate: String::new(),
        };
        assert!(invalid.is_invalid_query());
        assert!(!invalid.is_no_query_found());
    }
}
