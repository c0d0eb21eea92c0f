//! Keyword sanity check applied to extracted queries.
//!
//! This is not a grammar check. It catches refusals, apologies and empty
//! answers that made it through extraction.

use super::query::ExtractedQuery;
use crate::core::error::ExtractionError;
use crate::dialect::QueryDialect;

/// Accept the query only if it contains the dialect's mandatory keyword.
pub fn validate_for(
    query: ExtractedQuery,
    dialect: &QueryDialect,
) -> Result<ExtractedQuery, ExtractionError> {
    if !query.is_blank() && dialect.contains_mandatory_keyword(query.as_str()) {
        Ok(query)
    } else {
        Err(invalid(dialect, query.into_string()))
    }
}

/// Validate with the Cypher dialect.
pub fn validate(query: ExtractedQuery) -> Result<ExtractedQuery, ExtractionError> {
    validate_for(query, &QueryDialect::cypher())
}

/// Cheap check on raw model output, run before any cleaning.
pub fn precheck_raw(raw: &str, dialect: &QueryDialect) -> Result<(), ExtractionError> {
    if !raw.trim().is_empty() && dialect.contains_mandatory_keyword(raw) {
        Ok(())
    } else {
        Err(invalid(dialect, raw.to_string()))
    }
}

fn invalid(dialect: &QueryDialect, candidate: String) -> ExtractionError {
    ExtractionError::InvalidQuery {
        keyword: dialect.mandatory_keyword().to_string(),
        candidate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::normalize::normalize;

    #[test]
    fn test_accepts_match_query() {
        let query = validate(normalize("MATCH (n) RETURN n")).unwrap();
        assert_eq!(query.as_str(), "MATCH (n) RETURN n;");
    }

    #[test]
    fn test_accepts_lowercase_keyword() {
        assert!(validate(normalize("optional match (n) return n")).is_ok());
    }

    #[test]
    fn test_rejects_missing_keyword() {
        let error = validate(normalize("RETURN 1")).unwrap_err();
        assert_eq!(
            error,
            ExtractionError::InvalidQuery {
                keyword: "MATCH".to_string(),
                candidate: "RETURN 1;".to_string(),
            }
        );
    }

    #[test]
    fn test_rejects_bare_terminator() {
        assert!(validate(normalize("")).unwrap_err().is_invalid_query());
    }

    #[test]
    fn test_precheck_raw() {
        let dialect = QueryDialect::cypher();
        assert!(precheck_raw("Sure:\nmatch (n) return n", &dialect).is_ok());
        assert!(precheck_raw("", &dialect).unwrap_err().is_invalid_query());
        assert!(
            precheck_raw("I'm sorry, I cannot do that.", &dialect)
                .unwrap_err()
                .is_invalid_query()
        );
    }
}
