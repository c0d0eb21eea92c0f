//! Terminator normalization.

use super::query::ExtractedQuery;
use crate::dialect::{QueryDialect, TERMINATOR};

/// Normalize a candidate with the Cypher terminator.
///
/// See [`normalize_with`].
pub fn normalize(text: &str) -> ExtractedQuery {
    normalize_with(text, TERMINATOR)
}

/// Normalize using the dialect's terminator.
pub fn normalize_for(text: &str, dialect: &QueryDialect) -> ExtractedQuery {
    normalize_with(text, dialect.terminator())
}

/// Trim surrounding whitespace, drop every trailing terminator, and append
/// exactly one.
///
/// Never fails. Blank input becomes the bare terminator, which the validator
/// rejects later. Idempotent: normalizing twice gives the same text.
pub fn normalize_with(text: &str, terminator: char) -> ExtractedQuery {
    // Whitespace between doubled terminators (`; ;`) collapses too.
    let body = text
        .trim()
        .trim_end_matches(|c: char| c == terminator || c.is_whitespace());
    let mut query = String::with_capacity(body.len() + terminator.len_utf8());
    query.push_str(body);
    query.push(terminator);
    ExtractedQuery::from_normalized(query)
}
