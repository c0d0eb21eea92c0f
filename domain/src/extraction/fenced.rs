//! Fenced code block extraction.

use super::scanner::LineScanner;
use crate::dialect::QueryDialect;

const FENCE: &str = "```";

/// Inner content of the first complete fenced block, verbatim.
///
/// The fence may span lines or sit on one line. A language tag matching the
/// dialect's (case-insensitive) directly after the opening fence is dropped.
/// The tag is matched as a prefix with no word boundary, so a glued one-line
/// block such as ```` ```cypherMATCH (n) RETURN n``` ```` still yields the
/// statement. Returns `None` when there is no closing fence.
pub fn fenced_block<'a>(raw: &'a str, dialect: &QueryDialect) -> Option<&'a str> {
    let open = raw.find(FENCE)?;
    let after_open = &raw[open + FENCE.len()..];
    let close = after_open.find(FENCE)?;
    let inner = &after_open[..close];

    let tag = dialect.language_tag();
    match inner.get(..tag.len()) {
        Some(head) if !tag.is_empty() && head.eq_ignore_ascii_case(tag) => {
            Some(&inner[tag.len()..])
        }
        _ => Some(inner),
    }
}

/// Extract a candidate statement from a fenced block.
///
/// Explanatory lines that leaked inside the fence are stripped with the line
/// scanner. When the scanner finds no statement start, the whole trimmed block
/// is taken as-is.
pub fn extract_fenced(raw: &str, dialect: &QueryDialect) -> Option<String> {
    let inner = fenced_block(raw, dialect)?;
    let candidate = LineScanner::new(dialect)
        .scan(inner)
        .unwrap_or_else(|_| inner.trim().to_string());
    Some(candidate)
}
