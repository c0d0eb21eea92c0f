//! Extracted query value object

use serde::Serialize;

/// A normalized statement ending in exactly one terminator (Value Object)
///
/// Only the normalizer constructs this type, so every instance is trimmed and
/// terminated. Whether it is non-empty and carries the mandatory keyword is the
/// validator's job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ExtractedQuery(String);

impl ExtractedQuery {
    pub(crate) fn from_normalized(query: String) -> Self {
        Self(query)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The statement without its trailing terminator.
    pub fn body(&self) -> &str {
        let mut chars = self.0.chars();
        chars.next_back();
        chars.as_str()
    }

    /// Whether the statement has no text besides the terminator.
    pub fn is_blank(&self) -> bool {
        self.body().trim().is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ExtractedQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ExtractedQuery {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<ExtractedQuery> for String {
    fn from(query: ExtractedQuery) -> Self {
        query.0
    }
}

#[cfg(test)]
mod tests {
    use crate::extraction::normalize;

    #[test]
    fn test_body_strips_terminator() {
        let query = normalize("MATCH (n) RETURN n");
        assert_eq!(query.body(), "MATCH (n) RETURN n");
        assert!(!query.is_blank());
    }

    #[test]
    fn test_blank_query() {
        assert!(normalize("   ").is_blank());
    }

    #[test]
    fn test_converts_to_plain_string() {
        let query = normalize("RETURN 1");
        assert_eq!(query.to_string(), "RETURN 1;");
        let s: String = query.into();
        assert_eq!(s, "RETURN 1;");
    }
}
