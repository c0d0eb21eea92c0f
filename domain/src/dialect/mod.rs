//! Query dialect: the keyword tables and boundary constants that drive extraction.
//!
//! A [`QueryDialect`] bundles everything the extraction pipeline needs to know
//! about the target query language:
//!
//! - **start** keywords that may open a statement
//! - **continuation** keywords that may open a later line of the same statement
//! - **conversational markers** that only ever introduce prose
//! - the statement terminator, the mandatory keyword checked by the validator,
//!   the fenced-block language tag, and the prefix token some backends emit
//!
//! [`QueryDialect::cypher()`] is the default. Other query languages can be
//! described with the `with_*` builder methods.

mod keyword_table;

pub use keyword_table::KeywordTable;

/// Keyword the validator requires in every accepted Cypher statement.
pub const MANDATORY_KEYWORD: &str = "MATCH";

/// Character that terminates a Cypher statement.
pub const TERMINATOR: char = ';';

/// Language tag recognized right after an opening fence.
pub const LANGUAGE_TAG: &str = "cypher";

const CYPHER_START: &[&str] = &[
    "match", "with", "call", "return", "create", "merge", "unwind",
];

const CYPHER_CLAUSES: &[&str] = &[
    "where", "and", "or", "limit", "order", "skip", "delete", "detach", "set", "remove",
    "on create", "on match",
];

const CYPHER_MARKERS: &[&str] = &[
    "note",
    "this query",
    "explanation",
    "here",
    "if you",
    "the query",
    "analysis",
    "result",
    "or",
    "alternatively",
    "you can",
];

/// Keyword tables and constants for one structured query language (Value Object)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDialect {
    start: KeywordTable,
    continuation: KeywordTable,
    markers: KeywordTable,
    terminator: char,
    mandatory_keyword: String,
    language_tag: String,
    prefix_token: String,
}

impl QueryDialect {
    /// The Cypher dialect used for graph queries.
    pub fn cypher() -> Self {
        let start = KeywordTable::new(CYPHER_START);
        let continuation = start.extended(&KeywordTable::new(CYPHER_CLAUSES));
        Self {
            start,
            continuation,
            markers: KeywordTable::new(CYPHER_MARKERS),
            terminator: TERMINATOR,
            mandatory_keyword: MANDATORY_KEYWORD.to_string(),
            language_tag: LANGUAGE_TAG.to_string(),
            prefix_token: LANGUAGE_TAG.to_string(),
        }
    }

    // ==================== Builder Methods ====================

    /// Replace the start keywords.
    ///
    /// The continuation table is not touched; callers swapping dialects
    /// usually replace both.
    pub fn with_start(mut self, start: KeywordTable) -> Self {
        self.start = start;
        self
    }

    pub fn with_continuation(mut self, continuation: KeywordTable) -> Self {
        self.continuation = continuation;
        self
    }

    pub fn with_markers(mut self, markers: KeywordTable) -> Self {
        self.markers = markers;
        self
    }

    pub fn with_terminator(mut self, terminator: char) -> Self {
        self.terminator = terminator;
        self
    }

    pub fn with_mandatory_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.mandatory_keyword = keyword.into().to_uppercase();
        self
    }

    pub fn with_language_tag(mut self, tag: impl Into<String>) -> Self {
        self.language_tag = tag.into();
        self
    }

    pub fn with_prefix_token(mut self, token: impl Into<String>) -> Self {
        self.prefix_token = token.into();
        self
    }

    // ==================== Accessors ====================

    pub fn start(&self) -> &KeywordTable {
        &self.start
    }

    pub fn continuation(&self) -> &KeywordTable {
        &self.continuation
    }

    pub fn markers(&self) -> &KeywordTable {
        &self.markers
    }

    pub fn terminator(&self) -> char {
        self.terminator
    }

    /// Upper-case keyword every accepted statement must contain.
    pub fn mandatory_keyword(&self) -> &str {
        &self.mandatory_keyword
    }

    pub fn language_tag(&self) -> &str {
        &self.language_tag
    }

    pub fn prefix_token(&self) -> &str {
        &self.prefix_token
    }

    /// Whether `text` contains the mandatory keyword anywhere, ignoring case.
    pub fn contains_mandatory_keyword(&self, text: &str) -> bool {
        text.to_uppercase().contains(&self.mandatory_keyword)
    }
}

impl Default for QueryDialect {
    fn default() -> Self {
        Self::cypher()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cypher_tables() {
        let dialect = QueryDialect::cypher();
        assert!(dialect.start().matches("UNWIND $rows AS row"));
        assert!(!dialect.start().matches("WHERE n.x = 1"));
        assert!(dialect.continuation().matches("WHERE n.x = 1"));
        assert!(dialect.continuation().matches("RETURN n"));
        assert!(dialect.continuation().matches("ON MATCH SET n.seen = true"));
        assert!(dialect.markers().matches("Note: this is simple."));
        assert!(dialect.markers().matches("Here's the Cypher query you requested:"));
    }

    #[test]
    fn test_boundary_constants() {
        let dialect = QueryDialect::default();
        assert_eq!(dialect.terminator(), ';');
        assert_eq!(dialect.mandatory_keyword(), "MATCH");
        assert_eq!(dialect.language_tag(), "cypher");
        assert_eq!(dialect.prefix_token(), "cypher");
    }

    #[test]
    fn test_contains_mandatory_keyword() {
        let dialect = QueryDialect::cypher();
        assert!(dialect.contains_mandatory_keyword("optional match (n) return n"));
        assert!(!dialect.contains_mandatory_keyword("I cannot help with that."));
    }

    #[test]
    fn test_custom_dialect() {
        let dialect = QueryDialect::cypher()
            .with_start(KeywordTable::new(["select"]))
            .with_continuation(KeywordTable::new(["select", "from", "where"]))
            .with_mandatory_keyword("select")
            .with_language_tag("sql")
            .with_prefix_token("sql");
        assert!(dialect.start().matches("SELECT * FROM t"));
        assert!(!dialect.start().matches("MATCH (n)"));
        assert_eq!(dialect.mandatory_keyword(), "SELECT");
        assert_eq!(dialect.language_tag(), "sql");
    }
}
