//! Heuristic line scanner.
//!
//! Locates a statement inside free-form text when no fenced block is
//! available. Every line is classified against the dialect's keyword tables
//! (see [`LineClass`]) and the scanner moves through two states:
//!
//! 1. **Seeking**: the first [`LineClass::QueryStart`] line opens the statement.
//!    A numbered list item (`1. MATCH ...`) is an explanatory step, not a start.
//! 2. **In statement**: lines are consumed until a conversational marker, a
//!    stray fence line, or a blank line whose next non-blank line neither
//!    continues the statement nor is a comment.
//!
//! Only the first statement is returned; later alternatives are ignored.

use crate::core::error::ExtractionError;
use crate::dialect::QueryDialect;

/// Per-line tag derived at scan time. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Opens a statement (`MATCH`, `WITH`, `CALL`, ...).
    QueryStart,
    /// May open a later line of a statement (`WHERE`, `ORDER`, `ON CREATE`, ...).
    QueryContinuation,
    /// Only ever introduces prose (`Note:`, `Here is`, `1.`, ...).
    ConversationalMarker,
    Blank,
    /// Line comment (`//`) or block comment (`/*`).
    Comment,
    /// A markdown fence line (```` ``` ````), never part of a statement.
    Fence,
    Other,
}

impl LineClass {
    /// Whether a line of this class may follow a blank line inside a statement.
    fn resumes_statement(self) -> bool {
        matches!(
            self,
            LineClass::QueryStart | LineClass::QueryContinuation | LineClass::Comment
        )
    }
}

/// Line classifier and boundary finder over one dialect.
#[derive(Debug, Clone, Copy)]
pub struct LineScanner<'d> {
    dialect: &'d QueryDialect,
}

impl<'d> LineScanner<'d> {
    pub fn new(dialect: &'d QueryDialect) -> Self {
        Self { dialect }
    }

    /// Classify a single line.
    ///
    /// A clause keyword written in upper case is query text even when the
    /// same word is a conversational marker: `OR n.age > 30` continues the
    /// statement, `Or fuzzy match:` and `OR, alternatively:` end it.
    pub fn classify(&self, line: &str) -> LineClass {
        let line = line.trim();
        if line.is_empty() {
            return LineClass::Blank;
        }
        if line.starts_with("```") {
            return LineClass::Fence;
        }
        if line.starts_with("//") || line.starts_with("/*") {
            return LineClass::Comment;
        }
        if is_numbered_item(line) {
            return LineClass::ConversationalMarker;
        }
        if let Some(keyword) = self.dialect.continuation().leading_match(line)
            && !line[..keyword.len()].chars().any(char::is_lowercase)
            && !line[keyword.len()..].trim_start().starts_with([',', ':'])
        {
            return self.keyword_class(line);
        }
        if self.dialect.markers().matches(line) {
            return LineClass::ConversationalMarker;
        }
        if self.dialect.start().matches(line) || self.dialect.continuation().matches(line) {
            return self.keyword_class(line);
        }
        LineClass::Other
    }

    fn keyword_class(&self, line: &str) -> LineClass {
        if self.dialect.start().matches(line) {
            LineClass::QueryStart
        } else {
            LineClass::QueryContinuation
        }
    }

    /// Index of the first line that opens a statement.
    pub fn find_start(&self, lines: &[&str]) -> Option<usize> {
        lines
            .iter()
            .position(|line| self.classify(line) == LineClass::QueryStart)
    }

    /// Exclusive end index of the statement opened at `start`.
    ///
    /// A run of blank lines is judged once, by the first non-blank line after
    /// it; when that line does not resume the statement, the end is the first
    /// blank of the run. Trailing blanks are kept (trimmed later).
    pub fn find_end(&self, lines: &[&str], start: usize) -> usize {
        let mut blank_run: Option<usize> = None;
        for (i, line) in lines.iter().enumerate().skip(start + 1) {
            let class = self.classify(line);
            if class == LineClass::Blank {
                blank_run = blank_run.or(Some(i));
                continue;
            }
            if let Some(run_start) = blank_run.take()
                && !class.resumes_statement()
            {
                return run_start;
            }
            if matches!(class, LineClass::ConversationalMarker | LineClass::Fence) {
                return i;
            }
        }
        lines.len()
    }

    /// Extract the first statement from `text`.
    ///
    /// The result is trimmed but not terminated; see
    /// [`normalize`](super::normalize::normalize).
    pub fn scan(&self, text: &str) -> Result<String, ExtractionError> {
        let lines: Vec<&str> = text.split('\n').collect();
        let start = self
            .find_start(&lines)
            .ok_or(ExtractionError::NoQueryFound)?;
        let end = self.find_end(&lines, start);
        Ok(lines[start..end].join("\n").trim().to_string())
    }
}

/// Scan with the Cypher dialect.
pub fn scan(text: &str) -> Result<String, ExtractionError> {
    LineScanner::new(&QueryDialect::cypher()).scan(text)
}

/// A numbered list item: one or more digits followed by a period.
fn is_numbered_item(line: &str) -> bool {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    digits > 0 && line.as_bytes().get(digits) == Some(&b'.')
}
