//! Keyword tables matched against the start of a trimmed line.

/// An ordered set of leading keywords or phrases (Value Object)
///
/// Matching is ASCII case-insensitive and anchored at the start of the
/// trimmed line. A match must end on a word boundary, so `order` matches
/// `ORDER BY n.name` but not `orders`. Multi-word entries such as
/// `on create` match a single space between words.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeywordTable {
    entries: Vec<String>,
}

impl KeywordTable {
    /// Build a table from a list of keywords.
    ///
    /// Entries are lower-cased and surrounding whitespace is dropped. Empty
    /// entries are ignored.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|e| e.as_ref().trim().to_ascii_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { entries }
    }

    /// Return a new table holding this table's entries followed by `other`'s.
    pub fn extended(&self, other: &KeywordTable) -> Self {
        let mut entries = self.entries.clone();
        for entry in &other.entries {
            if !entries.contains(entry) {
                entries.push(entry.clone());
            }
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return the first entry the line starts with, if any.
    pub fn leading_match(&self, line: &str) -> Option<&str> {
        let line = line.trim_start();
        self.entries
            .iter()
            .find(|entry| starts_with_word(line, entry))
            .map(String::as_str)
    }

    /// Whether the trimmed line starts with any entry.
    pub fn matches(&self, line: &str) -> bool {
        self.leading_match(line).is_some()
    }
}

/// Case-insensitive prefix check ending on a word boundary.
fn starts_with_word(line: &str, word: &str) -> bool {
    let Some(head) = line.get(..word.len()) else {
        return false;
    };
    if !head.eq_ignore_ascii_case(word) {
        return false;
    }
    line[word.len()..]
        .chars()
        .next()
        .is_none_or(|c| !is_word_char(c))
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
