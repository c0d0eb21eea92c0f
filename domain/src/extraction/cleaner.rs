//! Response cleaning: picks the extraction path and applies fallbacks.
//!
//! Order of attempts:
//!
//! 1. A fenced block, if present ([`extract_fenced`]).
//! 2. The line scanner over the whole response ([`LineScanner`]).
//! 3. The last-resort prefix strip, only under [`FallbackPolicy::StripPrefix`].
//!
//! Every accepted candidate is normalized. Validation is left to the caller.

use super::fenced::extract_fenced;
use super::normalize::normalize_for;
use super::query::ExtractedQuery;
use super::scanner::LineScanner;
use crate::core::error::{DomainError, ExtractionError};
use crate::dialect::QueryDialect;
use serde::{Deserialize, Serialize};

/// What happens when neither a fence nor the line scanner finds a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FallbackPolicy {
    /// Fail with [`ExtractionError::NoQueryFound`].
    #[default]
    Reject,
    /// Strip the backend prefix token and accept the rest verbatim.
    StripPrefix,
}

impl FallbackPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            FallbackPolicy::Reject => "reject",
            FallbackPolicy::StripPrefix => "strip-prefix",
        }
    }
}

impl std::fmt::Display for FallbackPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FallbackPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reject" => Ok(FallbackPolicy::Reject),
            "strip-prefix" | "strip_prefix" | "lenient" => Ok(FallbackPolicy::StripPrefix),
            other => Err(DomainError::UnknownFallbackPolicy(other.to_string())),
        }
    }
}

/// Which extraction path produced a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionPath {
    Fenced,
    Scanned,
    Fallback,
}

impl ExtractionPath {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionPath::Fenced => "fenced",
            ExtractionPath::Scanned => "scanned",
            ExtractionPath::Fallback => "fallback",
        }
    }
}

/// Dispatcher over the extraction paths for one dialect.
#[derive(Debug, Clone, Default)]
pub struct ResponseCleaner {
    dialect: QueryDialect,
    fallback: FallbackPolicy,
}

impl ResponseCleaner {
    pub fn new(dialect: QueryDialect) -> Self {
        Self {
            dialect,
            fallback: FallbackPolicy::default(),
        }
    }

    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn dialect(&self) -> &QueryDialect {
        &self.dialect
    }

    pub fn fallback(&self) -> FallbackPolicy {
        self.fallback
    }

    /// Clean a raw response into one normalized statement.
    pub fn clean(&self, raw: &str) -> Result<ExtractedQuery, ExtractionError> {
        self.clean_with_path(raw).map(|(query, _)| query)
    }

    /// Like [`clean`](Self::clean), also reporting the path taken.
    pub fn clean_with_path(
        &self,
        raw: &str,
    ) -> Result<(ExtractedQuery, ExtractionPath), ExtractionError> {
        if let Some(candidate) = extract_fenced(raw, &self.dialect) {
            return Ok((
                normalize_for(&candidate, &self.dialect),
                ExtractionPath::Fenced,
            ));
        }

        match LineScanner::new(&self.dialect).scan(raw) {
            Ok(candidate) => Ok((
                normalize_for(&candidate, &self.dialect),
                ExtractionPath::Scanned,
            )),
            Err(error) => match self.fallback {
                FallbackPolicy::Reject => Err(error),
                FallbackPolicy::StripPrefix => Ok((
                    normalize_for(self.strip_prefix(raw), &self.dialect),
                    ExtractionPath::Fallback,
                )),
            },
        }
    }

    fn strip_prefix<'a>(&self, raw: &'a str) -> &'a str {
        let text = raw.trim();
        let token = self.dialect.prefix_token();
        match text.get(..token.len()) {
            Some(head) if !token.is_empty() && head.eq_ignore_ascii_case(token) => {
                text[token.len()..].trim()
            }
            _ => text,
        }
    }
}

/// Clean with the Cypher dialect and the default fallback policy.
pub fn clean(raw: &str) -> Result<ExtractedQuery, ExtractionError> {
    ResponseCleaner::default().clean(raw)
}
