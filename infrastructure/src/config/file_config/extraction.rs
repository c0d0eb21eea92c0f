//! Extraction configuration from TOML (`[extraction]` section)

use querywright_domain::{ConfigIssue, ConfigIssueCode, FallbackPolicy};
use serde::{Deserialize, Serialize};

/// Raw extraction configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileExtractionConfig {
    /// "reject" (default) or "strip-prefix"
    pub fallback: String,
}

impl Default for FileExtractionConfig {
    fn default() -> Self {
        Self {
            fallback: FallbackPolicy::default().as_str().to_string(),
        }
    }
}

impl FileExtractionConfig {
    /// Parse the fallback policy; unknown values fall back to the default.
    pub fn parse_fallback(&self) -> (FallbackPolicy, Vec<ConfigIssue>) {
        match self.fallback.parse() {
            Ok(policy) => (policy, Vec::new()),
            Err(_) => {
                let issue = ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "extraction.fallback".to_string(),
                        value: self.fallback.clone(),
                        valid_values: vec!["reject".to_string(), "strip-prefix".to_string()],
                    },
                    format!(
                        "extraction.fallback: unknown value '{}', falling back to 'reject'",
                        self.fallback
                    ),
                );
                (FallbackPolicy::default(), vec![issue])
            }
        }
    }
}
