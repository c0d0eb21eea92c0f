//! Generation configuration from TOML (`[generation]` section)

use querywright_domain::{ConfigIssue, ConfigIssueCode, Model};
use serde::{Deserialize, Serialize};

/// Raw generation configuration from TOML
///
/// # Example
///
/// ```toml
/// [generation]
/// model = "claude-sonnet-4-5"
/// timeout_secs = 60     # 0 disables the timeout
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    /// Model that writes the query
    pub model: String,
    /// Upper bound on one provider call, in seconds
    pub timeout_secs: u64,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        Self {
            model: Model::default().to_string(),
            timeout_secs: 60,
        }
    }
}

impl FileGenerationConfig {
    /// Parse the model name, reporting an empty one.
    pub fn parse_model(&self) -> (Option<Model>, Vec<ConfigIssue>) {
        if self.model.trim().is_empty() {
            let issue = ConfigIssue::error(
                ConfigIssueCode::EmptyModelName {
                    field: "generation.model".to_string(),
                },
                "generation.model: model name cannot be empty",
            );
            return (None, vec![issue]);
        }
        (Some(Model::from(self.model.as_str())), Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_model() {
        let config = FileGenerationConfig {
            model: "gpt-4.1".to_string(),
            ..Default::default()
        };
        let (model, issues) = config.parse_model();
        assert_eq!(model, Some(Model::Gpt41));
        assert!(issues.is_empty());
    }

    #[test]
    fn test_parse_custom_model() {
        let config = FileGenerationConfig {
            model: "llama3.1:8b".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.parse_model().0,
            Some(Model::Custom("llama3.1:8b".to_string()))
        );
    }

    #[test]
    fn test_empty_model_is_error() {
        let config = FileGenerationConfig {
            model: "  ".to_string(),
            ..Default::default()
        };
        let (model, issues) = config.parse_model();
        assert!(model.is_none());
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
    }
}
