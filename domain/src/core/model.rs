//! Model value object representing an LLM model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// LLM models that can generate queries (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    // Claude models
    ClaudeSonnet45,
    ClaudeHaiku45,
    ClaudeOpus41,
    // GPT models
    Gpt5,
    Gpt5Mini,
    Gpt41,
    Gpt4oMini,
    // Custom (local models, fine-tunes, proxies)
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::ClaudeSonnet45 => "claude-sonnet-4-5",
            Model::ClaudeHaiku45 => "claude-haiku-4-5",
            Model::ClaudeOpus41 => "claude-opus-4-1",
            Model::Gpt5 => "gpt-5",
            Model::Gpt5Mini => "gpt-5-mini",
            Model::Gpt41 => "gpt-4.1",
            Model::Gpt4oMini => "gpt-4o-mini",
            Model::Custom(s) => s,
        }
    }

    /// Check if this is a Claude model
    ///
    /// Custom identifiers are matched by prefix so dated snapshots
    /// (`claude-3-5-haiku-20241022`) still route to Anthropic.
    pub fn is_claude(&self) -> bool {
        match self {
            Model::ClaudeSonnet45 | Model::ClaudeHaiku45 | Model::ClaudeOpus41 => true,
            Model::Custom(s) => s.starts_with("claude"),
            _ => false,
        }
    }

    /// Check if this is a GPT (or OpenAI reasoning) model
    pub fn is_gpt(&self) -> bool {
        match self {
            Model::Gpt5 | Model::Gpt5Mini | Model::Gpt41 | Model::Gpt4oMini => true,
            Model::Custom(s) => {
                s.starts_with("gpt-")
                    || (s.starts_with('o') && s[1..].starts_with(|c: char| c.is_ascii_digit()))
            }
            _ => false,
        }
    }
}

impl Default for Model {
    /// Returns the default model (Claude Sonnet 4.5)
    fn default() -> Self {
        Model::ClaudeSonnet45
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "claude-sonnet-4-5" => Model::ClaudeSonnet45,
            "claude-haiku-4-5" => Model::ClaudeHaiku45,
            "claude-opus-4-1" => Model::ClaudeOpus41,
            "gpt-5" => Model::Gpt5,
            "gpt-5-mini" => Model::Gpt5Mini,
            "gpt-4.1" => Model::Gpt41,
            "gpt-4o-mini" => Model::Gpt4oMini,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(model) => model,
            Err(never) => match never {},
        }
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Model::from(s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_roundtrip() {
        for model in [Model::ClaudeSonnet45, Model::Gpt41, Model::Gpt4oMini] {
            let parsed: Model = model.to_string().parse().unwrap();
            assert_eq!(model, parsed);
        }
    }

    #[test]
    fn test_custom_model() {
        let model: Model = "qwen2.5-coder:7b".parse().unwrap();
        assert_eq!(model, Model::Custom("qwen2.5-coder:7b".to_string()));
        assert_eq!(model.to_string(), "qwen2.5-coder:7b");
    }

    #[test]
    fn test_model_family_detection() {
        assert!(Model::ClaudeSonnet45.is_claude());
        assert!(Model::Gpt41.is_gpt());
        assert!(!Model::ClaudeSonnet45.is_gpt());
        assert!(Model::from("claude-3-5-haiku-20241022").is_claude());
        assert!(Model::from("o3-mini").is_gpt());
        assert!(!Model::from("ollama-llama3").is_gpt());
        assert!(!Model::from("llama3.1").is_claude());
    }

    #[test]
    fn test_model_default() {
        assert_eq!(Model::default(), Model::ClaudeSonnet45);
    }
}
