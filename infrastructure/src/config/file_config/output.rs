//! Output configuration from TOML (`[output]` section)

use querywright_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// `[output]` section: how results are printed.
///
/// `format` stays `None` unless set, so a `-o` flag can tell "not configured"
/// apart from an explicit `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    pub format: Option<OutputFormat>,
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

impl FileOutputConfig {
    /// Color is on when configured and `NO_COLOR` is unset.
    pub fn color_enabled(&self) -> bool {
        self.color && std::env::var_os("NO_COLOR").is_none_or(|v| v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_format_from_toml() {
        let config: super::super::FileConfig =
            toml::from_str("[output]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(config.output.color);
    }

    #[test]
    fn test_color_disabled_in_file() {
        let config = FileOutputConfig {
            format: None,
            color: false,
        };
        assert!(!config.color_enabled());
    }
}
