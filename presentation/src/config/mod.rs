//! Presentation-level configuration
//!
//! Resolves how results are shown from CLI flags and the `[output]` section.

use crate::cli::commands::Cli;
use querywright_domain::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Show the progress spinner
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
            show_progress: true,
        }
    }
}

impl OutputConfig {
    /// CLI flags win over the file's `[output]` values.
    pub fn resolve(cli: &Cli, file_format: Option<OutputFormat>, file_color: bool) -> Self {
        let format = cli
            .output
            .map(OutputFormat::from)
            .or(file_format)
            .unwrap_or_default();
        Self {
            format,
            color: file_color,
            // JSON consumers read stdout; keep stderr quiet as well.
            show_progress: !cli.quiet && format == OutputFormat::Text,
        }
    }

    /// Apply the color setting to all `colored` output in this process.
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_output_overrides_file() {
        let cli = Cli::parse_from(["querywright", "-o", "json", "clean"]);
        let config = OutputConfig::resolve(&cli, Some(OutputFormat::Text), true);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.show_progress);
    }

    #[test]
    fn test_file_format_used_without_flag() {
        let cli = Cli::parse_from(["querywright", "clean"]);
        let config = OutputConfig::resolve(&cli, Some(OutputFormat::Json), false);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.color);
    }

    #[test]
    fn test_quiet_hides_progress() {
        let cli = Cli::parse_from(["querywright", "-q", "generate", "q"]);
        let config = OutputConfig::resolve(&cli, None, true);
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.show_progress);
    }
}
