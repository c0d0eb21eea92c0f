//! Console output formatter for queries and failures
//!
//! Text output puts only the query on stdout so it can be piped into a
//! database shell; everything decorative goes through [`ConsoleFormatter`]
//! helpers that the binary writes to stderr.

use colored::Colorize;
use querywright_application::{FailureCause, GeneratedQuery, GenerationFailed};
use querywright_domain::util::truncate_str;
use querywright_domain::{
    ConfigIssue, ExtractedQuery, ExtractionError, ExtractionPath, OutputFormat, Severity,
};
use serde_json::json;

/// Formats query results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a generated query for stdout
    pub fn format_generated(result: &GeneratedQuery, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => result.as_str().to_string(),
            OutputFormat::Json => {
                serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
            }
        }
    }

    /// Format a query cleaned from a raw response for stdout
    pub fn format_cleaned(
        query: &ExtractedQuery,
        path: ExtractionPath,
        format: OutputFormat,
    ) -> String {
        match format {
            OutputFormat::Text => query.as_str().to_string(),
            OutputFormat::Json => serde_json::to_string_pretty(&json!({
                "query": query.as_str(),
                "path": path.as_str(),
            }))
            .unwrap_or_else(|_| "{}".to_string()),
        }
    }

    /// Format a generation failure
    pub fn format_failure(failure: &GenerationFailed, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => serde_json::to_string_pretty(&json!({
                "error": Self::failure_kind(failure),
                "message": failure.cause.to_string(),
                "raw": failure.raw,
            }))
            .unwrap_or_else(|_| "{}".to_string()),
            OutputFormat::Text => {
                let mut output = format!("{} {}", "Error:".red().bold(), failure.cause);
                if let FailureCause::Extraction(_) = failure.cause
                    && let Some(raw) = &failure.raw
                {
                    output.push_str(&format!(
                        "\n{}\n{}",
                        "Model response:".yellow().bold(),
                        truncate_str(raw, 2000).dimmed()
                    ));
                }
                output
            }
        }
    }

    /// Format an extraction failure from `clean`
    pub fn format_extraction_error(error: &ExtractionError, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => serde_json::to_string_pretty(&json!({
                "error": Self::extraction_kind(error),
                "message": error.to_string(),
            }))
            .unwrap_or_else(|_| "{}".to_string()),
            OutputFormat::Text => format!("{} {}", "Error:".red().bold(), error),
        }
    }

    /// Format one configuration issue as a single line
    pub fn format_config_issue(issue: &ConfigIssue) -> String {
        match issue.severity {
            Severity::Error => format!("{} {}", "config error:".red().bold(), issue.message),
            Severity::Warning => format!("{} {}", "config warning:".yellow(), issue.message),
        }
    }

    fn failure_kind(failure: &GenerationFailed) -> &'static str {
        match &failure.cause {
            FailureCause::Gateway(_) if failure.is_timeout() => "timeout",
            FailureCause::Gateway(_) => "gateway",
            FailureCause::Extraction(e) => Self::extraction_kind(e),
        }
    }

    fn extraction_kind(error: &ExtractionError) -> &'static str {
        if error.is_no_query_found() {
            "no_query_found"
        } else {
            "invalid_query"
        }
    }
}
