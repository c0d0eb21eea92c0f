//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for generated queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The bare query, ready to pipe into a database shell
    Text,
    /// JSON object with the query, extraction path and raw response
    Json,
}

impl From<OutputFormat> for querywright_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => querywright_domain::OutputFormat::Text,
            OutputFormat::Json => querywright_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for querywright
#[derive(Parser, Debug)]
#[command(name = "querywright")]
#[command(author, version, about = "Turn questions into Cypher queries with an LLM")]
#[command(long_about = r#"
querywright asks an LLM for a Cypher query and cleans the answer.

Model output often wraps the query in markdown fences, adds an introduction,
or lists alternatives. querywright keeps the first statement, drops the
commentary and ends it with exactly one semicolon.

Configuration files are loaded from (in priority order):
1. QUERYWRIGHT_* environment variables
2. --config <path>              Explicit config file
3. ./querywright.toml           Project-level config
4. ~/.config/querywright/config.toml   Global config

Example:
  querywright generate "Which functions call parse_config?" --project my-repo
  querywright generate -m gpt-4.1 "List all classes"
  pbpaste | querywright clean --validate
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (overrides [output] format)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Ask the configured model for a query and print the cleaned result
    Generate {
        /// Natural-language question
        question: String,

        /// Project id the question is scoped to
        #[arg(short, long, value_name = "ID")]
        project: Option<String>,

        /// Model to use (overrides [generation] model)
        #[arg(short, long, value_name = "MODEL")]
        model: Option<String>,
    },

    /// Clean a raw model response read from FILE or stdin
    Clean {
        /// File holding the raw response (stdin when omitted)
        file: Option<PathBuf>,

        /// Also require the mandatory keyword in the cleaned query
        #[arg(long)]
        validate: bool,

        /// Strip the language prefix when no statement is found
        #[arg(long)]
        strip_prefix: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::parse_from([
            "querywright",
            "generate",
            "count functions",
            "--project",
            "repo-1",
            "-m",
            "gpt-4.1",
            "-vv",
        ]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(
            cli.command,
            Some(Command::Generate {
                question: "count functions".to_string(),
                project: Some("repo-1".to_string()),
                model: Some("gpt-4.1".to_string()),
            })
        );
    }

    #[test]
    fn test_parse_clean_from_stdin() {
        let cli = Cli::parse_from(["querywright", "-o", "json", "clean", "--validate"]);
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(
            cli.command,
            Some(Command::Clean {
                file: None,
                validate: true,
                strip_prefix: false,
            })
        );
    }

    #[test]
    fn test_show_config_without_subcommand() {
        let cli = Cli::parse_from(["querywright", "--show-config"]);
        assert!(cli.show_config);
        assert!(cli.command.is_none());
    }
}
