//! CLI entrypoint for querywright
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use querywright_application::{
    GenerateQueryUseCase, GenerationFailed, GenerationLogger, GenerationProgress,
    NoGenerationLogger, NoProgress,
};
use querywright_domain::extraction::validate_for;
use querywright_domain::{
    FallbackPolicy, GenerationRequest, Model, OutputFormat, PromptStyle, ResponseCleaner,
};
use querywright_infrastructure::{
    AnthropicAdapter, ConfigLoader, FileConfig, HttpTransport, JsonlGenerationLogger,
    OpenAiAdapter, ProviderAdapter, RoutingGateway,
};
use querywright_presentation::{
    Cli, Command, ConsoleFormatter, OutputConfig, ProgressReporter, SimpleProgress,
};
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Exit code when the model answered but no usable query came out of it.
const EXIT_EXTRACTION: u8 = 2;
/// Exit code when the provider call itself failed.
const EXIT_GATEWAY: u8 = 3;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return ExitCode::SUCCESS;
    }

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Could not load configuration")?
    };

    let _log_guard = init_logging(cli.verbose, config.logging.file.as_deref())?;
    info!("Starting querywright");

    let output = OutputConfig::resolve(
        &cli,
        config.output.format,
        config.output.color_enabled(),
    );
    output.apply_color();

    for issue in config.validate() {
        eprintln!("{}", ConsoleFormatter::format_config_issue(&issue));
    }

    match cli.command.clone() {
        Some(Command::Generate {
            question,
            project,
            model,
        }) => generate(&config, &output, question, project, model).await,
        Some(Command::Clean {
            file,
            validate,
            strip_prefix,
        }) => clean(&config, &output, file, validate, strip_prefix),
        None => {
            eprintln!("No command given. Try `querywright --help`.");
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Install the tracing subscriber; `-v` count picks the level.
///
/// With `[logging] file` set, diagnostics go to that file through a
/// non-blocking writer instead of stderr. The returned guard flushes it.
fn init_logging(verbose: u8, file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let Some(path) = file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let name = path
        .file_name()
        .with_context(|| format!("Log file path has no file name: {}", path.display()))?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Could not create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(Some(guard))
}

async fn generate(
    config: &FileConfig,
    output: &OutputConfig,
    question: String,
    project: Option<String>,
    model: Option<String>,
) -> Result<ExitCode> {
    let mut request = GenerationRequest::try_new(question)?;
    if let Some(project) = project {
        request = request.with_scope(project);
    }

    let mut params = config.to_generation_params();
    if let Some(name) = model.filter(|m| !m.trim().is_empty()) {
        params = params.with_model(Model::from(name.as_str()));
    }

    // === Dependency Injection ===
    let provider_config = config.providers.to_provider_config();
    let transport = Arc::new(HttpTransport::new(provider_config.retry)?);

    let mut providers: Vec<Arc<dyn ProviderAdapter>> = Vec::new();
    if let Some(adapter) = AnthropicAdapter::try_new(&provider_config.anthropic, transport.clone())
    {
        providers.push(Arc::new(adapter));
    }
    if let Some(adapter) = OpenAiAdapter::try_openai(&provider_config.openai, transport.clone()) {
        providers.push(Arc::new(adapter));
    }
    providers.push(Arc::new(OpenAiAdapter::ollama(
        &provider_config.ollama,
        transport,
    )));

    let gateway = RoutingGateway::new(providers, &provider_config);
    let provider = gateway.provider_for(&params.model);
    info!(
        "Model {} routed to {}",
        params.model,
        provider.map(|p| p.as_str()).unwrap_or("nothing")
    );
    if provider.is_some_and(|p| p.is_local()) {
        params = params.with_prompt_style(PromptStyle::Local);
    }

    let progress: Arc<dyn GenerationProgress> = if !output.show_progress {
        Arc::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Arc::new(ProgressReporter::new(params.model.as_str()))
    } else {
        Arc::new(SimpleProgress)
    };

    let logger: Arc<dyn GenerationLogger> = match &config.logging.generation_log {
        Some(path) => match JsonlGenerationLogger::open(path) {
            Some(logger) => Arc::new(logger),
            None => {
                warn!("Generation log disabled");
                Arc::new(NoGenerationLogger)
            }
        },
        None => Arc::new(NoGenerationLogger),
    };

    let use_case = GenerateQueryUseCase::new(Arc::new(gateway), params)
        .with_progress(progress)
        .with_generation_logger(logger);

    match use_case.execute(&request).await {
        Ok(result) => {
            println!(
                "{}",
                ConsoleFormatter::format_generated(&result, output.format)
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(failure) => {
            report_failure(&failure, output);
            let code = if failure.is_gateway_failure() {
                EXIT_GATEWAY
            } else {
                EXIT_EXTRACTION
            };
            Ok(ExitCode::from(code))
        }
    }
}

fn report_failure(failure: &GenerationFailed, output: &OutputConfig) {
    emit_error(
        &ConsoleFormatter::format_failure(failure, output.format),
        output.format,
    );
}

/// JSON errors go to stdout for the consumer; text errors to stderr.
fn emit_error(text: &str, format: OutputFormat) {
    match format {
        OutputFormat::Json => println!("{}", text),
        OutputFormat::Text => eprintln!("{}", text),
    }
}

fn clean(
    config: &FileConfig,
    output: &OutputConfig,
    file: Option<PathBuf>,
    validate: bool,
    strip_prefix: bool,
) -> Result<ExitCode> {
    let raw = match &file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Could not read stdin")?;
            buf
        }
    };

    let fallback = if strip_prefix {
        FallbackPolicy::StripPrefix
    } else {
        config.extraction.parse_fallback().0
    };
    let cleaner = ResponseCleaner::default().with_fallback(fallback);

    let result = cleaner.clean_with_path(&raw).and_then(|(query, path)| {
        if validate {
            validate_for(query, cleaner.dialect()).map(|query| (query, path))
        } else {
            Ok((query, path))
        }
    });

    match result {
        Ok((query, path)) => {
            println!(
                "{}",
                ConsoleFormatter::format_cleaned(&query, path, output.format)
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            emit_error(
                &ConsoleFormatter::format_extraction_error(&error, output.format),
                output.format,
            );
            Ok(ExitCode::from(EXIT_EXTRACTION))
        }
    }
}
