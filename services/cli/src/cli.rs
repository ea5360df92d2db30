use crate::commands::{self, RequestArgs, TriageArgs};
use clap::{Parser, Subcommand};
use noc_priority::config::{AppConfig, OutputFormat};
use noc_priority::error::AppError;
use noc_priority::telemetry;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "noc-priority",
    about = "Score, explain and triage No Objection Certificate requests",
    version
)]
struct Cli {
    /// Override the configured log level or filter (e.g. "debug")
    #[arg(long, global = true)]
    log_level: Option<String>,
    /// Output format: text or json (defaults to APP_OUTPUT_FORMAT)
    #[arg(long, global = true, value_parser = parse_format)]
    format: Option<OutputFormat>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify a single request
    Score(RequestArgs),
    /// Explain a request's score and suggest improvements
    Analyze(RequestArgs),
    /// Rank the requests in a CSV export for review
    Triage(TriageArgs),
}

fn parse_format(raw: &str) -> Result<OutputFormat, String> {
    OutputFormat::parse(raw).map_err(|_| format!("expected 'text' or 'json', got '{raw}'"))
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;

    if let Some(level) = cli.log_level {
        config.telemetry.log_level = level;
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }

    telemetry::init(&config.telemetry)?;
    debug!(
        environment = ?config.environment,
        format = ?config.output.format,
        "configuration loaded"
    );

    let format = config.output.format;
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Command::Score(args) => commands::score(&args, format, &mut stdout),
        Command::Analyze(args) => commands::analyze(&args, format, &mut stdout),
        Command::Triage(args) => commands::triage(&args, format, &mut stdout),
    }
}
