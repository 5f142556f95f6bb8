//! Resume scorer: ATS-style resume compatibility scoring

use clap::Parser;
use log::info;
use resume_scorer::cli::{self, Cli};
use resume_scorer::error::{Result, ResumeScorerError};
use resume_scorer::output::{ConsoleFormatter, JsonFormatter, OutputFormat, OutputFormatter};
use resume_scorer::{ResumeDocument, ScoringEngine};
use std::fs;
use std::process;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let output_format = cli::parse_output_format(&cli.output).map_err(ResumeScorerError::InvalidInput)?;

    info!("Scoring resume snapshot: {}", cli.resume.display());
    let content = fs::read_to_string(&cli.resume)?;
    let resume: ResumeDocument = serde_json::from_str(&content)?;

    let engine = ScoringEngine::new()?;
    let report = engine.score(&resume);

    let output = match output_format {
        OutputFormat::Console => ConsoleFormatter::new(!cli.no_color).format_report(&report)?,
        OutputFormat::Json => JsonFormatter::new(true).format_report(&report)?,
    };
    println!("{}", output);

    Ok(())
}
