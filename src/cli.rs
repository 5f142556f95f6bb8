//! CLI interface for the resume scorer

use crate::output::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-scorer")]
#[command(about = "ATS-style resume compatibility scoring")]
#[command(
    long_about = "Score a resume snapshot the way an applicant tracking system would: \
                  weighted rubric sections, keyword coverage, and quantified-achievement checks"
)]
pub struct Cli {
    /// Path to the resume snapshot (JSON)
    pub resume: PathBuf,

    /// Output format: console, json
    #[arg(short, long, default_value = "console")]
    pub output: String,

    /// Disable colored console output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json",
            format
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(parse_output_format("console").unwrap(), OutputFormat::Console);
        assert_eq!(parse_output_format("JSON").unwrap(), OutputFormat::Json);
        assert!(parse_output_format("pdf").is_err());
    }
}
