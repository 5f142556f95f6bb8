//! Report formatters for console and JSON output

use crate::error::Result;
use crate::output::OutputFormat;
use crate::scoring::engine::ScoreReport;
use colored::{Color, Colorize};

/// Trait for rendering score reports
pub trait OutputFormatter {
    fn format_report(&self, report: &ScoreReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and a score badge
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON formatter for piping into other tools
pub struct JsonFormatter {
    pretty: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let (badge, color) = match score {
            90..=100 => ("EXCELLENT", Color::Green),
            80..=89 => ("VERY GOOD", Color::BrightGreen),
            70..=79 => ("GOOD", Color::Yellow),
            60..=69 => ("FAIR", Color::BrightYellow),
            50..=59 => ("BELOW AVG", Color::Red),
            _ => ("POOR", Color::BrightRed),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_bucket(&self, output: &mut String, title: &str, entries: &[String], color: Color) {
        if entries.is_empty() {
            return;
        }

        output.push_str(&format!("{}\n", self.colorize(title, color)));
        for entry in entries {
            output.push_str(&format!("  • {}\n", entry));
        }
        output.push('\n');
    }
}

impl Default for ConsoleFormatter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ScoreReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.colorize("RESUME COMPATIBILITY REPORT", Color::Blue));
        output.push('\n');
        output.push_str(&format!(
            "Generated: {}\n\n",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        ));

        output.push_str(&format!(
            "Overall Score: {}/100 {}\n\n",
            report.score,
            self.format_score_badge(report.score)
        ));

        self.format_bucket(&mut output, "Critical", &report.feedback.critical, Color::Red);
        self.format_bucket(
            &mut output,
            "Improvements",
            &report.feedback.improvements,
            Color::Yellow,
        );
        self.format_bucket(&mut output, "Looking good", &report.feedback.good, Color::Green);

        output.push_str(&format!(
            "Keywords: {} | Metrics: {} | Action verbs: {}\n",
            report.details.keywords_found,
            report.details.metrics_found,
            report.details.action_verbs_found
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ScoreReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ResumeDocument;
    use crate::scoring::engine::ScoringEngine;

    fn sample_report() -> ScoreReport {
        let engine = ScoringEngine::new().unwrap();
        engine.score(&ResumeDocument::default())
    }

    #[test]
    fn test_console_formatter_without_colors() {
        let formatter = ConsoleFormatter::new(false);
        let output = formatter.format_report(&sample_report()).unwrap();

        assert!(output.contains("Overall Score: 0/100 [POOR]"));
        assert!(output.contains("Critical"));
        assert!(output.contains("Improvements"));
        assert!(!output.contains("Looking good"));
    }

    #[test]
    fn test_json_formatter_round_trips() {
        let report = sample_report();
        let formatter = JsonFormatter::new(false);
        let output = formatter.format_report(&report).unwrap();

        let parsed: ScoreReport = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, report);
    }
}
