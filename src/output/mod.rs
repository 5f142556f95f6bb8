//! Report rendering module

pub mod formatter;

pub use formatter::{ConsoleFormatter, JsonFormatter, OutputFormatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Console,
    Json,
}
