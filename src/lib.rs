//! Resume scorer library

pub mod cli;
pub mod document;
pub mod error;
pub mod output;
pub mod scoring;

pub use document::ResumeDocument;
pub use error::{Result, ResumeScorerError};
pub use scoring::engine::{ScoreReport, ScoringEngine};
