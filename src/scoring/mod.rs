//! Resume scoring pipeline

pub mod dictionary;
pub mod engine;
pub mod patterns;
pub mod sections;
pub mod text;
