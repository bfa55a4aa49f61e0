//! Common types and utilities for Smithy Extract
//!
//! This crate contains the error type, the extraction configuration, and
//! shape identifier helpers shared by the parser, generator, and CLI.

mod config;
mod ident;

pub use config::ExtractionConfig;
pub use ident::{local_name, namespace_of};

use thiserror::Error;

/// Errors that can occur while loading, resolving, or rendering a model
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;
