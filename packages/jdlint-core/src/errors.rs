//! Error types for jdlint-core
//!
//! Lint problems are never raised as errors; they are collected as
//! diagnostics. `JdlintError` only covers conditions that abort a run.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// Fatal error for a lint run
#[derive(Debug, Error)]
pub enum JdlintError {
    /// IO error while reading a directory or JDex file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Traversal failed part-way through a tree
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Root passed by the caller does not exist
    #[error("Path not found: {}", .0.display())]
    RootNotFound(PathBuf),

    /// Primary root must be a directory
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Ignore pattern could not be compiled
    #[error("Invalid ignore pattern '{pattern}': {reason}")]
    IgnorePattern { pattern: String, reason: String },

    /// Note grammar built from the configured extension did not compile
    #[error("Invalid note grammar: {0}")]
    Grammar(#[from] regex::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl JdlintError {
    pub fn ignore_pattern(pattern: impl Into<String>, reason: impl ToString) -> Self {
        JdlintError::IgnorePattern {
            pattern: pattern.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias for jdlint operations
pub type Result<T> = std::result::Result<T, JdlintError>;
