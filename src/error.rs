//! Error types for rule installation.
//!
//! This module defines [`RulesError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `RulesError` for failures that need a path or rule name in the message
//! - Use `anyhow::Error` (via `RulesError::Other`) for unexpected errors
//! - Every error aborts the run; nothing is retried

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for rule installation.
#[derive(Debug, Error)]
pub enum RulesError {
    /// Rules directory does not exist.
    #[error("Rules directory not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// Failed to read a directory listing or a rule file.
    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create the destination or write a rule into it.
    #[error("Failed to write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A rule file's front matter could not be parsed.
    #[error("Invalid metadata in {path}: {message}")]
    MetadataParse { path: PathBuf, message: String },

    /// A selected rule is not among the available rule files.
    #[error("Unknown rule: {name}")]
    UnknownRule { name: String },

    /// A prompt was needed but no answer is available without a terminal.
    #[error("{message}")]
    NonInteractive { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for rule installation.
pub type Result<T> = std::result::Result<T, RulesError>;
