//! Error handling module for the jsmin CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the jsmin CLI application.
///
/// This enum represents all possible errors that can occur while running
/// the minifier over files or streams.
#[derive(Error, Debug)]
pub enum CliError {
    /// Error when the combination of command-line arguments is invalid.
    #[error("Usage error: {0}")]
    Usage(String),

    /// Error while setting up the process (logging, etc.).
    #[error("Setup error: {0}")]
    Setup(String),

    /// Error when reading or writing a named file fails.
    #[error("{path}: {source}")]
    File {
        /// The file that could not be read or written.
        path: PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },

    /// Error when minifying a stream fails.
    #[error(transparent)]
    Minify(#[from] jsmin_lex::MinifyError),

    /// Error when IO operations on the standard streams fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using CliError.
pub type Result<T> = std::result::Result<T, CliError>;
