//! Error types for the minifier.
//!
//! Malformed JavaScript is never an error here — the engine produces
//! best-effort output for any input. The only failure path is I/O on the
//! streaming entry point.

use thiserror::Error;

/// Error type for minification over I/O streams.
#[derive(Debug, Error)]
pub enum MinifyError {
    /// Read or write failure on the underlying stream.
    ///
    /// Propagated immediately; partial output already written to the sink
    /// must be discarded by the caller.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for stream minification.
pub type Result<T> = std::result::Result<T, MinifyError>;
