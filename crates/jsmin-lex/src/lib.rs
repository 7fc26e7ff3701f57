//! jsmin-lex - JavaScript source minifier engine
//!
//! This crate provides a single-pass lexer-rewriter that shrinks
//! JavaScript source text by removing comments, collapsing whitespace, and
//! dropping redundant semicolons, without changing what the program means.
//!
//! # Overview
//!
//! The engine never builds a syntax tree. It scans the input once,
//! character by character, copying significant tokens verbatim and
//! deciding locally whether the whitespace between two tokens must survive
//! as a space, as a newline (where a statement boundary relies on it), or
//! not at all. Context-sensitive constructs — regex literals vs. division,
//! strings and templates with escapes, comments, `${}` interpolations —
//! are handled with one token class of lookback.
//!
//! Malformed input is never rejected: the engine produces best-effort
//! output for anything, and only the streaming entry point can fail (on
//! I/O).
//!
//! # Example Usage
//!
//! ```
//! use jsmin_lex::minify;
//!
//! let out = minify("function f() { return 1; }");
//! assert_eq!(out, "function f(){return 1}");
//!
//! // Comments disappear; statement boundaries survive.
//! let out = minify("var x = 1;  // trailing\nvar y = 2;");
//! assert_eq!(out, "var x=1;var y=2;");
//! ```
//!
//! # Module Structure
//!
//! - [`minifier`] - The rewriting state machine
//! - [`cursor`] - Character cursor for source traversal
//! - [`chars`] - Character classifiers and the keyword table
//! - [`token`] - Last-significant-token classification
//! - [`error`] - Error types for the streaming entry point

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod error;
pub mod minifier;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{MinifyError, Result};
pub use minifier::Minifier;
pub use token::TokenClass;

use std::io::{Read, Write};

/// Minifies JavaScript source text.
///
/// Total for any input, malformed or not; the output re-tokenizes to the
/// same token sequence as the input, minus comments and redundant
/// separators.
///
/// # Example
///
/// ```
/// use jsmin_lex::minify;
///
/// assert_eq!(minify("a /*gap*/ + b"), "a+b");
/// assert_eq!(minify("1 - -1"), "1- -1");
/// ```
pub fn minify(source: &str) -> String {
    Minifier::new(source).run()
}

/// Minifies JavaScript from a reader into a writer.
///
/// The input is read to the end before minification starts; the result is
/// written in one piece. Read and write failures (including invalid UTF-8
/// in the input, surfaced by the reader as `InvalidData`) propagate
/// immediately as [`MinifyError::Io`], and any partial output must be
/// discarded by the caller.
///
/// # Example
///
/// ```
/// use jsmin_lex::minify_stream;
///
/// let mut output = Vec::new();
/// minify_stream("var x = 1;".as_bytes(), &mut output).unwrap();
/// assert_eq!(String::from_utf8(output).unwrap(), "var x=1;");
/// ```
pub fn minify_stream<R: Read, W: Write>(mut reader: R, mut writer: W) -> Result<()> {
    let mut source = String::new();
    reader.read_to_string(&mut source)?;
    writer.write_all(minify(&source).as_bytes())?;
    Ok(())
}
