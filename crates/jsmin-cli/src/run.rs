//! File and stream plumbing around the minifier core.
//!
//! The core is a pure `&str -> String` function; everything here is about
//! getting bytes in and out: stdin/stdout filtering, per-file output path
//! derivation, and parallel processing of independent inputs.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info};

use jsmin_lex::{minify, minify_stream};

use crate::error::{CliError, Result};

/// Resolved arguments for one invocation.
#[derive(Debug)]
pub struct RunArgs {
    /// Input files; empty (or a single `-`) means standard input.
    pub files: Vec<PathBuf>,
    /// Output file (single input) or directory (any number of inputs).
    pub output: Option<PathBuf>,
    /// Write minified output to standard output instead of files.
    pub stdout: bool,
}

/// Per-input size accounting, for the summary line.
struct FileStats {
    bytes_in: usize,
    bytes_out: usize,
}

/// Executes the minifier over the configured inputs.
pub fn run(args: RunArgs) -> Result<()> {
    if args.files.is_empty() || (args.files.len() == 1 && args.files[0].as_os_str() == "-") {
        debug!("reading from standard input");
        minify_stream(io::stdin().lock(), io::stdout().lock())?;
        return Ok(());
    }

    validate(&args)?;

    if args.stdout {
        // Sequential so the outputs appear in input order.
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        for path in &args.files {
            let source = read_input(path)?;
            let minified = minify(&source);
            log_stats(path, source.len(), minified.len());
            handle.write_all(minified.as_bytes())?;
        }
        return Ok(());
    }

    // Each input is independent, so files minify in parallel.
    let stats: Vec<FileStats> = args
        .files
        .par_iter()
        .map(|path| minify_file(path, args.output.as_deref()))
        .collect::<Result<_>>()?;

    if stats.len() > 1 {
        let bytes_in: usize = stats.iter().map(|s| s.bytes_in).sum();
        let bytes_out: usize = stats.iter().map(|s| s.bytes_out).sum();
        info!(
            "minified {} files: {} -> {} bytes ({})",
            stats.len(),
            bytes_in,
            bytes_out,
            reduction(bytes_in, bytes_out)
        );
    }

    Ok(())
}

/// Rejects argument combinations that cannot be satisfied.
fn validate(args: &RunArgs) -> Result<()> {
    if let Some(output) = &args.output {
        if args.stdout {
            return Err(CliError::Usage(
                "--stdout cannot be combined with -o".to_string(),
            ));
        }
        if args.files.len() > 1 && !output.is_dir() {
            return Err(CliError::Usage(format!(
                "-o {} must be an existing directory when minifying multiple files",
                output.display()
            )));
        }
    }
    Ok(())
}

/// Minifies a single file to its derived output path.
fn minify_file(path: &Path, output: Option<&Path>) -> Result<FileStats> {
    let source = read_input(path)?;
    let minified = minify(&source);

    let dest = output_path(path, output);
    fs::write(&dest, &minified).map_err(|e| CliError::File {
        path: dest.clone(),
        source: e,
    })?;

    log_stats(path, source.len(), minified.len());
    Ok(FileStats {
        bytes_in: source.len(),
        bytes_out: minified.len(),
    })
}

/// Reads one input file, attaching the path to any failure.
fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| CliError::File {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Derives where the minified output for `input` goes.
///
/// Without `-o` the output lands next to the input as `<stem>.min.js`.
/// An `-o` directory keeps that name inside it; any other `-o` path is
/// used as given (the single-input case).
fn output_path(input: &Path, output: Option<&Path>) -> PathBuf {
    match output {
        None => input.with_extension("min.js"),
        Some(dir) if dir.is_dir() => {
            let name = input
                .file_name()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("out.js"));
            dir.join(name.with_extension("min.js"))
        }
        Some(file) => file.to_path_buf(),
    }
}

fn log_stats(path: &Path, bytes_in: usize, bytes_out: usize) {
    info!(
        "{}: {} -> {} bytes ({})",
        path.display(),
        bytes_in,
        bytes_out,
        reduction(bytes_in, bytes_out)
    );
}

/// Formats the size reduction as a percentage of the input.
fn reduction(bytes_in: usize, bytes_out: usize) -> String {
    if bytes_in == 0 {
        return "0.0%".to_string();
    }
    let saved = bytes_in.saturating_sub(bytes_out) as f64;
    format!("-{:.1}%", 100.0 * saved / bytes_in as f64)
}
