//! jsmin CLI - command-line front end for the minifier engine.
//!
//! This is the main entry point for the `jsmin` binary. It uses clap for
//! argument parsing and hands the resolved inputs to the runner, which
//! drives `jsmin_lex` over files or standard streams.

mod error;
mod run;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use error::{CliError, Result};
use run::{run, RunArgs};

/// jsmin - Minify JavaScript source files
///
/// Reads JavaScript from the given files (or standard input) and writes
/// semantically equivalent, smaller JavaScript. Comments are removed,
/// whitespace collapses to the minimum that keeps tokens apart, and
/// semicolons directly before a closing brace are dropped.
#[derive(Parser, Debug)]
#[command(name = "jsmin")]
#[command(author = "JSMin Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Minify JavaScript source files", long_about = None)]
struct Cli {
    /// Input files; reads standard input when none (or "-") is given
    files: Vec<PathBuf>,

    /// Output file (single input) or existing directory (any number of
    /// inputs); defaults to `<input>.min.js` next to each input
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write minified output to standard output instead of files
    #[arg(long)]
    stdout: bool,

    /// Enable verbose output
    #[arg(short, long, env = "JSMIN_VERBOSE")]
    verbose: bool,

    /// Disable color output
    #[arg(long, env = "JSMIN_NO_COLOR")]
    no_color: bool,
}

/// Main entry point for the jsmin CLI.
///
/// Parses command-line arguments, initializes logging, and runs the
/// minifier over the selected inputs.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    run(RunArgs {
        files: cli.files,
        output: cli.output,
        stdout: cli.stdout,
    })?;

    Ok(())
}

/// Initialize the logging system.
///
/// Diagnostics and size statistics go to stderr so they never mix with
/// minified output on stdout.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let layer = fmt::layer()
        .with_ansi(!no_color)
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| CliError::Setup(format!("failed to initialize logging: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["jsmin"]);
        assert!(cli.files.is_empty());
        assert!(cli.output.is_none());
        assert!(!cli.stdout);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_parse_files() {
        let cli = Cli::parse_from(["jsmin", "a.js", "b.js"]);
        assert_eq!(
            cli.files,
            vec![PathBuf::from("a.js"), PathBuf::from("b.js")]
        );
    }

    #[test]
    fn test_cli_parse_output() {
        let cli = Cli::parse_from(["jsmin", "a.js", "-o", "out.js"]);
        assert_eq!(cli.output, Some(PathBuf::from("out.js")));
    }

    #[test]
    fn test_cli_parse_stdout_flag() {
        let cli = Cli::parse_from(["jsmin", "a.js", "--stdout"]);
        assert!(cli.stdout);
    }

    #[test]
    fn test_cli_parse_verbose() {
        let cli = Cli::parse_from(["jsmin", "--verbose", "a.js"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_parse_no_color() {
        let cli = Cli::parse_from(["jsmin", "--no-color"]);
        assert!(cli.no_color);
    }

    #[test]
    fn test_cli_parse_dash_for_stdin() {
        let cli = Cli::parse_from(["jsmin", "-"]);
        assert_eq!(cli.files, vec![PathBuf::from("-")]);
    }
}
