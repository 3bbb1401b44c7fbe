//! Command line argument parsing for the catchlint binary.
//!
//! This module defines the CLI interface using `clap`. The `Cli` struct
//! captures all command line flags and arguments passed to `catchlint`.

use clap::{Parser, ValueEnum};

/// Command line interface definition for the catchlint linter.
///
/// ## Examples
///
/// Lint a file:
/// ```bash
/// catchlint src/api.js
/// ```
///
/// Lint a directory tree with machine-readable output:
/// ```bash
/// catchlint src/ --format json
/// ```
///
/// Accept project logging wrappers in addition to `console`:
/// ```bash
/// catchlint src/ --custom-loggers
/// ```
#[derive(Parser)]
#[command(
    name = "catchlint",
    author,
    version,
    about = "Checks that promise rejection handlers throw or log their error",
    long_about = "catchlint inspects every .catch(handler) and .then(ok, handler) call in the \
given JavaScript files and reports handlers that ignore, destructure, or merely re-raise the \
error, as well as handlers with an execution path that neither rethrows nor logs it."
)]
pub(crate) struct Cli {
    /// Files or directories to lint.
    ///
    /// Directories are walked recursively; `.js`, `.mjs` and `.cjs` files
    /// are linted, everything else is skipped.
    #[clap(required = true)]
    pub(crate) paths: Vec<std::path::PathBuf>,

    /// Path to a JSON options file, e.g. `{"customLoggers": true}`.
    #[clap(long = "config", value_name = "FILE")]
    pub(crate) config: Option<std::path::PathBuf>,

    /// Accept any call that receives the error as a logging call, instead
    /// of only `console.log/info/error/warn`.
    #[clap(long = "custom-loggers", action = clap::ArgAction::SetTrue)]
    pub(crate) custom_loggers: bool,

    /// Output format for diagnostics.
    #[clap(long = "format", value_enum, default_value = "text")]
    pub(crate) format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// One `file:line:col: message` line per finding.
    Text,
    /// A JSON array of findings on stdout.
    Json,
}
