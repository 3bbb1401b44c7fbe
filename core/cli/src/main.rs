#![warn(clippy::pedantic)]

//! # catchlint CLI
//!
//! Command line front end for the catchlint analysis.
//!
//! Lints every given `.js`/`.mjs`/`.cjs` file (directories are walked
//! recursively) and prints one line per finding, or a JSON array with
//! `--format json`. Options can come from a JSON config file (`--config`)
//! or from flags; a flag wins over the file.
//!
//! ## Exit codes
//! * 0 – no findings.
//! * 1 – findings reported, or usage / IO / parse failure.
//!
//! ## Example
//! ```bash
//! catchlint src/ --custom-loggers --format json
//! ```

mod parser;

use std::{ffi::OsStr, fs, path::PathBuf, process};

use catchlint::{lint, AnalyzerOptions, Diagnostic};
use clap::Parser;
use parser::{Cli, OutputFormat};
use serde::Serialize;
use walkdir::WalkDir;

const JS_EXTENSIONS: [&str; 3] = ["js", "mjs", "cjs"];

/// Flat diagnostic record for `--format json`.
#[derive(Serialize)]
struct JsonFinding {
    file: String,
    line: u32,
    column: u32,
    code: &'static str,
    message: String,
}

fn main() {
    let args = Cli::parse();

    let options = match load_options(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let files = match collect_files(&args.paths) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let mut findings: Vec<(PathBuf, Diagnostic)> = Vec::new();
    let mut failed = false;
    for file in files {
        let source_code = match fs::read_to_string(&file) {
            Ok(source_code) => source_code,
            Err(e) => {
                eprintln!("Error reading {}: {e}", file.display());
                failed = true;
                continue;
            }
        };
        match lint(&source_code, options) {
            Ok(diagnostics) => {
                findings.extend(diagnostics.into_iter().map(|d| (file.clone(), d)));
            }
            Err(e) => {
                eprintln!("Parse error in {}: {e}", file.display());
                failed = true;
            }
        }
    }

    match args.format {
        OutputFormat::Text => {
            for (file, diagnostic) in &findings {
                println!("{}:{diagnostic}", file.display());
            }
        }
        OutputFormat::Json => {
            let records: Vec<JsonFinding> = findings
                .iter()
                .map(|(file, diagnostic)| JsonFinding {
                    file: file.display().to_string(),
                    line: diagnostic.location().start_line,
                    column: diagnostic.location().start_column,
                    code: diagnostic.code(),
                    message: diagnostic.message(),
                })
                .collect();
            match serde_json::to_string_pretty(&records) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("Error: failed to serialize findings: {e}");
                    process::exit(1);
                }
            }
        }
    }

    if failed || !findings.is_empty() {
        process::exit(1);
    }
    process::exit(0);
}

/// Resolves analyzer options from the config file and flags. The
/// `--custom-loggers` flag turns the option on regardless of the file.
fn load_options(args: &Cli) -> anyhow::Result<AnalyzerOptions> {
    let mut options = match &args.config {
        Some(path) => {
            let content = fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("cannot read config {}: {e}", path.display()))?;
            serde_json::from_str::<AnalyzerOptions>(&content)
                .map_err(|e| anyhow::anyhow!("invalid config {}: {e}", path.display()))?
        }
        None => AnalyzerOptions::default(),
    };
    options.custom_loggers |= args.custom_loggers;
    Ok(options)
}

/// Expands the given paths into the list of JavaScript files to lint, in a
/// stable order. A path that does not exist is an error; a directory with no
/// JavaScript files simply contributes nothing.
fn collect_files(paths: &[PathBuf]) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if !path.exists() {
            return Err(anyhow::anyhow!("path not found: {}", path.display()));
        }
        if path.is_dir() {
            let mut in_dir: Vec<PathBuf> = WalkDir::new(path)
                .into_iter()
                .filter_map(Result::ok)
                .filter(|entry| entry.file_type().is_file())
                .map(walkdir::DirEntry::into_path)
                .filter(|p| is_javascript(p))
                .collect();
            in_dir.sort();
            files.extend(in_dir);
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

fn is_javascript(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|extension| JS_EXTENSIONS.contains(&extension))
}
