#![warn(clippy::pedantic)]
//! Entry points for the catchlint pipeline.
//!
//! catchlint checks JavaScript promise rejection handlers: the function
//! passed to `.catch(handler)` or as the second argument of
//! `.then(onFulfilled, handler)`. Every execution path through a handler
//! must rethrow the bound error or pass it to a logger; handlers that
//! ignore, destructure, or merely re-raise the error are flagged.
//!
//! ```text
//! .js source → tree-sitter → typed AST → analyzer → diagnostics
//! ```
//!
//! ## Quick start
//!
//! ```rust
//! use catchlint::{lint, AnalyzerOptions};
//!
//! let source = r#"fetchUser().catch(err => { console.error(err); });"#;
//! let diagnostics = lint(source, AnalyzerOptions::default())?;
//! assert!(diagnostics.is_empty());
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! The phases are also exposed separately: [`parse`] builds the typed AST
//! and [`analyze`] runs the handler checks over it, which lets callers
//! reuse one parse across option sets or inspect the tree themselves.

use std::rc::Rc;

use anyhow::Context;
use catchlint_ast::{builder::Builder, errors::AstError, nodes::SourceFile};
use tree_sitter::Parser;

pub use catchlint_analyzer::{Analyzer, AnalyzerOptions, Diagnostic, Reporter};

/// Parses JavaScript source into the typed AST.
///
/// # Errors
///
/// Returns an error when the grammar cannot be loaded or the source does
/// not parse cleanly; syntax errors are reported to stderr by the builder.
pub fn parse(source_code: &str) -> anyhow::Result<Rc<SourceFile>> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_javascript::LANGUAGE.into())
        .context("failed to load JavaScript grammar")?;
    let tree = parser.parse(source_code, None).ok_or(AstError::ParseError)?;

    let mut builder = Builder::new();
    builder.add_source_code(tree.root_node(), source_code.as_bytes());
    builder.build_ast()
}

/// Checks every rejection handler in the file, in source order.
#[must_use]
pub fn analyze(source_file: &Rc<SourceFile>, options: AnalyzerOptions) -> Vec<Diagnostic> {
    Analyzer::new(options).analyze(source_file)
}

/// Parses and analyzes in one step.
///
/// # Errors
///
/// Returns an error when parsing fails; analysis itself cannot fail, its
/// findings are the returned diagnostics.
pub fn lint(source_code: &str, options: AnalyzerOptions) -> anyhow::Result<Vec<Diagnostic>> {
    let source_file = parse(source_code)?;
    Ok(analyze(&source_file, options))
}
