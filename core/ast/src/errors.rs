//! Error types for the AST crate.

use thiserror::Error;

use crate::nodes::Location;

/// Errors that can occur while turning tree-sitter output into the typed AST.
#[derive(Debug, Error)]
#[must_use = "errors must not be silently ignored"]
pub enum AstError {
    /// tree-sitter did not produce a tree for the source.
    #[error("failed to parse JavaScript source")]
    ParseError,

    /// The parse tree contains an ERROR or MISSING node.
    #[error("{location}: syntax error near `{snippet}`")]
    SyntaxError { location: Location, snippet: String },
}
