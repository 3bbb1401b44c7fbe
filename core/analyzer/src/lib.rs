#![warn(clippy::pedantic)]
//! Analysis of promise rejection handlers.
//!
//! The analyzer inspects every `.catch(handler)` and `.then(ok, handler)`
//! call in a source file and verifies that the handler deals with the error
//! it is given: on every execution path the error must either be rethrown or
//! passed to a logger. Handlers that ignore the error, destructure it, or
//! merely rethrow/re-reject it without adding anything are flagged too.
//!
//! Entry point is [`Analyzer::analyze`], which returns the list of
//! [`Diagnostic`]s for a parsed source file.

pub mod analyzer;
pub mod errors;
pub mod matcher;
pub mod options;
pub mod resolver;

pub use analyzer::{Analyzer, Reporter};
pub use errors::Diagnostic;
pub use options::AnalyzerOptions;
