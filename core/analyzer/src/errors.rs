use catchlint_ast::nodes::Location;
use serde::Serialize;
use thiserror::Error;

/// A single finding against a rejection handler, tied to a source location.
///
/// At most one diagnostic is produced per handler; the binding checks win
/// over the no-op checks, which win over path resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum Diagnostic {
    /// The handler takes no parameter, so the error cannot be handled.
    #[error("{location}: You shouldn't ignore error inside catch block.")]
    IgnoredError { location: Location },

    /// The error binding is a destructuring pattern instead of a plain
    /// identifier.
    #[error("{location}: Don't use destructuring in catch block as you might miss some data (e.g. stack traces).")]
    DestructuredError { location: Location },

    /// The handler opens by rethrowing the error verbatim.
    #[error("{location}: Only throwing error inside catch block is no-op.")]
    NoopThrow { location: Location },

    /// The handler opens by returning `Promise.reject` of the error verbatim.
    #[error("{location}: Only rejecting Promise with error inside catch block is no-op.")]
    NoopReject { location: Location },

    /// Some execution path through the handler neither rethrows nor logs
    /// the bound error.
    #[error("{location}: Throw or log {name} inside catch block.")]
    UnhandledPath { name: String, location: Location },
}

impl Diagnostic {
    /// Returns the source location associated with this diagnostic.
    #[must_use]
    pub fn location(&self) -> &Location {
        match self {
            Diagnostic::IgnoredError { location }
            | Diagnostic::DestructuredError { location }
            | Diagnostic::NoopThrow { location }
            | Diagnostic::NoopReject { location }
            | Diagnostic::UnhandledPath { location, .. } => location,
        }
    }

    /// Stable identifier for machine-readable output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Diagnostic::IgnoredError { .. } => "ignored-error",
            Diagnostic::DestructuredError { .. } => "destructured-error",
            Diagnostic::NoopThrow { .. } => "noop-throw",
            Diagnostic::NoopReject { .. } => "noop-reject",
            Diagnostic::UnhandledPath { .. } => "unhandled-path",
        }
    }

    /// The message without the location prefix.
    #[must_use]
    pub fn message(&self) -> String {
        let rendered = self.to_string();
        let prefix = format!("{}: ", self.location());
        rendered
            .strip_prefix(&prefix)
            .map_or(rendered.clone(), ToOwned::to_owned)
    }
}
