//! Predicates over expressions: error references, logger calls, scope checks.

use catchlint_ast::{
    nodes::{CallExpression, Expression},
    walker::ParentMap,
};

use crate::options::AnalyzerOptions;

const CONSOLE_METHODS: [&str; 4] = ["log", "info", "error", "warn"];

/// True when the expression references the bound error, either directly or
/// wrapped in call/new arguments at any depth (`new Error(err)`,
/// `wrap(format(err))`).
#[must_use]
pub fn contains_error(expression: &Expression, error_name: &str) -> bool {
    match expression {
        Expression::Identifier(identifier) => identifier.name == error_name,
        Expression::Call(call) => call
            .arguments
            .iter()
            .any(|argument| contains_error(argument, error_name)),
        Expression::New(new) => new
            .arguments
            .iter()
            .any(|argument| contains_error(argument, error_name)),
        _ => false,
    }
}

/// True for a call to one of the builtin console methods.
#[must_use]
pub fn is_console_call(call: &CallExpression) -> bool {
    match &call.callee {
        Expression::Member(member) => {
            member.object.is_identifier_named("console")
                && CONSOLE_METHODS.contains(&member.property.name.as_str())
        }
        _ => false,
    }
}

/// True when the call counts as logging the error: an accepted logger callee
/// receiving the error among its (possibly nested) arguments.
///
/// With `custom_loggers` every callee shape is accepted, so any call that
/// forwards the error counts. That is deliberately permissive: callers opting
/// in trade precision for coverage of their own logging wrappers.
#[must_use]
pub fn is_logger(call: &CallExpression, error_name: &str, options: AnalyzerOptions) -> bool {
    let accepted_callee = options.custom_loggers || is_console_call(call);
    accepted_callee
        && call
            .arguments
            .iter()
            .any(|argument| contains_error(argument, error_name))
}

/// True for `Promise.reject(err)` with the error passed verbatim as the only
/// argument.
#[must_use]
pub fn is_noop_promise_reject(expression: &Expression, error_name: &str) -> bool {
    let Expression::Call(call) = expression else {
        return false;
    };
    let Expression::Member(member) = &call.callee else {
        return false;
    };
    member.object.is_identifier_named("Promise")
        && member.property.name == "reject"
        && call.arguments.len() == 1
        && call.arguments[0].is_identifier_named(error_name)
}

/// True when no function literal sits strictly between the node and the
/// analysis root. Nested function literals open a new scope; what happens
/// inside them does not count for the enclosing handler.
#[must_use]
pub fn same_scope(parents: &ParentMap, root_id: u32, id: u32) -> bool {
    for ancestor in parents.ancestors(id) {
        if ancestor.id() == root_id {
            return true;
        }
        if ancestor.is_function_literal() {
            return false;
        }
    }
    true
}
