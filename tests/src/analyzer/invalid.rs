//! Handlers that must be flagged, with the exact message.

use catchlint_ast::nodes::Location;

use super::{throw_or_log, DESTRUCTURED, IGNORED, NOOP_REJECT, NOOP_THROW};
use crate::utils::{assert_invalid, lint, messages};

#[test]
fn concise_body_ignoring_error() {
    assert_invalid(r#"promise.catch(err => "success")"#, &throw_or_log("err"));
}

#[test]
fn destructured_error_in_concise_body() {
    assert_invalid(
        "promise.catch(({message}) => console.error(new Error(message)))",
        DESTRUCTURED,
    );
}

#[test]
fn destructured_error_in_block_body() {
    assert_invalid(
        "promise.catch(({message}) => {
            console.log(1);
            throw new Error(message);
        })",
        DESTRUCTURED,
    );
}

#[test]
fn array_pattern_counts_as_destructuring() {
    assert_invalid("promise.catch(([cause]) => { throw cause; })", DESTRUCTURED);
}

#[test]
fn missing_parameter() {
    assert_invalid(r#"promise.catch(() => "success")"#, IGNORED);
}

#[test]
fn missing_parameter_despite_throw_inside() {
    assert_invalid(
        "promise.catch(() => {
            throw err;
        });",
        IGNORED,
    );
}

#[test]
fn returning_value_without_logging() {
    assert_invalid(
        "promise.catch(function(err) {
            return [1, 2];
        });",
        &throw_or_log("err"),
    );
}

#[test]
fn logging_something_else_in_one_branch() {
    assert_invalid(
        "promise.catch(err => {
            if (isArmaggedon) {
                throw err;
            } else {
                console.error(2);
            }
        });",
        &throw_or_log("err"),
    );
}

#[test]
fn throwing_something_else_in_one_branch() {
    assert_invalid(
        "promise.catch(err => {
            if (isArmaggedon) {
                throw new Error('2');
            } else {
                console.error(err);
            }
        });",
        &throw_or_log("err"),
    );
}

#[test]
fn nested_branch_throwing_something_else() {
    assert_invalid(
        "promise.catch(err => {
            if (isArmaggedon) {
                if (really) {
                    throw 2;
                } else {
                    throw err;
                }
            } else {
                console.error(err);
            }
        });",
        &throw_or_log("err"),
    );
}

#[test]
fn bare_rethrow_is_a_noop() {
    assert_invalid(
        "promise.catch((err) => {
            throw err;
        })",
        NOOP_THROW,
    );
}

#[test]
fn bare_rethrow_hides_later_statements() {
    // Only the head of the body is inspected for the no-op patterns.
    assert_invalid(
        "promise.catch(err => {
            throw err;
            console.error(err);
        })",
        NOOP_THROW,
    );
}

#[test]
fn returned_promise_reject_is_a_noop() {
    assert_invalid(
        "promise.catch(err => {
            return Promise.reject(err);
        })",
        NOOP_REJECT,
    );
}

#[test]
fn concise_promise_reject_is_a_noop() {
    assert_invalid("promise.catch(err => Promise.reject(err))", NOOP_REJECT);
}

#[test]
fn empty_block_body() {
    assert_invalid("promise.catch(err => {})", &throw_or_log("err"));
}

#[test]
fn half_covered_if_without_else() {
    assert_invalid(
        "promise.catch(err => {
            if (fatal) {
                throw err;
            }
        });",
        &throw_or_log("err"),
    );
}

#[test]
fn console_debug_is_not_accepted() {
    assert_invalid(
        "promise.catch(err => {
            console.debug(err);
        });",
        &throw_or_log("err"),
    );
}

#[test]
fn then_rejection_handler_that_swallows() {
    assert_invalid(
        "promise.then(data => use(data), err => {
            notify();
        });",
        &throw_or_log("err"),
    );
}

#[test]
fn message_uses_the_binding_name() {
    assert_invalid("promise.catch(problem => {})", &throw_or_log("problem"));
}

#[test]
fn each_handler_reports_at_most_once() {
    let found = messages(
        "first.catch(err => {});
         second.catch(({message}) => { throw err; });",
    );
    assert_eq!(found, vec![throw_or_log("err"), DESTRUCTURED.to_string()]);
}

#[test]
fn diagnostics_carry_handler_locations() {
    let diagnostics = lint("wait();\npromise.catch(err => {});");
    assert_eq!(diagnostics.len(), 1);
    let Location {
        start_line,
        start_column,
        ..
    } = diagnostics[0].location().clone();
    assert_eq!(start_line, 2);
    assert_eq!(start_column, 15);
}
