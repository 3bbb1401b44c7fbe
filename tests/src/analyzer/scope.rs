//! Scope boundaries: nested function literals open a new scope, so what
//! happens inside them does not count for the enclosing handler.

use super::throw_or_log;
use crate::utils::{assert_invalid, assert_valid, messages};

#[test]
fn logging_inside_a_callback_does_not_count() {
    assert_invalid(
        "promise.catch(err => {
            setTimeout(() => {
                console.error(err);
            }, 0);
        });",
        &throw_or_log("err"),
    );
}

#[test]
fn throwing_inside_a_function_expression_does_not_count() {
    assert_invalid(
        "promise.catch(err => {
            respond(function() {
                throw err;
            });
        });",
        &throw_or_log("err"),
    );
}

#[test]
fn nested_function_declaration_does_not_count() {
    assert_invalid(
        "promise.catch(err => {
            function later() {
                console.error(err);
            }
            later();
        });",
        &throw_or_log("err"),
    );
}

#[test]
fn branches_inside_nested_functions_are_not_required() {
    assert_valid(
        "promise.catch(err => {
            console.error(err);
            const retry = () => {
                if (shouldRetry) {
                    schedule();
                }
            };
            retry();
        });",
    );
}

#[test]
fn nested_handlers_are_checked_independently() {
    let found = messages(
        "outer.catch(err => {
            console.error(err);
            inner.catch(cause => {});
        });",
    );
    assert_eq!(found, vec![throw_or_log("cause")]);
}

#[test]
fn outer_handler_is_not_saved_by_inner_handler() {
    let found = messages(
        "outer.catch(err => {
            inner.catch(cause => {
                console.error(cause);
            });
        });",
    );
    assert_eq!(found, vec![throw_or_log("err")]);
}

#[test]
fn handler_inside_other_constructs_is_found() {
    assert_invalid(
        "async function run() {
            for (const task of tasks) {
                task.run().catch(err => {});
            }
        }",
        &throw_or_log("err"),
    );
}
