//! Handlers that deal with their error on every path.

use crate::utils::assert_valid;

#[test]
fn log_then_rethrow() {
    assert_valid(
        "promise.catch(err => {
            console.log(err);
            throw err;
        });",
    );
}

#[test]
fn log_then_return_value() {
    assert_valid(
        "promise.catch(err => {
            console.log(err);
            return [1, 2];
        });",
    );
}

#[test]
fn if_else_covers_both_branches() {
    assert_valid(
        "promise.catch(err => {
            if (isArmaggedon) {
                throw err;
            } else {
                console.error(err);
            }
        });",
    );
}

#[test]
fn nested_ifs_fully_covered() {
    assert_valid(
        "promise.catch(err => {
            if (isArmaggedon) {
                if (really) {
                    console.info(err);
                } else {
                    throw err;
                }
            } else {
                console.error(err);
            }
        });",
    );
}

#[test]
fn else_if_chain_fully_covered() {
    assert_valid(
        "promise.catch(err => {
            if (first) {
                throw err;
            } else if (second) {
                console.warn(err);
            } else {
                console.error(err);
            }
        });",
    );
}

#[test]
fn function_expression_logging() {
    assert_valid(
        "promise.catch(function(error) {
            console.error(error);
        });",
    );
}

#[test]
fn concise_arrow_logging() {
    assert_valid("promise.catch(error => console.error(error));");
}

#[test]
fn rethrow_wrapped_is_not_a_noop() {
    assert_valid(
        "promise.catch(err => {
            throw new Error(err);
        });",
    );
}

#[test]
fn logger_with_leading_context_argument() {
    assert_valid(
        "promise.catch(err => {
            console.error('request failed', err);
        });",
    );
}

#[test]
fn logger_with_nested_error_argument() {
    assert_valid(
        "promise.catch(err => {
            console.warn(describe(err));
        });",
    );
}

#[test]
fn unconditional_log_after_open_branch() {
    assert_valid(
        "promise.catch(err => {
            if (retryable) {
                schedule();
            }
            console.error(err);
        });",
    );
}

#[test]
fn then_rejection_handler_logging() {
    assert_valid(
        "promise.then(data => use(data), err => {
            console.warn(err);
        });",
    );
}

#[test]
fn named_handler_reference_is_not_checked() {
    // Only function literals bound at the call site are analyzed.
    assert_valid("promise.catch(handleError);");
}

#[test]
fn then_with_single_argument_is_not_a_rejection_handler() {
    assert_valid("promise.then(data => use(data));");
}

#[test]
fn catch_with_two_arguments_is_not_a_rejection_handler() {
    assert_valid("promise.catch(recover, err => {});");
}

#[test]
fn non_member_catch_call_is_not_a_rejection_handler() {
    assert_valid("catchAll(err => {});");
}

#[test]
fn rethrow_after_other_statements() {
    assert_valid(
        "promise.catch(err => {
            metrics.bump('failure');
            throw err;
        });",
    );
}
