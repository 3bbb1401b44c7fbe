//! Behavior of the `customLoggers` option.

use catchlint::AnalyzerOptions;

use super::{throw_or_log, NOOP_THROW};
use crate::utils::{assert_invalid, lint_with};

const CUSTOM: AnalyzerOptions = AnalyzerOptions {
    custom_loggers: true,
};

#[track_caller]
fn assert_valid_with(source_code: &str, options: AnalyzerOptions) {
    let found = lint_with(source_code, options);
    assert!(found.is_empty(), "expected no diagnostics, found {found:?}");
}

#[test]
fn wrapper_logger_rejected_by_default() {
    assert_invalid("promise.catch(err => logger.capture(err));", &throw_or_log("err"));
}

#[test]
fn wrapper_logger_accepted_when_enabled() {
    assert_valid_with("promise.catch(err => logger.capture(err));", CUSTOM);
}

#[test]
fn bare_function_logger_accepted_when_enabled() {
    assert_valid_with(
        "promise.catch(err => {
            report(err);
        });",
        CUSTOM,
    );
}

#[test]
fn any_forwarding_call_counts_when_enabled() {
    // The option accepts every callee shape, so even a call that clearly
    // does not log passes as long as it receives the error.
    assert_valid_with("promise.catch(err => ignore(err));", CUSTOM);
}

#[test]
fn custom_logger_still_needs_the_error_argument() {
    let found = lint_with("promise.catch(err => track('boom'));", CUSTOM);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].message(), throw_or_log("err"));
}

#[test]
fn noop_checks_still_apply() {
    let found = lint_with(
        "promise.catch(err => {
            throw err;
        });",
        CUSTOM,
    );
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].message(), NOOP_THROW);
}

#[test]
fn branch_coverage_still_applies() {
    let found = lint_with(
        "promise.catch(err => {
            if (fatal) {
                record(err);
            }
        });",
        CUSTOM,
    );
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].message(), throw_or_log("err"));
}
