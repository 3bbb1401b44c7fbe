mod invalid;
mod options;
mod scope;
mod valid;

pub(crate) const IGNORED: &str = "You shouldn't ignore error inside catch block.";
pub(crate) const DESTRUCTURED: &str =
    "Don't use destructuring in catch block as you might miss some data (e.g. stack traces).";
pub(crate) const NOOP_THROW: &str = "Only throwing error inside catch block is no-op.";
pub(crate) const NOOP_REJECT: &str = "Only rejecting Promise with error inside catch block is no-op.";

pub(crate) fn throw_or_log(name: &str) -> String {
    format!("Throw or log {name} inside catch block.")
}
