//! End to end tests for the catchlint workspace.

#[cfg(test)]
mod analyzer;
#[cfg(test)]
mod utils;
