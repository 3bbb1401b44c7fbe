use std::rc::Rc;

use catchlint::{AnalyzerOptions, Diagnostic};
use catchlint_ast::{builder::Builder, nodes::SourceFile};

/// Parses JavaScript source straight through the builder, panicking on any
/// parse failure.
pub(crate) fn build_ast(source_code: &str) -> Rc<SourceFile> {
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&tree_sitter_javascript::LANGUAGE.into())
        .expect("Error loading JavaScript grammar");
    let tree = parser.parse(source_code, None).unwrap();
    let code = source_code.as_bytes();
    let mut builder = Builder::new();
    builder.add_source_code(tree.root_node(), code);
    builder.build_ast().unwrap()
}

pub(crate) fn lint(source_code: &str) -> Vec<Diagnostic> {
    lint_with(source_code, AnalyzerOptions::default())
}

pub(crate) fn lint_with(source_code: &str, options: AnalyzerOptions) -> Vec<Diagnostic> {
    catchlint::lint(source_code, options).unwrap()
}

/// Diagnostic messages without their location prefix, in source order.
pub(crate) fn messages(source_code: &str) -> Vec<String> {
    lint(source_code)
        .iter()
        .map(Diagnostic::message)
        .collect()
}

#[track_caller]
pub(crate) fn assert_valid(source_code: &str) {
    let found = messages(source_code);
    assert!(found.is_empty(), "expected no diagnostics, found {found:?}");
}

#[track_caller]
pub(crate) fn assert_invalid(source_code: &str, expected_message: &str) {
    let found = messages(source_code);
    assert_eq!(found, vec![expected_message.to_string()]);
}
