//! AST builder that converts tree-sitter concrete syntax trees (CST) into
//! typed AST nodes.
//!
//! The `Builder` processes a tree-sitter parse tree of a JavaScript source
//! file and constructs the typed AST the analyzer operates on. It handles:
//!
//! - Converting CST nodes to typed AST nodes
//! - Assigning unique sequential IDs to each node
//! - Collecting syntax errors from malformed input
//! - Extracting source location information
//!
//! Only the constructs the analysis models (blocks, if/else, throw, return,
//! functions, calls, member access, identifiers, destructuring patterns) get
//! dedicated node types. Every other construct becomes an "other" node that
//! keeps its children, so rejection handlers registered inside loops,
//! declarations or template literals are still reachable by traversal.
//!
//! # Example
//!
//! ```no_run
//! use catchlint_ast::builder::Builder;
//! use tree_sitter::Parser;
//!
//! let source = r#"promise.catch(err => { throw err; });"#;
//! let mut parser = Parser::new();
//! parser.set_language(&tree_sitter_javascript::LANGUAGE.into()).unwrap();
//! let tree = parser.parse(source, None).unwrap();
//!
//! let mut builder = Builder::new();
//! builder.add_source_code(tree.root_node(), source.as_bytes());
//! let ast = builder.build_ast().unwrap();
//! ```
//!
//! # Node ID Assignment
//!
//! Node IDs are assigned sequentially starting from 1 using an atomic
//! counter, so IDs stay unique across every tree built in one process and
//! parent tables for different handlers can never collide. Zero is reserved
//! for invalid nodes.

use std::{
    rc::Rc,
    sync::atomic::{AtomicU32, Ordering},
};

use tree_sitter::Node;

use crate::{
    errors::AstError,
    nodes::{
        ArrayPattern, Block, CallExpression, Expression, FunctionBody, FunctionLiteral,
        Identifier, IfStatement, Location, MemberAccessExpression, NewExpression, ObjectPattern,
        OtherExpression, OtherStatement, Pattern, ReturnStatement, SourceFile, Statement,
        ThrowStatement,
    },
};

static NEXT_NODE_ID: AtomicU32 = AtomicU32::new(1);

pub struct Builder<'a> {
    source_code: Option<(Node<'a>, &'a [u8])>,
    errors: Vec<AstError>,
}

impl Default for Builder<'_> {
    fn default() -> Self {
        Builder::new()
    }
}

impl<'a> Builder<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            source_code: None,
            errors: Vec::new(),
        }
    }

    /// Adds a source file and its CST root to the builder.
    ///
    /// # Panics
    ///
    /// Panics if the `root` node is not of type `program`.
    pub fn add_source_code(&mut self, root: Node<'a>, code: &'a [u8]) {
        assert!(
            root.kind() == "program",
            "Expected a root node of type `program`"
        );
        self.source_code = Some((root, code));
    }

    /// Builds the typed AST from the root node and source code.
    ///
    /// # Errors
    ///
    /// Returns an error if no source was added or the parse tree contains
    /// syntax errors; the individual errors are printed to stderr first.
    pub fn build_ast(&mut self) -> anyhow::Result<Rc<SourceFile>> {
        let Some((root, code)) = self.source_code else {
            return Err(anyhow::anyhow!("no source code added to the builder"));
        };

        self.collect_errors(&root, code);

        let id = next_node_id();
        let location = get_location(&root);
        let mut source_file = SourceFile::new(id, location);
        let mut cursor = root.walk();
        for child in root.named_children(&mut cursor) {
            if child.kind() == "comment" {
                continue;
            }
            let statement = self.build_statement(&child, code);
            source_file.statements.push(statement);
        }

        if !self.errors.is_empty() {
            for err in &self.errors {
                eprintln!("AST Builder Error: {err}");
            }
            return Err(anyhow::anyhow!("AST building failed due to errors"));
        }
        Ok(Rc::new(source_file))
    }

    fn collect_errors(&mut self, node: &Node, code: &[u8]) {
        if node.is_error() || node.is_missing() {
            self.errors.push(AstError::SyntaxError {
                location: get_location(node),
                snippet: snippet(node, code),
            });
            return;
        }
        if !node.has_error() {
            return;
        }
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.collect_errors(&child, code);
        }
    }

    fn build_statement(&mut self, node: &Node, code: &[u8]) -> Statement {
        match node.kind() {
            "expression_statement" => match first_named_child(node) {
                Some(child) => Statement::Expression(self.build_expression(&child, code)),
                None => Statement::Other(self.build_other_statement(node, code)),
            },
            "statement_block" => Statement::Block(self.build_block(node, code)),
            "if_statement" => Statement::If(self.build_if_statement(node, code)),
            "throw_statement" => {
                let id = next_node_id();
                let location = get_location(node);
                let argument = match first_named_child(node) {
                    Some(child) => self.build_expression(&child, code),
                    None => self.missing_expression(node),
                };
                Statement::Throw(Rc::new(ThrowStatement {
                    id,
                    location,
                    argument,
                }))
            }
            "return_statement" => {
                let id = next_node_id();
                let location = get_location(node);
                let argument =
                    first_named_child(node).map(|child| self.build_expression(&child, code));
                Statement::Return(Rc::new(ReturnStatement {
                    id,
                    location,
                    argument,
                }))
            }
            "function_declaration" | "generator_function_declaration" => {
                Statement::FunctionDeclaration(self.build_function(node, code))
            }
            _ => Statement::Other(self.build_other_statement(node, code)),
        }
    }

    fn build_if_statement(&mut self, node: &Node, code: &[u8]) -> Rc<IfStatement> {
        let id = next_node_id();
        let location = get_location(node);
        let condition = match node.child_by_field_name("condition") {
            Some(condition) => self.build_expression(&condition, code),
            None => self.missing_expression(node),
        };
        let consequent = match node.child_by_field_name("consequence") {
            Some(consequence) => self.build_statement(&consequence, code),
            None => Statement::Other(self.build_other_statement(node, code)),
        };
        // The `alternative` field is an else clause wrapping the actual
        // statement; `else if` chains show up as a nested if statement here.
        let alternate = node
            .child_by_field_name("alternative")
            .and_then(|else_clause| first_named_child(&else_clause))
            .map(|statement| self.build_statement(&statement, code));
        Rc::new(IfStatement {
            id,
            location,
            condition,
            consequent,
            alternate,
        })
    }

    fn build_block(&mut self, node: &Node, code: &[u8]) -> Rc<Block> {
        let id = next_node_id();
        let location = get_location(node);
        let mut statements = Vec::new();
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if child.kind() == "comment" {
                continue;
            }
            statements.push(self.build_statement(&child, code));
        }
        Rc::new(Block {
            id,
            location,
            statements,
        })
    }

    fn build_expression(&mut self, node: &Node, code: &[u8]) -> Expression {
        match node.kind() {
            "identifier" | "property_identifier" | "private_property_identifier"
            | "shorthand_property_identifier" => {
                Expression::Identifier(self.build_identifier(node, code))
            }
            "call_expression" => {
                let id = next_node_id();
                let location = get_location(node);
                let callee = match node.child_by_field_name("function") {
                    Some(function) => self.build_expression(&function, code),
                    None => self.missing_expression(node),
                };
                let arguments = match node.child_by_field_name("arguments") {
                    Some(arguments) => self.build_arguments(&arguments, code),
                    None => Vec::new(),
                };
                Expression::Call(Rc::new(CallExpression {
                    id,
                    location,
                    callee,
                    arguments,
                }))
            }
            "new_expression" => {
                let id = next_node_id();
                let location = get_location(node);
                let callee = match node.child_by_field_name("constructor") {
                    Some(constructor) => self.build_expression(&constructor, code),
                    None => self.missing_expression(node),
                };
                let arguments = match node.child_by_field_name("arguments") {
                    Some(arguments) => self.build_arguments(&arguments, code),
                    None => Vec::new(),
                };
                Expression::New(Rc::new(NewExpression {
                    id,
                    location,
                    callee,
                    arguments,
                }))
            }
            "member_expression" => {
                let id = next_node_id();
                let location = get_location(node);
                let object = match node.child_by_field_name("object") {
                    Some(object) => self.build_expression(&object, code),
                    None => self.missing_expression(node),
                };
                match node.child_by_field_name("property") {
                    Some(property) => Expression::Member(Rc::new(MemberAccessExpression {
                        id,
                        location,
                        object,
                        property: self.build_identifier(&property, code),
                    })),
                    None => Expression::Other(Rc::new(OtherExpression {
                        id,
                        location,
                        children: vec![object.to_node()],
                    })),
                }
            }
            "arrow_function" | "function_expression" | "function" | "generator_function" => {
                Expression::Function(self.build_function(node, code))
            }
            "parenthesized_expression" => match first_named_child(node) {
                Some(inner) => self.build_expression(&inner, code),
                None => self.missing_expression(node),
            },
            _ => {
                let id = next_node_id();
                let location = get_location(node);
                let children = self.build_child_nodes(node, code);
                Expression::Other(Rc::new(OtherExpression {
                    id,
                    location,
                    children,
                }))
            }
        }
    }

    fn build_arguments(&mut self, node: &Node, code: &[u8]) -> Vec<Expression> {
        // A tagged template call carries a template string instead of an
        // argument list; treat it as a single opaque argument.
        if node.kind() != "arguments" {
            return vec![self.build_expression(node, code)];
        }
        let mut arguments = Vec::new();
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if child.kind() == "comment" {
                continue;
            }
            arguments.push(self.build_expression(&child, code));
        }
        arguments
    }

    fn build_function(&mut self, node: &Node, code: &[u8]) -> Rc<FunctionLiteral> {
        let id = next_node_id();
        let location = get_location(node);
        let name = node
            .child_by_field_name("name")
            .map(|name| self.build_identifier(&name, code));
        let parameters = if let Some(parameters) = node.child_by_field_name("parameters") {
            let mut cursor = parameters.walk();
            parameters
                .named_children(&mut cursor)
                .filter_map(|child| self.build_pattern(&child, code))
                .collect()
        } else if let Some(parameter) = node.child_by_field_name("parameter") {
            // Bare single-parameter arrow form: `err => ...`
            self.build_pattern(&parameter, code).into_iter().collect()
        } else {
            Vec::new()
        };
        let body = match node.child_by_field_name("body") {
            Some(body) if body.kind() == "statement_block" => {
                FunctionBody::Block(self.build_block(&body, code))
            }
            Some(body) => FunctionBody::Expression(self.build_expression(&body, code)),
            None => FunctionBody::Block(Rc::new(Block {
                id: next_node_id(),
                location: get_location(node),
                statements: Vec::new(),
            })),
        };
        Rc::new(FunctionLiteral {
            id,
            location,
            name,
            parameters,
            body,
        })
    }

    fn build_pattern(&mut self, node: &Node, code: &[u8]) -> Option<Pattern> {
        match node.kind() {
            "identifier" => Some(Pattern::Identifier(self.build_identifier(node, code))),
            "object_pattern" => Some(Pattern::Object(Rc::new(ObjectPattern {
                id: next_node_id(),
                location: get_location(node),
            }))),
            "array_pattern" => Some(Pattern::Array(Rc::new(ArrayPattern {
                id: next_node_id(),
                location: get_location(node),
            }))),
            "assignment_pattern" => {
                let left = node.child_by_field_name("left")?;
                self.build_pattern(&left, code)
            }
            "rest_pattern" => {
                let inner = first_named_child(node)?;
                self.build_pattern(&inner, code)
            }
            _ => None,
        }
    }

    fn build_other_statement(&mut self, node: &Node, code: &[u8]) -> Rc<OtherStatement> {
        let id = next_node_id();
        let location = get_location(node);
        let children = self.build_child_nodes(node, code);
        Rc::new(OtherStatement {
            id,
            location,
            children,
        })
    }

    fn build_child_nodes(&mut self, node: &Node, code: &[u8]) -> Vec<crate::nodes::AstNode> {
        let mut children = Vec::new();
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if child.kind() == "comment" {
                continue;
            }
            children.push(self.build_node(&child, code));
        }
        children
    }

    fn build_node(&mut self, node: &Node, code: &[u8]) -> crate::nodes::AstNode {
        match node.kind() {
            "expression_statement" | "statement_block" | "if_statement" | "throw_statement"
            | "return_statement" | "function_declaration" | "generator_function_declaration" => {
                self.build_statement(node, code).to_node()
            }
            kind if kind.ends_with("_statement") || kind.ends_with("_declaration") => {
                self.build_statement(node, code).to_node()
            }
            _ => self.build_expression(node, code).to_node(),
        }
    }

    fn build_identifier(&mut self, node: &Node, code: &[u8]) -> Rc<Identifier> {
        let id = next_node_id();
        let location = get_location(node);
        let name = node.utf8_text(code).unwrap_or_default().to_string();
        Rc::new(Identifier { id, location, name })
    }

    /// Placeholder for a child the grammar guarantees but the tree lacks
    /// (only reachable on malformed input, which also records a syntax
    /// error and fails the build).
    fn missing_expression(&mut self, node: &Node) -> Expression {
        Expression::Other(Rc::new(OtherExpression {
            id: next_node_id(),
            location: get_location(node),
            children: Vec::new(),
        }))
    }
}

fn next_node_id() -> u32 {
    NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed)
}

fn first_named_child<'t>(node: &Node<'t>) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let result = node
        .named_children(&mut cursor)
        .find(|child| child.kind() != "comment");
    result
}

fn get_location(node: &Node) -> Location {
    let start = node.start_position();
    let end = node.end_position();
    Location::new(
        to_u32(node.start_byte()),
        to_u32(node.end_byte()),
        to_u32(start.row) + 1,
        to_u32(start.column) + 1,
        to_u32(end.row) + 1,
        to_u32(end.column) + 1,
    )
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

fn snippet(node: &Node, code: &[u8]) -> String {
    let text = node.utf8_text(code).unwrap_or_default();
    let mut short: String = text.chars().take(32).collect();
    if short.len() < text.len() {
        short.push('…');
    }
    short
}
