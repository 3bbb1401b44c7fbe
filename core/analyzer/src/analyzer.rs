//! Handler discovery and per-handler checking.

use std::rc::Rc;

use catchlint_ast::{
    nodes::{
        Ast, AstNode, CallExpression, Expression, FunctionBody, FunctionLiteral, IfStatement,
        Pattern, SourceFile, Statement,
    },
    walker::{ParentMap, TreeWalker, Walker},
};

use crate::{errors::Diagnostic, matcher, options::AnalyzerOptions, resolver::BranchResolver};

/// Diagnostic sink. The analyzer pushes findings through this seam so
/// callers control collection and ordering.
pub trait Reporter {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl Reporter for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Checks every rejection handler in a source file.
///
/// A rejection handler is the function literal passed to `.catch(handler)`
/// or as the second argument of `.then(onFulfilled, handler)`. Each handler
/// yields at most one diagnostic: binding problems first, then no-op
/// rethrow/re-reject, then path coverage.
pub struct Analyzer<W = Walker> {
    options: AnalyzerOptions,
    walker: W,
}

impl Analyzer<Walker> {
    #[must_use]
    pub fn new(options: AnalyzerOptions) -> Self {
        Self::with_walker(options, Walker)
    }
}

impl<W: TreeWalker> Analyzer<W> {
    pub fn with_walker(options: AnalyzerOptions, walker: W) -> Self {
        Self { options, walker }
    }

    /// Runs the analysis and collects all diagnostics in source order.
    #[must_use]
    pub fn analyze(&self, source_file: &Rc<SourceFile>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        self.analyze_into(source_file, &mut diagnostics);
        diagnostics
    }

    /// Runs the analysis, reporting each diagnostic as it is found.
    pub fn analyze_into(&self, source_file: &Rc<SourceFile>, reporter: &mut dyn Reporter) {
        let root = AstNode::Ast(Ast::SourceFile(source_file.clone()));
        let mut handlers: Vec<Rc<FunctionLiteral>> = Vec::new();
        self.walker.traverse(&root, &mut |node, _parent| {
            if let Some(call) = node.as_call() {
                if let Some(handler) = rejection_handler(call) {
                    handlers.push(handler.clone());
                }
            }
        });
        for handler in &handlers {
            self.check_handler(handler, reporter);
        }
    }

    fn check_handler(&self, handler: &Rc<FunctionLiteral>, reporter: &mut dyn Reporter) {
        let Some(parameter) = handler.first_parameter() else {
            reporter.report(Diagnostic::IgnoredError {
                location: handler.location.clone(),
            });
            return;
        };
        let error = match parameter {
            Pattern::Identifier(identifier) => identifier.clone(),
            Pattern::Object(pattern) => {
                reporter.report(Diagnostic::DestructuredError {
                    location: pattern.location.clone(),
                });
                return;
            }
            Pattern::Array(pattern) => {
                reporter.report(Diagnostic::DestructuredError {
                    location: pattern.location.clone(),
                });
                return;
            }
        };

        // No-op checks look only at the head of the handler.
        match &handler.body {
            FunctionBody::Block(block) => {
                if let Some(first) = block.statements.first() {
                    if let Statement::Throw(throw) = first {
                        if throw.argument.is_identifier_named(&error.name) {
                            reporter.report(Diagnostic::NoopThrow {
                                location: throw.location.clone(),
                            });
                            return;
                        }
                    }
                    if let Statement::Return(ret) = first {
                        if let Some(argument) = &ret.argument {
                            if matcher::is_noop_promise_reject(argument, &error.name) {
                                reporter.report(Diagnostic::NoopReject {
                                    location: argument.location(),
                                });
                                return;
                            }
                        }
                    }
                }
            }
            FunctionBody::Expression(expression) => {
                if matcher::is_noop_promise_reject(expression, &error.name) {
                    reporter.report(Diagnostic::NoopReject {
                        location: expression.location(),
                    });
                    return;
                }
            }
        }

        // Resolution root: the body block, or the whole handler for the
        // concise arrow form so the body expression has a parent to climb to.
        let root = match &handler.body {
            FunctionBody::Block(block) => AstNode::Statement(Statement::Block(block.clone())),
            FunctionBody::Expression(_) => {
                AstNode::Expression(Expression::Function(handler.clone()))
            }
        };
        let root_id = root.id();

        let mut parents = ParentMap::new();
        let mut terminals: Vec<AstNode> = Vec::new();
        let mut branch_points: Vec<Rc<IfStatement>> = Vec::new();
        self.walker.traverse(&root, &mut |node, parent| {
            if let Some(parent) = parent {
                parents.record(node.id(), parent);
            }
            match node {
                AstNode::Statement(Statement::Throw(throw)) => {
                    if matcher::contains_error(&throw.argument, &error.name) {
                        terminals.push(node.clone());
                    }
                }
                AstNode::Expression(Expression::Call(call)) => {
                    if matcher::is_logger(call, &error.name, self.options) {
                        terminals.push(node.clone());
                    }
                }
                AstNode::Statement(Statement::If(if_statement)) => {
                    branch_points.push(if_statement.clone());
                }
                _ => {}
            }
        });

        let mut resolver = BranchResolver::new(root_id);
        for terminal in &terminals {
            if matcher::same_scope(&parents, root_id, terminal.id()) {
                resolver.add_path(&parents, terminal);
            }
        }
        branch_points.retain(|branch| matcher::same_scope(&parents, root_id, branch.id));

        if !resolver.is_valid(&branch_points) {
            reporter.report(Diagnostic::UnhandledPath {
                name: error.name.clone(),
                location: handler.location.clone(),
            });
        }
    }
}

/// The function literal bound as rejection handler by this call, if any.
/// `catch` must receive exactly one argument, `then` exactly two; the
/// handler argument must itself be a function literal.
fn rejection_handler(call: &CallExpression) -> Option<&Rc<FunctionLiteral>> {
    let property = call.callee_property()?;
    let handler = match (property, call.arguments.len()) {
        ("catch", 1) => &call.arguments[0],
        ("then", 2) => &call.arguments[1],
        _ => return None,
    };
    match handler {
        Expression::Function(function) => Some(function),
        _ => None,
    }
}
