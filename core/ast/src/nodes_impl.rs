use std::rc::Rc;

use crate::nodes::{
    Ast, AstNode, Block, CallExpression, Expression, FunctionBody, FunctionLiteral, Identifier,
    IfStatement, MemberAccessExpression, Pattern, SourceFile, Statement,
};

impl SourceFile {
    #[must_use]
    pub fn new(id: u32, location: crate::nodes::Location) -> Self {
        SourceFile {
            id,
            location,
            statements: Vec::new(),
        }
    }
}

impl Statement {
    /// Converts to the node union, unwrapping expression statements so that
    /// an expression used in statement position appears once in a walk.
    #[must_use]
    pub fn to_node(&self) -> AstNode {
        match self {
            Statement::Expression(expression) => AstNode::Expression(expression.clone()),
            other => AstNode::Statement(other.clone()),
        }
    }
}

impl Expression {
    #[must_use]
    pub fn to_node(&self) -> AstNode {
        AstNode::Expression(self.clone())
    }

    #[must_use]
    pub fn as_identifier(&self) -> Option<&Rc<Identifier>> {
        match self {
            Expression::Identifier(identifier) => Some(identifier),
            _ => None,
        }
    }

    /// True for an identifier with the given name.
    #[must_use]
    pub fn is_identifier_named(&self, name: &str) -> bool {
        self.as_identifier().is_some_and(|id| id.name == name)
    }
}

impl FunctionBody {
    #[must_use]
    pub fn to_node(&self) -> AstNode {
        match self {
            FunctionBody::Block(block) => AstNode::Statement(Statement::Block(block.clone())),
            FunctionBody::Expression(expression) => AstNode::Expression(expression.clone()),
        }
    }
}

impl FunctionLiteral {
    /// The error binding position: the first formal parameter, if any.
    #[must_use]
    pub fn first_parameter(&self) -> Option<&Pattern> {
        self.parameters.first()
    }
}

impl AstNode {
    /// True for any function literal, whether it appears in expression or
    /// declaration position. Function literals delimit the analysis scope.
    #[must_use]
    pub fn is_function_literal(&self) -> bool {
        matches!(
            self,
            AstNode::Expression(Expression::Function(_))
                | AstNode::Statement(Statement::FunctionDeclaration(_))
        )
    }

    #[must_use]
    pub fn as_if_statement(&self) -> Option<&Rc<IfStatement>> {
        match self {
            AstNode::Statement(Statement::If(if_statement)) => Some(if_statement),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_call(&self) -> Option<&Rc<CallExpression>> {
        match self {
            AstNode::Expression(Expression::Call(call)) => Some(call),
            _ => None,
        }
    }

    /// Immediate children in source order.
    #[must_use]
    pub fn children(&self) -> Vec<AstNode> {
        match self {
            AstNode::Ast(Ast::SourceFile(source_file)) => {
                source_file.statements.iter().map(Statement::to_node).collect()
            }
            AstNode::Statement(statement) => statement_children(statement),
            AstNode::Expression(expression) => expression_children(expression),
            AstNode::Pattern(_) => Vec::new(),
        }
    }
}

fn statement_children(statement: &Statement) -> Vec<AstNode> {
    match statement {
        // Unreachable when parents convert via `Statement::to_node`, but an
        // expression node answers with its own children either way.
        Statement::Expression(expression) => expression_children(expression),
        Statement::Block(block) => block_children(block),
        Statement::If(if_statement) => {
            let mut children = vec![
                if_statement.condition.to_node(),
                if_statement.consequent.to_node(),
            ];
            if let Some(alternate) = &if_statement.alternate {
                children.push(alternate.to_node());
            }
            children
        }
        Statement::Throw(throw) => vec![throw.argument.to_node()],
        Statement::Return(ret) => ret.argument.iter().map(Expression::to_node).collect(),
        Statement::FunctionDeclaration(function) => function_children(function),
        Statement::Other(other) => other.children.clone(),
    }
}

fn expression_children(expression: &Expression) -> Vec<AstNode> {
    match expression {
        Expression::Identifier(_) => Vec::new(),
        Expression::Call(call) => call_children(&call.callee, &call.arguments),
        Expression::New(new) => call_children(&new.callee, &new.arguments),
        Expression::Member(member) => member_children(member),
        Expression::Function(function) => function_children(function),
        Expression::Other(other) => other.children.clone(),
    }
}

fn block_children(block: &Block) -> Vec<AstNode> {
    block.statements.iter().map(Statement::to_node).collect()
}

fn call_children(callee: &Expression, arguments: &[Expression]) -> Vec<AstNode> {
    let mut children = vec![callee.to_node()];
    children.extend(arguments.iter().map(Expression::to_node));
    children
}

fn member_children(member: &MemberAccessExpression) -> Vec<AstNode> {
    vec![
        member.object.to_node(),
        AstNode::Expression(Expression::Identifier(member.property.clone())),
    ]
}

fn function_children(function: &FunctionLiteral) -> Vec<AstNode> {
    let mut children: Vec<AstNode> = function
        .parameters
        .iter()
        .map(|pattern| AstNode::Pattern(pattern.clone()))
        .collect();
    children.push(function.body.to_node());
    children
}

impl CallExpression {
    /// The member-access property name of the callee, when the callee is a
    /// member access (`promise.catch`, `console.log`).
    #[must_use]
    pub fn callee_property(&self) -> Option<&str> {
        match &self.callee {
            Expression::Member(member) => Some(member.property.name.as_str()),
            _ => None,
        }
    }
}
