use core::fmt;
use std::{
    fmt::{Display, Formatter},
    rc::Rc,
};

use serde::Serialize;

/// Source span of a node, with 1-based lines and columns.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize)]
pub struct Location {
    pub offset_start: u32,
    pub offset_end: u32,
    pub start_line: u32,
    pub start_column: u32,
    pub end_line: u32,
    pub end_column: u32,
}

impl Location {
    #[must_use]
    pub fn new(
        offset_start: u32,
        offset_end: u32,
        start_line: u32,
        start_column: u32,
        end_line: u32,
        end_column: u32,
    ) -> Self {
        Self {
            offset_start,
            offset_end,
            start_line,
            start_column,
            end_line,
            end_column,
        }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.start_line, self.start_column)
    }
}

#[macro_export]
macro_rules! ast_node {
    (
        $(#[$outer:meta])*
        $struct_vis:vis struct $name:ident {
            $(
                $(#[$field_attr:meta])*
                $field_vis:vis $field_name:ident : $field_ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Clone, PartialEq, Eq, Debug)]
        $struct_vis struct $name {
            pub id: u32,
            pub location: $crate::nodes::Location,
            $(
                $(#[$field_attr])*
                $field_vis $field_name : $field_ty,
            )*
        }
    };
}

macro_rules! ast_nodes {
    (
        $(
            $(#[$outer:meta])*
            $struct_vis:vis struct $name:ident { $($fields:tt)* }
        )+
    ) => {
        $(
            ast_node! {
                $(#[$outer])*
                $struct_vis struct $name { $($fields)* }
            }
        )+
    };
}

macro_rules! ast_enum {
    (
        $(#[$outer:meta])*
        $enum_vis:vis enum $name:ident {
            $(
                $(#[$arm_attr:meta])*
                $(@$conv:ident)? $arm:ident $( ( $($tuple:tt)* ) )? $( { $($struct:tt)* } )? ,
            )*
        }
    ) => {
        $(#[$outer])*
        #[derive(Clone, PartialEq, Eq, Debug)]
        $enum_vis enum $name {
            $(
                $(#[$arm_attr])*
                $arm $( ( $($tuple)* ) )? $( { $($struct)* } )? ,
            )*
        }

        impl $name {

            #[must_use]
            pub fn id(&self) -> u32 {
                match self {
                    $(
                        $name::$arm(n, ..) => { ast_enum!(@id_arm n, $($conv)?) }
                    )*
                }
            }

            #[must_use]
            pub fn location(&self) -> Location {
                match self {
                    $(
                        $name::$arm(n, ..) => { ast_enum!(@location_arm n, $($conv)?) }
                    )*
                }
            }
        }
    };

    (@id_arm $inner:ident, inner_enum) => {
        $inner.id()
    };

    (@id_arm $inner:ident, ) => {
        $inner.id
    };

    (@location_arm $inner:ident, inner_enum) => {
        $inner.location()
    };

    (@location_arm $inner:ident, ) => {
        $inner.location.clone()
    };
}

macro_rules! ast_enums {
    (
        $(
            $(#[$outer:meta])*
            $enum_vis:vis enum $name:ident { $($arms:tt)* }
        )+
    ) => {
        $(
            ast_enum! {
                $(#[$outer])*
                $enum_vis enum $name { $($arms)* }
            }
        )+

        #[derive(Clone, PartialEq, Eq, Debug)]
        pub enum AstNode {
            $(
                $name($name),
            )+
        }

        impl AstNode {
            #[must_use]
            pub fn id(&self) -> u32 {
                match self {
                    $(
                        AstNode::$name(node) => node.id(),
                    )+
                }
            }

            #[must_use]
            pub fn location(&self) -> Location {
                match self {
                    $(
                        AstNode::$name(node) => node.location(),
                    )+
                }
            }
        }
    };
}

ast_enums! {

    pub enum Ast {
        SourceFile(Rc<SourceFile>),
    }

    pub enum Statement {
        @inner_enum Expression(Expression),
        Block(Rc<Block>),
        If(Rc<IfStatement>),
        Throw(Rc<ThrowStatement>),
        Return(Rc<ReturnStatement>),
        FunctionDeclaration(Rc<FunctionLiteral>),
        Other(Rc<OtherStatement>),
    }

    pub enum Expression {
        Identifier(Rc<Identifier>),
        Call(Rc<CallExpression>),
        New(Rc<NewExpression>),
        Member(Rc<MemberAccessExpression>),
        Function(Rc<FunctionLiteral>),
        Other(Rc<OtherExpression>),
    }

    pub enum Pattern {
        Identifier(Rc<Identifier>),
        Object(Rc<ObjectPattern>),
        Array(Rc<ArrayPattern>),
    }
}

ast_enum! {
    /// Body of a function literal: a block of statements, or a single
    /// expression for the concise arrow form.
    pub enum FunctionBody {
        Block(Rc<Block>),
        @inner_enum Expression(Expression),
    }
}

ast_nodes! {

    pub struct SourceFile {
        pub statements: Vec<Statement>,
    }

    pub struct Identifier {
        pub name: String,
    }

    pub struct Block {
        pub statements: Vec<Statement>,
    }

    pub struct IfStatement {
        pub condition: Expression,
        pub consequent: Statement,
        pub alternate: Option<Statement>,
    }

    pub struct ThrowStatement {
        pub argument: Expression,
    }

    pub struct ReturnStatement {
        pub argument: Option<Expression>,
    }

    pub struct CallExpression {
        pub callee: Expression,
        pub arguments: Vec<Expression>,
    }

    pub struct NewExpression {
        pub callee: Expression,
        pub arguments: Vec<Expression>,
    }

    pub struct MemberAccessExpression {
        pub object: Expression,
        pub property: Rc<Identifier>,
    }

    /// Arrow function, function expression, or function declaration.
    pub struct FunctionLiteral {
        pub name: Option<Rc<Identifier>>,
        pub parameters: Vec<Pattern>,
        pub body: FunctionBody,
    }

    pub struct ObjectPattern {
    }

    pub struct ArrayPattern {
    }

    /// Statement kind the analysis has no structural model for (loops,
    /// declarations, switch, try). Children are preserved so traversal can
    /// reach handlers registered anywhere inside.
    pub struct OtherStatement {
        pub children: Vec<AstNode>,
    }

    /// Expression kind the analysis has no structural model for. Children
    /// are preserved for traversal.
    pub struct OtherExpression {
        pub children: Vec<AstNode>,
    }

}
