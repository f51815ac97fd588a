//! The shared data model: closed tagged unions for statements and
//! expressions, plus the source-text reconstruction (`Display`) every
//! node carries. This doubles as the round-trip printer exercised by
//! the operator-precedence tests in `tests/parser.rs` — reparsing a
//! node's `to_string()` always yields a tree whose own `to_string()`
//! is identical, with parenthesization making precedence explicit.

use std::fmt;

use crate::token::Token;

/// A program is an ordered, immutable sequence of statements.
pub type Program = Vec<Stmt>;

/// A statement: something evaluated for its side effect rather than
/// its value. There are exactly two forms in the language.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// A bare expression, evaluated for its value.
    ExpressionStatement(Expr),
    /// `name = expr`. Always binds locally in the current scope; see
    /// the environment's write-isolation semantics.
    Assign { name: Token, value: Expr },
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::ExpressionStatement(expr) => write!(f, "{expr}"),
            Stmt::Assign { name, value } => write!(f, "{} = {value}", name.literal),
        }
    }
}

/// An expression: something that produces a value.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    IntegerLiteral(i64),
    StringLiteral(String),
    ArrayLiteral(Vec<Expr>),
    Identifier(Token),
    Prefix {
        operator: Token,
        right: Box<Expr>,
    },
    Infix {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },
    FunctionLiteral {
        params: Vec<Token>,
        body: Vec<Stmt>,
    },
    FunctionCalling {
        callee: Box<Expr>,
        arguments: Vec<Expr>,
    },
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::IntegerLiteral(value) => write!(f, "{value}"),
            Expr::StringLiteral(value) => write!(f, "{value:?}"),
            Expr::ArrayLiteral(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Expr::Identifier(name) => write!(f, "{}", name.literal),
            Expr::Prefix { operator, right } => write!(f, "({}{right})", operator.literal),
            Expr::Infix { left, operator, right } => {
                write!(f, "({left} {} {right})", operator.literal)
            }
            Expr::FunctionLiteral { params, body } => {
                let params = params.iter().map(|p| p.literal.clone()).collect::<Vec<_>>().join(", ");
                write!(f, "({params}) {{\n")?;
                for stmt in body {
                    write!(f, "\t{stmt}\n")?;
                }
                write!(f, "}}")
            }
            Expr::FunctionCalling { callee, arguments } => {
                let args = arguments.iter().map(|a| a.to_string()).collect::<Vec<_>>().join(", ");
                write!(f, "{callee}({args})")
            }
        }
    }
}
