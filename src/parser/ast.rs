//! Abstract Syntax Tree definitions
//!
//! This module defines the AST node types for the Letter language, plus the
//! `Display` impls that re-print a tree in canonical textual form.

use crate::error::SourceLocation;
use std::fmt;

/// Root AST node representing a complete program
///
/// A program is an ordered sequence of top-level statements and owns that
/// sequence exclusively; subtrees are never shared between nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

/// Statement node
///
/// Assignment is a statement, not an expression: it cannot appear nested
/// inside another assignment's value (`a = b = 1` is a syntax error).
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// Assignment: x = expr
    Assignment {
        target: String,
        value: Expr,
        location: SourceLocation,
    },

    /// Bare expression statement
    Expression {
        expr: Expr,
        location: SourceLocation,
    },
}

/// Expression node
///
/// Every variant carries the location of its defining token for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Number literal
    Number {
        value: f64,
        location: SourceLocation,
    },

    /// Variable reference
    Variable {
        name: String,
        location: SourceLocation,
    },

    /// Binary operation
    Binary {
        left: Box<Expr>,
        operator: BinaryOp,
        right: Box<Expr>,
        location: SourceLocation,
    },

    /// Unary negation (the only unary operator in Letter)
    UnaryMinus {
        operand: Box<Expr>,
        location: SourceLocation,
    },

    /// Function call: f(a, b: 2)
    Call {
        callee: String,
        arguments: Vec<Argument>,
        location: SourceLocation,
    },

    /// Parenthesized expression, kept so re-printing preserves the
    /// explicit grouping
    Grouping {
        inner: Box<Expr>,
        location: SourceLocation,
    },
}

/// A call argument with an optional `name:` label
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub label: Option<String>,
    pub value: Expr,
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    /// Get the operator's source symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stmt) in self.statements.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assignment { target, value, .. } => write!(f, "{} = {}", target, value),
            Self::Expression { expr, .. } => write!(f, "{}", expr),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { value, .. } => write!(f, "{}", value),
            Self::Variable { name, .. } => write!(f, "{}", name),
            Self::Binary {
                left,
                operator,
                right,
                ..
            } => write!(f, "{} {} {}", left, operator, right),
            Self::UnaryMinus { operand, .. } => write!(f, "-{}", operand),
            Self::Call {
                callee, arguments, ..
            } => {
                write!(f, "{}(", callee)?;
                for (i, arg) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
            Self::Grouping { inner, .. } => write!(f, "({})", inner),
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref label) = self.label {
            write!(f, "{}: {}", label, self.value)
        } else {
            write!(f, "{}", self.value)
        }
    }
}
