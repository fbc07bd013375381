//! Expression tree produced by the parser

use std::fmt;

use crate::symbol::Operator;

/// A node of the expression tree.
///
/// Leaves are variables and numbers. Every operator node owns both of its
/// operands, so a half-built node cannot exist. An assignment can only
/// appear at the root, and its target is always a bare variable.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Variable reference, resolved against the table at evaluation time
    Variable {
        /// Identifier text
        name: String,
        /// Byte offset of the identifier
        position: usize,
    },

    /// Numeric literal
    Number {
        /// Literal value
        value: f64,
        /// Byte offset of the literal
        position: usize,
    },

    /// Arithmetic operator applied to two operands
    Binary {
        /// Any operator except [`Operator::Assign`]
        op: Operator,
        /// Byte offset of the operator character
        position: usize,
        /// Left operand
        left: Box<Expr>,
        /// Right operand
        right: Box<Expr>,
    },

    /// `name = value`
    Assign {
        /// Target variable name
        name: String,
        /// Byte offset of the target name
        name_position: usize,
        /// Byte offset of the `=`
        position: usize,
        /// Right-hand side
        value: Box<Expr>,
    },
}

impl Expr {
    /// Build an operator node.
    pub fn binary(op: Operator, position: usize, left: Expr, right: Expr) -> Self {
        debug_assert_ne!(op, Operator::Assign);
        Expr::Binary {
            op,
            position,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Source offset this node is anchored at.
    pub fn position(&self) -> usize {
        match self {
            Expr::Variable { position, .. }
            | Expr::Number { position, .. }
            | Expr::Binary { position, .. }
            | Expr::Assign { position, .. } => *position,
        }
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Expr::Variable { .. } | Expr::Number { .. })
    }
}

/// Fully parenthesized rendering, handy for checking associativity.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Variable { name, .. } => write!(f, "{}", name),
            Expr::Number { value, .. } => write!(f, "{}", value),
            Expr::Binary {
                op, left, right, ..
            } => write!(f, "({} {} {})", left, op, right),
            Expr::Assign { name, value, .. } => write!(f, "{} = {}", name, value),
        }
    }
}
