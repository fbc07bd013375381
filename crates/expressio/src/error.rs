//! Error types for Expressio evaluation

use thiserror::Error;

/// The four ways a line can fail to evaluate.
///
/// Every stage of the pipeline reports through this taxonomy: the lexer
/// raises `UnknownSymbol` (and `InvalidExpression` for malformed numerals),
/// the parser raises `InvalidExpression`, and the evaluator raises
/// `UndefinedVariable` and `DivisionByZero`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A character outside the supported alphabet
    #[error("unknown symbol")]
    UnknownSymbol,

    /// The grammar was violated at a token
    #[error("invalid expression")]
    InvalidExpression,

    /// A variable was read before it was ever assigned
    #[error("undefined variable")]
    UndefinedVariable,

    /// The right operand of `/` evaluated to zero
    #[error("division by zero")]
    DivisionByZero,
}

/// A failure paired with the byte offset it points at.
///
/// The position is a zero-based offset into the source line, suitable for
/// drawing a caret under the offending character.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("{kind} at position {position}")]
pub struct ExpressionError {
    /// What went wrong
    pub kind: ErrorKind,

    /// Where it went wrong
    pub position: usize,
}

impl ExpressionError {
    /// Create an error of the given kind at `position`.
    pub fn new(kind: ErrorKind, position: usize) -> Self {
        Self { kind, position }
    }

    /// Shorthand for an `UnknownSymbol` error.
    pub fn unknown_symbol(position: usize) -> Self {
        Self::new(ErrorKind::UnknownSymbol, position)
    }

    /// Shorthand for an `InvalidExpression` error.
    pub fn invalid_expression(position: usize) -> Self {
        Self::new(ErrorKind::InvalidExpression, position)
    }

    /// Shorthand for an `UndefinedVariable` error.
    pub fn undefined_variable(position: usize) -> Self {
        Self::new(ErrorKind::UndefinedVariable, position)
    }

    /// Shorthand for a `DivisionByZero` error.
    pub fn division_by_zero(position: usize) -> Self {
        Self::new(ErrorKind::DivisionByZero, position)
    }
}

/// Returned when a language name is not recognized.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown language `{0}` (expected `en` or `pt`)")]
pub struct LanguageParseError(pub String);

/// Result type alias for Expressio operations
pub type Result<T> = std::result::Result<T, ExpressionError>;
