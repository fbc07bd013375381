//! # Expressio
//!
//! A single-line arithmetic expression interpreter.
//!
//! Each line is either an assignment (`x = 2 * y`) or a bare expression
//! (`x ^ 2 % 7`). Assigned variables live in a table that persists across
//! lines until it is cleared.
//!
//! ## Architecture
//!
//! ```text
//! line → [lexer] → TokenStream → [parser] → Expr → [eval] → Value → Output
//!                                                    ↕
//!                                               Environment
//! ```
//!
//! - **Lexer**: classifies characters into [`Symbol`]s
//! - **Parser**: recursive descent into a binary [`Expr`] tree
//! - **Evaluator**: tree walk over [`Expr`] against the [`Environment`]
//! - **Interpreter**: the session facade a host talks to
//!
//! Every failure is an [`ExpressionError`] pointing at a byte offset of the
//! input line.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod context;
pub mod environment;
pub mod error;
pub mod eval;
pub mod interpreter;
pub mod lexer;
pub mod locale;
pub mod parser;
pub mod symbol;
pub mod value;

// Re-export main types
pub use ast::Expr;
pub use context::EvalContext;
pub use environment::Environment;
pub use error::{ErrorKind, ExpressionError, LanguageParseError, Result};
pub use eval::{eval_expr, Evaluate};
pub use interpreter::Interpreter;
pub use lexer::{tokenize, LexerConfig};
pub use locale::Language;
pub use parser::{parse, parse_with_depth, DEFAULT_MAX_DEPTH};
pub use symbol::{Operator, Symbol, TokenCursor, TokenStream};
pub use value::{Output, Value};

/// Expressio version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
