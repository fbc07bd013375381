//! Line-at-a-time interpreter session

use crate::ast::Expr;
use crate::error::Result;
use crate::eval::Evaluate;
use crate::lexer::tokenize;
use crate::locale::Language;
use crate::parser::parse_with_depth;
use crate::symbol::TokenStream;
use crate::{Environment, EvalContext, Output};

/// An interpreter session: one variable table plus its configuration.
///
/// Each call to [`Interpreter::run`] is a complete lex → parse → evaluate
/// pass over a single line. Variables assigned by one line are visible to
/// every later line until [`Interpreter::clear`] is called.
///
/// # Example
///
/// ```
/// use expressio::{ErrorKind, Interpreter};
///
/// let mut interp = Interpreter::new();
///
/// let out = interp.run("a = 5").unwrap();
/// assert_eq!(out.name, "a");
/// assert!(out.is_assignment);
///
/// assert_eq!(interp.run("a + 3").unwrap().value, 8.0);
///
/// interp.clear();
/// assert_eq!(interp.run("a").unwrap_err().kind, ErrorKind::UndefinedVariable);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    env: Environment,
    ctx: EvalContext,
}

impl Interpreter {
    /// Create a session with an empty table and default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with the given context.
    pub fn with_context(ctx: EvalContext) -> Self {
        Self {
            env: Environment::new(),
            ctx,
        }
    }

    /// Evaluate one line.
    ///
    /// The first failure at any stage is returned as-is; later stages do not
    /// run and the variable table is left untouched.
    pub fn run(&mut self, line: &str) -> Result<Output> {
        let tokens = self.tokenize(line)?;
        let tree = parse_with_depth(&tokens, self.ctx.max_depth)?;
        let value = tree.eval(&mut self.env, &self.ctx)?;

        log::debug!("{:?} => {}", line, value);
        Ok(Output::from(value))
    }

    /// Lex a line with this session's settings.
    pub fn tokenize(&self, line: &str) -> Result<TokenStream> {
        tokenize(line, &self.ctx.lexer_config())
    }

    /// Lex and parse a line without evaluating it.
    pub fn parse(&self, line: &str) -> Result<Expr> {
        parse_with_depth(&self.tokenize(line)?, self.ctx.max_depth)
    }

    /// Forget every variable.
    pub fn clear(&mut self) -> &mut Self {
        self.env.clear();
        self
    }

    /// Read access to the variable table.
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// Active language.
    pub fn language(&self) -> Language {
        self.ctx.language
    }

    /// Switch the language used to read numerals on later lines.
    ///
    /// The variable table is kept; callers that want a fresh session on a
    /// language change call [`Interpreter::clear`] themselves.
    pub fn set_language(&mut self, language: Language) -> &mut Self {
        self.ctx.language = language;
        self
    }

    /// Enable or disable per-node evaluation logging.
    pub fn set_trace(&mut self, trace: bool) -> &mut Self {
        self.ctx.trace = trace;
        self
    }
}
