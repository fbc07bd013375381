//! Recursive-descent parser
//!
//! ```text
//! definition := Variable '=' expression EndOfInput
//! expression := term (('+' | '-') term)*
//! term       := unary (('*' | '/' | '%') unary)*
//! unary      := '-' unary | factor
//! factor     := literal ('^' literal)*
//! literal    := Variable | Number | '(' expression ')'
//! ```
//!
//! Every binary level folds to the left, `^` included, so `2^3^2` is
//! `(2^3)^2`.

use crate::ast::Expr;
use crate::error::{ExpressionError, Result};
use crate::symbol::{Operator, Symbol, TokenCursor, TokenStream};

/// Deepest tree, and deepest parenthesis nesting, accepted by [`parse`].
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Parse a token sequence into an expression tree.
///
/// The assignment form is tried first. If it fails anywhere, parsing
/// restarts from the first token as a bare expression that must consume
/// everything up to the end marker; that second attempt's error is the one
/// reported.
///
/// # Example
///
/// ```
/// use expressio::lexer::{tokenize, LexerConfig};
/// use expressio::parser::parse;
///
/// let tokens = tokenize("1 + 2 * 3", &LexerConfig::default()).unwrap();
/// let tree = parse(&tokens).unwrap();
/// assert_eq!(tree.to_string(), "(1 + (2 * 3))");
/// ```
pub fn parse(tokens: &TokenStream) -> Result<Expr> {
    parse_with_depth(tokens, DEFAULT_MAX_DEPTH)
}

/// Parse with an explicit bound on tree height and parenthesis nesting.
///
/// Each operator adds one level above its deeper operand, and each `(`
/// adds one level of nesting. Input that would exceed `max_depth` on either
/// count is rejected with `InvalidExpression` at the token that crosses the
/// limit, so the tree handed to the evaluator is never deeper than
/// `max_depth`.
pub fn parse_with_depth(tokens: &TokenStream, max_depth: usize) -> Result<Expr> {
    let mut parser = Parser::new(tokens, max_depth);

    match parser.definition() {
        Ok(tree) => return Ok(tree),
        Err(err) => log::trace!("not a definition ({}), retrying as expression", err),
    }

    parser.cursor.reset();
    let (tree, _) = parser.expression()?;

    let next = parser.cursor.peek();
    if !next.is_end() {
        return Err(ExpressionError::invalid_expression(next.position()));
    }

    Ok(tree)
}

/// A subtree and its height (a leaf is 1).
type Node = (Expr, usize);

struct Parser<'a> {
    cursor: TokenCursor<'a>,
    max_depth: usize,
    nesting: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a TokenStream, max_depth: usize) -> Self {
        Self {
            cursor: tokens.cursor(),
            max_depth,
            nesting: 0,
        }
    }

    fn definition(&mut self) -> Result<Expr> {
        let (name, name_position) = match self.cursor.peek() {
            Symbol::Variable { name, position } => (name.clone(), *position),
            other => return Err(ExpressionError::invalid_expression(other.position())),
        };
        self.cursor.advance();

        let position = match self.cursor.peek() {
            Symbol::Operator {
                op: Operator::Assign,
                position,
            } => *position,
            other => return Err(ExpressionError::invalid_expression(other.position())),
        };
        self.cursor.advance();

        let (value, _) = self.expression()?;

        let next = self.cursor.peek();
        if !next.is_end() {
            return Err(ExpressionError::invalid_expression(next.position()));
        }

        Ok(Expr::Assign {
            name,
            name_position,
            position,
            value: Box::new(value),
        })
    }

    fn expression(&mut self) -> Result<Node> {
        self.fold_left(&[Operator::Add, Operator::Sub], Self::term)
    }

    fn term(&mut self) -> Result<Node> {
        self.fold_left(&[Operator::Mul, Operator::Div, Operator::Mod], Self::unary)
    }

    /// Leading minus signs, each desugared to `0 - operand` so the tree
    /// stays binary.
    fn unary(&mut self) -> Result<Node> {
        let mut signs = Vec::new();
        while let Symbol::Operator {
            op: Operator::Sub,
            position,
        } = self.cursor.peek()
        {
            if signs.len() == self.max_depth {
                return Err(ExpressionError::invalid_expression(*position));
            }
            signs.push(*position);
            self.cursor.advance();
        }

        let (mut tree, mut height) = self.factor()?;

        for position in signs.into_iter().rev() {
            height = self.deepen(height, position)?;
            let zero = Expr::Number {
                value: 0.0,
                position,
            };
            tree = Expr::binary(Operator::Sub, position, zero, tree);
        }

        Ok((tree, height))
    }

    fn factor(&mut self) -> Result<Node> {
        self.fold_left(&[Operator::Pow], Self::literal)
    }

    fn literal(&mut self) -> Result<Node> {
        match self.cursor.peek() {
            Symbol::Variable { name, position } => {
                let leaf = Expr::Variable {
                    name: name.clone(),
                    position: *position,
                };
                self.cursor.advance();
                Ok((leaf, 1))
            }
            Symbol::Number { value, position } => {
                let leaf = Expr::Number {
                    value: *value,
                    position: *position,
                };
                self.cursor.advance();
                Ok((leaf, 1))
            }
            Symbol::LParen { position } => {
                if self.nesting == self.max_depth {
                    return Err(ExpressionError::invalid_expression(*position));
                }
                self.cursor.advance();

                self.nesting += 1;
                let inner = self.expression();
                self.nesting -= 1;
                let inner = inner?;

                match self.cursor.peek() {
                    Symbol::RParen { .. } => {
                        self.cursor.advance();
                        Ok(inner)
                    }
                    other => Err(ExpressionError::invalid_expression(other.position())),
                }
            }
            other => Err(ExpressionError::invalid_expression(other.position())),
        }
    }

    /// `operand (op operand)*`, where each new node takes the tree built so
    /// far as its left child.
    fn fold_left(
        &mut self,
        ops: &[Operator],
        mut operand: impl FnMut(&mut Self) -> Result<Node>,
    ) -> Result<Node> {
        let (mut tree, mut height) = operand(self)?;

        loop {
            let next = self.cursor.peek();
            let op = match next.operator() {
                Some(op) if ops.contains(&op) => op,
                _ => break,
            };
            let position = next.position();
            self.cursor.advance();
            let (right, right_height) = operand(self)?;
            height = self.deepen(height.max(right_height), position)?;
            tree = Expr::binary(op, position, tree, right);
        }

        Ok((tree, height))
    }

    /// Height of a new node over a child of `height`, anchored at
    /// `position`.
    fn deepen(&self, height: usize, position: usize) -> Result<usize> {
        if height >= self.max_depth {
            return Err(ExpressionError::invalid_expression(position));
        }
        Ok(height + 1)
    }
}
