//! Lexical and syntactic units
//!
//! A [`Symbol`] is both what the lexer emits and what the expression tree
//! stores at its nodes. Every symbol remembers the byte offset where it was
//! scanned so that errors can point back into the source line.

use std::fmt;

/// Binary operators, in no particular precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `=`
    Assign,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
    /// `%`
    Mod,
}

impl Operator {
    /// Map a source character to its operator, if it is one.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '=' => Some(Operator::Assign),
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            '^' => Some(Operator::Pow),
            '%' => Some(Operator::Mod),
            _ => None,
        }
    }

    /// The character this operator is spelled with.
    pub fn as_char(self) -> char {
        match self {
            Operator::Assign => '=',
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Pow => '^',
            Operator::Mod => '%',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A classified unit of source text.
#[derive(Debug, Clone, PartialEq)]
pub enum Symbol {
    /// An identifier; its value is resolved at evaluation time
    Variable {
        /// Identifier text
        name: String,
        /// Byte offset of the first character
        position: usize,
    },

    /// A numeric literal
    Number {
        /// Parsed value
        value: f64,
        /// Byte offset of the first digit
        position: usize,
    },

    /// One of the binary operators
    Operator {
        /// Which operator
        op: Operator,
        /// Byte offset of the operator character
        position: usize,
    },

    /// `(`
    LParen {
        /// Byte offset
        position: usize,
    },

    /// `)`
    RParen {
        /// Byte offset
        position: usize,
    },

    /// End of the source line
    EndOfInput {
        /// Byte length of the line
        position: usize,
    },
}

impl Symbol {
    /// Source offset of this symbol.
    pub fn position(&self) -> usize {
        match self {
            Symbol::Variable { position, .. }
            | Symbol::Number { position, .. }
            | Symbol::Operator { position, .. }
            | Symbol::LParen { position }
            | Symbol::RParen { position }
            | Symbol::EndOfInput { position } => *position,
        }
    }

    /// The operator carried by this symbol, if any.
    pub fn operator(&self) -> Option<Operator> {
        match self {
            Symbol::Operator { op, .. } => Some(*op),
            _ => None,
        }
    }

    /// Whether this is the end-of-input marker.
    pub fn is_end(&self) -> bool {
        matches!(self, Symbol::EndOfInput { .. })
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Variable { name, .. } => write!(f, "{}", name),
            Symbol::Number { value, .. } => write!(f, "{}", value),
            Symbol::Operator { op, .. } => write!(f, "{}", op),
            Symbol::LParen { .. } => write!(f, "("),
            Symbol::RParen { .. } => write!(f, ")"),
            Symbol::EndOfInput { .. } => write!(f, "<end>"),
        }
    }
}

/// An ordered token sequence terminated by exactly one
/// [`Symbol::EndOfInput`].
#[derive(Debug, Clone, PartialEq)]
pub struct TokenStream {
    symbols: Vec<Symbol>,
}

impl TokenStream {
    /// Build a stream from scanned symbols, appending the end marker at
    /// `end_position`.
    ///
    /// Callers must not include an `EndOfInput` in `symbols` themselves.
    pub fn new(mut symbols: Vec<Symbol>, end_position: usize) -> Self {
        debug_assert!(!symbols.iter().any(Symbol::is_end));
        symbols.push(Symbol::EndOfInput {
            position: end_position,
        });
        Self { symbols }
    }

    /// All symbols, end marker included.
    pub fn as_slice(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Iterate over all symbols, end marker included.
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    /// Number of symbols, end marker included.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// A stream always holds its end marker, so this is never true.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// A fresh cursor positioned on the first symbol.
    pub fn cursor(&self) -> TokenCursor<'_> {
        TokenCursor {
            symbols: &self.symbols,
            index: 0,
        }
    }
}

/// Read-only cursor over a [`TokenStream`].
///
/// Once the cursor reaches the end marker it stays there; `advance` past the
/// end is a no-op.
#[derive(Debug, Clone)]
pub struct TokenCursor<'a> {
    symbols: &'a [Symbol],
    index: usize,
}

impl<'a> TokenCursor<'a> {
    /// The symbol under the cursor.
    pub fn peek(&self) -> &'a Symbol {
        // The stream always ends with EndOfInput and index never passes it.
        &self.symbols[self.index]
    }

    /// Consume the symbol under the cursor and return it.
    pub fn advance(&mut self) -> &'a Symbol {
        let symbol = self.peek();
        if !symbol.is_end() {
            self.index += 1;
        }
        symbol
    }

    /// Move back to the first symbol.
    pub fn reset(&mut self) {
        self.index = 0;
    }
}
