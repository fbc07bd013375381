//! Source line → token sequence
//!
//! The lexer is a single left-to-right pass with no persistent state. It
//! stops at the first character it cannot classify.

mod cursor;

use cursor::Cursor;

use crate::error::{ExpressionError, Result};
use crate::locale::Language;
use crate::symbol::{Operator, Symbol, TokenStream};

/// Settings that change how numerals are scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerConfig {
    /// Character between the integer and fractional digits
    pub decimal_separator: char,
}

impl LexerConfig {
    /// Settings matching a language's numeric conventions.
    pub fn for_language(language: Language) -> Self {
        Self {
            decimal_separator: language.decimal_separator(),
        }
    }
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self::for_language(Language::default())
    }
}

/// Split `line` into symbols.
///
/// # Errors
///
/// - `UnknownSymbol` at the first character that is neither whitespace, a
///   letter, a digit, nor one of `+ - * / ^ % = ( )`.
/// - `InvalidExpression` at the start of a numeral whose fractional part or
///   exponent is incomplete (`1.`, `2e`, `3e+`).
///
/// # Example
///
/// ```
/// use expressio::lexer::{tokenize, LexerConfig};
/// use expressio::Symbol;
///
/// let tokens = tokenize("x = 2", &LexerConfig::default()).unwrap();
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens.as_slice()[3], Symbol::EndOfInput { position: 5 });
/// ```
pub fn tokenize(line: &str, config: &LexerConfig) -> Result<TokenStream> {
    let mut cursor = Cursor::new(line);
    let mut symbols = Vec::new();

    loop {
        cursor.eat_while(|c| c.is_ascii_whitespace());
        let start = cursor.offset();

        let Some(c) = cursor.peek() else {
            break;
        };

        let symbol = if c.is_ascii_alphabetic() {
            scan_identifier(&mut cursor)
        } else if c.is_ascii_digit() {
            scan_number(&mut cursor, config.decimal_separator)?
        } else {
            cursor.bump();
            match c {
                '(' => Symbol::LParen { position: start },
                ')' => Symbol::RParen { position: start },
                _ => match Operator::from_char(c) {
                    Some(op) => Symbol::Operator {
                        op,
                        position: start,
                    },
                    None => return Err(ExpressionError::unknown_symbol(start)),
                },
            }
        };

        log::trace!("token {:?}", symbol);
        symbols.push(symbol);
    }

    debug_assert!(cursor.is_eof());
    Ok(TokenStream::new(symbols, line.len()))
}

fn scan_identifier(cursor: &mut Cursor<'_>) -> Symbol {
    let start = cursor.offset();
    cursor.eat_while(|c| c.is_ascii_alphabetic());
    Symbol::Variable {
        name: cursor.slice_from(start).to_string(),
        position: start,
    }
}

/// Scan `digits [sep digits] [(e|E) [+|-] digits]`.
///
/// A separator or exponent marker must be followed by digits; otherwise the
/// whole numeral is rejected at its first digit.
fn scan_number(cursor: &mut Cursor<'_>, separator: char) -> Result<Symbol> {
    let start = cursor.offset();
    let malformed = || ExpressionError::invalid_expression(start);

    cursor.eat_while(|c| c.is_ascii_digit());

    if cursor.bump_if(|c| c == separator) && cursor.eat_while(|c| c.is_ascii_digit()) == 0 {
        return Err(malformed());
    }

    if cursor.bump_if(|c| c == 'e' || c == 'E') {
        cursor.bump_if(|c| c == '+' || c == '-');
        if cursor.eat_while(|c| c.is_ascii_digit()) == 0 {
            return Err(malformed());
        }
    }

    let text = cursor.slice_from(start);
    let normalized = if separator == '.' {
        text.to_string()
    } else {
        text.replace(separator, ".")
    };
    let value = normalized.parse::<f64>().map_err(|_| malformed())?;

    Ok(Symbol::Number {
        value,
        position: start,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn lex(line: &str) -> Result<Vec<Symbol>> {
        tokenize(line, &LexerConfig::default()).map(|t| t.as_slice().to_vec())
    }

    #[test]
    fn test_empty_line_is_only_end_marker() {
        assert_eq!(lex("").unwrap(), vec![Symbol::EndOfInput { position: 0 }]);
        assert_eq!(
            lex("   ").unwrap(),
            vec![Symbol::EndOfInput { position: 3 }]
        );
    }

    #[test]
    fn test_identifier_is_maximal_alpha_run() {
        let symbols = lex("abc1").unwrap();
        assert_eq!(
            symbols[0],
            Symbol::Variable {
                name: "abc".to_string(),
                position: 0
            }
        );
        assert_eq!(
            symbols[1],
            Symbol::Number {
                value: 1.0,
                position: 3
            }
        );
    }

    #[test]
    fn test_exponent_forms() {
        for (src, expected) in [("1e3", 1000.0), ("1E3", 1000.0), ("2e-1", 0.2), ("2.5e+1", 25.0)]
        {
            match &lex(src).unwrap()[0] {
                Symbol::Number { value, .. } => assert_eq!(*value, expected, "{}", src),
                other => panic!("expected number for {}, got {:?}", src, other),
            }
        }
    }

    #[test]
    fn test_malformed_numeral_points_at_start() {
        for src in ["1.", "1.e5", "2e", "3e+", "4E-x"] {
            let err = lex(&format!("7 + {}", src)).unwrap_err();
            assert_eq!(err.kind, ErrorKind::InvalidExpression, "{}", src);
            assert_eq!(err.position, 4, "{}", src);
        }
    }

    #[test]
    fn test_unknown_symbol_stops_scan() {
        let err = lex("1 $ 2 #").unwrap_err();
        assert_eq!(err, ExpressionError::unknown_symbol(2));
    }

    #[test]
    fn test_non_ascii_is_unknown() {
        let err = lex("é").unwrap_err();
        assert_eq!(err, ExpressionError::unknown_symbol(0));
    }

    #[test]
    fn test_portuguese_separator() {
        let config = LexerConfig::for_language(Language::Portuguese);
        let tokens = tokenize("1,5", &config).unwrap();
        assert_eq!(
            tokens.as_slice()[0],
            Symbol::Number {
                value: 1.5,
                position: 0
            }
        );

        let err = tokenize("1.5", &config).unwrap_err();
        assert_eq!(err, ExpressionError::unknown_symbol(1));
    }
}
