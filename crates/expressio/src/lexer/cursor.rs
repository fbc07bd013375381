//! Character cursor for line scanning.

/// Byte-position cursor over a source line.
///
/// Offsets always sit on a `char` boundary.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cursor<'a> {
    input: &'a str,
    offset: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at byte offset `0`.
    pub(crate) fn new(input: &'a str) -> Self {
        Self { input, offset: 0 }
    }

    /// Returns the current byte offset.
    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the character at the cursor, if any.
    pub(crate) fn peek(&self) -> Option<char> {
        self.input[self.offset..].chars().next()
    }

    /// Consumes one character.
    pub(crate) fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        Some(c)
    }

    /// Consumes the next character if it satisfies `pred`.
    pub(crate) fn bump_if(&mut self, pred: impl Fn(char) -> bool) -> bool {
        match self.peek() {
            Some(c) if pred(c) => {
                self.offset += c.len_utf8();
                true
            }
            _ => false,
        }
    }

    /// Consumes characters while `pred` holds; returns how many were eaten.
    pub(crate) fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let mut count = 0;
        while self.bump_if(&pred) {
            count += 1;
        }
        count
    }

    /// Source text between `start` and the cursor.
    pub(crate) fn slice_from(&self, start: usize) -> &'a str {
        &self.input[start..self.offset]
    }

    /// Returns `true` once the whole line has been consumed.
    pub(crate) fn is_eof(&self) -> bool {
        self.offset >= self.input.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eat_while_counts_chars() {
        let mut cursor = Cursor::new("abc1");
        assert_eq!(cursor.eat_while(|c| c.is_ascii_alphabetic()), 3);
        assert_eq!(cursor.offset(), 3);
        assert_eq!(cursor.slice_from(0), "abc");
        assert_eq!(cursor.peek(), Some('1'));
    }

    #[test]
    fn test_multibyte_advances_by_utf8_len() {
        let mut cursor = Cursor::new("é+");
        assert_eq!(cursor.bump(), Some('é'));
        assert_eq!(cursor.offset(), 2);
        assert_eq!(cursor.bump(), Some('+'));
        assert!(cursor.is_eof());
        assert_eq!(cursor.bump(), None);
    }
}
