use crate::MK_TOKEN;

use super::tokens::{Token, TokenKind};

/// Scanner state over the source characters.
///
/// `pending` counts the characters advanced over since the last emit or
/// reset, so the in-progress lexeme always starts at `pos - pending`.
#[derive(Debug, Clone)]
pub struct Cursor {
    input: Vec<char>,
    pos: usize,
    pending: usize,
}

impl Cursor {
    pub fn new(source: &str) -> Cursor {
        Cursor {
            input: source.chars().collect(),
            pos: 0,
            pending: 0,
        }
    }

    pub fn has(&self, offset: usize) -> bool {
        self.pos + offset < self.input.len()
    }

    pub fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.pos + offset).copied()
    }

    pub fn advance(&mut self) {
        debug_assert!(self.has(0), "advanced past the end of input");
        self.pos += 1;
        self.pending += 1;
    }

    pub fn reset_pending(&mut self) {
        self.pending = 0;
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn emit(&mut self, kind: TokenKind) -> Token {
        let start = self.pos - self.pending;
        let value = self.input[start..self.pos].iter().collect::<String>();
        self.reset_pending();

        MK_TOKEN!(kind, value, start)
    }
}

#[cfg(test)]
mod tests {
    use super::Cursor;
    use crate::lexer::tokens::TokenKind;

    #[test]
    fn test_cursor_peek_does_not_move() {
        let cursor = Cursor::new("ab");

        assert!(cursor.has(0));
        assert!(cursor.has(1));
        assert!(!cursor.has(2));
        assert_eq!(cursor.peek_char(1), Some('b'));
        assert_eq!(cursor.peek_char(2), None);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_cursor_emit_uses_pending_length() {
        let mut cursor = Cursor::new("  foo");
        cursor.advance();
        cursor.advance();
        cursor.reset_pending();

        cursor.advance();
        cursor.advance();
        cursor.advance();
        let token = cursor.emit(TokenKind::Identifier);

        assert_eq!(token.value, "foo");
        assert_eq!(token.offset, 2);
        assert!(!cursor.has(0));
    }

    #[test]
    fn test_cursor_emit_resets_pending() {
        let mut cursor = Cursor::new("+-");
        cursor.advance();
        let first = cursor.emit(TokenKind::Operator);
        cursor.advance();
        let second = cursor.emit(TokenKind::Operator);

        assert_eq!((first.value.as_str(), first.offset), ("+", 0));
        assert_eq!((second.value.as_str(), second.offset), ("-", 1));
    }

    #[test]
    fn test_cursor_counts_characters_not_bytes() {
        let mut cursor = Cursor::new("é+");
        cursor.advance();
        cursor.reset_pending();

        assert_eq!(cursor.peek_char(0), Some('+'));
        cursor.advance();
        assert_eq!(cursor.emit(TokenKind::Operator).offset, 1);
    }
}
