use std::rc::Rc;

use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use crate::{
    errors::errors::{ErrorImpl, LexicalError},
    Position,
};

use super::{
    cursor::Cursor,
    tokens::{Token, TokenKind},
};

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"^[ \x08\n\r\t]$").unwrap();
    static ref IDENTIFIER_START: Regex = Regex::new("^[@A-Za-z]$").unwrap();
    static ref IDENTIFIER_PART: Regex = Regex::new("^[A-Za-z0-9_]$").unwrap();
    static ref IDENTIFIER_PART_HYPHEN: Regex = Regex::new("^[A-Za-z0-9_-]$").unwrap();
    static ref SIGN: Regex = Regex::new(r"^[+\-]$").unwrap();
    static ref DIGIT: Regex = Regex::new("^[0-9]$").unwrap();
    static ref ESCAPABLE: Regex = Regex::new(r#"^[bnrt'"\\]$"#).unwrap();
    static ref CHARACTER_BODY: Regex = Regex::new(r"^[^'\n\r\\]$").unwrap();
    static ref STRING_BODY: Regex = Regex::new(r#"^[^"\n\r\\]$"#).unwrap();
    static ref OPERATOR: Regex = Regex::new(r"^[^\s\p{Cc}]$").unwrap();
}

const COMPOUND_OPERATORS: [[char; 2]; 4] = [['=', '='], ['!', '='], ['&', '&'], ['|', '|']];

/// A predicate over a single character, one per lookahead position.
pub trait CharPattern {
    fn matches(&self, c: char) -> bool;
}

impl CharPattern for Regex {
    fn matches(&self, c: char) -> bool {
        let mut buf = [0u8; 4];
        self.is_match(c.encode_utf8(&mut buf))
    }
}

impl CharPattern for char {
    fn matches(&self, c: char) -> bool {
        *self == c
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerConfig {
    /// Allow `-` after the first character of an identifier (`foo-bar`).
    pub identifier_hyphens: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            identifier_hyphens: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Lexer {
    cursor: Cursor,
    config: LexerConfig,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        Lexer::with_config(source, file, LexerConfig::default())
    }

    pub fn with_config(source: String, file: Option<String>, config: LexerConfig) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            cursor: Cursor::new(&source),
            config,
            file: file_name,
        }
    }

    /// True if the upcoming characters satisfy `patterns`, one pattern per
    /// position. Never consumes.
    pub fn peek(&self, patterns: &[&dyn CharPattern]) -> bool {
        patterns.iter().enumerate().all(|(i, pattern)| {
            self.cursor
                .peek_char(i)
                .is_some_and(|c| pattern.matches(c))
        })
    }

    /// Like `peek`, but consumes the matched characters on success.
    pub fn eat(&mut self, patterns: &[&dyn CharPattern]) -> bool {
        let matched = self.peek(patterns);

        if matched {
            for _ in 0..patterns.len() {
                self.cursor.advance();
            }
        }

        matched
    }

    /// Tokenizes the whole input, skipping whitespace between tokens.
    pub fn lex(mut self) -> Result<Vec<Token>, LexicalError> {
        let mut tokens = vec![];

        while self.cursor.has(0) {
            if self.eat(&[&*WHITESPACE]) {
                trace!("skipped whitespace at {}", self.cursor.position() - 1);
                self.cursor.reset_pending();
                continue;
            }

            let start = self.cursor.position();
            let token = self.next_token()?;
            assert!(
                self.cursor.position() > start,
                "lexer made no progress at offset {}",
                start
            );

            trace!("{}", token);
            tokens.push(token);
        }

        debug!("lexed {} tokens from {}", tokens.len(), self.file);
        Ok(tokens)
    }

    /// Picks the sub-lexer for the next token from lookahead alone.
    pub fn next_token(&mut self) -> Result<Token, LexicalError> {
        if self.peek(&[&*IDENTIFIER_START]) {
            Ok(self.lex_identifier())
        } else if self.peek(&[&*DIGIT]) || self.peek(&[&*SIGN, &*DIGIT]) {
            Ok(self.lex_number())
        } else if self.peek(&[&'\'']) {
            self.lex_character()
        } else if self.peek(&[&'"']) {
            self.lex_string()
        } else if self.peek(&[&*OPERATOR]) {
            Ok(self.lex_operator())
        } else {
            let token = self
                .cursor
                .peek_char(0)
                .map(String::from)
                .unwrap_or_default();
            Err(self.error(ErrorImpl::UnrecognisedToken { token }, self.cursor.position()))
        }
    }

    fn lex_identifier(&mut self) -> Token {
        self.eat(&[&*IDENTIFIER_START]);

        let part: &Regex = if self.config.identifier_hyphens {
            &*IDENTIFIER_PART_HYPHEN
        } else {
            &*IDENTIFIER_PART
        };
        while self.eat(&[part]) {}

        self.cursor.emit(TokenKind::Identifier)
    }

    // A leading `0` is a complete integer part, so `007` is three tokens.
    fn lex_number(&mut self) -> Token {
        self.eat(&[&*SIGN]);

        if !self.eat(&[&'0']) {
            while self.eat(&[&*DIGIT]) {}
        }

        if self.eat(&[&'.', &*DIGIT]) {
            while self.eat(&[&*DIGIT]) {}
            return self.cursor.emit(TokenKind::Decimal);
        }

        self.cursor.emit(TokenKind::Integer)
    }

    fn lex_character(&mut self) -> Result<Token, LexicalError> {
        let start = self.cursor.position();
        self.eat(&[&'\'']);

        if self.peek(&[&'\\']) {
            self.lex_escape(start, TokenKind::Character)?;
        } else if !self.eat(&[&*CHARACTER_BODY]) {
            return Err(self.literal_error(start, TokenKind::Character));
        }

        if !self.eat(&[&'\'']) {
            return Err(self.literal_error(start, TokenKind::Character));
        }

        Ok(self.cursor.emit(TokenKind::Character))
    }

    fn lex_string(&mut self) -> Result<Token, LexicalError> {
        let start = self.cursor.position();
        self.eat(&[&'"']);

        loop {
            if self.peek(&[&'\\']) {
                self.lex_escape(start, TokenKind::String)?;
            } else if !self.eat(&[&*STRING_BODY]) {
                break;
            }
        }

        // Anything left here other than the quote is a line break or the end.
        if !self.eat(&[&'"']) {
            return Err(self.error(
                ErrorImpl::Unterminated {
                    literal: TokenKind::String,
                },
                start,
            ));
        }

        Ok(self.cursor.emit(TokenKind::String))
    }

    fn lex_escape(&mut self, start: usize, literal: TokenKind) -> Result<(), LexicalError> {
        self.eat(&[&'\\']);

        if self.eat(&[&*ESCAPABLE]) {
            return Ok(());
        }

        Err(match self.cursor.peek_char(0) {
            Some(escape) if !is_line_break(escape) => self.error(
                ErrorImpl::InvalidEscape { escape },
                self.cursor.position(),
            ),
            _ => self.error(ErrorImpl::Unterminated { literal }, start),
        })
    }

    fn lex_operator(&mut self) -> Token {
        let compound = COMPOUND_OPERATORS
            .iter()
            .any(|[first, second]| self.eat(&[first, second]));

        if !compound {
            self.eat(&[&*OPERATOR]);
        }

        self.cursor.emit(TokenKind::Operator)
    }

    fn literal_error(&self, start: usize, literal: TokenKind) -> LexicalError {
        match self.cursor.peek_char(0) {
            Some(character) if !is_line_break(character) => self.error(
                ErrorImpl::InvalidCharacter { character },
                self.cursor.position(),
            ),
            _ => self.error(ErrorImpl::Unterminated { literal }, start),
        }
    }

    fn error(&self, error_impl: ErrorImpl, offset: usize) -> LexicalError {
        let error = LexicalError::new(error_impl, Position(offset, Rc::clone(&self.file)));
        debug!("{}", error);
        error
    }
}

fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, LexicalError> {
    Lexer::new(source, file).lex()
}

pub fn tokenize_with_config(
    source: String,
    file: Option<String>,
    config: LexerConfig,
) -> Result<Vec<Token>, LexicalError> {
    Lexer::with_config(source, file, config).lex()
}
