use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// Failure to classify the input. The first one aborts the whole
/// tokenization.
#[derive(Debug, Clone)]
pub struct LexicalError {
    internal_error: ErrorImpl,
    position: Position,
}

impl LexicalError {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        LexicalError {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::Unterminated { .. } => "Unterminated",
            ErrorImpl::InvalidCharacter { .. } => "InvalidCharacter",
            ErrorImpl::InvalidEscape { .. } => "InvalidEscape",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::Unterminated { literal } => ErrorTip::Suggestion(format!(
                "Unterminated {} literal, add the closing quote",
                literal
            )),
            ErrorImpl::InvalidCharacter { character } => ErrorTip::Suggestion(format!(
                "Unexpected {:?}, a character literal holds exactly one character",
                character
            )),
            ErrorImpl::InvalidEscape { escape } => ErrorTip::Suggestion(format!(
                "Unknown escape `\\{}`, expected one of \\b \\n \\r \\t \\' \\\" \\\\",
                escape
            )),
        }
    }
}

impl Display for LexicalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at offset {} in {}",
            self.internal_error, self.position.0, self.position.1
        )
    }
}

impl std::error::Error for LexicalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unterminated {literal} literal")]
    Unterminated { literal: TokenKind },
    #[error("invalid character in character literal: {character:?}")]
    InvalidCharacter { character: char },
    #[error("invalid escape sequence: \\{escape}")]
    InvalidEscape { escape: char },
}
