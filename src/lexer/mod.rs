//! Lexical analysis.
//!
//! Converts source text into a flat list of tokens:
//!
//! - `Cursor` tracks the scan position and the length of the token in progress
//! - `Lexer` dispatches on lookahead to the identifier, number, character,
//!   string and operator rules
//! - Every token keeps the character offset it started at for diagnostics

pub mod cursor;
pub mod lexer;
pub mod tokens;
