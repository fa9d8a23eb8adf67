//! Error types for lexical analysis.
//!
//! - `LexicalError`, carrying the character offset it was raised at
//! - `ErrorImpl`, the specific reason
//! - `ErrorTip`, an optional suggestion shown alongside the error

pub mod errors;
