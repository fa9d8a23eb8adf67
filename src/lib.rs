#![allow(clippy::module_inception)]

use std::{path::Path, rc::Rc};

use crate::errors::errors::{ErrorTip, LexicalError};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

/// Character offset into a source, plus the name of that source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub usize, pub Rc<String>);

/// Finds the line holding the character at `position`.
///
/// Returns the 1-based line number, the line text (with its line break) and
/// the column of `position` within the line, all counted in characters.
pub fn get_line_at_position(content: &str, position: usize) -> Option<(usize, String, usize)> {
    let mut start = 0;

    for (index, line) in content.split_inclusive('\n').enumerate() {
        let end = start + line.chars().count();

        if (start..end).contains(&position) {
            return Some((index + 1, line.to_string(), position - start));
        }

        start = end;
    }

    None
}

/// Name shown for a source file in diagnostics: the last path component.
pub fn source_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        errors::errors::{ErrorImpl, LexicalError},
        lexer::tokens::TokenKind,
        Position,
    };

    const SOURCE: &str = "Hello, world!\nfoo\n\n    Testing { }\n";

    #[test]
    fn test_get_line_at_position() {
        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 31).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "    Testing { }\n");
        assert_eq!(line_pos, 12);

        assert!(super::get_line_at_position(SOURCE, SOURCE.len()).is_none());
    }

    #[test]
    fn test_source_name() {
        assert_eq!(super::source_name("programs/nested/main.src"), "main.src");
        assert_eq!(super::source_name("main.src"), "main.src");
        assert_eq!(super::source_name(".."), "..");
    }

    #[test]
    fn test_format_error() {
        let error = LexicalError::new(
            ErrorImpl::Unterminated {
                literal: TokenKind::String,
            },
            Position(15, Rc::new("main.src".to_string())),
        );

        let rendered = super::format_error(&error, "x = 1;\n    y = \"abc\n");
        assert_eq!(
            rendered,
            "Error: Unterminated (Unterminated String literal, add the closing quote)\n\
             -> main.src\n  |\n2 | y = \"abc\n  | ----^\n"
        );
    }

    #[test]
    fn test_format_error_tab_indented_line() {
        let error = LexicalError::new(
            ErrorImpl::Unterminated {
                literal: TokenKind::String,
            },
            Position(13, Rc::new("main.src".to_string())),
        );

        let rendered = super::format_error(&error, "x = 1;\n\t\ty =\t\"abc\n");
        assert!(rendered.ends_with("2 | y = \"abc\n  | ----^\n"));
    }

    #[test]
    fn test_format_error_without_tip() {
        let error = LexicalError::new(
            ErrorImpl::UnrecognisedToken {
                token: "\u{7}".to_string(),
            },
            Position(1, Rc::new("shell".to_string())),
        );

        let rendered = super::format_error(&error, "a\u{7}");
        assert!(rendered.starts_with("Error: UnrecognisedToken\n-> shell\n"));
        assert!(rendered.ends_with("  | -^\n"));
    }
}

/// Renders `error` against the source it was raised on:
///
/// ```text
/// Error: Unterminated (Unterminated String literal, add the closing quote)
/// -> main.src
///   |
/// 2 | y = "abc
///   | ----^
/// ```
pub fn format_error(error: &LexicalError, source: &str) -> String {
    let position = error.get_position();
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", position.1));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return out;
    };

    let line_str = line.to_string();
    let padding = line_str.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    // Tabs inside the line are shown as one space so the caret column matches.
    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let shown = line_text_removed.trim_end().replace('\t', " ");
    out.push_str(&format!("{} | {}\n", line_str, shown));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}
