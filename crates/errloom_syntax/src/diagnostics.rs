//! Parse errors and source-located diagnostics.
//!
//! Parsing is all-or-nothing: the first malformed tag aborts the parse with a [`ParseError`] naming
//! the offending tag and its location. Locations are byte ranges into the comment-filtered source.
//! Comment filtering blanks lines instead of removing them, so the line/column of an error is also
//! valid in the original document; [`ParseError::located`] uses that to point a `miette` report at
//! the original text.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::range::{TextRange, line_col, offset_of};

/// Where in the (filtered) source an error was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    pub range: TextRange,
    /// 1-based line.
    pub line: usize,
    /// 1-based byte column.
    pub column: usize,
}

impl Location {
    pub fn new(source: &str, range: TextRange) -> Self {
        let (line, column) = line_col(source, range.start);
        Self { range, line, column }
    }
}

/// A failure to parse a synapseware document.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ParseError {
    #[error("Empty <> attribute in tag `{tag}`")]
    #[diagnostic(
        code(errloom::empty_special_attribute),
        help("write the body right after the marker, e.g. `<>body`")
    )]
    EmptySpecialAttribute { tag: String, at: Location },

    #[error("Unterminated tag `{tag}`: missing closing `|>`")]
    #[diagnostic(
        code(errloom::unterminated_tag),
        help("every `<|` must be closed by `|>` before the next tag opens")
    )]
    UnterminatedTag { tag: String, at: Location },

    #[error("Malformed tag `{tag}`: {reason}")]
    #[diagnostic(code(errloom::malformed_tag))]
    MalformedTag { tag: String, reason: String, at: Location },
}

impl ParseError {
    /// Raw text of the offending tag.
    pub fn tag(&self) -> &str {
        match self {
            ParseError::EmptySpecialAttribute { tag, .. }
            | ParseError::UnterminatedTag { tag, .. }
            | ParseError::MalformedTag { tag, .. } => tag,
        }
    }

    pub fn location(&self) -> Location {
        match self {
            ParseError::EmptySpecialAttribute { at, .. }
            | ParseError::UnterminatedTag { at, .. }
            | ParseError::MalformedTag { at, .. } => *at,
        }
    }

    /// Attach the original (unfiltered) source so the error renders with a labeled snippet.
    pub fn located(&self, name: &str, original: &str) -> LocatedError {
        let at = self.location();
        let offset = offset_of(original, at.line, at.column);
        let len = at.range.len().min(original.len() - offset);
        LocatedError {
            message: self.to_string(),
            help: self.help().map(|h| h.to_string()),
            src: NamedSource::new(name, original.to_string()),
            span: (offset, len).into(),
        }
    }
}

/// A [`ParseError`] bound to the document it came from, for rendering.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(errloom::parse))]
pub struct LocatedError {
    pub message: String,
    #[help]
    pub help: Option<String>,
    #[source_code]
    pub src: NamedSource<String>,
    #[label("in this tag")]
    pub span: SourceSpan,
}

/// Render an error as plain text: `file:line:col: message`.
pub fn format_error(file_name: &str, error: &ParseError) -> String {
    let at = error.location();
    format!("{}:{}:{}: {}", file_name, at.line, at.column, error)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unterminated(source: &str, start: usize) -> ParseError {
        ParseError::UnterminatedTag {
            tag: source[start..].to_string(),
            at: Location::new(source, TextRange::new(start, source.len())),
        }
    }

    #[test]
    fn test_location_line_and_column() {
        let err = unterminated("hello\n  <|o_o", 8);
        assert_eq!(err.location().line, 2);
        assert_eq!(err.location().column, 3);
        assert_eq!(err.tag(), "<|o_o");
    }

    #[test]
    fn test_format_error() {
        let err = unterminated("<|o_o", 0);
        assert_eq!(
            format_error("chat.syn", &err),
            "chat.syn:1:1: Unterminated tag `<|o_o`: missing closing `|>`"
        );
    }

    #[test]
    fn test_located_maps_back_through_blank_comment_lines() {
        let original = "# a long comment line\n<|o_o";
        let filtered = "\n<|o_o";
        let err = unterminated(filtered, 1);
        let located = err.located("chat.syn", original);
        assert_eq!(located.span.offset(), 22);
        assert_eq!(located.span.len(), 5);
        assert!(located.help.is_some());
    }
}
