//! Parse error type.

use std::fmt;

use tern_ir::Span;
use tern_lexer::TokenKind;

/// A syntax error with the span it points at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub span: Span,
    /// Optional suggestion shown under the primary label.
    pub help: Option<&'static str>,
}

impl ParseError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        ParseError {
            message: message.into(),
            span,
            help: None,
        }
    }

    #[must_use]
    pub fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }

    #[cold]
    pub fn unexpected(expected: &str, found: TokenKind, span: Span) -> Self {
        if found == TokenKind::Error {
            return ParseError::new("invalid token", span)
                .with_help("check for unterminated strings, unknown escapes or oversized integers");
        }
        ParseError::new(format!("expected {expected}, found {found}"), span)
    }

    #[cold]
    pub fn invalid_assignment_target(what: &str, span: Span) -> Self {
        ParseError::new(format!("cannot assign to {what}"), span)
            .with_help("assign to a name, an attribute (`a.b = v`) or an index (`a[i] = v`)")
    }

    #[cold]
    pub fn invalid_parameter(span: Span) -> Self {
        ParseError::new("invalid parameter", span)
            .with_help("parameters are names, optionally with a default: `x` or `x=1`")
    }

    #[cold]
    pub fn duplicate_record_field(field: &str, span: Span) -> Self {
        ParseError::new(format!("duplicate record field `{field}`"), span)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.message, self.span)
    }
}

impl std::error::Error for ParseError {}
