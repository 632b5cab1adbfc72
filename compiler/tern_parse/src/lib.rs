//! Recursive descent parser for Tern.
//!
//! Produces the owned expression tree from [`tern_ir::ast`].
//!
//! # Architecture
//!
//! - [`Cursor`]: token navigation and lookahead
//! - `grammar::expr`: operator precedence, postfix chains and primaries
//! - `grammar::control`: blocks, conditionals, loops and `try`
//! - `grammar::function`: function literals, declarations and classes
//!
//! Errors are collected per top-level statement. After an error the parser
//! rewinds to the start of the failing statement and skips to the next
//! separator outside any brackets, so one typo yields one diagnostic.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::ParseError;

use tern_ir::{Expr, ExprKind, Program, Span, StringInterner};
use tern_lexer::{TokenKind, TokenList};
use tracing::trace;

/// Result of parsing: the program plus every error encountered.
///
/// Statements that failed to parse are replaced by [`ExprKind::Error`].
#[derive(Debug)]
pub struct ParseOutput {
    pub program: Program,
    pub errors: Vec<ParseError>,
    /// Every error points at the end of input.
    incomplete: bool,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Whether the source failed only because it stopped early, such as an
    /// unclosed block. More input may complete it.
    pub fn is_incomplete(&self) -> bool {
        self.incomplete
    }

    /// The program, or the collected errors if there were any.
    pub fn into_result(self) -> Result<Program, Vec<ParseError>> {
        if self.errors.is_empty() {
            Ok(self.program)
        } else {
            Err(self.errors)
        }
    }
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens, interner),
        }
    }

    /// Parse a whole program.
    pub fn parse_program(mut self) -> ParseOutput {
        let mut body = Vec::new();
        let mut errors = Vec::new();

        loop {
            self.cursor.skip_separators();
            if self.cursor.is_at_end() {
                break;
            }

            let start = self.cursor.position();
            let start_span = self.cursor.current_span();
            match self.parse_statement() {
                Ok(expr) => {
                    trace!(kind = expr.kind.describe(), "parsed statement");
                    body.push(expr);
                }
                Err(error) => {
                    trace!(message = %error.message, "statement failed to parse");
                    errors.push(error);
                    self.cursor.set_position(start);
                    self.synchronize();
                    let span = start_span.merge(self.cursor.previous_span());
                    body.push(Expr::new(ExprKind::Error, span));
                }
            }
        }

        let end = self.cursor.current_span();
        let incomplete = !errors.is_empty() && errors.iter().all(|error| error.span == end);
        ParseOutput {
            program: Program { body },
            errors,
            incomplete,
        }
    }

    /// One statement followed by a separator, a closer, or end of input.
    fn parse_statement(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_expr()?;
        self.expect_statement_end()?;
        Ok(expr)
    }

    /// Require a statement boundary.
    ///
    /// A statement ending in `}` may be followed directly by the next one,
    /// as in `if c { .. } x + 1`.
    fn expect_statement_end(&mut self) -> Result<(), ParseError> {
        let ok = self.cursor.check_separator()
            || matches!(
                self.cursor.current_kind(),
                TokenKind::Eof | TokenKind::RBrace | TokenKind::RParen
            )
            || self.cursor.previous_kind() == Some(TokenKind::RBrace);
        if ok {
            Ok(())
        } else {
            Err(ParseError::unexpected(
                "newline or `;`",
                self.cursor.current_kind(),
                self.cursor.current_span(),
            ))
        }
    }

    /// Skip tokens up to the next separator outside brackets.
    fn synchronize(&mut self) {
        let mut depth: usize = 0;
        loop {
            match self.cursor.current_kind() {
                TokenKind::Eof => return,
                TokenKind::Newline | TokenKind::Semicolon if depth == 0 => return,
                TokenKind::LParen
                | TokenKind::LBracket
                | TokenKind::LBrace
                | TokenKind::HashBrace => depth += 1,
                TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace => {
                    depth = depth.saturating_sub(1);
                }
                _ => {}
            }
            self.cursor.advance();
        }
    }

    /// Span from `start` to the end of the last consumed token.
    #[inline]
    fn span_from(&self, start: Span) -> Span {
        start.merge(self.cursor.previous_span())
    }
}

/// Parse a token list into a program.
pub fn parse(tokens: &TokenList, interner: &StringInterner) -> ParseOutput {
    Parser::new(tokens, interner).parse_program()
}

/// Lex and parse source text.
pub fn parse_source(source: &str, interner: &StringInterner) -> ParseOutput {
    let tokens = tern_lexer::lex(source, interner);
    parse(&tokens, interner)
}

#[cfg(test)]
mod tests;
