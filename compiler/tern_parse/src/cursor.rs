//! Token cursor for navigating the token stream.
//!
//! Provides low-level token access, lookahead, and consumption methods.

use tern_ir::{Name, Span, StringInterner};
use tern_lexer::{Token, TokenKind, TokenList};

use crate::ParseError;

/// Position-tracking view over a [`TokenList`].
///
/// Invariant: `pos` is always a valid index and the last token is `Eof`,
/// so [`Cursor::current`] never runs off the end.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    interner: &'a StringInterner,
    pos: usize,
}

const EOF: Token = Token {
    kind: TokenKind::Eof,
    span: Span::DUMMY,
};

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Cursor {
            tokens: tokens.as_slice(),
            interner,
            pos: 0,
        }
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Rewind or fast-forward to a position previously returned by
    /// [`Cursor::position`].
    #[inline]
    pub fn set_position(&mut self, pos: usize) {
        debug_assert!(pos <= self.tokens.len(), "cursor position out of bounds");
        self.pos = pos;
    }

    #[inline]
    pub fn current(&self) -> Token {
        self.tokens.get(self.pos).copied().unwrap_or(EOF)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    #[inline]
    pub fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens.get(self.pos - 1).map_or(Span::DUMMY, |t| t.span)
        } else {
            Span::DUMMY
        }
    }

    /// Kind of the token `n` positions ahead of the current one.
    #[inline]
    pub fn peek_kind(&self, n: usize) -> TokenKind {
        self.tokens
            .get(self.pos + n)
            .map_or(TokenKind::Eof, |t| t.kind)
    }

    /// Kind of the previously consumed token.
    #[inline]
    pub fn previous_kind(&self) -> Option<TokenKind> {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map(|t| t.kind)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    /// Check if the current token matches a payload-free kind.
    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    pub fn check_ident(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Ident(_))
    }

    /// Check for `kind` after any run of newlines, without consuming.
    pub fn check_past_newlines(&self, kind: TokenKind) -> bool {
        let mut offset = 0;
        while self.peek_kind(offset) == TokenKind::Newline {
            offset += 1;
        }
        self.peek_kind(offset) == kind
    }

    /// Statement separator: newline or `;`.
    #[inline]
    pub fn check_separator(&self) -> bool {
        matches!(
            self.current_kind(),
            TokenKind::Newline | TokenKind::Semicolon
        )
    }

    #[inline]
    pub fn advance(&mut self) -> Token {
        let token = self.current();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it matches.
    #[inline]
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn skip_newlines(&mut self) {
        while self.check(TokenKind::Newline) {
            self.advance();
        }
    }

    pub fn skip_separators(&mut self) {
        while self.check_separator() {
            self.advance();
        }
    }

    /// Consume a token of the given kind or report what was found instead.
    pub fn expect(&mut self, kind: TokenKind) -> Result<Span, ParseError> {
        if self.check(kind) {
            Ok(self.advance().span)
        } else {
            Err(ParseError::unexpected(
                kind.display_name(),
                self.current_kind(),
                self.current_span(),
            ))
        }
    }

    pub fn expect_ident(&mut self) -> Result<(Name, Span), ParseError> {
        match self.current_kind() {
            TokenKind::Ident(name) => {
                let span = self.advance().span;
                Ok((name, span))
            }
            other => Err(ParseError::unexpected(
                "identifier",
                other,
                self.current_span(),
            )),
        }
    }
}
