//! Lexer for Tern using logos.
//!
//! Produces a [`TokenList`] for the parser. Newlines are kept as tokens
//! because they separate statements; comments and horizontal whitespace are
//! dropped. Malformed input becomes [`TokenKind::Error`] so the parser can
//! report it with a span instead of the lexer failing outright.

mod raw_token;
mod token;

use logos::Logos;
use tern_ir::{Span, StringInterner};

use raw_token::RawToken;
pub use token::{Token, TokenKind, TokenList};

/// Lex source code into a token list ending in `Eof`.
pub fn lex(source: &str, interner: &StringInterner) -> TokenList {
    let mut result = TokenList::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span());
        let slice = logos.slice();

        let kind = match token_result {
            Ok(RawToken::LineComment) => continue,
            Ok(raw) => convert_token(raw, slice, interner),
            Err(()) => TokenKind::Error,
        };
        result.push(Token::new(kind, span));
    }

    let eof = u32::try_from(source.len()).unwrap_or(u32::MAX);
    result.push(Token::new(TokenKind::Eof, Span::new(eof, eof)));
    result
}

fn convert_token(raw: RawToken, slice: &str, interner: &StringInterner) -> TokenKind {
    match raw {
        // `lex` drops comments before conversion.
        RawToken::LineComment | RawToken::Newline => TokenKind::Newline,

        RawToken::And => TokenKind::And,
        RawToken::Break => TokenKind::Break,
        RawToken::Catch => TokenKind::Catch,
        RawToken::Class => TokenKind::Class,
        RawToken::Continue => TokenKind::Continue,
        RawToken::Else => TokenKind::Else,
        RawToken::False => TokenKind::False,
        RawToken::Fn => TokenKind::Fn,
        RawToken::For => TokenKind::For,
        RawToken::If => TokenKind::If,
        RawToken::In => TokenKind::In,
        RawToken::None => TokenKind::None,
        RawToken::Not => TokenKind::Not,
        RawToken::Or => TokenKind::Or,
        RawToken::Print => TokenKind::Print,
        RawToken::Return => TokenKind::Return,
        RawToken::This => TokenKind::This,
        RawToken::Throw => TokenKind::Throw,
        RawToken::True => TokenKind::True,
        RawToken::Try => TokenKind::Try,
        RawToken::Var => TokenKind::Var,
        RawToken::While => TokenKind::While,

        RawToken::Int(n) => TokenKind::Int(n),
        RawToken::String => {
            let content = &slice[1..slice.len() - 1];
            match unescape_string(content) {
                Some(text) => TokenKind::Str(interner.intern(&text)),
                None => TokenKind::Error,
            }
        }
        RawToken::Atom => TokenKind::Atom(interner.intern(&slice[1..])),
        RawToken::Ident => TokenKind::Ident(interner.intern(slice)),

        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::HashBrace => TokenKind::HashBrace,

        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Arrow => TokenKind::Arrow,

        RawToken::Eq => TokenKind::Eq,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Percent => TokenKind::Percent,
    }
}

/// Resolve escape sequences in the body of a string literal.
///
/// Returns `None` for an unknown escape.
fn unescape_string(content: &str) -> Option<String> {
    if !content.contains('\\') {
        return Some(content.to_owned());
    }

    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        let resolved = match chars.next()? {
            'n' => '\n',
            't' => '\t',
            'r' => '\r',
            '0' => '\0',
            '\\' => '\\',
            '"' => '"',
            _ => return None,
        };
        result.push(resolved);
    }
    Some(result)
}

#[cfg(test)]
mod tests;
