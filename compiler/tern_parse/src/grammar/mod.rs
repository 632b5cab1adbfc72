//! Grammar productions, split by construct.
//!
//! Precedence, lowest first:
//!
//! | level | forms |
//! |-------|-------|
//! | assignment | `a = b`, `f(x) = body` (right associative) |
//! | arrow | `x -> body` |
//! | or / and / not | short-circuit boolean forms |
//! | comparison | chained `==`, `!=`, `<`, `<=`, `>`, `>=` |
//! | additive / multiplicative | `+ -` / `* / %` |
//! | unary | `-x` |
//! | postfix | calls, `.attr`, `[index]` |
//! | primary | literals, names, keyword forms, grouping |

mod control;
mod expr;
mod function;

use tern_lexer::TokenKind;

/// Tokens that end an operand-less form such as a bare `return`.
fn is_terminator(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Newline
            | TokenKind::Semicolon
            | TokenKind::RBrace
            | TokenKind::RParen
            | TokenKind::RBracket
            | TokenKind::Comma
            | TokenKind::Eof
    )
}
