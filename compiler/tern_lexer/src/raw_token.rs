//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output before
//! string interning and final token conversion.

use logos::Logos;

/// Parse a decimal literal, ignoring `_` separators.
///
/// Returns `None` on overflow, which logos turns into an error token.
fn parse_int(lex: &mut logos::Lexer<'_, RawToken>) -> Option<i64> {
    let mut value: i64 = 0;
    for byte in lex.slice().bytes() {
        if byte == b'_' {
            continue;
        }
        value = value
            .checked_mul(10)?
            .checked_add(i64::from(byte - b'0'))?;
    }
    Some(value)
}

/// Raw token from logos (before interning).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r]+")] // Skip horizontal whitespace
pub(crate) enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("\n")]
    Newline,

    // Keywords
    #[token("and")]
    And,
    #[token("break")]
    Break,
    #[token("catch")]
    Catch,
    #[token("class")]
    Class,
    #[token("continue")]
    Continue,
    #[token("else")]
    Else,
    #[token("false")]
    False,
    #[token("fn")]
    Fn,
    #[token("for")]
    For,
    #[token("if")]
    If,
    #[token("in")]
    In,
    #[token("none")]
    None,
    #[token("not")]
    Not,
    #[token("or")]
    Or,
    #[token("print")]
    Print,
    #[token("return")]
    Return,
    #[token("this")]
    This,
    #[token("throw")]
    Throw,
    #[token("true")]
    True,
    #[token("try")]
    Try,
    #[token("var")]
    Var,
    #[token("while")]
    While,

    // Literals
    #[regex(r"[0-9][0-9_]*", parse_int)]
    Int(i64),

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    String,

    #[regex(r"`[A-Za-z_][A-Za-z0-9_]*")]
    Atom,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    // Delimiters
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("#{")]
    HashBrace,

    // Punctuation
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,
    #[token("->")]
    Arrow,

    // Operators
    #[token("=")]
    Eq,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token(">")]
    Gt,
    #[token(">=")]
    GtEq,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
}
