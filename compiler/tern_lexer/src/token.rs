//! Cooked tokens handed to the parser.

use std::fmt;

use tern_ir::{Name, Span};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Newline,

    And,
    Break,
    Catch,
    Class,
    Continue,
    Else,
    False,
    Fn,
    For,
    If,
    In,
    None,
    Not,
    Or,
    Print,
    Return,
    This,
    Throw,
    True,
    Try,
    Var,
    While,

    Int(i64),
    /// String literal, escapes resolved, quotes stripped.
    Str(Name),
    /// Atom literal without the leading backtick.
    Atom(Name),
    Ident(Name),

    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    HashBrace,

    Comma,
    Semicolon,
    Colon,
    Dot,
    Arrow,

    Eq,
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    /// Unrecognized input, or a malformed literal.
    Error,
    Eof,
}

impl TokenKind {
    /// Source-level spelling for error messages.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Newline => "newline",
            TokenKind::And => "`and`",
            TokenKind::Break => "`break`",
            TokenKind::Catch => "`catch`",
            TokenKind::Class => "`class`",
            TokenKind::Continue => "`continue`",
            TokenKind::Else => "`else`",
            TokenKind::False => "`false`",
            TokenKind::Fn => "`fn`",
            TokenKind::For => "`for`",
            TokenKind::If => "`if`",
            TokenKind::In => "`in`",
            TokenKind::None => "`none`",
            TokenKind::Not => "`not`",
            TokenKind::Or => "`or`",
            TokenKind::Print => "`print`",
            TokenKind::Return => "`return`",
            TokenKind::This => "`this`",
            TokenKind::Throw => "`throw`",
            TokenKind::True => "`true`",
            TokenKind::Try => "`try`",
            TokenKind::Var => "`var`",
            TokenKind::While => "`while`",
            TokenKind::Int(_) => "integer",
            TokenKind::Str(_) => "string",
            TokenKind::Atom(_) => "atom",
            TokenKind::Ident(_) => "identifier",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBracket => "`[`",
            TokenKind::RBracket => "`]`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::HashBrace => "`#{`",
            TokenKind::Comma => "`,`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Colon => "`:`",
            TokenKind::Dot => "`.`",
            TokenKind::Arrow => "`->`",
            TokenKind::Eq => "`=`",
            TokenKind::EqEq => "`==`",
            TokenKind::NotEq => "`!=`",
            TokenKind::Lt => "`<`",
            TokenKind::LtEq => "`<=`",
            TokenKind::Gt => "`>`",
            TokenKind::GtEq => "`>=`",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Star => "`*`",
            TokenKind::Slash => "`/`",
            TokenKind::Percent => "`%`",
            TokenKind::Error => "invalid token",
            TokenKind::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

/// Token stream, always terminated by a single [`TokenKind::Eof`].
#[derive(Clone, Debug, Default)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
