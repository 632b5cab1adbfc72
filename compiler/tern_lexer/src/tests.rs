use super::*;
use pretty_assertions::assert_eq;

fn kinds(source: &str, interner: &StringInterner) -> Vec<TokenKind> {
    lex(source, interner).iter().map(|t| t.kind).collect()
}

#[test]
fn lexes_declaration() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    assert_eq!(
        kinds("var x = 1_000", &interner),
        vec![
            TokenKind::Var,
            TokenKind::Ident(x),
            TokenKind::Eq,
            TokenKind::Int(1000),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn keywords_win_over_identifiers() {
    let interner = StringInterner::new();
    let classy = interner.intern("classy");
    assert_eq!(
        kinds("class classy", &interner),
        vec![TokenKind::Class, TokenKind::Ident(classy), TokenKind::Eof]
    );
}

#[test]
fn comments_are_dropped_newlines_kept() {
    let interner = StringInterner::new();
    assert_eq!(
        kinds("1 // one\n2", &interner),
        vec![
            TokenKind::Int(1),
            TokenKind::Newline,
            TokenKind::Int(2),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn string_escapes_are_resolved() {
    let interner = StringInterner::new();
    let tokens = lex(r#""a\tb\"c""#, &interner);
    let Some(Token {
        kind: TokenKind::Str(name),
        ..
    }) = tokens.as_slice().first().copied()
    else {
        panic!("expected string token");
    };
    assert_eq!(interner.lookup(name), "a\tb\"c");
}

#[test]
fn unknown_escape_is_an_error_token() {
    let interner = StringInterner::new();
    assert_eq!(
        kinds(r#""\q""#, &interner),
        vec![TokenKind::Error, TokenKind::Eof]
    );
}

#[test]
fn atoms_drop_the_backtick() {
    let interner = StringInterner::new();
    let oops = interner.intern("oops");
    assert_eq!(
        kinds("`oops", &interner),
        vec![TokenKind::Atom(oops), TokenKind::Eof]
    );
}

#[test]
fn multi_char_operators() {
    let interner = StringInterner::new();
    assert_eq!(
        kinds("<= >= == != -> #{", &interner),
        vec![
            TokenKind::LtEq,
            TokenKind::GtEq,
            TokenKind::EqEq,
            TokenKind::NotEq,
            TokenKind::Arrow,
            TokenKind::HashBrace,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn integer_overflow_is_an_error_token() {
    let interner = StringInterner::new();
    assert_eq!(
        kinds("99999999999999999999", &interner),
        vec![TokenKind::Error, TokenKind::Eof]
    );
}

#[test]
fn spans_cover_token_text() {
    let interner = StringInterner::new();
    let tokens = lex("ab  cd", &interner);
    assert_eq!(tokens.get(1).map(|t| t.span), Some(Span::new(4, 6)));
    assert_eq!(tokens.get(2).map(|t| t.span), Some(Span::new(6, 6)));
}
