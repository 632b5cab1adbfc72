//! Debug commands: `parse` and `lex` for inspecting the front end.

use tern_ir::StringInterner;
use tern_lexer::TokenKind;

use super::{read_file, use_color};
use crate::report::render_parse_errors;

/// Parse a file and dump its syntax tree.
pub fn parse_file(path: &str) -> Result<(), String> {
    let source = read_file(path)?;
    let interner = StringInterner::new();
    let output = tern_parse::parse_source(&source, &interner);

    println!("Parse result for '{path}':");
    println!("  Statements: {}", output.program.body.len());
    println!("  Errors: {}", output.errors.len());
    for expr in &output.program.body {
        println!();
        println!("{expr:#?}");
    }

    if output.has_errors() {
        return Err(render_parse_errors(
            path,
            &source,
            &output.errors,
            use_color(),
        ));
    }
    Ok(())
}

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) -> Result<(), String> {
    let source = read_file(path)?;
    let interner = StringInterner::new();
    let tokens = tern_lexer::lex(&source, &interner);

    println!("Tokens for '{}' ({} tokens):", path, tokens.len());
    for token in tokens.iter() {
        println!("  {:?} @ {}", token.kind, token.span);
    }

    let malformed = tokens
        .iter()
        .filter(|token| token.kind == TokenKind::Error)
        .count();
    if malformed > 0 {
        return Err(format!("{path}: {malformed} malformed token(s)"));
    }
    Ok(())
}
