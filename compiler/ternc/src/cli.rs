//! Command-line parsing.

use crate::commands::RunOptions;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Run(String),
    Repl,
    Parse(String),
    Lex(String),
    Help,
    Version,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    pub options: RunOptions,
}

/// Parse the arguments after the program name. Flags may appear anywhere.
///
/// The error is a message for stderr.
pub fn parse_args(args: &[String]) -> Result<Invocation, String> {
    let mut options = RunOptions::default();
    let mut positional = Vec::new();

    for arg in args {
        if let Some(value) = arg.strip_prefix("--max-depth=") {
            let depth = value
                .parse::<usize>()
                .ok()
                .filter(|&depth| depth > 0)
                .ok_or_else(|| format!("error: invalid --max-depth value '{value}'"))?;
            options.max_depth = Some(depth);
        } else if matches!(arg.as_str(), "--help" | "-h" | "--version" | "-v") {
            positional.push(arg.as_str());
        } else if arg.starts_with("--") {
            return Err(format!("error: unknown option '{arg}'"));
        } else {
            positional.push(arg.as_str());
        }
    }

    let command = match positional.as_slice() {
        [] | ["repl"] => Command::Repl,
        ["run", path] => Command::Run((*path).to_owned()),
        ["run"] => return Err("Usage: tern run <file.tn>".to_owned()),
        ["parse", path] => Command::Parse((*path).to_owned()),
        ["parse"] => return Err("Usage: tern parse <file.tn>".to_owned()),
        ["lex", path] => Command::Lex((*path).to_owned()),
        ["lex"] => return Err("Usage: tern lex <file.tn>".to_owned()),
        ["help" | "--help" | "-h"] => Command::Help,
        ["version" | "--version" | "-v"] => Command::Version,
        [path] if is_script(path) => Command::Run((*path).to_owned()),
        [command, ..] => return Err(format!("Unknown command: {command}")),
    };
    Ok(Invocation { command, options })
}

fn is_script(path: &str) -> bool {
    std::path::Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("tn"))
}

pub fn usage() -> String {
    [
        "Tern, an embeddable expression language",
        "",
        "Usage: tern <command> [options]",
        "",
        "Commands:",
        "  run <file.tn>        Run a Tern script",
        "  repl                 Start an interactive session (the default)",
        "  parse <file.tn>      Parse and dump the syntax tree",
        "  lex <file.tn>        Tokenize and dump the tokens",
        "  help                 Show this help message",
        "  version              Show version information",
        "",
        "Options:",
        "  --max-depth=<n>      Limit nested calls (default: 10000)",
        "",
        "Environment:",
        "  RUST_LOG             Enable tracing, e.g. RUST_LOG=tern_eval=debug",
        "  TERN_LOG_TREE        Render tracing output as a call tree",
    ]
    .join("\n")
}
