//! Command handlers for the Tern CLI.
//!
//! Handlers return `Err` with a message already rendered for stderr; the
//! binary prints it and exits with status 1.

mod debug;
mod repl;
mod run;

pub use debug::{lex_file, parse_file};
pub use repl::{eval_line, needs_more_input, run_repl, REPL_SOURCE};
pub use run::{execute, run_file};

use std::io::IsTerminal;

use tern_eval::InterpreterBuilder;
use tern_ir::StringInterner;

use crate::loader::{io_message, FileLoader};

/// Interpreter settings taken from the command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// `--max-depth=<n>`
    pub max_depth: Option<usize>,
}

impl RunOptions {
    pub fn builder<'a>(
        &self,
        interner: &'a StringInterner,
        loader: FileLoader,
    ) -> InterpreterBuilder<'a> {
        let builder = InterpreterBuilder::new(interner).loader(loader);
        match self.max_depth {
            Some(depth) => builder.max_call_depth(depth),
            None => builder,
        }
    }
}

pub(crate) fn read_file(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| io_message(path, &e))
}

pub(crate) fn use_color() -> bool {
    std::io::stderr().is_terminal()
}
