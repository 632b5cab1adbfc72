//! The `run` command: parse and evaluate a script.

use std::path::Path;

use tern_eval::{stdout_handler, SharedPrintHandler};
use tern_ir::StringInterner;
use tracing::debug;

use super::{read_file, use_color, RunOptions};
use crate::loader::FileLoader;
use crate::report::{render_eval_error, render_parse_errors};

pub fn run_file(path: &str, options: &RunOptions) -> Result<(), String> {
    let source = read_file(path)?;
    execute(path, &source, options, stdout_handler(), use_color())
}

/// Run `source` as the script at `path`. Nothing is evaluated if any
/// statement fails to parse.
pub fn execute(
    path: &str,
    source: &str,
    options: &RunOptions,
    print: SharedPrintHandler,
    color: bool,
) -> Result<(), String> {
    let interner = StringInterner::new();
    let program = tern_parse::parse_source(source, &interner)
        .into_result()
        .map_err(|errors| render_parse_errors(path, source, &errors, color))?;

    let mut interp = options
        .builder(&interner, FileLoader::for_script(Path::new(path)))
        .print_handler(print)
        .build();
    debug!(path, statements = program.body.len(), "running script");
    interp
        .run(&program)
        .map(drop)
        .map_err(|error| render_eval_error(path, source, &error, color))
}
