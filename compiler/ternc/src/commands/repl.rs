//! The interactive session.

use std::io::{self, BufRead, Write};

use tern_eval::Interpreter;
use tern_ir::StringInterner;

use super::{use_color, RunOptions};
use crate::loader::FileLoader;
use crate::report::{render_eval_error, render_parse_errors};

/// Source name shown in REPL diagnostics.
pub const REPL_SOURCE: &str = "<repl>";

/// Read entries from stdin until EOF or `exit`. An entry that stops inside
/// an open block or call continues on the next line; a blank line submits
/// it as typed. Bindings persist between entries; an error is reported and
/// the session continues.
pub fn run_repl(options: &RunOptions) {
    let interner = StringInterner::new();
    let mut interp = options.builder(&interner, FileLoader::new(".")).build();
    let color = use_color();

    println!(
        "Tern {} (type `exit` or press Ctrl-D to leave)",
        env!("CARGO_PKG_VERSION")
    );
    let stdin = io::stdin();
    let mut line = String::new();
    let mut entry = String::new();
    loop {
        print!("{}", if entry.is_empty() { "> " } else { ". " });
        // A closed stdout ends the session at the next read.
        let _ = io::stdout().flush();
        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => {
                if !entry.is_empty() {
                    submit(&mut interp, &entry, color);
                }
                break;
            }
            Ok(_) => {}
        }
        let input = line.trim_end();
        if entry.is_empty() {
            match input.trim() {
                "" => continue,
                "exit" => break,
                _ => {}
            }
        } else if input.trim().is_empty() {
            submit(&mut interp, &entry, color);
            entry.clear();
            continue;
        }
        entry.push_str(input);
        entry.push('\n');
        if needs_more_input(&interp, &entry) {
            continue;
        }
        submit(&mut interp, &entry, color);
        entry.clear();
    }
}

fn submit(interp: &mut Interpreter<'_>, entry: &str, color: bool) {
    match eval_line(interp, entry.trim(), color) {
        Ok(Some(shown)) => println!("{shown}"),
        Ok(None) => {}
        Err(report) => eprint!("{report}"),
    }
}

/// Whether `source` only fails because it ends inside an unfinished
/// construct.
pub fn needs_more_input(interp: &Interpreter<'_>, source: &str) -> bool {
    tern_parse::parse_source(source, interp.interner()).is_incomplete()
}

/// Evaluate one entry. The display form of its value, `None` for `none`.
pub fn eval_line(
    interp: &mut Interpreter<'_>,
    line: &str,
    color: bool,
) -> Result<Option<String>, String> {
    let program = tern_parse::parse_source(line, interp.interner())
        .into_result()
        .map_err(|errors| render_parse_errors(REPL_SOURCE, line, &errors, color))?;
    let value = interp
        .run(&program)
        .map_err(|error| render_eval_error(REPL_SOURCE, line, &error, color))?;
    Ok((!value.is_none()).then(|| interp.display(&value)))
}
