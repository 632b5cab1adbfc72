//! Programs run end to end through the parser.

mod class_tests;
mod control_tests;
mod function_tests;
mod property_tests;

use tern_ir::StringInterner;

use crate::{silent_handler, EvalError, Interpreter, InterpreterBuilder, Value};

/// Parse `source` and run it in `interp`'s globals.
pub(crate) fn run_source(interp: &mut Interpreter<'_>, source: &str) -> Result<Value, EvalError> {
    let output = tern_parse::parse_source(source, interp.interner());
    assert!(
        !output.has_errors(),
        "parse errors in {source:?}: {:?}",
        output.errors
    );
    interp.run(&output.program)
}

/// Display form of the program's final value.
pub(crate) fn eval_display(source: &str) -> String {
    let interner = StringInterner::new();
    let mut interp = InterpreterBuilder::new(&interner)
        .print_handler(silent_handler())
        .build();
    match run_source(&mut interp, source) {
        Ok(value) => interp.display(&value),
        Err(e) => panic!("{source:?} failed: {e}"),
    }
}

/// The error a program stops with.
pub(crate) fn eval_error(source: &str) -> EvalError {
    let interner = StringInterner::new();
    let mut interp = InterpreterBuilder::new(&interner)
        .print_handler(silent_handler())
        .build();
    match run_source(&mut interp, source) {
        Ok(value) => panic!("{source:?} succeeded with {}", interp.display(&value)),
        Err(e) => e,
    }
}
