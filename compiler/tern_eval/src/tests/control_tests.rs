use pretty_assertions::assert_eq;

use super::{eval_display, eval_error};
use crate::{EvalErrorKind, Value};

#[test]
fn while_with_break_and_continue() {
    let source = "\
i = 0
total = 0
while i < 10 {
  i = i + 1
  if i % 2 == 0 { continue }
  if i > 7 { break }
  total = total + i
}
total";
    assert_eq!(eval_display(source), "16");
}

#[test]
fn for_over_a_list() {
    assert_eq!(
        eval_display("sum = 0\nfor x in [1, 2, 3] { sum = sum + x }\nsum"),
        "6"
    );
}

#[test]
fn for_over_nothing_runs_zero_times() {
    assert_eq!(eval_display("ran = false\nfor x in [] { ran = true }\nran"), "false");
    assert_eq!(eval_display("for x in [] { x }"), "none");
}

#[test]
fn loops_yield_none() {
    assert_eq!(eval_display("for x in [1] { x }"), "none");
    assert_eq!(eval_display("while false { 1 }"), "none");
}

#[test]
fn for_over_range_strings_and_dicts() {
    let squares = "out = []\nfor i in range(3) { out.append(i * i) }\nout";
    assert_eq!(eval_display(squares), "[0, 1, 4]");

    let chars = "n = 0\nfor c in \"héllo\" { n = n + 1 }\nn";
    assert_eq!(eval_display(chars), "5");

    let keys = "d = #{1: `a, 2: `b}\nout = []\nfor k in d { out.append(k) }\nout";
    assert_eq!(eval_display(keys), "[1, 2]");
}

#[test]
fn each_iteration_gets_its_own_binding() {
    let source = "\
fs = []
for i in [1, 2, 3] { fs.append(() -> i) }
[fs[0](), fs[2]()]";
    assert_eq!(eval_display(source), "[1, 3]");
}

#[test]
fn list_iteration_sees_appends() {
    let source = "\
xs = [1]
n = 0
for x in xs {
  n = n + 1
  if x < 3 { xs.append(x + 1) }
}
n";
    assert_eq!(eval_display(source), "3");
}

#[test]
fn for_over_a_non_iterable() {
    let error = eval_error("for x in 5 { x }");
    assert!(matches!(
        error.kind,
        EvalErrorKind::TypeMismatch { expected: "iterable", .. }
    ));
}

#[test]
fn signals_outside_their_construct_are_misuse() {
    for (source, keyword) in [
        ("break", "break"),
        ("continue", "continue"),
        ("return 1", "return"),
        ("if true { break }", "break"),
    ] {
        let error = eval_error(source);
        assert!(
            matches!(error.kind, EvalErrorKind::ControlMisuse { keyword: k } if k == keyword),
            "{source}: {error}"
        );
    }
}

#[test]
fn break_does_not_cross_a_function_boundary() {
    let error = eval_error("stop_early() = { break }\nwhile true { stop_early() }");
    assert!(matches!(
        error.kind,
        EvalErrorKind::ControlMisuse { keyword: "break" }
    ));
}

#[test]
fn try_catches_thrown_values() {
    let source = "f(x) = (try { if x<0 { throw -1 } x+4 } catch i { x+i })\n[f(3), f(-2)]";
    assert_eq!(eval_display(source), "[7, -3]");
}

#[test]
fn rethrow_from_a_handler() {
    let source = "try { try { throw 1 } catch e { throw e + 1 } } catch e { e * 10 }";
    assert_eq!(eval_display(source), "20");
}

#[test]
fn throw_unwinds_through_calls() {
    let source = "\
fail(x) = throw {code: x}
wrap() = fail(7)
try { wrap() } catch e { e.code }";
    assert_eq!(eval_display(source), "7");
}

#[test]
fn catch_binding_is_scoped_to_the_handler() {
    let error = eval_error("try { throw 1 } catch e { e }\ne");
    assert!(matches!(error.kind, EvalErrorKind::NameNotFound { ref name } if name == "e"));
}

#[test]
fn errors_are_not_catchable() {
    let error = eval_error("try { 1 / 0 } catch e { 0 }");
    assert!(matches!(error.kind, EvalErrorKind::DivisionByZero));
}

#[test]
fn uncaught_throw_reaches_the_host() {
    let error = eval_error("throw `boom");
    assert!(error.is_uncaught_exception());
    assert_eq!(error.message, "uncaught exception: `boom");
    assert!(matches!(error.exception, Some(Value::Atom(_))));
}

#[test]
fn blocks_scope_and_sequences_do_not() {
    assert_eq!(eval_display("(var a = 1; 0)\na"), "1");
    let error = eval_error("{ var b = 1 }\nb");
    assert!(matches!(error.kind, EvalErrorKind::NameNotFound { ref name } if name == "b"));
}

#[test]
fn redeclaring_in_one_frame_fails() {
    let error = eval_error("var a = 1\nvar a = 2");
    assert!(matches!(
        error.kind,
        EvalErrorKind::DuplicateBinding { ref name } if name == "a"
    ));
    assert_eq!(eval_display("var a = 1\n{ var a = 2 }\na"), "1");
}

#[test]
fn if_without_else_yields_none() {
    assert_eq!(eval_display("if false { 1 }"), "none");
    assert_eq!(eval_display("if 1 < 2 { `yes } else { `no }"), "`yes");
}

#[test]
fn conditions_must_be_bool() {
    let error = eval_error("if 1 { 2 }");
    assert!(matches!(
        error.kind,
        EvalErrorKind::TypeMismatch {
            expected: "bool",
            ..
        }
    ));
}

#[test]
fn print_does_not_count_as_a_result() {
    assert_eq!(eval_display("print 1"), "none");
}
