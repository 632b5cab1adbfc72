use pretty_assertions::assert_eq;
use tern_ir::StringInterner;

use super::{eval_display, eval_error, run_source};
use crate::{EvalErrorKind, InterpreterBuilder};

#[test]
fn defaults_see_earlier_parameters() {
    let source = "f(x, y=x+1, z=0) = x+y+z\n[f(5), f(5, z=2)]";
    assert_eq!(eval_display(source), "[11, 13]");
}

#[test]
fn named_arguments_bind_before_positional() {
    assert_eq!(eval_display("f(a, b) = a - b\nf(b=1, a=5)"), "4");
    assert_eq!(eval_display("f(a, b) = a - b\nf(b=1, 5)"), "4");
}

#[test]
fn closures_read_the_current_binding() {
    let source = "f(x) = x + y\ny = 4\na = f(3)\ny = -9\n[a, f(3)]";
    assert_eq!(eval_display(source), "[7, -6]");
}

#[test]
fn assignment_updates_the_enclosing_binding() {
    assert_eq!(eval_display("x = 1\nf() = (x = 4; 0)\nf()\nx"), "4");
}

#[test]
fn var_shadows_instead_of_updating() {
    assert_eq!(eval_display("x = 1\nf() = (var x = 4; 0)\nf()\nx"), "1");
}

#[test]
fn assignment_to_a_new_name_stays_in_the_innermost_frame() {
    let error = eval_error("f() = (fresh = 1; fresh)\nf()\nfresh");
    assert!(matches!(
        error.kind,
        EvalErrorKind::NameNotFound { ref name } if name == "fresh"
    ));
}

#[test]
fn new_names_stay_in_the_innermost_of_three_frames() {
    let error = eval_error("f() = (g() = (h() = (z = 5; 0); h(); z); g())\nf()");
    assert!(matches!(
        error.kind,
        EvalErrorKind::NameNotFound { ref name } if name == "z"
    ));
}

#[test]
fn existing_globals_update_from_three_frames_down() {
    let source = "x = 0\nf() = (g() = (h() = (x = 5; 0); h(); 0); g())\nf()\nx";
    assert_eq!(eval_display(source), "5");
}

#[test]
fn closures_from_one_call_share_its_frame() {
    let source = "\
counter() = {
  var n = 0
  inc = () -> (n = n + 1; n)
  get = () -> n
  [inc, get]
}
pair = counter()
bump = pair[0]
read = pair[1]
bump()
bump()
other = counter()
other[0]()
[read(), other[1]()]";
    assert_eq!(eval_display(source), "[2, 1]");
}

#[test]
fn return_leaves_the_function_early() {
    let source = "\
classify(x) = {
  if x > 0 { return `pos }
  `other
}
[classify(1), classify(-1)]";
    assert_eq!(eval_display(source), "[`pos, `other]");
}

#[test]
fn bare_return_yields_none() {
    assert_eq!(eval_display("fn f() { return }\nf()"), "none");
}

#[test]
fn recursion() {
    let source = "fact(n) = if n <= 1 { 1 } else { n * fact(n - 1) }\nfact(10)";
    assert_eq!(eval_display(source), "3628800");
}

#[test]
fn too_many_arguments() {
    let error = eval_error("f(x) = x\nf(1, 2)");
    assert!(matches!(
        error.kind,
        EvalErrorKind::TooManyArguments {
            expected: 1,
            got: 2,
            ..
        }
    ));
    assert_eq!(error.message, "f takes 1 argument, got 2");
}

#[test]
fn missing_argument() {
    let error = eval_error("f(x, y) = x\nf(1)");
    assert!(matches!(
        error.kind,
        EvalErrorKind::MissingParameter { ref name, .. } if name == "y"
    ));
}

#[test]
fn binding_errors_happen_before_the_body_runs() {
    let interner = StringInterner::new();
    let mut interp = InterpreterBuilder::new(&interner).build();
    run_source(&mut interp, "ran = 0\nf(x) = (ran = 1; x)").unwrap_or_else(|e| panic!("{e}"));

    let unknown = run_source(&mut interp, "f(y=1)").err();
    assert!(matches!(
        unknown.map(|e| e.kind),
        Some(EvalErrorKind::UnknownNamedArgument { .. })
    ));
    let duplicate = run_source(&mut interp, "f(x=1, x=2)").err();
    assert!(matches!(
        duplicate.map(|e| e.kind),
        Some(EvalErrorKind::DuplicateNamedArgument { .. })
    ));

    let ran = interp.global("ran").map(|v| interp.display(&v));
    assert_eq!(ran.as_deref(), Some("0"));
}

#[test]
fn duplicate_parameters_fail_when_the_function_is_created() {
    let error = eval_error("f(a, a) = 1");
    assert!(matches!(
        error.kind,
        EvalErrorKind::DuplicateParameter { ref name, .. } if name == "a"
    ));
    let lambda = eval_error("g = (a, a) -> 1");
    assert!(matches!(lambda.kind, EvalErrorKind::DuplicateParameter { .. }));
}

#[test]
fn lambdas_display_as_functions() {
    assert_eq!(eval_display("double = x -> x * 2\n[double(4), double]"), "[8, <function lambda>]");
    assert_eq!(eval_display("fn area(w, h) { w * h }\narea"), "<function area>");
}

#[test]
fn runaway_recursion_hits_the_call_limit() {
    let interner = StringInterner::new();
    let mut interp = InterpreterBuilder::new(&interner).max_call_depth(50).build();
    let error = run_source(&mut interp, "spin(n) = spin(n + 1)\nspin(0)").err();
    assert!(matches!(
        error.map(|e| e.kind),
        Some(EvalErrorKind::RecursionLimit { limit: 50 })
    ));
}

#[test]
fn call_depth_is_restored_after_errors() {
    let interner = StringInterner::new();
    let mut interp = InterpreterBuilder::new(&interner).max_call_depth(20).build();
    let source = "down(n) = if n == 0 { 1 / 0 } else { down(n - 1) }";
    run_source(&mut interp, source).unwrap_or_else(|e| panic!("{e}"));
    for _ in 0..5 {
        let error = run_source(&mut interp, "down(15)").err();
        assert!(matches!(
            error.map(|e| e.kind),
            Some(EvalErrorKind::DivisionByZero)
        ));
    }
}
