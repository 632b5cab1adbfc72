use pretty_assertions::assert_eq;

use super::{eval_display, eval_error};
use crate::EvalErrorKind;

const ACCOUNT: &str = "\
class A {
  var x = 0
  fn get() { this.x }
  fn set(v) { this.x = v }
}
";

fn with_account(rest: &str) -> String {
    format!("{ACCOUNT}{rest}")
}

#[test]
fn instances_have_separate_fields() {
    let source = with_account("a = A()\nb = A()\na.set(6)\n[a.get(), b.get()]");
    assert_eq!(eval_display(&source), "[6, 0]");
}

#[test]
fn field_initializers_run_in_order_with_this() {
    let source = "class P {\n  var a = 2\n  var b = this.a * 3\n}\np = P()\n[p.a, p.b]";
    assert_eq!(eval_display(source), "[2, 6]");
}

#[test]
fn fields_are_assignable() {
    assert_eq!(eval_display(&with_account("a = A()\na.x = 9\na.get()")), "9");
}

#[test]
fn properties_route_through_accessors() {
    let source = "\
class Temp {
  var c = 0
  fn this.f { this.c * 9 / 5 + 32 }
  fn this.f = v { this.c = (v - 32) * 5 / 9 }
}
t = Temp()
t.f = 212
[t.c, t.f]";
    assert_eq!(eval_display(source), "[100, 212]");
}

#[test]
fn bound_methods_remember_their_receiver() {
    let source = with_account("a = A()\nsetter = a.set\nsetter(3)\n[a.get(), setter]");
    assert_eq!(eval_display(&source), "[3, <method A.set>]");
}

#[test]
fn lambdas_in_methods_capture_this() {
    let source = "\
class C {
  var v = 5
  fn reader() { () -> this.v }
}
read = C().reader()
read()";
    assert_eq!(eval_display(source), "5");
}

#[test]
fn methods_cannot_be_assigned() {
    let error = eval_error(&with_account("a = A()\na.get = 1"));
    assert_eq!(
        error.message,
        "A attribute `get` is a method and cannot be assigned"
    );
}

#[test]
fn missing_property_halves() {
    let no_setter = eval_error("class R {\n  fn this.v { 1 }\n}\nR().v = 2");
    assert_eq!(no_setter.message, "R attribute `v` has no setter");

    let no_getter = eval_error("class W {\n  fn this.v = x { x }\n}\nW().v");
    assert_eq!(no_getter.message, "W attribute `v` has no getter");
}

#[test]
fn unknown_attributes() {
    let error = eval_error(&with_account("A().nope"));
    assert_eq!(
        error.kind,
        EvalErrorKind::AttributeError {
            attr: "nope".to_owned(),
            type_name: "A".to_owned(),
            reason: None,
        }
    );
}

#[test]
fn duplicate_members_are_rejected() {
    let error = eval_error("class D {\n  var x = 1\n  fn x() { 2 }\n}");
    assert_eq!(
        error.kind,
        EvalErrorKind::DuplicateClassAttribute {
            class: "D".to_owned(),
            attr: "x".to_owned(),
        }
    );
    let twice = eval_error("class G {\n  fn this.v { 1 }\n  fn this.v { 2 }\n}");
    assert!(matches!(twice.kind, EvalErrorKind::DuplicateClassAttribute { .. }));
}

#[test]
fn constructors_take_no_arguments() {
    let error = eval_error("class E {}\nE(1)");
    assert!(matches!(
        error.kind,
        EvalErrorKind::TooManyArguments {
            expected: 0,
            got: 1,
            ..
        }
    ));
    let named = eval_error("class E {}\nE(x=1)");
    assert!(matches!(named.kind, EvalErrorKind::UnknownNamedArgument { .. }));
}

#[test]
fn type_introspection() {
    let source = with_account(
        "a = A()\n[isinstance(a, A), typeof(a) == A, typeof(1) == int, isinstance(\"s\", int)]",
    );
    assert_eq!(eval_display(&source), "[true, true, true, false]");
}

#[test]
fn class_and_object_display() {
    assert_eq!(eval_display(&with_account("[A, A()]")), "[<class A>, <A object>]");
}

#[test]
fn objects_compare_by_identity() {
    let source = with_account("a = A()\n[a == a, a == A()]");
    assert_eq!(eval_display(&source), "[true, false]");
}

#[test]
fn user_classes_join_the_iteration_protocol() {
    let source = "\
class Countdown {
  var n = 3
  fn iter() { this }
  fn next() {
    if this.n == 0 { return stop }
    this.n = this.n - 1
    this.n + 1
  }
}
out = []
for i in Countdown() { out.append(i) }
[out, \", \".join(Countdown())]";
    assert_eq!(eval_display(source), "[[3, 2, 1], 3, 2, 1]");
}

#[test]
fn this_outside_a_method() {
    let error = eval_error("this");
    assert!(matches!(error.kind, EvalErrorKind::NameNotFound { ref name } if name == "this"));
}
