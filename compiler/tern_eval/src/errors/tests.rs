use super::*;
use pretty_assertions::assert_eq;

#[test]
fn message_matches_kind_display() {
    let error = name_not_found("y");
    assert_eq!(error.message, "name not found: y");
    assert_eq!(error.message, error.kind.to_string());
}

#[test]
fn first_span_wins() {
    let error = division_by_zero()
        .with_span(Span::new(4, 5))
        .with_span(Span::new(0, 10));
    assert_eq!(error.span, Some(Span::new(4, 5)));
}

#[test]
fn control_misuse_names_the_context() {
    assert_eq!(
        control_misuse("return").message,
        "`return` outside of a function"
    );
    assert_eq!(
        control_misuse("break").message,
        "`break` outside of a loop"
    );
}

#[test]
fn arity_messages_pluralize() {
    assert_eq!(
        too_many_arguments("f", 1, 3).message,
        "f takes 1 argument, got 3"
    );
    assert_eq!(
        too_many_arguments("g", 0, 2).message,
        "g takes 0 arguments, got 2"
    );
}

#[test]
fn attribute_errors_with_and_without_reason() {
    assert_eq!(
        attribute_error("size", "int").message,
        "int has no attribute `size`"
    );
    assert_eq!(
        attribute_misuse("get", "A", "is a method and cannot be assigned").message,
        "A attribute `get` is a method and cannot be assigned"
    );
}

#[test]
fn uncaught_exception_keeps_the_value() {
    let error = uncaught_exception(Value::Int(-1), "-1".to_owned());
    assert!(error.is_uncaught_exception());
    assert_eq!(error.message, "uncaught exception: -1");
    assert!(matches!(error.exception, Some(Value::Int(-1))));
}
