use super::*;
use pretty_assertions::assert_eq;

#[test]
fn eval_errors_show_the_message_and_location() {
    let source = "x = 1\ny = x + nope";
    let mut error = tern_eval::errors::name_not_found("nope");
    error = error.with_span(Span::new(14, 18));
    let rendered = render_eval_error("main.tn", source, &error, false);
    assert!(rendered.contains("name not found: nope"), "{rendered}");
    assert!(rendered.contains("main.tn"), "{rendered}");
    assert!(rendered.contains("raised here"), "{rendered}");
}

#[test]
fn recursion_errors_suggest_the_flag() {
    let error = tern_eval::errors::recursion_limit_exceeded(8).with_span(Span::new(0, 3));
    let rendered = render_eval_error("deep.tn", "f()", &error, false);
    assert!(rendered.contains("--max-depth=<n>"), "{rendered}");
}

#[test]
fn spans_past_the_end_are_clamped() {
    assert_eq!(clamp(Span::new(40, 50), 10), 10..10);
    assert_eq!(clamp(Span::new(2, 50), 10), 2..10);
    let error = tern_eval::errors::division_by_zero().with_span(Span::new(40, 50));
    let rendered = render_eval_error("short.tn", "1 / 0", &error, false);
    assert!(rendered.contains("division by zero"), "{rendered}");
}

#[test]
fn errors_without_a_span_still_render() {
    let error = tern_eval::errors::control_misuse("break");
    let rendered = render_eval_error("loop.tn", "break", &error, false);
    assert!(rendered.contains("`break` outside of a loop"), "{rendered}");
}
