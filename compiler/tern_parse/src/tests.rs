#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use pretty_assertions::assert_eq;
use tern_ir::{BinaryOp, ClassMember, CompareOp, ExprKind};

fn parse_ok(source: &str, interner: &StringInterner) -> Program {
    let output = parse_source(source, interner);
    assert!(
        output.errors.is_empty(),
        "unexpected errors: {:?}",
        output.errors
    );
    output.program
}

fn single(source: &str, interner: &StringInterner) -> ExprKind {
    let mut program = parse_ok(source, interner);
    assert_eq!(program.body.len(), 1, "expected one statement");
    program.body.pop().unwrap().kind
}

#[test]
fn statements_split_on_newlines_and_semicolons() {
    let interner = StringInterner::new();
    let program = parse_ok("a = 1\nb = 2; c = 3\n\n", &interner);
    assert_eq!(program.body.len(), 3);
}

#[test]
fn precedence_multiplication_binds_tighter() {
    let interner = StringInterner::new();
    let ExprKind::Binary { op, right, .. } = single("1 + 2 * 3", &interner) else {
        panic!("expected binary");
    };
    assert_eq!(op, BinaryOp::Add);
    assert!(matches!(
        right.kind,
        ExprKind::Binary {
            op: BinaryOp::Mul,
            ..
        }
    ));
}

#[test]
fn comparison_chain_keeps_every_operator() {
    let interner = StringInterner::new();
    let ExprKind::Compare { rest, .. } = single("1 < x <= 5", &interner) else {
        panic!("expected comparison");
    };
    let ops: Vec<_> = rest.iter().map(|(op, _)| *op).collect();
    assert_eq!(ops, vec![CompareOp::Lt, CompareOp::LtEq]);
}

#[test]
fn short_function_form_with_defaults() {
    let interner = StringInterner::new();
    let ExprKind::FnDecl(def) = single("f(x, y=x+1, z=0) = x+y+z", &interner) else {
        panic!("expected function declaration");
    };
    assert_eq!(def.name, Some(interner.intern("f")));
    let names: Vec<_> = def.params.iter().map(|p| interner.lookup(p.name)).collect();
    assert_eq!(names, vec!["x", "y", "z"]);
    assert!(def.params[0].default.is_none());
    assert!(def.params[1].default.is_some());
    assert!(def.params[2].default.is_some());
}

#[test]
fn block_function_form() {
    let interner = StringInterner::new();
    let ExprKind::FnDecl(def) = single("fn area(w, h) {\n  w * h\n}", &interner) else {
        panic!("expected function declaration");
    };
    assert_eq!(def.params.len(), 2);
    assert!(matches!(def.body.kind, ExprKind::Block(ref items) if items.len() == 1));
}

#[test]
fn arrow_forms() {
    let interner = StringInterner::new();
    let ExprKind::Assign { value, .. } = single("sq = x -> x * x", &interner) else {
        panic!("expected assignment");
    };
    assert!(matches!(value.kind, ExprKind::Lambda(ref def) if def.params.len() == 1));

    let ExprKind::Lambda(def) = single("(a, b) -> a + b", &interner) else {
        panic!("expected lambda");
    };
    assert_eq!(def.params.len(), 2);

    let ExprKind::Lambda(def) = single("() -> 1", &interner) else {
        panic!("expected lambda");
    };
    assert!(def.params.is_empty());
}

#[test]
fn parenthesized_sequence() {
    let interner = StringInterner::new();
    let ExprKind::FnDecl(def) = single("f() = (x = 4; 0)", &interner) else {
        panic!("expected function declaration");
    };
    assert!(matches!(def.body.kind, ExprKind::Seq(ref items) if items.len() == 2));
}

#[test]
fn grouping_parens_are_transparent() {
    let interner = StringInterner::new();
    assert!(matches!(
        single("(1 + 2)", &interner),
        ExprKind::Binary { .. }
    ));
}

#[test]
fn statement_may_follow_closing_brace() {
    let interner = StringInterner::new();
    let source = "f(x) = (try { if x<0 { throw -1 } x+4 } catch i { x+i })";
    let ExprKind::FnDecl(def) = single(source, &interner) else {
        panic!("expected function declaration");
    };
    let ExprKind::Try { body, .. } = &def.body.kind else {
        panic!("expected try");
    };
    assert!(matches!(body.kind, ExprKind::Block(ref items) if items.len() == 2));
}

#[test]
fn if_else_chain_across_lines() {
    let interner = StringInterner::new();
    let source = "if x < 0 {\n  1\n}\nelse if x == 0 { 2 } else { 3 }";
    let ExprKind::If { else_branch, .. } = single(source, &interner) else {
        panic!("expected if");
    };
    let else_branch = else_branch.unwrap();
    assert!(matches!(
        else_branch.kind,
        ExprKind::If {
            else_branch: Some(_),
            ..
        }
    ));
}

#[test]
fn record_dict_and_block_are_distinguished() {
    let interner = StringInterner::new();
    assert!(matches!(
        single("{name: 1, size: 2}", &interner),
        ExprKind::Record(ref fields) if fields.len() == 2
    ));
    assert!(matches!(
        single("#{\"a\": 1}", &interner),
        ExprKind::Dict(ref entries) if entries.len() == 1
    ));
    assert!(matches!(single("{ a }", &interner), ExprKind::Block(_)));
    assert!(matches!(single("{}", &interner), ExprKind::Block(ref items) if items.is_empty()));
}

#[test]
fn duplicate_record_field_is_rejected() {
    let interner = StringInterner::new();
    let output = parse_source("{a: 1, a: 2}", &interner);
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].message, "duplicate record field `a`");
}

#[test]
fn call_with_named_arguments() {
    let interner = StringInterner::new();
    let ExprKind::Call { args, .. } = single("f(5, z=2)", &interner) else {
        panic!("expected call");
    };
    assert_eq!(args[0].name, None);
    assert_eq!(args[1].name, Some(interner.intern("z")));
}

#[test]
fn class_members() {
    let interner = StringInterner::new();
    let source = "class A {\n  var x = 0\n  fn get() { this.x }\n  set(v) = (this.x = v)\n  fn this.value { this.x }\n  fn this.value = v { this.x = v }\n}";
    let ExprKind::Class(class) = single(source, &interner) else {
        panic!("expected class");
    };
    assert_eq!(class.members.len(), 5);
    assert!(matches!(class.members[0], ClassMember::Field { .. }));
    assert!(matches!(class.members[1], ClassMember::Method(_)));
    assert!(matches!(class.members[2], ClassMember::Method(_)));
    assert!(matches!(class.members[3], ClassMember::Getter(_)));
    assert!(matches!(class.members[4], ClassMember::Setter(ref def) if def.params.len() == 1));
}

#[test]
fn bare_return_and_print_list() {
    let interner = StringInterner::new();
    let program = parse_ok("fn f() { return }\nprint 1, \"two\", `three", &interner);
    let ExprKind::FnDecl(def) = &program.body[0].kind else {
        panic!("expected function");
    };
    let ExprKind::Block(items) = &def.body.kind else {
        panic!("expected block");
    };
    assert!(matches!(items[0].kind, ExprKind::Return(None)));
    assert!(matches!(program.body[1].kind, ExprKind::Print(ref args) if args.len() == 3));
}

#[test]
fn invalid_assignment_target() {
    let interner = StringInterner::new();
    let output = parse_source("1 = 2", &interner);
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].message, "cannot assign to integer literal");
}

#[test]
fn recovery_reports_one_error_per_statement() {
    let interner = StringInterner::new();
    let output = parse_source("a = (1 +\nb = 2\nc = )\nd = 4", &interner);
    assert!(output.has_errors());
    assert!(matches!(
        output.program.body.last().map(|e| &e.kind),
        Some(ExprKind::Assign { .. })
    ));
    assert!(output
        .program
        .body
        .iter()
        .any(|e| matches!(e.kind, ExprKind::Error)));
}

#[test]
fn missing_separator_is_an_error() {
    let interner = StringInterner::new();
    let output = parse_source("a b", &interner);
    assert_eq!(output.errors.len(), 1);
    assert_eq!(
        output.errors[0].message,
        "expected newline or `;`, found identifier"
    );
}

#[test]
fn try_requires_catch() {
    let interner = StringInterner::new();
    let output = parse_source("try { 1 }", &interner);
    assert_eq!(output.errors.len(), 1);
    assert!(output.errors[0].help.is_some());
}

#[test]
fn unfinished_input_is_incomplete() {
    let interner = StringInterner::new();
    for source in ["fn f() {", "class A {\n  var x = 0\n", "g(1,", "x = "] {
        let output = parse_source(source, &interner);
        assert!(output.has_errors(), "{source}");
        assert!(output.is_incomplete(), "{source}");
    }
    for source in ["1 = 2", "a b", "x = 1"] {
        assert!(!parse_source(source, &interner).is_incomplete(), "{source}");
    }
}

#[test]
fn into_result_returns_program_when_clean() {
    let interner = StringInterner::new();
    let program = parse_source("1", &interner).into_result().unwrap();
    assert_eq!(program.body.len(), 1);
}
