use pretty_assertions::assert_eq;

use crate::tests::{eval_display, eval_error};
use crate::EvalErrorKind;

#[test]
fn list_methods() {
    let source = "xs = [1, 2]\nxs.push(0)\nxs.append(3, 4)\n[xs, xs.size, xs.last]";
    assert_eq!(eval_display(source), "[[0, 1, 2, 3, 4], 5, 4]");
    assert_eq!(
        eval_display("xs = [1, 2, 3]\n[xs.pop(), xs.shift(), xs]"),
        "[1, 3, [2]]"
    );
}

#[test]
fn list_indexing() {
    assert_eq!(eval_display("xs = [1, 2]\nxs[1] = 5\nxs"), "[1, 5]");
    assert_eq!(
        eval_error("[1][3]").kind,
        EvalErrorKind::IndexOutOfBounds { index: 3, len: 1 }
    );
    assert_eq!(
        eval_error("[1][-1]").kind,
        EvalErrorKind::IndexOutOfBounds { index: -1, len: 1 }
    );
    assert!(matches!(
        eval_error("[].pop()").kind,
        EvalErrorKind::IndexOutOfBounds { .. }
    ));
}

#[test]
fn lists_are_shared_by_reference() {
    assert_eq!(eval_display("a = [1]\nb = a\nb.append(2)\na"), "[1, 2]");
}

#[test]
fn vectors_are_persistent() {
    let source = "\
v = vector(1, 2)
w = v.append(3)
[v, w, v.push(0), v.update(0, 9), v.pop(), v.shift(), vector.empty]";
    assert_eq!(
        eval_display(source),
        "[vector(1, 2), vector(1, 2, 3), vector(0, 1, 2), vector(9, 2), vector(2), vector(1), vector()]"
    );
    assert_eq!(eval_display("v = vector(4, 5)\n[v.size, v.first, v.last, v[1]]"), "[2, 4, 5, 5]");
}

#[test]
fn dicts() {
    let source = "d = #{\"a\": 1}\nd[\"b\"] = 2\n[d[\"a\"], d.get(\"zz\"), d.size, d.keys()]";
    assert_eq!(eval_display(source), "[1, none, 2, [a, b]]");
    assert_eq!(eval_display("d = #{1: 2}\nd.clear()\n[d.size, d]"), "[0, #{}]");
}

#[test]
fn missing_and_unhashable_keys() {
    let missing = eval_error("d = #{}\nd[\"zz\"]");
    assert_eq!(missing.message, "key not found: zz");
    assert_eq!(
        eval_error("d = dict()\nd[[1]] = 2").kind,
        EvalErrorKind::TypeMismatch {
            expected: "hashable",
            got: "list".to_owned(),
        }
    );
}

#[test]
fn index_maps_are_immutable_and_ordered() {
    let source = "\
i = index()
j = i.update(2, `two).update(1, `one)
[i.size, j.size, j[1], j.get(3), j.keys(), j]";
    assert_eq!(
        eval_display(source),
        "[0, 2, `one, none, [1, 2], index(1: `one, 2: `two)]"
    );
    assert!(matches!(
        eval_error("i = index()\ni[1] = 2").kind,
        EvalErrorKind::NotSupported {
            operation: "index assignment",
            ..
        }
    ));
}

#[test]
fn strings() {
    let source = "s = \"héllo\"\n[s.size, s[1], \", \".join([1, \"a\", `b])]";
    assert_eq!(eval_display(source), "[5, é, 1, a, `b]");
    assert_eq!(eval_display("`abc.name"), "abc");
}

#[test]
fn conversions() {
    assert_eq!(
        eval_display("[int(\"42\"), int(7), str(12) + \"!\"]"),
        "[42, 7, 12!]"
    );
    assert!(matches!(
        eval_error("int(\"x\")").kind,
        EvalErrorKind::InvalidConversion { target: "int", .. }
    ));
    assert!(matches!(
        eval_error("int([])").kind,
        EvalErrorKind::TypeMismatch {
            expected: "int or str",
            ..
        }
    ));
}

#[test]
fn sign() {
    assert_eq!(eval_display("[sign(-5), sign(0), sign(9)]"), "[-1, 0, 1]");
}

#[test]
fn builtins_reject_named_arguments() {
    assert!(matches!(
        eval_error("sign(value=1)").kind,
        EvalErrorKind::UnknownNamedArgument { .. }
    ));
    assert!(matches!(
        eval_error("[].append(x=1)").kind,
        EvalErrorKind::UnknownNamedArgument { ref function, .. } if function == "list.append"
    ));
}

#[test]
fn unbound_methods_take_the_receiver_first() {
    let source = "push = list.push\nxs = [2]\npush(xs, 1)\n[xs, list.size(xs)]";
    assert_eq!(eval_display(source), "[[1, 2], 2]");
    assert_eq!(
        eval_error("list.size(\"s\")").kind,
        EvalErrorKind::TypeMismatch {
            expected: "list",
            got: "str".to_owned(),
        }
    );
}

#[test]
fn type_objects_and_callables_display() {
    assert_eq!(
        eval_display("[typeof(1), typeof([]), typeof(vector()), typeof(stop)]"),
        "[<type int>, <type list>, <type vector>, <type stop>]"
    );
    assert_eq!(
        eval_display("[sign, [].push, list.push]"),
        "[<builtin sign>, <builtin method list.push>, <unbound method list.push>]"
    );
}

#[test]
fn iterators_answer_next_until_stop() {
    assert_eq!(eval_display("it = [1].iter()\n[it.next(), it.next()]"), "[1, stop]");
    assert_eq!(eval_display("r = range(2, 5)\n[r.next(), r.next(), r.next(), r.next()]"), "[2, 3, 4, stop]");
}

#[test]
fn records() {
    assert_eq!(eval_display("r = {a: 1, b: \"x\"}\n[r.a, r]"), "[1, {a: 1, b: x}]");
    assert_eq!(
        eval_error("r = {a: 1}\nr.a = 2").message,
        "record attribute `a` is read-only"
    );
}

#[test]
fn builtin_attributes_are_read_only() {
    assert_eq!(
        eval_error("\"s\".size = 1").message,
        "str attribute `size` is read-only"
    );
    assert_eq!(eval_error("n = 1\nn.size").message, "int has no attribute `size`");
}

#[test]
fn calling_a_non_callable() {
    assert!(matches!(
        eval_error("x = 1\nx()").kind,
        EvalErrorKind::NotSupported {
            operation: "call",
            ..
        }
    ));
}
