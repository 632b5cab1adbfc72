use super::*;
use pretty_assertions::assert_eq;
use tern_ir::StringInterner;

fn int(value: &Option<Value>) -> Option<i64> {
    match value {
        Some(Value::Int(n)) => Some(*n),
        _ => None,
    }
}

#[test]
fn lookup_walks_to_parent() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let root = Scope::root();
    root.define(x, Value::Int(1));
    let child = root.child_block().child_block();
    assert_eq!(int(&child.lookup(x)), Some(1));
    assert!(child.lookup(interner.intern("y")).is_none());
}

#[test]
fn assign_mutates_nearest_existing_binding() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let root = Scope::root();
    root.define(x, Value::Int(1));
    let inner = root.child_block().function_frame(None);
    inner.assign(x, Value::Int(4));
    assert_eq!(int(&root.lookup(x)), Some(4));
    assert!(inner.borrow().get_local(x).is_none());
}

#[test]
fn assign_creates_in_innermost_frame_when_unbound() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let root = Scope::root();
    let middle = root.child_block();
    let inner = middle.child_block();
    inner.assign(x, Value::Int(2));
    assert!(root.borrow().get_local(x).is_none());
    assert!(middle.borrow().get_local(x).is_none());
    assert_eq!(int(&inner.borrow().get_local(x).cloned()), Some(2));
}

#[test]
fn declare_shadows_and_rejects_duplicates() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let root = Scope::root();
    root.define(x, Value::Int(1));
    let child = root.child_block();
    assert_eq!(child.declare(x, Value::Int(9)), Ok(()));
    assert_eq!(child.declare(x, Value::Int(10)), Err(AlreadyDeclared));
    assert_eq!(int(&child.lookup(x)), Some(9));
    assert_eq!(int(&root.lookup(x)), Some(1));
}

#[test]
fn update_never_creates() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let root = Scope::root();
    assert!(!root.child_block().update(x, &Value::Int(3)));
    assert!(root.lookup(x).is_none());
}

#[test]
fn loop_flag_propagates_through_blocks_but_not_functions() {
    let root = Scope::root();
    let body = root.child_loop();
    let nested = body.child_block();
    assert!(nested.flags().contains(ScopeFlags::IN_LOOP));

    let frame = nested.function_frame(None);
    assert!(!frame.flags().contains(ScopeFlags::IN_LOOP));
    assert!(frame.flags().contains(ScopeFlags::IN_FUNCTION));
    assert!(frame.child_block().flags().contains(ScopeFlags::IN_FUNCTION));
}

#[test]
fn this_is_inherited_by_blocks() {
    let root = Scope::root();
    let frame = root.function_frame(Some(Value::Int(7)));
    assert!(matches!(frame.child_block().this(), Some(Value::Int(7))));
    assert!(root.child_block().this().is_none());
}
