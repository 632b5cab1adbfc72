//! The iteration protocol.
//!
//! An `iterator` value is used as is. Anything else must answer `iter()`
//! with an object whose `next()` returns items until it returns `stop`.
//! User classes take part by defining those two methods.

use crate::binder::CallArgs;
use crate::errors::{type_mismatch, EvalErrorKind};
use crate::signal::{ControlAction, EvalResult};
use crate::value::Value;
use crate::Interpreter;

use super::{check_arity, wrong_receiver};

/// Start iterating `value`.
pub fn iterate(interp: &mut Interpreter<'_>, value: &Value) -> EvalResult {
    if let Value::Iterator(_) = value {
        return Ok(value.clone());
    }
    let iter = match interp.get_attr(value, interp.names().iter) {
        Ok(iter) => iter,
        Err(ControlAction::Error(e)) if matches!(e.kind, EvalErrorKind::AttributeError { .. }) => {
            return Err(type_mismatch("iterable", value.type_name(interp.interner())).into());
        }
        Err(other) => return Err(other),
    };
    interp.call(&iter, CallArgs::default())
}

/// Pull one item; `None` once the iterator reports `stop`.
pub fn next_item(
    interp: &mut Interpreter<'_>,
    iterator: &Value,
) -> Result<Option<Value>, ControlAction> {
    if let Value::Iterator(state) = iterator {
        return Ok(state.borrow_mut().next_item());
    }
    let next = interp.get_attr(iterator, interp.names().next)?;
    match interp.call(&next, CallArgs::default())? {
        Value::Stop => Ok(None),
        item => Ok(Some(item)),
    }
}

/// Drain an iterable into a vector.
pub(crate) fn collect(
    interp: &mut Interpreter<'_>,
    value: &Value,
) -> Result<Vec<Value>, ControlAction> {
    let iterator = iterate(interp, value)?;
    let mut items = Vec::new();
    while let Some(item) = next_item(interp, &iterator)? {
        items.push(item);
    }
    Ok(items)
}

pub(super) fn next(interp: &mut Interpreter<'_>, receiver: &Value, args: &[Value]) -> EvalResult {
    check_arity("iterator.next", &[], args)?;
    match receiver {
        Value::Iterator(state) => Ok(state.borrow_mut().next_item().unwrap_or(Value::Stop)),
        other => Err(wrong_receiver(interp, "iterator", other)),
    }
}

pub(super) fn iter(_: &mut Interpreter<'_>, receiver: &Value, args: &[Value]) -> EvalResult {
    check_arity("iterator.iter", &[], args)?;
    Ok(receiver.clone())
}
