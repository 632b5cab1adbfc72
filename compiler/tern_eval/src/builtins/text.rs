//! `str` and `atom` attributes.

use std::rc::Rc;

use crate::signal::EvalResult;
use crate::value::{IteratorValue, Value};
use crate::Interpreter;

use super::iterator::collect;
use super::{check_arity, wrong_receiver};

/// Length in characters.
pub(super) fn size(interp: &mut Interpreter<'_>, receiver: &Value) -> EvalResult {
    match receiver {
        Value::Str(s) => Ok(Value::Int(count(s.chars().count()))),
        other => Err(wrong_receiver(interp, "str", other)),
    }
}

/// `sep.join(items)`: display each item, separated by `sep`.
pub(super) fn join(interp: &mut Interpreter<'_>, receiver: &Value, args: &[Value]) -> EvalResult {
    check_arity("str.join", &["items"], args)?;
    let Value::Str(sep) = receiver else {
        return Err(wrong_receiver(interp, "str", receiver));
    };
    let items = collect(interp, &args[0])?;
    let parts: Vec<String> = items.iter().map(|item| interp.display(item)).collect();
    Ok(Value::str(&parts.join(&**sep)))
}

pub(super) fn iter(interp: &mut Interpreter<'_>, receiver: &Value, args: &[Value]) -> EvalResult {
    check_arity("str.iter", &[], args)?;
    match receiver {
        Value::Str(s) => Ok(Value::iterator(IteratorValue::Chars {
            text: Rc::clone(s),
            pos: 0,
        })),
        other => Err(wrong_receiver(interp, "str", other)),
    }
}

pub(super) fn atom_name(interp: &mut Interpreter<'_>, receiver: &Value) -> EvalResult {
    match receiver {
        Value::Atom(name) => Ok(Value::str(interp.interner().lookup(*name))),
        other => Err(wrong_receiver(interp, "atom", other)),
    }
}

/// Lengths are reported as `int`.
pub(crate) fn count(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX)
}
