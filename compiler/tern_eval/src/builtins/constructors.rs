//! What calling a type object does.

use std::rc::Rc;

use crate::errors::{invalid_conversion, type_mismatch};
use crate::signal::EvalResult;
use crate::value::{DictValue, IndexValue, Value};
use crate::Interpreter;

use super::check_arity;

/// `int(x)`: integers pass through, strings are parsed.
pub(super) fn int(interp: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    check_arity("int", &["value"], args)?;
    match &args[0] {
        Value::Int(n) => Ok(Value::Int(*n)),
        Value::Str(s) => s
            .trim()
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| invalid_conversion(&format!("{s:?}"), "int").into()),
        other => Err(type_mismatch("int or str", other.type_name(interp.interner())).into()),
    }
}

/// `str(x)`: the display form.
pub(super) fn str(interp: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    check_arity("str", &["value"], args)?;
    match &args[0] {
        Value::Str(s) => Ok(Value::Str(Rc::clone(s))),
        other => Ok(Value::str(&interp.display(other))),
    }
}

/// `list(a, b, ..)`
pub(super) fn list(_: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    Ok(Value::list(args.to_vec()))
}

/// `vector(a, b, ..)`
pub(super) fn vector(_: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    Ok(Value::vector(args.to_vec()))
}

/// `dict()`
pub(super) fn dict(_: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    check_arity("dict", &[], args)?;
    Ok(Value::dict(DictValue::new()))
}

/// `index()`
pub(super) fn index(_: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    check_arity("index", &[], args)?;
    Ok(Value::Index(Rc::new(IndexValue::new())))
}
