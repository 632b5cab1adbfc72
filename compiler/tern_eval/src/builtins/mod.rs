//! Builtin functions, type objects and per-kind attribute tables.
//!
//! Nothing here is global: [`register_root`] binds everything into the
//! root scope owned by one interpreter.

mod collections;
mod constructors;
mod iterator;
mod text;
pub mod types;

use tern_ir::StringInterner;

use crate::environment::ScopeRef;
use crate::errors::{missing_parameter, too_many_arguments, type_mismatch};
use crate::signal::{ControlAction, EvalResult};
use crate::value::{BuiltinFunction, IteratorValue, Value};
use crate::Interpreter;
use types::ROOT_TYPES;

pub(crate) use collections::{checked_index, hash_key};
pub use iterator::{iterate, next_item};

static ROOT_FUNCTIONS: [BuiltinFunction; 5] = [
    BuiltinFunction {
        name: "sign",
        func: sign,
    },
    BuiltinFunction {
        name: "load",
        func: load,
    },
    BuiltinFunction {
        name: "typeof",
        func: type_of,
    },
    BuiltinFunction {
        name: "isinstance",
        func: is_instance,
    },
    BuiltinFunction {
        name: "range",
        func: range,
    },
];

/// Bind builtin functions, type objects and `stop` into `root`.
pub fn register_root(root: &ScopeRef, interner: &StringInterner) {
    for builtin in &ROOT_FUNCTIONS {
        root.define(interner.intern(builtin.name), Value::Builtin(builtin));
    }
    for desc in ROOT_TYPES {
        root.define(interner.intern(desc.name), Value::Type(desc));
    }
    root.define(interner.intern("stop"), Value::Stop);
}

/// Fail unless exactly `params.len()` arguments were passed.
pub(crate) fn check_arity(
    function: &str,
    params: &[&str],
    args: &[Value],
) -> Result<(), ControlAction> {
    if args.len() > params.len() {
        return Err(too_many_arguments(function, params.len(), args.len()).into());
    }
    if let Some(missing) = params.get(args.len()) {
        return Err(missing_parameter(missing, function).into());
    }
    Ok(())
}

/// Integer argument, or `TypeMismatch`.
pub(crate) fn int_arg(interp: &Interpreter<'_>, value: &Value) -> Result<i64, ControlAction> {
    match value {
        Value::Int(n) => Ok(*n),
        other => Err(type_mismatch("int", other.type_name(interp.interner())).into()),
    }
}

/// Receiver of the wrong kind.
///
/// Only reachable through unbound methods, which check the kind first.
#[cold]
pub(crate) fn wrong_receiver(
    interp: &Interpreter<'_>,
    expected: &'static str,
    got: &Value,
) -> ControlAction {
    type_mismatch(expected, got.type_name(interp.interner())).into()
}

fn sign(interp: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    check_arity("sign", &["value"], args)?;
    let n = int_arg(interp, &args[0])?;
    Ok(Value::Int(n.signum()))
}

fn load(interp: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    check_arity("load", &["path"], args)?;
    match &args[0] {
        Value::Str(path) => interp.load_module(path),
        other => Err(type_mismatch("str", other.type_name(interp.interner())).into()),
    }
}

fn type_of(interp: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    check_arity("typeof", &["value"], args)?;
    Ok(interp.type_of(&args[0]))
}

fn is_instance(interp: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    check_arity("isinstance", &["value", "type"], args)?;
    let actual = interp.type_of(&args[0]);
    Ok(Value::Bool(actual.equals(&args[1])))
}

/// `range(end)` or `range(start, end)`, lazily.
fn range(interp: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    let (start, end) = match args {
        [end] => (0, int_arg(interp, end)?),
        [start, end] => (int_arg(interp, start)?, int_arg(interp, end)?),
        [] => return Err(missing_parameter("end", "range").into()),
        _ => return Err(too_many_arguments("range", 2, args.len()).into()),
    };
    Ok(Value::iterator(IteratorValue::Range { next: start, end }))
}

#[cfg(test)]
mod tests;
