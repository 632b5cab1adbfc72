//! Container attributes: `list`, `vector`, `dict`, `index`.

use std::cell::RefCell;
use std::rc::Rc;

use crate::errors::{index_out_of_bounds, type_mismatch};
use crate::signal::{ControlAction, EvalResult};
use crate::value::{HashKey, Value};
use crate::Interpreter;

use super::text::count;
use super::{check_arity, int_arg, wrong_receiver};

/// Key for a dict or index, or `TypeMismatch`.
pub(crate) fn hash_key(interp: &Interpreter<'_>, value: &Value) -> Result<HashKey, ControlAction> {
    HashKey::from_value(value)
        .ok_or_else(|| type_mismatch("hashable", value.type_name(interp.interner())).into())
}

/// Position `index` in a sequence of `len`, or `IndexOutOfBounds`.
pub(crate) fn checked_index(index: i64, len: usize) -> Result<usize, ControlAction> {
    usize::try_from(index)
        .ok()
        .filter(|&i| i < len)
        .ok_or_else(|| index_out_of_bounds(index, len).into())
}

pub(super) mod list {
    use super::{
        check_arity, count, index_out_of_bounds, wrong_receiver, ControlAction, EvalResult,
        Interpreter, Rc, RefCell, Value,
    };
    use crate::value::IteratorValue;

    fn items<'v>(
        interp: &Interpreter<'_>,
        receiver: &'v Value,
    ) -> Result<&'v Rc<RefCell<Vec<Value>>>, ControlAction> {
        match receiver {
            Value::List(items) => Ok(items),
            other => Err(wrong_receiver(interp, "list", other)),
        }
    }

    pub fn size(interp: &mut Interpreter<'_>, receiver: &Value) -> EvalResult {
        Ok(Value::Int(count(items(interp, receiver)?.borrow().len())))
    }

    pub fn last(interp: &mut Interpreter<'_>, receiver: &Value) -> EvalResult {
        let items = items(interp, receiver)?.borrow();
        items
            .last()
            .cloned()
            .ok_or_else(|| index_out_of_bounds(-1, 0).into())
    }

    /// Prepend one item.
    pub fn push(interp: &mut Interpreter<'_>, receiver: &Value, args: &[Value]) -> EvalResult {
        check_arity("list.push", &["item"], args)?;
        items(interp, receiver)?
            .borrow_mut()
            .insert(0, args[0].clone());
        Ok(Value::None)
    }

    /// Append every argument, in order.
    pub fn append(interp: &mut Interpreter<'_>, receiver: &Value, args: &[Value]) -> EvalResult {
        items(interp, receiver)?
            .borrow_mut()
            .extend(args.iter().cloned());
        Ok(Value::None)
    }

    /// Remove and return the first item.
    pub fn pop(interp: &mut Interpreter<'_>, receiver: &Value, args: &[Value]) -> EvalResult {
        check_arity("list.pop", &[], args)?;
        let mut items = items(interp, receiver)?.borrow_mut();
        if items.is_empty() {
            return Err(index_out_of_bounds(0, 0).into());
        }
        Ok(items.remove(0))
    }

    /// Remove and return the last item.
    pub fn shift(interp: &mut Interpreter<'_>, receiver: &Value, args: &[Value]) -> EvalResult {
        check_arity("list.shift", &[], args)?;
        items(interp, receiver)?
            .borrow_mut()
            .pop()
            .ok_or_else(|| index_out_of_bounds(-1, 0).into())
    }

    pub fn iter(interp: &mut Interpreter<'_>, receiver: &Value, args: &[Value]) -> EvalResult {
        check_arity("list.iter", &[], args)?;
        let items = Rc::clone(items(interp, receiver)?);
        Ok(Value::iterator(IteratorValue::List { items, pos: 0 }))
    }
}

pub(super) mod vector {
    use super::{
        check_arity, checked_index, count, index_out_of_bounds, int_arg, wrong_receiver,
        ControlAction, EvalResult, Interpreter, Rc, Value,
    };
    use crate::value::IteratorValue;

    fn items<'v>(
        interp: &Interpreter<'_>,
        receiver: &'v Value,
    ) -> Result<&'v Rc<Vec<Value>>, ControlAction> {
        match receiver {
            Value::Vector(items) => Ok(items),
            other => Err(wrong_receiver(interp, "vector", other)),
        }
    }

    /// `vector.empty`
    pub fn empty(_: &mut Interpreter<'_>, _: &Value) -> EvalResult {
        Ok(Value::vector(Vec::new()))
    }

    pub fn size(interp: &mut Interpreter<'_>, receiver: &Value) -> EvalResult {
        Ok(Value::Int(count(items(interp, receiver)?.len())))
    }

    pub fn first(interp: &mut Interpreter<'_>, receiver: &Value) -> EvalResult {
        items(interp, receiver)?
            .first()
            .cloned()
            .ok_or_else(|| index_out_of_bounds(0, 0).into())
    }

    pub fn last(interp: &mut Interpreter<'_>, receiver: &Value) -> EvalResult {
        items(interp, receiver)?
            .last()
            .cloned()
            .ok_or_else(|| index_out_of_bounds(-1, 0).into())
    }

    /// New vector with each argument prepended in turn.
    pub fn push(interp: &mut Interpreter<'_>, receiver: &Value, args: &[Value]) -> EvalResult {
        let old = items(interp, receiver)?;
        let items = args.iter().rev().chain(old.iter()).cloned().collect();
        Ok(Value::vector(items))
    }

    /// New vector with the arguments appended.
    pub fn append(interp: &mut Interpreter<'_>, receiver: &Value, args: &[Value]) -> EvalResult {
        let old = items(interp, receiver)?;
        let items = old.iter().chain(args).cloned().collect();
        Ok(Value::vector(items))
    }

    /// New vector with position `i` replaced.
    pub fn update(interp: &mut Interpreter<'_>, receiver: &Value, args: &[Value]) -> EvalResult {
        check_arity("vector.update", &["index", "item"], args)?;
        let old = items(interp, receiver)?;
        let i = checked_index(int_arg(interp, &args[0])?, old.len())?;
        let mut items = Vec::clone(old);
        items[i] = args[1].clone();
        Ok(Value::vector(items))
    }

    /// New vector without the first item.
    pub fn pop(interp: &mut Interpreter<'_>, receiver: &Value, args: &[Value]) -> EvalResult {
        check_arity("vector.pop", &[], args)?;
        match items(interp, receiver)?.split_first() {
            Some((_, rest)) => Ok(Value::vector(rest.to_vec())),
            None => Err(index_out_of_bounds(0, 0).into()),
        }
    }

    /// New vector without the last item.
    pub fn shift(interp: &mut Interpreter<'_>, receiver: &Value, args: &[Value]) -> EvalResult {
        check_arity("vector.shift", &[], args)?;
        match items(interp, receiver)?.split_last() {
            Some((_, rest)) => Ok(Value::vector(rest.to_vec())),
            None => Err(index_out_of_bounds(-1, 0).into()),
        }
    }

    pub fn iter(interp: &mut Interpreter<'_>, receiver: &Value, args: &[Value]) -> EvalResult {
        check_arity("vector.iter", &[], args)?;
        let items = Rc::clone(items(interp, receiver)?);
        Ok(Value::iterator(IteratorValue::Vector { items, pos: 0 }))
    }
}

pub(super) mod dict {
    use super::{
        check_arity, count, hash_key, wrong_receiver, ControlAction, EvalResult, Interpreter, Rc,
        RefCell, Value,
    };
    use crate::value::{DictValue, IteratorValue};

    fn entries<'v>(
        interp: &Interpreter<'_>,
        receiver: &'v Value,
    ) -> Result<&'v Rc<RefCell<DictValue>>, ControlAction> {
        match receiver {
            Value::Dict(dict) => Ok(dict),
            other => Err(wrong_receiver(interp, "dict", other)),
        }
    }

    pub fn size(interp: &mut Interpreter<'_>, receiver: &Value) -> EvalResult {
        Ok(Value::Int(count(entries(interp, receiver)?.borrow().len())))
    }

    /// Value for `key`, or `none`.
    pub fn get(interp: &mut Interpreter<'_>, receiver: &Value, args: &[Value]) -> EvalResult {
        check_arity("dict.get", &["key"], args)?;
        let key = hash_key(interp, &args[0])?;
        let dict = entries(interp, receiver)?.borrow();
        Ok(dict.get(&key).cloned().unwrap_or(Value::None))
    }

    pub fn clear(interp: &mut Interpreter<'_>, receiver: &Value, args: &[Value]) -> EvalResult {
        check_arity("dict.clear", &[], args)?;
        entries(interp, receiver)?.borrow_mut().clear();
        Ok(Value::None)
    }

    pub fn keys(interp: &mut Interpreter<'_>, receiver: &Value, args: &[Value]) -> EvalResult {
        check_arity("dict.keys", &[], args)?;
        Ok(Value::list(entries(interp, receiver)?.borrow().keys()))
    }

    /// Iterates a snapshot of the keys.
    pub fn iter(interp: &mut Interpreter<'_>, receiver: &Value, args: &[Value]) -> EvalResult {
        check_arity("dict.iter", &[], args)?;
        let keys = entries(interp, receiver)?.borrow().keys();
        Ok(Value::iterator(IteratorValue::snapshot(keys)))
    }
}

pub(super) mod index {
    use super::{
        check_arity, count, hash_key, wrong_receiver, ControlAction, EvalResult, Interpreter, Rc,
        Value,
    };
    use crate::value::{IndexValue, IteratorValue};

    fn map<'v>(
        interp: &Interpreter<'_>,
        receiver: &'v Value,
    ) -> Result<&'v Rc<IndexValue>, ControlAction> {
        match receiver {
            Value::Index(map) => Ok(map),
            other => Err(wrong_receiver(interp, "index", other)),
        }
    }

    pub fn size(interp: &mut Interpreter<'_>, receiver: &Value) -> EvalResult {
        Ok(Value::Int(count(map(interp, receiver)?.len())))
    }

    /// Value for `key`, or `none`.
    pub fn get(interp: &mut Interpreter<'_>, receiver: &Value, args: &[Value]) -> EvalResult {
        check_arity("index.get", &["key"], args)?;
        let key = hash_key(interp, &args[0])?;
        Ok(map(interp, receiver)?
            .get(&key)
            .cloned()
            .unwrap_or(Value::None))
    }

    /// New index with `key` bound to `value`.
    pub fn update(interp: &mut Interpreter<'_>, receiver: &Value, args: &[Value]) -> EvalResult {
        check_arity("index.update", &["key", "value"], args)?;
        let key = hash_key(interp, &args[0])?;
        let updated = map(interp, receiver)?.updated(key, args[1].clone());
        Ok(Value::Index(Rc::new(updated)))
    }

    pub fn keys(interp: &mut Interpreter<'_>, receiver: &Value, args: &[Value]) -> EvalResult {
        check_arity("index.keys", &[], args)?;
        Ok(Value::list(map(interp, receiver)?.keys()))
    }

    pub fn iter(interp: &mut Interpreter<'_>, receiver: &Value, args: &[Value]) -> EvalResult {
        check_arity("index.iter", &[], args)?;
        let keys = map(interp, receiver)?.keys();
        Ok(Value::iterator(IteratorValue::snapshot(keys)))
    }
}
