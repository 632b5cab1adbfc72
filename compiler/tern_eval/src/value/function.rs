//! Callable values.

use std::rc::Rc;

use tern_ir::{FunctionDef, StringInterner};

use super::Value;
use crate::builtins::types::{BuiltinAttr, TypeDesc};
use crate::environment::ScopeRef;
use crate::object::ObjectValue;
use crate::signal::EvalResult;
use crate::Interpreter;

/// A closure: a definition paired with the scope it was created in.
///
/// Every call evaluates the body in a fresh child of `captured`, never of
/// the caller's scope.
pub struct FunctionValue {
    pub def: Rc<FunctionDef>,
    pub captured: ScopeRef,
}

impl FunctionValue {
    /// Debug name, `lambda` for anonymous functions.
    pub fn name(&self, interner: &StringInterner) -> &'static str {
        self.def.name.map_or("lambda", |name| interner.lookup(name))
    }
}

/// A method read off an object, remembering its receiver.
pub struct BoundMethod {
    pub receiver: Rc<ObjectValue>,
    pub method: Rc<FunctionValue>,
}

/// Signature of builtin functions and type constructors.
pub type BuiltinFn = fn(&mut Interpreter<'_>, &[Value]) -> EvalResult;

/// A root-scope function.
pub struct BuiltinFunction {
    pub name: &'static str,
    pub func: BuiltinFn,
}

/// A builtin method read off a value, remembering its receiver.
pub struct BuiltinMethod {
    pub receiver: Value,
    pub owner: &'static TypeDesc,
    pub attr: &'static BuiltinAttr,
}
