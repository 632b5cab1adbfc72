//! Values supplied by the embedding application.

use std::fmt;

use tern_ir::Name;

use super::Value;
use crate::binder::CallArgs;
use crate::builtins::types::HOST_TYPE;
use crate::errors::{attribute_error, not_supported};
use crate::signal::{ControlAction, EvalResult};
use crate::Interpreter;

/// Capability contract for external value kinds.
///
/// Implement only what the kind supports; every default fails the same way
/// the builtin kinds do. Methods take `&self`: use interior mutability for
/// state.
pub trait HostValue: fmt::Debug {
    /// Kind name for diagnostics, `typeof` and `print`.
    fn type_name(&self) -> &'static str;

    fn display(&self) -> String {
        format!("<{}>", self.type_name())
    }

    fn call(&self, interp: &mut Interpreter<'_>, args: CallArgs) -> EvalResult {
        let _ = (interp, args);
        Err(not_supported("call", self.type_name()).into())
    }

    fn get_attr(&self, interp: &mut Interpreter<'_>, name: Name) -> EvalResult {
        Err(attribute_error(interp.interner().lookup(name), self.type_name()).into())
    }

    fn set_attr(
        &self,
        interp: &mut Interpreter<'_>,
        name: Name,
        value: Value,
    ) -> Result<(), ControlAction> {
        let _ = value;
        Err(attribute_error(interp.interner().lookup(name), self.type_name()).into())
    }

    fn get_item(&self, interp: &mut Interpreter<'_>, key: &Value) -> EvalResult {
        let _ = (interp, key);
        Err(not_supported("indexing", self.type_name()).into())
    }

    fn set_item(
        &self,
        interp: &mut Interpreter<'_>,
        key: Value,
        value: Value,
    ) -> Result<(), ControlAction> {
        let _ = (interp, key, value);
        Err(not_supported("index assignment", self.type_name()).into())
    }

    /// Result of `typeof`. Defaults to the shared `host` type object.
    fn type_of(&self) -> Value {
        Value::Type(&HOST_TYPE)
    }
}
