//! Function creation, argument collection and parameter binding.
//!
//! Binding a call against `f(p1, .., pn)`:
//!
//! 1. Named arguments bind first. A name with no matching parameter fails;
//!    duplicates were already rejected while the arguments were collected.
//! 2. Parameters are walked in order. One bound by name is skipped;
//!    otherwise it takes the next positional argument, else its default
//!    (evaluated in the callee's frame, so it sees earlier parameters), else
//!    the call fails.
//! 3. The body runs in that frame; a `return` becomes the call's result.

use std::rc::Rc;

use smallvec::SmallVec;
use tern_ir::{FunctionDef, Name, StringInterner};

use crate::environment::ScopeRef;
use crate::errors::{
    duplicate_named_argument, duplicate_parameter, missing_parameter, recursion_limit_exceeded,
    signal_leak, too_many_arguments, unknown_named_argument, EvalError,
};
use crate::signal::{ControlAction, EvalResult};
use crate::value::{FunctionValue, Value};
use crate::Interpreter;

/// Evaluated call-site arguments.
#[derive(Debug, Default)]
pub struct CallArgs {
    pub positional: SmallVec<[Value; 4]>,
    pub named: SmallVec<[(Name, Value); 2]>,
}

impl CallArgs {
    pub fn positional(values: impl IntoIterator<Item = Value>) -> Self {
        CallArgs {
            positional: values.into_iter().collect(),
            named: SmallVec::new(),
        }
    }

    /// Add `name=value`, rejecting a name already supplied.
    pub fn push_named(
        &mut self,
        name: Name,
        value: Value,
        interner: &StringInterner,
    ) -> Result<(), EvalError> {
        if self.named.iter().any(|(existing, _)| *existing == name) {
            return Err(duplicate_named_argument(interner.lookup(name)));
        }
        self.named.push((name, value));
        Ok(())
    }

    /// Builtins and constructors take positional arguments only.
    pub fn reject_named(&self, function: &str, interner: &StringInterner) -> Result<(), EvalError> {
        match self.named.first() {
            Some((name, _)) => Err(unknown_named_argument(interner.lookup(*name), function)),
            None => Ok(()),
        }
    }

    pub fn len(&self) -> usize {
        self.positional.len() + self.named.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }
}

/// Close `def` over `captured`, rejecting duplicate parameter names.
pub fn make_function(
    def: &Rc<FunctionDef>,
    captured: &ScopeRef,
    interner: &StringInterner,
) -> Result<Rc<FunctionValue>, EvalError> {
    for (i, param) in def.params.iter().enumerate() {
        if def.params[..i].iter().any(|earlier| earlier.name == param.name) {
            let function = def.name.map_or("lambda", |name| interner.lookup(name));
            return Err(
                duplicate_parameter(interner.lookup(param.name), function).with_span(param.span)
            );
        }
    }
    Ok(Rc::new(FunctionValue {
        def: Rc::clone(def),
        captured: captured.clone(),
    }))
}

impl Interpreter<'_> {
    /// Call a user function or method. `this` is the receiver for methods,
    /// and the defining scope's `this` for plain closures.
    #[tracing::instrument(level = "debug", skip_all, fields(function = func.name(self.interner)))]
    pub(crate) fn call_function(
        &mut self,
        func: &Rc<FunctionValue>,
        args: CallArgs,
        this: Option<Value>,
    ) -> EvalResult {
        if self.call_depth >= self.max_call_depth {
            return Err(recursion_limit_exceeded(self.max_call_depth).into());
        }
        self.call_depth += 1;
        let frame = func.captured.function_frame(this);
        let result = self
            .bind_arguments(func, &frame, args)
            .and_then(|()| self.eval(&func.def.body, &frame));
        self.call_depth -= 1;

        match result {
            Ok(value) | Err(ControlAction::Return(value)) => Ok(value),
            Err(action @ (ControlAction::Break | ControlAction::Continue)) => {
                Err(signal_leak(action.keyword()).into())
            }
            Err(other) => Err(other),
        }
    }

    fn bind_arguments(
        &mut self,
        func: &FunctionValue,
        frame: &ScopeRef,
        args: CallArgs,
    ) -> Result<(), ControlAction> {
        let params = &func.def.params;
        let function = func.name(self.interner);
        let total = args.len();
        let mut bound: SmallVec<[bool; 8]> = SmallVec::from_elem(false, params.len());

        for (name, value) in args.named {
            let Some(i) = params.iter().position(|param| param.name == name) else {
                return Err(unknown_named_argument(self.interner.lookup(name), function).into());
            };
            bound[i] = true;
            frame.define(name, value);
        }

        let unbound = bound.iter().filter(|&&is_bound| !is_bound).count();
        if args.positional.len() > unbound {
            return Err(too_many_arguments(function, params.len(), total).into());
        }

        let mut positional = args.positional.into_iter();
        for (param, &is_bound) in params.iter().zip(&bound) {
            if is_bound {
                continue;
            }
            let value = if let Some(value) = positional.next() {
                value
            } else if let Some(default) = &param.default {
                self.eval(default, frame)?
            } else {
                return Err(missing_parameter(self.interner.lookup(param.name), function)
                    .with_span(param.span)
                    .into());
            };
            frame.define(param.name, value);
        }
        Ok(())
    }
}
