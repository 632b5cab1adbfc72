//! Loops, `try`, and the keywords that raise signals.
//!
//! `return`, `break` and `continue` check the scope flags before raising,
//! so a signal only ever starts where something will intercept it.

use tern_ir::{Expr, Name};

use super::Interpreter;
use crate::builtins::{iterate, next_item};
use crate::environment::{ScopeFlags, ScopeRef};
use crate::errors::control_misuse;
use crate::signal::{ControlAction, EvalResult};
use crate::value::Value;

/// What a loop does after one pass over its body.
enum LoopStep {
    Next,
    Exit,
}

/// Intercept `break` and `continue`; everything else keeps unwinding.
fn loop_step(result: EvalResult) -> Result<LoopStep, ControlAction> {
    match result {
        Ok(_) | Err(ControlAction::Continue) => Ok(LoopStep::Next),
        Err(ControlAction::Break) => Ok(LoopStep::Exit),
        Err(other) => Err(other),
    }
}

impl Interpreter<'_> {
    pub(super) fn eval_while(&mut self, cond: &Expr, body: &Expr, scope: &ScopeRef) -> EvalResult {
        while self.eval_bool(cond, scope)? {
            let iteration = scope.child_loop();
            if let LoopStep::Exit = loop_step(self.eval(body, &iteration))? {
                break;
            }
        }
        Ok(Value::None)
    }

    pub(super) fn eval_for(
        &mut self,
        binding: Name,
        iterable: &Expr,
        body: &Expr,
        scope: &ScopeRef,
    ) -> EvalResult {
        let iterable = self.eval(iterable, scope)?;
        let iterator = iterate(self, &iterable)?;
        while let Some(item) = next_item(self, &iterator)? {
            // Fresh frame per item: closures in the body capture this
            // iteration's binding.
            let iteration = scope.child_loop();
            iteration.define(binding, item);
            if let LoopStep::Exit = loop_step(self.eval(body, &iteration))? {
                break;
            }
        }
        Ok(Value::None)
    }

    pub(super) fn eval_return(&mut self, value: Option<&Expr>, scope: &ScopeRef) -> EvalResult {
        if !scope.flags().contains(ScopeFlags::IN_FUNCTION) {
            return Err(control_misuse("return").into());
        }
        let value = match value {
            Some(expr) => self.eval(expr, scope)?,
            None => Value::None,
        };
        Err(ControlAction::Return(value))
    }

    pub(super) fn eval_break(&self, scope: &ScopeRef) -> EvalResult {
        if scope.flags().contains(ScopeFlags::IN_LOOP) {
            Err(ControlAction::Break)
        } else {
            Err(control_misuse("break").into())
        }
    }

    pub(super) fn eval_continue(&self, scope: &ScopeRef) -> EvalResult {
        if scope.flags().contains(ScopeFlags::IN_LOOP) {
            Err(ControlAction::Continue)
        } else {
            Err(control_misuse("continue").into())
        }
    }

    /// A `throw` from `body` binds its value in a fresh child scope and runs
    /// `handler` there. Errors are not catchable.
    pub(super) fn eval_try(
        &mut self,
        body: &Expr,
        binding: Name,
        handler: &Expr,
        scope: &ScopeRef,
    ) -> EvalResult {
        match self.eval(body, &scope.child_block()) {
            Err(ControlAction::Throw(value)) => {
                let catch_scope = scope.child_block();
                catch_scope.define(binding, value);
                self.eval(handler, &catch_scope)
            }
            other => other,
        }
    }
}
