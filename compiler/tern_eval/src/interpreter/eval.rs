//! The recursive evaluator.

use std::rc::Rc;

use tern_ir::{Arg, Expr, ExprKind};
use tern_stack::ensure_sufficient_stack;
use tracing::trace;

use super::Interpreter;
use crate::binder::{make_function, CallArgs};
use crate::builtins::hash_key;
use crate::environment::{AlreadyDeclared, ScopeRef};
use crate::errors::{duplicate_binding, name_not_found, not_implemented, type_mismatch};
use crate::signal::{ControlAction, EvalResult};
use crate::value::{DictValue, RecordValue, Value};

impl Interpreter<'_> {
    /// Evaluate `expr` in `scope`.
    ///
    /// Errors raised anywhere below pick up this node's span unless a
    /// deeper node already supplied one.
    pub fn eval(&mut self, expr: &Expr, scope: &ScopeRef) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(expr, scope))
            .map_err(|action| action.with_span(expr.span))
    }

    fn eval_inner(&mut self, expr: &Expr, scope: &ScopeRef) -> EvalResult {
        trace!(kind = expr.kind.describe(), start = expr.span.start, "eval");
        match &expr.kind {
            ExprKind::Int(n) => Ok(Value::Int(*n)),
            ExprKind::Str(s) => Ok(Value::Str(Rc::clone(s))),
            ExprKind::Bool(b) => Ok(Value::Bool(*b)),
            ExprKind::None => Ok(Value::None),
            ExprKind::Atom(name) => Ok(Value::Atom(*name)),
            ExprKind::List(items) => Ok(Value::list(self.eval_all(items, scope)?)),
            ExprKind::Dict(entries) => self.eval_dict(entries, scope),
            ExprKind::Record(fields) => {
                let mut values = Vec::with_capacity(fields.len());
                for (name, value) in fields {
                    values.push((*name, self.eval(value, scope)?));
                }
                Ok(Value::Record(Rc::new(RecordValue { fields: values })))
            }

            ExprKind::Ident(name) => scope
                .lookup(*name)
                .ok_or_else(|| name_not_found(self.interner.lookup(*name)).into()),
            ExprKind::This => scope.this().ok_or_else(|| name_not_found("this").into()),
            ExprKind::Attr { receiver, name } => {
                let receiver = self.eval(receiver, scope)?;
                self.get_attr(&receiver, *name)
            }
            ExprKind::Index { receiver, index } => {
                let receiver = self.eval(receiver, scope)?;
                let key = self.eval(index, scope)?;
                self.get_item(&receiver, &key)
            }
            ExprKind::Call { callee, args } => {
                let callee = self.eval(callee, scope)?;
                let args = self.eval_args(args, scope)?;
                self.call(&callee, args)
            }

            ExprKind::Seq(body) => self.eval_seq(body, scope),
            ExprKind::Block(body) => self.eval_seq(body, &scope.child_block()),

            ExprKind::Assign { target, value } => {
                self.eval_assign(target, value, scope)?;
                Ok(Value::None)
            }
            ExprKind::Declare { name, value } => {
                let value = self.eval(value, scope)?;
                scope
                    .declare(*name, value)
                    .map_err(|AlreadyDeclared| duplicate_binding(self.interner.lookup(*name)))?;
                Ok(Value::None)
            }

            ExprKind::Unary { op, operand } => {
                let operand = self.eval(operand, scope)?;
                self.eval_unary(*op, &operand)
            }
            ExprKind::Binary { op, left, right } => {
                let left = self.eval(left, scope)?;
                let right = self.eval(right, scope)?;
                self.eval_binary(*op, &left, &right)
            }
            ExprKind::And(left, right) => {
                let result = self.eval_bool(left, scope)? && self.eval_bool(right, scope)?;
                Ok(Value::Bool(result))
            }
            ExprKind::Or(left, right) => {
                let result = self.eval_bool(left, scope)? || self.eval_bool(right, scope)?;
                Ok(Value::Bool(result))
            }
            ExprKind::Compare { first, rest } => self.eval_compare(first, rest, scope),

            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                if self.eval_bool(cond, scope)? {
                    self.eval(then_branch, scope)
                } else if let Some(else_branch) = else_branch {
                    self.eval(else_branch, scope)
                } else {
                    Ok(Value::None)
                }
            }
            ExprKind::While { cond, body } => self.eval_while(cond, body, scope),
            ExprKind::For {
                binding,
                iterable,
                body,
            } => self.eval_for(*binding, iterable, body, scope),

            ExprKind::Lambda(def) => Ok(Value::Function(make_function(
                def,
                scope,
                self.interner,
            )?)),
            ExprKind::FnDecl(def) => {
                let func = Value::Function(make_function(def, scope, self.interner)?);
                if let Some(name) = def.name {
                    scope.assign(name, func.clone());
                }
                Ok(func)
            }
            ExprKind::Class(def) => {
                let class = Value::Class(Rc::new(self.eval_class(def, scope)?));
                scope.assign(def.name, class.clone());
                Ok(class)
            }

            ExprKind::Return(value) => self.eval_return(value.as_deref(), scope),
            ExprKind::Break => self.eval_break(scope),
            ExprKind::Continue => self.eval_continue(scope),
            ExprKind::Throw(value) => {
                let value = self.eval(value, scope)?;
                Err(ControlAction::Throw(value))
            }
            ExprKind::Try {
                body,
                binding,
                handler,
            } => self.eval_try(body, *binding, handler, scope),

            ExprKind::Print(args) => {
                let values = self.eval_all(args, scope)?;
                let line = values
                    .iter()
                    .map(|value| self.display(value))
                    .collect::<Vec<_>>()
                    .join(" ");
                self.print_handler.println(&line);
                Ok(Value::None)
            }

            ExprKind::Error => Err(not_implemented(expr.kind.describe()).into()),
        }
    }

    /// Value of the last expression, `none` if there are none.
    pub(super) fn eval_seq(&mut self, body: &[Expr], scope: &ScopeRef) -> EvalResult {
        let mut last = Value::None;
        for expr in body {
            last = self.eval(expr, scope)?;
        }
        Ok(last)
    }

    fn eval_all(&mut self, exprs: &[Expr], scope: &ScopeRef) -> Result<Vec<Value>, ControlAction> {
        exprs.iter().map(|expr| self.eval(expr, scope)).collect()
    }

    fn eval_dict(&mut self, entries: &[(Expr, Expr)], scope: &ScopeRef) -> EvalResult {
        let mut dict = DictValue::new();
        for (key_expr, value) in entries {
            let key_value = self.eval(key_expr, scope)?;
            let key = hash_key(self, &key_value).map_err(|e| e.with_span(key_expr.span))?;
            let value = self.eval(value, scope)?;
            dict.insert(key, value);
        }
        Ok(Value::dict(dict))
    }

    /// Arguments left to right; named duplicates fail here, before any
    /// binding happens.
    fn eval_args(&mut self, args: &[Arg], scope: &ScopeRef) -> Result<CallArgs, ControlAction> {
        let mut call_args = CallArgs::default();
        for arg in args {
            let value = self.eval(&arg.value, scope)?;
            match arg.name {
                Some(name) => call_args
                    .push_named(name, value, self.interner)
                    .map_err(|e| e.with_span(arg.span))?,
                None => call_args.positional.push(value),
            }
        }
        Ok(call_args)
    }

    fn eval_assign(
        &mut self,
        target: &Expr,
        value: &Expr,
        scope: &ScopeRef,
    ) -> Result<(), ControlAction> {
        match &target.kind {
            ExprKind::Ident(name) => {
                let value = self.eval(value, scope)?;
                scope.assign(*name, value);
                Ok(())
            }
            ExprKind::Attr { receiver, name } => {
                let receiver = self.eval(receiver, scope)?;
                let value = self.eval(value, scope)?;
                self.set_attr(&receiver, *name, value)
            }
            ExprKind::Index { receiver, index } => {
                let receiver = self.eval(receiver, scope)?;
                let key = self.eval(index, scope)?;
                let value = self.eval(value, scope)?;
                self.set_item(&receiver, key, value)
            }
            other => Err(not_implemented(other.describe()).into()),
        }
    }

    /// Conditions and `and`/`or` operands.
    pub(super) fn eval_bool(&mut self, expr: &Expr, scope: &ScopeRef) -> Result<bool, ControlAction> {
        match self.eval(expr, scope)? {
            Value::Bool(b) => Ok(b),
            other => Err(type_mismatch("bool", other.type_name(self.interner))
                .with_span(expr.span)
                .into()),
        }
    }
}
