//! Operators.
//!
//! Integer arithmetic is checked: overflow is an error, never a wrap.
//! Division and remainder truncate toward zero.

use std::cmp::Ordering;
use std::rc::Rc;

use tern_ir::{BinaryOp, CompareOp, Expr, UnaryOp};

use super::Interpreter;
use crate::environment::ScopeRef;
use crate::errors::{division_by_zero, integer_overflow, not_supported, type_mismatch};
use crate::signal::{ControlAction, EvalResult};
use crate::value::Value;

impl Interpreter<'_> {
    pub(super) fn eval_unary(&self, op: UnaryOp, operand: &Value) -> EvalResult {
        match (op, operand) {
            (UnaryOp::Neg, Value::Int(n)) => n
                .checked_neg()
                .map(Value::Int)
                .ok_or_else(|| integer_overflow("negation").into()),
            (UnaryOp::Not, Value::Bool(b)) => Ok(Value::Bool(!b)),
            (UnaryOp::Neg, other) => Err(self.mismatch("int", other)),
            (UnaryOp::Not, other) => Err(self.mismatch("bool", other)),
        }
    }

    pub(super) fn eval_binary(&self, op: BinaryOp, left: &Value, right: &Value) -> EvalResult {
        match (left, right) {
            (Value::Int(a), Value::Int(b)) => int_binary(op, *a, *b),
            (Value::Str(a), Value::Str(b)) if op == BinaryOp::Add => {
                let mut joined = String::with_capacity(a.len() + b.len());
                joined.push_str(a);
                joined.push_str(b);
                Ok(Value::Str(Rc::from(joined)))
            }
            (Value::List(a), Value::List(b)) if op == BinaryOp::Add => {
                let items = a.borrow().iter().chain(b.borrow().iter()).cloned().collect();
                Ok(Value::list(items))
            }
            (Value::Int(_), other) => Err(self.mismatch("int", other)),
            (Value::Str(_), other) if op == BinaryOp::Add => Err(self.mismatch("str", other)),
            (Value::List(_), other) if op == BinaryOp::Add => Err(self.mismatch("list", other)),
            (other, _) => Err(not_supported(op.as_symbol(), other.type_name(self.interner)).into()),
        }
    }

    /// `a < b <= c`: each operand evaluated once, stopping at the first
    /// false link.
    pub(super) fn eval_compare(
        &mut self,
        first: &Expr,
        rest: &[(CompareOp, Expr)],
        scope: &ScopeRef,
    ) -> EvalResult {
        let mut left = self.eval(first, scope)?;
        for (op, right) in rest {
            let right = self.eval(right, scope)?;
            if !self.compare(*op, &left, &right)? {
                return Ok(Value::Bool(false));
            }
            left = right;
        }
        Ok(Value::Bool(true))
    }

    fn compare(&self, op: CompareOp, left: &Value, right: &Value) -> Result<bool, ControlAction> {
        Ok(match op {
            CompareOp::Eq => left.equals(right),
            CompareOp::NotEq => !left.equals(right),
            CompareOp::Lt => self.order(left, right)?.is_lt(),
            CompareOp::LtEq => self.order(left, right)?.is_le(),
            CompareOp::Gt => self.order(left, right)?.is_gt(),
            CompareOp::GtEq => self.order(left, right)?.is_ge(),
        })
    }

    /// Ordering is defined on `int` and on `str`.
    fn order(&self, left: &Value, right: &Value) -> Result<Ordering, ControlAction> {
        match (left, right) {
            (Value::Int(a), Value::Int(b)) => Ok(a.cmp(b)),
            (Value::Str(a), Value::Str(b)) => Ok(a.cmp(b)),
            (Value::Int(_) | Value::Str(_), other) => {
                Err(self.mismatch(left.type_name(self.interner), other))
            }
            (other, _) => Err(not_supported("ordering", other.type_name(self.interner)).into()),
        }
    }

    #[cold]
    fn mismatch(&self, expected: &'static str, got: &Value) -> ControlAction {
        type_mismatch(expected, got.type_name(self.interner)).into()
    }
}

fn int_binary(op: BinaryOp, a: i64, b: i64) -> EvalResult {
    let result = match op {
        BinaryOp::Add => a.checked_add(b).ok_or_else(|| integer_overflow("addition")),
        BinaryOp::Sub => a.checked_sub(b).ok_or_else(|| integer_overflow("subtraction")),
        BinaryOp::Mul => a.checked_mul(b).ok_or_else(|| integer_overflow("multiplication")),
        BinaryOp::Div if b == 0 => Err(division_by_zero()),
        BinaryOp::Div => a.checked_div(b).ok_or_else(|| integer_overflow("division")),
        BinaryOp::Mod if b == 0 => Err(division_by_zero()),
        BinaryOp::Mod => a.checked_rem(b).ok_or_else(|| integer_overflow("remainder")),
    };
    result.map(Value::Int).map_err(ControlAction::from)
}
