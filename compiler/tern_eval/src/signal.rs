//! Non-local exits.
//!
//! Every evaluation step returns `Result<Value, ControlAction>`. Signals ride
//! the `Err` side so `?` unwinds them; each construct that intercepts one
//! does so with an explicit `match`:
//!
//! | signal | intercepted by |
//! |--------|----------------|
//! | `Return` | function, method and constructor calls |
//! | `Break`, `Continue` | the innermost `while` / `for` |
//! | `Throw` | `try` / `catch` |
//! | `Error` | nothing in Tern code; reaches the host |

use crate::errors::EvalError;
use crate::value::Value;

#[derive(Clone, Debug)]
pub enum ControlAction {
    Error(EvalError),
    Return(Value),
    Break,
    Continue,
    Throw(Value),
}

impl ControlAction {
    /// Keyword that raised the signal, for leak diagnostics.
    pub fn keyword(&self) -> &'static str {
        match self {
            ControlAction::Error(_) => "error",
            ControlAction::Return(_) => "return",
            ControlAction::Break => "break",
            ControlAction::Continue => "continue",
            ControlAction::Throw(_) => "throw",
        }
    }

    /// Attach a span to an internal error; signals pass through untouched.
    #[must_use]
    pub fn with_span(self, span: tern_ir::Span) -> Self {
        match self {
            ControlAction::Error(e) => ControlAction::Error(e.with_span(span)),
            other => other,
        }
    }
}

impl From<EvalError> for ControlAction {
    #[inline]
    fn from(e: EvalError) -> Self {
        ControlAction::Error(e)
    }
}

/// Result of evaluating an expression.
pub type EvalResult = Result<Value, ControlAction>;
