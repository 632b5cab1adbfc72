//! Tern Eval - tree-walking evaluator for the Tern language.
//!
//! # Architecture
//!
//! - [`Value`]: closed enum over the builtin kinds, plus [`HostValue`] for
//!   kinds supplied by an embedding application
//! - [`environment`]: lexical scope chain with the innermost-create `=` rule
//! - [`signal`]: `return`/`break`/`continue`/`throw` as [`ControlAction`]s on
//!   the `Err` side of [`EvalResult`]
//! - [`binder`]: closure creation and parameter binding
//! - [`object`]: classes as descriptor tables, instances as slot vectors
//! - [`builtins`]: root-scope functions and per-kind attribute tables
//! - [`Interpreter`]: the evaluator and the value contract (`call`,
//!   `get_attr`, `set_attr`, `get_item`, `set_item`, `type_of`)
//!
//! The crate does not parse. `load` goes through a [`SourceLoader`] supplied
//! to the [`InterpreterBuilder`].

pub mod binder;
pub mod builtins;
pub mod environment;
pub mod errors;
mod interpreter;
pub mod loader;
pub mod object;
pub mod print_handler;
pub mod signal;
pub mod value;

pub use binder::CallArgs;
pub use environment::{Scope, ScopeFlags, ScopeRef};
pub use errors::{EvalError, EvalErrorKind};
pub use interpreter::{Interpreter, InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};
pub use loader::SourceLoader;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandlerImpl, SharedPrintHandler,
};
pub use signal::{ControlAction, EvalResult};
pub use value::{HostValue, Value};

#[cfg(test)]
mod tests;
