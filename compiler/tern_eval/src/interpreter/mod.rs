//! Tree-walking interpreter for Tern.
//!
//! # Architecture
//!
//! - `eval`: one `match` over `ExprKind`, every recursive step behind
//!   `ensure_sufficient_stack`
//! - `control`: loops, `try`, and the keywords that raise signals
//! - `ops`: unary, binary and comparison operators
//! - `class`: evaluating a `class` declaration into a [`ClassValue`]
//! - `dispatch`: the value contract (`call`, `get_attr`, `set_attr`,
//!   `get_item`, `set_item`, `type_of`) for every kind
//!
//! An interpreter owns its root scope (builtins) and a globals scope below
//! it where programs run. Nothing is shared between interpreters except the
//! string interner they borrow.
//!
//! [`ClassValue`]: crate::object::ClassValue

mod builder;
mod class;
mod control;
mod dispatch;
mod eval;
mod interned_names;
mod ops;

pub use builder::InterpreterBuilder;
pub(crate) use interned_names::InternedNames;

use std::path::Path;
use std::rc::Rc;

use rustc_hash::{FxHashMap, FxHashSet};
use tern_ir::{Expr, Program, StringInterner};
use tracing::debug;

use crate::environment::ScopeRef;
use crate::errors::{module_load, signal_leak, uncaught_exception, EvalError};
use crate::loader::SourceLoader;
use crate::print_handler::SharedPrintHandler;
use crate::signal::{ControlAction, EvalResult};
use crate::value::{ModuleValue, Value};

/// Default bound on nested user calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

pub struct Interpreter<'a> {
    pub(crate) interner: &'a StringInterner,
    /// Builtins; parent of `globals` and of every loaded module.
    root: ScopeRef,
    globals: ScopeRef,
    print_handler: SharedPrintHandler,
    loader: Option<Rc<dyn SourceLoader>>,
    /// Loaded modules by the path they were requested with.
    modules: FxHashMap<String, Value>,
    /// Paths currently being evaluated, for cycle detection.
    loading: FxHashSet<String>,
    pub(crate) max_call_depth: usize,
    pub(crate) call_depth: usize,
    names: InternedNames,
}

impl<'a> Interpreter<'a> {
    /// Interpreter with default settings: stdout printing, no loader.
    pub fn new(interner: &'a StringInterner) -> Self {
        InterpreterBuilder::new(interner).build()
    }

    #[inline]
    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    #[inline]
    pub(crate) fn names(&self) -> &InternedNames {
        &self.names
    }

    /// Scope that programs run in. Persists across [`run`](Self::run) calls.
    pub fn globals(&self) -> &ScopeRef {
        &self.globals
    }

    /// Bind `name` in the globals scope, e.g. to expose a host value.
    pub fn define_global(&self, name: &str, value: Value) {
        self.globals.define(self.interner.intern(name), value);
    }

    /// Current value of a global, searching up into the builtins.
    pub fn global(&self, name: &str) -> Option<Value> {
        self.globals.lookup(self.interner.intern(name))
    }

    /// Evaluate a program in the globals scope; the value of its last
    /// expression, or `none` if it is empty.
    pub fn run(&mut self, program: &Program) -> Result<Value, EvalError> {
        let globals = self.globals.clone();
        self.run_body(&program.body, &globals)
    }

    fn run_body(&mut self, body: &[Expr], scope: &ScopeRef) -> Result<Value, EvalError> {
        let mut last = Value::None;
        for expr in body {
            last = self
                .eval(expr, scope)
                .map_err(|action| self.escaped(action).with_span(expr.span))?;
        }
        Ok(last)
    }

    /// A signal that reached the top level.
    fn escaped(&self, action: ControlAction) -> EvalError {
        match action {
            ControlAction::Error(e) => e,
            ControlAction::Throw(value) => {
                let rendered = self.display(&value);
                uncaught_exception(value, rendered)
            }
            other => signal_leak(other.keyword()),
        }
    }

    /// Display form, as `print` writes it.
    pub fn display(&self, value: &Value) -> String {
        value.display(self.interner).to_string()
    }

    /// `load(path)`: evaluate a file once in a fresh frame under the root
    /// scope and return it as a module. Later loads of the same path
    /// return the cached module.
    pub(crate) fn load_module(&mut self, path: &str) -> EvalResult {
        if let Some(module) = self.modules.get(path) {
            return Ok(module.clone());
        }
        if self.loading.contains(path) {
            return Err(module_load(path, "circular load").into());
        }
        let Some(loader) = self.loader.clone() else {
            return Err(module_load(path, "no source loader configured").into());
        };
        let program = loader
            .load(path, self.interner)
            .map_err(|message| module_load(path, message))?;

        debug!(path, "loading module");
        let scope = self.root.module_frame();
        self.loading.insert(path.to_owned());
        let result = program
            .body
            .iter()
            .try_for_each(|expr| self.eval(expr, &scope).map(drop));
        self.loading.remove(path);
        result?;

        let name = Path::new(path)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(path)
            .to_owned();
        let module = Value::Module(Rc::new(ModuleValue { name, scope }));
        self.modules.insert(path.to_owned(), module.clone());
        Ok(module)
    }
}
