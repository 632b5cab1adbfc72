//! `InterpreterBuilder` for configuring an [`Interpreter`].

use std::rc::Rc;

use rustc_hash::{FxHashMap, FxHashSet};
use tern_ir::StringInterner;

use super::{InternedNames, Interpreter, DEFAULT_MAX_CALL_DEPTH};
use crate::builtins::register_root;
use crate::environment::Scope;
use crate::loader::SourceLoader;
use crate::print_handler::{stdout_handler, SharedPrintHandler};

pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    print_handler: Option<SharedPrintHandler>,
    loader: Option<Rc<dyn SourceLoader>>,
    max_call_depth: usize,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        InterpreterBuilder {
            interner,
            print_handler: None,
            loader: None,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
        }
    }

    /// Where `print` writes. Defaults to stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Resolver for `load(path)`. Without one, `load` fails.
    #[must_use]
    pub fn loader(mut self, loader: impl SourceLoader + 'static) -> Self {
        self.loader = Some(Rc::new(loader));
        self
    }

    /// Deepest chain of nested user calls before `RecursionLimit`.
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        let root = Scope::root();
        register_root(&root, self.interner);
        let globals = root.child_block();
        Interpreter {
            interner: self.interner,
            root,
            globals,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            loader: self.loader,
            modules: FxHashMap::default(),
            loading: FxHashSet::default(),
            max_call_depth: self.max_call_depth,
            call_depth: 0,
            names: InternedNames::new(self.interner),
        }
    }
}
