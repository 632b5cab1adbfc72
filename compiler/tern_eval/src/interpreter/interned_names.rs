//! Names the evaluator looks up on every iteration, interned once.

use tern_ir::{Name, StringInterner};

/// Iteration protocol method names.
#[derive(Clone, Copy)]
pub(crate) struct InternedNames {
    pub(crate) iter: Name,
    pub(crate) next: Name,
}

impl InternedNames {
    pub(crate) fn new(interner: &StringInterner) -> Self {
        InternedNames {
            iter: interner.intern("iter"),
            next: interner.intern("next"),
        }
    }
}
