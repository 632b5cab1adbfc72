//! Binding environments.
//!
//! A `Scope` is one frame of a parent-linked chain. Frames are shared
//! (`LocalScope<Scope>`) because closures keep their defining frame alive
//! after the call that created it returns. Children point at parents, never
//! the reverse.
//!
//! Two ways to bind a name:
//! - `declare` (`var x = ..`) always creates in the current frame and fails
//!   if the frame already holds the name.
//! - `assign` (`x = ..`) overwrites the nearest existing binding anywhere up
//!   the chain, and only when none exists creates it in the current,
//!   innermost frame.

use bitflags::bitflags;
use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use tern_ir::Name;

use crate::value::Value;

/// A single-threaded shared handle with interior mutability.
///
/// All scope allocations go through [`LocalScope::new`].
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for LocalScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalScope").field(&self.0).finish()
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Shared handle to a scope frame.
pub type ScopeRef = LocalScope<Scope>;

bitflags! {
    /// Context flags carried by every frame.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct ScopeFlags: u8 {
        /// Inside a `while` / `for` body: `break` and `continue` are legal.
        const IN_LOOP = 1;
        /// Inside a function or method body: `return` is legal.
        const IN_FUNCTION = 1 << 1;
    }
}

/// Returned by `declare` when the current frame already binds the name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlreadyDeclared;

/// One frame of bindings.
#[derive(Debug)]
pub struct Scope {
    bindings: FxHashMap<Name, Value>,
    parent: Option<ScopeRef>,
    this: Option<Value>,
    flags: ScopeFlags,
}

impl Scope {
    fn frame(parent: Option<ScopeRef>, this: Option<Value>, flags: ScopeFlags) -> ScopeRef {
        LocalScope::new(Scope {
            bindings: FxHashMap::default(),
            parent,
            this,
            flags,
        })
    }

    /// Parentless frame: holds builtins.
    pub fn root() -> ScopeRef {
        Self::frame(None, None, ScopeFlags::empty())
    }

    #[inline]
    pub fn flags(&self) -> ScopeFlags {
        self.flags
    }

    #[inline]
    pub fn this(&self) -> Option<&Value> {
        self.this.as_ref()
    }

    #[inline]
    pub fn parent(&self) -> Option<&ScopeRef> {
        self.parent.as_ref()
    }

    /// Binding held by this frame only.
    pub fn get_local(&self, name: Name) -> Option<&Value> {
        self.bindings.get(&name)
    }
}

impl LocalScope<Scope> {
    /// Child for a `{ .. }` block, a `try` body or a `catch` handler.
    /// Inherits `this` and both flags.
    pub fn child_block(&self) -> ScopeRef {
        let (this, flags) = {
            let scope = self.borrow();
            (scope.this.clone(), scope.flags)
        };
        Scope::frame(Some(self.clone()), this, flags)
    }

    /// Child for one loop iteration: like a block, with `IN_LOOP` set.
    pub fn child_loop(&self) -> ScopeRef {
        let (this, flags) = {
            let scope = self.borrow();
            (scope.this.clone(), scope.flags)
        };
        Scope::frame(Some(self.clone()), this, flags | ScopeFlags::IN_LOOP)
    }

    /// Fresh call frame under a function's captured scope.
    ///
    /// `IN_LOOP` is cleared: a `break` inside a function never reaches a
    /// loop in its caller or its definition site.
    pub fn function_frame(&self, this: Option<Value>) -> ScopeRef {
        Scope::frame(Some(self.clone()), this, ScopeFlags::IN_FUNCTION)
    }

    /// Top-level frame for a loaded module, directly under `self`.
    pub fn module_frame(&self) -> ScopeRef {
        Scope::frame(Some(self.clone()), None, ScopeFlags::empty())
    }

    /// Nearest binding of `name`, searching outward.
    pub fn lookup(&self, name: Name) -> Option<Value> {
        let mut current = self.clone();
        loop {
            let parent = {
                let scope = current.borrow();
                if let Some(value) = scope.bindings.get(&name) {
                    return Some(value.clone());
                }
                scope.parent.clone()?
            };
            current = parent;
        }
    }

    /// Overwrite the nearest binding of `name`. Never creates one.
    ///
    /// Returns whether any frame in the chain held the name.
    pub fn update(&self, name: Name, value: &Value) -> bool {
        let mut current = self.clone();
        loop {
            let parent = {
                let mut scope = current.borrow_mut();
                if let Some(slot) = scope.bindings.get_mut(&name) {
                    *slot = value.clone();
                    return true;
                }
                match scope.parent.clone() {
                    Some(parent) => parent,
                    None => return false,
                }
            };
            current = parent;
        }
    }

    /// Plain `=`.
    pub fn assign(&self, name: Name, value: Value) {
        let parent = {
            let mut scope = self.borrow_mut();
            if let Some(slot) = scope.bindings.get_mut(&name) {
                *slot = value;
                return;
            }
            scope.parent.clone()
        };
        let updated = parent.is_some_and(|parent| parent.update(name, &value));
        if !updated {
            self.borrow_mut().bindings.insert(name, value);
        }
    }

    /// `var name = value`.
    pub fn declare(&self, name: Name, value: Value) -> Result<(), AlreadyDeclared> {
        let mut scope = self.borrow_mut();
        if scope.bindings.contains_key(&name) {
            return Err(AlreadyDeclared);
        }
        scope.bindings.insert(name, value);
        Ok(())
    }

    /// Bind unconditionally in this frame. Used for parameters and builtins.
    pub fn define(&self, name: Name, value: Value) {
        self.borrow_mut().bindings.insert(name, value);
    }

    #[inline]
    pub fn flags(&self) -> ScopeFlags {
        self.borrow().flags
    }

    #[inline]
    pub fn this(&self) -> Option<Value> {
        self.borrow().this.clone()
    }
}

#[cfg(test)]
mod tests;
