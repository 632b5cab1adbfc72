//! User-defined classes and their instances.
//!
//! A class is built once, in a single ordered pass over its members, into a
//! descriptor table keyed by attribute name:
//!
//! - `var f = e` takes the next field slot and appends `this.f = e` to the
//!   synthetic constructor
//! - `fn m(..) { .. }` is a method closing over the declaring scope
//! - `fn this.p { .. }` and `fn this.p = v { .. }` are the two halves of one
//!   property entry
//!
//! Instances are a class handle plus `num_fields` slots, all `none` until
//! the constructor runs.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use tern_ir::{Expr, ExprKind, FunctionDef, Name, Span, StringInterner};
use tracing::debug;

use crate::environment::ScopeRef;
use crate::errors::{duplicate_class_attribute, EvalError};
use crate::value::{FunctionValue, Value};

/// How one class attribute reads and writes.
pub enum Descriptor {
    Field(usize),
    Method(Rc<FunctionValue>),
    Property {
        getter: Option<Rc<FunctionValue>>,
        setter: Option<Rc<FunctionValue>>,
    },
}

pub struct ClassValue {
    pub name: Name,
    pub num_fields: usize,
    /// Zero-parameter method running the field initializers in order.
    pub constructor: Rc<FunctionValue>,
    pub attrs: FxHashMap<Name, Descriptor>,
}

pub struct ObjectValue {
    pub class: Rc<ClassValue>,
    fields: RefCell<Vec<Value>>,
}

impl ObjectValue {
    pub fn new(class: Rc<ClassValue>) -> Rc<Self> {
        let fields = RefCell::new(vec![Value::None; class.num_fields]);
        Rc::new(ObjectValue { class, fields })
    }

    pub fn field(&self, slot: usize) -> Value {
        self.fields.borrow().get(slot).cloned().unwrap_or(Value::None)
    }

    pub fn set_field(&self, slot: usize, value: Value) {
        if let Some(field) = self.fields.borrow_mut().get_mut(slot) {
            *field = value;
        }
    }
}

/// Which half of a property a declaration supplies.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PropertyHalf {
    Getter,
    Setter,
}

/// Accumulates descriptors while a `class` declaration is evaluated.
pub struct ClassBuilder<'a> {
    name: Name,
    interner: &'a StringInterner,
    attrs: FxHashMap<Name, Descriptor>,
    num_fields: usize,
    initializers: Vec<Expr>,
}

impl<'a> ClassBuilder<'a> {
    pub fn new(name: Name, interner: &'a StringInterner) -> Self {
        ClassBuilder {
            name,
            interner,
            attrs: FxHashMap::default(),
            num_fields: 0,
            initializers: Vec::new(),
        }
    }

    #[cold]
    fn duplicate(&self, attr: Name) -> EvalError {
        duplicate_in(self.interner, self.name, attr)
    }

    /// `var name = init`
    pub fn add_field(&mut self, name: Name, init: &Expr, span: Span) -> Result<(), EvalError> {
        if self.attrs.contains_key(&name) {
            return Err(self.duplicate(name).with_span(span));
        }
        self.attrs.insert(name, Descriptor::Field(self.num_fields));
        self.num_fields += 1;

        // this.name = init
        let target = Expr::new(
            ExprKind::Attr {
                receiver: Box::new(Expr::new(ExprKind::This, span)),
                name,
            },
            span,
        );
        self.initializers.push(Expr::new(
            ExprKind::Assign {
                target: Box::new(target),
                value: Box::new(init.clone()),
            },
            span,
        ));
        Ok(())
    }

    pub fn add_method(&mut self, name: Name, method: Rc<FunctionValue>) -> Result<(), EvalError> {
        if self.attrs.contains_key(&name) {
            return Err(self.duplicate(name).with_span(method.def.span));
        }
        self.attrs.insert(name, Descriptor::Method(method));
        Ok(())
    }

    /// Merge one half into the property entry for `name`.
    pub fn add_accessor(
        &mut self,
        name: Name,
        half: PropertyHalf,
        accessor: Rc<FunctionValue>,
    ) -> Result<(), EvalError> {
        let span = accessor.def.span;
        let (interner, class) = (self.interner, self.name);
        let entry = self.attrs.entry(name).or_insert(Descriptor::Property {
            getter: None,
            setter: None,
        });
        let slot = match (entry, half) {
            (Descriptor::Property { getter, .. }, PropertyHalf::Getter) => getter,
            (Descriptor::Property { setter, .. }, PropertyHalf::Setter) => setter,
            _ => return Err(duplicate_in(interner, class, name).with_span(span)),
        };
        if slot.is_some() {
            return Err(duplicate_in(interner, class, name).with_span(span));
        }
        *slot = Some(accessor);
        Ok(())
    }

    /// Seal the table and synthesize the constructor over `scope`.
    pub fn finish(self, scope: &ScopeRef, span: Span) -> ClassValue {
        debug!(
            class = self.interner.lookup(self.name),
            fields = self.num_fields,
            attrs = self.attrs.len(),
            "built class"
        );
        let body = Expr::new(ExprKind::Seq(self.initializers), span);
        let constructor = Rc::new(FunctionValue {
            def: Rc::new(FunctionDef {
                name: Some(self.name),
                params: Vec::new(),
                body,
                span,
            }),
            captured: scope.clone(),
        });
        ClassValue {
            name: self.name,
            num_fields: self.num_fields,
            constructor,
            attrs: self.attrs,
        }
    }
}

#[cold]
fn duplicate_in(interner: &StringInterner, class: Name, attr: Name) -> EvalError {
    duplicate_class_attribute(interner.lookup(class), interner.lookup(attr))
}
