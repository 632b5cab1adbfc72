//! Runtime values.
//!
//! `Value` is a closed enum over every builtin kind plus [`Value::Host`] for
//! kinds supplied by an embedding application. Containers with identity or
//! mutation are reference counted, so cloning a `Value` is always cheap and
//! never copies container contents.
//!
//! The dispatch contract (call, get/set attribute, get/set item, type) lives
//! on [`Interpreter`](crate::Interpreter) because user code may run during
//! any of them.

mod collections;
mod display;
mod function;
mod host;

use std::cell::RefCell;
use std::fmt;
use std::ptr;
use std::rc::Rc;

use tern_ir::{Name, StringInterner};

use crate::builtins::types::{builtin_type, BuiltinAttr, TypeDesc};
use crate::environment::ScopeRef;
use crate::object::{ClassValue, ObjectValue};

pub use collections::{DictValue, HashKey, IndexValue, IteratorValue, RecordValue};
pub use display::ValueDisplay;
pub use function::{BoundMethod, BuiltinFn, BuiltinFunction, BuiltinMethod, FunctionValue};
pub use host::HostValue;

#[derive(Clone)]
pub enum Value {
    None,
    Bool(bool),
    Int(i64),
    Str(Rc<str>),
    Atom(Name),
    /// Mutable list.
    List(Rc<RefCell<Vec<Value>>>),
    /// Persistent vector: operations return new vectors.
    Vector(Rc<Vec<Value>>),
    /// Mutable map by key equality, in insertion order.
    Dict(Rc<RefCell<DictValue>>),
    /// Immutable ordered map.
    Index(Rc<IndexValue>),
    Record(Rc<RecordValue>),
    Iterator(Rc<RefCell<IteratorValue>>),
    Function(Rc<FunctionValue>),
    BoundMethod(Rc<BoundMethod>),
    Builtin(&'static BuiltinFunction),
    BuiltinMethod(Rc<BuiltinMethod>),
    /// `list.push`: a builtin method read off its type object.
    UnboundMethod(&'static TypeDesc, &'static BuiltinAttr),
    Class(Rc<ClassValue>),
    Object(Rc<ObjectValue>),
    Type(&'static TypeDesc),
    Module(Rc<ModuleValue>),
    /// End-of-iteration sentinel.
    Stop,
    Host(Rc<dyn HostValue>),
}

/// A loaded source file: its top-level bindings.
pub struct ModuleValue {
    pub name: String,
    pub scope: ScopeRef,
}

impl Value {
    #[inline]
    pub fn str(s: &str) -> Self {
        Value::Str(Rc::from(s))
    }

    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Rc::new(RefCell::new(items)))
    }

    #[inline]
    pub fn vector(items: Vec<Value>) -> Self {
        Value::Vector(Rc::new(items))
    }

    #[inline]
    pub fn dict(dict: DictValue) -> Self {
        Value::Dict(Rc::new(RefCell::new(dict)))
    }

    #[inline]
    pub fn iterator(iterator: IteratorValue) -> Self {
        Value::Iterator(Rc::new(RefCell::new(iterator)))
    }

    #[inline]
    pub fn host(value: impl HostValue + 'static) -> Self {
        Value::Host(Rc::new(value))
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Kind name used in diagnostics: a class name for objects.
    pub fn type_name(&self, interner: &StringInterner) -> &'static str {
        match self {
            Value::Object(obj) => interner.lookup(obj.class.name),
            Value::Host(host) => host.type_name(),
            other => builtin_type(other).map_or("object", |desc| desc.name),
        }
    }

    /// Structural equality for data, identity for everything with behavior.
    pub fn equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::None, Value::None) | (Value::Stop, Value::Stop) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Atom(a), Value::Atom(b)) => a == b,
            (Value::List(a), Value::List(b)) => {
                Rc::ptr_eq(a, b) || seq_equals(&a.borrow(), &b.borrow())
            }
            (Value::Vector(a), Value::Vector(b)) => Rc::ptr_eq(a, b) || seq_equals(a, b),
            (Value::Dict(a), Value::Dict(b)) => Rc::ptr_eq(a, b) || a.borrow().equals(&b.borrow()),
            (Value::Index(a), Value::Index(b)) => Rc::ptr_eq(a, b) || a.equals(b),
            (Value::Record(a), Value::Record(b)) => Rc::ptr_eq(a, b) || a.equals(b),
            (Value::Iterator(a), Value::Iterator(b)) => Rc::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::BoundMethod(a), Value::BoundMethod(b)) => {
                Rc::ptr_eq(&a.receiver, &b.receiver) && Rc::ptr_eq(&a.method, &b.method)
            }
            (Value::Builtin(a), Value::Builtin(b)) => ptr::eq(*a, *b),
            (Value::BuiltinMethod(a), Value::BuiltinMethod(b)) => {
                ptr::eq(a.attr, b.attr) && a.receiver.equals(&b.receiver)
            }
            (Value::UnboundMethod(ta, a), Value::UnboundMethod(tb, b)) => {
                ptr::eq(*ta, *tb) && ptr::eq(*a, *b)
            }
            (Value::Class(a), Value::Class(b)) => Rc::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            (Value::Type(a), Value::Type(b)) => ptr::eq(*a, *b),
            (Value::Module(a), Value::Module(b)) => Rc::ptr_eq(a, b),
            (Value::Host(a), Value::Host(b)) => ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b)),
            _ => false,
        }
    }
}

fn seq_equals(a: &[Value], b: &[Value]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.equals(y))
}

// Shallow: scopes and containers can be cyclic.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => write!(f, "None"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Str(s) => write!(f, "Str({s:?})"),
            Value::Atom(name) => write!(f, "Atom({name:?})"),
            Value::List(items) => write!(f, "List(len={})", items.borrow().len()),
            Value::Vector(items) => write!(f, "Vector(len={})", items.len()),
            Value::Dict(dict) => write!(f, "Dict(len={})", dict.borrow().len()),
            Value::Index(index) => write!(f, "Index(len={})", index.len()),
            Value::Record(record) => write!(f, "Record(fields={})", record.fields.len()),
            Value::Iterator(_) => write!(f, "Iterator"),
            Value::Function(func) => write!(f, "Function({:?})", func.def.name),
            Value::BoundMethod(method) => write!(f, "BoundMethod({:?})", method.method.def.name),
            Value::Builtin(builtin) => write!(f, "Builtin({})", builtin.name),
            Value::BuiltinMethod(method) => {
                write!(f, "BuiltinMethod({}.{})", method.owner.name, method.attr.name)
            }
            Value::UnboundMethod(desc, attr) => {
                write!(f, "UnboundMethod({}.{})", desc.name, attr.name)
            }
            Value::Class(class) => write!(f, "Class({:?})", class.name),
            Value::Object(obj) => write!(f, "Object({:?})", obj.class.name),
            Value::Type(desc) => write!(f, "Type({})", desc.name),
            Value::Module(module) => write!(f, "Module({})", module.name),
            Value::Stop => write!(f, "Stop"),
            Value::Host(host) => write!(f, "Host({host:?})"),
        }
    }
}

impl fmt::Debug for ModuleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleValue")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
