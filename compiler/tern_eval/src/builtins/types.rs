//! Static descriptor tables for the builtin kinds.
//!
//! Each kind has one `TypeDesc`: its name, an optional constructor (what
//! calling the type object does), static attributes read off the type
//! object itself, and the attribute table its instances dispatch through.
//! Attribute lookup is a linear scan; tables are a handful of entries.

use crate::value::{BuiltinFn, Value};
use crate::{signal::EvalResult, Interpreter};

use super::collections::{dict, index, list, vector};
use super::{constructors, iterator, text};

/// Reads an attribute computed from the receiver.
pub type PropertyFn = fn(&mut Interpreter<'_>, &Value) -> EvalResult;

/// Calls a method on the receiver with positional arguments.
pub type MethodFn = fn(&mut Interpreter<'_>, &Value, &[Value]) -> EvalResult;

#[derive(Copy, Clone)]
pub enum AttrKind {
    Property(PropertyFn),
    Method(MethodFn),
}

pub struct BuiltinAttr {
    pub name: &'static str,
    pub kind: AttrKind,
}

pub struct TypeDesc {
    pub name: &'static str,
    pub construct: Option<BuiltinFn>,
    /// Attributes of the type object (`vector.empty`).
    pub statics: &'static [BuiltinAttr],
    /// Attributes of instances (`xs.size`, `xs.push`).
    pub attrs: &'static [BuiltinAttr],
}

impl TypeDesc {
    pub fn find_attr(&self, name: &str) -> Option<&'static BuiltinAttr> {
        self.attrs.iter().find(|attr| attr.name == name)
    }

    pub fn find_static(&self, name: &str) -> Option<&'static BuiltinAttr> {
        self.statics.iter().find(|attr| attr.name == name)
    }
}

const fn property(name: &'static str, f: PropertyFn) -> BuiltinAttr {
    BuiltinAttr {
        name,
        kind: AttrKind::Property(f),
    }
}

const fn method(name: &'static str, f: MethodFn) -> BuiltinAttr {
    BuiltinAttr {
        name,
        kind: AttrKind::Method(f),
    }
}

const fn plain(name: &'static str) -> TypeDesc {
    TypeDesc {
        name,
        construct: None,
        statics: &[],
        attrs: &[],
    }
}

static STR_ATTRS: [BuiltinAttr; 3] = [
    property("size", text::size),
    method("join", text::join),
    method("iter", text::iter),
];

static ATOM_ATTRS: [BuiltinAttr; 1] = [property("name", text::atom_name)];

static LIST_ATTRS: [BuiltinAttr; 7] = [
    property("size", list::size),
    property("last", list::last),
    method("push", list::push),
    method("append", list::append),
    method("pop", list::pop),
    method("shift", list::shift),
    method("iter", list::iter),
];

static VECTOR_STATICS: [BuiltinAttr; 1] = [property("empty", vector::empty)];

static VECTOR_ATTRS: [BuiltinAttr; 9] = [
    property("size", vector::size),
    property("first", vector::first),
    property("last", vector::last),
    method("push", vector::push),
    method("append", vector::append),
    method("update", vector::update),
    method("pop", vector::pop),
    method("shift", vector::shift),
    method("iter", vector::iter),
];

static DICT_ATTRS: [BuiltinAttr; 5] = [
    property("size", dict::size),
    method("get", dict::get),
    method("clear", dict::clear),
    method("keys", dict::keys),
    method("iter", dict::iter),
];

static INDEX_ATTRS: [BuiltinAttr; 5] = [
    property("size", index::size),
    method("get", index::get),
    method("update", index::update),
    method("keys", index::keys),
    method("iter", index::iter),
];

static ITERATOR_ATTRS: [BuiltinAttr; 2] = [
    method("next", iterator::next),
    method("iter", iterator::iter),
];

pub static NONE_TYPE: TypeDesc = plain("none");
pub static BOOL_TYPE: TypeDesc = plain("bool");
pub static INT_TYPE: TypeDesc = TypeDesc {
    construct: Some(constructors::int),
    ..plain("int")
};
pub static STR_TYPE: TypeDesc = TypeDesc {
    construct: Some(constructors::str),
    attrs: &STR_ATTRS,
    ..plain("str")
};
pub static ATOM_TYPE: TypeDesc = TypeDesc {
    attrs: &ATOM_ATTRS,
    ..plain("atom")
};
pub static LIST_TYPE: TypeDesc = TypeDesc {
    construct: Some(constructors::list),
    attrs: &LIST_ATTRS,
    ..plain("list")
};
pub static VECTOR_TYPE: TypeDesc = TypeDesc {
    construct: Some(constructors::vector),
    statics: &VECTOR_STATICS,
    attrs: &VECTOR_ATTRS,
    ..plain("vector")
};
pub static DICT_TYPE: TypeDesc = TypeDesc {
    construct: Some(constructors::dict),
    attrs: &DICT_ATTRS,
    ..plain("dict")
};
pub static INDEX_TYPE: TypeDesc = TypeDesc {
    construct: Some(constructors::index),
    attrs: &INDEX_ATTRS,
    ..plain("index")
};
pub static RECORD_TYPE: TypeDesc = plain("record");
pub static ITERATOR_TYPE: TypeDesc = TypeDesc {
    attrs: &ITERATOR_ATTRS,
    ..plain("iterator")
};
pub static FUNCTION_TYPE: TypeDesc = plain("function");
pub static METHOD_TYPE: TypeDesc = plain("method");
pub static BUILTIN_TYPE: TypeDesc = plain("builtin");
pub static CLASS_TYPE: TypeDesc = plain("class");
pub static TYPE_TYPE: TypeDesc = plain("type");
pub static MODULE_TYPE: TypeDesc = plain("module");
pub static STOP_TYPE: TypeDesc = plain("stop");
pub static HOST_TYPE: TypeDesc = plain("host");

/// Type objects bound by name in the root scope.
pub static ROOT_TYPES: [&TypeDesc; 8] = [
    &INT_TYPE,
    &STR_TYPE,
    &BOOL_TYPE,
    &LIST_TYPE,
    &VECTOR_TYPE,
    &DICT_TYPE,
    &INDEX_TYPE,
    &ATOM_TYPE,
];

/// Descriptor of a builtin kind. `None` for objects and host values,
/// whose type comes from their class or their host implementation.
pub fn builtin_type(value: &Value) -> Option<&'static TypeDesc> {
    let desc = match value {
        Value::None => &NONE_TYPE,
        Value::Bool(_) => &BOOL_TYPE,
        Value::Int(_) => &INT_TYPE,
        Value::Str(_) => &STR_TYPE,
        Value::Atom(_) => &ATOM_TYPE,
        Value::List(_) => &LIST_TYPE,
        Value::Vector(_) => &VECTOR_TYPE,
        Value::Dict(_) => &DICT_TYPE,
        Value::Index(_) => &INDEX_TYPE,
        Value::Record(_) => &RECORD_TYPE,
        Value::Iterator(_) => &ITERATOR_TYPE,
        Value::Function(_) => &FUNCTION_TYPE,
        Value::BoundMethod(_) | Value::BuiltinMethod(_) | Value::UnboundMethod(..) => {
            &METHOD_TYPE
        }
        Value::Builtin(_) => &BUILTIN_TYPE,
        Value::Class(_) => &CLASS_TYPE,
        Value::Type(_) => &TYPE_TYPE,
        Value::Module(_) => &MODULE_TYPE,
        Value::Stop => &STOP_TYPE,
        Value::Object(_) | Value::Host(_) => return None,
    };
    Some(desc)
}
