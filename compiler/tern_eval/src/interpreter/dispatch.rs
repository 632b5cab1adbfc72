//! The value contract: what calling, reading and writing mean for each kind.
//!
//! Builtin kinds dispatch through their static [`TypeDesc`] tables, objects
//! through their class's descriptors, and host values through
//! [`HostValue`](crate::value::HostValue).

use std::ptr;
use std::rc::Rc;

use tern_ir::Name;

use super::Interpreter;
use crate::binder::CallArgs;
use crate::builtins::types::{builtin_type, AttrKind, BuiltinAttr, TypeDesc};
use crate::builtins::{checked_index, hash_key, int_arg};
use crate::errors::{
    attribute_error, attribute_misuse, index_out_of_bounds, key_not_found, missing_parameter,
    not_supported, too_many_arguments, type_mismatch, unknown_named_argument,
};
use crate::object::{ClassValue, Descriptor, ObjectValue};
use crate::signal::{ControlAction, EvalResult};
use crate::value::{BoundMethod, BuiltinMethod, Value};

impl Interpreter<'_> {
    pub fn call(&mut self, callee: &Value, args: CallArgs) -> EvalResult {
        match callee {
            Value::Function(func) => {
                let this = func.captured.this();
                self.call_function(func, args, this)
            }
            Value::BoundMethod(method) => {
                let this = Value::Object(Rc::clone(&method.receiver));
                self.call_function(&method.method, args, Some(this))
            }
            Value::Builtin(builtin) => {
                args.reject_named(builtin.name, self.interner)?;
                (builtin.func)(self, &args.positional)
            }
            Value::BuiltinMethod(method) => {
                if !args.named.is_empty() {
                    return Err(self.named_to_builtin(&args, method.owner, method.attr));
                }
                match method.attr.kind {
                    AttrKind::Method(f) => f(self, &method.receiver, &args.positional),
                    AttrKind::Property(_) => Err(not_supported("call", "property").into()),
                }
            }
            Value::UnboundMethod(desc, attr) => self.call_unbound(*desc, *attr, &args),
            Value::Class(class) => self.instantiate(class, &args),
            Value::Type(desc) => match desc.construct {
                Some(construct) => {
                    args.reject_named(desc.name, self.interner)?;
                    construct(self, &args.positional)
                }
                None => Err(not_supported("construction", desc.name).into()),
            },
            Value::Host(host) => host.call(self, args),
            other => Err(not_supported("call", other.type_name(self.interner)).into()),
        }
    }

    /// `list.push(xs, 1)`: the receiver is the first argument and must be
    /// of the owning kind.
    fn call_unbound(
        &mut self,
        desc: &'static TypeDesc,
        attr: &'static BuiltinAttr,
        args: &CallArgs,
    ) -> EvalResult {
        if !args.named.is_empty() {
            return Err(self.named_to_builtin(args, desc, attr));
        }
        let Some((receiver, rest)) = args.positional.split_first() else {
            return Err(missing_parameter("receiver", &qualified(desc, attr)).into());
        };
        if !builtin_type(receiver).is_some_and(|owner| ptr::eq(owner, desc)) {
            return Err(type_mismatch(desc.name, receiver.type_name(self.interner)).into());
        }
        match attr.kind {
            AttrKind::Method(f) => f(self, receiver, rest),
            AttrKind::Property(_) if !rest.is_empty() => {
                Err(too_many_arguments(&qualified(desc, attr), 1, args.positional.len()).into())
            }
            AttrKind::Property(f) => f(self, receiver),
        }
    }

    /// `A()`: allocate `none` slots, then run the field initializers with
    /// `this` bound to the new object.
    fn instantiate(&mut self, class: &Rc<ClassValue>, args: &CallArgs) -> EvalResult {
        let name = self.interner.lookup(class.name);
        args.reject_named(name, self.interner)?;
        if !args.positional.is_empty() {
            return Err(too_many_arguments(name, 0, args.positional.len()).into());
        }
        let this = Value::Object(ObjectValue::new(Rc::clone(class)));
        self.call_function(&class.constructor, CallArgs::default(), Some(this.clone()))?;
        Ok(this)
    }

    pub fn get_attr(&mut self, receiver: &Value, name: Name) -> EvalResult {
        match receiver {
            Value::Object(object) => self.object_attr(object, name),
            Value::Record(record) => record
                .get(name)
                .cloned()
                .ok_or_else(|| self.no_attr(receiver, name)),
            Value::Module(module) => {
                let found = module.scope.borrow().get_local(name).cloned();
                found.ok_or_else(|| self.no_attr(receiver, name))
            }
            Value::Type(desc) => {
                let attr_name = self.interner.lookup(name);
                if let Some(attr) = desc.find_static(attr_name) {
                    return self.builtin_attr(receiver, *desc, attr);
                }
                desc.find_attr(attr_name)
                    .map(|attr| Value::UnboundMethod(*desc, attr))
                    .ok_or_else(|| self.no_attr(receiver, name))
            }
            Value::Host(host) => host.get_attr(self, name),
            other => {
                let attr_name = self.interner.lookup(name);
                let found = builtin_type(other)
                    .and_then(|desc| desc.find_attr(attr_name).map(|attr| (desc, attr)));
                match found {
                    Some((desc, attr)) => self.builtin_attr(other, desc, attr),
                    None => Err(self.no_attr(other, name)),
                }
            }
        }
    }

    /// Properties are computed now; methods bind their receiver.
    fn builtin_attr(
        &mut self,
        receiver: &Value,
        owner: &'static TypeDesc,
        attr: &'static BuiltinAttr,
    ) -> EvalResult {
        match attr.kind {
            AttrKind::Property(f) => f(self, receiver),
            AttrKind::Method(_) => Ok(Value::BuiltinMethod(Rc::new(BuiltinMethod {
                receiver: receiver.clone(),
                owner,
                attr,
            }))),
        }
    }

    fn object_attr(&mut self, object: &Rc<ObjectValue>, name: Name) -> EvalResult {
        match object.class.attrs.get(&name) {
            Some(Descriptor::Field(slot)) => Ok(object.field(*slot)),
            Some(Descriptor::Method(method)) => Ok(Value::BoundMethod(Rc::new(BoundMethod {
                receiver: Rc::clone(object),
                method: Rc::clone(method),
            }))),
            Some(Descriptor::Property {
                getter: Some(getter),
                ..
            }) => {
                let this = Value::Object(Rc::clone(object));
                self.call_function(getter, CallArgs::default(), Some(this))
            }
            Some(Descriptor::Property { getter: None, .. }) => {
                Err(self.misuse(&Value::Object(Rc::clone(object)), name, "has no getter"))
            }
            None => Err(self.no_attr(&Value::Object(Rc::clone(object)), name)),
        }
    }

    pub fn set_attr(
        &mut self,
        receiver: &Value,
        name: Name,
        value: Value,
    ) -> Result<(), ControlAction> {
        match receiver {
            Value::Object(object) => match object.class.attrs.get(&name) {
                Some(Descriptor::Field(slot)) => {
                    object.set_field(*slot, value);
                    Ok(())
                }
                Some(Descriptor::Method(_)) => {
                    Err(self.misuse(receiver, name, "is a method and cannot be assigned"))
                }
                Some(Descriptor::Property {
                    setter: Some(setter),
                    ..
                }) => {
                    self.call_function(
                        setter,
                        CallArgs::positional([value]),
                        Some(receiver.clone()),
                    )?;
                    Ok(())
                }
                Some(Descriptor::Property { setter: None, .. }) => {
                    Err(self.misuse(receiver, name, "has no setter"))
                }
                None => Err(self.no_attr(receiver, name)),
            },
            Value::Host(host) => host.set_attr(self, name, value),
            other if self.has_attr(other, name) => Err(self.misuse(other, name, "is read-only")),
            other => Err(self.no_attr(other, name)),
        }
    }

    /// Whether a non-object kind exposes `name` at all.
    fn has_attr(&self, value: &Value, name: Name) -> bool {
        let attr_name = self.interner.lookup(name);
        match value {
            Value::Record(record) => record.get(name).is_some(),
            Value::Module(module) => module.scope.borrow().get_local(name).is_some(),
            Value::Type(desc) => {
                desc.find_static(attr_name).is_some() || desc.find_attr(attr_name).is_some()
            }
            other => builtin_type(other).is_some_and(|desc| desc.find_attr(attr_name).is_some()),
        }
    }

    pub fn get_item(&mut self, receiver: &Value, key: &Value) -> EvalResult {
        match receiver {
            Value::List(items) => {
                let items = items.borrow();
                let i = checked_index(int_arg(self, key)?, items.len())?;
                Ok(items[i].clone())
            }
            Value::Vector(items) => {
                let i = checked_index(int_arg(self, key)?, items.len())?;
                Ok(items[i].clone())
            }
            Value::Str(s) => {
                let index = int_arg(self, key)?;
                let len = s.chars().count();
                let pos = checked_index(index, len)?;
                s.chars()
                    .nth(pos)
                    .map(|c| Value::str(c.encode_utf8(&mut [0; 4])))
                    .ok_or_else(|| index_out_of_bounds(index, len).into())
            }
            Value::Dict(dict) => {
                let hashed = hash_key(self, key)?;
                let found = dict.borrow().get(&hashed).cloned();
                found.ok_or_else(|| key_not_found(&self.display(key)).into())
            }
            Value::Index(index) => {
                let hashed = hash_key(self, key)?;
                index
                    .get(&hashed)
                    .cloned()
                    .ok_or_else(|| key_not_found(&self.display(key)).into())
            }
            Value::Host(host) => host.get_item(self, key),
            other => Err(not_supported("indexing", other.type_name(self.interner)).into()),
        }
    }

    pub fn set_item(
        &mut self,
        receiver: &Value,
        key: Value,
        value: Value,
    ) -> Result<(), ControlAction> {
        match receiver {
            Value::List(items) => {
                let index = int_arg(self, &key)?;
                let mut items = items.borrow_mut();
                let i = checked_index(index, items.len())?;
                items[i] = value;
                Ok(())
            }
            Value::Dict(dict) => {
                let hashed = hash_key(self, &key)?;
                dict.borrow_mut().insert(hashed, value);
                Ok(())
            }
            Value::Host(host) => host.set_item(self, key, value),
            other => Err(not_supported("index assignment", other.type_name(self.interner)).into()),
        }
    }

    /// `typeof(value)`: the class for objects, a type object otherwise.
    pub fn type_of(&self, value: &Value) -> Value {
        match value {
            Value::Object(object) => Value::Class(Rc::clone(&object.class)),
            Value::Host(host) => host.type_of(),
            other => builtin_type(other).map_or(Value::None, Value::Type),
        }
    }

    #[cold]
    fn no_attr(&self, receiver: &Value, name: Name) -> ControlAction {
        attribute_error(
            self.interner.lookup(name),
            receiver.type_name(self.interner),
        )
        .into()
    }

    #[cold]
    fn misuse(&self, receiver: &Value, name: Name, reason: &'static str) -> ControlAction {
        attribute_misuse(
            self.interner.lookup(name),
            receiver.type_name(self.interner),
            reason,
        )
        .into()
    }

    #[cold]
    fn named_to_builtin(
        &self,
        args: &CallArgs,
        desc: &'static TypeDesc,
        attr: &'static BuiltinAttr,
    ) -> ControlAction {
        let name = args.named.first().map_or("", |(name, _)| self.interner.lookup(*name));
        unknown_named_argument(name, &qualified(desc, attr)).into()
    }
}

/// `list.push`
fn qualified(desc: &TypeDesc, attr: &BuiltinAttr) -> String {
    format!("{}.{}", desc.name, attr.name)
}
