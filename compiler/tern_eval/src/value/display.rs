//! Rendering for `print`, `str(..)` and the REPL.

use std::fmt::{self, Write as _};

use tern_ir::StringInterner;

use super::{HashKey, Value};

/// Containers nested deeper than this render as `...`.
const MAX_DEPTH: usize = 32;

/// `Display` adapter; atom, record and class names need the interner.
pub struct ValueDisplay<'v> {
    value: &'v Value,
    interner: &'v StringInterner,
    depth: usize,
}

impl Value {
    pub fn display<'v>(&'v self, interner: &'v StringInterner) -> ValueDisplay<'v> {
        ValueDisplay {
            value: self,
            interner,
            depth: 0,
        }
    }
}

impl ValueDisplay<'_> {
    fn nested<'v>(&'v self, value: &'v Value) -> ValueDisplay<'v> {
        ValueDisplay {
            value,
            interner: self.interner,
            depth: self.depth + 1,
        }
    }

    fn write_seq<'v>(
        &self,
        f: &mut fmt::Formatter<'_>,
        open: &str,
        items: impl IntoIterator<Item = &'v Value>,
        close: &str,
    ) -> fmt::Result {
        f.write_str(open)?;
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", self.nested(item))?;
        }
        f.write_str(close)
    }

    fn write_map<'v>(
        &self,
        f: &mut fmt::Formatter<'_>,
        open: &str,
        entries: impl IntoIterator<Item = (&'v HashKey, &'v Value)>,
        close: &str,
    ) -> fmt::Result {
        f.write_str(open)?;
        for (i, (key, value)) in entries.into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            let key = key.to_value();
            write!(f, "{}: {}", self.nested(&key), self.nested(value))?;
        }
        f.write_str(close)
    }
}

impl fmt::Display for ValueDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.depth > MAX_DEPTH {
            return f.write_str("...");
        }
        let interner = self.interner;
        match self.value {
            Value::None => f.write_str("none"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::Atom(name) => write!(f, "`{}", interner.lookup(*name)),
            Value::List(items) => self.write_seq(f, "[", items.borrow().iter(), "]"),
            Value::Vector(items) => self.write_seq(f, "vector(", items.iter(), ")"),
            Value::Dict(dict) => self.write_map(f, "#{", dict.borrow().iter(), "}"),
            Value::Index(index) => self.write_map(f, "index(", index.iter(), ")"),
            Value::Record(record) => {
                f.write_char('{')?;
                for (i, (name, value)) in record.fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", interner.lookup(*name), self.nested(value))?;
                }
                f.write_char('}')
            }
            Value::Iterator(_) => f.write_str("<iterator>"),
            Value::Function(func) => write!(f, "<function {}>", func.name(interner)),
            Value::BoundMethod(method) => write!(
                f,
                "<method {}.{}>",
                interner.lookup(method.receiver.class.name),
                method.method.name(interner)
            ),
            Value::Builtin(builtin) => write!(f, "<builtin {}>", builtin.name),
            Value::BuiltinMethod(method) => {
                write!(f, "<builtin method {}.{}>", method.owner.name, method.attr.name)
            }
            Value::UnboundMethod(desc, attr) => {
                write!(f, "<unbound method {}.{}>", desc.name, attr.name)
            }
            Value::Class(class) => write!(f, "<class {}>", interner.lookup(class.name)),
            Value::Object(obj) => write!(f, "<{} object>", interner.lookup(obj.class.name)),
            Value::Type(desc) => write!(f, "<type {}>", desc.name),
            Value::Module(module) => write!(f, "<module {}>", module.name),
            Value::Stop => f.write_str("stop"),
            Value::Host(host) => f.write_str(&host.display()),
        }
    }
}
