//! Builtin container payloads.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use tern_ir::Name;

use super::Value;

/// A value usable as a dict or index key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HashKey {
    None,
    Bool(bool),
    Int(i64),
    Str(Rc<str>),
    Atom(Name),
}

impl HashKey {
    /// `None` for values without value semantics.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::None => Some(HashKey::None),
            Value::Bool(b) => Some(HashKey::Bool(*b)),
            Value::Int(n) => Some(HashKey::Int(*n)),
            Value::Str(s) => Some(HashKey::Str(Rc::clone(s))),
            Value::Atom(name) => Some(HashKey::Atom(*name)),
            _ => None,
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            HashKey::None => Value::None,
            HashKey::Bool(b) => Value::Bool(*b),
            HashKey::Int(n) => Value::Int(*n),
            HashKey::Str(s) => Value::Str(Rc::clone(s)),
            HashKey::Atom(name) => Value::Atom(*name),
        }
    }
}

/// Insertion-ordered hash map.
#[derive(Clone, Debug, Default)]
pub struct DictValue {
    entries: Vec<(HashKey, Value)>,
    positions: FxHashMap<HashKey, usize>,
}

impl DictValue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &HashKey) -> Option<&Value> {
        self.positions.get(key).map(|&i| &self.entries[i].1)
    }

    pub fn insert(&mut self, key: HashKey, value: Value) {
        if let Some(&i) = self.positions.get(&key) {
            self.entries[i].1 = value;
        } else {
            self.positions.insert(key.clone(), self.entries.len());
            self.entries.push((key, value));
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.positions.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&HashKey, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> Vec<Value> {
        self.entries.iter().map(|(k, _)| k.to_value()).collect()
    }

    /// Same key set with equal values; order is ignored.
    pub fn equals(&self, other: &DictValue) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(k, v)| other.get(k).is_some_and(|w| v.equals(w)))
    }
}

/// Immutable map ordered by key.
#[derive(Clone, Debug, Default)]
pub struct IndexValue {
    map: BTreeMap<HashKey, Value>,
}

impl IndexValue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &HashKey) -> Option<&Value> {
        self.map.get(key)
    }

    /// Copy with `key` bound to `value`.
    #[must_use]
    pub fn updated(&self, key: HashKey, value: Value) -> Self {
        let mut map = self.map.clone();
        map.insert(key, value);
        IndexValue { map }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&HashKey, &Value)> {
        self.map.iter()
    }

    pub fn keys(&self) -> Vec<Value> {
        self.map.keys().map(HashKey::to_value).collect()
    }

    pub fn equals(&self, other: &IndexValue) -> bool {
        self.len() == other.len()
            && self
                .map
                .iter()
                .zip(&other.map)
                .all(|((ka, va), (kb, vb))| ka == kb && va.equals(vb))
    }
}

/// `{name: value, ..}`: fixed fields in source order.
#[derive(Debug)]
pub struct RecordValue {
    pub fields: Vec<(Name, Value)>,
}

impl RecordValue {
    pub fn get(&self, name: Name) -> Option<&Value> {
        self.fields
            .iter()
            .find_map(|(field, value)| (*field == name).then_some(value))
    }

    pub fn equals(&self, other: &RecordValue) -> bool {
        self.fields.len() == other.fields.len()
            && self
                .fields
                .iter()
                .all(|(name, value)| other.get(*name).is_some_and(|w| value.equals(w)))
    }
}

/// Stateful cursor behind `iterator` values. Not restartable.
#[derive(Debug)]
pub enum IteratorValue {
    /// Live view of a list: sees elements appended during iteration.
    List {
        items: Rc<RefCell<Vec<Value>>>,
        pos: usize,
    },
    /// A persistent vector.
    Vector { items: Rc<Vec<Value>>, pos: usize },
    /// A snapshot taken when iteration began.
    Items(std::vec::IntoIter<Value>),
    /// Characters of a string; `pos` is a byte offset.
    Chars { text: Rc<str>, pos: usize },
    /// Half-open integer range.
    Range { next: i64, end: i64 },
}

impl IteratorValue {
    pub fn snapshot(items: Vec<Value>) -> Self {
        IteratorValue::Items(items.into_iter())
    }

    /// Next item, or `None` when exhausted.
    pub fn next_item(&mut self) -> Option<Value> {
        match self {
            IteratorValue::List { items, pos } => {
                let item = items.borrow().get(*pos).cloned()?;
                *pos += 1;
                Some(item)
            }
            IteratorValue::Vector { items, pos } => {
                let item = items.get(*pos).cloned()?;
                *pos += 1;
                Some(item)
            }
            IteratorValue::Items(items) => items.next(),
            IteratorValue::Chars { text, pos } => {
                let ch = text[*pos..].chars().next()?;
                let start = *pos;
                *pos += ch.len_utf8();
                Some(Value::str(&text[start..*pos]))
            }
            IteratorValue::Range { next, end } => {
                if *next >= *end {
                    return None;
                }
                let item = *next;
                *next += 1;
                Some(Value::Int(item))
            }
        }
    }
}
