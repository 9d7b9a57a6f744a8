//! The document tree and its typed accessors.

use std::fmt;

use crate::dump::Dump;
use crate::error::{Error, ErrorKind};

/// Which variant a [`Value`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Map,
    Array,
    String,
    Integer,
}

impl Kind {
    pub fn desc(self) -> &'static str {
        match self {
            Kind::Map => "map",
            Kind::Array => "array",
            Kind::String => "string",
            Kind::Integer => "integer",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.desc())
    }
}

/// A node of the document tree. Composite nodes exclusively own their children; dropping a node
/// releases its whole subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Map(Map),
    Array(Array),
    String(String),
    Integer(i64),
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Map(_) => Kind::Map,
            Value::Array(_) => Kind::Array,
            Value::String(_) => Kind::String,
            Value::Integer(_) => Kind::Integer,
        }
    }

    fn mismatch(&self, expected: Kind) -> Error {
        Error::new(ErrorKind::TypeMismatch {
            expected,
            found: self.kind(),
        })
    }

    pub fn as_map(&self) -> Result<&Map, Error> {
        match self {
            Value::Map(map) => Ok(map),
            _ => Err(self.mismatch(Kind::Map)),
        }
    }

    pub fn as_array(&self) -> Result<&Array, Error> {
        match self {
            Value::Array(array) => Ok(array),
            _ => Err(self.mismatch(Kind::Array)),
        }
    }

    pub fn as_str(&self) -> Result<&str, Error> {
        match self {
            Value::String(s) => Ok(s),
            _ => Err(self.mismatch(Kind::String)),
        }
    }

    pub fn as_integer(&self) -> Result<i64, Error> {
        match self {
            Value::Integer(i) => Ok(*i),
            _ => Err(self.mismatch(Kind::Integer)),
        }
    }

    /// First entry of this map whose key equals `key`. A missing key is `Ok(None)`; only asking a
    /// non-map is an error.
    pub fn map_get(&self, key: &str) -> Result<Option<&Value>, Error> {
        Ok(self.as_map()?.get(key))
    }

    pub fn map_size(&self) -> Result<usize, Error> {
        Ok(self.as_map()?.len())
    }

    pub fn array_get(&self, index: usize) -> Result<&Value, Error> {
        self.as_array()?.get(index)
    }

    pub fn array_size(&self) -> Result<usize, Error> {
        Ok(self.as_array()?.len())
    }

    /// Diagnostic rendering of the tree. Not valid JSON in general.
    pub fn dump(&self) -> Dump<'_> {
        Dump::new(self)
    }

    /// Move this node's children onto `out`, leaving it childless.
    fn detach_children(&mut self, out: &mut Vec<Value>) {
        match self {
            Value::Map(map) => out.extend(map.entries.drain(..).map(|(_, value)| value)),
            Value::Array(array) => out.extend(array.items.drain(..)),
            Value::String(_) | Value::Integer(_) => {}
        }
    }
}

// Teardown walks the tree with an explicit stack so that depth is not bounded by the call stack.
impl Drop for Value {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut child) = pending.pop() {
            child.detach_children(&mut pending);
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Map(map)
    }
}

impl From<Array> for Value {
    fn from(array: Array) -> Self {
        Value::Array(array)
    }
}

/// Fixed capacities above this are not reserved up front.
const PREALLOC_LIMIT: usize = 64;

fn check_capacity(len: usize, capacity: Option<usize>) -> Result<(), Error> {
    match capacity {
        Some(capacity) if len >= capacity => {
            Err(Error::new(ErrorKind::CapacityExceeded { capacity }))
        }
        _ => Ok(()),
    }
}

/// Ordered key/value pairs.
///
/// This is not a hashmap or anything that relies on key equality. Duplicate keys are kept in
/// encounter order and lookups return the first one.
#[derive(Debug, Clone, Default, Eq)]
pub struct Map {
    entries: Vec<(String, Value)>,
    capacity: Option<usize>,
}

impl Map {
    /// A map that grows as needed.
    pub fn new() -> Self {
        Self::default()
    }

    /// A map that refuses to hold more than `capacity` entries.
    pub fn fixed(capacity: usize) -> Self {
        Self::bounded(Some(capacity))
    }

    pub(crate) fn bounded(capacity: Option<usize>) -> Self {
        Map {
            entries: Vec::with_capacity(capacity.map_or(0, |c| c.min(PREALLOC_LIMIT))),
            capacity,
        }
    }

    /// Append an entry. Existing entries with the same key are left in place.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Result<(), Error> {
        check_capacity(self.entries.len(), self.capacity)?;
        self.entries.push((key.into(), value));
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `None` for a growable map.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

// Capacity is a construction detail, not part of the content.
impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

/// Ordered sequence of values.
#[derive(Debug, Clone, Default, Eq)]
pub struct Array {
    items: Vec<Value>,
    capacity: Option<usize>,
}

impl Array {
    /// An array that grows as needed.
    pub fn new() -> Self {
        Self::default()
    }

    /// An array that refuses to hold more than `capacity` elements.
    pub fn fixed(capacity: usize) -> Self {
        Self::bounded(Some(capacity))
    }

    pub(crate) fn bounded(capacity: Option<usize>) -> Self {
        Array {
            items: Vec::with_capacity(capacity.map_or(0, |c| c.min(PREALLOC_LIMIT))),
            capacity,
        }
    }

    pub fn push(&mut self, value: Value) -> Result<(), Error> {
        check_capacity(self.items.len(), self.capacity)?;
        self.items.push(value);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<&Value, Error> {
        self.items.get(index).ok_or_else(|| {
            Error::new(ErrorKind::IndexOutOfBounds {
                index,
                len: self.items.len(),
            })
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// `None` for a growable array.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }
}

impl PartialEq for Array {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
