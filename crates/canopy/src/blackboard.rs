//! Shared state store boundary.
//!
//! The blackboard is an external collaborator: leaves read and write it, and
//! the variable-driven decorators ([`crate::Repeater`], [`crate::Cooldown`],
//! [`crate::Limit`]) read their parameters from it each tick. The engine only
//! requires the [`Blackboard`] trait; [`MapBlackboard`] is the default
//! in-memory implementation and the one the test suites use.
//!
//! A missing key is a legitimate input, not an error at this boundary:
//! `try_get` returns `None` and the variable-driven decorators translate that
//! into [`Status::Error`](crate::Status::Error).

use std::collections::HashMap;

/// A value stored in a blackboard.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Boolean flag.
    Bool(bool),
    /// Signed integer (counters, entity ids, frame numbers).
    Int(i64),
    /// Floating point number (durations, timestamps, scores).
    Float(f64),
    /// Owned string.
    Text(String),
}

impl Value {
    /// Returns the boolean payload, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the integer payload, if this is an `Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the numeric payload as `f64`.
    ///
    /// Integers coerce: stores that track time as a frame counter still work
    /// with decorators that measure in clock units.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            Value::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Returns the string payload, if this is a `Text`.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

/// Key/value store shared by reference across every node of a tree.
///
/// Implementations decide storage and (if shared beyond one tree) locking;
/// the engine itself never locks the store.
pub trait Blackboard {
    /// Looks up a value by key. `None` means "not found", which several
    /// decorators translate into an `Error` status.
    fn try_get(&self, key: &str) -> Option<Value>;

    /// Stores a value under the given key, replacing any previous value.
    fn set(&mut self, key: &str, value: Value);

    /// Typed lookup helper for booleans.
    fn try_get_bool(&self, key: &str) -> Option<bool> {
        self.try_get(key)?.as_bool()
    }

    /// Typed lookup helper for integers.
    fn try_get_int(&self, key: &str) -> Option<i64> {
        self.try_get(key)?.as_int()
    }

    /// Typed lookup helper for floats (integers coerce).
    fn try_get_float(&self, key: &str) -> Option<f64> {
        self.try_get(key)?.as_float()
    }
}

/// The empty store, for trees whose nodes never touch the blackboard.
impl Blackboard for () {
    fn try_get(&self, _key: &str) -> Option<Value> {
        None
    }

    fn set(&mut self, _key: &str, _value: Value) {}
}

/// HashMap-backed blackboard.
#[derive(Debug, Default)]
pub struct MapBlackboard {
    entries: HashMap<String, Value>,
}

impl MapBlackboard {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes a key, returning its previous value if present.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Blackboard for MapBlackboard {
    fn try_get(&self, key: &str) -> Option<Value> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) {
        self.entries.insert(key.to_owned(), value);
    }
}
