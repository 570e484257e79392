//! JSON value tree
//!
//! The parser produces an owned `Value` tree:
//! - Each node has exactly one owner (its parent container, or the
//!   parser/caller for the root)
//! - The tree is acyclic
//! - Array order is index order and significant
//! - Object members iterate key-sorted, so anything derived from
//!   iteration order (error lists, rendered output) is reproducible

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Runtime kind of a JSON value.
///
/// Kind names render capitalized (`Null`, `Bool`, ...) and appear in
/// validation error messages and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// Returns the display name for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Null => "Null",
            ValueKind::Bool => "Bool",
            ValueKind::Number => "Number",
            ValueKind::String => "String",
            ValueKind::Array => "Array",
            ValueKind::Object => "Object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An owned JSON document tree.
///
/// Numbers are `f64` (the lexer/parser accept any digit soup and
/// convert leniently). Object keys are unique; when a source document
/// repeats a key, the first occurrence wins.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// Returns the runtime kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(elements) => Some(elements),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Object(members) => Some(members),
            _ => None,
        }
    }

    /// Looks up an object member by name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object()?.get(key)
    }

    /// Looks up an array element by index.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.as_array()?.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(ValueKind::Null.name(), "Null");
        assert_eq!(ValueKind::Bool.name(), "Bool");
        assert_eq!(ValueKind::Number.name(), "Number");
        assert_eq!(ValueKind::String.name(), "String");
        assert_eq!(ValueKind::Array.name(), "Array");
        assert_eq!(ValueKind::Object.name(), "Object");
    }

    #[test]
    fn test_kind_of_each_variant() {
        assert_eq!(Value::Null.kind(), ValueKind::Null);
        assert_eq!(Value::Bool(true).kind(), ValueKind::Bool);
        assert_eq!(Value::Number(1.5).kind(), ValueKind::Number);
        assert_eq!(Value::String("x".into()).kind(), ValueKind::String);
        assert_eq!(Value::Array(Vec::new()).kind(), ValueKind::Array);
        assert_eq!(Value::Object(BTreeMap::new()).kind(), ValueKind::Object);
    }

    #[test]
    fn test_accessors_match_kind() {
        let v = Value::Number(42.0);
        assert_eq!(v.as_number(), Some(42.0));
        assert_eq!(v.as_str(), None);
        assert_eq!(v.as_bool(), None);

        let v = Value::String("hello".into());
        assert_eq!(v.as_str(), Some("hello"));
        assert_eq!(v.as_number(), None);
    }

    #[test]
    fn test_object_lookup() {
        let mut members = BTreeMap::new();
        members.insert("port".to_string(), Value::Number(8080.0));
        let v = Value::Object(members);

        assert_eq!(v.get("port").and_then(Value::as_number), Some(8080.0));
        assert!(v.get("host").is_none());
        // get on a non-object is None, not a panic
        assert!(Value::Null.get("port").is_none());
    }

    #[test]
    fn test_array_lookup() {
        let v = Value::Array(vec![Value::Bool(true), Value::Null]);
        assert_eq!(v.get_index(0).and_then(Value::as_bool), Some(true));
        assert!(v.get_index(1).unwrap().is_null());
        assert!(v.get_index(2).is_none());
    }

    #[test]
    fn test_object_iteration_is_key_sorted() {
        let mut members = BTreeMap::new();
        members.insert("zeta".to_string(), Value::Null);
        members.insert("alpha".to_string(), Value::Null);
        members.insert("mid".to_string(), Value::Null);
        let keys: Vec<&str> = members.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["alpha", "mid", "zeta"]);
    }
}
