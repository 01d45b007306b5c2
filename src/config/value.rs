// Value module
// Typed values and records held by a config store

use super::pool::PoolOffset;
use std::fmt;

/// The type a caller asks for when looking up a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Int,
    Float,
    String,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Int => f.write_str("int"),
            ValueKind::Float => f.write_str("float"),
            ValueKind::String => f.write_str("string"),
        }
    }
}

/// A parsed value. String values point into the owning store's pool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    String(PoolOffset),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::String(_) => ValueKind::String,
        }
    }
}

/// One `key = value` entry, in the order it appeared in the input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub key: PoolOffset,
    pub value: Value,
}

/// A value with its string already resolved against the pool
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueRef<'a> {
    Int(i64),
    Float(f64),
    String(&'a str),
}

impl fmt::Display for ValueRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueRef::Int(n) => write!(f, "{}", n),
            ValueRef::Float(x) => write!(f, "{:?}", x),
            ValueRef::String(s) => write!(f, "\"{}\"", s),
        }
    }
}

/// A record with key and value resolved, borrowed from a store
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry<'a> {
    pub key: &'a str,
    pub value: ValueRef<'a>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_kind() {
        assert_eq!(Value::Int(1).kind(), ValueKind::Int);
        assert_eq!(Value::Float(0.5).kind(), ValueKind::Float);
        assert_eq!(Value::String(PoolOffset(3)).kind(), ValueKind::String);
    }

    #[test]
    fn test_value_ref_display() {
        assert_eq!(ValueRef::Int(800).to_string(), "800");
        assert_eq!(ValueRef::Float(0.3).to_string(), "0.3");
        assert_eq!(ValueRef::Float(2.0).to_string(), "2.0");
        assert_eq!(ValueRef::String("Viewer").to_string(), "\"Viewer\"");
    }
}
