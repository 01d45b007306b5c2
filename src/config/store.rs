// Store module
// The parsed configuration: records plus the string pool they point into

use super::buffer::GrowBuffer;
use super::error::{ConfigError, Diagnostic};
use super::parser::Parser;
use super::pool::{PoolOffset, StringPool};
use super::value::{Entry, Record, Value, ValueKind, ValueRef};
use log::debug;
use std::fs;
use std::path::Path;

/// An immutable, typed key/value view of one config input.
///
/// Lookups are type-directed: a key may appear several times with different
/// value kinds and each accessor only sees the records of its kind. Absence is
/// the normal result for optional keys; callers supply their own defaults.
#[derive(Debug, Clone)]
pub struct Store {
    pool: StringPool,
    records: GrowBuffer<Record>,
    diagnostics: Vec<Diagnostic>,
}

impl Store {
    pub(crate) fn new(
        pool: StringPool,
        records: GrowBuffer<Record>,
        diagnostics: Vec<Diagnostic>,
    ) -> Self {
        Store {
            pool,
            records,
            diagnostics,
        }
    }

    /// Parse a complete config held in memory
    pub fn from_bytes(bytes: &[u8]) -> Result<Store, ConfigError> {
        if bytes.is_empty() {
            return Err(ConfigError::EmptyInput);
        }
        Parser::new(bytes)?.parse()
    }

    /// Read and parse a config file. The file buffer is released before
    /// returning, whatever the outcome.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Store, ConfigError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Read {} bytes of config from {}", bytes.len(), path.display());
        Store::from_bytes(&bytes)
    }

    /// First record named `key` whose value has the requested kind
    pub fn get(&self, key: &str, kind: ValueKind) -> Option<Value> {
        self.records
            .iter()
            .find(|record| {
                record.value.kind() == kind && self.pool.resolve(record.key) == Some(key)
            })
            .map(|record| record.value)
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        match self.get(key, ValueKind::Int)? {
            Value::Int(n) => Some(n),
            Value::Float(_) | Value::String(_) => None,
        }
    }

    pub fn get_float(&self, key: &str) -> Option<f64> {
        match self.get(key, ValueKind::Float)? {
            Value::Float(x) => Some(x),
            Value::Int(_) | Value::String(_) => None,
        }
    }

    /// The string value of `key`, borrowed from this store's pool
    pub fn get_string(&self, key: &str) -> Option<&str> {
        match self.get(key, ValueKind::String)? {
            Value::String(offset) => self.pool.resolve(offset),
            Value::Int(_) | Value::Float(_) => None,
        }
    }

    /// Resolve a pool offset produced by this store
    pub fn resolve(&self, offset: PoolOffset) -> Option<&str> {
        self.pool.resolve(offset)
    }

    /// All records in input order, with text resolved
    pub fn records(&self) -> impl Iterator<Item = Entry<'_>> + '_ {
        self.records.iter().map(move |record| Entry {
            key: self.pool.resolve(record.key).unwrap_or_default(),
            value: match record.value {
                Value::Int(n) => ValueRef::Int(n),
                Value::Float(x) => ValueRef::Float(x),
                Value::String(offset) => {
                    ValueRef::String(self.pool.resolve(offset).unwrap_or_default())
                }
            },
        })
    }

    /// Raw records in input order
    pub fn raw_records(&self) -> &[Record] {
        self.records.as_slice()
    }

    /// Problems found while parsing; entries they affect were skipped
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
