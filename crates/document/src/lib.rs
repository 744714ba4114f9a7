//! # Document - the in-memory snapshot model
//!
//! A [`Document`] is what decoding a snapshot produces and what encoding
//! one consumes: the format version, the auxiliary metadata map, and an
//! ordered list of [`Database`] sections, each holding [`Entry`] records.
//!
//! The model is plain data. It is built once per decode call, never
//! mutated by the codec afterwards, and carries no I/O or interior
//! mutability, so independent documents can be processed on different
//! threads without synchronization.
//!
//! Set and hash values use `BTreeSet`/`BTreeMap` so membership is unique
//! by construction and the encoder gets a stable iteration order for
//! free. Equality on those variants is content equality, which is exactly
//! what the wire format promises for them.

use std::collections::{BTreeMap, BTreeSet};

/// Version written into newly built documents.
pub const DEFAULT_VERSION: &str = "0011";

/// A typed record value, one variant per wire type tag.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Raw byte string.
    Str(Vec<u8>),
    /// Ordered list of byte strings.
    List(Vec<Vec<u8>>),
    /// Unordered unique byte strings.
    Set(BTreeSet<Vec<u8>>),
    /// (member, score) pairs in written order; members are unique.
    SortedSet(Vec<(Vec<u8>, f64)>),
    /// Unique field -> value mapping.
    Hash(BTreeMap<Vec<u8>, Vec<u8>>),
    /// Signed integer stored directly in the length encoding.
    Int(i64),
}

impl Value {
    /// Short lowercase name of the variant, for summaries and messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Set(_) => "set",
            Value::SortedSet(_) => "zset",
            Value::Hash(_) => "hash",
            Value::Int(_) => "int",
        }
    }
}

/// One key plus its typed value and optional expiry timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// The lookup key (raw bytes, not necessarily UTF-8).
    pub key: Vec<u8>,
    /// The stored value.
    pub value: Value,
    /// Absolute expiry in milliseconds since the Unix epoch, if any.
    pub expire_at_ms: Option<u64>,
}

impl Entry {
    /// A non-expiring entry.
    pub fn new(key: impl Into<Vec<u8>>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
            expire_at_ms: None,
        }
    }

    /// An entry expiring at the given millisecond timestamp.
    pub fn expiring(key: impl Into<Vec<u8>>, value: Value, expire_at_ms: u64) -> Self {
        Self {
            key: key.into(),
            value,
            expire_at_ms: Some(expire_at_ms),
        }
    }
}

/// One database section: a selector index and its records in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Database {
    pub index: u64,
    pub entries: Vec<Entry>,
}

impl Database {
    /// An empty database with the given selector index.
    pub fn new(index: u64) -> Self {
        Self {
            index,
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries carrying an expiry timestamp.
    #[must_use]
    pub fn expiring_len(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.expire_at_ms.is_some())
            .count()
    }
}

/// A complete decoded snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Exactly 4 ASCII digits.
    pub version: String,
    /// Auxiliary fields; insertion order is not significant.
    pub metadata: BTreeMap<String, String>,
    /// Database sections in file order.
    pub databases: Vec<Database>,
}

impl Document {
    /// An empty document with [`DEFAULT_VERSION`].
    pub fn new() -> Self {
        Self::with_version(DEFAULT_VERSION)
    }

    /// An empty document with an explicit version string.
    pub fn with_version(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            metadata: BTreeMap::new(),
            databases: Vec::new(),
        }
    }

    /// Total entry count across all databases.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.databases.iter().map(Database::len).sum()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
