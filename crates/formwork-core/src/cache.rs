//! Read-only record-cache boundary.
//!
//! `validate` implementations use this for cross-record existence
//! checks ("does at least one matching detail sheet exist"). The cache
//! is synchronous and never blocking; population and invalidation are
//! somebody else's job, and the widget runtime never writes through it.

use ahash::AHashMap;
use serde_json::Value;

use crate::id::EntityId;

/// One field-equality probe against cached records of a kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheQuery {
    pub field: String,
    pub equals: Value,
}

impl CacheQuery {
    #[must_use]
    pub fn new(field: impl Into<String>, equals: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            equals: equals.into(),
        }
    }
}

/// Synchronous, read-only view of cached records.
pub trait RecordCache {
    /// Look up a cached record by kind and id. `None` means "not
    /// cached", not "does not exist".
    fn get(&self, kind: &str, id: EntityId) -> Option<Value>;

    /// Whether at least one cached record of `kind` matches the query.
    fn exists(&self, kind: &str, query: &CacheQuery) -> bool;
}

/// In-memory [`RecordCache`]; also serves as the test double.
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    records: AHashMap<String, AHashMap<EntityId, Value>>,
}

impl MemoryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, kind: impl Into<String>, id: EntityId, record: Value) {
        self.records.entry(kind.into()).or_default().insert(id, record);
    }

    pub fn remove(&mut self, kind: &str, id: EntityId) {
        if let Some(records) = self.records.get_mut(kind) {
            records.remove(&id);
        }
    }
}

impl RecordCache for MemoryCache {
    fn get(&self, kind: &str, id: EntityId) -> Option<Value> {
        self.records.get(kind)?.get(&id).cloned()
    }

    fn exists(&self, kind: &str, query: &CacheQuery) -> bool {
        self.records.get(kind).is_some_and(|records| {
            records
                .values()
                .any(|record| record.get(&query.field) == Some(&query.equals))
        })
    }
}
