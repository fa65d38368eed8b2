//! Key-value storage abstraction
//!
//! The console persists two things: the bearer token and the published task
//! list. Both go through [`KeyValueStore`] so the browser's `localStorage` can
//! be swapped for an in-memory store in tests.
//!
//! - [`MemoryStore`]: plain in-memory map
//! - [`CachedStore`]: read-through/write-through cache in front of any store

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StorageError;

/// Storage key holding the bearer token (raw string, not JSON)
pub const TOKEN_KEY: &str = "token";

/// Storage key holding the JSON array of published task summaries
pub const PUBLISHED_TASKS_KEY: &str = "publishedTasks";

/// String key-value store with typed JSON helpers
///
/// Methods take `&self`: browser storage is a global, and the in-memory
/// implementations use interior mutability to match.
pub trait KeyValueStore {
    /// Read the raw string stored under `key`
    fn get_raw(&self, key: &str) -> Option<String>;

    /// Store a raw string under `key`
    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key` if present
    fn remove(&self, key: &str);

    /// Read and deserialize a JSON value
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError>
    where
        Self: Sized,
    {
        match self.get_raw(key) {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Serialize a value as JSON and store it
    fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError>
    where
        Self: Sized,
    {
        let raw = serde_json::to_string(value)?;
        self.set_raw(key, &raw)
    }
}

impl<S: KeyValueStore> KeyValueStore for Rc<S> {
    fn get_raw(&self, key: &str) -> Option<String> {
        (**self).get_raw(key)
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_raw(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

/// In-memory store
///
/// Clones share the same map, which lets a test hand one clone to a service
/// and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    writes: Rc<RefCell<usize>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `set_raw` calls so far
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Cache layer in front of another store
///
/// Reads are served from the cache after the first lookup (including cached
/// misses). Writes go to the inner store first and only update the cache on
/// success. Writes made to the inner store through any other handle stay
/// invisible until [`CachedStore::invalidate`], so only put this in front of
/// a store nothing else writes to.
#[derive(Debug)]
pub struct CachedStore<S> {
    inner: S,
    cache: RefCell<HashMap<String, Option<String>>>,
}

impl<S: KeyValueStore> CachedStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Drop every cached entry so the next read hits the inner store
    pub fn invalidate(&self) {
        self.cache.borrow_mut().clear();
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: KeyValueStore> KeyValueStore for CachedStore<S> {
    fn get_raw(&self, key: &str) -> Option<String> {
        if let Some(cached) = self.cache.borrow().get(key) {
            return cached.clone();
        }
        let value = self.inner.get_raw(key);
        self.cache
            .borrow_mut()
            .insert(key.to_string(), value.clone());
        value
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.set_raw(key, value)?;
        self.cache
            .borrow_mut()
            .insert(key.to_string(), Some(value.to_string()));
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.inner.remove(key);
        self.cache.borrow_mut().insert(key.to_string(), None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn test_typed_round_trip_through_memory_store() {
        let store = MemoryStore::new();
        let sample = Sample {
            name: "chrome".to_string(),
            count: 3,
        };

        store.set("sample", &sample).unwrap();
        assert_eq!(store.get::<Sample>("sample").unwrap(), Some(sample));
        assert_eq!(store.get::<Sample>("missing").unwrap(), None);
    }

    #[test]
    fn test_get_reports_corrupt_json() {
        let store = MemoryStore::new();
        store.set_raw("sample", "{not json").unwrap();

        let result = store.get::<Sample>("sample");
        assert!(matches!(result, Err(StorageError::Serialization(_))));
    }

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let handle = store.clone();
        handle.set_raw(TOKEN_KEY, "abc").unwrap();

        assert_eq!(store.get_raw(TOKEN_KEY).as_deref(), Some("abc"));
        assert_eq!(store.write_count(), 1);
        store.remove(TOKEN_KEY);
        assert!(handle.is_empty());
    }

    #[test]
    fn test_cached_store_serves_reads_from_cache() {
        let backing = MemoryStore::new();
        backing.set_raw("k", "v1").unwrap();
        let cached = CachedStore::new(backing.clone());

        assert_eq!(cached.get_raw("k").as_deref(), Some("v1"));

        // Bypass the cache; the stale value is still served until invalidated
        backing.set_raw("k", "v2").unwrap();
        assert_eq!(cached.get_raw("k").as_deref(), Some("v1"));

        cached.invalidate();
        assert_eq!(cached.get_raw("k").as_deref(), Some("v2"));
    }

    #[test]
    fn test_cached_store_writes_through() {
        let backing = MemoryStore::new();
        let cached = CachedStore::new(backing.clone());

        assert_eq!(cached.get_raw("k"), None);
        cached.set_raw("k", "v").unwrap();
        assert_eq!(backing.get_raw("k").as_deref(), Some("v"));
        assert_eq!(cached.get_raw("k").as_deref(), Some("v"));

        cached.remove("k");
        assert_eq!(backing.get_raw("k"), None);
        assert_eq!(cached.get_raw("k"), None);
    }
}
