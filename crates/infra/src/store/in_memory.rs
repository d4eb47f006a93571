use std::collections::HashMap;
use std::hash::Hash;
use std::sync::RwLock;

use super::StoreError;

#[derive(Debug)]
struct Entries<K, V> {
    index: HashMap<K, usize>,
    values: Vec<V>,
}

/// In-memory, insertion-ordered key/value store for tests/dev.
///
/// Every write takes the lock once, so a value (e.g. a menu together with its line
/// items) becomes visible in a single step. Re-saving an existing key replaces the
/// value and keeps its original position.
#[derive(Debug)]
pub struct InMemoryStore<K, V> {
    inner: RwLock<Entries<K, V>>,
}

impl<K, V> InMemoryStore<K, V> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Entries {
                index: HashMap::new(),
                values: Vec::new(),
            }),
        }
    }
}

impl<K, V> Default for InMemoryStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned() -> StoreError {
    StoreError::Unavailable("in-memory store lock poisoned".to_string())
}

impl<K, V> InMemoryStore<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub fn get(&self, key: &K) -> Result<Option<V>, StoreError> {
        let entries = self.inner.read().map_err(|_| poisoned())?;
        Ok(entries.index.get(key).map(|&i| entries.values[i].clone()))
    }

    pub fn contains(&self, key: &K) -> Result<bool, StoreError> {
        let entries = self.inner.read().map_err(|_| poisoned())?;
        Ok(entries.index.contains_key(key))
    }

    pub fn upsert(&self, key: K, value: V) -> Result<(), StoreError> {
        let mut entries = self.inner.write().map_err(|_| poisoned())?;
        match entries.index.get(&key) {
            Some(&i) => entries.values[i] = value,
            None => {
                let i = entries.values.len();
                entries.values.push(value);
                entries.index.insert(key, i);
            }
        }
        Ok(())
    }

    /// All values in insertion order.
    pub fn list(&self) -> Result<Vec<V>, StoreError> {
        let entries = self.inner.read().map_err(|_| poisoned())?;
        Ok(entries.values.clone())
    }
}
