//! In-memory defaults store

use parking_lot::Mutex;
use std::collections::HashMap;

use crate::store::{DefaultsStore, StoredValue};
use crate::Result;

/// Defaults store that never touches disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, StoredValue>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw access to a stored entry
    pub fn get(&self, key: &str) -> Option<StoredValue> {
        self.values.lock().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.values.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.lock().is_empty()
    }
}

impl DefaultsStore for MemoryStore {
    fn read_integer(&self, key: &str) -> Result<Option<i64>> {
        Ok(self.get(key).and_then(|v| v.as_integer()))
    }

    fn write_integer(&self, key: &str, value: i64) -> Result<()> {
        self.values
            .lock()
            .insert(key.to_string(), StoredValue::Integer(value));
        Ok(())
    }

    fn read_integer_sequence(&self, key: &str) -> Result<Option<Vec<i64>>> {
        Ok(self.get(key).and_then(StoredValue::into_sequence))
    }

    fn write_integer_sequence(&self, key: &str, values: &[i64]) -> Result<()> {
        self.values
            .lock()
            .insert(key.to_string(), StoredValue::Sequence(values.to_vec()));
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.values.lock().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.read_integer("a").unwrap(), None);

        store.write_integer("a", 7).unwrap();
        store.write_integer_sequence("b", &[1, 2]).unwrap();
        assert_eq!(store.read_integer("a").unwrap(), Some(7));
        assert_eq!(store.read_integer_sequence("b").unwrap(), Some(vec![1, 2]));

        // Wrong shape reads as absent
        assert_eq!(store.read_integer("b").unwrap(), None);
        assert_eq!(store.read_integer_sequence("a").unwrap(), None);

        store.remove("a").unwrap();
        store.remove("missing").unwrap();
        assert_eq!(store.len(), 1);
    }
}
