//! The defaults store contract

use serde::{Deserialize, Serialize};

use crate::Result;

/// A value as it sits in the store.
///
/// Encoded untagged, so an integer is a bare JSON number and a sequence is a
/// JSON array of numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredValue {
    Integer(i64),
    Sequence(Vec<i64>),
}

impl StoredValue {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            StoredValue::Integer(value) => Some(*value),
            StoredValue::Sequence(_) => None,
        }
    }

    pub fn into_sequence(self) -> Option<Vec<i64>> {
        match self {
            StoredValue::Sequence(values) => Some(values),
            StoredValue::Integer(_) => None,
        }
    }
}

/// Persistent key-value store for user defaults.
///
/// Reads return `Ok(None)` when the key is absent or holds a value of the
/// other shape. Implementations must tolerate being called through `&self`.
pub trait DefaultsStore {
    fn read_integer(&self, key: &str) -> Result<Option<i64>>;

    fn write_integer(&self, key: &str, value: i64) -> Result<()>;

    fn read_integer_sequence(&self, key: &str) -> Result<Option<Vec<i64>>>;

    fn write_integer_sequence(&self, key: &str, values: &[i64]) -> Result<()>;

    /// Remove a key; removing an absent key is not an error
    fn remove(&self, key: &str) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_value_encoding() {
        assert_eq!(serde_json::to_string(&StoredValue::Integer(3)).unwrap(), "3");
        assert_eq!(
            serde_json::to_string(&StoredValue::Sequence(vec![2, 0, 1])).unwrap(),
            "[2,0,1]"
        );

        let parsed: StoredValue = serde_json::from_str("[4,5]").unwrap();
        assert_eq!(parsed.as_integer(), None);
        assert_eq!(parsed.into_sequence(), Some(vec![4, 5]));
    }
}
