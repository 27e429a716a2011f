//! SQLite-backed defaults store

use chrono::Utc;
use parking_lot::Mutex;
use rusqlite::{Connection, OptionalExtension};
use std::path::Path;
use std::sync::Arc;

use crate::migrations::run_migrations;
use crate::store::{DefaultsStore, StoredValue};
use crate::Result;

pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;

        // WAL journaling
        let _: String =
            conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;

        run_migrations(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        run_migrations(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn with_connection<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self.conn.lock();
        f(&conn)
    }

    /// Raw JSON text stored under `key`
    pub fn raw_value(&self, key: &str) -> Result<Option<String>> {
        self.with_connection(|conn| {
            let value = conn
                .query_row("SELECT value FROM settings WHERE key = ?1", [key], |row| {
                    row.get(0)
                })
                .optional()?;
            Ok(value)
        })
    }

    fn read_value(&self, key: &str) -> Result<Option<StoredValue>> {
        let Some(raw) = self.raw_value(key)? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Ignoring undecodable setting");
                Ok(None)
            }
        }
    }

    fn write_value(&self, key: &str, value: &StoredValue) -> Result<()> {
        let encoded = serde_json::to_string(value)?;
        let updated_at = Utc::now().to_rfc3339();
        self.with_connection(|conn| {
            conn.execute(
                "INSERT OR REPLACE INTO settings (key, value, updated_at) VALUES (?1, ?2, ?3)",
                rusqlite::params![key, encoded, updated_at],
            )?;
            Ok(())
        })
    }
}

impl DefaultsStore for SqliteStore {
    fn read_integer(&self, key: &str) -> Result<Option<i64>> {
        Ok(self.read_value(key)?.and_then(|v| v.as_integer()))
    }

    fn write_integer(&self, key: &str, value: i64) -> Result<()> {
        self.write_value(key, &StoredValue::Integer(value))
    }

    fn read_integer_sequence(&self, key: &str) -> Result<Option<Vec<i64>>> {
        Ok(self.read_value(key)?.and_then(StoredValue::into_sequence))
    }

    fn write_integer_sequence(&self, key: &str, values: &[i64]) -> Result<()> {
        self.write_value(key, &StoredValue::Sequence(values.to_vec()))
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.with_connection(|conn| {
            conn.execute("DELETE FROM settings WHERE key = ?1", [key])?;
            Ok(())
        })
    }
}

impl Clone for SqliteStore {
    fn clone(&self) -> Self {
        Self {
            conn: Arc::clone(&self.conn),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_and_sequence_values() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.read_integer("index").unwrap(), None);
        assert_eq!(store.read_integer_sequence("order").unwrap(), None);

        store.write_integer("index", -1).unwrap();
        store.write_integer_sequence("order", &[3, 1, 2]).unwrap();

        assert_eq!(store.read_integer("index").unwrap(), Some(-1));
        assert_eq!(
            store.read_integer_sequence("order").unwrap(),
            Some(vec![3, 1, 2])
        );
        assert_eq!(store.raw_value("order").unwrap().as_deref(), Some("[3,1,2]"));

        // Shape mismatch reads as absent
        assert_eq!(store.read_integer("order").unwrap(), None);
        assert_eq!(store.read_integer_sequence("index").unwrap(), None);

        store.remove("index").unwrap();
        assert_eq!(store.read_integer("index").unwrap(), None);
    }

    #[test]
    fn test_undecodable_value_reads_as_absent() {
        let store = SqliteStore::open_in_memory().unwrap();
        store
            .with_connection(|conn| {
                conn.execute(
                    "INSERT INTO settings (key, value, updated_at) VALUES ('order', 'not json', '')",
                    [],
                )?;
                Ok(())
            })
            .unwrap();

        assert_eq!(store.read_integer_sequence("order").unwrap(), None);
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.db");

        {
            let store = SqliteStore::open(&path).unwrap();
            store.write_integer_sequence("order", &[0, 2]).unwrap();
        }

        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(store.read_integer_sequence("order").unwrap(), Some(vec![0, 2]));
    }
}
