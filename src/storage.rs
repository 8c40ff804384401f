//! Durable keyed storage backed by SQLite.
//!
//! The task collection is persisted as a single JSON array under a fixed key:
//! one `kv` table, one row per key. The collection codec lives here too, and
//! so does corruption tolerance: a stored value that fails to parse loads as
//! an empty collection with a warning, never as an error.

use crate::error::Result;
use crate::types::Task;
use rusqlite::{Connection, params};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Storage key for the serialized task collection.
pub const TASKS_KEY: &str = "taskflow-tasks";

/// Keyed storage handle wrapping a SQLite connection.
#[derive(Clone)]
pub struct Storage {
    conn: Arc<Mutex<Connection>>,
}

impl Storage {
    /// Open or create the backing database at the given path.
    ///
    /// Missing parent directories are created. Two processes writing the same
    /// file are last-writer-wins; WAL mode and a busy timeout keep that case
    /// from erroring, nothing more.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.execute_batch(
            "PRAGMA journal_mode=WAL;
             PRAGMA busy_timeout=5000;",
        )?;

        let storage = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        storage.init_schema()?;
        Ok(storage)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let storage = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        storage.init_schema()?;
        Ok(storage)
    }

    fn init_schema(&self) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(())
    }

    /// Read the raw value stored under a key.
    pub fn read(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn.lock().unwrap();
        let result = conn.query_row(
            "SELECT value FROM kv WHERE key = ?1",
            params![key],
            |row| row.get(0),
        );

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Write a value under a key, replacing any previous value.
    pub fn write(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    /// Load the task collection.
    ///
    /// A missing key yields an empty collection. So does a stored value that
    /// fails to parse, with a warning; startup must never abort on bad data.
    pub fn load_tasks(&self) -> Result<Vec<Task>> {
        let Some(raw) = self.read(TASKS_KEY)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(tasks) => Ok(tasks),
            Err(err) => {
                warn!(error = %err, "stored task data is malformed, starting with an empty list");
                Ok(Vec::new())
            }
        }
    }

    /// Serialize and store the full task collection.
    pub fn save_tasks(&self, tasks: &[Task]) -> Result<()> {
        let raw = serde_json::to_string(tasks)?;
        self.write(TASKS_KEY, &raw)
    }
}
