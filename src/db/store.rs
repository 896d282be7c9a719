//! Record store: named, ordered collections of JSON records.
//!
//! The clock only ever needs `get`/`set` of a whole collection by namespace,
//! so the trait is kept that small. `SqliteStore` keeps one JSON payload per
//! namespace in the `records` table; `MemoryStore` backs tests and embedding.

use crate::db::schema::ensure_schema;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

pub trait RecordStore {
    /// Raw payload stored under `namespace`, if any.
    fn get(&self, namespace: &str) -> AppResult<Option<String>>;

    /// Replace the payload stored under `namespace`.
    fn set(&mut self, namespace: &str, payload: &str) -> AppResult<()>;

    fn remove(&mut self, namespace: &str) -> AppResult<()>;

    /// Load a collection. A missing namespace is an empty list.
    fn load<T: DeserializeOwned>(&self, namespace: &str) -> AppResult<Vec<T>>
    where
        Self: Sized,
    {
        match self.get(namespace)? {
            Some(raw) if !raw.trim().is_empty() => Ok(serde_json::from_str(&raw)?),
            _ => Ok(Vec::new()),
        }
    }

    fn save<T: Serialize>(&mut self, namespace: &str, records: &[T]) -> AppResult<()>
    where
        Self: Sized,
    {
        let payload = serde_json::to_string(records)?;
        self.set(namespace, &payload)
    }

    fn load_one<T: DeserializeOwned>(&self, namespace: &str) -> AppResult<Option<T>>
    where
        Self: Sized,
    {
        match self.get(namespace)? {
            Some(raw) if !raw.trim().is_empty() => Ok(Some(serde_json::from_str(&raw)?)),
            _ => Ok(None),
        }
    }

    fn save_one<T: Serialize>(&mut self, namespace: &str, record: &T) -> AppResult<()>
    where
        Self: Sized,
    {
        let payload = serde_json::to_string(record)?;
        self.set(namespace, &payload)
    }
}

/// SQLite-backed store.
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    /// Open the database at `path`, creating the schema if needed.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        ensure_schema(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn in_memory() -> AppResult<Self> {
        let pool = DbPool::in_memory()?;
        ensure_schema(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }
}

impl RecordStore for SqliteStore {
    fn get(&self, namespace: &str) -> AppResult<Option<String>> {
        let mut stmt = self
            .pool
            .conn
            .prepare_cached("SELECT payload FROM records WHERE namespace = ?1")?;
        let payload: Option<String> = stmt
            .query_row([namespace], |row| row.get(0))
            .optional()?;
        Ok(payload)
    }

    fn set(&mut self, namespace: &str, payload: &str) -> AppResult<()> {
        let now = Local::now().to_rfc3339();
        self.pool.conn.execute(
            r#"
            INSERT INTO records (namespace, payload, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(namespace) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at
            "#,
            params![namespace, payload, now],
        )?;
        Ok(())
    }

    fn remove(&mut self, namespace: &str) -> AppResult<()> {
        self.pool
            .conn
            .execute("DELETE FROM records WHERE namespace = ?1", [namespace])?;
        Ok(())
    }
}

/// Volatile store kept in a map.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    data: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryStore {
    fn get(&self, namespace: &str) -> AppResult<Option<String>> {
        Ok(self.data.get(namespace).cloned())
    }

    fn set(&mut self, namespace: &str, payload: &str) -> AppResult<()> {
        self.data.insert(namespace.to_string(), payload.to_string());
        Ok(())
    }

    fn remove(&mut self, namespace: &str) -> AppResult<()> {
        self.data.remove(namespace);
        Ok(())
    }
}
