//! Key-value repository contracts, implementations and the best-effort
//! persistence adapter built on them.
//!
//! # Responsibility
//! - Store opaque JSON text under string keys.
//! - Offer `load_or_default`/`save_best_effort` that never surface errors.
//!
//! # Invariants
//! - `load_or_default` returns the caller's default for absent or corrupt
//!   entries.
//! - `save_best_effort` never panics and never blocks in-memory state from
//!   taking effect; failures are logged only.

use crate::db::migrations::latest_version;
use crate::db::{open_db, DbError};
use log::{debug, warn};
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub type KvResult<T> = Result<T, KvRepoError>;

/// Errors from key-value repository operations.
#[derive(Debug)]
pub enum KvRepoError {
    /// Underlying SQLite/bootstrap error.
    Db(DbError),
    /// Value could not be encoded or decoded as JSON.
    Serde(serde_json::Error),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing.
    MissingRequiredTable(&'static str),
}

impl Display for KvRepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serde(err) => write!(f, "invalid stored value: {err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "key-value repository requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "key-value repository requires table `{table}`")
            }
        }
    }
}

impl Error for KvRepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serde(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
            Self::MissingRequiredTable(_) => None,
        }
    }
}

impl From<DbError> for KvRepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for KvRepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for KvRepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}

/// Durable string-keyed storage of serialized values.
pub trait KvRepository {
    /// Reads the raw value stored under `key`.
    fn get(&self, key: &str) -> KvResult<Option<String>>;
    /// Inserts or replaces the raw value under `key`.
    fn put(&self, key: &str, value: &str) -> KvResult<()>;
}

impl<R: KvRepository + ?Sized> KvRepository for Box<R> {
    fn get(&self, key: &str) -> KvResult<Option<String>> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &str) -> KvResult<()> {
        (**self).put(key, value)
    }
}

/// SQLite-backed key-value repository over the `kv_entries` table.
pub struct SqliteKvRepository {
    conn: Connection,
}

impl SqliteKvRepository {
    /// Wraps an already migrated connection.
    pub fn try_new(conn: Connection) -> KvResult<Self> {
        ensure_kv_connection_ready(&conn)?;
        Ok(Self { conn })
    }

    /// Opens the database file at `path` and wraps it.
    pub fn open(path: impl AsRef<Path>) -> KvResult<Self> {
        Self::try_new(open_db(path)?)
    }

    /// Borrow of the underlying connection, for diagnostics and tests.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl KvRepository for SqliteKvRepository {
    fn get(&self, key: &str) -> KvResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn put(&self, key: &str, value: &str) -> KvResult<()> {
        self.conn.execute(
            "INSERT INTO kv_entries (key, value)
             VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }
}

/// Process-local repository used by tests and as a fallback when the
/// database cannot be opened.
#[derive(Debug, Default)]
pub struct MemoryKvRepository {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryKvRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvRepository for MemoryKvRepository {
    fn get(&self, key: &str) -> KvResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> KvResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads and decodes the value under `key`.
///
/// Absent entries yield `Ok(None)`; undecodable entries are errors.
pub fn load<T, R>(repo: &R, key: &str) -> KvResult<Option<T>>
where
    T: DeserializeOwned,
    R: KvRepository + ?Sized,
{
    match repo.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Encodes and stores `value` under `key`.
pub fn save<T, R>(repo: &R, key: &str, value: &T) -> KvResult<()>
where
    T: Serialize + ?Sized,
    R: KvRepository + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    repo.put(key, &raw)
}

/// Loads the value under `key`, falling back to `default` when the entry is
/// absent, unreadable or corrupt.
pub fn load_or_default<T, R>(repo: &R, key: &str, default: T) -> T
where
    T: DeserializeOwned,
    R: KvRepository + ?Sized,
{
    match load(repo, key) {
        Ok(Some(value)) => {
            debug!("event=kv_load module=repo status=ok key={key}");
            value
        }
        Ok(None) => {
            debug!("event=kv_load module=repo status=skip reason=absent key={key}");
            default
        }
        Err(err) => {
            warn!("event=kv_load module=repo status=error key={key} error={err}");
            default
        }
    }
}

/// Stores `value` under `key`, logging instead of returning failures.
///
/// Returns whether the write reached storage.
pub fn save_best_effort<T, R>(repo: &R, key: &str, value: &T) -> bool
where
    T: Serialize + ?Sized,
    R: KvRepository + ?Sized,
{
    match save(repo, key, value) {
        Ok(()) => {
            debug!("event=kv_save module=repo status=ok key={key}");
            true
        }
        Err(err) => {
            warn!("event=kv_save module=repo status=error key={key} error={err}");
            false
        }
    }
}

fn ensure_kv_connection_ready(conn: &Connection) -> KvResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(KvRepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = 'kv_entries'
        );",
        [],
        |row| row.get(0),
    )?;
    if exists != 1 {
        return Err(KvRepoError::MissingRequiredTable("kv_entries"));
    }
    Ok(())
}
