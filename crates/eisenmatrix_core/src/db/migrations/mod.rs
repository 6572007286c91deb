//! Schema upgrades for the key-value table.
//!
//! Each step is a SQL script tagged with the schema version it produces.
//! The highest applied version is recorded in `PRAGMA user_version`, so a
//! fresh file runs every step and an up-to-date file runs none.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

/// `(resulting schema version, script)` pairs in ascending version order.
const STEPS: &[(u32, &str)] = &[(1, include_str!("0001_kv_entries.sql"))];

/// Schema version produced by the last known step.
pub fn latest_version() -> u32 {
    STEPS.last().map_or(0, |&(version, _)| version)
}

/// Brings `conn` up to `latest_version()` inside a single transaction.
///
/// A database already at a higher version than this build knows is
/// rejected with `DbError::UnsupportedSchemaVersion` and left untouched.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let found: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    let supported = latest_version();
    if found > supported {
        return Err(DbError::UnsupportedSchemaVersion { found, supported });
    }

    let pending: Vec<(u32, &str)> = STEPS
        .iter()
        .copied()
        .filter(|(version, _)| *version > found)
        .collect();
    if pending.is_empty() {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for (version, script) in pending {
        tx.execute_batch(script)?;
        tx.pragma_update(None, "user_version", version)?;
    }
    tx.commit()?;

    info!("event=db_migrate module=db status=ok from_version={found} to_version={supported}");
    Ok(())
}
