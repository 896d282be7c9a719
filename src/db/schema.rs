use rusqlite::{Connection, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the `records` key-value table (one JSON collection per namespace).
fn create_records_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS records (
            namespace   TEXT PRIMARY KEY,
            payload     TEXT NOT NULL DEFAULT '[]',
            updated_at  TEXT NOT NULL DEFAULT ''
        );
        "#,
    )?;
    Ok(())
}

/// Create the `log` and `records` tables if missing.
///
/// Invoked by db::init_db() and whenever a store is opened, so a fresh
/// database file is usable without an explicit `init`.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    create_records_table(conn)?;
    Ok(())
}
