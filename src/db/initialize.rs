use crate::db::schema::ensure_schema;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database.
/// Creates the schema of a new or existing database.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    ensure_schema(conn)?;
    Ok(())
}
