use crate::errors::AppResult;
use crate::models::entry::AttendanceEntry;
use std::io::Write;

/// Pretty-printed JSON array of the entries, as stored.
pub fn write_json<W: Write>(mut writer: W, entries: &[AttendanceEntry]) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut writer, entries)?;
    writer.write_all(b"\n")?;
    Ok(())
}
