//! CSV projection of the attendance ledger.
//!
//! Fields are quoted by the `csv` writer whenever they contain a delimiter,
//! a quote or a line break, so names such as "Rossi, Mario" stay in one column.

use crate::errors::{AppError, AppResult};
use crate::models::entry::AttendanceEntry;
use crate::models::status::derive_label;
use std::io::Write;

pub const HEADERS: [&str; 10] = [
    "EmpId",
    "EmpName",
    "Role",
    "Date",
    "Clock In",
    "Lunch Start",
    "Lunch End",
    "Clock Out",
    "Hours",
    "Status",
];

/// One CSV row, `-` for unset fields.
pub fn entry_to_row(e: &AttendanceEntry) -> [String; 10] {
    [
        dash_if_empty(&e.actor_id),
        dash_if_empty(&e.actor_name),
        e.actor_role.as_str().to_string(),
        e.date_str(),
        e.clock_in_str(),
        e.lunch_start_str(),
        e.lunch_end_str(),
        e.clock_out_str(),
        e.hours_str(),
        derive_label(e).to_string(),
    ]
}

/// Write header + one record per entry, in ledger order.
pub fn write_csv<W: Write>(writer: W, entries: &[AttendanceEntry]) -> AppResult<()> {
    let mut wtr = ::csv::Writer::from_writer(writer);

    wtr.write_record(HEADERS)?;
    for e in entries {
        wtr.write_record(entry_to_row(e))?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn to_csv_string(entries: &[AttendanceEntry]) -> AppResult<String> {
    let mut buf = Vec::new();
    write_csv(&mut buf, entries)?;
    String::from_utf8(buf).map_err(|e| AppError::Export(format!("CSV is not UTF-8: {e}")))
}

fn dash_if_empty(s: &str) -> String {
    if s.trim().is_empty() {
        "-".to_string()
    } else {
        s.to_string()
    }
}
