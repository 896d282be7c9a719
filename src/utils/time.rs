//! Time utilities: parsing the pinned clock, formatting worked durations and deficits.

use crate::errors::{AppError, AppResult};
use chrono::{Duration, Local, NaiveDateTime};

/// Parse "YYYY-MM-DD HH:MM[:SS]" (a `T` separator is accepted too).
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let normalized = s.trim().replacen('T', " ", 1);
    NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%d %H:%M"))
        .ok()
}

/// Current local wall-clock time, unless the caller pinned one.
pub fn resolve_now(pinned: Option<&String>) -> AppResult<NaiveDateTime> {
    match pinned {
        Some(s) => parse_datetime(s).ok_or_else(|| AppError::InvalidTime(s.to_string())),
        None => Ok(Local::now().naive_local()),
    }
}

/// Worked duration as `H:MM` (hours not zero-padded): 8h30m → "8:30".
pub fn format_hours(d: Duration) -> String {
    let mins = d.num_minutes().max(0);
    format!("{}:{:02}", mins / 60, mins % 60)
}

/// Deficit with second precision: 50s → "0m 50s", 1h2m3s → "1h 02m 03s".
/// Partial seconds round up, so a non-zero deficit never shows as "0m 00s".
pub fn format_remaining(d: Duration) -> String {
    let mut secs = d.num_seconds().max(0);
    if d > Duration::seconds(secs) {
        secs += 1;
    }
    let h = secs / 3600;
    let m = (secs % 3600) / 60;
    let s = secs % 60;

    if h > 0 {
        format!("{}h {:02}m {:02}s", h, m, s)
    } else {
        format!("{}m {:02}s", m, s)
    }
}
