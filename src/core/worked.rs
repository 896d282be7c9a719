//! Worked-time calculator: elapsed time from clock-in net of the lunch interval.

use crate::models::entry::AttendanceEntry;
use crate::utils::time::format_hours;
use chrono::{Duration, NaiveDateTime};

/// Net worked duration of `entry` evaluated at `candidate`.
///
/// The lunch interval ends at `lunch_end_time`, or at `candidate` while it is
/// still open, so an unfinished lunch is never counted as work.
pub fn net_worked(entry: &AttendanceEntry, candidate: NaiveDateTime) -> Duration {
    let Some(clock_in) = entry.clock_in_time else {
        return Duration::zero();
    };

    let raw = candidate - clock_in;

    let lunch = match entry.lunch_start_time {
        Some(start) => entry.lunch_end_time.unwrap_or(candidate) - start,
        None => Duration::zero(),
    };

    (raw - lunch).max(Duration::zero())
}

/// How much is still missing before `minimum` is reached (zero if reached).
pub fn remaining_until(
    entry: &AttendanceEntry,
    candidate: NaiveDateTime,
    minimum: Duration,
) -> Duration {
    (minimum - net_worked(entry, candidate)).max(Duration::zero())
}

/// `computedHours` value for a closed session.
pub fn computed_hours(entry: &AttendanceEntry, clock_out: NaiveDateTime) -> String {
    format_hours(net_worked(entry, clock_out))
}
