use super::actor::{Actor, Role};
use super::status::EntryStatus;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One attendance session, from a clock-in to its clock-out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceEntry {
    pub id: String,

    // identity snapshot taken at clock-in
    pub actor_id: String,
    pub actor_name: String,
    pub actor_role: Role,

    pub date: NaiveDate,
    pub clock_in_time: Option<NaiveDateTime>,
    pub lunch_start_time: Option<NaiveDateTime>,
    pub lunch_end_time: Option<NaiveDateTime>,
    pub clock_out_time: Option<NaiveDateTime>,
    pub computed_hours: Option<String>,
    pub status: EntryStatus,
}

impl AttendanceEntry {
    /// New `Active` session for `actor` starting at `now`.
    pub fn open(id: String, actor: &Actor, now: NaiveDateTime) -> Self {
        Self {
            id,
            actor_id: actor.id.clone(),
            actor_name: actor.name.clone(),
            actor_role: actor.role,
            date: now.date(),
            clock_in_time: Some(now),
            lunch_start_time: None,
            lunch_end_time: None,
            clock_out_time: None,
            computed_hours: None,
            status: EntryStatus::Active,
        }
    }

    pub fn belongs_to(&self, actor_id: &str, date: NaiveDate) -> bool {
        self.actor_id == actor_id && self.date == date
    }

    pub fn is_open(&self) -> bool {
        self.status.is_open()
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn clock_in_str(&self) -> String {
        fmt_time(self.clock_in_time)
    }

    pub fn lunch_start_str(&self) -> String {
        fmt_time(self.lunch_start_time)
    }

    pub fn lunch_end_str(&self) -> String {
        fmt_time(self.lunch_end_time)
    }

    pub fn clock_out_str(&self) -> String {
        fmt_time(self.clock_out_time)
    }

    pub fn hours_str(&self) -> String {
        match &self.computed_hours {
            Some(h) if !h.is_empty() => h.clone(),
            _ => "-".to_string(),
        }
    }
}

fn fmt_time(t: Option<NaiveDateTime>) -> String {
    t.map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}
