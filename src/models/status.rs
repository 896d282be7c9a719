use super::entry::AttendanceEntry;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryStatus {
    #[serde(rename = "Active")]
    Active,
    #[serde(rename = "On Lunch")]
    OnLunch,
    #[serde(rename = "Logged Out")]
    LoggedOut,
}

impl EntryStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EntryStatus::Active => "Active",
            EntryStatus::OnLunch => "On Lunch",
            EntryStatus::LoggedOut => "Logged Out",
        }
    }

    /// Active and OnLunch sessions can still transition.
    pub fn is_open(&self) -> bool {
        matches!(self, EntryStatus::Active | EntryStatus::OnLunch)
    }
}

/// Status shown by list/report views, computed from the timestamps only.
///
/// Independent from the stored `status`: `None` means the row has no
/// clock-in at all and is rendered as "-".
pub fn derive_status(entry: &AttendanceEntry) -> Option<EntryStatus> {
    if entry.clock_out_time.is_some() {
        Some(EntryStatus::LoggedOut)
    } else if entry.lunch_start_time.is_some() && entry.lunch_end_time.is_none() {
        Some(EntryStatus::OnLunch)
    } else if entry.clock_in_time.is_some() {
        Some(EntryStatus::Active)
    } else {
        None
    }
}

pub fn derive_label(entry: &AttendanceEntry) -> &'static str {
    derive_status(entry).map(|s| s.label()).unwrap_or("-")
}
