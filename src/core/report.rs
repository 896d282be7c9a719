//! Read-only attendance views: filters, search and table rendering.

use crate::db::store::RecordStore;
use crate::errors::AppResult;
use crate::models::actor::NAMESPACE_HR;
use crate::models::entry::AttendanceEntry;
use crate::models::status::{EntryStatus, derive_label, derive_status};
use crate::ui::messages::warning;
use crate::utils::colors::colorize_status;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;
use clap::ValueEnum;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum StatusFilter {
    #[default]
    All,
    Today,
    Active,
    Lunch,
    Out,
}

impl StatusFilter {
    pub fn matches(&self, entry: &AttendanceEntry, today: NaiveDate) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Today => entry.date == today,
            StatusFilter::Active => derive_status(entry) == Some(EntryStatus::Active),
            StatusFilter::Lunch => derive_status(entry) == Some(EntryStatus::OnLunch),
            StatusFilter::Out => derive_status(entry) == Some(EntryStatus::LoggedOut),
        }
    }
}

/// Criteria of a report view.
#[derive(Debug, Clone, Default)]
pub struct ReportQuery {
    pub filter: StatusFilter,
    pub search: Option<String>,
    /// Keep only rows of this actor id.
    pub actor_id: Option<String>,
}

impl ReportQuery {
    pub fn matches(&self, entry: &AttendanceEntry, today: NaiveDate) -> bool {
        if let Some(id) = &self.actor_id
            && entry.actor_id != *id
        {
            return false;
        }

        if !self.filter.matches(entry, today) {
            return false;
        }

        match self.search.as_deref().map(str::trim) {
            Some(needle) if !needle.is_empty() => search_text(entry).contains(&needle.to_lowercase()),
            _ => true,
        }
    }

    pub fn apply<'e>(
        &self,
        entries: &'e [AttendanceEntry],
        today: NaiveDate,
    ) -> Vec<&'e AttendanceEntry> {
        entries.iter().filter(|e| self.matches(e, today)).collect()
    }
}

/// Lowercase haystack of the searchable fields of a row.
fn search_text(entry: &AttendanceEntry) -> String {
    [
        entry.actor_id.clone(),
        entry.actor_name.clone(),
        entry.date_str(),
        entry.clock_in_str(),
        entry.lunch_start_str(),
        entry.lunch_end_str(),
        entry.clock_out_str(),
        entry.hours_str(),
        derive_label(entry).to_string(),
    ]
    .join(" ")
    .to_lowercase()
}

/// Load a namespace for a report view.
///
/// Views other than HR's fall back to the legacy dataset while their own
/// namespace is still empty.
pub fn load_for_view<S: RecordStore>(
    store: &S,
    namespace: &str,
    legacy_namespace: &str,
) -> AppResult<Vec<AttendanceEntry>> {
    let primary: Vec<AttendanceEntry> = store.load(namespace)?;

    if namespace == NAMESPACE_HR || !primary.is_empty() || legacy_namespace.is_empty() {
        return Ok(primary);
    }

    // legacy rows may come from an older tool in another shape
    match store.load(legacy_namespace) {
        Ok(rows) => Ok(rows),
        Err(e) => {
            warning(format!(
                "Ignoring legacy attendance '{}': {}",
                legacy_namespace, e
            ));
            Ok(Vec::new())
        }
    }
}

pub fn render_table(entries: &[&AttendanceEntry]) -> String {
    let headers = [
        "EmpId", "Name", "Role", "Date", "In", "Lunch", "Back", "Out", "Hours", "Status",
    ];

    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|e| {
            vec![
                e.actor_id.clone(),
                e.actor_name.clone(),
                e.actor_role.as_str().to_string(),
                e.date_str(),
                e.clock_in_str(),
                e.lunch_start_str(),
                e.lunch_end_str(),
                e.clock_out_str(),
                e.hours_str(),
                derive_label(e).to_string(),
            ]
        })
        .collect();

    let columns = headers
        .iter()
        .enumerate()
        .map(|(i, h)| Column::fit(h, rows.iter().map(|r| r[i].as_str())))
        .collect();

    let mut table = Table::new(columns);
    for mut row in rows {
        let status = row.pop().unwrap_or_default();
        row.push(colorize_status(&status));
        table.add_row(row);
    }

    table.render()
}
