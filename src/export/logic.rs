// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::csv::write_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::write_json;
use crate::export::{ExportFormat, notify_export_success};
use crate::models::entry::AttendanceEntry;
use crate::ui::messages::{info, warning};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `entries` to `file` in `format`.
    ///
    /// Returns `false` (and writes nothing) when there is nothing to export.
    pub fn export(
        entries: &[AttendanceEntry],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<bool> {
        if entries.is_empty() {
            warning("No attendance entries to export.");
            return Ok(false);
        }

        let path = Path::new(file);
        ensure_writable(path, force)?;

        info(format!(
            "Exporting to {}: {}",
            format.as_str().to_uppercase(),
            path.display()
        ));

        let out = BufWriter::new(File::create(path)?);
        match format {
            ExportFormat::Csv => write_csv(out, entries)?,
            ExportFormat::Json => write_json(out, entries)?,
        }

        notify_export_success(&format.as_str().to_uppercase(), entries.len(), path);
        Ok(true)
    }
}
