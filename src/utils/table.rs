//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width: width.max(UnicodeWidthStr::width(header)),
        }
    }

    /// Column as wide as the widest of its header and `cells`.
    pub fn fit<'a>(header: &str, cells: impl Iterator<Item = &'a str>) -> Self {
        let widest = cells.map(UnicodeWidthStr::width).max().unwrap_or(0);
        Self::new(header, widest)
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let last = self.columns.len().saturating_sub(1);

        // Header
        for (i, col) in self.columns.iter().enumerate() {
            push_cell(&mut out, &col.header, col.width, i == last);
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                push_cell(&mut out, cell, col.width, i == last);
            }
            out.push('\n');
        }

        out
    }
}

// The last cell is never padded: it may carry ANSI colour codes.
fn push_cell(out: &mut String, cell: &str, width: usize, last: bool) {
    out.push_str(cell);
    if !last {
        let pad = width.saturating_sub(UnicodeWidthStr::width(cell));
        out.push_str(&" ".repeat(pad + 1));
    }
}
