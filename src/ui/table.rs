//! Column-aligned plain text tables.

use crate::utils::formatting::pad_right;
use unicode_width::UnicodeWidthStr;

/// Rows are buffered so every column can be sized to its widest cell
/// before anything is printed.
pub struct Table {
    widths: Vec<usize>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(ncols: usize) -> Self {
        Self {
            widths: vec![0; ncols],
            rows: Vec::new(),
        }
    }

    /// Append a row. Cells beyond the declared column count are ignored.
    pub fn add_row(&mut self, row: Vec<String>) {
        for (width, cell) in self.widths.iter_mut().zip(&row) {
            *width = (*width).max(cell.width());
        }
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    pub fn formatted_rows(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| format_row(row, Some(&self.widths)))
            .collect()
    }

    pub fn render(&self) -> String {
        self.formatted_rows().join("\n")
    }
}

/// Left-align each cell to its width, separated by a single space.
/// Without `widths` every cell keeps its natural width.
pub fn format_row(row: &[String], widths: Option<&[usize]>) -> String {
    let mut line = String::new();
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        let width = widths.and_then(|w| w.get(i).copied()).unwrap_or(0);
        line.push_str(&pad_right(cell, width));
    }
    line
}
