//! Table rendering utilities for CLI outputs.

use crate::utils::formatting::{display_width, pad_right};

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            width: display_width(header),
        }
    }
}

enum Row {
    Cells(Vec<String>),
    /// One cell spanning every column.
    Span(String),
}

pub struct Table {
    pub columns: Vec<Column>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Add a row; columns widen to fit the content.
    pub fn add_row(&mut self, row: Vec<String>) {
        for (col, cell) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(display_width(cell));
        }
        self.rows.push(Row::Cells(row));
    }

    pub fn add_span(&mut self, text: String) {
        self.rows.push(Row::Span(text));
    }

    fn total_width(&self) -> usize {
        let cols: usize = self.columns.iter().map(|c| c.width).sum();
        cols + 3 * self.columns.len().saturating_sub(1)
    }

    pub fn render(&self, separator: &str) -> String {
        let mut out = String::new();

        // Header
        let header: Vec<String> = self
            .columns
            .iter()
            .map(|c| pad_right(&c.header, c.width))
            .collect();
        out.push_str(header.join(" | ").trim_end());
        out.push('\n');

        let sep = separator.chars().next().unwrap_or('-');
        out.push_str(&sep.to_string().repeat(self.total_width()));
        out.push('\n');

        // Rows
        for row in &self.rows {
            match row {
                Row::Cells(cells) => {
                    let line: Vec<String> = self
                        .columns
                        .iter()
                        .enumerate()
                        .map(|(i, col)| {
                            pad_right(cells.get(i).map(String::as_str).unwrap_or(""), col.width)
                        })
                        .collect();
                    out.push_str(line.join(" | ").trim_end());
                }
                Row::Span(text) => out.push_str(text),
            }
            out.push('\n');
        }

        out
    }
}
