//! The [`Table`] model and its ASCII grid rendering.

use std::io::Write;

use crate::TableError;

/// An ordered set of column headers (possibly none) plus rows of string
/// cells.
///
/// With headers present, [`push_row`](Table::push_row) enforces that every
/// row matches the header width. Headerless tables accept any row shape.
///
/// The grid layout (borders, padding) is presentation only; the
/// load-bearing output is the header set and cell contents.
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates an empty, headerless table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty table with the given column headers.
    pub fn with_headers<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row.
    ///
    /// # Errors
    ///
    /// [`TableError::DimensionMismatch`] if the table has headers and the
    /// row's column count differs from the header count. The error names
    /// the zero-based index this row would have had.
    pub fn push_row(&mut self, row: Vec<String>) -> Result<(), TableError> {
        if !self.headers.is_empty() && row.len() != self.headers.len() {
            return Err(TableError::DimensionMismatch {
                row: self.rows.len(),
                found: row.len(),
                expected: self.headers.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Column headers; empty for headerless tables.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows appended so far.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// `true` when the table has no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Renders the grid into a string.
    #[must_use]
    pub fn render(&self) -> String {
        let columns = self
            .rows
            .iter()
            .map(Vec::len)
            .chain([self.headers.len()])
            .max()
            .unwrap_or(0);
        if columns == 0 {
            return String::new();
        }

        let mut widths = vec![0usize; columns];
        for (i, h) in self.headers.iter().enumerate() {
            widths[i] = widths[i].max(h.chars().count());
        }
        for row in &self.rows {
            for (i, value) in row.iter().enumerate() {
                widths[i] = widths[i].max(value.chars().count());
            }
        }

        let mut out = String::new();
        let rule = Self::rule(&widths);
        out.push_str(&rule);
        if !self.headers.is_empty() {
            Self::push_line(&mut out, &widths, &self.headers);
            out.push_str(&rule);
        }
        for row in &self.rows {
            Self::push_line(&mut out, &widths, row);
        }
        out.push_str(&rule);
        out
    }

    /// Writes the rendered grid to a sink.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), TableError> {
        tracing::trace!(
            rows = self.rows.len(),
            headers = self.headers.len(),
            "rendering table"
        );
        writer.write_all(self.render().as_bytes())?;
        Ok(())
    }

    fn rule(widths: &[usize]) -> String {
        let mut line = String::from("+");
        for w in widths {
            line.push_str(&"-".repeat(w + 2));
            line.push('+');
        }
        line.push('\n');
        line
    }

    // Rows shorter than the widest one (headerless tables only) pad out
    // with empty cells.
    fn push_line(out: &mut String, widths: &[usize], cells: &[String]) {
        out.push('|');
        for (i, w) in widths.iter().enumerate() {
            let value = cells.get(i).map_or("", String::as_str);
            let pad = w - value.chars().count();
            out.push(' ');
            out.push_str(value);
            out.push_str(&" ".repeat(pad + 1));
            out.push('|');
        }
        out.push('\n');
    }
}
