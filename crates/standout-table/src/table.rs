//! The table facade: header, rows and render options in one place.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use std::io::{self, Write};

use console::Term;
use tracing::{debug, trace, warn};

use crate::column::{Align, Column};
use crate::error::{Result, TableError};
use crate::header::Header;
use crate::options::TableOptions;
use crate::render;
use crate::row::{Cell, Row, RowInput};

/// Reserved cell value meaning "use this column's default".
pub const DEFAULT: &str = "__DEFAULT__";

/// A table of string cells under a header of named columns.
///
/// # Example
///
/// ```rust
/// use standout_table::{Align, RowInput, Table};
///
/// let mut table = Table::new(["Name", "Age"]).unwrap();
/// table.add_row(RowInput::named([("Name", "Bob"), ("Age", "30")])).unwrap();
/// table.set_column_align("Name", Align::Left).unwrap();
///
/// assert_eq!(table.to_lines()[3], "|Bob   | 30  |");
/// ```
#[derive(Clone, Debug)]
pub struct Table {
    header: Header,
    rows: Vec<Row>,
    options: TableOptions,
}

impl Table {
    /// Creates a table with default options.
    ///
    /// Fails on an empty column list or a repeated name.
    pub fn new<S, I>(columns: I) -> Result<Self>
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        Self::with_options(columns, TableOptions::default())
    }

    pub fn with_options<S, I>(columns: I, options: TableOptions) -> Result<Self>
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        let mut header = Header::new(options.width_mode);
        for name in columns {
            header.add(name)?;
        }
        if header.is_empty() {
            return Err(TableError::EmptyColumns);
        }
        if options.sequence {
            header.ensure_absent(&options.sequence_title)?;
        }
        debug!(columns = header.len(), "created table");

        Ok(Table {
            header,
            rows: Vec::new(),
            options,
        })
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Removes every column and row.
    pub fn clear(&mut self) {
        self.header.clear();
        self.rows.clear();
        debug!("cleared table");
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    pub fn columns(&self) -> &Header {
        &self.header
    }

    pub(crate) fn row_records(&self) -> &[Row] {
        &self.rows
    }

    pub fn enable_border(&mut self) {
        self.options.border = true;
    }

    pub fn disable_border(&mut self) {
        self.options.border = false;
    }

    /// Turns on the row number column.
    ///
    /// Fails with [`TableError::DuplicateColumn`] when a column already uses
    /// the sequence title, since the rendered header would show it twice.
    pub fn enable_sequence(&mut self) -> Result<()> {
        self.header.ensure_absent(&self.options.sequence_title)?;
        self.options.sequence = true;
        Ok(())
    }

    pub fn disable_sequence(&mut self) {
        self.options.sequence = false;
    }

    // ------------------------------------------------------------------
    // Columns
    // ------------------------------------------------------------------

    pub fn has_column(&self, name: &str) -> bool {
        self.header.exists(name)
    }

    /// Column names in display order.
    pub fn header(&self) -> Vec<&str> {
        self.header.names()
    }

    /// Appends columns, filling existing rows with each column's default.
    ///
    /// Either every name is added or none is.
    pub fn add_columns<S, I>(&mut self, names: I) -> Result<()>
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let mut seen = HashSet::new();
        for name in &names {
            self.header.ensure_absent(name)?;
            self.ensure_not_sequence_title(name)?;
            if !seen.insert(name.as_str()) {
                return Err(TableError::DuplicateColumn(name.clone()));
            }
        }

        let mode = self.header.width_mode();
        for name in names {
            debug!(column = %name, "adding column");
            self.header.add(name)?;
            let fill = self
                .header
                .at(self.header.len() - 1)
                .map(|c| Cell::new(c.default_value(), mode))
                .unwrap_or_else(Cell::empty);
            for row in &mut self.rows {
                row.push(fill.clone());
            }
        }
        Ok(())
    }

    /// Inserts a column at `index` with one value per existing row.
    ///
    /// No default back-fill happens here: `values` must match the row count.
    pub fn insert_column<S, I>(&mut self, name: &str, values: I, index: usize) -> Result<()>
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        self.header.ensure_absent(name)?;
        self.ensure_not_sequence_title(name)?;
        self.header.ensure_insertable(index)?;
        if values.len() != self.rows.len() {
            return Err(TableError::ValueCountMismatch {
                expected: self.rows.len(),
                actual: values.len(),
            });
        }

        self.header.insert(name, index)?;
        debug!(column = name, index, "inserted column");

        let mode = self.header.width_mode();
        for (row, value) in self.rows.iter_mut().zip(values) {
            // a fresh column's default is empty
            let value = if value == DEFAULT { String::new() } else { value };
            row.insert(index, Cell::new(value, mode));
        }
        Ok(())
    }

    fn ensure_not_sequence_title(&self, name: &str) -> Result<()> {
        if self.options.sequence && name == self.options.sequence_title {
            return Err(TableError::DuplicateColumn(name.to_string()));
        }
        Ok(())
    }

    /// Removes a column and its cell from every row.
    pub fn remove_column(&mut self, name: &str) -> Result<()> {
        let position = self.header.remove(name)?;
        for row in &mut self.rows {
            row.remove(position);
        }
        debug!(column = name, "removed column");
        Ok(())
    }

    /// Sets the alignment of every column.
    pub fn set_align(&mut self, align: Align) {
        self.header.set_all_align(align);
    }

    pub fn set_column_align(&mut self, name: &str, align: Align) -> Result<()> {
        self.header.set_align(name, align)
    }

    /// Sets alignment from a legacy integer code; unknown codes center.
    pub fn set_column_align_code(&mut self, name: &str, code: i64) -> Result<()> {
        self.header.set_align(name, Align::from_code(code))
    }

    pub fn set_default(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        self.header.set_default(name, value)
    }

    /// Resets a column's default to the empty string.
    pub fn drop_default(&mut self, name: &str) -> Result<()> {
        self.header.set_default(name, "")
    }

    pub fn get_default(&self, name: &str) -> Option<&str> {
        self.header.get(name).map(Column::default_value)
    }

    /// Every column's default, keyed by column name.
    pub fn get_defaults(&self) -> BTreeMap<String, String> {
        self.header
            .iter()
            .map(|c| (c.name().to_string(), c.default_value().to_string()))
            .collect()
    }

    // ------------------------------------------------------------------
    // Rows
    // ------------------------------------------------------------------

    pub fn add_row(&mut self, input: RowInput) -> Result<()> {
        self.push_input(&input)
    }

    /// Adds a row given one value per column, in header order.
    pub fn add_row_from_values<S, I>(&mut self, values: I) -> Result<()>
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        self.push_positional(&values)
    }

    /// Adds a row from a column name to value map.
    pub fn add_row_from_map(&mut self, values: &HashMap<String, String>) -> Result<()> {
        self.push_named(values)
    }

    /// Adds each row independently and returns the ones that failed, in
    /// input order.
    pub fn add_rows<I>(&mut self, rows: I) -> Vec<RowInput>
    where
        I: IntoIterator<Item = RowInput>,
    {
        let mut failed = Vec::new();
        for input in rows {
            if let Err(err) = self.push_input(&input) {
                warn!(error = %err, "skipping row");
                failed.push(input);
            }
        }
        failed
    }

    /// All rows as column name to value maps.
    pub fn rows(&self) -> Vec<HashMap<String, String>> {
        self.rows
            .iter()
            .map(|row| {
                self.header
                    .iter()
                    .zip(row.cells())
                    .map(|(column, cell)| (column.name().to_string(), cell.as_str().to_string()))
                    .collect()
            })
            .collect()
    }

    /// Value at `row` in the named column.
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let position = self.header.position(column)?;
        self.rows.get(row)?.get(position).map(Cell::as_str)
    }

    fn push_input(&mut self, input: &RowInput) -> Result<()> {
        match input {
            RowInput::Positional(values) => self.push_positional(values),
            RowInput::Named(values) => self.push_named(values),
        }
    }

    fn push_positional(&mut self, values: &[String]) -> Result<()> {
        if values.len() != self.header.len() {
            return Err(TableError::RowLengthMismatch {
                expected: self.header.len(),
                actual: values.len(),
            });
        }

        let mode = self.header.width_mode();
        let cells = self
            .header
            .iter()
            .zip(values)
            .map(|(column, value)| Cell::new(resolve(column, Some(value)), mode))
            .collect();
        self.rows.push(Row::new(cells));
        trace!(rows = self.rows.len(), "added positional row");
        Ok(())
    }

    fn push_named(&mut self, values: &HashMap<String, String>) -> Result<()> {
        if let Some(unknown) = values
            .keys()
            .filter(|key| !self.header.exists(key))
            .min()
        {
            return Err(TableError::UnknownColumn(unknown.clone()));
        }

        let mode = self.header.width_mode();
        let cells = self
            .header
            .iter()
            .map(|column| Cell::new(resolve(column, values.get(column.name())), mode))
            .collect();
        self.rows.push(Row::new(cells));
        trace!(rows = self.rows.len(), "added named row");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Output
    // ------------------------------------------------------------------

    /// Renders the table into lines. See [`render::to_lines`].
    pub fn to_lines(&self) -> Vec<String> {
        render::to_lines(self)
    }

    /// Writes the rendered table to stdout, one line per grid row.
    pub fn print(&self) -> io::Result<()> {
        let term = Term::stdout();
        for line in self.to_lines() {
            term.write_line(&line)?;
        }
        Ok(())
    }

    /// Writes the rendered table to `out`, each line newline-terminated.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in self.to_lines() {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_lines().join("\n"))
    }
}

/// The stored value for a cell: the column default when the value is
/// missing or the [`DEFAULT`] sentinel.
fn resolve<'a>(column: &'a Column, value: Option<&'a String>) -> &'a str {
    match value {
        Some(v) if v != DEFAULT => v.as_str(),
        _ => column.default_value(),
    }
}
