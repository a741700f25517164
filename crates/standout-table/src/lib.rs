//! # Standout Table - Plain-Text Grid Tables
//!
//! `standout-table` renders rows of string values under named columns as an
//! aligned, optionally bordered text grid for CLI and log output. Column widths
//! account for CJK ideographs, which take two terminal columns.
//!
//! ## Quick Start
//!
//! ```rust
//! use standout_table::{create, RowInput, DEFAULT};
//!
//! let mut table = create(["Name", "Age"]).unwrap();
//! table.set_default("Age", "?").unwrap();
//! table.add_row(RowInput::values(["Bob", "30"])).unwrap();
//! table.add_row(RowInput::values(["Alexandra", DEFAULT])).unwrap();
//!
//! assert_eq!(
//!     table.to_lines(),
//!     vec![
//!         "+-----------+-----+",
//!         "|   Name    | Age |",
//!         "+-----------+-----+",
//!         "|    Bob    | 30  |",
//!         "| Alexandra |  ?  |",
//!         "+-----------+-----+",
//!     ]
//! );
//! ```
//!
//! ## Core Concepts
//!
//! - [`Table`]: header, rows and [`TableOptions`]; all mutation goes through it
//! - [`Header`] / [`Column`]: ordered, uniquely named columns with an
//!   [`Align`] mode and a default value
//! - [`RowInput`]: a row given positionally or by column name
//! - [`DEFAULT`]: the reserved cell value that stands for the column default
//! - [`display_width`]: the width rule used to size columns
//!
//! ## Row Input
//!
//! Rows can be positional (one value per column, in header order) or named
//! (a map from column name to value). Named rows may omit columns; the omitted
//! cells take the column default. [`Table::add_rows`] adds what it can and
//! hands back the rows it could not add:
//!
//! ```rust
//! use standout_table::{create, RowInput};
//!
//! let mut table = create(["Name", "Age"]).unwrap();
//! let failed = table.add_rows(vec![
//!     RowInput::named([("Name", "Ann")]),
//!     RowInput::values(["too", "many", "values"]),
//! ]);
//! assert_eq!(table.len(), 1);
//! assert_eq!(failed.len(), 1);
//! ```
//!
//! ## Output
//!
//! [`Table::to_lines`] returns the rendered grid, [`Table::print`] writes it to
//! stdout and [`Table::write_to`] writes it to any `io::Write` sink. Rendering
//! never mutates the table.

mod column;
mod error;
mod header;
mod options;
pub mod render;
mod row;
mod table;
mod width;

pub use column::{Align, Column};
pub use error::{Result, TableError};
pub use header::Header;
pub use options::{BorderGlyphs, TableOptions};
pub use render::{pad_aligned, pad_center, pad_left, pad_right};
pub use row::{Cell, Row, RowInput};
pub use table::{Table, DEFAULT};
pub use width::{display_width, display_width_with, is_han, is_wide, WidthMode};

/// Creates a table with default options from a list of column names.
///
/// Fails with [`TableError::EmptyColumns`] when `columns` is empty and with
/// [`TableError::DuplicateColumn`] when a name repeats.
pub fn create<S, I>(columns: I) -> Result<Table>
where
    S: Into<String>,
    I: IntoIterator<Item = S>,
{
    Table::new(columns)
}
