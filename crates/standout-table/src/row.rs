//! Cells, rows and the two shapes of row input.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::TableError;
use crate::width::{display_width_with, WidthMode};

/// An immutable cell value with its cached display width.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    value: String,
    width: usize,
}

impl Cell {
    pub fn new(value: impl Into<String>, mode: WidthMode) -> Self {
        let value = value.into();
        let width = display_width_with(&value, mode);
        Cell { value, width }
    }

    pub fn empty() -> Self {
        Cell {
            value: String::new(),
            width: 0,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn width(&self) -> usize {
        self.width
    }
}

/// A row of cells stored by column position.
///
/// The table keeps every row the same length as its header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    pub(crate) fn new(cells: Vec<Cell>) -> Self {
        Row { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn push(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    pub(crate) fn insert(&mut self, index: usize, cell: Cell) {
        self.cells.insert(index, cell);
    }

    pub(crate) fn remove(&mut self, index: usize) {
        self.cells.remove(index);
    }
}

/// Input for a single row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowInput {
    /// One value per column, in header order.
    Positional(Vec<String>),
    /// Values keyed by column name; omitted columns take their default.
    Named(HashMap<String, String>),
}

impl RowInput {
    /// Builds a positional row from anything string-like.
    pub fn values<S: Into<String>, I: IntoIterator<Item = S>>(values: I) -> Self {
        RowInput::Positional(values.into_iter().map(Into::into).collect())
    }

    /// Builds a named row from `(column, value)` pairs.
    pub fn named<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        RowInput::Named(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<Vec<String>> for RowInput {
    fn from(values: Vec<String>) -> Self {
        RowInput::Positional(values)
    }
}

impl From<HashMap<String, String>> for RowInput {
    fn from(map: HashMap<String, String>) -> Self {
        RowInput::Named(map)
    }
}

/// Accepts a JSON array of strings (positional) or a JSON object of strings
/// (named). Anything else is [`TableError::UnsupportedRow`].
impl TryFrom<Value> for RowInput {
    type Error = TableError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(items) => items
                .into_iter()
                .map(|item| expect_string(item, "array element"))
                .collect::<Result<Vec<_>, _>>()
                .map(RowInput::Positional),
            Value::Object(map) => map
                .into_iter()
                .map(|(key, item)| expect_string(item, "object value").map(|v| (key, v)))
                .collect::<Result<HashMap<_, _>, _>>()
                .map(RowInput::Named),
            other => Err(TableError::UnsupportedRow(json_kind(&other).to_string())),
        }
    }
}

fn expect_string(value: Value, position: &str) -> Result<String, TableError> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(TableError::UnsupportedRow(format!(
            "{} is {}, expected string",
            position,
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
