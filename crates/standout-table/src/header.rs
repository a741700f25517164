//! The ordered column registry of a table.

use std::collections::HashMap;

use crate::column::{Align, Column};
use crate::error::{Result, TableError};
use crate::width::WidthMode;

/// Ordered set of uniquely named columns.
///
/// The header owns the name to position lookup used by rows, so row cells
/// are stored positionally and looked up by name through here.
#[derive(Clone, Debug, Default)]
pub struct Header {
    columns: Vec<Column>,
    index: HashMap<String, usize>,
    mode: WidthMode,
}

impl Header {
    /// Creates an empty header that measures names with `mode`.
    pub fn new(mode: WidthMode) -> Self {
        Header {
            columns: Vec::new(),
            index: HashMap::new(),
            mode,
        }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn width_mode(&self) -> WidthMode {
        self.mode
    }

    pub fn exists(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Position of the named column.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn get(&self, name: &str) -> Option<&Column> {
        self.position(name).map(|i| &self.columns[i])
    }

    fn column_mut(&mut self, name: &str) -> Result<&mut Column> {
        match self.index.get(name) {
            Some(&i) => Ok(&mut self.columns[i]),
            None => Err(TableError::ColumnNotFound(name.to_string())),
        }
    }

    /// Column at `index`, in header order.
    pub fn at(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Column> {
        self.columns.iter()
    }

    /// Column names in header order.
    pub fn names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    /// Appends a column.
    pub fn add(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        self.ensure_absent(&name)?;
        self.index.insert(name.clone(), self.columns.len());
        self.columns.push(Column::new(name, self.mode));
        Ok(())
    }

    /// Inserts a column at `index`, shifting later columns right.
    ///
    /// `index == len()` appends; anything larger is an error.
    pub fn insert(&mut self, name: impl Into<String>, index: usize) -> Result<()> {
        let name = name.into();
        self.ensure_absent(&name)?;
        self.ensure_insertable(index)?;
        self.columns.insert(index, Column::new(name, self.mode));
        self.reindex();
        Ok(())
    }

    /// Removes the named column and returns its former position.
    pub fn remove(&mut self, name: &str) -> Result<usize> {
        let position = self
            .position(name)
            .ok_or_else(|| TableError::ColumnNotFound(name.to_string()))?;
        self.columns.remove(position);
        self.reindex();
        Ok(position)
    }

    pub fn clear(&mut self) {
        self.columns.clear();
        self.index.clear();
    }

    pub fn set_align(&mut self, name: &str, align: Align) -> Result<()> {
        self.column_mut(name)?.set_align(align);
        Ok(())
    }

    /// Sets the alignment of every column.
    pub fn set_all_align(&mut self, align: Align) {
        for column in &mut self.columns {
            column.set_align(align);
        }
    }

    pub fn set_default(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        self.column_mut(name)?.set_default(value);
        Ok(())
    }

    pub(crate) fn ensure_absent(&self, name: &str) -> Result<()> {
        if self.exists(name) {
            return Err(TableError::DuplicateColumn(name.to_string()));
        }
        Ok(())
    }

    pub(crate) fn ensure_insertable(&self, index: usize) -> Result<()> {
        if index > self.columns.len() {
            return Err(TableError::IndexOutOfRange {
                index,
                len: self.columns.len(),
            });
        }
        Ok(())
    }

    fn reindex(&mut self) {
        self.index = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, c)| (c.name().to_string(), i))
            .collect();
    }
}

impl PartialEq for Header {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.columns.iter().zip(&other.columns).all(|(a, b)| a == b)
    }
}

impl Eq for Header {}

impl<'a> IntoIterator for &'a Header {
    type Item = &'a Column;
    type IntoIter = std::slice::Iter<'a, Column>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(names: &[&str]) -> Header {
        let mut h = Header::new(WidthMode::Han);
        for name in names {
            h.add(*name).unwrap();
        }
        h
    }

    #[test]
    fn add_appends_in_order() {
        let h = header(&["a", "b", "c"]);
        assert_eq!(h.names(), vec!["a", "b", "c"]);
        assert_eq!(h.len(), 3);
        assert_eq!(h.position("c"), Some(2));
    }

    #[test]
    fn add_rejects_duplicates() {
        let mut h = header(&["a"]);
        assert_eq!(
            h.add("a"),
            Err(TableError::DuplicateColumn("a".to_string()))
        );
        assert_eq!(h.len(), 1);
    }

    #[test]
    fn insert_shifts_right() {
        let mut h = header(&["a", "c"]);
        h.insert("b", 1).unwrap();
        assert_eq!(h.names(), vec!["a", "b", "c"]);
        assert_eq!(h.position("c"), Some(2));

        h.insert("z", 0).unwrap();
        assert_eq!(h.names(), vec!["z", "a", "b", "c"]);
    }

    #[test]
    fn insert_at_len_appends() {
        let mut h = header(&["a"]);
        h.insert("b", 1).unwrap();
        assert_eq!(h.names(), vec!["a", "b"]);
    }

    #[test]
    fn insert_out_of_range_fails() {
        let mut h = header(&["a"]);
        assert_eq!(
            h.insert("b", 5),
            Err(TableError::IndexOutOfRange { index: 5, len: 1 })
        );
        assert_eq!(h.names(), vec!["a"]);
    }

    #[test]
    fn insert_checks_duplicates_first() {
        let mut h = header(&["a"]);
        assert_eq!(
            h.insert("a", 9),
            Err(TableError::DuplicateColumn("a".to_string()))
        );
    }

    #[test]
    fn remove_keeps_order() {
        let mut h = header(&["a", "b", "c"]);
        assert_eq!(h.remove("b"), Ok(1));
        assert_eq!(h.names(), vec!["a", "c"]);
        assert_eq!(h.position("c"), Some(1));
        assert!(!h.exists("b"));
    }

    #[test]
    fn remove_missing_fails() {
        let mut h = header(&["a"]);
        assert_eq!(
            h.remove("x"),
            Err(TableError::ColumnNotFound("x".to_string()))
        );
    }

    #[test]
    fn get_and_exists() {
        let h = header(&["Name"]);
        assert!(h.exists("Name"));
        assert!(!h.exists("name"));
        assert_eq!(h.get("Name").map(Column::width), Some(4));
        assert!(h.get("Age").is_none());
    }

    #[test]
    fn clear_empties() {
        let mut h = header(&["a", "b"]);
        h.clear();
        assert!(h.is_empty());
        assert!(!h.exists("a"));
        h.add("a").unwrap();
        assert_eq!(h.position("a"), Some(0));
    }

    #[test]
    fn set_align_and_default() {
        let mut h = header(&["a", "b"]);
        h.set_align("a", Align::Right).unwrap();
        h.set_default("b", "-").unwrap();
        assert_eq!(h.get("a").map(Column::align), Some(Align::Right));
        assert_eq!(h.get("b").map(Column::default_value), Some("-"));
        assert!(h.set_align("x", Align::Left).is_err());

        h.set_all_align(Align::Left);
        assert!(h.iter().all(|c| c.align() == Align::Left));
    }

    #[test]
    fn equality_is_positional() {
        assert_eq!(header(&["a", "b"]), header(&["a", "b"]));
        assert_ne!(header(&["a", "b"]), header(&["b", "a"]));
        assert_ne!(header(&["a"]), header(&["a", "b"]));
        assert_eq!(Header::new(WidthMode::Han), Header::new(WidthMode::Han));
    }

    #[test]
    fn equality_sees_defaults_and_alignment() {
        let a = header(&["a", "b"]);
        let mut b = header(&["a", "b"]);
        b.set_default("b", "x").unwrap();
        assert_ne!(a, b);

        let mut c = header(&["a", "b"]);
        c.set_align("a", Align::Left).unwrap();
        assert_ne!(a, c);
    }
}
