//! Schema module for Oryx database.
//!
//! This module contains schema-related definitions: typed columns and the
//! ordered column sequences that describe table layouts and plan outputs.

mod column;

pub use column::Column;

use alloc::vec::Vec;

/// An ordered sequence of typed columns.
///
/// Describes both table layouts and the output of query plan nodes. Column
/// indexes are assigned at construction time from the declaration order.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    columns: Vec<Column>,
}

impl Schema {
    /// Creates a new schema from the given columns.
    pub fn new(columns: Vec<Column>) -> Self {
        let columns = columns
            .into_iter()
            .enumerate()
            .map(|(i, c)| c.with_index(i))
            .collect();
        Self { columns }
    }

    /// Creates an empty schema.
    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// Returns the columns.
    #[inline]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Gets a column by its index.
    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Gets the index of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name() == name)
    }

    /// Returns the number of columns.
    #[inline]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns whether the schema has no columns.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DataType;
    use alloc::vec;

    #[test]
    fn test_schema_assigns_indexes() {
        let schema = Schema::new(vec![
            Column::new("id", DataType::Int64),
            Column::new("name", DataType::String),
            Column::new("age", DataType::Int32),
        ]);

        assert_eq!(schema.len(), 3);
        assert_eq!(schema.column(1).map(|c| c.index()), Some(1));
        assert_eq!(schema.column_index("age"), Some(2));
        assert_eq!(schema.column_index("missing"), None);
    }

    #[test]
    fn test_schema_equality() {
        let a = Schema::new(vec![Column::new("id", DataType::Int64)]);
        let b = Schema::new(vec![Column::new("id", DataType::Int64)]);
        let c = Schema::new(vec![Column::new("id", DataType::Int32)]);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_empty_schema() {
        let schema = Schema::empty();
        assert!(schema.is_empty());
        assert_eq!(schema.column(0), None);
    }
}
