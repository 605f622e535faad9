//! Catalog providing access to table and index metadata.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use hashbrown::HashMap;
use oryx_core::schema::Schema;
use oryx_core::{Error, Result};

/// Identifier for a table in the catalog.
pub type TableId = u32;

/// Identifier for an index in the catalog.
pub type IndexId = u32;

/// Metadata about an index.
#[derive(Clone, Debug)]
pub struct IndexMetadata {
    /// Index identifier.
    id: IndexId,
    /// Index name, unique within its table.
    name: String,
    /// Owning table identifier.
    table: TableId,
    /// Ordinal positions of the key columns, in index-key order.
    key_attrs: Vec<usize>,
}

impl IndexMetadata {
    /// Returns the index identifier.
    #[inline]
    pub fn id(&self) -> IndexId {
        self.id
    }

    /// Returns the index name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the owning table identifier.
    #[inline]
    pub fn table(&self) -> TableId {
        self.table
    }

    /// Returns the key-attribute column ordinals, in index-key order.
    #[inline]
    pub fn key_attrs(&self) -> &[usize] {
        &self.key_attrs
    }
}

/// Metadata about a table.
#[derive(Clone, Debug)]
pub struct TableMetadata {
    /// Table identifier.
    id: TableId,
    /// Table name.
    name: String,
    /// Table schema.
    schema: Schema,
    /// Indexes defined on this table, in creation order.
    indexes: Vec<IndexMetadata>,
}

impl TableMetadata {
    /// Returns the table identifier.
    #[inline]
    pub fn id(&self) -> TableId {
        self.id
    }

    /// Returns the table name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the table schema.
    #[inline]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Returns the indexes defined on this table, in creation order.
    ///
    /// The order is significant: passes that pick the first matching index
    /// rely on it.
    #[inline]
    pub fn indexes(&self) -> &[IndexMetadata] {
        &self.indexes
    }
}

/// Catalog storing table and index metadata.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    tables: HashMap<TableId, TableMetadata>,
    table_names: HashMap<String, TableId>,
    next_table_id: TableId,
    next_index_id: IndexId,
}

impl Catalog {
    /// Creates a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new table and returns its identifier.
    pub fn create_table(&mut self, name: impl Into<String>, schema: Schema) -> Result<TableId> {
        let name = name.into();
        if self.table_names.contains_key(&name) {
            return Err(Error::duplicate_table(name));
        }

        let id = self.next_table_id;
        self.next_table_id += 1;

        self.table_names.insert(name.clone(), id);
        self.tables.insert(
            id,
            TableMetadata {
                id,
                name,
                schema,
                indexes: Vec::new(),
            },
        );
        Ok(id)
    }

    /// Registers a new index on a table and returns its identifier.
    ///
    /// `key_attrs` are the ordinal positions of the key columns in the
    /// table schema, in index-key order.
    pub fn create_index(
        &mut self,
        table: &str,
        name: impl Into<String>,
        key_attrs: Vec<usize>,
    ) -> Result<IndexId> {
        let name = name.into();
        let table_id = *self
            .table_names
            .get(table)
            .ok_or_else(|| Error::table_not_found(table))?;
        let meta = self
            .tables
            .get_mut(&table_id)
            .ok_or_else(|| Error::table_not_found(table))?;

        if meta.indexes.iter().any(|idx| idx.name == name) {
            return Err(Error::duplicate_index(table, name));
        }
        if key_attrs.is_empty() {
            return Err(Error::invalid_schema("index must have at least one key column"));
        }
        for &attr in &key_attrs {
            if attr >= meta.schema.len() {
                return Err(Error::invalid_schema(format!(
                    "key column {} out of range for table {}",
                    attr, table
                )));
            }
        }

        let id = self.next_index_id;
        self.next_index_id += 1;

        meta.indexes.push(IndexMetadata {
            id,
            name,
            table: table_id,
            key_attrs,
        });
        Ok(id)
    }

    /// Gets table metadata by identifier.
    pub fn table(&self, id: TableId) -> Option<&TableMetadata> {
        self.tables.get(&id)
    }

    /// Gets table metadata by name.
    pub fn table_by_name(&self, name: &str) -> Option<&TableMetadata> {
        self.table_names.get(name).and_then(|id| self.tables.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use oryx_core::schema::Column;
    use oryx_core::DataType;

    fn users_schema() -> Schema {
        Schema::new(vec![
            Column::new("id", DataType::Int64),
            Column::new("name", DataType::String),
            Column::new("age", DataType::Int32),
        ])
    }

    #[test]
    fn test_create_table_and_lookup() {
        let mut catalog = Catalog::new();
        let id = catalog.create_table("users", users_schema()).unwrap();

        let meta = catalog.table(id).unwrap();
        assert_eq!(meta.name(), "users");
        assert_eq!(meta.schema().len(), 3);
        assert!(meta.indexes().is_empty());

        assert_eq!(catalog.table_by_name("users").map(|t| t.id()), Some(id));
        assert!(catalog.table_by_name("orders").is_none());
    }

    #[test]
    fn test_duplicate_table() {
        let mut catalog = Catalog::new();
        catalog.create_table("users", users_schema()).unwrap();

        let err = catalog.create_table("users", users_schema()).unwrap_err();
        assert!(matches!(err, Error::DuplicateTable { .. }));
    }

    #[test]
    fn test_create_index_validation() {
        let mut catalog = Catalog::new();
        catalog.create_table("users", users_schema()).unwrap();

        catalog.create_index("users", "idx_id", vec![0]).unwrap();

        let err = catalog
            .create_index("users", "idx_id", vec![1])
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateIndex { .. }));

        let err = catalog
            .create_index("users", "idx_bad", vec![7])
            .unwrap_err();
        assert!(matches!(err, Error::InvalidSchema { .. }));

        let err = catalog
            .create_index("orders", "idx_id", vec![0])
            .unwrap_err();
        assert!(matches!(err, Error::TableNotFound { .. }));
    }

    #[test]
    fn test_index_enumeration_order_is_creation_order() {
        let mut catalog = Catalog::new();
        let id = catalog.create_table("users", users_schema()).unwrap();

        catalog.create_index("users", "idx_name", vec![1]).unwrap();
        catalog.create_index("users", "idx_id", vec![0]).unwrap();
        catalog
            .create_index("users", "idx_name_age", vec![1, 2])
            .unwrap();

        let names: Vec<&str> = catalog
            .table(id)
            .unwrap()
            .indexes()
            .iter()
            .map(|idx| idx.name())
            .collect();
        assert_eq!(names, vec!["idx_name", "idx_id", "idx_name_age"]);
    }
}
