// Schema Runtime Context
//
// This module defines the resolved, in-memory state of a named logical
// schema: its table routing metadata and the data source bound to it.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::data_source::DataSource;

/// Routing entry for one table in a schema.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRouting {
    name: String,
    data_source: String,
}

impl TableRouting {
    pub fn new(name: impl Into<String>, data_source: impl Into<String>) -> Self {
        TableRouting {
            name: name.into(),
            data_source: data_source.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the physical data source this table lives on.
    pub fn data_source(&self) -> &str {
        &self.data_source
    }
}

/// Resolved runtime state of a named logical schema.
///
/// Assembled once when the schema is registered and shared immutably from
/// then on; every request borrows it through the registry for the lifetime
/// of one query context.
pub struct SchemaContext {
    name: String,
    tables: HashMap<String, TableRouting>,
    data_source: Arc<dyn DataSource>,
}

impl SchemaContext {
    /// Create a new, empty schema context bound to a data source.
    pub fn new(name: impl Into<String>, data_source: Arc<dyn DataSource>) -> Self {
        SchemaContext {
            name: name.into(),
            tables: HashMap::new(),
            data_source,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data_source(&self) -> &Arc<dyn DataSource> {
        &self.data_source
    }

    /// Add a table routing entry. Only valid before registration; once a
    /// context is registered the schema is immutable.
    pub fn add_table(&mut self, routing: TableRouting) -> Result<(), String> {
        let table_name = routing.name().to_string();

        if self.tables.contains_key(&table_name) {
            return Err(format!(
                "Table {} already exists in schema {}",
                table_name, self.name
            ));
        }

        self.tables.insert(table_name, routing);
        Ok(())
    }

    /// Check if a table is routed through this schema
    pub fn has_table(&self, table_name: &str) -> bool {
        self.tables.contains_key(table_name)
    }

    /// Get a table routing entry by name
    pub fn table(&self, table_name: &str) -> Option<&TableRouting> {
        self.tables.get(table_name)
    }

    /// Get the names of all tables routed through this schema
    pub fn table_names(&self) -> Vec<String> {
        self.tables.keys().cloned().collect()
    }
}

impl fmt::Debug for SchemaContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaContext")
            .field("name", &self.name)
            .field("tables", &self.tables.keys().collect::<Vec<_>>())
            .field("data_source", &self.data_source.name())
            .finish()
    }
}
