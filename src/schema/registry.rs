// Schema Registry
//
// This module maintains the process-wide map from schema name to resolved
// runtime context.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::communication::result::{ProxyError, ProxyResult};

use super::context::SchemaContext;

// Global registry instance using a thread-safe lazy initialization
static REGISTRY_INSTANCE: Lazy<Arc<SchemaRegistry>> =
    Lazy::new(|| Arc::new(SchemaRegistry::new()));

/// Process-wide map from schema name to runtime context.
///
/// Lookups take a short read lock and clone the `Arc`, so a resolution
/// never observes a partially updated map and holds no lock once it
/// returns. Registration and drop swap whole entries.
pub struct SchemaRegistry {
    schemas: RwLock<HashMap<String, Arc<SchemaContext>>>,
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaRegistry {
    pub fn instance() -> Arc<SchemaRegistry> {
        REGISTRY_INSTANCE.clone()
    }

    pub fn new() -> Self {
        SchemaRegistry {
            schemas: RwLock::new(HashMap::new()),
        }
    }

    /// Register a schema context, replacing any previous registration
    /// under the same name. Returns the shared handle.
    pub fn register(&self, context: SchemaContext) -> Arc<SchemaContext> {
        let context = Arc::new(context);
        let mut schemas = self.schemas.write();
        log::info!("registering schema '{}'", context.name());
        schemas.insert(context.name().to_string(), context.clone());
        context
    }

    /// Resolve a schema name to its runtime context.
    ///
    /// Fails with `ProxyError::SchemaNotFound` when the name has no
    /// registered context, e.g. the schema was dropped or never selected.
    pub fn resolve(&self, name: &str) -> ProxyResult<Arc<SchemaContext>> {
        self.schemas
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| ProxyError::SchemaNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.schemas.read().contains_key(name)
    }

    /// Remove a schema from the registry. In-flight contexts that already
    /// resolved it keep their handle until the request completes.
    pub fn drop_schema(&self, name: &str) -> ProxyResult<()> {
        let mut schemas = self.schemas.write();
        match schemas.remove(name) {
            Some(_) => {
                log::info!("dropped schema '{}'", name);
                Ok(())
            }
            None => Err(ProxyError::SchemaNotFound(name.to_string())),
        }
    }

    /// Get the names of all registered schemas
    pub fn schema_names(&self) -> Vec<String> {
        self.schemas.read().keys().cloned().collect()
    }
}
