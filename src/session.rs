// Client Session Handle
//
// This module defines the per-client session reference query contexts are
// built against.

/// Client session reference.
///
/// Carries the session state construction needs: a stable id for logs and
/// the schema the session currently operates in. Authentication and
/// connection pooling live outside this crate. A session always has a
/// current schema; switching schemas replaces the handle.
#[derive(Debug, Clone)]
pub struct BackendConnection {
    id: u64,
    schema_name: String,
}

impl BackendConnection {
    pub fn new(id: u64, schema_name: impl Into<String>) -> Self {
        BackendConnection {
            id,
            schema_name: schema_name.into(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Name of the schema this session currently operates in.
    pub fn schema_name(&self) -> &str {
        &self.schema_name
    }
}
