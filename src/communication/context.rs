// Query Context Construction
//
// This module assembles the immutable per-request context the execution
// machinery operates on.

use std::fmt;
use std::sync::Arc;

use crate::schema::{SchemaContext, SchemaRegistry};
use crate::session::BackendConnection;
use crate::statement::ParsedStatement;

use super::result::{DataValue, ProxyResult};

/// Immutable bundle of everything known about one logical query.
///
/// Created once per request and handed to the execution engine; never
/// mutated afterwards. The parameter sequence is owned by the context,
/// independent of whatever buffer the caller parsed it out of.
#[derive(Clone)]
pub struct QueryContext {
    schema: Arc<SchemaContext>,
    sql: String,
    parameters: Vec<DataValue>,
    statement: ParsedStatement,
}

impl QueryContext {
    pub fn schema(&self) -> &Arc<SchemaContext> {
        &self.schema
    }

    /// The literal SQL text as received from the client.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Positional bind parameters, empty for simple-query requests.
    pub fn parameters(&self) -> &[DataValue] {
        &self.parameters
    }

    pub fn statement(&self) -> &ParsedStatement {
        &self.statement
    }
}

impl fmt::Debug for QueryContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryContext")
            .field("schema", &self.schema.name())
            .field("sql", &self.sql)
            .field("parameters", &self.parameters.len())
            .field("statement", &self.statement.kind())
            .finish()
    }
}

/// Builds query contexts by resolving a session's current schema against
/// the registry.
#[derive(Clone)]
pub struct ContextBuilder {
    registry: Arc<SchemaRegistry>,
}

impl ContextBuilder {
    pub fn new(registry: Arc<SchemaRegistry>) -> Self {
        ContextBuilder { registry }
    }

    /// Resolve `connection`'s current schema and bundle it with the
    /// statement, SQL text and parameters.
    ///
    /// Fails with `ProxyError::SchemaNotFound` when the schema was dropped
    /// or never registered; nothing is constructed in that case. Pure
    /// lookup plus value construction, no other side effects.
    pub fn build(
        &self,
        statement: ParsedStatement,
        sql: &str,
        parameters: Vec<DataValue>,
        connection: &BackendConnection,
    ) -> ProxyResult<QueryContext> {
        let schema = self.registry.resolve(connection.schema_name())?;
        Ok(QueryContext {
            schema,
            sql: sql.to_string(),
            parameters,
            statement,
        })
    }
}
