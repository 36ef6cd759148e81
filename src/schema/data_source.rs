// Data Source Seam
//
// This module defines the interface to a schema's physical backend.

use crate::communication::result::{DataValue, ExecuteResult, ProxyResult};

/// Physical backend bound to a schema.
///
/// Implementations wrap whatever actually runs the SQL: a pooled remote
/// server in production, recording stubs in tests. Both entry points are
/// synchronous from the proxy's point of view.
pub trait DataSource: Send + Sync {
    /// Run SQL text through the simple-query path.
    fn execute(&self, sql: &str) -> ProxyResult<ExecuteResult>;

    /// Run SQL through the prepare/bind/execute path with positional
    /// parameters.
    fn execute_prepared(
        &self,
        sql: &str,
        parameters: &[DataValue],
    ) -> ProxyResult<ExecuteResult>;

    /// Name the implementation reports in logs.
    fn name(&self) -> &str;
}
