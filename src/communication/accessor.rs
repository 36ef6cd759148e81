// Statement Accessor Strategies
//
// This module defines the two execution strategies a request can be wired
// with: simple-query text execution, and prepared execution with
// positional parameters.

use log::debug;

use crate::session::BackendConnection;

use super::context::QueryContext;
use super::result::{ExecuteResult, ProxyResult};

/// Protocol mode a request was issued under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolMode {
    /// SQL arrives as a literal string with no separate bind phase
    Text,
    /// SQL is prepared and parameters are bound positionally
    Binary,
}

/// Execution strategy selected once when an engine is constructed.
///
/// Implementations decide which data source entry point runs the
/// statement; everything downstream of the factory stays protocol
/// agnostic.
pub trait StatementAccessor: Send + Sync {
    /// Run the context's statement over its schema's data source.
    fn execute(
        &self,
        connection: &BackendConnection,
        context: &QueryContext,
    ) -> ProxyResult<ExecuteResult>;

    /// Protocol mode this strategy serves.
    fn mode(&self) -> ProtocolMode;
}

/// Simple-query strategy: SQL text goes to the backend as-is.
#[derive(Debug, Default)]
pub struct PlainStatementAccessor;

impl StatementAccessor for PlainStatementAccessor {
    fn execute(
        &self,
        connection: &BackendConnection,
        context: &QueryContext,
    ) -> ProxyResult<ExecuteResult> {
        debug!(
            "session {}: simple query on schema '{}' via '{}'",
            connection.id(),
            context.schema().name(),
            context.schema().data_source().name()
        );
        context.schema().data_source().execute(context.sql())
    }

    fn mode(&self) -> ProtocolMode {
        ProtocolMode::Text
    }
}

/// Prepared strategy: prepare, bind the context's parameters positionally,
/// execute.
#[derive(Debug, Default)]
pub struct PreparedStatementAccessor;

impl StatementAccessor for PreparedStatementAccessor {
    fn execute(
        &self,
        connection: &BackendConnection,
        context: &QueryContext,
    ) -> ProxyResult<ExecuteResult> {
        debug!(
            "session {}: prepared query on schema '{}' with {} parameters",
            connection.id(),
            context.schema().name(),
            context.parameters().len()
        );
        context
            .schema()
            .data_source()
            .execute_prepared(context.sql(), context.parameters())
    }

    fn mode(&self) -> ProtocolMode {
        ProtocolMode::Binary
    }
}
