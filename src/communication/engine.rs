// Communication Engines
//
// This module defines the engines a constructed request is handed off
// through: ExecuteEngine drives the selected accessor strategy for one
// session, CommunicationEngine pairs it with the query context.

use std::sync::Arc;

use log::debug;

use crate::session::BackendConnection;

use super::accessor::{ProtocolMode, StatementAccessor};
use super::context::QueryContext;
use super::result::{ExecuteResult, ProxyResult};

/// Runs statements for one session through a fixed accessor strategy.
///
/// The strategy is chosen at construction time and never changes for the
/// life of the engine.
pub struct ExecuteEngine {
    connection: Arc<BackendConnection>,
    accessor: Box<dyn StatementAccessor>,
}

impl ExecuteEngine {
    pub fn new(
        connection: Arc<BackendConnection>,
        accessor: Box<dyn StatementAccessor>,
    ) -> Self {
        ExecuteEngine {
            connection,
            accessor,
        }
    }

    pub fn connection(&self) -> &BackendConnection {
        &self.connection
    }

    /// Protocol mode of the strategy this engine was wired with.
    pub fn mode(&self) -> ProtocolMode {
        self.accessor.mode()
    }

    pub fn execute(&self, context: &QueryContext) -> ProxyResult<ExecuteResult> {
        self.accessor.execute(&self.connection, context)
    }
}

/// One request's execution handle: the assembled context plus the engine
/// that runs it.
///
/// One instance per request; it lives until the request's result is
/// consumed or its error surfaced.
pub struct CommunicationEngine {
    context: QueryContext,
    execute_engine: ExecuteEngine,
}

impl CommunicationEngine {
    pub fn new(context: QueryContext, execute_engine: ExecuteEngine) -> Self {
        CommunicationEngine {
            context,
            execute_engine,
        }
    }

    pub fn context(&self) -> &QueryContext {
        &self.context
    }

    pub fn execute_engine(&self) -> &ExecuteEngine {
        &self.execute_engine
    }

    /// Run the request and return the backend's result unchanged. Errors
    /// propagate to the caller, which translates them into a protocol
    /// error response for the client.
    pub fn execute(&self) -> ProxyResult<ExecuteResult> {
        debug!(
            "executing {} statement on schema '{}'",
            self.context.statement().kind(),
            self.context.schema().name()
        );
        self.execute_engine.execute(&self.context)
    }
}
