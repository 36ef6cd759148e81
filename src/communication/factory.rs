// Communication Engine Factory
//
// This module is the single creation surface command handlers go through:
// it assembles the query context and wires the protocol-appropriate
// accessor strategy, so callers never see the internal wiring and the
// execution path stays protocol agnostic.

use std::sync::Arc;

use crate::schema::SchemaRegistry;
use crate::session::BackendConnection;
use crate::statement::ParsedStatement;

use super::accessor::{
    PlainStatementAccessor, PreparedStatementAccessor, ProtocolMode, StatementAccessor,
};
use super::context::ContextBuilder;
use super::engine::{CommunicationEngine, ExecuteEngine};
use super::result::{DataValue, ProxyResult};

/// Creates ready-to-run communication engines for both protocol modes.
///
/// Holds no mutable state of its own; one instance can serve every request
/// in the process concurrently, and clones share the same registry.
#[derive(Clone)]
pub struct CommunicationEngineFactory {
    builder: ContextBuilder,
}

impl CommunicationEngineFactory {
    pub fn new(registry: Arc<SchemaRegistry>) -> Self {
        CommunicationEngineFactory {
            builder: ContextBuilder::new(registry),
        }
    }

    /// Engine for a simple-query request: no bind phase, empty parameter
    /// sequence, plain accessor.
    pub fn new_text_protocol_instance(
        &self,
        statement: ParsedStatement,
        sql: &str,
        connection: Arc<BackendConnection>,
    ) -> ProxyResult<CommunicationEngine> {
        self.create(ProtocolMode::Text, statement, sql, Vec::new(), connection)
    }

    /// Engine for a prepared request. The parameter slice is snapshotted
    /// here, so the returned context stays independent of the buffer the
    /// caller keeps reusing between binds.
    pub fn new_binary_protocol_instance(
        &self,
        statement: ParsedStatement,
        sql: &str,
        parameters: &[DataValue],
        connection: Arc<BackendConnection>,
    ) -> ProxyResult<CommunicationEngine> {
        self.create(
            ProtocolMode::Binary,
            statement,
            sql,
            parameters.to_vec(),
            connection,
        )
    }

    // Strategy selection is a fixed mapping from the protocol mode; the
    // statement and parameters are never inspected here.
    fn create(
        &self,
        mode: ProtocolMode,
        statement: ParsedStatement,
        sql: &str,
        parameters: Vec<DataValue>,
        connection: Arc<BackendConnection>,
    ) -> ProxyResult<CommunicationEngine> {
        let context = self.builder.build(statement, sql, parameters, &connection)?;
        let accessor: Box<dyn StatementAccessor> = match mode {
            ProtocolMode::Text => Box::new(PlainStatementAccessor),
            ProtocolMode::Binary => Box::new(PreparedStatementAccessor),
        };
        Ok(CommunicationEngine::new(
            context,
            ExecuteEngine::new(connection, accessor),
        ))
    }
}
