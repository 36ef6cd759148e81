// Backend Communication Module
//
// This module contains the construction core of the proxy: per-request
// context assembly, protocol-mode strategy selection, and the engines a
// request is handed off through.

pub mod accessor;
pub mod context;
pub mod engine;
pub mod factory;
pub mod result;

// Export key public interfaces
pub use accessor::{
    PlainStatementAccessor, PreparedStatementAccessor, ProtocolMode, StatementAccessor,
};
pub use context::{ContextBuilder, QueryContext};
pub use engine::{CommunicationEngine, ExecuteEngine};
pub use factory::CommunicationEngineFactory;
pub use result::{DataValue, ExecuteResult, ProxyError, ProxyResult, QueryResultSet, Row};
