// SQLGate Proxy Backend

pub mod communication;
pub mod schema;
pub mod session;
pub mod statement;

// Re-export key items for convenient access
pub use communication::engine::CommunicationEngine;
pub use communication::factory::CommunicationEngineFactory;
pub use communication::result::{ProxyError, ProxyResult};
pub use schema::SchemaRegistry;
pub use session::BackendConnection;
pub use statement::{ParsedStatement, StatementKind};
