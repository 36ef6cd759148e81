// Schema Runtime Module
//
// This module holds the per-schema runtime state the proxy routes with:
// resolved metadata and resource bindings, and the process-wide registry
// they are looked up from.

pub mod context;
pub mod data_source;
pub mod registry;

// Re-export key components
pub use context::{SchemaContext, TableRouting};
pub use data_source::DataSource;
pub use registry::SchemaRegistry;
