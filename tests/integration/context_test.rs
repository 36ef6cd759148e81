// Context Builder Integration Tests
//
// This module tests per-request context assembly against the schema
// registry.

use std::sync::Arc;

use anyhow::Result;

use sqlgate::communication::context::ContextBuilder;
use sqlgate::communication::result::{DataValue, ProxyError};
use sqlgate::schema::{SchemaContext, SchemaRegistry};
use sqlgate::statement::{ParsedStatement, StatementKind};

// Declare the common module for test utilities using a path attribute
#[path = "../common/mod.rs"]
mod common;
use common::{registry_with_schema, test_connection, RecordingDataSource};

#[test]
fn test_build_bundles_all_inputs() -> Result<()> {
    let source = Arc::new(RecordingDataSource::new("ds_0"));
    let registry = registry_with_schema("orders_db", source);
    let builder = ContextBuilder::new(registry);

    let context = builder.build(
        ParsedStatement::new(StatementKind::Update),
        "UPDATE t SET name=? WHERE id=?",
        vec![
            DataValue::Text("gear".to_string()),
            DataValue::Integer(3),
        ],
        &test_connection("orders_db"),
    )?;

    assert_eq!(context.schema().name(), "orders_db");
    assert_eq!(context.sql(), "UPDATE t SET name=? WHERE id=?");
    assert_eq!(context.parameters().len(), 2);
    assert_eq!(context.parameters()[1], DataValue::Integer(3));
    assert_eq!(context.statement().kind(), StatementKind::Update);
    Ok(())
}

#[test]
fn test_build_fails_for_unregistered_schema() {
    let source = Arc::new(RecordingDataSource::new("ds_0"));
    let registry = registry_with_schema("orders_db", source);
    let builder = ContextBuilder::new(registry);

    let result = builder.build(
        ParsedStatement::new(StatementKind::Select),
        "SELECT 1",
        Vec::new(),
        &test_connection("unknown_db"),
    );

    match result {
        Err(ProxyError::SchemaNotFound(name)) => assert_eq!(name, "unknown_db"),
        other => panic!("Expected SchemaNotFound, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_build_resolves_the_connection_schema() -> Result<()> {
    // Two schemas on distinct data sources; each session must end up on
    // its own one
    let registry = Arc::new(SchemaRegistry::new());
    registry.register(SchemaContext::new(
        "orders_db",
        Arc::new(RecordingDataSource::new("ds_orders")),
    ));
    registry.register(SchemaContext::new(
        "billing_db",
        Arc::new(RecordingDataSource::new("ds_billing")),
    ));
    let builder = ContextBuilder::new(registry);

    let orders_context = builder.build(
        ParsedStatement::new(StatementKind::Select),
        "SELECT 1",
        Vec::new(),
        &test_connection("orders_db"),
    )?;
    let billing_context = builder.build(
        ParsedStatement::new(StatementKind::Select),
        "SELECT 1",
        Vec::new(),
        &test_connection("billing_db"),
    )?;

    assert_eq!(orders_context.schema().data_source().name(), "ds_orders");
    assert_eq!(billing_context.schema().data_source().name(), "ds_billing");
    Ok(())
}

#[test]
fn test_context_owns_its_parameter_sequence() -> Result<()> {
    let source = Arc::new(RecordingDataSource::new("ds_0"));
    let registry = registry_with_schema("orders_db", source);
    let builder = ContextBuilder::new(registry);

    let parameters = vec![DataValue::Integer(1), DataValue::Null];
    let context = builder.build(
        ParsedStatement::new(StatementKind::Select),
        "SELECT * FROM t WHERE id=? AND deleted_at=?",
        parameters.clone(),
        &test_connection("orders_db"),
    )?;

    // Cloning the context clones the sequence with it
    let cloned = context.clone();
    assert_eq!(cloned.parameters(), parameters.as_slice());
    assert_eq!(context.parameters(), parameters.as_slice());
    Ok(())
}
