// Proxy Result Types
//
// This module defines the value, row and error types shared across the
// communication layer.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Bind-parameter and result values the proxy moves between client and
/// backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DataValue {
    Null,
    Integer(i64),
    Float(f64),
    Text(String),
    Boolean(bool),
    Blob(Vec<u8>),
}

impl fmt::Display for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataValue::Null => write!(f, "NULL"),
            DataValue::Integer(i) => write!(f, "{}", i),
            DataValue::Float(fl) => write!(f, "{}", fl),
            DataValue::Text(s) => write!(f, "'{}'", s.replace('\'', "''")),
            DataValue::Boolean(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            DataValue::Blob(b) => write!(f, "X'{}'", hex::encode(b)),
        }
    }
}

/// Positional row as it arrives from a backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    values: Vec<DataValue>,
}

impl Row {
    pub fn new(values: Vec<DataValue>) -> Self {
        Row { values }
    }

    pub fn values(&self) -> &[DataValue] {
        &self.values
    }

    /// Get a value by position
    pub fn get(&self, index: usize) -> Option<&DataValue> {
        self.values.get(index)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Result set for statements that return rows.
#[derive(Debug, Clone)]
pub struct QueryResultSet {
    /// Column names in the resultset
    columns: Vec<String>,
    /// Rows of data
    rows: Vec<Row>,
}

impl QueryResultSet {
    /// Create a new empty resultset with column names
    pub fn new(columns: Vec<String>) -> Self {
        QueryResultSet {
            columns,
            rows: Vec::new(),
        }
    }

    /// Add a row to the resultset
    pub fn add_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Get the columns in the resultset
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Get the rows in the resultset
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Get the number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Outcome of running one statement against a backend.
#[derive(Debug, Clone)]
pub enum ExecuteResult {
    /// Statement produced rows
    Query(QueryResultSet),
    /// Statement changed rows without returning any
    Update { affected_rows: u64 },
}

impl ExecuteResult {
    pub fn is_query(&self) -> bool {
        matches!(self, ExecuteResult::Query(_))
    }
}

/// Errors surfaced by the communication layer
#[derive(Error, Debug)]
pub enum ProxyError {
    /// Session's current schema has no registered runtime context
    #[error("Schema not found: {0}")]
    SchemaNotFound(String),
    /// Error reported by a schema's data source
    #[error("Data source error: {0}")]
    DataSourceError(String),
    /// Error during statement execution
    #[error("Execution error: {0}")]
    ExecutionError(String),
}

/// Result type for proxy operations
pub type ProxyResult<T> = Result<T, ProxyError>;
