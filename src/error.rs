//! Error types for jdepgraph

use thiserror::Error;

/// Errors raised while extracting, serializing or loading a dependency graph
#[derive(Debug, Error)]
pub enum JdepsError {
    /// A package destination line appeared outside of any source block
    #[error("line {line}: destination '{destination}' has no preceding source package")]
    MalformedInput { line: usize, destination: String },

    #[error("invalid dependency type: {0}")]
    InvalidDialect(String),

    #[error("invalid output format: {0}")]
    InvalidFormat(String),

    /// Node label or relationship type is not a safe Cypher identifier
    #[error("invalid {kind}: {value}")]
    InvalidIdentifier { kind: &'static str, value: String },

    #[error("invalid line pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("batch size must be greater than zero")]
    InvalidBatchSize,

    #[error("graph store error: {0}")]
    Database(#[from] neo4rs::Error),

    #[error("statement issued outside of a transaction")]
    NoTransaction,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, JdepsError>;
