use thiserror::Error;

use crate::graph::VertexId;

/** errors raised by graph operations and instance readers */
#[derive(Debug, Error)]
pub enum GraphError {
    /// the id does not name a vertex of the graph
    #[error("invalid vertex: {0}")]
    InvalidVertex(VertexId),
    /// the sequence is not a simple path of the graph
    #[error("invalid path: the sequence is not a simple path")]
    InvalidPath,
    /// the instance file could not be read or written
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// the instance file is malformed
    #[error("parse error: {0}")]
    Parse(String),
    /// the JSON instance could not be (de)serialized
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// result type for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;
