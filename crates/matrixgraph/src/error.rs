//! Error types for matrixgraph operations.
//!
//! All fallible operations return [`Result<T>`] with context-rich error messages.

use crate::graph::{Vertex, Weight};
use thiserror::Error;

/// Result type alias for matrixgraph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Comprehensive error type for all graph operations.
///
/// A failed call never leaves the adjacency matrix partially modified.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Vertex index outside `[0, vertex_count)`
    #[error("Vertex {vertex} out of bounds for graph with {vertex_count} vertices")]
    VertexOutOfBounds {
        /// Offending vertex index
        vertex: Vertex,
        /// Current vertex count of the graph
        vertex_count: usize,
    },

    /// Requested vertex count exceeds the configured maximum
    #[error("Vertex count {requested} exceeds configured maximum of {max}")]
    CapacityExceeded {
        /// Requested vertex count
        requested: usize,
        /// Configured maximum
        max: usize,
    },

    /// Attempt to grow the graph to fewer vertices than it already has
    #[error("Cannot shrink graph from {current} to {requested} vertices")]
    ShrinkNotSupported {
        /// Current vertex count
        current: usize,
        /// Requested vertex count
        requested: usize,
    },

    /// Edge weight collides with the no-edge sentinel
    #[error("Invalid edge weight: {weight}")]
    InvalidWeight {
        /// Rejected weight
        weight: Weight,
    },

    /// Algorithm invoked before the vertex count was set
    #[error("Graph has no vertices")]
    EmptyGraph,

    /// Negative edge weight found where the algorithm requires non-negative weights
    #[error("Negative edge weight {weight} on edge {from} -> {to}")]
    NegativeWeight {
        /// Edge source
        from: Vertex,
        /// Edge target
        to: Vertex,
        /// Negative weight found
        weight: Weight,
    },

    /// Caller-supplied output buffer does not match the vertex count
    #[error("Output buffer size mismatch: expected {expected}, got {actual}")]
    BufferSizeMismatch {
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// Configuration could not be parsed or is invalid
    #[error("Configuration error: {message}")]
    Config {
        /// Detailed error message
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl GraphError {
    /// Create a configuration error from a message and optional source.
    pub fn config<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }

    /// Whether this error is a vertex bounds violation.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::VertexOutOfBounds { .. })
    }
}
