//! Graph configuration.

use crate::error::{GraphError, Result};
use serde::{Deserialize, Serialize};

/// Default upper bound on the number of vertices a graph may hold.
pub const DEFAULT_MAX_VERTICES: usize = 1024;

/// Configuration for a [`MatrixGraph`](crate::MatrixGraph).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Maximum vertex count accepted by `set_vertex_count` and `grow`.
    ///
    /// The matrix holds `max_vertices²` cells at this size.
    pub max_vertices: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            max_vertices: DEFAULT_MAX_VERTICES,
        }
    }
}

impl GraphConfig {
    /// Set the maximum vertex count
    pub fn with_max_vertices(mut self, max_vertices: usize) -> Self {
        self.max_vertices = max_vertices;
        self
    }

    /// Parse a configuration from JSON.
    ///
    /// Missing fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Config`] if the JSON is malformed or the
    /// resulting configuration is invalid.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| GraphError::config("Failed to parse graph config", Some(e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Config`] if `max_vertices` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.max_vertices == 0 {
            return Err(GraphError::config(
                "max_vertices must be positive",
                None::<std::io::Error>,
            ));
        }
        Ok(())
    }
}
