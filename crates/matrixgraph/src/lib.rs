//! # matrixgraph
//!
//! A weighted directed graph stored as an adjacency matrix, with depth-first
//! and breadth-first traversal and shortest-path computation.
//!
//! ## Core Principles
//!
//! - **Dense Storage**: One row-major `n×n` weight matrix, no hidden indexes
//! - **Deterministic**: Neighbors are always scanned in ascending index order
//! - **Fail Fast**: Out-of-range vertices are errors, never clamped
//! - **Caller-Owned Output**: Algorithms can write into buffers you provide
//!
//! ## Architecture
//!
//! ```text
//! Shortest paths (Dijkstra, Floyd–Warshall)   Traversal (DFS, BFS)
//!                     ↓                              ↓
//!                     ↓                       Frontier (stack, queue)
//!                     ↓                              ↓
//!          Matrix store (link, unlink, is_adjacent, config)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use matrixgraph::MatrixGraph;
//!
//! let mut graph = MatrixGraph::new();
//! graph.set_vertex_count(4).unwrap();
//! graph.link(0, 1, 4).unwrap();
//! graph.link(0, 2, 1).unwrap();
//! graph.link(2, 1, 2).unwrap();
//!
//! let mut order = Vec::new();
//! graph.bfs(0, |v| order.push(v)).unwrap();
//! assert_eq!(order, vec![0, 1, 2]);
//!
//! let all = graph.floyd().unwrap();
//! assert_eq!(all.distance(0, 1), Some(3));
//! assert_eq!(all.distance(0, 3), None);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod frontier;
pub mod graph;

// Re-export main types
pub use config::{GraphConfig, DEFAULT_MAX_VERTICES};
pub use error::{GraphError, Result};
pub use frontier::{Frontier, Queue, Stack};
pub use graph::{AllPairsPaths, Edge, MatrixGraph, ShortestPaths, Vertex, Weight, INFINITY};
