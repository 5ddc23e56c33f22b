//! Core graph types and operations.
//!
//! This module defines the fundamental building blocks:
//! - [`MatrixGraph`]: The adjacency-matrix store and its edge operations
//! - [`algorithms`]: DFS and BFS traversal
//! - [`shortest_path`]: Dijkstra and Floyd–Warshall with path reconstruction

mod types;
mod matrix;
pub mod algorithms;
pub mod shortest_path;

pub use types::{Edge, Vertex, Weight, INFINITY};
pub use matrix::MatrixGraph;
pub use shortest_path::{AllPairsPaths, ShortestPaths};
