//! Graph traversal algorithms.
//!
//! Provides DFS and BFS over the adjacency matrix. Both scan neighbors in
//! ascending index order, so visit order is fully deterministic.

use crate::error::Result;
use crate::frontier::{Frontier, Queue, Stack};
use crate::graph::{MatrixGraph, Vertex};
use log::debug;

/// Depth-First Search traversal from a starting vertex (iterative implementation).
///
/// `visit` is called exactly once for every vertex reachable from `start`,
/// `start` included, in discovery order. Neighbors are pushed in ascending
/// index order, so the highest-indexed unvisited neighbor is explored first.
///
/// # Parameters
/// - `graph`: The graph to traverse
/// - `start`: Starting vertex
/// - `visit`: Called once per reachable vertex
///
/// # Errors
///
/// Returns [`GraphError::VertexOutOfBounds`](crate::GraphError::VertexOutOfBounds)
/// if `start` is not a vertex of the graph. Nothing is visited in that case.
pub fn dfs<F>(graph: &MatrixGraph, start: Vertex, mut visit: F) -> Result<()>
where
    F: FnMut(Vertex),
{
    graph.check_vertex(start)?;

    let mut visited = vec![false; graph.vertex_count()];
    let mut stack = Stack::with_capacity(graph.vertex_count());
    let mut count = 0;

    stack.push(start);

    while let Some(current) = stack.pop() {
        // A vertex may be pushed several times before it is first popped
        if visited[current] {
            continue;
        }
        visited[current] = true;
        visit(current);
        count += 1;

        for (neighbor, _) in graph.row(current) {
            if !visited[neighbor] {
                stack.push(neighbor);
            }
        }
    }

    debug!("DFS from {start} visited {count} vertices");
    Ok(())
}

/// Breadth-First Search traversal from a starting vertex.
///
/// `visit` is called exactly once for every vertex reachable from `start`,
/// `start` included, in order of increasing hop count. Vertices at the same
/// depth are visited in the order they were discovered.
///
/// # Errors
///
/// Returns [`GraphError::VertexOutOfBounds`](crate::GraphError::VertexOutOfBounds)
/// if `start` is not a vertex of the graph.
pub fn bfs<F>(graph: &MatrixGraph, start: Vertex, mut visit: F) -> Result<()>
where
    F: FnMut(Vertex),
{
    graph.check_vertex(start)?;

    let mut visited = vec![false; graph.vertex_count()];
    let mut queue = Queue::with_capacity(graph.vertex_count());
    let mut count = 0;

    visited[start] = true;
    queue.push(start);

    while let Some(current) = queue.pop() {
        visit(current);
        count += 1;

        for (neighbor, _) in graph.row(current) {
            if !visited[neighbor] {
                visited[neighbor] = true;
                queue.push(neighbor);
            }
        }
    }

    debug!("BFS from {start} visited {count} vertices");
    Ok(())
}

/// Vertices reachable from `start` in DFS order.
///
/// # Errors
///
/// Same as [`dfs`].
pub fn dfs_order(graph: &MatrixGraph, start: Vertex) -> Result<Vec<Vertex>> {
    let mut order = Vec::new();
    dfs(graph, start, |v| order.push(v))?;
    Ok(order)
}

/// Vertices reachable from `start` in BFS order.
///
/// # Errors
///
/// Same as [`bfs`].
pub fn bfs_order(graph: &MatrixGraph, start: Vertex) -> Result<Vec<Vertex>> {
    let mut order = Vec::new();
    bfs(graph, start, |v| order.push(v))?;
    Ok(order)
}

/// Number of vertices reachable from `start`, `start` included.
///
/// # Errors
///
/// Same as [`bfs`].
pub fn reachable(graph: &MatrixGraph, start: Vertex) -> Result<usize> {
    let mut count = 0;
    bfs(graph, start, |_| count += 1)?;
    Ok(count)
}
