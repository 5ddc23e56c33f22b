//! Shortest-path algorithms: Dijkstra (single source) and Floyd–Warshall
//! (all pairs), with path reconstruction.
//!
//! Both come in two forms. The `*_into` functions write into caller-owned
//! buffers sized to the vertex count and never resize them. [`dijkstra`] and
//! [`floyd`] allocate and return an owned result with route helpers.
//!
//! Unreachable distances are reported as [`INFINITY`]; missing predecessors
//! and direct routes are `None`.

use super::types::{add_distance, Vertex, Weight, INFINITY};
use crate::error::{GraphError, Result};
use crate::graph::MatrixGraph;
use log::{debug, trace};

/// Result of a single-source shortest-path run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    start: Vertex,
    dist: Vec<Weight>,
    path: Vec<Option<Vertex>>,
}

impl ShortestPaths {
    /// The source vertex.
    pub fn start(&self) -> Vertex {
        self.start
    }

    /// Distance to every vertex, [`INFINITY`] when unreachable.
    pub fn distances(&self) -> &[Weight] {
        &self.dist
    }

    /// Predecessor of every vertex on its shortest route.
    pub fn predecessors(&self) -> &[Option<Vertex>] {
        &self.path
    }

    /// Distance to `v`, or `None` if `v` is unreachable or not a vertex.
    pub fn distance(&self, v: Vertex) -> Option<Weight> {
        self.dist.get(v).copied().filter(|&d| d != INFINITY)
    }

    /// Whether `v` can be reached from the start vertex.
    pub fn is_reachable(&self, v: Vertex) -> bool {
        self.distance(v).is_some()
    }

    /// Vertex preceding `v` on its shortest route.
    pub fn predecessor(&self, v: Vertex) -> Option<Vertex> {
        self.path.get(v).copied().flatten()
    }

    /// Shortest route from the start vertex to `v`, both ends included.
    pub fn route_to(&self, v: Vertex) -> Option<Vec<Vertex>> {
        predecessor_route(self.start, v, &self.dist, &self.path)
    }
}

/// Result of an all-pairs shortest-path run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllPairsPaths {
    dist: Vec<Vec<Weight>>,
    path: Vec<Vec<Option<Vertex>>>,
}

impl AllPairsPaths {
    /// Number of vertices covered.
    pub fn vertex_count(&self) -> usize {
        self.dist.len()
    }

    /// Distance matrix, [`INFINITY`] where no route exists.
    pub fn distances(&self) -> &[Vec<Weight>] {
        &self.dist
    }

    /// Intermediate-vertex matrix; `None` means the best route is direct.
    pub fn intermediates(&self) -> &[Vec<Option<Vertex>>] {
        &self.path
    }

    /// Distance from `i` to `j`, or `None` if there is no route.
    pub fn distance(&self, i: Vertex, j: Vertex) -> Option<Weight> {
        self.dist
            .get(i)
            .and_then(|row| row.get(j))
            .copied()
            .filter(|&d| d != INFINITY)
    }

    /// Intermediate vertex recorded for `i -> j`.
    pub fn intermediate(&self, i: Vertex, j: Vertex) -> Option<Vertex> {
        self.path.get(i).and_then(|row| row.get(j)).copied().flatten()
    }

    /// Whether some vertex lies on a cycle of negative total weight.
    pub fn has_negative_cycle(&self) -> bool {
        has_negative_cycle(&self.dist)
    }

    /// Shortest route from `i` to `j`, both ends included.
    ///
    /// Returns `None` when `j` is unreachable from `i`, or when the graph
    /// contains a negative cycle.
    pub fn route(&self, i: Vertex, j: Vertex) -> Option<Vec<Vertex>> {
        intermediate_route(i, j, &self.dist, &self.path)
    }
}

/// Single-source shortest paths from `start` (Dijkstra).
///
/// # Errors
///
/// See [`dijkstra_into`].
pub fn dijkstra(graph: &MatrixGraph, start: Vertex) -> Result<ShortestPaths> {
    let n = graph.vertex_count();
    let mut dist = vec![INFINITY; n];
    let mut path = vec![None; n];
    dijkstra_into(graph, start, &mut dist, &mut path)?;
    Ok(ShortestPaths { start, dist, path })
}

/// Single-source shortest paths from `start`, written into caller buffers.
///
/// On success `dist[v]` holds the length of the shortest route to `v`
/// ([`INFINITY`] when unreachable) and `path[v]` the vertex preceding `v` on
/// it (`None` for `start` and for unreachable vertices). Ties between equally
/// close candidates are broken by lowest index.
///
/// All edge weights must be non-negative. This is checked up front and the
/// buffers are left untouched when it does not hold.
///
/// # Errors
///
/// - [`GraphError::EmptyGraph`] if the graph has no vertices
/// - [`GraphError::VertexOutOfBounds`] if `start` is not a vertex
/// - [`GraphError::BufferSizeMismatch`] if a buffer length differs from the vertex count
/// - [`GraphError::NegativeWeight`] if any edge weight is negative
pub fn dijkstra_into(
    graph: &MatrixGraph,
    start: Vertex,
    dist: &mut [Weight],
    path: &mut [Option<Vertex>],
) -> Result<()> {
    let n = graph.vertex_count();
    if n == 0 {
        return Err(GraphError::EmptyGraph);
    }
    graph.check_vertex(start)?;
    check_len(n, dist.len())?;
    check_len(n, path.len())?;
    if let Some(edge) = graph.edges().find(|e| e.weight < 0) {
        return Err(GraphError::NegativeWeight {
            from: edge.from,
            to: edge.to,
            weight: edge.weight,
        });
    }

    debug!("Running Dijkstra from {start} over {n} vertices");

    dist.fill(INFINITY);
    path.fill(None);
    dist[start] = 0;

    let mut finalized = vec![false; n];
    let mut settled = 0;

    for _ in 0..n {
        let Some(u) = closest_pending(dist, &finalized) else {
            // Everything left is unreachable
            break;
        };
        finalized[u] = true;
        settled += 1;

        for (v, weight) in graph.row(u) {
            if finalized[v] {
                continue;
            }
            if let Some(candidate) = add_distance(dist[u], weight) {
                if candidate < dist[v] {
                    trace!("Relaxing {v}: {} -> {candidate} via {u}", dist[v]);
                    dist[v] = candidate;
                    path[v] = Some(u);
                }
            }
        }
    }

    debug!("Dijkstra from {start} settled {settled} of {n} vertices");
    Ok(())
}

/// All-pairs shortest paths (Floyd–Warshall).
///
/// # Errors
///
/// See [`floyd_into`].
pub fn floyd(graph: &MatrixGraph) -> Result<AllPairsPaths> {
    let n = graph.vertex_count();
    let mut dist = vec![vec![INFINITY; n]; n];
    let mut path = vec![vec![None; n]; n];
    floyd_into(graph, &mut dist, &mut path)?;
    Ok(AllPairsPaths { dist, path })
}

/// All-pairs shortest paths, written into caller-owned n×n matrices.
///
/// On success `dist[i][j]` holds the length of the shortest route from `i`
/// to `j` ([`INFINITY`] when there is none) and `path[i][j]` an intermediate
/// vertex on it (`None` when the best route is the direct edge).
///
/// The diagonal starts at zero. A self-loop only lowers it when its weight
/// is negative, which then shows up as a negative cycle. Negative edge
/// weights are otherwise accepted.
///
/// Runs in O(n³) time.
///
/// # Errors
///
/// - [`GraphError::EmptyGraph`] if the graph has no vertices
/// - [`GraphError::BufferSizeMismatch`] if either matrix is not n×n
pub fn floyd_into(
    graph: &MatrixGraph,
    dist: &mut [Vec<Weight>],
    path: &mut [Vec<Option<Vertex>>],
) -> Result<()> {
    let n = graph.vertex_count();
    if n == 0 {
        return Err(GraphError::EmptyGraph);
    }
    check_len(n, dist.len())?;
    check_len(n, path.len())?;
    for row in dist.iter() {
        check_len(n, row.len())?;
    }
    for row in path.iter() {
        check_len(n, row.len())?;
    }

    debug!("Running Floyd-Warshall over {n} vertices");

    for i in 0..n {
        for j in 0..n {
            let weight = graph.raw(i, j);
            dist[i][j] = if i == j { weight.min(0) } else { weight };
            path[i][j] = None;
        }
    }

    let mut relaxations = 0usize;

    // k must stay outermost: dist[i][k] and dist[k][j] have to reflect
    // every route through intermediates below k before k is considered.
    for k in 0..n {
        for i in 0..n {
            let through_k = dist[i][k];
            if through_k == INFINITY {
                continue;
            }
            for j in 0..n {
                if let Some(candidate) = add_distance(through_k, dist[k][j]) {
                    if candidate < dist[i][j] {
                        dist[i][j] = candidate;
                        path[i][j] = Some(k);
                        relaxations += 1;
                    }
                }
            }
        }
    }

    debug!("Floyd-Warshall finished with {relaxations} relaxations");
    Ok(())
}

/// Rebuild the route from `start` to `target` out of a predecessor array
/// produced by [`dijkstra_into`].
///
/// Returns `None` when `target` is unreachable or out of range.
pub fn predecessor_route(
    start: Vertex,
    target: Vertex,
    dist: &[Weight],
    path: &[Option<Vertex>],
) -> Option<Vec<Vertex>> {
    if dist.get(target).map_or(true, |&d| d == INFINITY) {
        return None;
    }

    let mut route = vec![target];
    let mut current = target;
    while current != start {
        current = path.get(current).copied().flatten()?;
        route.push(current);
        // A well-formed predecessor chain is acyclic
        if route.len() > path.len() {
            return None;
        }
    }

    route.reverse();
    Some(route)
}

/// Rebuild the route from `i` to `j` out of the matrices produced by
/// [`floyd_into`].
///
/// Returns `None` when `j` is unreachable from `i`, either index is out of
/// range, `dist` shows a negative cycle, or `path` describes a route longer
/// than the vertex count.
pub fn intermediate_route(
    i: Vertex,
    j: Vertex,
    dist: &[Vec<Weight>],
    path: &[Vec<Option<Vertex>>],
) -> Option<Vec<Vertex>> {
    let d = *dist.get(i)?.get(j)?;
    if d == INFINITY || has_negative_cycle(dist) {
        return None;
    }
    if i == j {
        return Some(vec![i]);
    }

    let n = dist.len();
    let mut route = vec![i];
    expand(i, j, path, n, n, &mut route)?;
    route.push(j);
    Some(route)
}

/// Push the vertices strictly between `i` and `j`.
///
/// Fails once the nesting exceeds `depth` or the route would exceed `limit`
/// vertices, which only a cyclic `path` matrix can cause.
fn expand(
    i: Vertex,
    j: Vertex,
    path: &[Vec<Option<Vertex>>],
    depth: usize,
    limit: usize,
    route: &mut Vec<Vertex>,
) -> Option<()> {
    let Some(k) = path.get(i).and_then(|row| row.get(j)).copied().flatten() else {
        return Some(());
    };
    let depth = depth.checked_sub(1)?;
    expand(i, k, path, depth, limit, route)?;
    route.push(k);
    // `j` still has to follow
    if route.len() >= limit {
        return None;
    }
    expand(k, j, path, depth, limit, route)
}

fn has_negative_cycle(dist: &[Vec<Weight>]) -> bool {
    dist.iter()
        .enumerate()
        .any(|(v, row)| row.get(v).is_some_and(|&d| d < 0))
}

/// Non-finalized vertex with the smallest finite distance, lowest index first.
fn closest_pending(dist: &[Weight], finalized: &[bool]) -> Option<Vertex> {
    let mut best: Option<Vertex> = None;
    for (v, &d) in dist.iter().enumerate() {
        if finalized[v] || d == INFINITY {
            continue;
        }
        if best.map_or(true, |b| d < dist[b]) {
            best = Some(v);
        }
    }
    best
}

fn check_len(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(GraphError::BufferSizeMismatch { expected, actual });
    }
    Ok(())
}
