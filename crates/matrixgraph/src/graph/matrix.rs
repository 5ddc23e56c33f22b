//! Adjacency-matrix graph store and edge operations.

use super::shortest_path::{AllPairsPaths, ShortestPaths};
use super::types::{Edge, Vertex, Weight, INFINITY};
use crate::config::GraphConfig;
use crate::error::{GraphError, Result};
use log::{debug, info, trace};

/// A weighted directed graph stored as a dense adjacency matrix.
///
/// Cell `(i, j)` holds the weight of the edge `i -> j`, or [`INFINITY`] when
/// there is none. The matrix is kept in a single row-major buffer.
///
/// # Example
///
/// ```
/// use matrixgraph::MatrixGraph;
///
/// let mut graph = MatrixGraph::new();
/// graph.set_vertex_count(3).unwrap();
/// graph.link(0, 1, 1).unwrap();
/// graph.link(1, 2, 2).unwrap();
/// graph.link(0, 2, 10).unwrap();
///
/// let paths = graph.dijkstra(0).unwrap();
/// assert_eq!(paths.distance(2), Some(3));
/// assert_eq!(paths.route_to(2), Some(vec![0, 1, 2]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixGraph {
    config: GraphConfig,
    vertex_count: usize,
    weights: Vec<Weight>,
}

impl MatrixGraph {
    /// Create an empty graph with zero vertices and the default configuration.
    pub fn new() -> Self {
        Self {
            config: GraphConfig::default(),
            vertex_count: 0,
            weights: Vec::new(),
        }
    }

    /// Create an empty graph with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Config`] if the configuration is invalid.
    pub fn with_config(config: GraphConfig) -> Result<Self> {
        config.validate()?;
        info!("Creating graph with max_vertices={}", config.max_vertices);
        Ok(Self {
            config,
            vertex_count: 0,
            weights: Vec::new(),
        })
    }

    /// Build a graph with `vertex_count` vertices and the given edges.
    ///
    /// # Errors
    ///
    /// Fails like [`set_vertex_count`](Self::set_vertex_count) and
    /// [`link`](Self::link).
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Vertex, Vertex, Weight)>,
    {
        let mut graph = Self::new();
        graph.set_vertex_count(vertex_count)?;
        for (u, v, weight) in edges {
            graph.link(u, v, weight)?;
        }
        Ok(graph)
    }

    /// The configuration this graph was created with.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    /// Number of directed edges, self-loops included.
    pub fn edge_count(&self) -> usize {
        self.weights.iter().filter(|&&w| w != INFINITY).count()
    }

    /// Reset the graph to `n` vertices and no edges.
    ///
    /// Every cell, diagonal included, becomes the no-edge sentinel. Any
    /// previous matrix is replaced; use [`grow`](Self::grow) to keep edges.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::CapacityExceeded`] if `n` exceeds the configured
    /// maximum or `n * n` cells cannot be addressed. The existing matrix is
    /// left untouched.
    pub fn set_vertex_count(&mut self, n: usize) -> Result<()> {
        let cells = self.check_capacity(n)?;
        debug!("Setting vertex count: {} -> {}", self.vertex_count, n);
        self.weights = vec![INFINITY; cells];
        self.vertex_count = n;
        Ok(())
    }

    /// Enlarge the graph to `n` vertices, preserving existing edges.
    ///
    /// New vertices start with no edges.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::ShrinkNotSupported`] if `n` is smaller than the
    /// current vertex count, or [`GraphError::CapacityExceeded`] above the
    /// configured maximum.
    pub fn grow(&mut self, n: usize) -> Result<()> {
        if n < self.vertex_count {
            return Err(GraphError::ShrinkNotSupported {
                current: self.vertex_count,
                requested: n,
            });
        }
        let cells = self.check_capacity(n)?;
        debug!("Growing graph: {} -> {} vertices", self.vertex_count, n);

        let old = self.vertex_count;
        let mut weights = vec![INFINITY; cells];
        for row in 0..old {
            weights[row * n..row * n + old]
                .copy_from_slice(&self.weights[row * old..(row + 1) * old]);
        }
        self.weights = weights;
        self.vertex_count = n;
        Ok(())
    }

    /// Remove every edge, keeping the vertex count.
    pub fn clear(&mut self) {
        debug!("Clearing {} edges", self.edge_count());
        self.weights.fill(INFINITY);
    }

    /// Add (or overwrite) the directed edge `u -> v` with `weight`.
    ///
    /// Does not create `v -> u`. Self-loops are allowed.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfBounds`] for an invalid `u` or `v`,
    /// and [`GraphError::InvalidWeight`] if `weight` is [`INFINITY`].
    pub fn link(&mut self, u: Vertex, v: Vertex, weight: Weight) -> Result<()> {
        let cell = self.cell(u, v)?;
        if weight == INFINITY {
            return Err(GraphError::InvalidWeight { weight });
        }
        trace!("Linking {u} -> {v} with weight {weight}");
        self.weights[cell] = weight;
        Ok(())
    }

    /// Remove the directed edge `u -> v`. Removing an absent edge is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfBounds`] for an invalid `u` or `v`.
    pub fn unlink(&mut self, u: Vertex, v: Vertex) -> Result<()> {
        let cell = self.cell(u, v)?;
        trace!("Unlinking {u} -> {v}");
        self.weights[cell] = INFINITY;
        Ok(())
    }

    /// Whether the directed edge `u -> v` exists.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfBounds`] for an invalid `u` or `v`.
    pub fn is_adjacent(&self, u: Vertex, v: Vertex) -> Result<bool> {
        Ok(self.weights[self.cell(u, v)?] != INFINITY)
    }

    /// Weight of the edge `u -> v`, or `None` if there is no such edge.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfBounds`] for an invalid `u` or `v`.
    pub fn weight(&self, u: Vertex, v: Vertex) -> Result<Option<Weight>> {
        let w = self.weights[self.cell(u, v)?];
        Ok((w != INFINITY).then_some(w))
    }

    /// Outgoing edges of `u` as `(target, weight)` pairs in ascending target order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfBounds`] for an invalid `u`.
    pub fn neighbors(&self, u: Vertex) -> Result<impl Iterator<Item = (Vertex, Weight)> + '_> {
        self.check_vertex(u)?;
        Ok(self.row(u))
    }

    /// All edges in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.vertex_count)
            .flat_map(move |u| self.row(u).map(move |(v, w)| Edge::new(u, v, w)))
    }

    /// Ensure `v` is a valid vertex index.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfBounds`] otherwise.
    pub fn check_vertex(&self, v: Vertex) -> Result<()> {
        if v >= self.vertex_count {
            return Err(GraphError::VertexOutOfBounds {
                vertex: v,
                vertex_count: self.vertex_count,
            });
        }
        Ok(())
    }

    // ===== Traversal Methods =====

    /// Depth-first traversal from `start`, calling `visit` once per reachable vertex.
    ///
    /// See [`algorithms::dfs`](super::algorithms::dfs) for the visit order.
    pub fn dfs<F: FnMut(Vertex)>(&self, start: Vertex, visit: F) -> Result<()> {
        super::algorithms::dfs(self, start, visit)
    }

    /// Breadth-first traversal from `start`, calling `visit` once per reachable vertex.
    pub fn bfs<F: FnMut(Vertex)>(&self, start: Vertex, visit: F) -> Result<()> {
        super::algorithms::bfs(self, start, visit)
    }

    /// Vertices reachable from `start` in DFS order.
    pub fn dfs_order(&self, start: Vertex) -> Result<Vec<Vertex>> {
        super::algorithms::dfs_order(self, start)
    }

    /// Vertices reachable from `start` in BFS order.
    pub fn bfs_order(&self, start: Vertex) -> Result<Vec<Vertex>> {
        super::algorithms::bfs_order(self, start)
    }

    /// Number of vertices reachable from `start`, `start` included.
    pub fn reachable(&self, start: Vertex) -> Result<usize> {
        super::algorithms::reachable(self, start)
    }

    // ===== Shortest Path Methods =====

    /// Single-source shortest paths from `start`.
    ///
    /// Requires non-negative edge weights.
    ///
    /// # Errors
    ///
    /// See [`shortest_path::dijkstra_into`](super::shortest_path::dijkstra_into).
    pub fn dijkstra(&self, start: Vertex) -> Result<ShortestPaths> {
        super::shortest_path::dijkstra(self, start)
    }

    /// Single-source shortest paths written into caller-owned buffers of length n.
    ///
    /// # Errors
    ///
    /// See [`shortest_path::dijkstra_into`](super::shortest_path::dijkstra_into).
    pub fn dijkstra_into(
        &self,
        start: Vertex,
        dist: &mut [Weight],
        path: &mut [Option<Vertex>],
    ) -> Result<()> {
        super::shortest_path::dijkstra_into(self, start, dist, path)
    }

    /// All-pairs shortest paths.
    ///
    /// # Errors
    ///
    /// See [`shortest_path::floyd_into`](super::shortest_path::floyd_into).
    pub fn floyd(&self) -> Result<AllPairsPaths> {
        super::shortest_path::floyd(self)
    }

    /// All-pairs shortest paths written into caller-owned n×n matrices.
    ///
    /// # Errors
    ///
    /// See [`shortest_path::floyd_into`](super::shortest_path::floyd_into).
    pub fn floyd_into(
        &self,
        dist: &mut [Vec<Weight>],
        path: &mut [Vec<Option<Vertex>>],
    ) -> Result<()> {
        super::shortest_path::floyd_into(self, dist, path)
    }

    /// Raw weight cell, [`INFINITY`] when absent. Indices must be in range.
    pub(crate) fn raw(&self, u: Vertex, v: Vertex) -> Weight {
        self.weights[u * self.vertex_count + v]
    }

    /// Outgoing edges of an in-range vertex.
    pub(crate) fn row(&self, u: Vertex) -> impl Iterator<Item = (Vertex, Weight)> + '_ {
        let n = self.vertex_count;
        self.weights[u * n..(u + 1) * n]
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w != INFINITY)
            .map(|(v, &w)| (v, w))
    }

    fn cell(&self, u: Vertex, v: Vertex) -> Result<usize> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        Ok(u * self.vertex_count + v)
    }

    /// Number of cells an `n`-vertex matrix needs, if it fits the limit.
    fn check_capacity(&self, n: usize) -> Result<usize> {
        let exceeded = GraphError::CapacityExceeded {
            requested: n,
            max: self.config.max_vertices,
        };
        if n > self.config.max_vertices {
            return Err(exceeded);
        }
        n.checked_mul(n).ok_or(exceeded)
    }
}

impl Default for MatrixGraph {
    fn default() -> Self {
        Self::new()
    }
}
