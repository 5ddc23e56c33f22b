//! Core graph types: vertices, weights, edges and the no-edge sentinel.

/// Index of a vertex, in `[0, vertex_count)`.
pub type Vertex = usize;

/// Weight of a directed edge. Zero and negative weights are legal.
pub type Weight = i64;

/// No-edge sentinel and "unreachable" distance.
///
/// Never a legal edge weight: [`MatrixGraph::link`](crate::MatrixGraph::link)
/// rejects it. Distance sums never produce it either, since every addition
/// is checked and skipped on overflow.
pub const INFINITY: Weight = Weight::MAX;

/// A directed, weighted edge as reported by [`MatrixGraph::edges`](crate::MatrixGraph::edges).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Source vertex
    pub from: Vertex,
    /// Target vertex
    pub to: Vertex,
    /// Edge weight
    pub weight: Weight,
}

impl Edge {
    /// Create a new edge.
    pub fn new(from: Vertex, to: Vertex, weight: Weight) -> Self {
        Self { from, to, weight }
    }

    /// Whether the edge starts and ends at the same vertex.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

impl From<(Vertex, Vertex, Weight)> for Edge {
    fn from((from, to, weight): (Vertex, Vertex, Weight)) -> Self {
        Self::new(from, to, weight)
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.weight)
    }
}

/// Add two distances, returning `None` if either is [`INFINITY`] or the sum
/// overflows.
pub(crate) fn add_distance(a: Weight, b: Weight) -> Option<Weight> {
    if a == INFINITY || b == INFINITY {
        return None;
    }
    a.checked_add(b).filter(|&sum| sum != INFINITY)
}
