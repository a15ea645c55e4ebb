use crate::types::{VertexId, Weight};
use thiserror::Error;

/// Error kind for lookups into a graph.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// The id does not address any vertex in this graph.
    #[error("unknown vertex id {0}")]
    UnknownVertex(VertexId),
}

/// An arena entry holding a vertex value.
///
/// Vertices are owned by their graph and addressed by [`VertexId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex<V> {
    pub value: V,
}

/// A directed, weighted connection between two vertex slots.
///
/// Immutable once created. An undirected edge is represented as two of these,
/// see [`UndirectedGraph::add_edge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub beginning: VertexId,
    pub end: VertexId,
    pub weight: Weight,
}

impl Edge {
    /// Edge with the default weight of 1.
    pub fn new(beginning: VertexId, end: VertexId) -> Self {
        Edge::weighted(beginning, end, 1)
    }

    pub fn weighted(beginning: VertexId, end: VertexId, weight: Weight) -> Self {
        Edge {
            beginning,
            end,
            weight,
        }
    }

    /// Same connection, opposite direction.
    fn reversed(&self) -> Self {
        Edge {
            beginning: self.end,
            end: self.beginning,
            weight: self.weight,
        }
    }
}

/// Read surface shared by [`DirectedGraph`] and [`UndirectedGraph`].
///
/// This is all the search and shortest-path algorithms need; mutation stays
/// on the concrete types.
pub trait Graph<V> {
    fn vertex_count(&self) -> usize;

    /// All vertices, in insertion order.
    fn vertices(&self) -> &[Vertex<V>];

    fn vertex(&self, id: VertexId) -> Result<&Vertex<V>, GraphError>;

    /// Outgoing edges of `id`, in insertion order.
    fn vertex_edges(&self, id: VertexId) -> Result<&[Edge], GraphError>;

    /// Whether `id` addresses a vertex of this graph.
    fn contains(&self, id: VertexId) -> bool {
        id < self.vertex_count()
    }
}

/// Arena of vertices plus one outgoing edge list per vertex.
#[derive(Debug, Clone)]
struct AdjacencyList<V> {
    vertices: Vec<Vertex<V>>,
    edges: Vec<Vec<Edge>>,
}

impl<V> AdjacencyList<V> {
    fn new() -> Self {
        AdjacencyList {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    fn add_vertex(&mut self, value: V) -> VertexId {
        self.vertices.push(Vertex { value });
        self.edges.push(Vec::new());
        self.vertices.len() - 1
    }

    fn contains(&self, id: VertexId) -> bool {
        id < self.vertices.len()
    }

    fn vertex(&self, id: VertexId) -> Result<&Vertex<V>, GraphError> {
        self.vertices.get(id).ok_or(GraphError::UnknownVertex(id))
    }

    fn vertex_edges(&self, id: VertexId) -> Result<&[Edge], GraphError> {
        self.edges
            .get(id)
            .map(Vec::as_slice)
            .ok_or(GraphError::UnknownVertex(id))
    }
}

/// Directed graph stored as an adjacency list.
#[derive(Debug, Clone)]
pub struct DirectedGraph<V> {
    inner: AdjacencyList<V>,
}

impl<V> DirectedGraph<V> {
    pub fn new() -> Self {
        DirectedGraph {
            inner: AdjacencyList::new(),
        }
    }

    /// Allocates a fresh vertex slot and returns its id. Every call creates a
    /// new vertex, even for a value already present in the graph.
    pub fn add_vertex(&mut self, value: V) -> VertexId {
        self.inner.add_vertex(value)
    }

    /// Appends `edge` to its `beginning` vertex's list.
    ///
    /// If `beginning` is unknown the edge is silently dropped and `false` is
    /// returned; no error is raised. `end` is not checked here, so a dangling
    /// edge surfaces later as a [`GraphError::UnknownVertex`] from whichever
    /// algorithm walks into it.
    pub fn add_edge(&mut self, edge: Edge) -> bool {
        if !self.inner.contains(edge.beginning) {
            return false;
        }
        self.inner.edges[edge.beginning].push(edge);
        true
    }
}

impl<V> Default for DirectedGraph<V> {
    fn default() -> Self {
        DirectedGraph::new()
    }
}

impl<V> Graph<V> for DirectedGraph<V> {
    fn vertex_count(&self) -> usize {
        self.inner.vertices.len()
    }

    fn vertices(&self) -> &[Vertex<V>] {
        &self.inner.vertices
    }

    fn vertex(&self, id: VertexId) -> Result<&Vertex<V>, GraphError> {
        self.inner.vertex(id)
    }

    fn vertex_edges(&self, id: VertexId) -> Result<&[Edge], GraphError> {
        self.inner.vertex_edges(id)
    }
}

/// Undirected graph stored as an adjacency list.
///
/// Each logical edge is stored twice, once per direction, so the adjacency
/// lists can be walked exactly like a directed graph's. The logical edges are
/// additionally kept once each, in insertion order and original orientation,
/// for consumers like [`crate::kruskal::minimum_spanning_forest`] that must
/// not see the doubled records.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<V> {
    inner: AdjacencyList<V>,
    logical: Vec<Edge>,
}

impl<V> UndirectedGraph<V> {
    pub fn new() -> Self {
        UndirectedGraph {
            inner: AdjacencyList::new(),
            logical: Vec::new(),
        }
    }

    /// Allocates a fresh vertex slot and returns its id.
    pub fn add_vertex(&mut self, value: V) -> VertexId {
        self.inner.add_vertex(value)
    }

    /// Appends `edge` to `beginning`'s list and its reverse to `end`'s list.
    ///
    /// Both endpoints must already be vertices of the graph; otherwise
    /// nothing is inserted in either direction and `false` is returned.
    pub fn add_edge(&mut self, edge: Edge) -> bool {
        if !self.inner.contains(edge.beginning) || !self.inner.contains(edge.end) {
            return false;
        }
        self.inner.edges[edge.beginning].push(edge);
        self.inner.edges[edge.end].push(edge.reversed());
        self.logical.push(edge);
        true
    }

    /// The logical edges, each once, in insertion order and as-inserted
    /// orientation.
    pub fn edges(&self) -> &[Edge] {
        &self.logical
    }
}

impl<V> Default for UndirectedGraph<V> {
    fn default() -> Self {
        UndirectedGraph::new()
    }
}

impl<V> Graph<V> for UndirectedGraph<V> {
    fn vertex_count(&self) -> usize {
        self.inner.vertices.len()
    }

    fn vertices(&self) -> &[Vertex<V>] {
        &self.inner.vertices
    }

    fn vertex(&self, id: VertexId) -> Result<&Vertex<V>, GraphError> {
        self.inner.vertex(id)
    }

    fn vertex_edges(&self, id: VertexId) -> Result<&[Edge], GraphError> {
        self.inner.vertex_edges(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_vertex_allocates_sequential_ids() {
        let mut g = DirectedGraph::new();
        assert_eq!(g.add_vertex('a'), 0);
        assert_eq!(g.add_vertex('b'), 1);
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.vertices()[1].value, 'b');
    }

    #[test]
    fn test_equal_values_are_distinct_vertices() {
        let mut g = DirectedGraph::new();
        let first = g.add_vertex('x');
        let second = g.add_vertex('x');
        assert_ne!(first, second);
        assert_eq!(g.vertex_count(), 2);
    }

    #[test]
    fn test_vertex_edges_unknown_id() {
        let mut g = DirectedGraph::new();
        g.add_vertex('a');
        assert_eq!(g.vertex_edges(5), Err(GraphError::UnknownVertex(5)));
        assert_eq!(g.vertex(5), Err(GraphError::UnknownVertex(5)));
    }

    #[test]
    fn test_directed_add_edge_unknown_beginning_is_dropped() {
        let mut g = DirectedGraph::new();
        let a = g.add_vertex('a');
        assert!(!g.add_edge(Edge::new(7, a)));
        assert!(g.vertex_edges(a).unwrap().is_empty());
    }

    #[test]
    fn test_directed_add_edge_does_not_check_end() {
        let mut g = DirectedGraph::new();
        let a = g.add_vertex('a');
        assert!(g.add_edge(Edge::new(a, 7)));
        assert_eq!(g.vertex_edges(a).unwrap(), &[Edge::new(a, 7)]);
    }

    #[test]
    fn test_undirected_add_edge_stores_both_directions() {
        let mut g = UndirectedGraph::new();
        let a = g.add_vertex('a');
        let b = g.add_vertex('b');
        assert!(g.add_edge(Edge::weighted(a, b, 4)));
        assert_eq!(g.vertex_edges(a).unwrap(), &[Edge::weighted(a, b, 4)]);
        assert_eq!(g.vertex_edges(b).unwrap(), &[Edge::weighted(b, a, 4)]);
        assert_eq!(g.edges(), &[Edge::weighted(a, b, 4)]);
    }

    #[test]
    fn test_undirected_add_edge_missing_endpoint_inserts_nothing() {
        let mut g = UndirectedGraph::new();
        let a = g.add_vertex('a');
        assert!(!g.add_edge(Edge::new(a, 9)));
        assert!(!g.add_edge(Edge::new(9, a)));
        assert!(g.vertex_edges(a).unwrap().is_empty());
        assert!(g.edges().is_empty());
    }

    #[test]
    fn test_edge_default_weight_is_one() {
        assert_eq!(Edge::new(0, 1).weight, 1);
    }
}
