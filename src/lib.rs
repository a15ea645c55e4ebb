// #![warn(missing_docs)]

//! # adjlist
//!
//! Weighted directed and undirected graphs stored as adjacency lists, with
//! the classic algorithms on top: breadth- and depth-first search, Kruskal
//! minimum spanning forests and Dijkstra shortest paths.
//!
//! Vertices live in an arena owned by the graph and are addressed by stable
//! [`VertexId`] indices; adjacency lists store ids, never references. The
//! algorithms keep their visitation state per call, so `&graph` is all they
//! borrow and nothing leaks between runs.
//!
//! ```
//! use adjlist::{DirectedGraph, Edge, traversal};
//!
//! let mut g = DirectedGraph::new();
//! let a = g.add_vertex("a");
//! let b = g.add_vertex("b");
//! g.add_edge(Edge::new(a, b));
//! assert_eq!(traversal::bfs(&g, &"b").unwrap(), Some(b));
//! assert_eq!(traversal::bfs(&g, &"z").unwrap(), None);
//! ```

pub mod debugging;
pub mod dijkstra;
pub mod graph;
pub mod kruskal;
pub mod output;
pub mod testing;
pub mod traversal;
pub mod types;
pub mod union_find;

pub use graph::{DirectedGraph, Edge, Graph, GraphError, UndirectedGraph, Vertex};
pub use types::{INFINITY, VertexId, Weight};
