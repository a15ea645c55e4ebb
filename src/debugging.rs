use dot::{Edges, GraphWalk, Labeller, Nodes};
use std::fmt::Display;

use crate::graph::{Graph, Vertex};
use crate::types::{INFINITY, Weight};

type Node = usize;

#[derive(Debug, Clone)]
struct Edge {
    source: Node,
    target: Node,
    weight: Weight,
}

struct Annotated<'a, V> {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    vertices: &'a [Vertex<V>],
    distances: &'a [Weight],
}

impl<'a, V: Display> Labeller<'a, Node, Edge> for Annotated<'a, V> {
    fn graph_id(&self) -> dot::Id<'_> {
        dot::Id::new("G").unwrap()
    }

    fn node_id(&self, n: &Node) -> dot::Id<'_> {
        dot::Id::new(format!("N{}", n)).unwrap()
    }

    fn node_label(&self, n: &Node) -> dot::LabelText<'a> {
        let distance = if self.distances[*n] == INFINITY {
            "inf".to_string()
        } else {
            self.distances[*n].to_string()
        };
        dot::LabelText::label(format!("{}\ndist:{}", self.vertices[*n].value, distance))
    }

    fn edge_label(&self, e: &Edge) -> dot::LabelText<'a> {
        dot::LabelText::label(format!("{}", e.weight))
    }
}

impl<'a, V> GraphWalk<'a, Node, Edge> for Annotated<'a, V> {
    fn nodes(&self) -> Nodes<'_, Node> {
        self.nodes.iter().cloned().collect()
    }

    fn edges(&self) -> Edges<'_, Edge> {
        self.edges.as_slice().into()
    }

    fn source(&self, e: &Edge) -> Node {
        e.source
    }

    fn target(&self, e: &Edge) -> Node {
        e.target
    }
}

/// Renders the graph with a distance table attached to every vertex, as
/// produced by [`crate::dijkstra::shortest_paths`]. Handy for eyeballing a
/// run on a graph that misbehaves.
pub fn draw_with_distances<V: Display>(graph: &impl Graph<V>, distances: &[Weight]) -> String {
    let mut annotated = Annotated {
        nodes: (0..graph.vertex_count()).collect(),
        edges: Vec::new(),
        vertices: graph.vertices(),
        distances,
    };

    for id in 0..graph.vertex_count() {
        let Ok(edges) = graph.vertex_edges(id) else {
            continue;
        };
        for edge in edges {
            annotated.edges.push(Edge {
                source: edge.beginning,
                target: edge.end,
                weight: edge.weight,
            });
        }
    }

    let mut buffer = std::io::Cursor::new(Vec::new());
    dot::render(&annotated, &mut buffer).unwrap();
    String::from_utf8(buffer.into_inner()).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dijkstra::shortest_paths;
    use crate::graph::{DirectedGraph, Edge};

    #[test]
    fn test_draw_with_distances() {
        let mut g = DirectedGraph::new();
        let a = g.add_vertex('a');
        let b = g.add_vertex('b');
        g.add_vertex('c'); // unreachable
        g.add_edge(Edge::weighted(a, b, 3));

        let distances = shortest_paths(&g, a).unwrap();
        let rendered = draw_with_distances(&g, &distances);
        assert!(rendered.contains("dist:0"));
        assert!(rendered.contains("dist:3"));
        assert!(rendered.contains("dist:inf"));
    }
}
