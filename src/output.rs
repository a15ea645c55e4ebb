use crate::graph::{DirectedGraph, Graph, UndirectedGraph};
use std::fmt::Display;

/// Returns a directed graph in DOT format.
///
/// Vertex labels are the stored values, not the internal ids. Edge weights
/// become edge labels.
///
/// Intended to be used with `dot`.
pub fn draw_directed<V: Display>(graph: &DirectedGraph<V>) -> String {
    let mut output = String::from("digraph {\n");
    output.push_str("  node [shape=circle, style=filled, fillcolor=lightblue];\n");

    for (id, vertex) in graph.vertices().iter().enumerate() {
        output.push_str(&format!("  {} [label=\"{}\"];\n", id, vertex.value));
    }

    for id in 0..graph.vertex_count() {
        let Ok(edges) = graph.vertex_edges(id) else {
            continue;
        };
        for edge in edges {
            output.push_str(&format!(
                "  {} -> {} [label=\"{}\"];\n",
                edge.beginning, edge.end, edge.weight
            ));
        }
    }
    output.push_str("}\n");
    output
}

/// Returns an undirected graph in DOT format.
///
/// Each logical edge is drawn once even though the adjacency lists store it
/// in both directions.
///
/// Intended to be used with `neato`.
pub fn draw_undirected<V: Display>(graph: &UndirectedGraph<V>) -> String {
    let mut output = String::from("graph {\n");
    output.push_str("  node [shape=circle, style=filled, fillcolor=lightblue];\n");

    for (id, vertex) in graph.vertices().iter().enumerate() {
        output.push_str(&format!("  {} [label=\"{}\"];\n", id, vertex.value));
    }

    for edge in graph.edges() {
        output.push_str(&format!(
            "  {} -- {} [label=\"{}\"];\n",
            edge.beginning, edge.end, edge.weight
        ));
    }
    output.push_str("}\n");
    output
}

/// Writes a string to a file.
pub fn to_file(content: &str, path: &str) -> std::io::Result<()> {
    std::fs::write(path, content)
}
