use crate::graph::{Edge, Graph, UndirectedGraph};
use crate::types::Weight;
use crate::union_find::DisjointSets;
use radsort::sort_by_key;
use tracing::debug;

/// Output of [`minimum_spanning_forest`]: the accepted edges in acceptance
/// order, plus their combined weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningForest {
    pub edges: Vec<Edge>,
    pub total_weight: Weight,
}

/// Kruskal's algorithm.
///
/// The graph's logical edges are sorted ascending by weight with a stable
/// radix sort, so equal weights keep their insertion order and the result is
/// deterministic. An edge is accepted iff its endpoints currently have
/// different representatives in a [`DisjointSets`]; acceptance can therefore
/// never close a cycle.
///
/// The scan stops early once `|V| - 1` edges are in, the most a spanning
/// tree can hold. On a disconnected graph the cross-component edges simply
/// run out instead, leaving a spanning forest with `|V| - components` edges.
pub fn minimum_spanning_forest<V>(graph: &UndirectedGraph<V>) -> SpanningForest {
    let mut sets = DisjointSets::with_singletons(graph.vertex_count());

    let mut edges = graph.edges().to_vec();
    sort_by_key(&mut edges, |e| e.weight);

    let mut forest = SpanningForest {
        edges: Vec::new(),
        total_weight: 0,
    };

    for edge in edges {
        if forest.edges.len() + 1 == graph.vertex_count() {
            break;
        }
        if sets.find(edge.beginning) != sets.find(edge.end) {
            sets.union(edge.beginning, edge.end);
            debug!(
                beginning = edge.beginning,
                end = edge.end,
                weight = edge.weight,
                "edge accepted into the forest"
            );
            forest.total_weight += edge.weight;
            forest.edges.push(edge);
        }
    }

    forest
}
