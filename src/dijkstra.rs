use crate::graph::{Graph, GraphError};
use crate::types::{INFINITY, VertexId, Weight};
use fixedbitset::FixedBitSet;
use tracing::trace;

/// Single-source shortest paths, as a distance table indexed by [`VertexId`].
///
/// Distances start at [`INFINITY`] everywhere except 0 at the source. Each
/// round settles the unvisited vertex with the smallest tentative distance
/// (a linear scan, lowest id on ties) and relaxes its outgoing edges toward
/// still-unvisited neighbors. Relaxation uses saturating addition so the
/// sentinel never wraps; vertices unreachable from `source` keep it.
///
/// The linear scan makes the whole run O(V² + E). A heap would only change
/// the running time, never a distance. Fails only for an unknown `source` or
/// a dangling edge end.
pub fn shortest_paths<V, G>(graph: &G, source: VertexId) -> Result<Vec<Weight>, GraphError>
where
    G: Graph<V>,
{
    if !graph.contains(source) {
        return Err(GraphError::UnknownVertex(source));
    }

    let mut distances = vec![INFINITY; graph.vertex_count()];
    distances[source] = 0;
    let mut visited = FixedBitSet::with_capacity(graph.vertex_count());

    for _ in 0..graph.vertex_count() {
        let current = (0..graph.vertex_count())
            .filter(|&v| !visited.contains(v))
            .min_by_key(|&v| distances[v])
            .expect("one unvisited vertex per round");
        visited.insert(current);
        trace!(current, distance = distances[current], "vertex settled");

        for edge in graph.vertex_edges(current)? {
            if !graph.contains(edge.end) {
                return Err(GraphError::UnknownVertex(edge.end));
            }
            if visited.contains(edge.end) {
                continue;
            }
            let relaxed = distances[current].saturating_add(edge.weight);
            if relaxed < distances[edge.end] {
                distances[edge.end] = relaxed;
            }
        }
    }

    Ok(distances)
}
