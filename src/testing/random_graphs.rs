use crate::graph::{Edge, UndirectedGraph};
use crate::types::Weight;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Random connected undirected graph with `n` vertices, roughly `m` edges
/// and weights in `1..=max_weight`. Deterministic for a given seed.
///
/// The first `n - 1` edges form a random spanning backbone, so the graph is
/// connected; the rest are uniform vertex pairs and may produce parallel
/// edges or self-loops.
pub fn random_connected_graph(n: usize, m: usize, max_weight: Weight, seed: u64) -> UndirectedGraph<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = UndirectedGraph::new();

    for i in 0..n {
        graph.add_vertex(i);
        if i > 0 {
            let j = rng.random_range(0..i);
            graph.add_edge(Edge::weighted(i, j, rng.random_range(1..=max_weight)));
        }
    }

    for _ in n - 1..m {
        let s = rng.random_range(0..n);
        let t = rng.random_range(0..n);
        graph.add_edge(Edge::weighted(s, t, rng.random_range(1..=max_weight)));
    }

    graph
}
