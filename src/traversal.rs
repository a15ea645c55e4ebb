use crate::graph::{Graph, GraphError};
use crate::types::VertexId;
use fixedbitset::FixedBitSet;
use std::collections::VecDeque;
use tracing::trace;

/// Breadth-first search for a vertex whose value equals `target`.
///
/// The search restarts from every not-yet-visited vertex in id order, so
/// disconnected graphs are fully covered. A vertex is marked visited when it
/// is enqueued, which keeps it from ever being queued twice; its value is
/// checked when it is dequeued. O(V + E) time, O(V) auxiliary space.
///
/// Returns `Ok(None)` when no vertex matches. The only error is a dangling
/// edge end in a [`crate::DirectedGraph`].
pub fn bfs<V, G>(graph: &G, target: &V) -> Result<Option<VertexId>, GraphError>
where
    V: PartialEq,
    G: Graph<V>,
{
    let mut visited = FixedBitSet::with_capacity(graph.vertex_count());
    let mut queue = VecDeque::new();

    for root in 0..graph.vertex_count() {
        if visited.contains(root) {
            continue;
        }
        visited.insert(root);
        queue.push_back(root);

        while let Some(current) = queue.pop_front() {
            if graph.vertices()[current].value == *target {
                trace!(current, "bfs found target");
                return Ok(Some(current));
            }
            for edge in graph.vertex_edges(current)? {
                if !graph.contains(edge.end) {
                    return Err(GraphError::UnknownVertex(edge.end));
                }
                if !visited.contains(edge.end) {
                    visited.insert(edge.end);
                    queue.push_back(edge.end);
                }
            }
        }
    }

    Ok(None)
}

/// Depth-first search with an explicit stack, marking on pop.
///
/// Neighbors are pushed unconditionally, so the stack may hold duplicates;
/// an already-visited vertex is skipped when popped. One visited set is
/// shared across the restarts over unvisited roots. Same contract and
/// complexity as [`bfs`].
pub fn dfs<V, G>(graph: &G, target: &V) -> Result<Option<VertexId>, GraphError>
where
    V: PartialEq,
    G: Graph<V>,
{
    let mut visited = FixedBitSet::with_capacity(graph.vertex_count());
    let mut stack = Vec::new();

    for root in 0..graph.vertex_count() {
        if visited.contains(root) {
            continue;
        }
        stack.push(root);

        while let Some(current) = stack.pop() {
            if visited.contains(current) {
                continue;
            }
            visited.insert(current);

            if graph.vertices()[current].value == *target {
                trace!(current, "dfs found target");
                return Ok(Some(current));
            }
            for edge in graph.vertex_edges(current)? {
                if !graph.contains(edge.end) {
                    return Err(GraphError::UnknownVertex(edge.end));
                }
                stack.push(edge.end);
            }
        }
    }

    Ok(None)
}

/// Depth-first search in recursive pre-order, without recursion.
///
/// Visits vertices in exactly the order the recursive formulation would:
/// mark and check a vertex on first entry, then descend into its first
/// unvisited neighbor. The call stack is replaced by a frame stack of
/// `(vertex, next edge index)` pairs, so arbitrarily deep graphs cannot
/// exhaust the real stack. Same contract and complexity as [`bfs`].
pub fn dfs_preorder<V, G>(graph: &G, target: &V) -> Result<Option<VertexId>, GraphError>
where
    V: PartialEq,
    G: Graph<V>,
{
    let mut visited = FixedBitSet::with_capacity(graph.vertex_count());
    let mut frames: Vec<(VertexId, usize)> = Vec::new();

    for root in 0..graph.vertex_count() {
        if visited.contains(root) {
            continue;
        }
        visited.insert(root);
        if graph.vertices()[root].value == *target {
            return Ok(Some(root));
        }
        frames.push((root, 0));

        while let Some(frame) = frames.last_mut() {
            let current = frame.0;
            let next = frame.1;
            frame.1 += 1;

            let edges = graph.vertex_edges(current)?;
            if next >= edges.len() {
                frames.pop();
                continue;
            }
            let edge = edges[next];
            if !graph.contains(edge.end) {
                return Err(GraphError::UnknownVertex(edge.end));
            }
            if !visited.contains(edge.end) {
                visited.insert(edge.end);
                if graph.vertices()[edge.end].value == *target {
                    trace!(found = edge.end, "preorder dfs found target");
                    return Ok(Some(edge.end));
                }
                frames.push((edge.end, 0));
            }
        }
    }

    Ok(None)
}
