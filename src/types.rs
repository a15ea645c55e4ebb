/// Stable index of a vertex inside a graph's arena.
///
/// Identity is the slot, not the stored value: two vertices holding equal
/// values are still distinct.
pub type VertexId = usize;

/// Edge weight. Unsigned, so "no negative weights" holds by type.
pub type Weight = u64;

/// Distance sentinel for vertices never reached from the source.
pub const INFINITY: Weight = Weight::MAX;
