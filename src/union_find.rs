use crate::types::VertexId;
use hashbrown::HashMap;

/// Disjoint-set forest over vertex ids.
///
/// Linking is flat: [`DisjointSets::union`] points the first argument's
/// representative directly at the second argument's id, with no rank or size
/// balancing. The trees this builds can get deep; full path compression in
/// [`DisjointSets::find`] flattens them again on every query.
#[derive(Debug, Clone, Default)]
pub struct DisjointSets {
    parent: HashMap<VertexId, VertexId>,
}

impl DisjointSets {
    pub fn new() -> Self {
        DisjointSets {
            parent: HashMap::new(),
        }
    }

    /// One singleton set per id in `0..n`.
    pub fn with_singletons(n: usize) -> Self {
        DisjointSets {
            parent: (0..n).map(|i| (i, i)).collect(),
        }
    }

    /// Makes `x` its own representative unless it is already tracked.
    pub fn insert(&mut self, x: VertexId) {
        self.parent.entry(x).or_insert(x);
    }

    /// Representative of `x`'s set, with full path compression: every id on
    /// the walked chain ends up pointing directly at the root. An untracked
    /// id is inserted as a fresh singleton first.
    pub fn find(&mut self, x: VertexId) -> VertexId {
        self.insert(x);

        let mut root = x;
        while self.parent[&root] != root {
            root = self.parent[&root];
        }

        // second pass re-points the chain at the root
        let mut walk = x;
        while walk != root {
            let next = self.parent[&walk];
            self.parent.insert(walk, root);
            walk = next;
        }

        root
    }

    /// Merges by pointing `x`'s representative at `y` itself, unconditionally.
    ///
    /// `x` and `y` must currently be in different sets; unioning within one
    /// set would close a loop in the parent chain.
    pub fn union(&mut self, x: VertexId, y: VertexId) {
        self.insert(y);
        let root = self.find(x);
        self.parent.insert(root, y);
    }

    /// Whether `x` and `y` share a representative.
    pub fn connected(&mut self, x: VertexId, y: VertexId) -> bool {
        self.find(x) == self.find(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons_are_their_own_representatives() {
        let mut sets = DisjointSets::with_singletons(3);
        for i in 0..3 {
            assert_eq!(sets.find(i), i);
        }
        assert!(!sets.connected(0, 2));
    }

    #[test]
    fn test_union_connects() {
        let mut sets = DisjointSets::with_singletons(4);
        sets.union(0, 1);
        sets.union(2, 3);
        assert!(sets.connected(0, 1));
        assert!(sets.connected(2, 3));
        assert!(!sets.connected(1, 2));
        sets.union(1, 3);
        assert!(sets.connected(0, 2));
    }

    #[test]
    fn test_union_repoints_the_representative_not_the_argument() {
        let mut sets = DisjointSets::with_singletons(3);
        sets.union(0, 1);
        // 0's representative is now 1; this union must carry 1 along too
        sets.union(0, 2);
        assert!(sets.connected(1, 2));
    }

    #[test]
    fn test_path_compression_flattens_chains() {
        let mut sets = DisjointSets::new();
        // build the chain 0 -> 1 -> 2 -> ... -> 999 by hand
        for i in 0..999 {
            sets.insert(i);
            sets.parent.insert(i, i + 1);
        }
        sets.insert(999);
        assert_eq!(sets.find(0), 999);
        // the walked chain now points straight at the root
        assert_eq!(sets.parent[&0], 999);
        assert_eq!(sets.parent[&500], 999);
    }

    #[test]
    fn test_find_tracks_unknown_ids_as_singletons() {
        let mut sets = DisjointSets::new();
        assert_eq!(sets.find(7), 7);
    }
}
