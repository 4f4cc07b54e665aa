//! A disjoint-set forest over dense node indices.

use graph::NodeIndex;

/// Tracks a partition of the indices `0..n` into disjoint sets.
///
/// Each set is a tree of parent links rooted at a representative. `find`
/// compresses the path it walks, and `union` hangs the smaller tree under
/// the larger, so sequences of operations run in near-constant amortized time.
#[derive(Clone, Debug)]
pub struct DisjointSet {
    /// `parent[i]` is `i`'s parent, or `i` itself if `i` is a representative.
    parent: Vec<NodeIndex>,

    /// For representatives, the number of elements in the set. Meaningless for
    /// other elements.
    size: Vec<usize>,

    /// The number of disjoint sets.
    sets: usize
}

impl DisjointSet {
    /// Construct a partition of `0..n` into `n` singleton sets.
    pub fn new(n: usize) -> DisjointSet {
        DisjointSet {
            parent: (0..n).collect(),
            size: vec![1; n],
            sets: n
        }
    }

    /// Return the number of elements being partitioned.
    pub fn len(&self) -> usize { self.parent.len() }

    /// Return the number of disjoint sets remaining.
    pub fn sets(&self) -> usize { self.sets }

    /// Return the representative of the set containing `x`.
    pub fn find(&mut self, x: NodeIndex) -> NodeIndex {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Point everything along the way directly at the root.
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Merge the sets containing `x` and `y`. Return false if they were
    /// already the same set.
    pub fn union(&mut self, x: NodeIndex, y: NodeIndex) -> bool {
        let mut rx = self.find(x);
        let mut ry = self.find(y);
        if rx == ry {
            return false;
        }

        if self.size[rx] < self.size[ry] {
            ::std::mem::swap(&mut rx, &mut ry);
        }
        self.parent[ry] = rx;
        self.size[rx] += self.size[ry];
        self.sets -= 1;
        true
    }

    /// Return true if `x` and `y` are in the same set.
    pub fn connected(&mut self, x: NodeIndex, y: NodeIndex) -> bool {
        self.find(x) == self.find(y)
    }

    /// Return the number of elements in the set containing `x`.
    pub fn set_size(&mut self, x: NodeIndex) -> usize {
        let root = self.find(x);
        self.size[root]
    }
}
