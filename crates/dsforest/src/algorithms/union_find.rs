//! Union-Find (Disjoint Set) data structure with per-set weights.
//!
//! Union-Find tracks a partition of elements `0..n` into disjoint sets.
//! Supports:
//! - `find(x)`: Find representative of x's set
//! - `union(x, y, w)`: Merge the sets containing x and y, adding `w` to the
//!   merged set's weight
//!
//! Uses path compression and union by rank for near O(1) amortized operations.
//! Every set carries an additive weight stored at its root: the sum of its
//! members' initial weights plus every extra weight passed to `union` on it.

use crate::models::{ComponentId, NodeId, Weight};
use crate::{GraphError, Result};

/// Result of a [`UnionFind::union`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnionOutcome {
    /// Representative of the set after the call.
    pub root: NodeId,
    /// False when both elements were already in the same set.
    pub merged: bool,
}

/// Union-Find data structure with path compression, union by rank and
/// per-set weight accumulation.
#[derive(Debug, Clone, Default)]
pub struct UnionFind {
    /// Parent pointers (parent[i] = parent of node i, or i if root).
    parent: Vec<u32>,
    /// Rank (tree height upper bound) for union by rank.
    rank: Vec<u32>,
    /// Set size, meaningful only at roots.
    size: Vec<u32>,
    /// Set weight, meaningful only at roots.
    weight: Vec<Weight>,
    /// Number of components.
    num_components: usize,
}

impl UnionFind {
    /// Create new Union-Find with n singleton sets of weight zero.
    pub fn new(n: usize) -> Self {
        Self::with_weights(vec![Weight::ZERO; n])
    }

    /// Create one singleton set per initial weight.
    pub fn with_weights(weights: impl IntoIterator<Item = Weight>) -> Self {
        let weight: Vec<Weight> = weights.into_iter().collect();
        let n = weight.len();
        debug_assert!(n <= NodeId::INVALID.index(), "too many elements: {n}");

        Self {
            parent: (0..n as u32).collect(),
            rank: vec![0; n],
            size: vec![1; n],
            weight,
            num_components: n,
        }
    }

    /// Append a new singleton set and return its element.
    pub fn push(&mut self, weight: Weight) -> NodeId {
        let id = NodeId(self.parent.len() as u32);
        debug_assert!(id.is_valid(), "element space exhausted");

        self.parent.push(id.0);
        self.rank.push(0);
        self.size.push(1);
        self.weight.push(weight);
        self.num_components += 1;
        id
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint components.
    pub fn num_components(&self) -> usize {
        self.num_components
    }

    /// Whether `x` is the representative of its own set.
    pub fn is_root(&self, x: NodeId) -> bool {
        self.parent[x.index()] == x.0
    }

    /// Find representative of node's set with path compression.
    ///
    /// # Panics
    ///
    /// Panics if `x` is not an element of the forest.
    pub fn find(&mut self, x: NodeId) -> NodeId {
        let mut root = x.0;

        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        // Point every node on the path directly at the root
        let mut node = x.0;
        while self.parent[node as usize] != root {
            let next = self.parent[node as usize];
            self.parent[node as usize] = root;
            node = next;
        }

        NodeId(root)
    }

    /// Union two sets by rank, adding `extra` to the merged weight.
    ///
    /// The lower-rank root is attached under the higher-rank one; on a tie the
    /// root of `x` survives and its rank grows by one. When `x` and `y` already
    /// share a set nothing is relinked, but `extra` is still added to the
    /// set's weight.
    ///
    /// # Panics
    ///
    /// Panics if either node is not an element of the forest.
    pub fn union(&mut self, x: NodeId, y: NodeId, extra: Weight) -> UnionOutcome {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            self.weight[root_x.index()] += extra;
            return UnionOutcome {
                root: root_x,
                merged: false,
            };
        }

        let rx = self.rank[root_x.index()];
        let ry = self.rank[root_y.index()];

        let (root, child) = if rx < ry {
            (root_y, root_x)
        } else {
            if rx == ry {
                self.rank[root_x.index()] += 1;
            }
            (root_x, root_y)
        };

        self.parent[child.index()] = root.0;
        self.size[root.index()] += self.size[child.index()];
        let merged = self.weight[child.index()] + extra;
        self.weight[root.index()] += merged;

        self.num_components -= 1;
        UnionOutcome { root, merged: true }
    }

    /// Check if two nodes are in the same set.
    pub fn connected(&mut self, x: NodeId, y: NodeId) -> bool {
        self.find(x) == self.find(y)
    }

    /// Accumulated weight of the set containing `x`.
    pub fn weight(&mut self, x: NodeId) -> Weight {
        let root = self.find(x);
        self.weight[root.index()]
    }

    /// Number of elements in the set containing `x`.
    pub fn component_size(&mut self, x: NodeId) -> usize {
        let root = self.find(x);
        self.size[root.index()] as usize
    }

    /// Iterate current set representatives in ascending order.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(i, &p)| p as usize == i)
            .map(|(_, &p)| NodeId(p))
    }

    /// Get component ID for each node.
    ///
    /// Returns a vector where `result[i]` is the component ID of node i.
    /// IDs are assigned 0, 1, 2, ... in order of each component's first member.
    pub fn component_ids(&mut self) -> Vec<ComponentId> {
        let n = self.parent.len();
        let mut comp_id = vec![ComponentId::UNASSIGNED; n];
        let mut next_id = 0u32;

        for i in 0..n {
            let root = self.find(NodeId(i as u32));

            if !comp_id[root.index()].is_assigned() {
                comp_id[root.index()] = ComponentId::new(next_id);
                next_id += 1;
            }

            comp_id[i] = comp_id[root.index()];
        }

        comp_id
    }

    /// Members of every set, indexed by the IDs from [`Self::component_ids`].
    pub fn component_members(&mut self) -> Vec<Vec<NodeId>> {
        let ids = self.component_ids();
        let mut members = vec![Vec::new(); self.num_components];

        for (node, id) in ids.iter().enumerate() {
            members[id.get() as usize].push(NodeId(node as u32));
        }

        members
    }

    /// Check the structural invariants of the forest.
    ///
    /// - rank strictly increases along every parent link
    /// - every root satisfies `size >= 2^rank`
    /// - root sizes match the actual member counts and sum to `len()`
    /// - the number of roots equals `num_components()`
    pub fn validate(&self) -> Result<()> {
        let n = self.parent.len();
        if self.rank.len() != n || self.size.len() != n || self.weight.len() != n {
            return Err(GraphError::CorruptForest(format!(
                "array lengths differ: parent {}, rank {}, size {}, weight {}",
                n,
                self.rank.len(),
                self.size.len(),
                self.weight.len()
            )));
        }

        for (i, &p) in self.parent.iter().enumerate() {
            let p = p as usize;
            if p >= n {
                return Err(GraphError::CorruptForest(format!(
                    "parent of {} is {} (out of range)",
                    i, p
                )));
            }
            if p != i && self.rank[i] >= self.rank[p] {
                return Err(GraphError::CorruptForest(format!(
                    "rank {} of node {} not below rank {} of parent {}",
                    self.rank[i], i, self.rank[p], p
                )));
            }
        }

        // Ranks strictly increase towards the root, so these walks terminate.
        let mut members = vec![0usize; n];
        for i in 0..n {
            let mut root = i;
            while self.parent[root] as usize != root {
                root = self.parent[root] as usize;
            }
            members[root] += 1;
        }

        let mut roots = 0usize;
        let mut total = 0usize;
        for root in self.roots() {
            let r = root.index();
            let size = self.size[r] as usize;
            roots += 1;
            total += size;

            if size != members[r] {
                return Err(GraphError::CorruptForest(format!(
                    "root {} records size {} but has {} members",
                    r, size, members[r]
                )));
            }
            if self.rank[r] >= usize::BITS || (1usize << self.rank[r]) > size {
                return Err(GraphError::CorruptForest(format!(
                    "root {} has rank {} but only {} members",
                    r, self.rank[r], size
                )));
            }
        }

        if total != n {
            return Err(GraphError::CorruptForest(format!(
                "root sizes sum to {} for {} nodes",
                total, n
            )));
        }
        if roots != self.num_components {
            return Err(GraphError::CorruptForest(format!(
                "{} roots but num_components is {}",
                roots, self.num_components
            )));
        }

        Ok(())
    }
}

/// Label the connected components of an undirected edge list.
///
/// Returns one component ID per node, assigned in order of first member.
pub fn connected_components(n: usize, edges: &[(NodeId, NodeId)]) -> Result<Vec<ComponentId>> {
    NodeId::check_capacity(n)?;
    if let Some(bad) = edges
        .iter()
        .flat_map(|&(u, v)| [u, v])
        .find(|node| node.index() >= n)
    {
        return Err(GraphError::InvalidNodeId(bad.get() as u64));
    }

    let mut uf = UnionFind::new(n);
    for &(u, v) in edges {
        uf.union(u, v, Weight::ZERO);
    }

    tracing::debug!(
        nodes = n,
        edges = edges.len(),
        components = uf.num_components(),
        "labeled connected components"
    );

    Ok(uf.component_ids())
}
