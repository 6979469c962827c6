//! Kruskal's minimum spanning tree algorithm.
//!
//! Edges are scanned in ascending weight order; an edge is accepted when its
//! endpoints lie in different trees of the forest built so far. Tree
//! membership is tracked with [`UnionFind`], whose per-set weight doubles as
//! the running weight of each tree.
//!
//! On a disconnected graph the result is a minimum spanning forest with one
//! tree per connected component.

use crate::algorithms::union_find::UnionFind;
use crate::models::{ComponentId, EdgeList, NodeId, Weight, WeightedEdge};
use crate::{GraphError, Result};

/// Kruskal configuration.
#[derive(Debug, Clone, Default)]
pub struct KruskalConfig {
    /// Stop after accepting this many edges.
    pub max_edges: Option<usize>,
    /// Fail unless the result is a single tree.
    pub require_spanning_tree: bool,
}

impl KruskalConfig {
    /// Create new Kruskal configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept at most `max` edges.
    ///
    /// Stopping after `n - k` edges leaves `k` trees, i.e. a single-linkage
    /// clustering into `k` groups.
    pub fn with_max_edges(mut self, max: usize) -> Self {
        self.max_edges = Some(max);
        self
    }

    /// Fail with [`GraphError::Disconnected`] unless one tree spans every node.
    pub fn with_spanning_tree_required(mut self) -> Self {
        self.require_spanning_tree = true;
        self
    }
}

/// Result of a Kruskal run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningForest {
    /// Accepted edges in acceptance (ascending weight) order.
    pub edges: Vec<WeightedEdge>,
    /// Sum of accepted edge weights.
    pub total_weight: Weight,
    /// Number of trees, counting isolated vertices.
    pub num_trees: usize,
    /// Tree label of every vertex.
    pub labels: Vec<ComponentId>,
    /// Weight of each tree, indexed by label.
    pub tree_weights: Vec<Weight>,
}

impl SpanningForest {
    /// Number of vertices covered.
    pub fn num_nodes(&self) -> usize {
        self.labels.len()
    }

    /// Whether one tree spans every vertex.
    pub fn is_spanning_tree(&self) -> bool {
        self.num_trees == 1
    }

    /// Members of each tree, indexed by label.
    pub fn trees(&self) -> Vec<Vec<NodeId>> {
        let mut members = vec![Vec::new(); self.num_trees];
        for (node, label) in self.labels.iter().enumerate() {
            members[label.get() as usize].push(NodeId(node as u32));
        }
        members
    }
}

/// Run Kruskal's algorithm with the given configuration.
///
/// Self-loops are never accepted. Among equal-weight edges the earlier one
/// in `edges` wins.
pub fn kruskal(edges: &EdgeList, config: &KruskalConfig) -> Result<SpanningForest> {
    edges.validate()?;

    let n = edges.num_nodes;
    if n == 0 && config.require_spanning_tree {
        return Err(GraphError::EmptyGraph);
    }

    let limit = config
        .max_edges
        .map_or(n.saturating_sub(1), |max| max.min(n.saturating_sub(1)));

    let mut forest = UnionFind::new(n);
    let mut accepted = Vec::with_capacity(limit);
    let mut total_weight = Weight::ZERO;
    let mut scanned = 0usize;

    for edge in edges.sorted_by_weight() {
        if accepted.len() >= limit {
            break;
        }
        scanned += 1;

        if forest.connected(edge.source, edge.target) {
            continue;
        }

        forest.union(edge.source, edge.target, edge.weight);
        total_weight += edge.weight;
        tracing::trace!(
            source = edge.source.get(),
            target = edge.target.get(),
            weight = edge.weight.get(),
            "accepted edge"
        );
        accepted.push(edge);
    }

    let num_trees = forest.num_components();
    tracing::debug!(
        nodes = n,
        edges = edges.len(),
        scanned,
        accepted = accepted.len(),
        trees = num_trees,
        total_weight = total_weight.get(),
        "kruskal finished"
    );

    if config.require_spanning_tree && num_trees > 1 {
        return Err(GraphError::Disconnected {
            components: num_trees,
        });
    }

    let labels = forest.component_ids();
    let roots: Vec<NodeId> = forest.roots().collect();
    let mut tree_weights = vec![Weight::ZERO; num_trees];
    for root in roots {
        tree_weights[labels[root.index()].get() as usize] = forest.weight(root);
    }

    Ok(SpanningForest {
        edges: accepted,
        total_weight,
        num_trees,
        labels,
        tree_weights,
    })
}

/// Minimum spanning tree of a connected graph.
///
/// Fails with [`GraphError::EmptyGraph`] for zero vertices and
/// [`GraphError::Disconnected`] when no single tree spans the graph.
pub fn minimum_spanning_tree(edges: &EdgeList) -> Result<SpanningForest> {
    kruskal(edges, &KruskalConfig::new().with_spanning_tree_required())
}
