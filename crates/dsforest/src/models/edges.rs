//! Weighted undirected edge lists.
//!
//! Kruskal only ever scans edges in weight order, so the graph is kept as a
//! flat list rather than an adjacency structure:
//! - `num_nodes` fixes the vertex set `0..num_nodes`
//! - `edges` holds each undirected edge exactly once, in insertion order

use super::node::{NodeId, Weight};
use crate::{GraphError, Result};

/// A single undirected weighted edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeightedEdge {
    /// First endpoint.
    pub source: NodeId,
    /// Second endpoint.
    pub target: NodeId,
    /// Edge weight.
    pub weight: Weight,
}

impl WeightedEdge {
    /// Create a new edge.
    pub const fn new(source: NodeId, target: NodeId, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Whether both endpoints are the same vertex.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl From<(u32, u32, u64)> for WeightedEdge {
    fn from((source, target, weight): (u32, u32, u64)) -> Self {
        Self::new(NodeId(source), NodeId(target), Weight(weight))
    }
}

/// Undirected weighted edge list over vertices `0..num_nodes`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeList {
    /// Number of vertices.
    pub num_nodes: usize,
    /// Edges in insertion order.
    pub edges: Vec<WeightedEdge>,
}

impl EdgeList {
    /// Create an edge list with no edges.
    pub fn empty(num_nodes: usize) -> Self {
        Self {
            num_nodes,
            edges: Vec::new(),
        }
    }

    /// Create from `(source, target, weight)` triples.
    ///
    /// # Example
    ///
    /// ```
    /// use dsforest::EdgeList;
    ///
    /// // Path 0 - 1 - 2
    /// let edges = EdgeList::from_edges(3, &[(0, 1, 4), (1, 2, 7)]);
    /// assert_eq!(edges.len(), 2);
    /// ```
    pub fn from_edges(num_nodes: usize, edges: &[(u32, u32, u64)]) -> Self {
        EdgeListBuilder::new(num_nodes).with_edges(edges).build()
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Check if there are no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterate edges in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &WeightedEdge> {
        self.edges.iter()
    }

    /// Sum of all edge weights (saturating).
    pub fn total_weight(&self) -> Weight {
        self.edges.iter().map(|e| e.weight).sum()
    }

    /// Edges sorted by ascending weight. Equal weights keep insertion order.
    pub fn sorted_by_weight(&self) -> Vec<WeightedEdge> {
        let mut sorted = self.edges.clone();
        sorted.sort_by_key(|e| e.weight);
        sorted
    }

    /// Validate that every endpoint is inside `0..num_nodes`.
    pub fn validate(&self) -> Result<()> {
        NodeId::check_capacity(self.num_nodes)?;

        for (i, edge) in self.edges.iter().enumerate() {
            for endpoint in [edge.source, edge.target] {
                if endpoint.index() >= self.num_nodes {
                    tracing::trace!(edge = i, node = endpoint.get(), "endpoint out of range");
                    return Err(GraphError::InvalidNodeId(endpoint.get() as u64));
                }
            }
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a EdgeList {
    type Item = &'a WeightedEdge;
    type IntoIter = std::slice::Iter<'a, WeightedEdge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

/// Builder for edge lists.
#[derive(Debug, Default)]
pub struct EdgeListBuilder {
    num_nodes: usize,
    edges: Vec<WeightedEdge>,
}

impl EdgeListBuilder {
    /// Create new builder with given number of nodes.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            num_nodes,
            edges: Vec::new(),
        }
    }

    /// Add edges from slice.
    pub fn with_edges(mut self, edges: &[(u32, u32, u64)]) -> Self {
        self.edges.extend(edges.iter().copied().map(WeightedEdge::from));
        self
    }

    /// Add a single edge.
    pub fn add_edge(&mut self, source: u32, target: u32, weight: u64) {
        self.edges.push((source, target, weight).into());
    }

    /// Add a single typed edge.
    pub fn push(&mut self, edge: WeightedEdge) {
        self.edges.push(edge);
    }

    /// Number of edges collected so far.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Check if no edges have been collected.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Build the edge list.
    pub fn build(self) -> EdgeList {
        EdgeList {
            num_nodes: self.num_nodes,
            edges: self.edges,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list() {
        let edges = EdgeList::empty(5);
        assert_eq!(edges.num_nodes, 5);
        assert_eq!(edges.len(), 0);
        assert!(edges.is_empty());
        assert!(edges.validate().is_ok());
    }

    #[test]
    fn test_from_edges() {
        let edges = EdgeList::from_edges(4, &[(0, 1, 3), (1, 2, 1), (1, 3, 2)]);

        assert_eq!(edges.num_nodes, 4);
        assert_eq!(edges.len(), 3);
        assert_eq!(edges.total_weight(), Weight(6));
        assert!(edges.validate().is_ok());
    }

    #[test]
    fn test_sorted_by_weight_is_stable() {
        let edges = EdgeList::from_edges(4, &[(0, 1, 5), (1, 2, 2), (2, 3, 5), (3, 0, 2)]);
        let sorted = edges.sorted_by_weight();

        let order: Vec<_> = sorted.iter().map(|e| (e.source.get(), e.target.get())).collect();
        assert_eq!(order, vec![(1, 2), (3, 0), (0, 1), (2, 3)]);
    }

    #[test]
    fn test_builder() {
        let mut builder = EdgeListBuilder::new(4);
        builder.add_edge(0, 1, 1);
        builder.push(WeightedEdge::new(NodeId(2), NodeId(3), Weight(9)));
        assert_eq!(builder.len(), 2);

        let edges = builder.build();
        assert_eq!(edges.len(), 2);
        assert_eq!(edges.edges[1].target, NodeId(3));
    }

    #[test]
    fn test_validation() {
        let invalid = EdgeList::from_edges(3, &[(0, 1, 1), (1, 10, 1)]);
        assert!(matches!(
            invalid.validate(),
            Err(GraphError::InvalidNodeId(10))
        ));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_validation_rejects_oversized_vertex_set() {
        let huge = EdgeList::empty(NodeId::MAX_NODES + 1);
        assert!(matches!(huge.validate(), Err(GraphError::TooManyNodes(_))));
    }

    #[test]
    fn test_self_loop() {
        let edge = WeightedEdge::from((2, 2, 4));
        assert!(edge.is_self_loop());
        assert!(!WeightedEdge::from((1, 2, 4)).is_self_loop());
    }
}
