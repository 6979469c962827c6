//! Weighted disjoint-set forests and Kruskal spanning trees.
//!
//! This crate provides:
//!
//! - **Union-Find**: disjoint set forest with union by rank, path compression,
//!   and a per-set additive weight
//! - **Component weights**: replay of unite/query command streams
//! - **Kruskal**: minimum spanning tree (or forest) over a weighted edge list
//!
//! # Example
//!
//! ```
//! use dsforest::{minimum_spanning_tree, EdgeList, NodeId, UnionFind, Weight};
//!
//! let mut uf = UnionFind::new(3);
//! uf.union(NodeId(0), NodeId(1), Weight(4));
//! assert_eq!(uf.weight(NodeId(1)), Weight(4));
//!
//! // Triangle 0-1-2 with one heavy edge
//! let edges = EdgeList::from_edges(3, &[(0, 1, 1), (1, 2, 2), (0, 2, 5)]);
//! let mst = minimum_spanning_tree(&edges).unwrap();
//! assert_eq!(mst.total_weight, Weight(3));
//! ```

pub mod algorithms;
pub mod models;

// Re-export main types
pub use algorithms::component_weights::{replay_commands, Command, ComponentWeights};
pub use algorithms::kruskal::{kruskal, minimum_spanning_tree, KruskalConfig, SpanningForest};
pub use algorithms::union_find::{connected_components, UnionFind, UnionOutcome};
pub use models::edges::{EdgeList, EdgeListBuilder, WeightedEdge};
pub use models::node::{ComponentId, NodeId, Weight};

/// Graph algorithm error types.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// Invalid node ID.
    #[error("Invalid node ID: {0}")]
    InvalidNodeId(u64),

    /// Element count does not fit the `u32` id space.
    #[error("Too many nodes: {0} exceeds {max}", max = NodeId::MAX_NODES)]
    TooManyNodes(usize),

    /// Empty graph.
    #[error("Empty graph")]
    EmptyGraph,

    /// A spanning tree was required but the graph has several components.
    #[error("Graph is disconnected: {components} components")]
    Disconnected { components: usize },

    /// Disjoint-set forest invariant violated.
    #[error("Corrupt disjoint-set forest: {0}")]
    CorruptForest(String),
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
