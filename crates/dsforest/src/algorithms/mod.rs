//! Algorithms.
//!
//! - [`union_find`]: weighted disjoint set forest
//! - [`component_weights`]: unite/query command replay
//! - [`kruskal`]: minimum spanning tree / forest

pub mod component_weights;
pub mod kruskal;
pub mod union_find;

pub use component_weights::{replay_commands, Command, ComponentWeights};
pub use kruskal::{kruskal, minimum_spanning_tree, KruskalConfig, SpanningForest};
pub use union_find::{connected_components, UnionFind, UnionOutcome};
