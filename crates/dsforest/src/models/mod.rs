//! Data models.
//!
//! - [`NodeId`], [`ComponentId`], [`Weight`]: strongly typed scalars
//! - [`EdgeList`]: weighted undirected edges over a fixed vertex set

pub mod edges;
pub mod node;

pub use edges::{EdgeList, EdgeListBuilder, WeightedEdge};
pub use node::{ComponentId, NodeId, Weight};
