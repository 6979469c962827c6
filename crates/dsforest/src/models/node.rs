//! Scalar types for disjoint-set forests.
//!
//! - [`NodeId`]: element / vertex identifier
//! - [`ComponentId`]: dense component label
//! - [`Weight`]: additive per-set aggregate and edge weight

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use crate::{GraphError, Result};

/// Node identifier (element or vertex ID).
///
/// Using a newtype prevents mixing up node IDs with weights or counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Invalid/sentinel node ID.
    pub const INVALID: NodeId = NodeId(u32::MAX);

    /// Largest element count addressable without reaching [`NodeId::INVALID`].
    pub const MAX_NODES: usize = u32::MAX as usize;

    /// Create a new node ID.
    pub const fn new(id: u32) -> Self {
        NodeId(id)
    }

    /// Check if this is a valid node ID.
    pub const fn is_valid(&self) -> bool {
        self.0 != u32::MAX
    }

    /// Get the inner value.
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Index into per-node arrays.
    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    /// Fail with [`GraphError::TooManyNodes`] unless `n` elements fit the id space.
    pub fn check_capacity(n: usize) -> Result<()> {
        if n > Self::MAX_NODES {
            return Err(GraphError::TooManyNodes(n));
        }
        Ok(())
    }
}

impl From<u32> for NodeId {
    fn from(id: u32) -> Self {
        NodeId(id)
    }
}

/// Indices beyond the `u32` range map to [`NodeId::INVALID`], which every
/// bounds check rejects.
impl From<usize> for NodeId {
    fn from(id: usize) -> Self {
        u32::try_from(id).map_or(NodeId::INVALID, NodeId)
    }
}

impl From<NodeId> for usize {
    fn from(id: NodeId) -> Self {
        id.0 as usize
    }
}

/// Connected component identifier.
///
/// Nodes in the same component have the same ComponentId.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ComponentId(pub u32);

impl ComponentId {
    /// Unassigned component.
    pub const UNASSIGNED: ComponentId = ComponentId(u32::MAX);

    /// Create a new component ID.
    pub const fn new(id: u32) -> Self {
        ComponentId(id)
    }

    /// Check if component is assigned.
    pub const fn is_assigned(&self) -> bool {
        self.0 != u32::MAX
    }

    /// Get the inner value.
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl From<u32> for ComponentId {
    fn from(id: u32) -> Self {
        ComponentId(id)
    }
}

/// Non-negative additive weight.
///
/// Addition saturates at [`Weight::MAX`]; a saturated weight stays saturated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Weight(pub u64);

impl Weight {
    /// Zero weight.
    pub const ZERO: Weight = Weight(0);

    /// Largest representable weight.
    pub const MAX: Weight = Weight(u64::MAX);

    /// Create a new weight.
    pub const fn new(w: u64) -> Self {
        Weight(w)
    }

    /// Get the inner value.
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Add two weights, saturating at `Weight::MAX`.
    pub const fn saturating_add(self, other: Weight) -> Weight {
        Weight(self.0.saturating_add(other.0))
    }

    /// Whether an addition has hit the ceiling.
    pub const fn is_saturated(&self) -> bool {
        self.0 == u64::MAX
    }
}

impl From<u64> for Weight {
    fn from(w: u64) -> Self {
        Weight(w)
    }
}

impl Add for Weight {
    type Output = Weight;

    fn add(self, rhs: Weight) -> Weight {
        self.saturating_add(rhs)
    }
}

impl AddAssign for Weight {
    fn add_assign(&mut self, rhs: Weight) {
        *self = self.saturating_add(rhs);
    }
}

impl Sum for Weight {
    fn sum<I: Iterator<Item = Weight>>(iter: I) -> Weight {
        iter.fold(Weight::ZERO, Weight::saturating_add)
    }
}

impl<'a> Sum<&'a Weight> for Weight {
    fn sum<I: Iterator<Item = &'a Weight>>(iter: I) -> Weight {
        iter.copied().sum()
    }
}

impl std::fmt::Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
