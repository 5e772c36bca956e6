//! Node handles and child edges.

use std::fmt;

/// Index into an [`AstContext`](crate::AstContext).
///
/// Handles stay valid for the lifetime of the context that issued them;
/// nodes are never freed individually. Using a handle with a different
/// context is a caller bug.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// Sentinel that never names a node.
    pub const INVALID: NodeId = NodeId(u32::MAX);

    #[inline]
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "NodeId({})", self.0)
        } else {
            write!(f, "NodeId::INVALID")
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::INVALID
    }
}

/// A parent-to-child link.
///
/// `Owned` children belong to exactly one parent. `Ref` links are
/// non-owning: they let a qualified type share an unqualified type, a
/// `self` expression point at its enclosing record, or a field refer back
/// to the struct that contains it, without creating ownership cycles.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Edge {
    Owned(NodeId),
    Ref(NodeId),
}

impl Edge {
    /// The node this edge points at.
    #[inline]
    pub const fn target(self) -> NodeId {
        match self {
            Edge::Owned(id) | Edge::Ref(id) => id,
        }
    }

    #[inline]
    pub const fn is_owned(self) -> bool {
        matches!(self, Edge::Owned(_))
    }
}

impl From<NodeId> for Edge {
    fn from(id: NodeId) -> Self {
        Edge::Owned(id)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Edge, NodeId};
    sable_ir::static_assert_size!(NodeId, 4);
    sable_ir::static_assert_size!(Edge, 8);
}
