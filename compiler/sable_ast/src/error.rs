//! Structural invariant violations.
//!
//! Every `NodeError` means a collaborating pass built or rewrote the tree
//! incorrectly. None of them is a user-facing diagnostic; the panicking
//! entry points of [`AstContext`](crate::AstContext) abort with the
//! message, the `try_*` variants hand it back for passes that want to
//! report the bug before giving up on the unit.

use crate::kind::Category;
use crate::NodeId;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NodeError {
    #[error("{variant} takes {expected} children, found {found}")]
    ArityMismatch {
        variant: &'static str,
        expected: String,
        found: usize,
    },

    #[error("{variant} child {index} must be a {expected}, found a {found}")]
    ChildCategory {
        variant: &'static str,
        index: usize,
        expected: Category,
        found: Category,
    },

    #[error("{variant} child index {index} out of bounds (has {len} children)")]
    IndexOutOfBounds {
        variant: &'static str,
        index: usize,
        len: usize,
    },

    #[error("{node} does not name a node of this context")]
    UnknownNode { node: NodeId },

    #[error("{variant} {node} is frozen; only child replacement is allowed")]
    Frozen { variant: &'static str, node: NodeId },

    #[error("cannot take ownership of {child}: it is still under construction")]
    ChildNotFrozen { child: NodeId },

    #[error("{child} is already owned by {owner}")]
    AlreadyOwned { child: NodeId, owner: NodeId },

    #[error("{child} appears twice among the owned children of one node")]
    DuplicateChild { child: NodeId },

    #[error("making {child} a child of {parent} would create an ownership cycle")]
    OwnershipCycle { parent: NodeId, child: NodeId },

    #[error("unsupported integer width {width}; expected 8, 16, 32 or 64")]
    InvalidIntegerWidth { width: u16 },

    #[error("replacing child {index} of {parent} would make a resolved subtree unresolved")]
    ResolutionRegressed { parent: NodeId, index: usize },
}
