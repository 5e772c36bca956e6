//! Structural equality.
//!
//! Two nodes are equal when they have the same variant and payload and
//! their children are pairwise equal, recursively. Spans and the
//! owned/`Ref` distinction of edges are ignored, so independently built
//! copies of a type compare equal wherever they came from.
//!
//! Recursive types are compared co-inductively: a pair already being
//! compared further up the walk is assumed equal, which terminates on
//! cycles and agrees with the finite answer everywhere else.

use rustc_hash::FxHashSet;
use sable_ir::ensure_sufficient_stack;

use crate::{AstContext, NodeId};

/// Node pairs under comparison during one equality query.
#[derive(Default, Debug)]
pub struct EqualityState {
    in_progress: FxHashSet<(NodeId, NodeId)>,
}

impl EqualityState {
    pub fn new() -> Self {
        Self::default()
    }
}

pub fn is_equal(ctx: &AstContext, a: NodeId, b: NodeId, state: &mut EqualityState) -> bool {
    if a == b {
        return true;
    }
    ensure_sufficient_stack(|| {
        if ctx.kind(a) != ctx.kind(b) {
            return false;
        }
        let (lhs, rhs) = (ctx.children(a), ctx.children(b));
        if lhs.len() != rhs.len() {
            return false;
        }
        let key = if a < b { (a, b) } else { (b, a) };
        if !state.in_progress.insert(key) {
            return true;
        }
        let equal = lhs
            .iter()
            .zip(rhs)
            .all(|(x, y)| is_equal(ctx, x.target(), y.target(), state));
        state.in_progress.remove(&key);
        equal
    })
}

impl AstContext {
    /// Structural equality with a fresh [`EqualityState`].
    pub fn is_equal(&self, a: NodeId, b: NodeId) -> bool {
        is_equal(self, a, b, &mut EqualityState::new())
    }

    /// Keep the first node of every structural-equality class, in order.
    pub fn dedup_types(&self, ids: impl IntoIterator<Item = NodeId>) -> Vec<NodeId> {
        let mut representatives: Vec<NodeId> = Vec::new();
        for id in ids {
            if !representatives.iter().any(|&rep| self.is_equal(rep, id)) {
                representatives.push(id);
            }
        }
        representatives
    }
}

#[cfg(test)]
mod tests;
