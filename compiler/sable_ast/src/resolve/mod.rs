//! Resolution engine.
//!
//! A node is resolved when nothing reachable from it, through owned
//! children and `Ref` edges alike, is a placeholder: a `Name` or `Unknown`
//! type, an unresolved `Name` expression, or an `INFERRED` qualified type.
//!
//! Type graphs may be cyclic (a struct whose field refers back to the
//! struct). Two rules keep the walk finite:
//!
//! 1. A node already in the [`ResolvedState`] counts as resolved.
//! 2. A `self` keyword expression is always resolved; its type is the
//!    enclosing record, which may itself still be resolving.
//!
//! The engine never fails. `false` only means "not yet"; whether that is
//! fatal is decided by the pass scheduler.

use rustc_hash::FxHashSet;
use sable_ir::ensure_sufficient_stack;

use crate::kind::{Expression, Keyword, NodeKind};
use crate::{AstContext, NodeId};

/// Nodes visited during one resolution query.
///
/// Scoped to a single query; reusing a state across unrelated queries makes
/// previously visited nodes count as resolved.
#[derive(Default, Debug)]
pub struct ResolvedState {
    visited: FxHashSet<NodeId>,
}

impl ResolvedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.visited.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.visited.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }
}

/// Does `kind` stand in for something a later pass still has to determine?
pub fn is_placeholder(kind: NodeKind) -> bool {
    match kind {
        NodeKind::Type(ty) => ty.is_placeholder(),
        NodeKind::QualifiedType(qt) => qt.is_inferred(),
        NodeKind::Expression(Expression::Name { .. }) => true,
        _ => false,
    }
}

#[inline]
fn is_self_reference(kind: NodeKind) -> bool {
    matches!(
        kind,
        NodeKind::Expression(Expression::Keyword(Keyword::SelfRef))
    )
}

/// Is `id` fully resolved? See the module docs for the rules.
pub fn is_resolved(ctx: &AstContext, id: NodeId, state: &mut ResolvedState) -> bool {
    ensure_sufficient_stack(|| {
        let kind = ctx.kind(id);
        if is_self_reference(kind) {
            return true;
        }
        if !state.visited.insert(id) {
            return true;
        }
        if is_placeholder(kind) {
            tracing::trace!(node = %id, variant = kind.variant_name(), "unresolved placeholder");
            return false;
        }
        ctx.children(id)
            .iter()
            .all(|edge| is_resolved(ctx, edge.target(), state))
    })
}

impl AstContext {
    /// Is `id` fully resolved, using a fresh [`ResolvedState`]?
    pub fn is_resolved(&self, id: NodeId) -> bool {
        is_resolved(self, id, &mut ResolvedState::new())
    }

    /// Placeholders reachable from `root` that keep it unresolved, in
    /// traversal order. Placeholders nested inside another placeholder are
    /// not listed separately.
    pub fn unresolved_nodes(&self, root: NodeId) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut visited = FxHashSet::default();
        self.collect_unresolved(root, &mut visited, &mut found);
        found
    }

    fn collect_unresolved(
        &self,
        id: NodeId,
        visited: &mut FxHashSet<NodeId>,
        found: &mut Vec<NodeId>,
    ) {
        ensure_sufficient_stack(|| {
            let kind = self.kind(id);
            if is_self_reference(kind) || !visited.insert(id) {
                return;
            }
            if is_placeholder(kind) {
                found.push(id);
                return;
            }
            for edge in self.children(id) {
                self.collect_unresolved(edge.target(), visited, found);
            }
        });
    }
}

#[cfg(test)]
mod tests;
