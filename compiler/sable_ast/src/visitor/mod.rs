//! Generic traversal.
//!
//! [`Visitor`] is the read-only walk: `visit_node` dispatches on the
//! category to one `visit_*` method per category, whose default calls
//! [`walk_children`]. Override a `visit_*` method to add behavior and call
//! `walk_children` to keep descending; skipping the call prunes the subtree.
//!
//! [`Rewriter`] is the mutating walk used by resolution passes. Both walk
//! pre-order, parent before children, and follow owned edges only: `Ref`
//! edges point into some other part of the tree (or back up it) and are
//! visited where they are owned.
//!
//! # Example
//!
//! ```text
//! struct CountYields(usize);
//!
//! impl Visitor for CountYields {
//!     fn visit_statement(&mut self, ctx: &AstContext, id: NodeId, stmt: Statement) {
//!         if stmt == Statement::Yield {
//!             self.0 += 1;
//!         }
//!         walk_children(self, ctx, id);
//!     }
//! }
//! ```

use sable_ir::ensure_sufficient_stack;

use crate::kind::{Ctor, Declaration, Expression, NodeKind, QualifiedType, Statement, UnqualifiedType};
use crate::{AstContext, Edge, NodeError, NodeId};

// Visitor Trait

pub trait Visitor {
    /// Entry point for every node.
    fn visit_node(&mut self, ctx: &AstContext, id: NodeId) {
        walk_node(self, ctx, id);
    }

    fn visit_type(&mut self, ctx: &AstContext, id: NodeId, _ty: UnqualifiedType) {
        walk_children(self, ctx, id);
    }

    fn visit_qualified_type(&mut self, ctx: &AstContext, id: NodeId, _qt: QualifiedType) {
        walk_children(self, ctx, id);
    }

    fn visit_ctor(&mut self, ctx: &AstContext, id: NodeId, _ctor: Ctor) {
        walk_children(self, ctx, id);
    }

    fn visit_expression(&mut self, ctx: &AstContext, id: NodeId, _expr: Expression) {
        walk_children(self, ctx, id);
    }

    fn visit_statement(&mut self, ctx: &AstContext, id: NodeId, _stmt: Statement) {
        walk_children(self, ctx, id);
    }

    fn visit_declaration(&mut self, ctx: &AstContext, id: NodeId, _decl: Declaration) {
        walk_children(self, ctx, id);
    }
}

// Walk Functions

/// Dispatch `id` to the `visit_*` method of its category.
pub fn walk_node<V: Visitor + ?Sized>(visitor: &mut V, ctx: &AstContext, id: NodeId) {
    match ctx.kind(id) {
        NodeKind::Type(ty) => visitor.visit_type(ctx, id, ty),
        NodeKind::QualifiedType(qt) => visitor.visit_qualified_type(ctx, id, qt),
        NodeKind::Ctor(ctor) => visitor.visit_ctor(ctx, id, ctor),
        NodeKind::Expression(expr) => visitor.visit_expression(ctx, id, expr),
        NodeKind::Statement(stmt) => visitor.visit_statement(ctx, id, stmt),
        NodeKind::Declaration(decl) => visitor.visit_declaration(ctx, id, decl),
    }
}

/// Visit the owned children of `id`, left to right.
pub fn walk_children<V: Visitor + ?Sized>(visitor: &mut V, ctx: &AstContext, id: NodeId) {
    ensure_sufficient_stack(|| {
        for child in ctx.owned_children(id) {
            visitor.visit_node(ctx, child);
        }
    });
}

// Queries

struct Collect<P> {
    predicate: P,
    found: Vec<NodeId>,
    first_only: bool,
}

impl<P: FnMut(NodeKind) -> bool> Visitor for Collect<P> {
    fn visit_node(&mut self, ctx: &AstContext, id: NodeId) {
        if self.first_only && !self.found.is_empty() {
            return;
        }
        if (self.predicate)(ctx.kind(id)) {
            self.found.push(id);
        }
        walk_node(self, ctx, id);
    }
}

/// All nodes in the owned subtree of `root` whose kind matches, pre-order.
pub fn collect(
    ctx: &AstContext,
    root: NodeId,
    predicate: impl FnMut(NodeKind) -> bool,
) -> Vec<NodeId> {
    let mut collector = Collect {
        predicate,
        found: Vec::new(),
        first_only: false,
    };
    collector.visit_node(ctx, root);
    collector.found
}

/// First matching node in pre-order.
pub fn find_first(
    ctx: &AstContext,
    root: NodeId,
    predicate: impl FnMut(NodeKind) -> bool,
) -> Option<NodeId> {
    let mut collector = Collect {
        predicate,
        found: Vec::new(),
        first_only: true,
    };
    collector.visit_node(ctx, root);
    collector.found.first().copied()
}

pub fn contains(ctx: &AstContext, root: NodeId, predicate: impl FnMut(NodeKind) -> bool) -> bool {
    find_first(ctx, root, predicate).is_some()
}

// Rewriting

/// What a [`Rewriter`] wants done with the node it was shown.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Action {
    /// Keep the node and visit its children.
    Descend,
    /// Keep the node and skip its subtree.
    Prune,
    /// Put this edge in the node's slot. Owned replacements are descended
    /// into; the replacement itself is not offered to the rewriter again.
    Replace(Edge),
}

pub trait Rewriter {
    fn rewrite(&mut self, ctx: &mut AstContext, id: NodeId) -> Action;
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct RewriteOutcome {
    /// Root after rewriting; differs from the input when the root itself was replaced.
    pub root: NodeId,
    /// Number of slots whose edge actually changed. Handing back the edge
    /// already in place does not count, so zero means the pass reached a
    /// fixpoint.
    pub replacements: usize,
}

/// Run `rewriter` over the owned subtree of `root`, pre-order.
///
/// Replacements go through [`AstContext::try_replace_child`], so a
/// rewriter that breaks a layout or regresses resolution stops the walk
/// with that error.
#[tracing::instrument(level = "debug", skip(ctx, rewriter))]
pub fn rewrite_tree<R: Rewriter + ?Sized>(
    ctx: &mut AstContext,
    root: NodeId,
    rewriter: &mut R,
) -> Result<RewriteOutcome, NodeError> {
    let mut replacements = 0;
    let root = match rewriter.rewrite(ctx, root) {
        Action::Prune => return Ok(RewriteOutcome { root, replacements }),
        Action::Descend => root,
        Action::Replace(Edge::Owned(new)) => {
            if new != root {
                replacements += 1;
            }
            new
        }
        Action::Replace(Edge::Ref(target)) => {
            return Ok(RewriteOutcome {
                root: target,
                replacements: usize::from(target != root),
            })
        }
    };
    rewrite_children(ctx, root, rewriter, &mut replacements)?;
    tracing::debug!(replacements, "rewrite pass finished");
    Ok(RewriteOutcome { root, replacements })
}

fn rewrite_children<R: Rewriter + ?Sized>(
    ctx: &mut AstContext,
    parent: NodeId,
    rewriter: &mut R,
    replacements: &mut usize,
) -> Result<(), NodeError> {
    ensure_sufficient_stack(|| {
        for index in 0..ctx.children(parent).len() {
            let Some(Edge::Owned(child)) = ctx.edge(parent, index) else {
                continue;
            };
            match rewriter.rewrite(ctx, child) {
                Action::Prune => {}
                Action::Descend => rewrite_children(ctx, child, rewriter, replacements)?,
                Action::Replace(edge) => {
                    if ctx.try_replace_child(parent, index, edge)? != edge {
                        *replacements += 1;
                    }
                    if let Edge::Owned(new) = edge {
                        rewrite_children(ctx, new, rewriter, replacements)?;
                    }
                }
            }
        }
        Ok(())
    })
}
