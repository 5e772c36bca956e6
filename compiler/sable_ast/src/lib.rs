//! Sable AST - the node arena and tree algorithms every compiler pass shares
//!
//! - [`AstContext`]: arena of nodes linked by owned and `Ref` edges
//! - The closed node taxonomy ([`NodeKind`] and its category payloads)
//! - Per-variant child layouts, checked on freeze and on replacement
//! - The resolution engine ([`is_resolved`]) and structural equality
//!   ([`is_equal`]), both terminating on recursive types
//! - Pre-order [`Visitor`] and [`Rewriter`] traversal
//!
//! # Building a node
//!
//! ```text
//! let mut ctx = AstContext::new(SharedInterner::new());
//! let truth = ctx.bool_ctor(true, Span::DUMMY);      // ctor with an owned `const bool`
//! let expr = ctx.ctor_expr(truth, Span::DUMMY);
//! let stmt = ctx.expression_stmt(expr, Span::DUMMY);
//! assert!(ctx.is_resolved(stmt));
//! ```

mod build;
mod context;
mod equal;
mod error;
pub mod kind;
mod layout;
mod node_id;
mod render;
mod resolve;
pub mod visitor;

use std::sync::Once;

pub use context::{AstContext, Children};
pub use equal::{is_equal, EqualityState};
pub use error::NodeError;
pub use kind::{
    Category, Constness, Ctor, Declaration, Expression, Keyword, Linkage, NodeKind, ParameterKind,
    QualifiedType, Qualifiers, Statement, UnqualifiedType,
};
pub use layout::{Layout, Tail};
pub use node_id::{Edge, NodeId};
pub use resolve::{is_placeholder, is_resolved, ResolvedState};
pub use visitor::{rewrite_tree, Action, RewriteOutcome, Rewriter, Visitor};

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber for debugging passes.
///
/// Does nothing unless `RUST_LOG` is set. With `SABLE_LOG_TREE=1` events
/// are printed as an indented span tree instead of flat lines. Safe to call
/// more than once, and a no-op when a global subscriber is already set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        let tree = std::env::var("SABLE_LOG_TREE").is_ok_and(|v| v == "1");
        let (flat, nested) = if tree {
            (
                None,
                Some(tracing_tree::HierarchicalLayer::new(2).with_targets(true)),
            )
        } else {
            (Some(fmt::layer().with_target(true).with_level(true)), None)
        };
        // A driver embedding this crate may already own the global
        // subscriber; that one stays in charge and the error is dropped.
        let _ = tracing_subscriber::registry()
            .with(flat)
            .with(nested)
            .with(filter)
            .try_init();
    });
}
