//! `init_tracing` alongside a subscriber the embedding driver installed.
//!
//! Kept in its own test binary: it sets the process-wide subscriber and
//! `RUST_LOG`.

use pretty_assertions::assert_eq;
use tracing_subscriber::prelude::*;

#[test]
fn driver_subscriber_stays_in_charge() {
    tracing_subscriber::registry().init();
    std::env::set_var("RUST_LOG", "sable_ast=trace");
    std::env::set_var("SABLE_LOG_TREE", "1");

    sable_ast::init_tracing();
    sable_ast::init_tracing();

    let mut ctx = sable_ast::AstContext::new(sable_ir::SharedInterner::new());
    let value = ctx.void_expr(sable_ir::Span::DUMMY);
    let stmt = ctx.expression_stmt(value, sable_ir::Span::DUMMY);
    let other = ctx.void_expr(sable_ir::Span::DUMMY);
    ctx.replace_child(stmt, 0, sable_ast::Edge::Owned(other));
    assert_eq!(ctx.child(stmt, 0), Some(other));
}
