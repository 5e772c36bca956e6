use super::*;
use crate::kind::{Constness, QualifiedType, Qualifiers, Statement, UnqualifiedType};
use crate::Edge;
use pretty_assertions::assert_eq;
use sable_ir::{SharedInterner, Span};

const S: Span = Span::DUMMY;

fn ctx() -> AstContext {
    AstContext::new(SharedInterner::new())
}

#[test]
fn placeholder_kinds() {
    let interner = sable_ir::StringInterner::new();
    let id = interner.intern("Foo");
    assert!(is_placeholder(NodeKind::Type(UnqualifiedType::Unknown)));
    assert!(is_placeholder(NodeKind::Type(UnqualifiedType::Name { id })));
    assert!(is_placeholder(NodeKind::Expression(Expression::Name { id })));
    assert!(is_placeholder(NodeKind::QualifiedType(QualifiedType::new(
        Qualifiers::INFERRED | Qualifiers::CONST
    ))));
    assert!(!is_placeholder(NodeKind::QualifiedType(QualifiedType::new(
        Qualifiers::CONST
    ))));
    assert!(!is_placeholder(NodeKind::Type(UnqualifiedType::Any)));
    assert!(!is_placeholder(NodeKind::Statement(Statement::Yield)));
}

#[test]
fn concrete_leaves_are_resolved() {
    let mut ctx = ctx();
    let ty = ctx.bool_type(S);
    let stmt = ctx.break_stmt(S);
    assert!(ctx.is_resolved(ty));
    assert!(ctx.is_resolved(stmt));
}

#[test]
fn placeholders_propagate_to_ancestors() {
    let mut ctx = ctx();
    let foo = ctx.name_type("Foo", S);
    let qt = ctx.qualified(foo, Constness::Const, S);
    let decl = ctx.local_variable_decl("v", qt, None, S);
    let stmt = ctx.declaration_stmt(decl, S);

    for id in [foo, qt, decl, stmt] {
        assert!(!ctx.is_resolved(id), "{} should be unresolved", ctx.describe(id));
    }
    assert_eq!(ctx.unresolved_nodes(stmt), vec![foo]);
}

#[test]
fn refs_count_toward_resolution() {
    let mut ctx = ctx();
    let foo = ctx.name_type("Foo", S);
    let shared = ctx.qualified_ref(foo, Constness::Mutable, S);
    assert!(!ctx.is_resolved(shared));
    assert_eq!(ctx.parent(foo), None);
}

#[test]
fn concrete_rewrite_resolves() {
    let mut ctx = ctx();
    let foo = ctx.name_type("Foo", S);
    let qt = ctx.qualified(foo, Constness::Const, S);
    assert!(!ctx.is_resolved(qt));

    let concrete = ctx.signed_integer_type(32, S);
    ctx.replace_child(qt, 0, Edge::Owned(concrete));
    assert!(ctx.is_resolved(qt));
    assert!(ctx.unresolved_nodes(qt).is_empty());
}

#[test]
fn self_keyword_is_always_resolved() {
    let mut ctx = ctx();
    let record = ctx.begin_struct_type(S);
    let this = ctx.self_expr(record, S);

    // The record still has an unresolved field.
    let foo = ctx.name_type("Foo", S);
    let qt = ctx.qualified(foo, Constness::Mutable, S);
    let field = ctx.field_decl("f", qt, Some(this), S);
    ctx.push_child(record, Edge::Owned(field));
    ctx.freeze(record);

    assert!(ctx.is_resolved(this));
    assert!(!ctx.is_resolved(record));
    assert_eq!(ctx.unresolved_nodes(record), vec![foo]);
}

#[test]
fn recursive_struct_terminates() {
    let mut ctx = ctx();
    let node = ctx.begin_struct_type(S);
    let next = ctx.qualified_ref(node, Constness::Mutable, S);
    let next = ctx.field_decl("next", next, None, S);
    ctx.push_child(node, Edge::Owned(next));
    ctx.freeze(node);

    let mut state = ResolvedState::new();
    assert!(is_resolved(&ctx, node, &mut state));
    assert!(state.contains(node));
    assert!(state.contains(next));
}

#[test]
fn mutually_recursive_structs_terminate() {
    let mut ctx = ctx();
    let a = ctx.begin_struct_type(S);
    let b = ctx.begin_struct_type(S);

    let to_b = ctx.qualified_ref(b, Constness::Mutable, S);
    let to_b = ctx.field_decl("b", to_b, None, S);
    ctx.push_child(a, Edge::Owned(to_b));

    let to_a = ctx.qualified_ref(a, Constness::Mutable, S);
    let to_a = ctx.field_decl("a", to_a, None, S);
    ctx.push_child(b, Edge::Owned(to_a));

    let unknown = ctx.unknown_type(S);
    let pending = ctx.qualified(unknown, Constness::Mutable, S);
    let pending = ctx.field_decl("pending", pending, None, S);
    ctx.push_child(b, Edge::Owned(pending));

    ctx.freeze(a);
    ctx.freeze(b);

    assert!(!ctx.is_resolved(a));
    assert!(!ctx.is_resolved(b));
    assert_eq!(ctx.unresolved_nodes(a), vec![unknown]);
}

#[test]
fn visited_nodes_count_as_resolved() {
    let mut ctx = ctx();
    let foo = ctx.name_type("Foo", S);
    let mut state = ResolvedState::new();
    assert!(state.is_empty());
    assert!(!is_resolved(&ctx, foo, &mut state));
    assert_eq!(state.len(), 1);
    // A state carried into a second query treats the placeholder as seen.
    assert!(is_resolved(&ctx, foo, &mut state));
}

#[test]
fn inferred_types_block_resolution() {
    let mut ctx = ctx();
    let qt = ctx.inferred(S);
    let decl = ctx.local_variable_decl("x", qt, None, S);
    assert!(!ctx.is_resolved(decl));
    assert_eq!(ctx.unresolved_nodes(decl), vec![qt]);
}

#[test]
fn name_expressions_block_resolution() {
    let mut ctx = ctx();
    let x = ctx.name_expr("x", S);
    let stmt = ctx.expression_stmt(x, S);
    assert!(!ctx.is_resolved(stmt));
    assert_eq!(ctx.unresolved_nodes(stmt), vec![x]);
}
