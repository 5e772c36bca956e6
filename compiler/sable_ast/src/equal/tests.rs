use super::*;
use crate::kind::{Constness, UnqualifiedType, INTEGER_WIDTHS};
use crate::Edge;
use pretty_assertions::assert_eq;
use sable_ir::{SharedInterner, Span};

const S: Span = Span::DUMMY;

fn ctx() -> AstContext {
    AstContext::new(SharedInterner::new())
}

#[test]
fn independently_built_types_are_equal() {
    let mut ctx = ctx();
    let a = ctx.bool_type(Span::new(0, 4));
    let a = ctx.qualified(a, Constness::Const, Span::new(0, 10));
    let b = ctx.bool_type(Span::new(40, 44));
    let b = ctx.qualified(b, Constness::Const, Span::new(40, 50));
    assert!(ctx.is_equal(a, b));
}

#[test]
fn constness_distinguishes_wrappers() {
    let mut ctx = ctx();
    let ty = ctx.bool_type(S);
    let constant = ctx.qualified(ty, Constness::Const, S);
    let mutable = ctx.qualified_ref(ty, Constness::Mutable, S);
    assert!(!ctx.is_equal(constant, mutable));
    assert_eq!(ctx.child(constant, 0), Some(ty));
}

#[test]
fn edge_ownership_is_ignored() {
    let mut ctx = ctx();
    let a = ctx.string_type(S);
    let owned = ctx.qualified(a, Constness::Mutable, S);
    let b = ctx.string_type(S);
    let shared = ctx.qualified_ref(b, Constness::Mutable, S);
    assert!(ctx.is_equal(owned, shared));
}

#[test]
fn payload_and_arity_matter() {
    let mut ctx = ctx();
    let i32_ty = ctx.signed_integer_type(32, S);
    let u32_ty = ctx.unsigned_integer_type(32, S);
    let i64_ty = ctx.signed_integer_type(64, S);
    assert!(!ctx.is_equal(i32_ty, u32_ty));
    assert!(!ctx.is_equal(i32_ty, i64_ty));

    let empty = ctx.tuple_type([], S);
    let elem = ctx.qualified(i32_ty, Constness::Const, S);
    let elem = ctx.tuple_element_decl(None, elem, S);
    let single = ctx.tuple_type([elem], S);
    assert!(!ctx.is_equal(empty, single));

    let foo = ctx.name_type("Foo", S);
    let bar = ctx.name_type("Bar", S);
    let foo_again = ctx.name_type("Foo", S);
    assert!(!ctx.is_equal(foo, bar));
    assert!(ctx.is_equal(foo, foo_again));
}

#[test]
fn inferred_is_not_concrete() {
    let mut ctx = ctx();
    let inferred = ctx.inferred(S);
    let unknown = ctx.unknown_type(S);
    let plain = ctx.qualified(unknown, Constness::Mutable, S);
    assert!(!ctx.is_equal(inferred, plain));
}

#[test]
fn integer_types_compare_through_their_self_reference() {
    let mut ctx = ctx();
    let a = ctx.unsigned_integer_type(16, S);
    let b = ctx.unsigned_integer_type(16, Span::new(9, 12));
    assert!(ctx.is_equal(a, b));
}

fn linked_list(ctx: &mut AstContext, span: Span) -> NodeId {
    let node = ctx.begin_struct_type(span);
    let next = ctx.qualified_ref(node, Constness::Mutable, span);
    let next = ctx.field_decl("next", next, None, span);
    ctx.push_child(node, Edge::Owned(next));
    let value = ctx.signed_integer_type(64, span);
    let value = ctx.qualified(value, Constness::Mutable, span);
    let value = ctx.field_decl("value", value, None, span);
    ctx.push_child(node, Edge::Owned(value));
    ctx.freeze(node);
    node
}

#[test]
fn recursive_types_terminate() {
    let mut ctx = ctx();
    let a = linked_list(&mut ctx, Span::new(0, 1));
    let b = linked_list(&mut ctx, Span::new(100, 101));
    assert!(ctx.is_equal(a, b));
    assert!(ctx.is_equal(a, a));

    // Same shape, different field name.
    let c = ctx.begin_struct_type(S);
    let next = ctx.qualified_ref(c, Constness::Mutable, S);
    let next = ctx.field_decl("tail", next, None, S);
    ctx.push_child(c, Edge::Owned(next));
    let value = ctx.signed_integer_type(64, S);
    let value = ctx.qualified(value, Constness::Mutable, S);
    let value = ctx.field_decl("value", value, None, S);
    ctx.push_child(c, Edge::Owned(value));
    ctx.freeze(c);
    assert!(!ctx.is_equal(a, c));
}

#[test]
fn state_is_empty_after_a_query() {
    let mut ctx = ctx();
    let a = linked_list(&mut ctx, S);
    let b = linked_list(&mut ctx, S);
    let mut state = EqualityState::new();
    assert!(is_equal(&ctx, a, b, &mut state));
    assert!(state.in_progress.is_empty());
}

#[test]
fn dedup_keeps_first_of_each_class() {
    let mut ctx = ctx();
    let a = ctx.bool_type(S);
    let b = ctx.string_type(S);
    let c = ctx.bool_type(Span::new(5, 9));
    let d = ctx.signed_integer_type(8, S);
    let e = ctx.signed_integer_type(8, Span::new(1, 2));
    assert_eq!(ctx.dedup_types([a, b, c, d, e]), vec![a, b, d]);
}

mod proptest_equality {
    use super::*;
    use proptest::prelude::*;

    /// Type shapes small enough to build many copies of.
    #[derive(Clone, Debug)]
    enum Shape {
        Leaf(UnqualifiedType),
        Integer { signed: bool, width: u16 },
        Vector(Box<Shape>, bool),
        Tuple(Vec<(Shape, bool)>),
    }

    fn constness(is_const: bool) -> Constness {
        if is_const {
            Constness::Const
        } else {
            Constness::Mutable
        }
    }

    fn build(ctx: &mut AstContext, shape: &Shape, span: Span) -> NodeId {
        match shape {
            Shape::Leaf(ty) => ctx.leaf_type(*ty, span),
            Shape::Integer { signed: true, width } => ctx.signed_integer_type(*width, span),
            Shape::Integer { signed: false, width } => ctx.unsigned_integer_type(*width, span),
            Shape::Vector(elem, is_const) => {
                let elem = build(ctx, elem, span);
                let elem = ctx.qualified(elem, constness(*is_const), span);
                ctx.vector_type(elem, span)
            }
            Shape::Tuple(elems) => {
                let mut decls = Vec::with_capacity(elems.len());
                for (elem, is_const) in elems {
                    let ty = build(ctx, elem, span);
                    let qt = ctx.qualified(ty, constness(*is_const), span);
                    decls.push(ctx.tuple_element_decl(None, qt, span));
                }
                ctx.tuple_type(decls, span)
            }
        }
    }

    fn shape() -> impl Strategy<Value = Shape> {
        let leaf = prop_oneof![
            Just(Shape::Leaf(UnqualifiedType::Bool)),
            Just(Shape::Leaf(UnqualifiedType::String)),
            Just(Shape::Leaf(UnqualifiedType::Real)),
            Just(Shape::Leaf(UnqualifiedType::Time)),
            (any::<bool>(), proptest::sample::select(INTEGER_WIDTHS.to_vec()))
                .prop_map(|(signed, width)| Shape::Integer { signed, width }),
        ];
        leaf.prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                (inner.clone(), any::<bool>()).prop_map(|(elem, c)| Shape::Vector(Box::new(elem), c)),
                proptest::collection::vec((inner, any::<bool>()), 0..4).prop_map(Shape::Tuple),
            ]
        })
    }

    fn span() -> impl Strategy<Value = Span> {
        (0u32..10_000, 0u32..64).prop_map(|(start, len)| Span::new(start, start + len))
    }

    proptest! {
        #[test]
        fn reflexive(shape in shape()) {
            let mut ctx = ctx();
            let id = build(&mut ctx, &shape, S);
            prop_assert!(ctx.is_equal(id, id));
        }

        #[test]
        fn location_independent(shape in shape(), a in span(), b in span()) {
            let mut ctx = ctx();
            let x = build(&mut ctx, &shape, a);
            let y = build(&mut ctx, &shape, b);
            prop_assert!(ctx.is_equal(x, y));
            prop_assert!(ctx.is_equal(y, x));
        }

        #[test]
        fn symmetric(a in shape(), b in shape()) {
            let mut ctx = ctx();
            let x = build(&mut ctx, &a, S);
            let y = build(&mut ctx, &b, S);
            prop_assert_eq!(ctx.is_equal(x, y), ctx.is_equal(y, x));
        }

        #[test]
        fn transitive(a in shape(), b in shape(), c in shape()) {
            let mut ctx = ctx();
            let x = build(&mut ctx, &a, S);
            let y = build(&mut ctx, &b, S);
            let z = build(&mut ctx, &c, S);
            if ctx.is_equal(x, y) && ctx.is_equal(y, z) {
                prop_assert!(ctx.is_equal(x, z));
            }
        }

        #[test]
        fn qualification_matters(shape in shape()) {
            let mut ctx = ctx();
            let x = build(&mut ctx, &shape, S);
            let y = build(&mut ctx, &shape, S);
            let constant = ctx.qualified(x, Constness::Const, S);
            let mutable = ctx.qualified(y, Constness::Mutable, S);
            prop_assert!(!ctx.is_equal(constant, mutable));
        }
    }
}
