use sable_ir::Span;

use crate::kind::{Constness, Ctor, Expression, UnqualifiedType};
use crate::{AstContext, Edge, NodeId};

impl AstContext {
    fn const_of(&mut self, ty: NodeId, span: Span) -> NodeId {
        self.qualified(ty, Constness::Const, span)
    }

    pub fn null_ctor(&mut self, span: Span) -> NodeId {
        let ty = self.leaf_type(UnqualifiedType::Null, span);
        let qt = self.const_of(ty, span);
        self.create(Ctor::Null, [Edge::Owned(qt)], span)
    }

    pub fn bool_ctor(&mut self, value: bool, span: Span) -> NodeId {
        let ty = self.bool_type(span);
        let qt = self.const_of(ty, span);
        self.create(Ctor::Bool(value), [Edge::Owned(qt)], span)
    }

    pub fn string_ctor(&mut self, value: &str, span: Span) -> NodeId {
        let value = self.intern(value);
        let ty = self.string_type(span);
        let qt = self.const_of(ty, span);
        self.create(Ctor::String(value), [Edge::Owned(qt)], span)
    }

    pub fn signed_integer_ctor(&mut self, value: i64, width: u16, span: Span) -> NodeId {
        let ty = self.signed_integer_type(width, span);
        let qt = self.const_of(ty, span);
        self.create(Ctor::SignedInteger { value, width }, [Edge::Owned(qt)], span)
    }

    pub fn unsigned_integer_ctor(&mut self, value: u64, width: u16, span: Span) -> NodeId {
        let ty = self.unsigned_integer_type(width, span);
        let qt = self.const_of(ty, span);
        self.create(Ctor::UnsignedInteger { value, width }, [Edge::Owned(qt)], span)
    }

    pub fn real_ctor(&mut self, value: f64, span: Span) -> NodeId {
        let ty = self.leaf_type(UnqualifiedType::Real, span);
        let qt = self.const_of(ty, span);
        self.create(Ctor::real(value), [Edge::Owned(qt)], span)
    }

    /// Tuple ctor of type `qt` over element expressions.
    pub fn tuple_ctor(
        &mut self,
        qt: NodeId,
        elements: impl IntoIterator<Item = NodeId>,
        span: Span,
    ) -> NodeId {
        let children = std::iter::once(Edge::Owned(qt)).chain(elements.into_iter().map(Edge::Owned));
        self.create(Ctor::Tuple, children, span)
    }

    /// Expression evaluating a ctor.
    pub fn ctor_expr(&mut self, ctor: NodeId, span: Span) -> NodeId {
        self.create(Expression::Ctor, [Edge::Owned(ctor)], span)
    }
}
