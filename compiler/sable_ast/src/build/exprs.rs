use sable_ir::Span;

use crate::kind::{Category, Constness, Expression, Keyword};
use crate::{AstContext, Edge, NodeError, NodeId};

impl AstContext {
    /// Unresolved identifier; its type is left to inference.
    pub fn name_expr(&mut self, id: &str, span: Span) -> NodeId {
        let id = self.intern(id);
        let qt = self.inferred(span);
        self.create(Expression::Name { id }, [Edge::Owned(qt)], span)
    }

    /// Resolved reference to `decl`.
    ///
    /// The expression shares the declaration's qualified type, so the
    /// declaration's type should be settled before references to it are
    /// created.
    pub fn try_decl_ref_expr(&mut self, decl: NodeId, span: Span) -> Result<NodeId, NodeError> {
        if !self.contains(decl) {
            return Err(NodeError::UnknownNode { node: decl });
        }
        let Some(qt) = self.as_declaration(decl).and_then(|_| self.type_of(decl)) else {
            return Err(NodeError::ChildCategory {
                variant: Expression::DeclRef.variant_name(),
                index: 1,
                expected: Category::Declaration,
                found: self.category(decl),
            });
        };
        self.try_create(Expression::DeclRef, [Edge::Ref(qt), Edge::Ref(decl)], span)
    }

    pub fn decl_ref_expr(&mut self, decl: NodeId, span: Span) -> NodeId {
        self.try_decl_ref_expr(decl, span)
            .unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn keyword_expr(&mut self, keyword: Keyword, qt: NodeId, span: Span) -> NodeId {
        self.create(Expression::Keyword(keyword), [Edge::Owned(qt)], span)
    }

    /// `self` inside the methods of `record`. The record may still be under
    /// construction.
    pub fn self_expr(&mut self, record: NodeId, span: Span) -> NodeId {
        let qt = self.qualified_ref(record, Constness::Mutable, span);
        self.keyword_expr(Keyword::SelfRef, qt, span)
    }

    pub fn grouping_expr(&mut self, inner: NodeId, span: Span) -> NodeId {
        self.create(Expression::Grouping, [Edge::Owned(inner)], span)
    }

    pub fn assign_expr(&mut self, target: NodeId, source: NodeId, span: Span) -> NodeId {
        self.create(
            Expression::Assign,
            [Edge::Owned(target), Edge::Owned(source)],
            span,
        )
    }

    fn bool_result(&mut self, span: Span) -> NodeId {
        let ty = self.bool_type(span);
        self.qualified(ty, Constness::Const, span)
    }

    pub fn logical_and_expr(&mut self, lhs: NodeId, rhs: NodeId, span: Span) -> NodeId {
        let qt = self.bool_result(span);
        self.create(
            Expression::LogicalAnd,
            [Edge::Owned(qt), Edge::Owned(lhs), Edge::Owned(rhs)],
            span,
        )
    }

    pub fn logical_or_expr(&mut self, lhs: NodeId, rhs: NodeId, span: Span) -> NodeId {
        let qt = self.bool_result(span);
        self.create(
            Expression::LogicalOr,
            [Edge::Owned(qt), Edge::Owned(lhs), Edge::Owned(rhs)],
            span,
        )
    }

    pub fn logical_not_expr(&mut self, operand: NodeId, span: Span) -> NodeId {
        let qt = self.bool_result(span);
        self.create(
            Expression::LogicalNot,
            [Edge::Owned(qt), Edge::Owned(operand)],
            span,
        )
    }

    pub fn ternary_expr(
        &mut self,
        condition: NodeId,
        if_true: NodeId,
        if_false: NodeId,
        span: Span,
    ) -> NodeId {
        self.create(
            Expression::Ternary,
            [
                Edge::Owned(condition),
                Edge::Owned(if_true),
                Edge::Owned(if_false),
            ],
            span,
        )
    }

    pub fn void_expr(&mut self, span: Span) -> NodeId {
        let ty = self.void_type(span);
        let qt = self.qualified(ty, Constness::Const, span);
        self.create(Expression::Void, [Edge::Owned(qt)], span)
    }
}
