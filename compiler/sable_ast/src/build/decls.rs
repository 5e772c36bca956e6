use sable_ir::Span;

use crate::kind::{Declaration, Linkage, ParameterKind};
use crate::{AstContext, Edge, NodeId};

/// Declaration children: the qualified type, then an optional expression.
fn with_optional(qt: NodeId, value: Option<NodeId>) -> impl Iterator<Item = Edge> {
    std::iter::once(Edge::Owned(qt)).chain(value.map(Edge::Owned))
}

impl AstContext {
    pub fn field_decl(
        &mut self,
        id: &str,
        qt: NodeId,
        default: Option<NodeId>,
        span: Span,
    ) -> NodeId {
        let id = self.intern(id);
        self.create(Declaration::Field { id }, with_optional(qt, default), span)
    }

    pub fn parameter_decl(
        &mut self,
        id: &str,
        kind: ParameterKind,
        qt: NodeId,
        default: Option<NodeId>,
        span: Span,
    ) -> NodeId {
        let id = self.intern(id);
        self.create(
            Declaration::Parameter { id, kind },
            with_optional(qt, default),
            span,
        )
    }

    pub fn local_variable_decl(
        &mut self,
        id: &str,
        qt: NodeId,
        init: Option<NodeId>,
        span: Span,
    ) -> NodeId {
        let id = self.intern(id);
        self.create(Declaration::LocalVariable { id }, with_optional(qt, init), span)
    }

    pub fn global_variable_decl(
        &mut self,
        id: &str,
        linkage: Linkage,
        qt: NodeId,
        init: Option<NodeId>,
        span: Span,
    ) -> NodeId {
        let id = self.intern(id);
        self.create(
            Declaration::GlobalVariable { id, linkage },
            with_optional(qt, init),
            span,
        )
    }

    pub fn constant_decl(&mut self, id: &str, qt: NodeId, value: NodeId, span: Span) -> NodeId {
        let id = self.intern(id);
        self.create(
            Declaration::Constant { id },
            [Edge::Owned(qt), Edge::Owned(value)],
            span,
        )
    }

    /// Binds `id` to the type wrapped by `qt`.
    pub fn type_decl(&mut self, id: &str, qt: NodeId, span: Span) -> NodeId {
        let id = self.intern(id);
        self.create(Declaration::Type { id }, [Edge::Owned(qt)], span)
    }

    pub fn tuple_element_decl(&mut self, id: Option<&str>, qt: NodeId, span: Span) -> NodeId {
        let id = id.map(|id| self.intern(id));
        self.create(Declaration::TupleElement { id }, [Edge::Owned(qt)], span)
    }
}
