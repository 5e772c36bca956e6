use sable_ir::Span;

use crate::kind::Statement;
use crate::{AstContext, Edge, NodeId};

impl AstContext {
    pub fn break_stmt(&mut self, span: Span) -> NodeId {
        self.create(Statement::Break, [], span)
    }

    pub fn continue_stmt(&mut self, span: Span) -> NodeId {
        self.create(Statement::Continue, [], span)
    }

    pub fn yield_stmt(&mut self, span: Span) -> NodeId {
        self.create(Statement::Yield, [], span)
    }

    pub fn expression_stmt(&mut self, expr: NodeId, span: Span) -> NodeId {
        self.create(Statement::Expression, [Edge::Owned(expr)], span)
    }

    pub fn declaration_stmt(&mut self, decl: NodeId, span: Span) -> NodeId {
        self.create(Statement::Declaration, [Edge::Owned(decl)], span)
    }

    /// Location annotation for the statements that follow.
    pub fn set_location_stmt(&mut self, location: NodeId, span: Span) -> NodeId {
        self.create(Statement::SetLocation, [Edge::Owned(location)], span)
    }

    pub fn return_stmt(&mut self, value: Option<NodeId>, span: Span) -> NodeId {
        self.create(Statement::Return, value.map(Edge::Owned), span)
    }
}
