//! Node arena for one compilation unit.
//!
//! [`AstContext`] stores nodes in parallel arrays indexed by [`NodeId`]:
//! kind, span, child edges, owning parent, and construction state. Nodes
//! are allocated once and released together when the context is dropped,
//! so handles (and `Edge::Ref` back-references) never dangle.
//!
//! # Lifecycle
//!
//! A node starts *under construction* ([`AstContext::begin`]), may receive
//! children ([`AstContext::push_child`]), and is then frozen
//! ([`AstContext::freeze`]), at which point its layout is checked. After
//! freezing, [`AstContext::replace_child`] is the only mutation.
//! [`AstContext::create`] does all three steps at once.

use sable_ir::{Name, SharedInterner, Span, StringInterner};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use std::fmt;

use crate::kind::{
    Category, Ctor, Declaration, Expression, NodeKind, QualifiedType, Qualifiers, Statement,
    UnqualifiedType,
};
use crate::layout::Layout;
use crate::{Edge, NodeError, NodeId};

/// Handle for the node allocated after `len` others. `NodeId::INVALID`
/// is never handed out.
fn next_node_id(len: usize) -> Option<NodeId> {
    u32::try_from(len)
        .ok()
        .filter(|&index| index != NodeId::INVALID.raw())
        .map(NodeId::new)
}

/// Child edges of one node. Most nodes have at most four children.
pub type Children = SmallVec<[Edge; 4]>;

pub struct AstContext {
    interner: SharedInterner,
    kinds: Vec<NodeKind>,
    spans: Vec<Span>,
    children: Vec<Children>,
    /// Owning parent; `None` for roots, detached nodes, and nodes reachable only by `Ref`.
    parents: Vec<Option<NodeId>>,
    frozen: Vec<bool>,
}

impl AstContext {
    pub fn new(interner: SharedInterner) -> Self {
        AstContext {
            interner,
            kinds: Vec::new(),
            spans: Vec::new(),
            children: Vec::new(),
            parents: Vec::new(),
            frozen: Vec::new(),
        }
    }

    /// Create a context pre-sized for a source file of `source_len` bytes
    /// (roughly one node per 16 bytes of source).
    pub fn with_capacity(interner: SharedInterner, source_len: usize) -> Self {
        let estimated = source_len / 16;
        AstContext {
            interner,
            kinds: Vec::with_capacity(estimated),
            spans: Vec::with_capacity(estimated),
            children: Vec::with_capacity(estimated),
            parents: Vec::with_capacity(estimated),
            frozen: Vec::with_capacity(estimated),
        }
    }

    #[inline]
    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    /// Handle to the interner, for sharing it with another unit.
    pub fn shared_interner(&self) -> &SharedInterner {
        &self.interner
    }

    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.interner.intern(s)
    }

    /// Number of allocated nodes.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Does `id` name a node of this context?
    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.kinds.len()
    }

    // Queries

    #[inline]
    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.kinds[id.index()]
    }

    #[inline]
    pub fn category(&self, id: NodeId) -> Category {
        self.kind(id).category()
    }

    #[inline]
    pub fn is_category(&self, id: NodeId, category: Category) -> bool {
        self.category(id) == category
    }

    #[inline]
    pub fn span(&self, id: NodeId) -> Span {
        self.spans[id.index()]
    }

    #[inline]
    pub fn children(&self, id: NodeId) -> &[Edge] {
        &self.children[id.index()]
    }

    #[inline]
    pub fn edge(&self, id: NodeId, index: usize) -> Option<Edge> {
        self.children(id).get(index).copied()
    }

    /// Target of child `index`, owned or not.
    #[inline]
    pub fn child(&self, id: NodeId, index: usize) -> Option<NodeId> {
        self.edge(id, index).map(Edge::target)
    }

    /// Owned children in order, skipping `Ref` edges.
    pub fn owned_children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(id).iter().filter_map(|edge| match edge {
            Edge::Owned(child) => Some(*child),
            Edge::Ref(_) => None,
        })
    }

    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parents[id.index()]
    }

    #[inline]
    pub fn is_frozen(&self, id: NodeId) -> bool {
        self.frozen[id.index()]
    }

    // Typed views

    pub fn as_type(&self, id: NodeId) -> Option<UnqualifiedType> {
        match self.kind(id) {
            NodeKind::Type(ty) => Some(ty),
            _ => None,
        }
    }

    pub fn as_qualified_type(&self, id: NodeId) -> Option<QualifiedType> {
        match self.kind(id) {
            NodeKind::QualifiedType(qt) => Some(qt),
            _ => None,
        }
    }

    pub fn as_ctor(&self, id: NodeId) -> Option<Ctor> {
        match self.kind(id) {
            NodeKind::Ctor(ctor) => Some(ctor),
            _ => None,
        }
    }

    pub fn as_expression(&self, id: NodeId) -> Option<Expression> {
        match self.kind(id) {
            NodeKind::Expression(expr) => Some(expr),
            _ => None,
        }
    }

    pub fn as_statement(&self, id: NodeId) -> Option<Statement> {
        match self.kind(id) {
            NodeKind::Statement(stmt) => Some(stmt),
            _ => None,
        }
    }

    pub fn as_declaration(&self, id: NodeId) -> Option<Declaration> {
        match self.kind(id) {
            NodeKind::Declaration(decl) => Some(decl),
            _ => None,
        }
    }

    /// Qualified type of the value a ctor, expression or declaration produces.
    ///
    /// `None` if the chain of forwarding expressions loops back on itself.
    pub fn type_of(&self, id: NodeId) -> Option<NodeId> {
        self.type_of_guarded(id, &mut FxHashSet::default())
    }

    fn type_of_guarded(&self, id: NodeId, seen: &mut FxHashSet<NodeId>) -> Option<NodeId> {
        if !seen.insert(id) {
            return None;
        }
        sable_ir::ensure_sufficient_stack(|| match self.kind(id) {
            NodeKind::Ctor(_) | NodeKind::Declaration(_) => self.child(id, 0),
            NodeKind::Expression(expr) => match expr {
                Expression::Ctor | Expression::Grouping | Expression::Assign => self
                    .child(id, 0)
                    .and_then(|inner| self.type_of_guarded(inner, seen)),
                Expression::Ternary => self
                    .child(id, 1)
                    .and_then(|branch| self.type_of_guarded(branch, seen)),
                Expression::Name { .. }
                | Expression::DeclRef
                | Expression::Keyword(_)
                | Expression::LogicalAnd
                | Expression::LogicalOr
                | Expression::LogicalNot
                | Expression::Void => self.child(id, 0),
            },
            NodeKind::Type(_) | NodeKind::QualifiedType(_) | NodeKind::Statement(_) => None,
        })
    }

    /// The unqualified type wrapped by a qualified-type node.
    pub fn unqualified(&self, id: NodeId) -> Option<NodeId> {
        self.as_qualified_type(id).and_then(|_| self.child(id, 0))
    }

    pub fn qualifiers(&self, id: NodeId) -> Option<Qualifiers> {
        self.as_qualified_type(id).map(|qt| qt.quals)
    }

    /// Underlying type shape of a type, qualified type, or value-producing node.
    pub fn value_type(&self, id: NodeId) -> Option<UnqualifiedType> {
        match self.kind(id) {
            NodeKind::Type(ty) => Some(ty),
            NodeKind::QualifiedType(_) => self.unqualified(id).and_then(|ty| self.as_type(ty)),
            kind if kind.produces_value() => self.type_of(id).and_then(|qt| self.value_type(qt)),
            _ => None,
        }
    }

    pub fn is_allocable(&self, id: NodeId) -> bool {
        self.value_type(id).is_some_and(UnqualifiedType::is_allocable)
    }

    pub fn is_sortable(&self, id: NodeId) -> bool {
        self.value_type(id).is_some_and(UnqualifiedType::is_sortable)
    }

    /// The canonical value-0 ctor owned by an integer type.
    pub fn integer_default_ctor(&self, ty: NodeId) -> Option<NodeId> {
        self.as_type(ty)
            .and_then(UnqualifiedType::integer_width)
            .and_then(|_| self.child(ty, 0))
    }

    // Construction

    fn allocate(&mut self, kind: NodeKind, span: Span) -> NodeId {
        let Some(id) = next_node_id(self.kinds.len()) else {
            panic!("node arena is full ({} nodes)", self.kinds.len());
        };
        self.kinds.push(kind);
        self.spans.push(span);
        self.children.push(Children::new());
        self.parents.push(None);
        self.frozen.push(false);
        id
    }

    /// Allocate a node under construction.
    pub fn begin(&mut self, kind: impl Into<NodeKind>, span: Span) -> NodeId {
        self.allocate(kind.into(), span)
    }

    /// Append a child to a node still under construction.
    pub fn try_push_child(&mut self, parent: NodeId, edge: Edge) -> Result<(), NodeError> {
        self.check_known(parent)?;
        let kind = self.kind(parent);
        if self.is_frozen(parent) {
            return Err(NodeError::Frozen {
                variant: kind.variant_name(),
                node: parent,
            });
        }
        let index = self.children(parent).len();
        self.check_slot(kind, index, edge.target())?;
        if let Edge::Owned(child) = edge {
            self.check_adoptable(parent, child)?;
            self.parents[child.index()] = Some(parent);
        }
        self.children[parent.index()].push(edge);
        Ok(())
    }

    pub fn push_child(&mut self, parent: NodeId, edge: Edge) {
        self.try_push_child(parent, edge)
            .unwrap_or_else(|e| panic!("{e}"));
    }

    /// Check the layout and freeze a node.
    pub fn try_freeze(&mut self, id: NodeId) -> Result<(), NodeError> {
        self.check_known(id)?;
        let kind = self.kind(id);
        if self.is_frozen(id) {
            return Err(NodeError::Frozen {
                variant: kind.variant_name(),
                node: id,
            });
        }
        let layout = Layout::of(kind);
        let found = self.children(id).len();
        if !layout.accepts_len(found) {
            return Err(NodeError::ArityMismatch {
                variant: kind.variant_name(),
                expected: layout.arity(),
                found,
            });
        }
        self.frozen[id.index()] = true;
        Ok(())
    }

    pub fn freeze(&mut self, id: NodeId) {
        self.try_freeze(id).unwrap_or_else(|e| panic!("{e}"));
    }

    /// Allocate, attach children, and freeze in one step.
    ///
    /// Nothing is allocated if the children violate the variant's layout.
    pub fn try_create(
        &mut self,
        kind: impl Into<NodeKind>,
        children: impl IntoIterator<Item = Edge>,
        span: Span,
    ) -> Result<NodeId, NodeError> {
        let kind = kind.into();
        let children: Children = children.into_iter().collect();
        let layout = Layout::of(kind);
        if !layout.accepts_len(children.len()) {
            return Err(NodeError::ArityMismatch {
                variant: kind.variant_name(),
                expected: layout.arity(),
                found: children.len(),
            });
        }
        for (index, edge) in children.iter().enumerate() {
            self.check_slot(kind, index, edge.target())?;
            if let Edge::Owned(child) = *edge {
                self.check_owned_child(child)?;
                if children[..index].contains(edge) {
                    return Err(NodeError::DuplicateChild { child });
                }
            }
        }

        let id = self.allocate(kind, span);
        for edge in &children {
            if let Edge::Owned(child) = *edge {
                self.parents[child.index()] = Some(id);
            }
        }
        self.children[id.index()] = children;
        self.frozen[id.index()] = true;
        Ok(id)
    }

    /// Panicking form of [`AstContext::try_create`].
    pub fn create(
        &mut self,
        kind: impl Into<NodeKind>,
        children: impl IntoIterator<Item = Edge>,
        span: Span,
    ) -> NodeId {
        self.try_create(kind, children, span)
            .unwrap_or_else(|e| panic!("{e}"))
    }

    // Mutation

    /// Replace child `index` of `parent`, returning the previous edge.
    ///
    /// This is the only mutation allowed once a node is frozen. The
    /// replacement must fit the slot's category, an owned replacement must
    /// be frozen and unowned, and a resolved slot must stay resolved.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn try_replace_child(
        &mut self,
        parent: NodeId,
        index: usize,
        edge: Edge,
    ) -> Result<Edge, NodeError> {
        self.check_known(parent)?;
        let kind = self.kind(parent);
        let Some(old) = self.edge(parent, index) else {
            return Err(NodeError::IndexOutOfBounds {
                variant: kind.variant_name(),
                index,
                len: self.children(parent).len(),
            });
        };
        if old == edge {
            return Ok(old);
        }
        self.check_slot(kind, index, edge.target())?;
        if let Edge::Owned(child) = edge {
            self.check_adoptable(parent, child)?;
        }
        if self.is_resolved(old.target()) && !self.is_resolved(edge.target()) {
            return Err(NodeError::ResolutionRegressed { parent, index });
        }

        if let Edge::Owned(previous) = old {
            self.parents[previous.index()] = None;
        }
        if let Edge::Owned(child) = edge {
            self.parents[child.index()] = Some(parent);
        }
        self.children[parent.index()][index] = edge;
        tracing::trace!(?old, new = ?edge, "replaced child");
        Ok(old)
    }

    pub fn replace_child(&mut self, parent: NodeId, index: usize, edge: Edge) -> Edge {
        self.try_replace_child(parent, index, edge)
            .unwrap_or_else(|e| panic!("{e}"))
    }

    fn check_slot(&self, kind: NodeKind, index: usize, child: NodeId) -> Result<(), NodeError> {
        let layout = Layout::of(kind);
        let Some(expected) = layout.slot(index) else {
            return Err(NodeError::ArityMismatch {
                variant: kind.variant_name(),
                expected: layout.arity(),
                found: index + 1,
            });
        };
        self.check_known(child)?;
        let found = self.category(child);
        if found != expected {
            return Err(NodeError::ChildCategory {
                variant: kind.variant_name(),
                index,
                expected,
                found,
            });
        }
        Ok(())
    }

    fn check_known(&self, id: NodeId) -> Result<(), NodeError> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(NodeError::UnknownNode { node: id })
        }
    }

    fn check_owned_child(&self, child: NodeId) -> Result<(), NodeError> {
        if !self.is_frozen(child) {
            return Err(NodeError::ChildNotFrozen { child });
        }
        if let Some(owner) = self.parent(child) {
            return Err(NodeError::AlreadyOwned { child, owner });
        }
        Ok(())
    }

    fn check_adoptable(&self, parent: NodeId, child: NodeId) -> Result<(), NodeError> {
        self.check_owned_child(child)?;
        let mut cursor = Some(parent);
        while let Some(ancestor) = cursor {
            if ancestor == child {
                return Err(NodeError::OwnershipCycle { parent, child });
            }
            cursor = self.parent(ancestor);
        }
        Ok(())
    }
}

impl fmt::Debug for AstContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AstContext")
            .field("nodes", &self.kinds.len())
            .finish_non_exhaustive()
    }
}
