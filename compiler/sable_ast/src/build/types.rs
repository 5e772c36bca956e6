use sable_ir::Span;

use crate::kind::{is_valid_integer_width, Constness, Ctor, QualifiedType, Qualifiers, UnqualifiedType};
use crate::{AstContext, Edge, NodeError, NodeId};

impl AstContext {
    /// A type without children: any primitive, `Unknown`, or `Name`.
    pub fn leaf_type(&mut self, ty: UnqualifiedType, span: Span) -> NodeId {
        self.create(ty, [], span)
    }

    pub fn bool_type(&mut self, span: Span) -> NodeId {
        self.leaf_type(UnqualifiedType::Bool, span)
    }

    pub fn string_type(&mut self, span: Span) -> NodeId {
        self.leaf_type(UnqualifiedType::String, span)
    }

    pub fn void_type(&mut self, span: Span) -> NodeId {
        self.leaf_type(UnqualifiedType::Void, span)
    }

    pub fn unknown_type(&mut self, span: Span) -> NodeId {
        self.leaf_type(UnqualifiedType::Unknown, span)
    }

    /// Placeholder naming a type that has not been looked up yet.
    pub fn name_type(&mut self, id: &str, span: Span) -> NodeId {
        let id = self.intern(id);
        self.leaf_type(UnqualifiedType::Name { id }, span)
    }

    pub fn try_signed_integer_type(&mut self, width: u16, span: Span) -> Result<NodeId, NodeError> {
        self.try_integer_type(true, width, span)
    }

    pub fn signed_integer_type(&mut self, width: u16, span: Span) -> NodeId {
        self.try_signed_integer_type(width, span)
            .unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn try_unsigned_integer_type(
        &mut self,
        width: u16,
        span: Span,
    ) -> Result<NodeId, NodeError> {
        self.try_integer_type(false, width, span)
    }

    pub fn unsigned_integer_type(&mut self, width: u16, span: Span) -> NodeId {
        self.try_unsigned_integer_type(width, span)
            .unwrap_or_else(|e| panic!("{e}"))
    }

    /// Integer types own their default-value ctor, whose type points back
    /// at the integer type. Build the shell first, hang the ctor off it,
    /// then freeze.
    fn try_integer_type(&mut self, signed: bool, width: u16, span: Span) -> Result<NodeId, NodeError> {
        if !is_valid_integer_width(width) {
            return Err(NodeError::InvalidIntegerWidth { width });
        }
        let (ty, ctor) = if signed {
            (
                UnqualifiedType::SignedInteger { width },
                Ctor::SignedInteger { value: 0, width },
            )
        } else {
            (
                UnqualifiedType::UnsignedInteger { width },
                Ctor::UnsignedInteger { value: 0, width },
            )
        };
        let shell = self.begin(ty, span);
        let qt = self.try_create(
            QualifiedType::new(Qualifiers::CONST),
            [Edge::Ref(shell)],
            span,
        )?;
        let default = self.try_create(ctor, [Edge::Owned(qt)], span)?;
        self.try_push_child(shell, Edge::Owned(default))?;
        self.try_freeze(shell)?;
        Ok(shell)
    }

    /// Tuple type over `elements`, each a `TupleElement` declaration.
    pub fn tuple_type(&mut self, elements: impl IntoIterator<Item = NodeId>, span: Span) -> NodeId {
        self.create(UnqualifiedType::Tuple, elements.into_iter().map(Edge::Owned), span)
    }

    /// Struct type over `fields`, each a `Field` declaration.
    pub fn struct_type(&mut self, fields: impl IntoIterator<Item = NodeId>, span: Span) -> NodeId {
        self.create(UnqualifiedType::Struct, fields.into_iter().map(Edge::Owned), span)
    }

    /// Empty struct under construction; fields are pushed once they can
    /// refer back to it, then the struct is frozen.
    pub fn begin_struct_type(&mut self, span: Span) -> NodeId {
        self.begin(UnqualifiedType::Struct, span)
    }

    pub fn operand_list_type(
        &mut self,
        operands: impl IntoIterator<Item = NodeId>,
        span: Span,
    ) -> NodeId {
        self.create(
            UnqualifiedType::OperandList,
            operands.into_iter().map(Edge::Owned),
            span,
        )
    }

    /// Callable type; `result` is a qualified type, `operands` an operand list.
    pub fn function_type(&mut self, result: NodeId, operands: NodeId, span: Span) -> NodeId {
        self.create(
            UnqualifiedType::Function,
            [Edge::Owned(result), Edge::Owned(operands)],
            span,
        )
    }

    pub fn optional_type(&mut self, element: NodeId, span: Span) -> NodeId {
        self.create(UnqualifiedType::Optional, [Edge::Owned(element)], span)
    }

    pub fn vector_type(&mut self, element: NodeId, span: Span) -> NodeId {
        self.create(UnqualifiedType::Vector, [Edge::Owned(element)], span)
    }

    /// Qualified type owning `ty`.
    pub fn qualified(&mut self, ty: NodeId, constness: Constness, span: Span) -> NodeId {
        self.create(
            QualifiedType::new(constness.into()),
            [Edge::Owned(ty)],
            span,
        )
    }

    /// Qualified type sharing `ty` with other wrappers.
    pub fn qualified_ref(&mut self, ty: NodeId, constness: Constness, span: Span) -> NodeId {
        self.create(QualifiedType::new(constness.into()), [Edge::Ref(ty)], span)
    }

    /// Qualified type still to be determined by inference.
    pub fn inferred(&mut self, span: Span) -> NodeId {
        let unknown = self.unknown_type(span);
        self.create(
            QualifiedType::new(Qualifiers::INFERRED),
            [Edge::Owned(unknown)],
            span,
        )
    }
}
