//! The node taxonomy.
//!
//! `NodeKind` is a closed two-level tag: category first, then the concrete
//! variant with its non-child payload. Children never live in the payload;
//! they are stored by the [`AstContext`](crate::AstContext) as edges.

mod ctor;
mod decl;
mod expr;
mod qualified;
mod stmt;
mod types;

use std::fmt;

pub use ctor::Ctor;
pub use decl::{Declaration, Linkage, ParameterKind};
pub use expr::{Expression, Keyword};
pub use qualified::{Constness, QualifiedType, Qualifiers};
pub use stmt::Statement;
pub use types::{is_valid_integer_width, UnqualifiedType, INTEGER_WIDTHS};

/// Outer tag of a node. Fixed at creation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    Type,
    QualifiedType,
    Ctor,
    Expression,
    Statement,
    Declaration,
}

impl Category {
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Type => "type",
            Category::QualifiedType => "qualified-type",
            Category::Ctor => "ctor",
            Category::Expression => "expression",
            Category::Statement => "statement",
            Category::Declaration => "declaration",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category plus variant payload of one node.
///
/// Derived equality compares exactly the variant and its payload, which is
/// the per-node half of structural equality.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeKind {
    Type(UnqualifiedType),
    QualifiedType(QualifiedType),
    Ctor(Ctor),
    Expression(Expression),
    Statement(Statement),
    Declaration(Declaration),
}

impl NodeKind {
    pub const fn category(self) -> Category {
        match self {
            NodeKind::Type(_) => Category::Type,
            NodeKind::QualifiedType(_) => Category::QualifiedType,
            NodeKind::Ctor(_) => Category::Ctor,
            NodeKind::Expression(_) => Category::Expression,
            NodeKind::Statement(_) => Category::Statement,
            NodeKind::Declaration(_) => Category::Declaration,
        }
    }

    /// Qualified name of the concrete variant, e.g. `"statement::Yield"`.
    pub const fn variant_name(self) -> &'static str {
        match self {
            NodeKind::Type(ty) => ty.variant_name(),
            NodeKind::QualifiedType(_) => "qualified-type",
            NodeKind::Ctor(ctor) => ctor.variant_name(),
            NodeKind::Expression(expr) => expr.variant_name(),
            NodeKind::Statement(stmt) => stmt.variant_name(),
            NodeKind::Declaration(decl) => decl.variant_name(),
        }
    }

    /// Does a node of this kind own (or compute) a value type?
    pub const fn produces_value(self) -> bool {
        matches!(
            self,
            NodeKind::Ctor(_) | NodeKind::Expression(_) | NodeKind::Declaration(_)
        )
    }
}

impl From<UnqualifiedType> for NodeKind {
    fn from(ty: UnqualifiedType) -> Self {
        NodeKind::Type(ty)
    }
}

impl From<QualifiedType> for NodeKind {
    fn from(qt: QualifiedType) -> Self {
        NodeKind::QualifiedType(qt)
    }
}

impl From<Ctor> for NodeKind {
    fn from(ctor: Ctor) -> Self {
        NodeKind::Ctor(ctor)
    }
}

impl From<Expression> for NodeKind {
    fn from(expr: Expression) -> Self {
        NodeKind::Expression(expr)
    }
}

impl From<Statement> for NodeKind {
    fn from(stmt: Statement) -> Self {
        NodeKind::Statement(stmt)
    }
}

impl From<Declaration> for NodeKind {
    fn from(decl: Declaration) -> Self {
        NodeKind::Declaration(decl)
    }
}

#[cfg(test)]
mod tests;
