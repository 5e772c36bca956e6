//! Declarations.

use sable_ir::Name;

/// How an argument is passed to a callable.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ParameterKind {
    In,
    InOut,
    Copy,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Linkage {
    Private,
    Public,
}

/// Declaration variants. Child 0 is always the declared qualified type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Declaration {
    /// Struct field, with an optional default expression.
    Field { id: Name },
    /// Callable operand, with an optional default expression.
    Parameter { id: Name, kind: ParameterKind },
    LocalVariable { id: Name },
    GlobalVariable { id: Name, linkage: Linkage },
    /// Requires a value expression.
    Constant { id: Name },
    /// Binds a name to a type.
    Type { id: Name },
    /// Tuple element; elements may be unnamed.
    TupleElement { id: Option<Name> },
}

impl Declaration {
    /// The declared identifier, if the declaration has one.
    pub const fn id(self) -> Option<Name> {
        match self {
            Declaration::Field { id }
            | Declaration::Parameter { id, .. }
            | Declaration::LocalVariable { id }
            | Declaration::GlobalVariable { id, .. }
            | Declaration::Constant { id }
            | Declaration::Type { id } => Some(id),
            Declaration::TupleElement { id } => id,
        }
    }

    pub const fn variant_name(self) -> &'static str {
        match self {
            Declaration::Field { .. } => "declaration::Field",
            Declaration::Parameter { .. } => "declaration::Parameter",
            Declaration::LocalVariable { .. } => "declaration::LocalVariable",
            Declaration::GlobalVariable { .. } => "declaration::GlobalVariable",
            Declaration::Constant { .. } => "declaration::Constant",
            Declaration::Type { .. } => "declaration::Type",
            Declaration::TupleElement { .. } => "declaration::TupleElement",
        }
    }
}
