//! Unqualified type shapes.

use sable_ir::Name;

/// Bit widths accepted for integer types.
pub const INTEGER_WIDTHS: [u16; 4] = [8, 16, 32, 64];

/// The shape of a type, without const or inference qualifiers.
///
/// Compound shapes carry their parts as children: tuple elements and
/// struct fields are declarations, `Optional`/`Vector` own the element's
/// qualified type, and `Function` owns its result type plus an
/// `OperandList`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnqualifiedType {
    Address,
    Any,
    Bool,
    Error,
    Interval,
    Network,
    Null,
    Port,
    Real,
    RegExp,
    String,
    Time,
    Void,
    /// Placeholder for a type nobody has determined yet.
    Unknown,
    SignedInteger { width: u16 },
    UnsignedInteger { width: u16 },
    Tuple,
    Struct,
    OperandList,
    Function,
    Optional,
    Vector,
    /// Reference to a type by identifier, not yet looked up.
    Name { id: Name },
}

impl UnqualifiedType {
    /// Can a value of this type be stored in a variable or field?
    pub const fn is_allocable(self) -> bool {
        match self {
            Self::Address
            | Self::Bool
            | Self::Interval
            | Self::Network
            | Self::Port
            | Self::Real
            | Self::RegExp
            | Self::String
            | Self::Time
            | Self::SignedInteger { .. }
            | Self::UnsignedInteger { .. }
            | Self::Tuple
            | Self::Struct
            | Self::Optional
            | Self::Vector => true,
            Self::Any
            | Self::Error
            | Self::Null
            | Self::Void
            | Self::Unknown
            | Self::OperandList
            | Self::Function
            | Self::Name { .. } => false,
        }
    }

    /// Does this type have a total order (usable as a sorted key)?
    pub const fn is_sortable(self) -> bool {
        match self {
            Self::Address
            | Self::Bool
            | Self::Interval
            | Self::Network
            | Self::Port
            | Self::Real
            | Self::String
            | Self::Time
            | Self::SignedInteger { .. }
            | Self::UnsignedInteger { .. }
            | Self::Tuple => true,
            Self::Any
            | Self::Error
            | Self::Null
            | Self::RegExp
            | Self::Void
            | Self::Unknown
            | Self::Struct
            | Self::OperandList
            | Self::Function
            | Self::Optional
            | Self::Vector
            | Self::Name { .. } => false,
        }
    }

    /// Placeholders are never resolved; a pass has to replace them.
    pub const fn is_placeholder(self) -> bool {
        matches!(self, Self::Unknown | Self::Name { .. })
    }

    /// Width of an integer type, `None` for everything else.
    pub const fn integer_width(self) -> Option<u16> {
        match self {
            Self::SignedInteger { width } | Self::UnsignedInteger { width } => Some(width),
            _ => None,
        }
    }

    pub const fn variant_name(self) -> &'static str {
        match self {
            Self::Address => "type::Address",
            Self::Any => "type::Any",
            Self::Bool => "type::Bool",
            Self::Error => "type::Error",
            Self::Interval => "type::Interval",
            Self::Network => "type::Network",
            Self::Null => "type::Null",
            Self::Port => "type::Port",
            Self::Real => "type::Real",
            Self::RegExp => "type::RegExp",
            Self::String => "type::String",
            Self::Time => "type::Time",
            Self::Void => "type::Void",
            Self::Unknown => "type::Unknown",
            Self::SignedInteger { .. } => "type::SignedInteger",
            Self::UnsignedInteger { .. } => "type::UnsignedInteger",
            Self::Tuple => "type::Tuple",
            Self::Struct => "type::Struct",
            Self::OperandList => "type::OperandList",
            Self::Function => "type::Function",
            Self::Optional => "type::Optional",
            Self::Vector => "type::Vector",
            Self::Name { .. } => "type::Name",
        }
    }
}

/// Check an integer width against [`INTEGER_WIDTHS`].
pub const fn is_valid_integer_width(width: u16) -> bool {
    matches!(width, 8 | 16 | 32 | 64)
}
