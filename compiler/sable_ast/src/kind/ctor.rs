//! Value constructors.

use sable_ir::Name;

/// A node producing a constant value of a statically known type.
///
/// Child 0 of every ctor is the qualified type of the value it builds.
/// `Tuple` additionally owns its element expressions.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Ctor {
    Null,
    Bool(bool),
    String(Name),
    SignedInteger { value: i64, width: u16 },
    UnsignedInteger { value: u64, width: u16 },
    /// Stored as IEEE-754 bits so equality and hashing are total.
    Real { bits: u64 },
    Tuple,
}

impl Ctor {
    pub fn real(value: f64) -> Self {
        Ctor::Real {
            bits: value.to_bits(),
        }
    }

    /// The floating-point value of a `Real` ctor.
    pub fn real_value(self) -> Option<f64> {
        match self {
            Ctor::Real { bits } => Some(f64::from_bits(bits)),
            _ => None,
        }
    }

    pub const fn variant_name(self) -> &'static str {
        match self {
            Ctor::Null => "ctor::Null",
            Ctor::Bool(_) => "ctor::Bool",
            Ctor::String(_) => "ctor::String",
            Ctor::SignedInteger { .. } => "ctor::SignedInteger",
            Ctor::UnsignedInteger { .. } => "ctor::UnsignedInteger",
            Ctor::Real { .. } => "ctor::Real",
            Ctor::Tuple => "ctor::Tuple",
        }
    }
}
