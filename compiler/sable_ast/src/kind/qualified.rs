//! Const and inference qualifiers.

use bitflags::bitflags;

bitflags! {
    /// Qualifiers attached to a type at one point of use.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct Qualifiers: u8 {
        /// Values of this type may not be mutated.
        const CONST = 1 << 0;
        /// Qualifier and type still have to be back-filled by inference.
        const INFERRED = 1 << 1;
    }
}

/// Constness requested when building a qualified type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Constness {
    Const,
    Mutable,
}

impl From<Constness> for Qualifiers {
    fn from(constness: Constness) -> Self {
        match constness {
            Constness::Const => Qualifiers::CONST,
            Constness::Mutable => Qualifiers::empty(),
        }
    }
}

/// Payload of a qualified-type node. Its single child is the unqualified type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct QualifiedType {
    pub quals: Qualifiers,
}

impl QualifiedType {
    pub const fn new(quals: Qualifiers) -> Self {
        QualifiedType { quals }
    }

    #[inline]
    pub const fn is_const(self) -> bool {
        self.quals.contains(Qualifiers::CONST)
    }

    #[inline]
    pub const fn is_inferred(self) -> bool {
        self.quals.contains(Qualifiers::INFERRED)
    }
}
