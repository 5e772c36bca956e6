//! Expressions.

use sable_ir::Name;

/// Reserved expression keywords.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Keyword {
    /// The enclosing record instance inside its own methods.
    SelfRef,
    /// The current value inside a hook or attribute (`$$`).
    DollarDollar,
    /// Regular-expression capture groups (`$@`).
    Captures,
}

impl Keyword {
    pub const fn spelling(self) -> &'static str {
        match self {
            Keyword::SelfRef => "self",
            Keyword::DollarDollar => "$$",
            Keyword::Captures => "$@",
        }
    }
}

/// Expression variants.
///
/// Child layouts:
///
/// | variant | children |
/// |---|---|
/// | `Ctor` | ctor |
/// | `Name`, `Keyword`, `Void` | qualified type |
/// | `DeclRef` | qualified type, ref to declaration |
/// | `Grouping` | expression |
/// | `Assign` | target, source |
/// | `LogicalAnd`, `LogicalOr` | qualified type, lhs, rhs |
/// | `LogicalNot` | qualified type, operand |
/// | `Ternary` | condition, true branch, false branch |
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Expression {
    Ctor,
    /// An identifier nobody has looked up yet.
    Name { id: Name },
    /// A resolved reference to a declaration.
    DeclRef,
    Keyword(Keyword),
    Grouping,
    Assign,
    LogicalAnd,
    LogicalOr,
    LogicalNot,
    Ternary,
    Void,
}

impl Expression {
    pub const fn variant_name(self) -> &'static str {
        match self {
            Expression::Ctor => "expression::Ctor",
            Expression::Name { .. } => "expression::Name",
            Expression::DeclRef => "expression::DeclRef",
            Expression::Keyword(_) => "expression::Keyword",
            Expression::Grouping => "expression::Grouping",
            Expression::Assign => "expression::Assign",
            Expression::LogicalAnd => "expression::LogicalAnd",
            Expression::LogicalOr => "expression::LogicalOr",
            Expression::LogicalNot => "expression::LogicalNot",
            Expression::Ternary => "expression::Ternary",
            Expression::Void => "expression::Void",
        }
    }
}
