//! Child layouts.
//!
//! Every variant has a fixed child arity and a fixed category per slot.
//! The context checks a node against its layout when it is frozen and again
//! for every child replacement.

use crate::kind::{Category, Ctor, Declaration, Expression, NodeKind, Statement, UnqualifiedType};

/// What may follow the fixed slots.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Tail {
    None,
    Optional(Category),
    Many(Category),
}

/// Slot categories for one variant.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Layout {
    pub fixed: &'static [Category],
    pub tail: Tail,
}

use Category::{Ctor as C, Declaration as D, Expression as E, QualifiedType as Q, Type as T};

const LEAF: Layout = Layout::fixed(&[]);
const QT: Layout = Layout::fixed(&[Q]);
const QT_OPTIONAL_EXPR: Layout = Layout {
    fixed: &[Q],
    tail: Tail::Optional(E),
};
const DECLS: Layout = Layout {
    fixed: &[],
    tail: Tail::Many(D),
};

impl Layout {
    const fn fixed(fixed: &'static [Category]) -> Self {
        Layout {
            fixed,
            tail: Tail::None,
        }
    }

    /// Layout for a variant.
    pub const fn of(kind: NodeKind) -> Layout {
        match kind {
            NodeKind::Type(ty) => match ty {
                UnqualifiedType::SignedInteger { .. } | UnqualifiedType::UnsignedInteger { .. } => {
                    Layout::fixed(&[C])
                }
                UnqualifiedType::Tuple
                | UnqualifiedType::Struct
                | UnqualifiedType::OperandList => DECLS,
                UnqualifiedType::Function => Layout::fixed(&[Q, T]),
                UnqualifiedType::Optional | UnqualifiedType::Vector => QT,
                _ => LEAF,
            },
            NodeKind::QualifiedType(_) => Layout::fixed(&[T]),
            NodeKind::Ctor(Ctor::Tuple) => Layout {
                fixed: &[Q],
                tail: Tail::Many(E),
            },
            NodeKind::Ctor(_) => QT,
            NodeKind::Expression(expr) => match expr {
                Expression::Ctor => Layout::fixed(&[C]),
                Expression::Name { .. } | Expression::Keyword(_) | Expression::Void => QT,
                Expression::DeclRef => Layout::fixed(&[Q, D]),
                Expression::Grouping => Layout::fixed(&[E]),
                Expression::Assign => Layout::fixed(&[E, E]),
                Expression::LogicalAnd | Expression::LogicalOr => Layout::fixed(&[Q, E, E]),
                Expression::LogicalNot => Layout::fixed(&[Q, E]),
                Expression::Ternary => Layout::fixed(&[E, E, E]),
            },
            NodeKind::Statement(stmt) => match stmt {
                Statement::Break | Statement::Continue | Statement::Yield => LEAF,
                Statement::Expression | Statement::SetLocation => Layout::fixed(&[E]),
                Statement::Declaration => Layout::fixed(&[D]),
                Statement::Return => Layout {
                    fixed: &[],
                    tail: Tail::Optional(E),
                },
            },
            NodeKind::Declaration(decl) => match decl {
                Declaration::Field { .. }
                | Declaration::Parameter { .. }
                | Declaration::LocalVariable { .. }
                | Declaration::GlobalVariable { .. } => QT_OPTIONAL_EXPR,
                Declaration::Constant { .. } => Layout::fixed(&[Q, E]),
                Declaration::Type { .. } | Declaration::TupleElement { .. } => QT,
            },
        }
    }

    /// Category required at `index`, or `None` past the last legal slot.
    pub fn slot(&self, index: usize) -> Option<Category> {
        if let Some(category) = self.fixed.get(index) {
            return Some(*category);
        }
        match self.tail {
            Tail::None => None,
            Tail::Optional(category) => (index == self.fixed.len()).then_some(category),
            Tail::Many(category) => Some(category),
        }
    }

    pub fn accepts_len(&self, len: usize) -> bool {
        let fixed = self.fixed.len();
        match self.tail {
            Tail::None => len == fixed,
            Tail::Optional(_) => len == fixed || len == fixed + 1,
            Tail::Many(_) => len >= fixed,
        }
    }

    /// Human-readable arity, used in layout errors.
    pub fn arity(&self) -> String {
        let fixed = self.fixed.len();
        match self.tail {
            Tail::None => format!("exactly {fixed}"),
            Tail::Optional(_) => format!("{fixed} or {}", fixed + 1),
            Tail::Many(_) => format!("at least {fixed}"),
        }
    }
}
