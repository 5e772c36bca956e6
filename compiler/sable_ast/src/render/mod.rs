//! Node formatting for debugging and pass diagnostics.
//!
//! Rendering never panics: ids outside the context print as
//! `<invalid node>`, so a dump can be taken from inside a failing pass.

use std::fmt::Write;

use sable_ir::{ensure_sufficient_stack, StringLookup};

use crate::kind::{Ctor, Declaration, Expression, Linkage, NodeKind, ParameterKind, UnqualifiedType};
use crate::{AstContext, Edge, NodeId};

const INVALID: &str = "<invalid node>";

impl NodeKind {
    /// Short descriptor of the variant and its payload, e.g.
    /// `type::UnsignedInteger(32)` or `declaration::Field(x)`.
    pub fn describe(self, names: &impl StringLookup) -> String {
        let variant = self.variant_name();
        match self {
            NodeKind::Type(ty) => match ty {
                UnqualifiedType::SignedInteger { width }
                | UnqualifiedType::UnsignedInteger { width } => format!("{variant}({width})"),
                UnqualifiedType::Name { id } => format!("{variant}({})", names.lookup(id)),
                _ => variant.to_string(),
            },
            NodeKind::QualifiedType(qt) => {
                let mut quals = Vec::new();
                if qt.is_const() {
                    quals.push("const");
                }
                if qt.is_inferred() {
                    quals.push("inferred");
                }
                if quals.is_empty() {
                    variant.to_string()
                } else {
                    format!("{variant}({})", quals.join(", "))
                }
            }
            NodeKind::Ctor(ctor) => match ctor {
                Ctor::Null | Ctor::Tuple => variant.to_string(),
                Ctor::Bool(value) => format!("{variant}({value})"),
                Ctor::String(value) => format!("{variant}({:?})", names.lookup(value)),
                Ctor::SignedInteger { value, width } => format!("{variant}({value}, {width})"),
                Ctor::UnsignedInteger { value, width } => format!("{variant}({value}, {width})"),
                Ctor::Real { bits } => format!("{variant}({})", f64::from_bits(bits)),
            },
            NodeKind::Expression(expr) => match expr {
                Expression::Name { id } => format!("{variant}({})", names.lookup(id)),
                Expression::Keyword(keyword) => format!("{variant}({})", keyword.spelling()),
                _ => variant.to_string(),
            },
            NodeKind::Statement(_) => variant.to_string(),
            NodeKind::Declaration(decl) => match decl {
                Declaration::Parameter { id, kind } => {
                    let kind = match kind {
                        ParameterKind::In => "in",
                        ParameterKind::InOut => "inout",
                        ParameterKind::Copy => "copy",
                    };
                    format!("{variant}({}, {kind})", names.lookup(id))
                }
                Declaration::GlobalVariable { id, linkage } => {
                    let linkage = match linkage {
                        Linkage::Private => "private",
                        Linkage::Public => "public",
                    };
                    format!("{variant}({}, {linkage})", names.lookup(id))
                }
                _ => match decl.id() {
                    Some(id) => format!("{variant}({})", names.lookup(id)),
                    None => variant.to_string(),
                },
            },
        }
    }
}

impl AstContext {
    /// Descriptor of one node; see [`NodeKind::describe`].
    pub fn describe(&self, id: NodeId) -> String {
        if self.contains(id) {
            self.kind(id).describe(self.interner())
        } else {
            INVALID.to_string()
        }
    }

    /// Indented rendering of the owned subtree of `root`, one node per
    /// line. `Ref` edges print as `-> #id` and are not followed.
    pub fn dump(&self, root: NodeId) -> String {
        let mut buf = String::new();
        self.dump_into(root, 0, &mut buf);
        buf
    }

    fn dump_into(&self, id: NodeId, depth: usize, buf: &mut String) {
        ensure_sufficient_stack(|| {
            let indent = depth * 2;
            if !self.contains(id) {
                let _ = writeln!(buf, "{:indent$}{INVALID}", "");
                return;
            }
            let _ = writeln!(buf, "{:indent$}{id} {}", "", self.describe(id));
            for edge in self.children(id) {
                match *edge {
                    Edge::Owned(child) => self.dump_into(child, depth + 1, buf),
                    Edge::Ref(target) => {
                        let indent = indent + 2;
                        let _ = writeln!(buf, "{:indent$}-> {target}", "");
                    }
                }
            }
        });
    }
}
