//! Per-variant creation API.
//!
//! Each helper allocates a node with the child layout its variant requires,
//! synthesizing the qualified types a variant owns (a bool ctor's
//! `const bool`, a logical operator's result type, ...). Helpers panic on
//! layout violations the same way [`AstContext::create`] does; passes that
//! need to recover use `try_create` directly.

mod ctors;
mod decls;
mod exprs;
mod stmts;
mod types;
