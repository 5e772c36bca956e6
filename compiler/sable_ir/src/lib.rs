//! Sable IR - leaf types shared by every compiler phase
//!
//! - Spans for source locations
//! - Names for interned identifiers
//! - A sharded string interner, shareable across compilation units
//! - A stack-growth guard for deeply recursive tree walks
//!
//! Nothing in here knows about AST nodes; `sable_ast` builds on top.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod interner;
mod name;
mod span;
mod stack;

pub use interner::{InternError, SharedInterner, StringInterner, StringLookup};
pub use name::Name;
pub use span::{Span, SpanError};
pub use stack::ensure_sufficient_stack;
