//! Sharded string interner.
//!
//! Identifiers in the AST (field names, declared ids, unresolved type names)
//! are stored as [`Name`] handles. One interner may back several
//! compilation units at once, so each shard sits behind its own `RwLock`.

use super::Name;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Spellings every unit needs; interned up front so they land in stable slots.
const PRE_INTERNED: &[&str] = &["self", "$$", "$@"];

struct InternShard {
    map: FxHashMap<&'static str, u32>,
    strings: Vec<&'static str>,
}

impl InternShard {
    fn new() -> Self {
        Self {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(64),
        }
    }

    fn with_empty() -> Self {
        let mut shard = Self::new();
        shard.map.insert("", 0);
        shard.strings.push("");
        shard
    }
}

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// Shard exceeded the 28-bit local index space.
    ShardOverflow { shard_idx: usize, count: usize },
}

impl std::fmt::Display for InternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InternError::ShardOverflow { shard_idx, count } => write!(
                f,
                "interner shard {shard_idx} exceeded capacity: {count} strings, max is {}",
                Name::MAX_LOCAL
            ),
        }
    }
}

impl std::error::Error for InternError {}

/// Sharded string interner.
///
/// Interned strings are leaked and live for the rest of the process, which
/// is what makes [`StringInterner::lookup`] return `&'static str`.
pub struct StringInterner {
    shards: [RwLock<InternShard>; Name::NUM_SHARDS],
    total_count: AtomicUsize,
}

impl StringInterner {
    pub fn new() -> Self {
        let shards = std::array::from_fn(|i| {
            if i == 0 {
                RwLock::new(InternShard::with_empty())
            } else {
                RwLock::new(InternShard::new())
            }
        });
        let interner = Self {
            shards,
            total_count: AtomicUsize::new(1),
        };
        for spelling in PRE_INTERNED {
            interner.intern(spelling);
        }
        interner
    }

    #[inline]
    fn shard_for(s: &str) -> u32 {
        let mut hash = 0u32;
        for byte in s.bytes().take(8) {
            hash = hash.wrapping_mul(31).wrapping_add(u32::from(byte));
        }
        hash % 16
    }

    /// Try to intern a string, returning an error on shard overflow.
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        let shard_idx = Self::shard_for(s);
        let shard = &self.shards[shard_idx as usize];

        if let Some(&local) = shard.read().map.get(s) {
            return Ok(Name::new(shard_idx, local));
        }

        let mut guard = shard.write();
        // Another writer may have won the race between the two locks.
        if let Some(&local) = guard.map.get(s) {
            return Ok(Name::new(shard_idx, local));
        }

        let count = guard.strings.len();
        let local = u32::try_from(count)
            .ok()
            .filter(|local| *local <= Name::MAX_LOCAL)
            .ok_or(InternError::ShardOverflow {
                shard_idx: shard_idx as usize,
                count,
            })?;
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        guard.strings.push(leaked);
        guard.map.insert(leaked, local);
        self.total_count.fetch_add(1, Ordering::Relaxed);

        Ok(Name::new(shard_idx, local))
    }

    /// Intern a string.
    ///
    /// # Panics
    /// Panics if a shard overflows. Use `try_intern` for fallible interning.
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Look up the text of an interned name.
    pub fn lookup(&self, name: Name) -> &'static str {
        let guard = self.shards[name.shard()].read();
        guard.strings.get(name.local()).copied().unwrap_or("<unknown name>")
    }

    /// Number of interned strings, including the empty string.
    pub fn len(&self) -> usize {
        self.total_count.load(Ordering::Relaxed)
    }

    /// True if nothing beyond the empty string has been interned.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only name lookup, so renderers need not depend on the concrete interner.
pub trait StringLookup {
    fn lookup(&self, name: Name) -> &str;
}

impl StringLookup for StringInterner {
    fn lookup(&self, name: Name) -> &str {
        StringInterner::lookup(self, name)
    }
}

/// Reference-counted interner handle.
///
/// Each compilation unit owns its own arena but units compiled side by side
/// hold clones of one `SharedInterner`, so identical identifiers compare
/// equal across units.
#[derive(Clone)]
pub struct SharedInterner(Arc<StringInterner>);

impl SharedInterner {
    pub fn new() -> Self {
        SharedInterner(Arc::new(StringInterner::new()))
    }
}

impl Default for SharedInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Deref for SharedInterner {
    type Target = StringInterner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
