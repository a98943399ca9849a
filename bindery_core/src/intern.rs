//! String interning for attribute and class names.
//!
//! Attribute dictionaries are keyed by name on every lookup, so names are
//! deduplicated into a global pool once and compared by pointer afterwards.
//! Interning the same text twice yields handles to the same allocation.
//!
//! # Performance
//!
//! - `intern` is O(len) on first sight of a string, O(1) equality after
//! - `InternedString` clones are a refcount bump
//! - Hash and equality never touch string contents

use parking_lot::RwLock;
use rustc_hash::FxHashSet;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::{Arc, OnceLock};

// =============================================================================
// Global Pool
// =============================================================================

/// Global intern pool singleton.
static POOL: OnceLock<RwLock<FxHashSet<Arc<str>>>> = OnceLock::new();

fn pool() -> &'static RwLock<FxHashSet<Arc<str>>> {
    POOL.get_or_init(|| RwLock::new(FxHashSet::default()))
}

/// Intern a string, returning a pooled handle.
///
/// Two calls with equal text return handles to the same allocation, which
/// is what makes pointer-based equality on [`InternedString`] sound.
pub fn intern(s: &str) -> InternedString {
    if let Some(existing) = pool().read().get(s) {
        return InternedString(Arc::clone(existing));
    }

    let mut pool = pool().write();
    // Re-check under the write lock: another thread may have raced us here.
    if let Some(existing) = pool.get(s) {
        return InternedString(Arc::clone(existing));
    }
    let entry: Arc<str> = Arc::from(s);
    pool.insert(Arc::clone(&entry));
    InternedString(entry)
}

// =============================================================================
// Interned String Handle
// =============================================================================

/// Handle to a pooled string.
///
/// Equality and hashing are by pointer, not by content. This is sound only
/// because every handle comes out of the global pool, which guarantees one
/// allocation per distinct string.
#[derive(Clone)]
pub struct InternedString(Arc<str>);

impl InternedString {
    /// Get the underlying text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for InternedString {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for InternedString {}

impl Hash for InternedString {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(Arc::as_ptr(&self.0) as *const u8 as usize);
    }
}

impl Deref for InternedString {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for InternedString {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for InternedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Debug for InternedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", &*self.0)
    }
}

// =============================================================================
// Tests
// =============================================================================
