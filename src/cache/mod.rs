//! Lazy compute-once caching primitives.
//!
//! The parsed node values in this crate are immutable, but one of them
//! ([`crate::node::types::RegexType`]) owns a derived value that is expensive
//! to produce: a compiled regular expression. [`Cache`] is the one stateful
//! building block that makes that possible without giving up immutability
//! anywhere else — a thread-safe slot whose value is computed on first access
//! and memoized for the lifetime of the owner.
//!
//! # Key Components
//!
//! - [`Cache`] - Generic compute-once slot built on [`std::sync::OnceLock`]
//! - [`pattern`] - Process-wide cache of compiled regex patterns
//!
//! # Concurrency
//!
//! [`Cache::get`] guarantees the supplier runs at most once even when many
//! threads race on the first access; every caller observes the same computed
//! instance. No lock is held while the returned reference is in use.

pub mod pattern;

use std::fmt;
use std::sync::OnceLock;

/// A thread-safe slot holding a value computed at most once.
///
/// The supplier is passed to [`Cache::get`] rather than stored, so the cache
/// itself stays a plain data member with no closure lifetime attached to it.
/// Under concurrent first access exactly one supplier call runs; losers of the
/// race block until the winner has stored the value and then observe it.
///
/// # Examples
///
/// ```rust
/// use permnode::cache::Cache;
///
/// let cache: Cache<u64> = Cache::new();
/// assert_eq!(cache.get_if_present(), None);
/// assert_eq!(*cache.get(|| 40 + 2), 42);
/// // Subsequent suppliers are ignored.
/// assert_eq!(*cache.get(|| 0), 42);
/// ```
pub struct Cache<T> {
    cell: OnceLock<T>,
}

impl<T> Cache<T> {
    /// Creates an empty cache.
    #[must_use]
    pub const fn new() -> Self {
        Cache {
            cell: OnceLock::new(),
        }
    }

    /// Returns the cached value, computing it with `supply` on first access.
    ///
    /// `supply` is invoked at most once per cache instance, even under
    /// concurrent first access.
    pub fn get<F>(&self, supply: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.cell.get_or_init(supply)
    }

    /// Returns the cached value if it has already been computed.
    #[must_use]
    pub fn get_if_present(&self) -> Option<&T> {
        self.cell.get()
    }
}

impl<T> Default for Cache<T> {
    fn default() -> Self {
        Cache::new()
    }
}

impl<T: Clone> Clone for Cache<T> {
    fn clone(&self) -> Self {
        let cache = Cache::new();
        if let Some(value) = self.cell.get() {
            let _ = cache.cell.set(value.clone());
        }
        cache
    }
}

impl<T: fmt::Debug> fmt::Debug for Cache<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cell.get() {
            Some(value) => write!(f, "Cache({value:?})"),
            None => write!(f, "Cache(<uncomputed>)"),
        }
    }
}
