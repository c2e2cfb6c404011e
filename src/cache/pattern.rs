//! Process-wide cache of compiled regular expression patterns.
//!
//! Regex nodes are persisted as raw pattern strings and the same pattern tends
//! to appear on many holders, so compilation results are shared across the
//! whole process: [`lookup`] compiles a pattern the first time it is seen and
//! hands out the same [`CachedPattern`] for every later request.
//!
//! A pattern that fails to compile is cached too. The failure is part of the
//! result ([`CachedPattern::error`]), not an error of the lookup itself — a
//! malformed pattern simply has no compiled form, and callers that only care
//! about matching see [`None`] from [`CachedPattern::pattern`].

use std::sync::{Arc, OnceLock};

use dashmap::{mapref::entry::Entry, DashMap};
use regex::Regex;

/// The outcome of compiling one pattern string, shared process-wide.
///
/// Holds either the compiled [`Regex`] or the compile error, never both.
/// Equal pattern strings always resolve to the same instance via [`lookup`].
#[derive(Debug, Clone)]
pub struct CachedPattern {
    compiled: Result<Regex, regex::Error>,
}

impl CachedPattern {
    fn compile(pattern: &str) -> Self {
        CachedPattern {
            compiled: Regex::new(pattern),
        }
    }

    /// The compiled pattern, or [`None`] when compilation failed.
    #[must_use]
    pub fn pattern(&self) -> Option<&Regex> {
        self.compiled.as_ref().ok()
    }

    /// The compile error, or [`None`] when compilation succeeded.
    #[must_use]
    pub fn error(&self) -> Option<&regex::Error> {
        self.compiled.as_ref().err()
    }

    /// The compile outcome as a [`Result`].
    pub fn as_result(&self) -> Result<&Regex, &regex::Error> {
        self.compiled.as_ref()
    }
}

fn cache() -> &'static DashMap<String, Arc<CachedPattern>> {
    static CACHE: OnceLock<DashMap<String, Arc<CachedPattern>>> = OnceLock::new();
    CACHE.get_or_init(DashMap::new)
}

/// Returns the shared compile result for `pattern`, compiling on first use.
///
/// Concurrent first lookups of the same pattern may compile more than once,
/// but all callers converge on the single instance that won the entry race.
///
/// # Examples
///
/// ```rust
/// use permnode::cache::pattern::lookup;
///
/// let compiled = lookup("^abc$");
/// assert!(compiled.pattern().unwrap().is_match("abc"));
///
/// let broken = lookup("[unclosed");
/// assert!(broken.pattern().is_none());
/// assert!(broken.error().is_some());
/// ```
#[must_use]
pub fn lookup(pattern: &str) -> Arc<CachedPattern> {
    let cache = cache();
    if let Some(hit) = cache.get(pattern) {
        return Arc::clone(hit.value());
    }

    // Compile outside the entry lock; a concurrent compile of the same
    // pattern is wasted work, not an inconsistency.
    let compiled = Arc::new(CachedPattern::compile(pattern));
    match cache.entry(pattern.to_string()) {
        Entry::Occupied(existing) => Arc::clone(existing.get()),
        Entry::Vacant(slot) => {
            slot.insert(Arc::clone(&compiled));
            compiled
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_compiles_valid_pattern() {
        let compiled = lookup("^perm\\.[a-z]+$");
        let regex = compiled.pattern().unwrap();
        assert!(regex.is_match("perm.use"));
        assert!(!regex.is_match("perm.USE"));
        assert!(compiled.error().is_none());
    }

    #[test]
    fn test_lookup_caches_invalid_pattern() {
        let broken = lookup("(oops");
        assert!(broken.pattern().is_none());
        assert!(broken.error().is_some());
        assert!(broken.as_result().is_err());
    }

    #[test]
    fn test_lookup_shares_instances() {
        let first = lookup("shared-[0-9]+");
        let second = lookup("shared-[0-9]+");
        assert!(Arc::ptr_eq(&first, &second));
    }
}
