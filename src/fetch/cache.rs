// In-memory response cache list.
// Append-only entries keyed by canonical identity, first match governing
// freshness, with an optional capacity bound.

use std::time::Duration;

use tokio::time::Instant;

/// A cached response with the identity and instant it was stored under.
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    identity: String,
    timestamp: Instant,
    value: T,
}

impl<T> CacheEntry<T> {
    pub(crate) fn new(identity: String, value: T) -> Self {
        Self {
            identity,
            timestamp: Instant::now(),
            value,
        }
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// Time elapsed since this entry was stored.
    pub fn age(&self) -> Duration {
        Instant::now().duration_since(self.timestamp)
    }
}

/// Append-only list of cache entries.
///
/// A successful fetch for an already-present identity appends a second entry
/// rather than replacing the first; lookups scan linearly and the **first**
/// match governs freshness decisions. This mirrors the behavior the cache
/// contract documents — duplicate retention is deliberate, not collapsed.
///
/// Growth is unbounded unless a capacity is set, in which case the oldest
/// entry is evicted on append. Evicting an old duplicate can promote a newer
/// entry for the same identity to first-match position, which only ever makes
/// the governing timestamp fresher.
#[derive(Debug, Clone)]
pub struct CacheList<T> {
    entries: Vec<CacheEntry<T>>,
    max_entries: Option<usize>,
}

impl<T> CacheList<T> {
    pub fn new(max_entries: Option<usize>) -> Self {
        Self {
            entries: Vec::new(),
            max_entries,
        }
    }

    /// First entry matching the identity, in insertion order.
    pub fn first_match(&self, identity: &str) -> Option<&CacheEntry<T>> {
        self.entries.iter().find(|e| e.identity == identity)
    }

    /// Whether the first match for the identity is within the freshness window.
    pub fn is_fresh(&self, identity: &str, window: Duration) -> bool {
        self.first_match(identity)
            .is_some_and(|entry| entry.age() <= window)
    }

    /// Append an entry, evicting the oldest if at capacity.
    pub fn push(&mut self, entry: CacheEntry<T>) {
        if let Some(max) = self.max_entries {
            if max == 0 {
                return;
            }
            if self.entries.len() >= max {
                self.entries.remove(0);
            }
        }
        self.entries.push(entry);
    }

    /// Drop every entry unconditionally.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[CacheEntry<T>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
