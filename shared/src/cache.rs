use std::collections::HashMap;
use std::hash::Hash;

use chrono::{DateTime, TimeDelta, Utc};

/// Seconds a fetched entry is served without a background refetch.
pub const STALE_AFTER_SECS: i64 = 5 * 60;

/// Entries kept per cache before the oldest fetch is evicted.
pub const MAX_CACHE_ENTRIES: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    Fresh,
    /// Still usable for display, but eligible for a silent refetch.
    Stale,
}

#[derive(Debug, Clone)]
struct CachedEntry<V> {
    value: V,
    fetched_at: DateTime<Utc>,
}

/// Keyed store of fetched values with a freshness window and bounded size.
#[derive(Debug, Clone)]
pub struct QueryCache<K, V> {
    entries: HashMap<K, CachedEntry<V>>,
    stale_after: TimeDelta,
    max_entries: usize,
}

impl<K: Eq + Hash + Clone, V: Clone> Default for QueryCache<K, V> {
    fn default() -> Self {
        Self::new(TimeDelta::seconds(STALE_AFTER_SECS), MAX_CACHE_ENTRIES)
    }
}

impl<K: Eq + Hash + Clone, V: Clone> QueryCache<K, V> {
    pub fn new(stale_after: TimeDelta, max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            stale_after,
            max_entries: max_entries.max(1),
        }
    }

    /// Cached value together with its freshness at `now`.
    pub fn get(&self, key: &K, now: DateTime<Utc>) -> Option<(V, Freshness)> {
        let entry = self.entries.get(key)?;
        let freshness = if self.is_fresh(entry, now) {
            Freshness::Fresh
        } else {
            Freshness::Stale
        };
        Some((entry.value.clone(), freshness))
    }

    /// Cached value only while inside the freshness window.
    pub fn get_fresh(&self, key: &K, now: DateTime<Utc>) -> Option<V> {
        self.entries
            .get(key)
            .filter(|entry| self.is_fresh(entry, now))
            .map(|entry| entry.value.clone())
    }

    pub fn insert(&mut self, key: K, value: V, now: DateTime<Utc>) {
        if !self.entries.contains_key(&key) {
            while self.entries.len() >= self.max_entries {
                if !self.evict_oldest() {
                    break;
                }
            }
        }
        self.entries.insert(
            key,
            CachedEntry {
                value,
                fetched_at: now,
            },
        );
    }

    pub fn invalidate(&mut self, key: &K) -> Option<V> {
        self.entries.remove(key).map(|entry| entry.value)
    }

    /// Drop every entry that has left the freshness window. Returns how many were removed.
    pub fn evict_stale(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.entries.len();
        let stale_after = self.stale_after;
        self.entries
            .retain(|_, entry| now.signed_duration_since(entry.fetched_at) < stale_after);
        before - self.entries.len()
    }

    fn is_fresh(&self, entry: &CachedEntry<V>, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(entry.fetched_at) < self.stale_after
    }

    fn evict_oldest(&mut self) -> bool {
        let Some(oldest) = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.fetched_at)
            .map(|(key, _)| key.clone())
        else {
            return false;
        };
        self.entries.remove(&oldest).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    impl<K: Eq + Hash + Clone, V: Clone> QueryCache<K, V> {
        fn len(&self) -> usize {
            self.entries.len()
        }

        fn contains(&self, key: &K) -> bool {
            self.entries.contains_key(key)
        }
    }

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn entries_turn_stale_after_five_minutes() {
        let mut cache = QueryCache::<u64, &str>::default();
        cache.insert(1, "Naruto", at(0));

        assert_eq!(cache.get_fresh(&1, at(299)), Some("Naruto"));
        assert_eq!(cache.get(&1, at(299)), Some(("Naruto", Freshness::Fresh)));
        assert_eq!(cache.get_fresh(&1, at(300)), None);
        assert_eq!(cache.get(&1, at(300)), Some(("Naruto", Freshness::Stale)));
    }

    #[test]
    fn reinsert_refreshes_timestamp() {
        let mut cache = QueryCache::<u64, &str>::default();
        cache.insert(1, "old", at(0));
        cache.insert(1, "new", at(400));
        assert_eq!(cache.get_fresh(&1, at(500)), Some("new"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn capacity_evicts_oldest_fetch() {
        let mut cache = QueryCache::<u64, u64>::new(TimeDelta::seconds(STALE_AFTER_SECS), 2);
        cache.insert(1, 10, at(5));
        cache.insert(2, 20, at(1));
        cache.insert(3, 30, at(9));

        assert_eq!(cache.len(), 2);
        assert!(!cache.contains(&2));
        assert!(cache.contains(&1));
        assert!(cache.contains(&3));
    }

    #[test]
    fn evict_stale_keeps_fresh_entries() {
        let mut cache = QueryCache::<u64, u64>::default();
        cache.insert(1, 1, at(0));
        cache.insert(2, 2, at(200));
        assert_eq!(cache.evict_stale(at(350)), 1);
        assert!(cache.contains(&2));
        assert_eq!(cache.invalidate(&2), Some(2));
        assert_eq!(cache.len(), 0);
    }
}
