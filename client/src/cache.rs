use chrono::{DateTime, Utc};
use leptos::prelude::*;

use shinobi_shared::cache::{Freshness, QueryCache};
use shinobi_shared::paging::{ListQuery, PagedList};
use shinobi_shared::{CatalogRecord, Character, Group, RecordId, Resource};

/// Accumulated lists and single records of one record shape.
#[derive(Debug, Clone)]
pub(crate) struct RecordCache<T> {
    lists: QueryCache<ListQuery, PagedList<T>>,
    records: QueryCache<(Resource, RecordId), T>,
}

impl<T: Clone> Default for RecordCache<T> {
    fn default() -> Self {
        Self {
            lists: QueryCache::default(),
            records: QueryCache::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct CatalogCache {
    profiles: RecordCache<Character>,
    groups: RecordCache<Group>,
}

impl CatalogCache {
    /// Accumulated list for `query` while fresh. A stale list is dropped so the next
    /// visit starts again from page 1.
    pub fn list<T: Cacheable>(&mut self, query: &ListQuery, now: DateTime<Utc>) -> Option<PagedList<T>> {
        let lists = &mut T::slot_mut(self).lists;
        match lists.get(query, now)? {
            (list, Freshness::Fresh) => Some(list),
            (_, Freshness::Stale) => {
                lists.invalidate(query);
                None
            }
        }
    }

    /// Store an accumulated list, sweeping out lists that have gone stale.
    pub fn store_list<T: Cacheable>(&mut self, list: PagedList<T>, now: DateTime<Utc>) {
        let lists = &mut T::slot_mut(self).lists;
        lists.evict_stale(now);
        lists.insert(list.query().clone(), list, now);
    }

    pub fn record<T: Cacheable>(
        &self,
        resource: Resource,
        id: RecordId,
        now: DateTime<Utc>,
    ) -> Option<(T, Freshness)> {
        T::slot(self).records.get(&(resource, id), now)
    }

    pub fn store_record<T: Cacheable>(&mut self, resource: Resource, value: T, now: DateTime<Utc>) {
        T::slot_mut(self)
            .records
            .insert((resource, value.id()), value, now);
    }
}

/// Record shapes the catalog cache can hold.
pub(crate) trait Cacheable: CatalogRecord + Send + Sync {
    fn slot(cache: &CatalogCache) -> &RecordCache<Self>;
    fn slot_mut(cache: &mut CatalogCache) -> &mut RecordCache<Self>;
}

impl Cacheable for Character {
    fn slot(cache: &CatalogCache) -> &RecordCache<Self> {
        &cache.profiles
    }

    fn slot_mut(cache: &mut CatalogCache) -> &mut RecordCache<Self> {
        &mut cache.profiles
    }
}

impl Cacheable for Group {
    fn slot(cache: &CatalogCache) -> &RecordCache<Self> {
        &cache.groups
    }

    fn slot_mut(cache: &mut CatalogCache) -> &mut RecordCache<Self> {
        &mut cache.groups
    }
}

/// Cache service injected through context at the app root.
#[derive(Clone, Copy)]
pub(crate) struct CatalogCacheStore(pub StoredValue<CatalogCache>);

impl CatalogCacheStore {
    pub fn new() -> Self {
        Self(StoredValue::new(CatalogCache::default()))
    }

    pub fn list<T: Cacheable>(&self, query: &ListQuery) -> Option<PagedList<T>> {
        let now = Utc::now();
        self.0
            .try_update_value(|cache| cache.list(query, now))
            .flatten()
    }

    pub fn store_list<T: Cacheable>(&self, list: PagedList<T>) {
        let now = Utc::now();
        let _ = self.0.try_update_value(|cache| cache.store_list(list, now));
    }

    /// Cached record, stale or not. Stale records are shown while a refetch runs.
    pub fn record<T: Cacheable>(&self, resource: Resource, id: RecordId) -> Option<(T, Freshness)> {
        let now = Utc::now();
        self.0
            .try_with_value(|cache| cache.record(resource, id, now))
            .flatten()
    }

    pub fn store_record<T: Cacheable>(&self, resource: Resource, value: T) {
        let now = Utc::now();
        let _ = self.0.try_update_value(|cache| cache.store_record(resource, value, now));
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;
    use shinobi_shared::Page;

    use super::*;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000 + secs, 0).unwrap()
    }

    fn character(id: RecordId, name: &str) -> Character {
        serde_json::from_value(serde_json::json!({"id": id, "name": name})).unwrap()
    }

    fn group(id: RecordId, name: &str) -> Group {
        serde_json::from_value(serde_json::json!({"id": id, "name": name})).unwrap()
    }

    fn loaded_list(query: ListQuery, names: &[&str]) -> PagedList<Character> {
        let mut list = PagedList::new(query);
        let ticket = list.begin_next().unwrap();
        let items = names
            .iter()
            .enumerate()
            .map(|(i, name)| character(i as RecordId + 1, name))
            .collect();
        let page = Page {
            total: names.len() as u64,
            page_size: 20,
            current_page: 1,
            items,
        };
        list.commit(&ticket, Ok(page));
        list
    }

    #[test]
    fn records_are_keyed_by_resource_and_id() {
        let mut cache = CatalogCache::default();
        cache.store_record(Resource::Characters, character(1, "Naruto Uzumaki"), at(0));
        cache.store_record(Resource::Akatsuki, character(1, "Pain"), at(0));

        let (naruto, freshness) = cache
            .record::<Character>(Resource::Characters, 1, at(10))
            .unwrap();
        assert_eq!(naruto.name, "Naruto Uzumaki");
        assert_eq!(freshness, Freshness::Fresh);
        let (pain, _) = cache.record::<Character>(Resource::Akatsuki, 1, at(10)).unwrap();
        assert_eq!(pain.name, "Pain");
        assert!(cache.record::<Character>(Resource::TailedBeasts, 1, at(10)).is_none());
    }

    #[test]
    fn profiles_and_groups_use_separate_slots() {
        let mut cache = CatalogCache::default();
        cache.store_record(Resource::Clans, group(1, "Uchiha"), at(0));

        assert!(cache.record::<Character>(Resource::Clans, 1, at(0)).is_none());
        let (clan, _) = cache.record::<Group>(Resource::Clans, 1, at(0)).unwrap();
        assert_eq!(clan.name, "Uchiha");
    }

    #[test]
    fn stale_record_is_still_served() {
        let mut cache = CatalogCache::default();
        cache.store_record(Resource::Characters, character(3, "Sakura Haruno"), at(0));
        let (_, freshness) = cache
            .record::<Character>(Resource::Characters, 3, at(301))
            .unwrap();
        assert_eq!(freshness, Freshness::Stale);
    }

    #[test]
    fn fresh_list_is_restored_and_stale_list_dropped() {
        let mut cache = CatalogCache::default();
        let query = ListQuery::new(Resource::Characters, "uchiha");
        cache.store_list(loaded_list(query.clone(), &["Sasuke", "Itachi"]), at(0));

        let restored = cache.list::<Character>(&query, at(60)).unwrap();
        assert_eq!(restored.items().len(), 2);

        assert!(cache.list::<Character>(&query, at(400)).is_none());
        assert!(cache.list::<Character>(&query, at(1)).is_none());
    }

    #[test]
    fn storing_a_list_sweeps_stale_lists() {
        let mut cache = CatalogCache::default();
        let old = ListQuery::new(Resource::Characters, "hyuga");
        let new = ListQuery::new(Resource::Characters, "nara");
        cache.store_list(loaded_list(old.clone(), &["Hinata"]), at(0));
        cache.store_list(loaded_list(new.clone(), &["Shikamaru"]), at(400));

        assert!(cache.list::<Character>(&old, at(0)).is_none());
        assert!(cache.list::<Character>(&new, at(400)).is_some());
    }
}
