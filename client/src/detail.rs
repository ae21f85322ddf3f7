use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use shinobi_shared::cache::Freshness;
use shinobi_shared::roster::resolve_roster;
use shinobi_shared::{CatalogError, Character, FetchError, Group, MissingParameterError, RecordId, Resource};

use crate::api;
use crate::app::ApiBase;
use crate::cache::{Cacheable, CatalogCacheStore};

/// Reactive state of one by-id fetch.
pub(crate) struct RecordResource<T: Send + Sync + 'static> {
    pub value: RwSignal<Option<T>>,
    pub error: RwSignal<Option<CatalogError>>,
    pub loading: RwSignal<bool>,
    pub retry: Callback<()>,
}

impl<T: Send + Sync + 'static> Clone for RecordResource<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for RecordResource<T> {}

/// Fetch `resource/{id}` through the cache. A stale cached record is shown immediately
/// and refreshed silently; a refresh failure keeps the stale record on screen.
pub(crate) fn use_record<T: Cacheable>(
    resource: Resource,
    id: Signal<Result<RecordId, MissingParameterError>>,
) -> RecordResource<T> {
    let ApiBase(api_base) = expect_context();
    let cache: CatalogCacheStore = expect_context();

    let value: RwSignal<Option<T>> = RwSignal::new(None);
    let error: RwSignal<Option<CatalogError>> = RwSignal::new(None);
    let loading: RwSignal<bool> = RwSignal::new(false);
    let request_nonce: RwSignal<u64> = RwSignal::new(0);

    let load = move |id: RecordId| {
        let nonce = request_nonce.get_untracked().wrapping_add(1);
        request_nonce.set(nonce);

        let cached = cache.record::<T>(resource, id);
        let needs_fetch = !matches!(cached, Some((_, Freshness::Fresh)));
        let has_value = cached.is_some();
        value.set(cached.map(|(record, _)| record));
        error.set(None);
        if !needs_fetch {
            loading.set(false);
            return;
        }
        loading.set(!has_value);

        let config = api_base.get_untracked();
        spawn_local(async move {
            let result = api::fetch_record::<T>(&config, resource, id).await;
            if request_nonce.try_get_untracked() != Some(nonce) {
                return;
            }
            match result {
                Ok(record) => {
                    cache.store_record(resource, record.clone());
                    value.set(Some(record));
                }
                Err(err) => {
                    if value.with_untracked(Option::is_none) {
                        error.set(Some(err.into()));
                    }
                }
            }
            loading.set(false);
        });
    };

    let fail = move |err: MissingParameterError| {
        request_nonce.update(|n| *n = n.wrapping_add(1));
        value.set(None);
        loading.set(false);
        error.set(Some(err.into()));
    };

    Effect::new(move || match id.get() {
        Ok(id) => load(id),
        Err(err) => fail(err),
    });

    let retry = Callback::new(move |()| match id.get_untracked() {
        Ok(id) => load(id),
        Err(err) => fail(err),
    });

    on_cleanup(move || {
        let _ = request_nonce.try_update(|n| *n = n.wrapping_add(1));
    });

    RecordResource {
        value,
        error,
        loading,
        retry,
    }
}

/// Reactive state of a group's member roster.
#[derive(Clone, Copy)]
pub(crate) struct RosterResource {
    pub members: RwSignal<Option<Vec<Character>>>,
    pub error: RwSignal<Option<FetchError>>,
    pub loading: RwSignal<bool>,
    pub retry: Callback<()>,
}

/// Resolve every member of `group` once it is available. Members are fetched in
/// parallel; any failure discards the whole roster. Groups without members issue
/// no requests.
pub(crate) fn use_roster(group: Signal<Option<Group>>) -> RosterResource {
    let ApiBase(api_base) = expect_context();
    let cache: CatalogCacheStore = expect_context();

    let members: RwSignal<Option<Vec<Character>>> = RwSignal::new(None);
    let error: RwSignal<Option<FetchError>> = RwSignal::new(None);
    let loading: RwSignal<bool> = RwSignal::new(false);
    let request_nonce: RwSignal<u64> = RwSignal::new(0);

    let load = move |ids: Vec<RecordId>| {
        let nonce = request_nonce.get_untracked().wrapping_add(1);
        request_nonce.set(nonce);
        error.set(None);

        if ids.is_empty() {
            members.set(Some(Vec::new()));
            loading.set(false);
            return;
        }
        loading.set(true);

        let config = api_base.get_untracked();
        spawn_local(async move {
            let result = resolve_roster(&ids, |id| {
                let config = config.clone();
                async move {
                    if let Some((member, Freshness::Fresh)) =
                        cache.record::<Character>(Resource::Characters, id)
                    {
                        return Ok(member);
                    }
                    let member =
                        api::fetch_record::<Character>(&config, Resource::Characters, id).await?;
                    cache.store_record(Resource::Characters, member.clone());
                    Ok(member)
                }
            })
            .await;

            if request_nonce.try_get_untracked() != Some(nonce) {
                return;
            }
            match result {
                Ok(resolved) => members.set(Some(resolved)),
                Err(err) => {
                    members.set(None);
                    error.set(Some(err));
                }
            }
            loading.set(false);
        });
    };

    let member_ids = Memo::new(move |_| group.with(|g| g.as_ref().map(|g| g.member_ids().to_vec())));

    Effect::new(move || match member_ids.get() {
        Some(ids) => load(ids),
        None => {
            request_nonce.update(|n| *n = n.wrapping_add(1));
            members.set(None);
            loading.set(false);
        }
    });

    let retry = Callback::new(move |()| {
        if let Some(ids) = member_ids.get_untracked() {
            load(ids);
        }
    });

    on_cleanup(move || {
        let _ = request_nonce.try_update(|n| *n = n.wrapping_add(1));
    });

    RosterResource {
        members,
        error,
        loading,
        retry,
    }
}
