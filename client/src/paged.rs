use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use shinobi_shared::paging::{CommitOutcome, ListQuery, PagedList};

use crate::api;
use crate::app::ApiBase;
use crate::cache::{Cacheable, CatalogCacheStore};

/// Reactive handle over one accumulating list.
pub(crate) struct PagedResource<T: Send + Sync + 'static> {
    pub state: RwSignal<PagedList<T>>,
    /// False while the query is disabled (e.g. an empty search box).
    pub enabled: Signal<bool>,
    /// Request the next page. No-op while a request is in flight or when exhausted.
    pub load_next: Callback<()>,
}

impl<T: Send + Sync + 'static> Clone for PagedResource<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for PagedResource<T> {}

/// Accumulate pages for `query`. A change of query resets the accumulation (or restores a
/// fresh cached one) and loads page 1; `None` disables fetching.
pub(crate) fn use_paged_list<T: Cacheable>(query: Signal<Option<ListQuery>>) -> PagedResource<T> {
    let ApiBase(api_base) = expect_context();
    let cache: CatalogCacheStore = expect_context();

    let placeholder = query
        .get_untracked()
        .unwrap_or_else(|| ListQuery::unfiltered(shinobi_shared::Resource::Characters));
    let state: RwSignal<PagedList<T>> = RwSignal::new(PagedList::new(placeholder));
    let enabled = Signal::derive(move || query.get().is_some());

    let load_next = Callback::new(move |()| {
        let Some(Some(ticket)) = state.try_update(|list| list.begin_next()) else {
            return;
        };
        let config = api_base.get_untracked();
        spawn_local(async move {
            let result = api::fetch_page::<T>(&config, &ticket.query, ticket.page).await;
            let committed = state
                .try_update(|list| {
                    let outcome = list.commit(&ticket, result);
                    (outcome == CommitOutcome::Applied && list.error().is_none())
                        .then(|| list.clone())
                })
                .flatten();
            if let Some(list) = committed {
                cache.store_list(list);
            }
        });
    });

    Effect::new(move || {
        let Some(next) = query.get() else {
            state.update(|list| list.abandon_in_flight());
            return;
        };
        let cached = cache.list::<T>(&next);
        state.update(|list| match cached {
            Some(snapshot) => list.restore(snapshot),
            None => list.reset(next),
        });
        if state.with_untracked(PagedList::needs_initial_load) {
            load_next.run(());
        }
    });

    on_cleanup(move || {
        let _ = state.try_update(|list| list.abandon_in_flight());
    });

    PagedResource {
        state,
        enabled,
        load_next,
    }
}
