use leptos::prelude::*;

use shinobi_shared::debounce::DEBOUNCE_MS;
use shinobi_shared::paging::ListQuery;
use shinobi_shared::route::list_href;
use shinobi_shared::{CatalogError, Character, Resource};

use crate::cards::SearchResultCard;
use crate::debounce::use_debounced;
use crate::listing::SearchInput;
use crate::paged::use_paged_list;
use crate::widgets::{EmptyPanel, ErrorPanel, LoadingPanel};

const QUICK_PICKS: [&str; 4] = ["Naruto Uzumaki", "Uchiha", "Hidden Leaf", "Akatsuki"];

#[component]
pub(crate) fn HomePage() -> impl IntoView {
    view! {
        <div style="max-width: 1180px; margin: 0 auto; padding: 40px 24px;">
            <section style="text-align: center; padding: 24px 0 36px;">
                <h1 style="margin: 0; font-family: 'Silkscreen', monospace; font-weight: 400; font-size: 2.2rem; color: #f5c542;">"Shinobi Atlas"</h1>
                <p style="margin: 10px auto 0; max-width: 560px; color: #9a9590; font-family: 'Inter', system-ui, sans-serif; font-size: 1rem;">
                    "Browse the characters, clans, villages and teams of the Naruto universe."
                </p>
            </section>
            <CharacterSearch />
            <CategoryGrid />
        </div>
    }
}

#[component]
fn CategoryGrid() -> impl IntoView {
    view! {
        <section style="display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 16px; margin-top: 36px;">
            {Resource::ALL
                .into_iter()
                .map(|resource| view! {
                    <a
                        href=list_href(resource)
                        style="display: block; padding: 18px 20px; background: #13161f; border: 1px solid #282c3e; border-radius: 8px; text-decoration: none;"
                    >
                        <div style="font-family: 'Silkscreen', monospace; font-size: 0.95rem; color: #e2e0d8;">{resource.label()}</div>
                        <div style="margin-top: 6px; font-family: 'Inter', system-ui, sans-serif; font-size: 0.82rem; color: #9a9590;">{resource.description()}</div>
                    </a>
                })
                .collect_view()}
        </section>
    }
}

/// Global character search: only the first page is shown, and nothing is fetched for a
/// blank term.
#[component]
fn CharacterSearch() -> impl IntoView {
    let search: RwSignal<String> = RwSignal::new(String::new());
    let debounced = use_debounced::<String>(search.into(), DEBOUNCE_MS);
    let query = Memo::new(move |_| {
        let term = debounced.get();
        let query = ListQuery::new(Resource::Characters, &term);
        query.name.is_some().then_some(query)
    });
    let paged = use_paged_list::<Character>(query.into());
    let state = paged.state;

    let results = move || {
        if !paged.enabled.get() {
            return ().into_any();
        }
        let (loading, error, items) = state.with(|list| {
            (list.is_loading_initial(), list.error().cloned(), list.items().to_vec())
        });
        if loading {
            return view! { <LoadingPanel label="Searching characters..." /> }.into_any();
        }
        if let Some(err) = error {
            let message = CatalogError::from(err).user_message(Resource::Characters);
            return view! { <ErrorPanel message=message on_retry=paged.load_next /> }.into_any();
        }
        if items.is_empty() {
            return view! { <EmptyPanel label="No characters found" /> }.into_any();
        }
        view! {
            <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 10px; margin-top: 16px;">
                {items
                    .into_iter()
                    .map(|character| view! { <SearchResultCard character=character /> })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <section style="padding: 20px 22px; background: #13161f; border: 1px solid #282c3e; border-radius: 8px;">
            <h2 style="margin: 0 0 12px; font-family: 'Silkscreen', monospace; font-weight: 400; font-size: 0.9rem; letter-spacing: 0.12em; text-transform: uppercase; color: #5a5860;">"Character search"</h2>
            <SearchInput value=search placeholder="Search characters..." />
            <div style="display: flex; flex-wrap: wrap; gap: 6px; margin-top: 10px;">
                {QUICK_PICKS
                    .into_iter()
                    .map(|pick| view! {
                        <button
                            style="padding: 3px 10px; background: #1a1d2a; border: 1px solid #282c3e; border-radius: 12px; color: #9a9590; font-family: 'Inter', system-ui, sans-serif; font-size: 0.75rem; cursor: pointer;"
                            on:click=move |_| search.set(pick.to_string())
                        >
                            {pick}
                        </button>
                    })
                    .collect_view()}
            </div>
            {results}
        </section>
    }
}
