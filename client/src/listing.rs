use leptos::prelude::*;
use wasm_bindgen::JsCast;

use shinobi_shared::debounce::DEBOUNCE_MS;
use shinobi_shared::display::{ListFooter, empty_list_label};
use shinobi_shared::paging::ListQuery;
use shinobi_shared::{CatalogError, Character, Group, RecordKind, Resource};

use crate::cache::Cacheable;
use crate::cards::{CharacterCard, GroupCard};
use crate::debounce::use_debounced;
use crate::paged::{PagedResource, use_paged_list};
use crate::scroll::ScrollSentinel;
use crate::widgets::{EmptyPanel, ErrorPanel, LoadingPanel};

/// Searchable, infinitely scrolling list of one collection.
#[component]
pub(crate) fn ListingPage(resource: Resource) -> impl IntoView {
    let search: RwSignal<String> = RwSignal::new(String::new());
    let debounced = use_debounced::<String>(search.into(), DEBOUNCE_MS);
    let query = Memo::new(move |_| Some(ListQuery::new(resource, &debounced.get())));

    let body = match resource.kind() {
        RecordKind::Profile => {
            let paged = use_paged_list::<Character>(query.into());
            listing_body(resource, paged, |resource, character| {
                view! { <CharacterCard resource=resource character=character /> }.into_any()
            })
        }
        RecordKind::Group => {
            let paged = use_paged_list::<Group>(query.into());
            listing_body(resource, paged, |resource, group| {
                view! { <GroupCard resource=resource group=group /> }.into_any()
            })
        }
    };

    view! {
        <div style="max-width: 1180px; margin: 0 auto; padding: 32px 24px;">
            <header style="margin-bottom: 24px;">
                <h1 style="margin: 0; font-family: 'Silkscreen', monospace; font-weight: 400; font-size: 1.6rem; color: #f5c542;">{resource.label()}</h1>
                <p style="margin: 6px 0 18px; color: #9a9590; font-family: 'Inter', system-ui, sans-serif; font-size: 0.92rem;">{resource.description()}</p>
                <SearchInput value=search placeholder=format!("Search {}...", resource.label().to_lowercase()) />
            </header>
            {body}
        </div>
    }
}

#[component]
pub(crate) fn SearchInput(value: RwSignal<String>, #[prop(into)] placeholder: String) -> impl IntoView {
    let on_input = move |e: leptos::ev::Event| {
        let Some(target) = e.target() else {
            return;
        };
        let Ok(input) = target.dyn_into::<web_sys::HtmlInputElement>() else {
            return;
        };
        value.set(input.value());
    };

    view! {
        <input
            type="search"
            style="width: 100%; max-width: 480px; padding: 10px 14px; background: #1a1d2a; border: 1px solid #282c3e; border-radius: 6px; color: #e2e0d8; font-family: 'Inter', system-ui, sans-serif; font-size: 0.9rem; outline: none;"
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=on_input
        />
    }
}

fn listing_body<T: Cacheable>(
    resource: Resource,
    paged: PagedResource<T>,
    card: fn(Resource, T) -> AnyView,
) -> AnyView {
    let state = paged.state;
    let can_load = Signal::derive(move || {
        state.with(|list| list.has_next_page() && !list.is_in_flight() && list.error().is_none())
    });

    view! {
        <div>
            {move || {
                let (loading, error, empty) = state.with(|list| {
                    (list.is_loading_initial(), list.error().cloned(), list.items().is_empty())
                });
                if loading {
                    return view! { <LoadingPanel label=format!("Loading {}...", resource.noun(2)) /> }.into_any();
                }
                if let (Some(err), true) = (error, empty) {
                    let message = CatalogError::from(err).user_message(resource);
                    return view! { <ErrorPanel message=message on_retry=paged.load_next /> }.into_any();
                }
                if empty {
                    return view! { <EmptyPanel label=empty_list_label(resource) /> }.into_any();
                }
                ().into_any()
            }}
            <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 16px;">
                <For
                    each=move || state.with(|list| list.items().to_vec())
                    key=|item: &T| item.id()
                    children=move |item| card(resource, item)
                />
            </div>
            {move || {
                let error = state.with(|list| (!list.items().is_empty()).then(|| list.error().cloned()).flatten());
                error.map(|err| {
                    let message = CatalogError::from(err).user_message(resource);
                    view! { <ErrorPanel message=message on_retry=paged.load_next /> }
                })
            }}
            <ScrollSentinel can_load=can_load on_load=paged.load_next>
                {move || state.with(|list| ListFooter::for_list(list).map(|footer| footer.text(resource)))}
            </ScrollSentinel>
        </div>
    }
    .into_any()
}
