use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;

use std::cell::RefCell;

use shinobi_shared::{ApiConfig, RecordKind, Route};

use crate::api;
use crate::cache::CatalogCacheStore;
use crate::group::GroupDetail;
use crate::home::HomePage;
use crate::listing::ListingPage;
use crate::nav::Navbar;
use crate::profile::ProfileDetail;
use crate::widgets::NotFoundPanel;

/// Remote catalog location, resolved at boot.
#[derive(Clone, Copy)]
pub(crate) struct ApiBase(pub RwSignal<ApiConfig>);
/// Route parsed from the URL fragment.
#[derive(Clone, Copy)]
pub(crate) struct CurrentRoute(pub RwSignal<Route>);

struct HashChangeBinding {
    window: web_sys::Window,
    handler: Closure<dyn Fn(web_sys::HashChangeEvent)>,
}

impl Drop for HashChangeBinding {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            "hashchange",
            self.handler.as_ref().unchecked_ref(),
        );
    }
}

thread_local! {
    static HASHCHANGE_BINDING: RefCell<Option<HashChangeBinding>> = const { RefCell::new(None) };
}

fn current_hash() -> String {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .unwrap_or_default()
}

fn bind_hashchange(route: RwSignal<Route>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let handler = Closure::<dyn Fn(web_sys::HashChangeEvent)>::new(move |_| {
        let next = Route::parse(&current_hash());
        if route.get_untracked() != next {
            route.set(next);
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        }
    });
    if window
        .add_event_listener_with_callback("hashchange", handler.as_ref().unchecked_ref())
        .is_err()
    {
        return;
    }
    HASHCHANGE_BINDING.with(|slot| {
        // Dropping the previous binding detaches its listener.
        *slot.borrow_mut() = Some(HashChangeBinding { window, handler });
    });
}

fn set_loading_shell_step(step: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    if let Some(step_el) = document.get_element_by_id("app-loading-step") {
        step_el.set_text_content(Some(step));
    }
}

fn remove_loading_shell() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    if let Some(shell) = document.get_element_by_id("app-loading-shell") {
        shell.remove();
    }
}

/// Base URL baked into the client build, if any, else the public default.
fn build_time_config() -> ApiConfig {
    ApiConfig::from_override(option_env!("NARUTO_API_BASE_URL"))
}

/// Root application component. Provides the API location, route and cache via context.
#[component]
pub fn App() -> impl IntoView {
    let api_base: RwSignal<ApiConfig> = RwSignal::new(build_time_config());
    let route: RwSignal<Route> = RwSignal::new(Route::parse(&current_hash()));
    let config_ready: RwSignal<bool> = RwSignal::new(false);

    provide_context(ApiBase(api_base));
    provide_context(CurrentRoute(route));
    provide_context(CatalogCacheStore::new());

    Effect::new(move || {
        bind_hashchange(route);
        on_cleanup(|| {
            HASHCHANGE_BINDING.with(|slot| {
                slot.borrow_mut().take();
            });
        });
    });

    // The hosting server may point the client at another catalog.
    Effect::new(move || {
        set_loading_shell_step("Resolving catalog endpoint");
        spawn_local(async move {
            if let Some(config) = api::fetch_hosted_config().await {
                api_base.set(config);
            }
            web_sys::console::info_1(
                &format!("catalog base url: {}", api_base.get_untracked().base_url).into(),
            );
            config_ready.set(true);
        });
    });

    Effect::new(move || {
        if config_ready.get() {
            remove_loading_shell();
        }
    });

    view! {
        <div style="min-height: 100vh; background: #0c0e17; color: #e2e0d8;">
            <Navbar />
            <main>
                {move || {
                    if !config_ready.get() {
                        return ().into_any();
                    }
                    match route.get() {
                        Route::Home => view! { <HomePage /> }.into_any(),
                        Route::List(resource) => view! { <ListingPage resource=resource /> }.into_any(),
                        Route::Detail(resource, raw_id) => match resource.kind() {
                            RecordKind::Profile => {
                                view! { <ProfileDetail resource=resource raw_id=raw_id /> }.into_any()
                            }
                            RecordKind::Group => {
                                view! { <GroupDetail resource=resource raw_id=raw_id /> }.into_any()
                            }
                        },
                        Route::NotFound => view! { <NotFoundPanel /> }.into_any(),
                    }
                }}
            </main>
        </div>
    }
}
