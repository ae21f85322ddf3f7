use leptos::prelude::*;

use shinobi_shared::Resource;
use shinobi_shared::route::list_href;

use crate::app::CurrentRoute;

#[component]
pub(crate) fn Navbar() -> impl IntoView {
    let CurrentRoute(route) = expect_context();

    view! {
        <nav style="position: sticky; top: 0; z-index: 10; display: flex; align-items: center; gap: 20px; padding: 12px 24px; background: rgba(12,14,23,0.92); border-bottom: 1px solid #282c3e; backdrop-filter: blur(6px); overflow-x: auto;">
            <a href="#/" style="font-family: 'Silkscreen', monospace; font-size: 1rem; color: #f5c542; text-decoration: none; white-space: nowrap;">"Shinobi Atlas"</a>
            <div style="display: flex; gap: 4px;">
                {Resource::ALL
                    .into_iter()
                    .map(|resource| {
                        let active = move || route.with(|r| r.resource() == Some(resource));
                        view! {
                            <a
                                href=list_href(resource)
                                style="padding: 5px 10px; border-radius: 4px; font-family: 'Inter', system-ui, sans-serif; font-size: 0.82rem; text-decoration: none; white-space: nowrap; transition: background 0.15s, color 0.15s;"
                                style:color=move || if active() { "#f5c542" } else { "#9a9590" }
                                style:background=move || if active() { "#1a1d2a" } else { "transparent" }
                            >
                                {resource.label()}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
