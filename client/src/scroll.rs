use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use shinobi_shared::paging::{SCROLL_THRESHOLD, ScrollGate, sentinel_visible};

struct ObserverBinding {
    observer: web_sys::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

impl Drop for ObserverBinding {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Footer element that requests the next page when it scrolls into view.
#[component]
pub(crate) fn ScrollSentinel(
    /// Next page exists, nothing in flight and no error showing.
    #[prop(into)]
    can_load: Signal<bool>,
    on_load: Callback<()>,
    children: Children,
) -> impl IntoView {
    let sentinel = NodeRef::<leptos::html::Div>::new();
    let gate = StoredValue::new(ScrollGate::default());
    let binding = StoredValue::new_local(None::<ObserverBinding>);

    Effect::new(move || {
        let Some(el) = sentinel.get() else {
            return;
        };

        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                let Some(entry) = entries
                    .iter()
                    .filter_map(|e| e.dyn_into::<web_sys::IntersectionObserverEntry>().ok())
                    .last()
                else {
                    return;
                };
                let visible = sentinel_visible(
                    entry.is_intersecting(),
                    entry.intersection_ratio(),
                    SCROLL_THRESHOLD,
                );
                let load = can_load.try_get_untracked().unwrap_or(false);
                if let Some(true) = gate.try_update_value(|g| g.observe(visible, load)) {
                    on_load.run(());
                }
            },
        );

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&wasm_bindgen::JsValue::from_f64(SCROLL_THRESHOLD));
        let observer = match web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => observer,
            Err(err) => {
                web_sys::console::warn_1(&err);
                return;
            }
        };
        observer.observe(&el);
        binding.set_value(Some(ObserverBinding {
            observer,
            _callback: callback,
        }));
    });

    // A finished load while the sentinel is still on screen continues paging.
    Effect::new(move |previous: Option<bool>| {
        let ready = can_load.get();
        if ready && previous == Some(false) {
            if let Some(true) = gate.try_update_value(|g| g.rearm(true)) {
                on_load.run(());
            }
        }
        ready
    });

    on_cleanup(move || {
        let _ = binding.try_update_value(|slot| slot.take());
    });

    view! {
        <div
            node_ref=sentinel
            style="display: flex; justify-content: center; padding: 28px 0 36px; font-family: 'JetBrains Mono', monospace; font-size: 0.72rem; color: #5a5860; letter-spacing: 0.04em;"
        >
            {children()}
        </div>
    }
}
