use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use shinobi_shared::debounce::Debouncer;

/// Signal that follows `source` once it has been stable for `delay_ms`.
///
/// Every change restarts the timer; dropping the pending `Timeout` cancels it, so
/// unmounting mid-delay publishes nothing.
pub(crate) fn use_debounced<T>(source: Signal<T>, delay_ms: u32) -> ReadSignal<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    let initial = source.get_untracked();
    let (settled, set_settled) = signal(initial.clone());
    let state = StoredValue::new(Debouncer::new(initial));
    let pending = StoredValue::new_local(None::<Timeout>);

    Effect::new(move || {
        let value = source.get();
        let Some(token) = state.try_update_value(|debouncer| debouncer.push(value)) else {
            return;
        };
        let timeout = Timeout::new(delay_ms, move || {
            if let Some(Some(next)) = state.try_update_value(|debouncer| debouncer.fire(token)) {
                let _ = set_settled.try_set(next);
            }
        });
        // Replacing the previous timeout drops and cancels it.
        pending.set_value(Some(timeout));
    });

    on_cleanup(move || {
        let _ = state.try_update_value(|debouncer| debouncer.cancel());
        let _ = pending.try_update_value(|timeout| timeout.take());
    });

    settled
}
