use leptos::prelude::*;

use shinobi_shared::display::{BadgeLayout, overflow_label};

pub(crate) const PANEL_STYLE: &str = "background: #13161f; border: 1px solid #282c3e; border-radius: 8px; padding: 18px 20px;";
const BADGE_STYLE: &str = "display: inline-flex; align-items: center; padding: 2px 8px; border-radius: 4px; background: #1a1d2a; border: 1px solid #282c3e; color: #e2e0d8; font-family: 'Inter', system-ui, sans-serif; font-size: 0.72rem;";
const OVERFLOW_BADGE_STYLE: &str = "display: inline-flex; align-items: center; padding: 2px 8px; border-radius: 4px; background: transparent; border: 1px dashed #3a3f5c; color: #9a9590; font-family: 'JetBrains Mono', monospace; font-size: 0.68rem;";

/// Generic failure panel. `on_retry` re-issues the failed operation when supplied.
#[component]
pub(crate) fn ErrorPanel(
    #[prop(into)] message: String,
    #[prop(optional)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div style="max-width: 520px; margin: 48px auto; padding: 22px 24px; background: rgba(139,0,0,0.12); border: 1px solid rgba(220,80,80,0.35); border-radius: 8px; text-align: center;">
            <div style="font-family: 'Silkscreen', monospace; font-size: 0.8rem; letter-spacing: 0.12em; text-transform: uppercase; color: #e06c6c; margin-bottom: 8px;">"Error"</div>
            <div style="font-family: 'Inter', system-ui, sans-serif; font-size: 0.92rem; color: #e2e0d8;">{message}</div>
            {on_retry.map(|retry| view! {
                <button
                    style="margin-top: 14px; padding: 6px 16px; background: #1a1d2a; border: 1px solid #282c3e; border-radius: 6px; color: #f5c542; font-family: 'JetBrains Mono', monospace; font-size: 0.75rem; cursor: pointer;"
                    on:click=move |_| retry.run(())
                >
                    "Try again"
                </button>
            })}
        </div>
    }
}

#[component]
pub(crate) fn LoadingPanel(#[prop(into)] label: String) -> impl IntoView {
    view! {
        <div style="display: flex; flex-direction: column; align-items: center; gap: 12px; padding: 64px 0; color: #9a9590; font-family: 'JetBrains Mono', monospace; font-size: 0.78rem;">
            <div class="spinner" style="width: 22px; height: 22px; border: 2px solid #282c3e; border-top-color: #f5c542; border-radius: 50%;" />
            <span>{label}</span>
        </div>
    }
}

#[component]
pub(crate) fn EmptyPanel(#[prop(into)] label: String) -> impl IntoView {
    view! {
        <div style="padding: 64px 0; text-align: center; color: #5a5860; font-family: 'Inter', system-ui, sans-serif; font-size: 0.95rem;">
            {label}
        </div>
    }
}

#[component]
pub(crate) fn NotFoundPanel() -> impl IntoView {
    view! {
        <div style="max-width: 520px; margin: 64px auto; text-align: center;">
            <div style="font-family: 'Silkscreen', monospace; font-size: 1.6rem; color: #f5c542;">"404"</div>
            <div style="margin-top: 8px; color: #9a9590; font-family: 'Inter', system-ui, sans-serif;">"This page does not exist."</div>
            <a href="#/" style="display: inline-block; margin-top: 16px; color: #e2e0d8; font-family: 'JetBrains Mono', monospace; font-size: 0.78rem;">"Back to home"</a>
        </div>
    }
}

/// Titled panel wrapping one group of detail rows.
#[component]
pub(crate) fn Section(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section style=PANEL_STYLE>
            <h2 style="margin: 0 0 12px; font-family: 'Silkscreen', monospace; font-size: 0.82rem; font-weight: 400; letter-spacing: 0.14em; text-transform: uppercase; color: #5a5860;">
                {title}
            </h2>
            {children()}
        </section>
    }
}

#[component]
pub(crate) fn InfoRow(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div style="display: flex; justify-content: space-between; gap: 16px; padding: 6px 0; border-bottom: 1px solid rgba(40,44,62,0.5);">
            <span style="color: #9a9590; font-family: 'Inter', system-ui, sans-serif; font-size: 0.82rem;">{label}</span>
            <span style="color: #e2e0d8; font-family: 'JetBrains Mono', monospace; font-size: 0.8rem; text-align: right;">{value}</span>
        </div>
    }
}

/// Badges for the given entries, with an optional trailing "+N more".
#[component]
pub(crate) fn BadgeRow(items: Vec<String>, #[prop(optional)] overflow: usize) -> impl IntoView {
    view! {
        <div style="display: flex; flex-wrap: wrap; gap: 5px;">
            {items.into_iter().map(|item| view! { <span style=BADGE_STYLE>{item}</span> }).collect_view()}
            {(overflow > 0).then(|| view! { <span style=OVERFLOW_BADGE_STYLE>{overflow_label(overflow)}</span> })}
        </div>
    }
}

/// Plain text for a single value, badges for a list.
pub(crate) fn badge_layout_view(layout: BadgeLayout) -> AnyView {
    match layout {
        BadgeLayout::Text(text) => view! {
            <span style="color: #e2e0d8; font-family: 'Inter', system-ui, sans-serif; font-size: 0.85rem;">{text}</span>
        }
        .into_any(),
        BadgeLayout::Badges { shown, overflow } => view! { <BadgeRow items=shown overflow=overflow /> }.into_any(),
    }
}

/// Bulleted list of plain entries.
#[component]
pub(crate) fn PlainList(items: Vec<String>) -> impl IntoView {
    view! {
        <ul style="margin: 0; padding-left: 18px; color: #e2e0d8; font-family: 'Inter', system-ui, sans-serif; font-size: 0.85rem; line-height: 1.6;">
            {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
        </ul>
    }
}
