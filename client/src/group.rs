use leptos::prelude::*;

use shinobi_shared::display::{accent_color, initials, is_deceased};
use shinobi_shared::route::{detail_href, parse_id};
use shinobi_shared::{CatalogError, Character, Group, Resource};

use crate::detail::{use_record, use_roster};
use crate::widgets::{EmptyPanel, ErrorPanel, LoadingPanel};

/// Detail page for clans, teams and villages: the group plus its resolved members.
#[component]
pub(crate) fn GroupDetail(resource: Resource, raw_id: String) -> impl IntoView {
    let id = Signal::stored(parse_id(Some(&raw_id)));
    let record = use_record::<Group>(resource, id);
    let roster = use_roster(record.value.into());

    move || {
        if let Some(group) = record.value.get() {
            let accent = accent_color(&group.name);
            return view! {
                <div style="max-width: 1080px; margin: 0 auto; padding: 32px 24px;">
                    <header style="padding: 20px; background: #13161f; border: 1px solid #282c3e; border-radius: 8px; position: relative; overflow: hidden;">
                        <div style={format!("position: absolute; left: 0; top: 0; bottom: 0; width: 4px; background: {accent};")} />
                        <div style="font-family: 'JetBrains Mono', monospace; font-size: 0.72rem; color: #5a5860; text-transform: uppercase; letter-spacing: 0.1em;">{resource.noun(1)}</div>
                        <h1 style="margin: 6px 0 0; font-family: 'Silkscreen', monospace; font-weight: 400; font-size: 1.8rem; color: #f5c542;">{group.name.clone()}</h1>
                    </header>
                    <h2 style="margin: 28px 0 14px; font-family: 'Silkscreen', monospace; font-weight: 400; font-size: 0.9rem; letter-spacing: 0.12em; text-transform: uppercase; color: #9a9590;">
                        {format!("Members ({})", group.member_ids().len())}
                    </h2>
                    <RosterGrid roster=roster />
                </div>
            }
            .into_any();
        }
        if let Some(err) = record.error.get() {
            return view! { <ErrorPanel message=err.user_message(resource) on_retry=record.retry /> }
                .into_any();
        }
        view! { <LoadingPanel label=format!("Loading {}...", resource.noun(1)) /> }.into_any()
    }
}

#[component]
fn RosterGrid(roster: crate::detail::RosterResource) -> impl IntoView {
    move || {
        if let Some(err) = roster.error.get() {
            let message = CatalogError::from(err).user_message(Resource::Characters);
            return view! { <ErrorPanel message=message on_retry=roster.retry /> }.into_any();
        }
        if roster.loading.get() {
            return view! { <LoadingPanel label="Loading members..." /> }.into_any();
        }
        match roster.members.get() {
            Some(members) if members.is_empty() => {
                view! { <EmptyPanel label="No members listed" /> }.into_any()
            }
            Some(members) => view! {
                <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(160px, 1fr)); gap: 12px;">
                    {members.into_iter().map(|member| view! { <MemberCard member=member /> }).collect_view()}
                </div>
            }
            .into_any(),
            None => ().into_any(),
        }
    }
}

#[component]
fn MemberCard(member: Character) -> impl IntoView {
    let href = detail_href(Resource::Characters, member.id);
    let image = member.primary_image().map(str::to_owned);
    let status = member.status().map(str::to_owned);
    let fallback = initials(&member.name);
    let name = member.name;

    view! {
        <a href=href style="display: flex; flex-direction: column; align-items: center; gap: 8px; padding: 14px 10px; background: #13161f; border: 1px solid #282c3e; border-radius: 8px; text-decoration: none; color: inherit; text-align: center;">
            {match image {
                Some(src) => view! {
                    <img src=src alt=name.clone() loading="lazy" style="width: 72px; height: 72px; border-radius: 50%; object-fit: cover;" />
                }
                .into_any(),
                None => view! {
                    <div style="width: 72px; height: 72px; border-radius: 50%; background: #1a1d2a; border: 1px solid #282c3e; display: flex; align-items: center; justify-content: center; font-family: 'Silkscreen', monospace; font-size: 1.1rem; color: #9a9590;">
                        {fallback}
                    </div>
                }
                .into_any(),
            }}
            <div style="font-family: 'Inter', system-ui, sans-serif; font-size: 0.85rem; color: #e2e0d8;">{name}</div>
            {status.map(|status| {
                let color = if is_deceased(&status) { "#e06c6c" } else { "#4caf7a" };
                view! {
                    <div style={format!("font-family: 'JetBrains Mono', monospace; font-size: 0.68rem; color: {color};")}>{status}</div>
                }
            })}
        </a>
    }
}
