use leptos::prelude::*;

use shinobi_shared::display::{CARD_BADGE_LIMIT, accent_color, member_count_label, present, truncate_badges};
use shinobi_shared::route::detail_href;
use shinobi_shared::{Character, Group, Resource};

use crate::widgets::BadgeRow;

const CARD_STYLE: &str = "display: flex; flex-direction: column; background: #13161f; border: 1px solid #282c3e; border-radius: 8px; overflow: hidden; text-decoration: none; color: inherit; transition: border-color 0.15s, transform 0.15s;";

/// Summary card for character-shaped records.
#[component]
pub(crate) fn CharacterCard(resource: Resource, character: Character) -> impl IntoView {
    let href = detail_href(resource, character.id);
    let image = character.primary_image().map(str::to_owned);
    let clan = character.clan().map(|c| c.joined()).filter(|c| !c.is_empty());
    let species = character
        .personal
        .as_ref()
        .and_then(|p| present(p.species.as_ref()))
        .map(str::to_owned);
    let (jutsu, hidden) = character
        .jutsu
        .as_deref()
        .map(|jutsu| truncate_badges(jutsu, CARD_BADGE_LIMIT))
        .unwrap_or_default();
    let name = character.name;

    view! {
        <a href=href style=CARD_STYLE>
            <div style="aspect-ratio: 4 / 3; background: #0c0e17; display: flex; align-items: center; justify-content: center; overflow: hidden;">
                {match image {
                    Some(src) => view! {
                        <img src=src alt=name.clone() loading="lazy" style="width: 100%; height: 100%; object-fit: cover;" />
                    }.into_any(),
                    None => view! {
                        <span style="font-family: 'Silkscreen', monospace; font-size: 0.7rem; color: #3a3f5c;">"No image"</span>
                    }.into_any(),
                }}
            </div>
            <div style="padding: 12px 14px; display: flex; flex-direction: column; gap: 6px;">
                <div style="font-family: 'Inter', system-ui, sans-serif; font-weight: 700; font-size: 0.95rem; color: #e2e0d8;">{name}</div>
                {clan.map(|clan| view! {
                    <div style="font-family: 'JetBrains Mono', monospace; font-size: 0.72rem; color: #9a9590;">"Clan: "{clan}</div>
                })}
                {species.map(|species| view! {
                    <div style="font-family: 'JetBrains Mono', monospace; font-size: 0.72rem; color: #9a9590;">"Species: "{species}</div>
                })}
                {(!jutsu.is_empty()).then(|| view! { <BadgeRow items=jutsu overflow=hidden /> })}
            </div>
        </a>
    }
}

/// Summary card for clans, teams and villages.
#[component]
pub(crate) fn GroupCard(resource: Resource, group: Group) -> impl IntoView {
    let href = detail_href(resource, group.id);
    let accent = accent_color(&group.name);
    let members = group.member_ids().len();

    view! {
        <a href=href style=CARD_STYLE>
            <div style={format!("height: 4px; background: {accent};")} />
            <div style="padding: 14px 16px; display: flex; flex-direction: column; gap: 6px;">
                <div style="font-family: 'Inter', system-ui, sans-serif; font-weight: 700; font-size: 1rem; color: #e2e0d8;">{group.name}</div>
                {(members > 0).then(|| view! {
                    <div style="font-family: 'JetBrains Mono', monospace; font-size: 0.72rem; color: #9a9590;">{member_count_label(members)}</div>
                })}
            </div>
        </a>
    }
}

/// Compact search hit used on the home page.
#[component]
pub(crate) fn SearchResultCard(character: Character) -> impl IntoView {
    let href = detail_href(Resource::Characters, character.id);
    let image = character.primary_image().map(str::to_owned);
    let clan = character.clan().map(|c| c.joined()).filter(|c| !c.is_empty());
    let affiliation = character
        .personal
        .as_ref()
        .and_then(|p| p.affiliation.as_ref())
        .map(|a| a.joined())
        .filter(|a| !a.is_empty());
    let name = character.name;

    view! {
        <a href=href style="display: flex; align-items: center; gap: 12px; padding: 10px 12px; background: #13161f; border: 1px solid #282c3e; border-radius: 6px; text-decoration: none; color: inherit;">
            {image.map(|src| view! {
                <img src=src alt="" loading="lazy" style="width: 40px; height: 40px; border-radius: 50%; object-fit: cover; flex-shrink: 0;" />
            })}
            <div style="min-width: 0;">
                <div style="font-family: 'Inter', system-ui, sans-serif; font-size: 0.9rem; color: #e2e0d8; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;">{name}</div>
                {clan.map(|clan| view! {
                    <div style="font-family: 'JetBrains Mono', monospace; font-size: 0.7rem; color: #9a9590;">{clan}</div>
                })}
                {affiliation.map(|affiliation| view! {
                    <div style="font-family: 'JetBrains Mono', monospace; font-size: 0.68rem; color: #5a5860; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;">{affiliation}</div>
                })}
            </div>
        </a>
    }
}
