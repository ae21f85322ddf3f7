use leptos::prelude::*;

use shinobi_shared::display::{
    badge_layout, field_rows, is_deceased, personal_rows, present, present_list,
    voice_actor_rows,
};
use shinobi_shared::route::parse_id;
use shinobi_shared::{Character, Rank, Resource, TextList};

use crate::detail::use_record;
use crate::widgets::{
    BadgeRow, ErrorPanel, InfoRow, LoadingPanel, PlainList, Section, badge_layout_view,
};

const GALLERY_LIMIT: usize = 4;

/// Detail page for characters, Akatsuki members and tailed beasts.
#[component]
pub(crate) fn ProfileDetail(resource: Resource, raw_id: String) -> impl IntoView {
    let id = Signal::stored(parse_id(Some(&raw_id)));
    let record = use_record::<Character>(resource, id);

    move || {
        if let Some(character) = record.value.get() {
            return view! { <ProfileView character=character /> }.into_any();
        }
        if let Some(err) = record.error.get() {
            return view! { <ErrorPanel message=err.user_message(resource) on_retry=record.retry /> }
                .into_any();
        }
        view! { <LoadingPanel label=format!("Loading {}...", resource.noun(1)) /> }.into_any()
    }
}

#[component]
fn ProfileView(character: Character) -> impl IntoView {
    view! {
        <div style="max-width: 1080px; margin: 0 auto; padding: 32px 24px; display: flex; flex-direction: column; gap: 16px;">
            {profile_header(&character)}
            <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 16px;">
                {personal_section(&character)}
                {classification_section(&character)}
                {abilities_section(&character)}
                {rank_section(character.rank.as_ref())}
                {rows_section("Family", character.family.as_ref().map(field_rows))}
                {rows_section("Debut", character.debut.as_ref().map(field_rows))}
                {rows_section("Voice Actors", character.voice_actors.as_ref().map(voice_actor_rows))}
                {list_section("Titles", present_list(character.personal.as_ref().and_then(|p| p.titles.as_ref())))}
                {list_section("Unique Traits", present_list(character.unique_traits.as_ref()))}
                {list_section("Jinchūriki", present_list(character.personal.as_ref().and_then(|p| p.jinchuriki.as_ref())))}
            </div>
            {gallery(&character)}
        </div>
    }
}

fn profile_header(character: &Character) -> impl IntoView + use<> {
    let image = character.primary_image().map(str::to_owned);
    let village = present(character.village.as_ref()).map(str::to_owned);
    let clan = character.clan().map(TextList::joined).filter(|c| !c.is_empty());
    let status = character.status().map(str::to_owned);
    let name = character.name.clone();

    view! {
        <header style="display: flex; gap: 24px; align-items: center; flex-wrap: wrap; padding: 20px; background: #13161f; border: 1px solid #282c3e; border-radius: 8px;">
            {image.map(|src| view! {
                <img src=src alt=name.clone() style="width: 160px; height: 160px; object-fit: cover; border-radius: 8px; border: 1px solid #282c3e;" />
            })}
            <div style="display: flex; flex-direction: column; gap: 10px;">
                <h1 style="margin: 0; font-family: 'Silkscreen', monospace; font-weight: 400; font-size: 1.8rem; color: #f5c542;">{name.clone()}</h1>
                <div style="display: flex; flex-wrap: wrap; gap: 6px;">
                    {village.map(|v| header_badge(format!("Village: {v}"), "#1E90FF"))}
                    {clan.map(|c| header_badge(format!("Clan: {c}"), "#9932CC"))}
                    {status.map(|s| {
                        let color = if is_deceased(&s) { "#e06c6c" } else { "#4caf7a" };
                        header_badge(s, color)
                    })}
                </div>
            </div>
        </header>
    }
}

fn header_badge(text: String, color: &'static str) -> impl IntoView {
    view! {
        <span style={format!("padding: 3px 10px; border-radius: 4px; border: 1px solid {color}; color: {color}; font-family: 'JetBrains Mono', monospace; font-size: 0.72rem;")}>
            {text}
        </span>
    }
}

fn personal_section(character: &Character) -> Option<AnyView> {
    let rows = personal_rows(character.personal.as_ref()?);
    if rows.is_empty() {
        return None;
    }
    Some(
        view! {
            <Section title="Personal">
                {rows.into_iter().map(|(label, value)| view! { <InfoRow label=label value=value /> }).collect_view()}
            </Section>
        }
        .into_any(),
    )
}

fn classification_section(character: &Character) -> Option<AnyView> {
    let personal = character.personal.as_ref()?;
    let fields: Vec<(&'static str, AnyView)> = [
        ("Classification", personal.classification.as_ref()),
        ("Occupation", personal.occupation.as_ref()),
        ("Affiliation", personal.affiliation.as_ref()),
        ("Team", personal.team.as_ref()),
        ("Partner", personal.partner.as_ref()),
    ]
    .into_iter()
    .filter_map(|(label, field)| {
        let layout = badge_layout(field?, None)?;
        Some((label, badge_layout_view(layout)))
    })
    .collect();
    labelled_section("Classification & Occupation", fields)
}

fn abilities_section(character: &Character) -> Option<AnyView> {
    let mut fields: Vec<(&'static str, AnyView)> = Vec::new();
    if let Some(jutsu) = present_list(character.jutsu.as_ref()) {
        let items: Vec<String> = jutsu.into_iter().map(str::to_owned).collect();
        fields.push(("Jutsu", view! { <PlainList items=items /> }.into_any()));
    }
    if let Some(layout) = character
        .personal
        .as_ref()
        .and_then(|p| p.kekkei_genkai.as_ref())
        .and_then(|k| badge_layout(k, None))
    {
        fields.push(("Kekkei Genkai", badge_layout_view(layout)));
    }
    if let Some(natures) = present_list(character.nature_type.as_ref()) {
        let items: Vec<String> = natures.into_iter().map(str::to_owned).collect();
        fields.push(("Nature Types", view! { <BadgeRow items=items /> }.into_any()));
    }
    if let Some(tools) = present_list(character.tools.as_ref()) {
        let items: Vec<String> = tools.into_iter().map(str::to_owned).collect();
        fields.push(("Tools", view! { <BadgeRow items=items /> }.into_any()));
    }
    labelled_section("Abilities", fields)
}

fn rank_section(rank: Option<&Rank>) -> Option<AnyView> {
    let rows: Vec<(String, String)> = match rank? {
        Rank::Plain(_) => vec![("Rank".to_string(), rank?.display()?)],
        Rank::Detailed(detail) => {
            let mut rows = Vec::new();
            if let Some(ninja_rank) = detail.ninja_rank.as_ref().filter(|r| !r.is_blank()) {
                rows.push(("Ninja Rank".to_string(), ninja_rank.display()));
            }
            if let Some(registration) = present(detail.ninja_registration.as_ref()) {
                rows.push(("Registration".to_string(), registration.to_string()));
            }
            rows
        }
    };
    rows_section("Rank", Some(rows))
}

fn rows_section(title: &'static str, rows: Option<Vec<(String, String)>>) -> Option<AnyView> {
    let rows = rows.filter(|rows| !rows.is_empty())?;
    Some(
        view! {
            <Section title=title>
                {rows.into_iter().map(|(label, value)| view! { <InfoRow label=label value=value /> }).collect_view()}
            </Section>
        }
        .into_any(),
    )
}

fn list_section(title: &'static str, items: Option<Vec<&str>>) -> Option<AnyView> {
    let items: Vec<String> = items?.into_iter().map(str::to_owned).collect();
    Some(
        view! {
            <Section title=title>
                <PlainList items=items />
            </Section>
        }
        .into_any(),
    )
}

fn labelled_section(title: &'static str, fields: Vec<(&'static str, AnyView)>) -> Option<AnyView> {
    if fields.is_empty() {
        return None;
    }
    Some(
        view! {
            <Section title=title>
                {fields
                    .into_iter()
                    .map(|(label, content)| view! {
                        <div style="padding: 6px 0;">
                            <div style="margin-bottom: 5px; color: #9a9590; font-family: 'Inter', system-ui, sans-serif; font-size: 0.78rem;">{label}</div>
                            {content}
                        </div>
                    })
                    .collect_view()}
            </Section>
        }
        .into_any(),
    )
}

fn gallery(character: &Character) -> Option<AnyView> {
    let images: Vec<String> = present_list(character.images.as_ref())?
        .into_iter()
        .take(GALLERY_LIMIT)
        .map(str::to_owned)
        .collect();
    if images.len() < 2 {
        return None;
    }
    let name = character.name.clone();
    Some(
        view! {
            <Section title="Gallery">
                <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(180px, 1fr)); gap: 10px;">
                    {images
                        .into_iter()
                        .map(|src| view! {
                            <img src=src alt=name.clone() loading="lazy" style="width: 100%; aspect-ratio: 1; object-fit: cover; border-radius: 6px; border: 1px solid #282c3e;" />
                        })
                        .collect_view()}
                </div>
            </Section>
        }
        .into_any(),
    )
}
