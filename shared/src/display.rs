use indexmap::IndexMap;

use crate::model::{FieldMap, Personal, Rank, StagedText, TextList};
use crate::paging::PagedList;
use crate::resource::Resource;

/// Life stage shown when a staged value has several entries.
pub const PREFERRED_STAGE: &str = "Part II";

/// Badges shown on summary cards before collapsing the rest into "+N more".
pub const CARD_BADGE_LIMIT: usize = 4;

impl StagedText {
    /// Single display string: the plain value, else the preferred stage, else every
    /// non-blank `stage:value` pair joined by commas. A blank preferred stage counts as
    /// absent.
    pub fn display(&self) -> String {
        match self {
            Self::Plain(text) => text.clone(),
            Self::Staged(stages) => match present(stages.get(PREFERRED_STAGE)) {
                Some(value) => value.to_owned(),
                None => stages
                    .iter()
                    .filter(|(_, value)| !value.trim().is_empty())
                    .map(|(stage, value)| format!("{stage}:{value}"))
                    .collect::<Vec<_>>()
                    .join(","),
            },
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            Self::Plain(text) => text.trim().is_empty(),
            Self::Staged(stages) => stages.values().all(|v| v.trim().is_empty()),
        }
    }
}

impl TextList {
    pub fn items(&self) -> Vec<&str> {
        match self {
            Self::One(text) => vec![text.as_str()],
            Self::Many(items) => items.iter().map(String::as_str).collect(),
        }
        .into_iter()
        .filter(|item| !item.trim().is_empty())
        .collect()
    }

    pub fn joined(&self) -> String {
        self.items().join(", ")
    }

    pub fn is_blank(&self) -> bool {
        self.items().is_empty()
    }
}

impl Rank {
    pub fn display(&self) -> Option<String> {
        match self {
            Self::Plain(text) => present(Some(text)).map(str::to_owned),
            Self::Detailed(detail) => detail
                .ninja_rank
                .as_ref()
                .filter(|rank| !rank.is_blank())
                .map(StagedText::display)
                .or_else(|| present(detail.ninja_registration.as_ref()).map(str::to_owned)),
        }
    }
}

/// How a string-or-list field is laid out as badges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BadgeLayout {
    /// A single value, rendered as plain text.
    Text(String),
    /// One badge per shown entry; `overflow` entries are collapsed.
    Badges { shown: Vec<String>, overflow: usize },
}

impl BadgeLayout {
    pub fn overflow_label(&self) -> Option<String> {
        match self {
            Self::Badges { overflow, .. } if *overflow > 0 => Some(overflow_label(*overflow)),
            _ => None,
        }
    }
}

pub fn overflow_label(hidden: usize) -> String {
    format!("+{hidden} more")
}

/// Split a list into the first `limit` entries and a count of the rest.
pub fn truncate_badges<S: AsRef<str>>(items: &[S], limit: usize) -> (Vec<String>, usize) {
    let kept: Vec<String> = items
        .iter()
        .map(|item| item.as_ref())
        .filter(|item| !item.trim().is_empty())
        .map(str::to_owned)
        .collect();
    if kept.len() <= limit {
        return (kept, 0);
    }
    let overflow = kept.len() - limit;
    (kept.into_iter().take(limit).collect(), overflow)
}

/// Badge layout for a string-or-list field. Lists are never truncated when `limit` is `None`.
pub fn badge_layout(field: &TextList, limit: Option<usize>) -> Option<BadgeLayout> {
    match field {
        TextList::One(text) => present(Some(text)).map(|t| BadgeLayout::Text(t.to_owned())),
        TextList::Many(items) => {
            let limit = limit.unwrap_or(usize::MAX);
            let (shown, overflow) = truncate_badges(items.as_slice(), limit);
            (!shown.is_empty()).then_some(BadgeLayout::Badges { shown, overflow })
        }
    }
}

/// Human label for a free-form key: separators and camelCase boundaries become spaces
/// and every word is capitalized (`appearsIn` → `Appears In`).
pub fn humanize_key(key: &str) -> String {
    let mut spaced = String::with_capacity(key.len() + 4);
    let mut prev_lower = false;
    for ch in key.chars() {
        if ch == '_' || ch == '-' {
            spaced.push(' ');
            prev_lower = false;
            continue;
        }
        if ch.is_uppercase() && prev_lower {
            spaced.push(' ');
        }
        prev_lower = ch.is_lowercase();
        spaced.push(ch);
    }

    spaced
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Label/value rows for every present entry of a free-form mapping.
pub fn field_rows(map: &FieldMap) -> Vec<(String, String)> {
    map.iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(key, value)| (humanize_key(key), value.clone()))
        .collect()
}

/// Label/value rows of the scalar personal details, in display order. Absent or blank
/// fields are skipped.
pub fn personal_rows(personal: &Personal) -> Vec<(&'static str, String)> {
    let staged = |value: Option<&StagedText>| {
        value
            .filter(|v| !v.is_blank())
            .map(StagedText::display)
    };
    let plain = |value: Option<&String>| present(value).map(str::to_owned);

    [
        ("Birthdate", plain(personal.birthdate.as_ref())),
        ("Sex", plain(personal.sex.as_ref())),
        ("Age", staged(personal.age.as_ref())),
        ("Height", staged(personal.height.as_ref())),
        ("Weight", staged(personal.weight.as_ref())),
        ("Blood type", plain(personal.blood_type.as_ref())),
        ("Species", plain(personal.species.as_ref())),
        ("Tailed beast", plain(personal.tailed_beast.as_ref())),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.map(|v| (label, v)))
    .collect()
}

/// One row per locale, multiple actors comma-joined.
pub fn voice_actor_rows(actors: &IndexMap<String, TextList>) -> Vec<(String, String)> {
    actors
        .iter()
        .filter(|(_, names)| !names.is_blank())
        .map(|(locale, names)| (humanize_key(locale), names.joined()))
        .collect()
}

/// `Some(text)` only when the string is non-blank.
pub fn present<S: AsRef<str>>(value: Option<&S>) -> Option<&str> {
    value.map(|s| s.as_ref()).filter(|s| !s.trim().is_empty())
}

/// Non-empty list of non-blank entries, or `None`.
pub fn present_list(values: Option<&Vec<String>>) -> Option<Vec<&str>> {
    let items: Vec<&str> = values?
        .iter()
        .map(String::as_str)
        .filter(|s| !s.trim().is_empty())
        .collect();
    (!items.is_empty()).then_some(items)
}

pub fn is_deceased(status: &str) -> bool {
    status.trim().eq_ignore_ascii_case("deceased")
}

/// Two-letter uppercase avatar fallback.
pub fn initials(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return "-".to_string();
    }
    trimmed.chars().take(2).flat_map(char::to_uppercase).collect()
}

/// Accent palette for group cards.
pub const ACCENT_PALETTE: [&str; 8] = [
    "#FF4500", "#1E90FF", "#008080", "#9932CC", "#8B0000", "#006400", "#FF8C00", "#483D8B",
];

/// Deterministic accent color for a group name.
pub fn accent_color(name: &str) -> &'static str {
    let hash = crc32fast::hash(name.as_bytes());
    ACCENT_PALETTE[hash as usize % ACCENT_PALETTE.len()]
}

pub fn member_count_label(count: usize) -> String {
    if count == 1 {
        "1 character".to_string()
    } else {
        format!("{count} characters")
    }
}

/// Status line under an accumulated list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFooter {
    LoadingMore,
    ScrollForMore,
    Found(usize),
}

impl ListFooter {
    pub fn for_list<T>(list: &PagedList<T>) -> Option<Self> {
        if list.items().is_empty() {
            return None;
        }
        if list.is_fetching_next() {
            Some(Self::LoadingMore)
        } else if list.is_exhausted() {
            Some(Self::Found(list.items().len()))
        } else {
            Some(Self::ScrollForMore)
        }
    }

    pub fn text(self, resource: Resource) -> String {
        match self {
            Self::LoadingMore => format!("Loading more {}...", resource.noun(2)),
            Self::ScrollForMore => "Scroll for more".to_string(),
            Self::Found(count) => format!("{count} {} found", resource.noun(count)),
        }
    }
}

pub fn empty_list_label(resource: Resource) -> String {
    format!("No {} found", resource.noun(2))
}
