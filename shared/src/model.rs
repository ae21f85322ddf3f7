use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

pub type RecordId = u64;

/// Ordered free-form mapping (family relations, debut per medium).
pub type FieldMap = IndexMap<String, String>;

/// A value that is either one string or a mapping of life stage to string,
/// e.g. `"17"` or `{"Part I": "12", "Part II": "17"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StagedText {
    Plain(String),
    Staged(FieldMap),
}

/// A value that is either one string or a list of strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextList {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rank {
    Plain(String),
    Detailed(RankDetail),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankDetail {
    #[serde(default, deserialize_with = "lenient")]
    pub ninja_rank: Option<StagedText>,
    #[serde(default, deserialize_with = "lenient")]
    pub ninja_registration: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Personal {
    #[serde(default, deserialize_with = "lenient")]
    pub birthdate: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub sex: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub age: Option<StagedText>,
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub height: Option<StagedText>,
    #[serde(default, deserialize_with = "lenient")]
    pub weight: Option<StagedText>,
    #[serde(default, deserialize_with = "lenient")]
    pub blood_type: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub kekkei_genkai: Option<TextList>,
    #[serde(default, deserialize_with = "lenient")]
    pub classification: Option<TextList>,
    #[serde(default, deserialize_with = "lenient")]
    pub occupation: Option<TextList>,
    #[serde(default, deserialize_with = "lenient")]
    pub affiliation: Option<TextList>,
    #[serde(default, deserialize_with = "lenient")]
    pub team: Option<TextList>,
    #[serde(default, deserialize_with = "lenient")]
    pub partner: Option<TextList>,
    #[serde(default, deserialize_with = "lenient")]
    pub species: Option<String>,
    #[serde(default, rename = "jinchūriki", deserialize_with = "lenient")]
    pub jinchuriki: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub titles: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub tailed_beast: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub clan: Option<TextList>,
}

/// Character-shaped record. Akatsuki members and tailed beasts share it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: RecordId,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub images: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub debut: Option<FieldMap>,
    #[serde(default, deserialize_with = "lenient")]
    pub jutsu: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub nature_type: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub personal: Option<Personal>,
    #[serde(default, deserialize_with = "lenient")]
    pub rank: Option<Rank>,
    #[serde(default, deserialize_with = "lenient")]
    pub tools: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub family: Option<FieldMap>,
    #[serde(default, deserialize_with = "lenient")]
    pub village: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub unique_traits: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub voice_actors: Option<IndexMap<String, TextList>>,
}

/// Clan, team or village: a name plus member character ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: RecordId,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub characters: Option<Vec<RecordId>>,
}

impl Character {
    pub fn primary_image(&self) -> Option<&str> {
        self.images
            .as_deref()
            .and_then(|images| images.iter().find(|url| !url.trim().is_empty()))
            .map(String::as_str)
    }

    pub fn clan(&self) -> Option<&TextList> {
        self.personal.as_ref()?.clan.as_ref()
    }

    pub fn status(&self) -> Option<&str> {
        self.personal
            .as_ref()?
            .status
            .as_deref()
            .filter(|s| !s.trim().is_empty())
    }
}

impl Group {
    pub fn member_ids(&self) -> &[RecordId] {
        self.characters.as_deref().unwrap_or(&[])
    }
}

/// Records that can be listed and fetched by id.
pub trait CatalogRecord: DeserializeOwned + Clone + 'static {
    fn id(&self) -> RecordId;
    fn name(&self) -> &str;
}

impl CatalogRecord for Character {
    fn id(&self) -> RecordId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl CatalogRecord for Group {
    fn id(&self) -> RecordId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Deserialize an optional field, treating a shape mismatch as absent instead of
/// failing the whole record.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    Ok(serde_json::from_value(value).ok())
}

/// Like [`lenient`] for required text: `null` or a non-string becomes empty.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient::<D, String>(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staged_and_plain_age_both_parse() {
        let staged: Personal =
            serde_json::from_str(r#"{"age": {"Part I": "12", "Part II": "17"}}"#).unwrap();
        let mut expected = FieldMap::new();
        expected.insert("Part I".into(), "12".into());
        expected.insert("Part II".into(), "17".into());
        assert_eq!(staged.age, Some(StagedText::Staged(expected)));

        let plain: Personal = serde_json::from_str(r#"{"age": "Unknown"}"#).unwrap();
        assert_eq!(plain.age, Some(StagedText::Plain("Unknown".into())));
    }

    #[test]
    fn mismatched_field_shape_is_dropped_not_fatal() {
        let character: Character = serde_json::from_str(
            r#"{"id": 7, "name": "Rock Lee", "jutsu": 42, "village": ["Konoha"], "tools": null}"#,
        )
        .unwrap();
        assert_eq!(character.name, "Rock Lee");
        assert_eq!(character.jutsu, None);
        assert_eq!(character.village, None);
        assert_eq!(character.tools, None);
    }

    #[test]
    fn rank_accepts_string_or_structure() {
        let plain: Character =
            serde_json::from_str(r#"{"id": 1, "name": "A", "rank": "Jōnin"}"#).unwrap();
        assert_eq!(plain.rank, Some(Rank::Plain("Jōnin".into())));

        let detailed: Character = serde_json::from_str(
            r#"{"id": 2, "name": "B", "rank": {"ninjaRank": {"Part I": "Genin"}, "ninjaRegistration": "012607"}}"#,
        )
        .unwrap();
        let Some(Rank::Detailed(detail)) = detailed.rank else {
            panic!("expected structured rank");
        };
        assert_eq!(detail.ninja_registration.as_deref(), Some("012607"));
        assert!(matches!(detail.ninja_rank, Some(StagedText::Staged(_))));
    }

    #[test]
    fn personal_reads_jinchuriki_and_lists() {
        let personal: Personal = serde_json::from_str(
            r#"{"jinchūriki": ["Naruto Uzumaki"], "affiliation": ["Konohagakure", "Allied Shinobi Forces"], "clan": "Uzumaki"}"#,
        )
        .unwrap();
        assert_eq!(personal.jinchuriki, Some(vec!["Naruto Uzumaki".to_string()]));
        assert!(matches!(personal.affiliation, Some(TextList::Many(ref v)) if v.len() == 2));
        assert_eq!(personal.clan, Some(TextList::One("Uzumaki".into())));
    }

    #[test]
    fn voice_actors_keep_locale_order() {
        let character: Character = serde_json::from_str(
            r#"{"id": 3, "name": "C", "voiceActors": {"japanese": "Junko Takeuchi", "english": ["Maile Flanagan", "Other"]}}"#,
        )
        .unwrap();
        let actors = character.voice_actors.unwrap();
        let locales: Vec<&str> = actors.keys().map(String::as_str).collect();
        assert_eq!(locales, vec!["japanese", "english"]);
    }

    #[test]
    fn group_without_members_has_empty_ids() {
        let group: Group = serde_json::from_str(r#"{"id": 4, "name": "Team 7"}"#).unwrap();
        assert!(group.member_ids().is_empty());

        let group: Group =
            serde_json::from_str(r#"{"id": 5, "name": "Uchiha", "characters": [1, 2, 3]}"#)
                .unwrap();
        assert_eq!(group.member_ids(), &[1, 2, 3]);
    }

    #[test]
    fn null_or_mistyped_name_is_empty() {
        let character: Character = serde_json::from_str(r#"{"id": 8, "name": null}"#).unwrap();
        assert_eq!(character.name, "");

        let group: Group = serde_json::from_str(r#"{"id": 9, "name": ["Uchiha"]}"#).unwrap();
        assert_eq!(group.name, "");
        assert!(group.member_ids().is_empty());
    }

    #[test]
    fn primary_image_skips_blank_urls() {
        let character: Character =
            serde_json::from_str(r#"{"id": 6, "name": "D", "images": ["", "https://x/y.png"]}"#)
                .unwrap();
        assert_eq!(character.primary_image(), Some("https://x/y.png"));
    }
}
