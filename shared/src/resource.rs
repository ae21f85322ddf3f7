use serde::{Deserialize, Serialize};

/// Collections exposed by the remote catalog API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Resource {
    Characters,
    Clans,
    Villages,
    Teams,
    Akatsuki,
    TailedBeasts,
}

/// Record shape served by a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// Character-shaped records (characters, Akatsuki members, tailed beasts).
    Profile,
    /// Named groups holding a list of member character ids.
    Group,
}

impl Resource {
    pub const ALL: [Resource; 6] = [
        Self::Characters,
        Self::Clans,
        Self::Villages,
        Self::Teams,
        Self::Akatsuki,
        Self::TailedBeasts,
    ];

    /// URL path segment of the collection.
    pub fn path(self) -> &'static str {
        match self {
            Self::Characters => "characters",
            Self::Clans => "clans",
            Self::Villages => "villages",
            Self::Teams => "teams",
            Self::Akatsuki => "akatsuki",
            Self::TailedBeasts => "tailed-beasts",
        }
    }

    /// Name of the array field inside a list envelope.
    ///
    /// Upstream does not derive this from the path consistently, so each collection
    /// names its own field here.
    pub fn list_field(self) -> &'static str {
        match self {
            Self::Characters => "characters",
            Self::Clans => "clans",
            Self::Villages => "villages",
            Self::Teams => "teams",
            Self::Akatsuki => "akatsuki",
            Self::TailedBeasts => "tailed-beasts",
        }
    }

    pub fn kind(self) -> RecordKind {
        match self {
            Self::Clans | Self::Villages | Self::Teams => RecordKind::Group,
            Self::Characters | Self::Akatsuki | Self::TailedBeasts => RecordKind::Profile,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Characters => "Characters",
            Self::Clans => "Clans",
            Self::Villages => "Villages",
            Self::Teams => "Teams",
            Self::Akatsuki => "Akatsuki",
            Self::TailedBeasts => "Tailed Beasts",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Characters => "Explore all characters from the Naruto universe",
            Self::Clans => "Discover the powerful ninja clans",
            Self::Villages => "Learn about the hidden villages",
            Self::Teams => "Browse teams and their members",
            Self::Akatsuki => "Meet the rogue ninja organization",
            Self::TailedBeasts => "Learn about the powerful tailed beasts",
        }
    }

    /// Lowercase noun used in status text ("Loading clans...", "1 clan found").
    pub fn noun(self, count: usize) -> &'static str {
        let singular = count == 1;
        match self {
            Self::Characters if singular => "character",
            Self::Characters => "characters",
            Self::Clans if singular => "clan",
            Self::Clans => "clans",
            Self::Villages if singular => "village",
            Self::Villages => "villages",
            Self::Teams if singular => "team",
            Self::Teams => "teams",
            Self::Akatsuki if singular => "member",
            Self::Akatsuki => "members",
            Self::TailedBeasts if singular => "tailed beast",
            Self::TailedBeasts => "tailed beasts",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.path() == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for resource in Resource::ALL {
            assert_eq!(Resource::from_path(resource.path()), Some(resource));
        }
        assert_eq!(Resource::from_path("kara"), None);
    }

    #[test]
    fn tailed_beasts_use_hyphenated_list_field() {
        assert_eq!(Resource::TailedBeasts.list_field(), "tailed-beasts");
        assert_eq!(Resource::Clans.list_field(), "clans");
    }

    #[test]
    fn group_collections_are_grouped() {
        assert_eq!(Resource::Clans.kind(), RecordKind::Group);
        assert_eq!(Resource::Teams.kind(), RecordKind::Group);
        assert_eq!(Resource::Villages.kind(), RecordKind::Group);
        assert_eq!(Resource::Akatsuki.kind(), RecordKind::Profile);
    }

    #[test]
    fn noun_switches_on_count() {
        assert_eq!(Resource::Characters.noun(1), "character");
        assert_eq!(Resource::Characters.noun(0), "characters");
        assert_eq!(Resource::TailedBeasts.noun(9), "tailed beasts");
    }
}
