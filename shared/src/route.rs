use crate::error::MissingParameterError;
use crate::model::RecordId;
use crate::resource::Resource;

/// Client-side location, carried in the URL fragment (`#/clans/12`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    List(Resource),
    /// Raw id segment; parsed by the detail page so an empty id can be reported.
    Detail(Resource, String),
    NotFound,
}

impl Route {
    pub fn parse(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_matches('/');
        if path.is_empty() {
            return Self::Home;
        }

        let mut segments = path.splitn(2, '/');
        let Some(resource) = segments.next().and_then(Resource::from_path) else {
            return Self::NotFound;
        };
        match segments.next() {
            None => Self::List(resource),
            Some(id) if id.contains('/') => Self::NotFound,
            Some(id) => Self::Detail(resource, id.trim().to_string()),
        }
    }

    /// Collection the route belongs to, used to highlight navigation.
    pub fn resource(&self) -> Option<Resource> {
        match self {
            Self::List(resource) | Self::Detail(resource, _) => Some(*resource),
            Self::Home | Self::NotFound => None,
        }
    }
}

pub fn list_href(resource: Resource) -> String {
    format!("#/{}", resource.path())
}

pub fn detail_href(resource: Resource, id: RecordId) -> String {
    format!("#/{}/{id}", resource.path())
}

/// Parse a detail id. Blank or absent ids are a missing parameter.
pub fn parse_id(raw: Option<&str>) -> Result<RecordId, MissingParameterError> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse().ok())
        .ok_or(MissingParameterError("id"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_home_list_and_detail() {
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("#/"), Route::Home);
        assert_eq!(Route::parse("#/clans"), Route::List(Resource::Clans));
        assert_eq!(
            Route::parse("#/tailed-beasts/3"),
            Route::Detail(Resource::TailedBeasts, "3".into())
        );
        assert_eq!(Route::parse("#/kara"), Route::NotFound);
        assert_eq!(Route::parse("#/clans/1/extra"), Route::NotFound);
    }

    #[test]
    fn hrefs_round_trip() {
        assert_eq!(
            Route::parse(&list_href(Resource::Akatsuki)),
            Route::List(Resource::Akatsuki)
        );
        assert_eq!(
            Route::parse(&detail_href(Resource::Teams, 7)),
            Route::Detail(Resource::Teams, "7".into())
        );
        assert_eq!(detail_href(Resource::Characters, 42), "#/characters/42");
    }

    #[test]
    fn empty_id_is_missing_parameter() {
        assert_eq!(parse_id(Some("")), Err(MissingParameterError("id")));
        assert_eq!(parse_id(None), Err(MissingParameterError("id")));
        assert_eq!(parse_id(Some("abc")), Err(MissingParameterError("id")));
        assert_eq!(parse_id(Some(" 12 ")), Ok(12));
    }
}
