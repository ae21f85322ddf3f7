use serde::{Deserialize, Serialize};

use crate::model::RecordId;
use crate::resource::Resource;

/// Public Naruto catalog API used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://dattebayo-api.onrender.com";

/// Remote catalog location. Served by the hosting server at `/api/config`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Build a config from an optional override; blank values fall back to the default.
    pub fn from_override(base_url: Option<&str>) -> Self {
        base_url
            .map(normalize_base_url)
            .filter(|url| !url.is_empty())
            .map(|base_url| Self { base_url })
            .unwrap_or_default()
    }

    pub fn list_url(&self, resource: Resource) -> String {
        format!("{}/{}", self.base_url, resource.path())
    }

    pub fn detail_url(&self, resource: Resource, id: RecordId) -> String {
        format!("{}/{}/{id}", self.base_url, resource.path())
    }
}

pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

/// Query parameters for a list request. `name` is omitted when absent or blank.
pub fn list_params(page: u32, limit: u32, name: Option<&str>) -> Vec<(&'static str, String)> {
    let mut params = vec![("page", page.to_string()), ("limit", limit.to_string())];
    if let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) {
        params.push(("name", name.to_string()));
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_is_trimmed_or_defaulted() {
        assert_eq!(
            ApiConfig::from_override(Some("http://localhost:8080/")).base_url,
            "http://localhost:8080"
        );
        assert_eq!(ApiConfig::from_override(Some("  ")), ApiConfig::default());
        assert_eq!(ApiConfig::from_override(None).base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn urls_use_collection_paths() {
        let config = ApiConfig::default();
        assert_eq!(
            config.list_url(Resource::TailedBeasts),
            "https://dattebayo-api.onrender.com/tailed-beasts"
        );
        assert_eq!(
            config.detail_url(Resource::Clans, 4),
            "https://dattebayo-api.onrender.com/clans/4"
        );
    }

    #[test]
    fn blank_name_filter_is_omitted() {
        assert_eq!(
            list_params(2, 20, Some(" ")),
            vec![("page", "2".to_string()), ("limit", "20".to_string())]
        );
        assert_eq!(list_params(1, 20, Some("Uchiha")).len(), 3);
    }
}
