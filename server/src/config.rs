use shinobi_shared::endpoint::{ApiConfig, normalize_base_url};

pub const DEFAULT_SERVER_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "client/dist";

pub fn server_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(DEFAULT_SERVER_PORT)
}

/// Remote catalog the client should talk to. Blank values fall back to the public API.
pub fn api_config() -> ApiConfig {
    let base_url = std::env::var("NARUTO_API_BASE_URL")
        .ok()
        .map(|value| normalize_base_url(&value))
        .filter(|value| value.starts_with("http://") || value.starts_with("https://"));
    ApiConfig::from_override(base_url.as_deref())
}

pub fn static_dir() -> String {
    std::env::var("STATIC_DIR")
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shinobi_shared::endpoint::DEFAULT_BASE_URL;

    #[test]
    fn port_defaults_when_unset_or_invalid() {
        temp_env::with_var("PORT", None::<&str>, || {
            assert_eq!(server_port(), DEFAULT_SERVER_PORT);
        });
        temp_env::with_var("PORT", Some("not-a-port"), || {
            assert_eq!(server_port(), DEFAULT_SERVER_PORT);
        });
        temp_env::with_var("PORT", Some("0"), || {
            assert_eq!(server_port(), DEFAULT_SERVER_PORT);
        });
        temp_env::with_var("PORT", Some("8080"), || {
            assert_eq!(server_port(), 8080);
        });
    }

    #[test]
    fn api_base_url_is_normalized() {
        temp_env::with_var("NARUTO_API_BASE_URL", Some(" http://localhost:9000/ "), || {
            assert_eq!(api_config().base_url, "http://localhost:9000");
        });
        temp_env::with_var("NARUTO_API_BASE_URL", Some("ftp://elsewhere"), || {
            assert_eq!(api_config().base_url, DEFAULT_BASE_URL);
        });
        temp_env::with_var("NARUTO_API_BASE_URL", None::<&str>, || {
            assert_eq!(api_config().base_url, DEFAULT_BASE_URL);
        });
    }

    #[test]
    fn static_dir_falls_back_for_blank_values() {
        temp_env::with_var("STATIC_DIR", Some("  "), || {
            assert_eq!(static_dir(), DEFAULT_STATIC_DIR);
        });
        temp_env::with_var("STATIC_DIR", Some("/srv/atlas"), || {
            assert_eq!(static_dir(), "/srv/atlas");
        });
    }
}
