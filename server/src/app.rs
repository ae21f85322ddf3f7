use std::path::Path;

use axum::{
    Router,
    extract::Request,
    http::{HeaderValue, header},
    middleware::{self, Next},
    response::Response,
};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;

use crate::routes;
use crate::state::AppState;

pub(crate) fn build_app(state: AppState) -> Router {
    let static_assets = Router::new()
        .fallback_service(
            ServeDir::new(state.static_dir.as_ref())
                .precompressed_br()
                .precompressed_gzip(),
        )
        .layer(middleware::from_fn(set_static_cache_control));

    let app = Router::new()
        .route("/api/health", axum::routing::get(routes::api::health))
        .route("/api/config", axum::routing::get(routes::api::get_config));

    app.layer(CompressionLayer::new())
        .fallback_service(static_assets)
        .with_state(state)
}

async fn set_static_cache_control(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let mut response = next.run(request).await;

    if response.status().is_success()
        && let Some(cache_control) = cache_control_for_path(&path)
    {
        response.headers_mut().insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static(cache_control),
        );
    }

    response
}

fn cache_control_for_path(path: &str) -> Option<&'static str> {
    if is_hashed_bundle_asset(path) {
        return Some("public, max-age=31536000, immutable");
    }

    if path.starts_with("/fonts/") || path.starts_with("/images/") {
        return Some("public, max-age=86400");
    }

    None
}

/// Trunk output carries a content hash in the file name (`shinobi-client-71578f6b278221f3_bg.wasm`).
fn is_hashed_bundle_asset(path: &str) -> bool {
    let Some(ext) = Path::new(path).extension().and_then(|ext| ext.to_str()) else {
        return false;
    };

    if !matches!(ext, "wasm" | "js" | "css") {
        return false;
    }

    let Some(filename) = Path::new(path).file_name().and_then(|name| name.to_str()) else {
        return false;
    };

    filename
        .split(['-', '_', '.'])
        .any(|segment| segment.len() >= 8 && segment.chars().all(|c| c.is_ascii_hexdigit()))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::StatusCode;
    use shinobi_shared::ApiConfig;
    use tower::ServiceExt;

    use super::*;

    #[test]
    fn immutable_cache_for_hashed_bundle_assets() {
        assert_eq!(
            cache_control_for_path("/shinobi-client-71578f6b278221f3_bg.wasm"),
            Some("public, max-age=31536000, immutable")
        );
        assert_eq!(
            cache_control_for_path("/input-a93762ff3bf6d63a.css"),
            Some("public, max-age=31536000, immutable")
        );
    }

    #[test]
    fn unhashed_bundle_names_are_not_immutable() {
        assert_eq!(cache_control_for_path("/shinobi-client.js"), None);
        assert_eq!(
            cache_control_for_path("/fonts/silkscreen-regular.woff2"),
            Some("public, max-age=86400")
        );
    }

    #[test]
    fn no_cache_header_override_for_html() {
        assert_eq!(cache_control_for_path("/"), None);
        assert_eq!(cache_control_for_path("/index.html"), None);
    }

    #[tokio::test]
    async fn serves_bundle_from_static_dir_with_cache_headers() {
        let dir = std::env::temp_dir().join(format!("shinobi-static-{}", std::process::id()));
        tokio::fs::create_dir_all(&dir).await.expect("create static dir");
        tokio::fs::write(dir.join("index.html"), "<div id=\"app\"></div>")
            .await
            .expect("write index");
        tokio::fs::write(dir.join("shinobi-client-71578f6b278221f3_bg.wasm"), [0u8, 97, 115, 109])
            .await
            .expect("write wasm");

        let state = AppState::new(ApiConfig::default(), dir.to_string_lossy().into_owned());
        let app = build_app(state);

        let index = app
            .clone()
            .oneshot(axum::http::Request::builder().uri("/").body(Body::empty()).expect("request"))
            .await
            .expect("index response");
        assert_eq!(index.status(), StatusCode::OK);
        assert!(index.headers().get(header::CACHE_CONTROL).is_none());

        let wasm = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/shinobi-client-71578f6b278221f3_bg.wasm")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("wasm response");
        assert_eq!(wasm.status(), StatusCode::OK);
        assert_eq!(
            wasm.headers()
                .get(header::CACHE_CONTROL)
                .and_then(|v| v.to_str().ok()),
            Some("public, max-age=31536000, immutable")
        );

        let _ = tokio::fs::remove_dir_all(&dir).await;
    }
}
