use axum::Json;
use axum::extract::State;
use axum::http::{HeaderValue, header};
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use shinobi_shared::ApiConfig;

use crate::state::AppState;

pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    let uptime_secs = Utc::now()
        .signed_duration_since(state.started_at)
        .num_seconds()
        .max(0);
    Json(serde_json::json!({
        "status": "ok",
        "uptime_secs": uptime_secs,
        "catalog_base_url": state.api_config.base_url,
    }))
}

/// Catalog location for the client. Short-lived so a redeploy with a new base URL
/// reaches open tabs on their next reload.
pub async fn get_config(State(state): State<AppState>) -> Response {
    let body: &ApiConfig = &state.api_config;
    let mut response = Json(body.clone()).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("public, max-age=60"),
    );
    response
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    use axum::http::StatusCode;
    use shinobi_shared::endpoint::DEFAULT_BASE_URL;

    use super::*;

    async fn spawn_test_server(state: AppState) -> (SocketAddr, tokio::task::JoinHandle<()>) {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("listener address");
        let app = crate::app::build_app(state);
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve test app");
        });
        (addr, handle)
    }

    fn test_state(base_url: &str) -> AppState {
        AppState::new(
            ApiConfig::from_override(Some(base_url)),
            "target/nonexistent-static",
        )
    }

    #[tokio::test]
    async fn config_endpoint_returns_configured_base_url() {
        let (addr, server_handle) = spawn_test_server(test_state("http://catalog.test/")).await;

        let resp = reqwest::get(format!("http://{addr}/api/config"))
            .await
            .expect("config request");
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()
                .get(header::CACHE_CONTROL)
                .and_then(|v| v.to_str().ok()),
            Some("public, max-age=60")
        );
        let body: ApiConfig = resp.json().await.expect("config body");
        assert_eq!(body.base_url, "http://catalog.test");

        server_handle.abort();
        let _ = server_handle.await;
    }

    #[tokio::test]
    async fn health_reports_ok_and_catalog() {
        let (addr, server_handle) = spawn_test_server(test_state(DEFAULT_BASE_URL)).await;

        let body: serde_json::Value = reqwest::get(format!("http://{addr}/api/health"))
            .await
            .expect("health request")
            .json()
            .await
            .expect("health body");
        assert_eq!(body["status"], "ok");
        assert_eq!(body["catalog_base_url"], DEFAULT_BASE_URL);
        assert!(body["uptime_secs"].as_i64().is_some());

        server_handle.abort();
        let _ = server_handle.await;
    }

    #[tokio::test]
    async fn unknown_api_path_is_not_found() {
        let (addr, server_handle) = spawn_test_server(test_state(DEFAULT_BASE_URL)).await;

        let status = reqwest::get(format!("http://{addr}/api/nope"))
            .await
            .expect("unknown api request")
            .status();
        assert_eq!(status, StatusCode::NOT_FOUND);

        server_handle.abort();
        let _ = server_handle.await;
    }
}
