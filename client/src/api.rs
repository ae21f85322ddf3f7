use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;

use shinobi_shared::endpoint::{ApiConfig, list_params};
use shinobi_shared::paging::ListQuery;
use shinobi_shared::{CatalogRecord, FetchError, PAGE_SIZE, Page, RecordId, Resource};

/// Fetch one page of a collection, decoding records from the collection's array field.
pub async fn fetch_page<T: CatalogRecord>(
    config: &ApiConfig,
    query: &ListQuery,
    page: u32,
) -> Result<Page<T>, FetchError> {
    let url = config.list_url(query.resource);
    let params = list_params(page, PAGE_SIZE, query.name.as_deref());
    let request = Request::get(&url).query(params.iter().map(|(key, value)| (*key, value.as_str())));

    let result = send_json::<serde_json::Value>(request)
        .await
        .and_then(|body| Page::decode(query.resource, body));
    if let Err(err) = &result {
        log_failure(&format!("{url}?page={page}"), err);
    }
    result
}

/// Fetch one record by id.
pub async fn fetch_record<T: CatalogRecord>(
    config: &ApiConfig,
    resource: Resource,
    id: RecordId,
) -> Result<T, FetchError> {
    let url = config.detail_url(resource, id);
    let result = send_json::<T>(Request::get(&url)).await;
    if let Err(err) = &result {
        log_failure(&url, err);
    }
    result
}

/// Remote catalog location published by the hosting server, if any.
pub async fn fetch_hosted_config() -> Option<ApiConfig> {
    let resp = Request::get("/api/config").send().await.ok()?;
    if !resp.ok() {
        return None;
    }
    let config = resp.json::<ApiConfig>().await.ok()?;
    Some(ApiConfig::from_override(Some(&config.base_url)))
}

async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, FetchError> {
    let resp = request
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !resp.ok() {
        return Err(FetchError::Status {
            status: resp.status(),
        });
    }

    resp.json::<T>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

fn log_failure(url: &str, err: &FetchError) {
    web_sys::console::warn_1(&format!("catalog fetch failed: {url}: {err}").into());
}
