//! Thin client for the GigWire REST backend.
//!
//! Every view-facing call lives in one of the endpoint modules ([`auth`],
//! [`admin`], [`projects`], [`complaints`], [`verification`]) and follows the
//! same shape: build the URL, issue the request on the process-wide client,
//! decode the `{status, message?, data?}` envelope, and map `status: false`
//! to [`ApiError::Rejected`] even when the HTTP status was 200. No retries,
//! no timeouts, no request cancellation — failures surface once, at the call
//! site.

use std::sync::OnceLock;

use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::ApiEnvelope;

pub mod admin;
pub mod auth;
pub mod complaints;
pub mod config;
pub mod error;
pub mod projects;
pub mod verification;

pub use error::ApiError;

static HTTP: OnceLock<reqwest::Client> = OnceLock::new();

/// Process-wide HTTP client. Cookie-carrying so the backend's session
/// cookie rides along on every call.
fn http() -> &'static reqwest::Client {
    HTTP.get_or_init(build_client)
}

#[cfg(target_arch = "wasm32")]
fn build_client() -> reqwest::Client {
    // Browser fetch only attaches cookies when credentials are included.
    reqwest::Client::builder()
        .fetch_credentials_include()
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

/// `?page&search` query string shared by every listing endpoint.
pub(crate) fn paged_query(path: &str, page: i64, search: &str) -> String {
    format!("{path}?page={page}&search={}", urlencoding::encode(search))
}

pub(crate) async fn get_json<T: DeserializeOwned>(
    path_and_query: String,
) -> Result<ApiEnvelope<T>, ApiError> {
    let url = config::url(&path_and_query);
    tracing::debug!(%url, "GET");
    let resp = http().get(&url).send().await?;
    Ok(resp.json::<ApiEnvelope<T>>().await?)
}

pub(crate) async fn post_json<T: DeserializeOwned>(
    path_and_query: String,
    body: &impl Serialize,
) -> Result<ApiEnvelope<T>, ApiError> {
    let url = config::url(&path_and_query);
    tracing::debug!(%url, "POST");
    let resp = http().post(&url).json(body).send().await?;
    Ok(resp.json::<ApiEnvelope<T>>().await?)
}

pub(crate) async fn put_json<T: DeserializeOwned>(
    path_and_query: String,
    body: &impl Serialize,
) -> Result<ApiEnvelope<T>, ApiError> {
    let url = config::url(&path_and_query);
    tracing::debug!(%url, "PUT");
    let resp = http().put(&url).json(body).send().await?;
    Ok(resp.json::<ApiEnvelope<T>>().await?)
}

pub(crate) async fn patch_json<T: DeserializeOwned>(
    path_and_query: String,
    body: &impl Serialize,
) -> Result<ApiEnvelope<T>, ApiError> {
    let url = config::url(&path_and_query);
    tracing::debug!(%url, "PATCH");
    let resp = http().patch(&url).json(body).send().await?;
    Ok(resp.json::<ApiEnvelope<T>>().await?)
}

/// Bodyless PATCH, used by toggle-style endpoints that take query params.
pub(crate) async fn patch_empty<T: DeserializeOwned>(
    path_and_query: String,
) -> Result<ApiEnvelope<T>, ApiError> {
    let url = config::url(&path_and_query);
    tracing::debug!(%url, "PATCH");
    let resp = http().patch(&url).send().await?;
    Ok(resp.json::<ApiEnvelope<T>>().await?)
}

/// Unwrap an envelope whose success carries a payload.
pub(crate) fn expect_data<T>(env: ApiEnvelope<T>) -> Result<T, ApiError> {
    if !env.status {
        return Err(ApiError::Rejected(env.message_or_default()));
    }
    env.data
        .ok_or_else(|| ApiError::Decode("response envelope had no data".to_string()))
}

/// Unwrap an envelope whose success carries only an optional message.
pub(crate) fn expect_ok<T>(env: ApiEnvelope<T>) -> Result<Option<String>, ApiError> {
    if !env.status {
        return Err(ApiError::Rejected(env.message_or_default()));
    }
    Ok(env.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn paged_query_encodes_search_term() {
        assert_eq!(
            paged_query("/api/admin/clients", 2, "rust & wasm"),
            "/api/admin/clients?page=2&search=rust%20%26%20wasm"
        );
    }

    #[test]
    fn paged_query_with_empty_search() {
        assert_eq!(
            paged_query("/api/project/projects", 1, ""),
            "/api/project/projects?page=1&search="
        );
    }

    #[test]
    fn expect_data_rejects_status_false() {
        let env: ApiEnvelope<serde_json::Value> =
            serde_json::from_str(r#"{"status":false,"message":"already blocked"}"#).unwrap();
        let err = expect_data(env).unwrap_err();
        assert_eq!(err, ApiError::Rejected("already blocked".to_string()));
    }

    #[test]
    fn expect_data_flags_missing_payload() {
        let env: ApiEnvelope<serde_json::Value> =
            serde_json::from_str(r#"{"status":true}"#).unwrap();
        assert!(matches!(expect_data(env), Err(ApiError::Decode(_))));
    }

    #[test]
    fn expect_ok_passes_message_through() {
        let env: ApiEnvelope<serde_json::Value> =
            serde_json::from_str(r#"{"status":true,"message":"user blocked"}"#).unwrap();
        assert_eq!(expect_ok(env).unwrap(), Some("user blocked".to_string()));
    }
}
