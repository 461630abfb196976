use serde::Serialize;
use shared_types::{SessionAdmin, SessionUser};

use crate::error::ApiError;
use crate::{expect_data, expect_ok, get_json, post_json};

/// Credentials for `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

/// New-account fields for `POST /api/auth/signup`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupPayload {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

/// `GET /api/auth/verify?role=user`, resolving the end-user session slice.
pub async fn verify_user() -> Result<SessionUser, ApiError> {
    let env = get_json::<SessionUser>("/api/auth/verify?role=user".to_string()).await?;
    expect_data(env)
}

/// `GET /api/auth/verify?role=admin`, resolving the admin session slice.
pub async fn verify_admin() -> Result<SessionAdmin, ApiError> {
    let env = get_json::<SessionAdmin>("/api/auth/verify?role=admin".to_string()).await?;
    expect_data(env)
}

/// `POST /api/auth/login?role=user`.
pub async fn login_user(payload: &LoginPayload) -> Result<SessionUser, ApiError> {
    let env = post_json::<SessionUser>("/api/auth/login?role=user".to_string(), payload).await?;
    expect_data(env)
}

/// `POST /api/auth/login?role=admin`.
pub async fn login_admin(payload: &LoginPayload) -> Result<SessionAdmin, ApiError> {
    let env = post_json::<SessionAdmin>("/api/auth/login?role=admin".to_string(), payload).await?;
    expect_data(env)
}

/// `POST /api/auth/signup?role=user`. Returns the fresh session slice so
/// the caller can log the new account straight in.
pub async fn signup(payload: &SignupPayload) -> Result<SessionUser, ApiError> {
    let env = post_json::<SessionUser>("/api/auth/signup?role=user".to_string(), payload).await?;
    expect_data(env)
}

/// `POST /api/auth/logout?role=...`. The local slice is cleared by the
/// caller whether or not this succeeds.
pub async fn logout(role: &str) -> Result<Option<String>, ApiError> {
    let env = post_json::<serde_json::Value>(
        format!("/api/auth/logout?role={}", urlencoding::encode(role)),
        &serde_json::json!({}),
    )
    .await?;
    expect_ok(env)
}
