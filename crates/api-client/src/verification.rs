use shared_types::{Page, VerificationDecision, VerificationPage, VerificationRequest};

use crate::error::ApiError;
use crate::{expect_data, expect_ok, get_json, paged_query, patch_json};

/// `GET /api/verify/admin-verifications?page&search`.
pub async fn list_verifications(
    page: i64,
    search: &str,
) -> Result<Page<VerificationRequest>, ApiError> {
    let env = get_json::<VerificationPage>(paged_query(
        "/api/verify/admin-verifications",
        page,
        search,
    ))
    .await?;
    expect_data(env).map(Page::from)
}

/// `GET /api/verify/client-request?id=...`.
pub async fn get_client_request(id: &str) -> Result<VerificationRequest, ApiError> {
    let env = get_json::<VerificationRequest>(format!(
        "/api/verify/client-request?id={}",
        urlencoding::encode(id)
    ))
    .await?;
    expect_data(env)
}

/// `PATCH /api/verify/update-verification`. The caller refetches on success.
pub async fn update_verification(
    decision: &VerificationDecision,
) -> Result<Option<String>, ApiError> {
    let env = patch_json::<serde_json::Value>(
        "/api/verify/update-verification".to_string(),
        decision,
    )
    .await?;
    expect_ok(env)
}
