use shared_types::{Complaint, ComplaintAction, ComplaintPage, Page};

use crate::error::ApiError;
use crate::{expect_data, expect_ok, get_json, paged_query, put_json};

/// `GET /api/complaint/admin/complaints?page&search`.
pub async fn list_complaints(page: i64, search: &str) -> Result<Page<Complaint>, ApiError> {
    let env =
        get_json::<ComplaintPage>(paged_query("/api/complaint/admin/complaints", page, search))
            .await?;
    expect_data(env).map(Page::from)
}

/// `GET /api/complaint/admin/complaint?id=...`.
pub async fn get_complaint(id: &str) -> Result<Complaint, ApiError> {
    let env = get_json::<Complaint>(format!(
        "/api/complaint/admin/complaint?id={}",
        urlencoding::encode(id)
    ))
    .await?;
    expect_data(env)
}

/// `PUT /api/complaint/complaints/:id/admin`, the only way a complaint
/// leaves `pending`. The caller refetches on success.
pub async fn resolve_complaint(
    id: &str,
    action: &ComplaintAction,
) -> Result<Option<String>, ApiError> {
    let env = put_json::<serde_json::Value>(
        format!("/api/complaint/complaints/{}/admin", urlencoding::encode(id)),
        action,
    )
    .await?;
    expect_ok(env)
}
