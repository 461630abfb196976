use shared_types::{ClientPage, FreelancerPage, Page, User};

use crate::error::ApiError;
use crate::{expect_data, expect_ok, get_json, paged_query, patch_empty};

/// `GET /api/admin/freelancers?page&search`.
pub async fn list_freelancers(page: i64, search: &str) -> Result<Page<User>, ApiError> {
    let env =
        get_json::<FreelancerPage>(paged_query("/api/admin/freelancers", page, search)).await?;
    expect_data(env).map(Page::from)
}

/// `GET /api/admin/clients?page&search`.
pub async fn list_clients(page: i64, search: &str) -> Result<Page<User>, ApiError> {
    let env = get_json::<ClientPage>(paged_query("/api/admin/clients", page, search)).await?;
    expect_data(env).map(Page::from)
}

/// `PATCH /api/admin/block?userId=...` toggles the block flag. Returns the
/// backend's confirmation message; the caller refetches the page rather than
/// patching the row locally.
pub async fn toggle_block(user_id: &str) -> Result<Option<String>, ApiError> {
    let env = patch_empty::<serde_json::Value>(format!(
        "/api/admin/block?userId={}",
        urlencoding::encode(user_id)
    ))
    .await?;
    expect_ok(env)
}
