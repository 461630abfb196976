use shared_types::{Page, Project, ProjectPage};

use crate::error::ApiError;
use crate::{expect_data, get_json, paged_query};

/// `GET /api/project/projects?page&search`.
pub async fn list_projects(page: i64, search: &str) -> Result<Page<Project>, ApiError> {
    let env = get_json::<ProjectPage>(paged_query("/api/project/projects", page, search)).await?;
    expect_data(env).map(Page::from)
}
