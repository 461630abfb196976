use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::Page;
use crate::user::UserRef;

/// Project completion lifecycle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Open,
    Committed,
    Completed,
    Cancelled,
}

impl ProjectStatus {
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "committed" => ProjectStatus::Committed,
            "completed" => ProjectStatus::Completed,
            "cancelled" => ProjectStatus::Cancelled,
            _ => ProjectStatus::Open,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Open => "open",
            ProjectStatus::Committed => "committed",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Cancelled => "cancelled",
        }
    }
}

/// A posted project. Read-only in the views in scope here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub budget: i64,
    /// Free-form timeline the client entered, e.g. "6 weeks".
    #[serde(default)]
    pub timeline: String,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub applied_users: Vec<UserRef>,
    #[serde(default)]
    pub attachments: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_by: Option<UserRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload of `GET /api/project/projects?page&search`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPage {
    pub projects: Vec<Project>,
    pub total_pages: i64,
}

impl From<ProjectPage> for Page<Project> {
    fn from(p: ProjectPage) -> Self {
        Page {
            items: p.projects,
            total_pages: p.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_decodes_from_backend_shape() {
        let body = r#"{
            "id": "p1",
            "title": "Logo redesign",
            "description": "Refresh our brand mark.",
            "budget": 1500,
            "timeline": "3 weeks",
            "status": "committed",
            "appliedUsers": [{"id":"f1","name":"Ada","role":"freelancer"}],
            "attachments": ["https://cdn.example.com/brief.pdf"]
        }"#;
        let project: Project = serde_json::from_str(body).unwrap();
        assert_eq!(project.status, ProjectStatus::Committed);
        assert_eq!(project.applied_users.len(), 1);
        assert_eq!(project.attachments.len(), 1);
        assert!(project.posted_by.is_none());
    }

    #[test]
    fn unknown_status_defaults_to_open() {
        assert_eq!(ProjectStatus::from_str_or_default("archived"), ProjectStatus::Open);
    }
}
