use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::Page;
use crate::verification::VerificationStatus;

/// Marketplace account role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Client,
    Freelancer,
}

impl UserRole {
    /// Parse a role string. Unknown values default to `Client`.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "freelancer" => UserRole::Freelancer,
            _ => UserRole::Client,
        }
    }

    /// Lowercase string as it appears on the wire and in route prefixes.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Client => "client",
            UserRole::Freelancer => "freelancer",
        }
    }

    /// Landing route for this role after login or a prefix-mismatch redirect.
    pub fn home_path(&self) -> &'static str {
        match self {
            UserRole::Client => "/client/profile",
            UserRole::Freelancer => "/freelancer/profile",
        }
    }
}

/// A marketplace account as returned by the admin listing endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub blocked: bool,
    #[serde(default)]
    pub verification_status: VerificationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<DateTime<Utc>>,
}

/// Lightweight user reference embedded in projects, complaints, and
/// verification requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: UserRole,
}

/// The end-user auth slice returned by `GET /api/auth/verify`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub blocked: bool,
    #[serde(default)]
    pub verification_status: VerificationStatus,
}

/// The admin auth slice returned by `GET /api/auth/verify?role=admin`.
///
/// Admin accounts have no role or block dimensions of their own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionAdmin {
    pub id: String,
    pub email: String,
}

/// Payload of `GET /api/admin/freelancers?page&search`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreelancerPage {
    pub freelancers: Vec<User>,
    pub total_pages: i64,
}

impl From<FreelancerPage> for Page<User> {
    fn from(p: FreelancerPage) -> Self {
        Page {
            items: p.freelancers,
            total_pages: p.total_pages,
        }
    }
}

/// Payload of `GET /api/admin/clients?page&search`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientPage {
    pub clients: Vec<User>,
    pub total_pages: i64,
}

impl From<ClientPage> for Page<User> {
    fn from(p: ClientPage) -> Self {
        Page {
            items: p.clients,
            total_pages: p.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parse_is_case_insensitive() {
        assert_eq!(UserRole::from_str_or_default("Freelancer"), UserRole::Freelancer);
        assert_eq!(UserRole::from_str_or_default("CLIENT"), UserRole::Client);
    }

    #[test]
    fn unknown_role_defaults_to_client() {
        assert_eq!(UserRole::from_str_or_default("moderator"), UserRole::Client);
        assert_eq!(UserRole::from_str_or_default(""), UserRole::Client);
    }

    #[test]
    fn user_decodes_with_missing_optional_fields() {
        let body = r#"{"id":"u1","name":"Ada","email":"ada@example.com"}"#;
        let user: User = serde_json::from_str(body).unwrap();
        assert_eq!(user.role, UserRole::Client);
        assert!(!user.blocked);
        assert!(user.joined_at.is_none());
    }

    #[test]
    fn session_user_decodes_block_flag() {
        let body =
            r#"{"id":"u2","name":"Bo","email":"bo@example.com","role":"freelancer","blocked":true}"#;
        let session: SessionUser = serde_json::from_str(body).unwrap();
        assert_eq!(session.role, UserRole::Freelancer);
        assert!(session.blocked);
    }
}
