use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::Page;
use crate::user::UserRef;

/// Account verification workflow state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    #[default]
    Incomplete,
    Pending,
    Verified,
    Rejected,
}

impl VerificationStatus {
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "pending" => VerificationStatus::Pending,
            "verified" => VerificationStatus::Verified,
            "rejected" => VerificationStatus::Rejected,
            _ => VerificationStatus::Incomplete,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationStatus::Incomplete => "incomplete",
            VerificationStatus::Pending => "pending",
            VerificationStatus::Verified => "verified",
            VerificationStatus::Rejected => "rejected",
        }
    }
}

/// A client's submission for admin approval of account legitimacy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRequest {
    pub id: String,
    pub user: UserRef,
    #[serde(default)]
    pub status: VerificationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
}

/// Admin decision for `PATCH /api/verify/update-verification`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VerificationDecision {
    pub request_id: String,
    pub status: VerificationStatus,
}

/// Payload of `GET /api/verify/admin-verifications?page&search`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationPage {
    pub verifications: Vec<VerificationRequest>,
    pub total_pages: i64,
}

impl From<VerificationPage> for Page<VerificationRequest> {
    fn from(p: VerificationPage) -> Self {
        Page {
            items: p.verifications,
            total_pages: p.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_decodes_from_backend_shape() {
        let body = r#"{
            "id": "v1",
            "user": {"id":"c1","name":"Eve","role":"client"},
            "status": "pending",
            "documentUrl": "https://cdn.example.com/id-card.png"
        }"#;
        let request: VerificationRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.status, VerificationStatus::Pending);
        assert_eq!(request.user.id, "c1");
        assert!(request.document_url.is_some());
    }

    #[test]
    fn decision_serializes_camel_case() {
        let decision = VerificationDecision {
            request_id: "v1".to_string(),
            status: VerificationStatus::Verified,
        };
        let json = serde_json::to_value(&decision).unwrap();
        assert_eq!(json["requestId"], "v1");
        assert_eq!(json["status"], "verified");
    }
}
