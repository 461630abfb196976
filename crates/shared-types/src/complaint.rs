use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::Page;
use crate::user::UserRef;

/// Complaint moderation state. Transitions out of `Pending` happen only
/// through the admin action endpoint followed by a refetch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ComplaintStatus {
    #[default]
    Pending,
    Resolved,
    Rejected,
}

impl ComplaintStatus {
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "resolved" => ComplaintStatus::Resolved,
            "rejected" => ComplaintStatus::Rejected,
            _ => ComplaintStatus::Pending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintStatus::Pending => "pending",
            ComplaintStatus::Resolved => "resolved",
            ComplaintStatus::Rejected => "rejected",
        }
    }
}

/// A complaint filed by one user against another.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub id: String,
    pub subject: String,
    pub description: String,
    #[serde(default)]
    pub status: ComplaintStatus,
    pub complainant: UserRef,
    pub against: UserRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filed_at: Option<DateTime<Utc>>,
}

/// Admin resolution submitted via `PUT /api/complaint/complaints/:id/admin`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintAction {
    pub status: ComplaintStatus,
    pub admin_message: String,
}

/// Payload of `GET /api/complaint/admin/complaints?page&search`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintPage {
    pub complaints: Vec<Complaint>,
    pub total_pages: i64,
}

impl From<ComplaintPage> for Page<Complaint> {
    fn from(p: ComplaintPage) -> Self {
        Page {
            items: p.complaints,
            total_pages: p.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complaint_decodes_from_backend_shape() {
        let body = r#"{
            "id": "cm1",
            "subject": "Missed deadline",
            "description": "Delivery was two weeks late.",
            "status": "pending",
            "complainant": {"id":"c1","name":"Eve","role":"client"},
            "against": {"id":"f1","name":"Ada","role":"freelancer"}
        }"#;
        let complaint: Complaint = serde_json::from_str(body).unwrap();
        assert_eq!(complaint.status, ComplaintStatus::Pending);
        assert_eq!(complaint.complainant.name, "Eve");
        assert!(complaint.admin_message.is_none());
    }

    #[test]
    fn action_serializes_camel_case() {
        let action = ComplaintAction {
            status: ComplaintStatus::Resolved,
            admin_message: "Refund issued.".to_string(),
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["status"], "resolved");
        assert_eq!(json["adminMessage"], "Refund issued.");
    }
}
