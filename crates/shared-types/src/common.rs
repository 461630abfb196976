use serde::Deserialize;

/// Response envelope every backend endpoint wraps its payload in.
///
/// The backend signals application-level failure with `status: false` inside
/// an HTTP 200 body, so the envelope must be inspected before `data` is used.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
pub struct ApiEnvelope<T> {
    pub status: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// The backend message, or a generic fallback when it sent none.
    pub fn message_or_default(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| "Something went wrong. Please try again.".to_string())
    }
}

/// One page of a listing as the table views consume it.
///
/// `total_pages` is always backend-supplied; views never recompute it beyond
/// clamping navigation into `[1, total_pages]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: i64,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_pages: 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::User;
    use pretty_assertions::assert_eq;

    #[test]
    fn envelope_parses_success_with_data() {
        let body = r#"{"status":true,"data":{"clients":[],"totalPages":3}}"#;
        let env: ApiEnvelope<serde_json::Value> = serde_json::from_str(body).unwrap();
        assert!(env.status);
        assert!(env.message.is_none());
        assert_eq!(env.data.unwrap()["totalPages"], 3);
    }

    #[test]
    fn envelope_parses_failure_with_message() {
        let body = r#"{"status":false,"message":"already blocked"}"#;
        let env: ApiEnvelope<serde_json::Value> = serde_json::from_str(body).unwrap();
        assert!(!env.status);
        assert_eq!(env.message_or_default(), "already blocked");
        assert!(env.data.is_none());
    }

    #[test]
    fn envelope_message_falls_back_when_absent() {
        let body = r#"{"status":false}"#;
        let env: ApiEnvelope<serde_json::Value> = serde_json::from_str(body).unwrap();
        assert_eq!(
            env.message_or_default(),
            "Something went wrong. Please try again."
        );
    }

    #[test]
    fn clients_page_scenario_decodes_ten_rows() {
        // GET /api/admin/clients?page=1&search= returning ten clients over
        // three pages: the table renders ten rows, pagination shows 1..3.
        let rows: Vec<String> = (0..10)
            .map(|i| {
                format!(
                    r#"{{"id":"c{i}","name":"Client {i}","email":"c{i}@example.com","role":"client"}}"#
                )
            })
            .collect();
        let body = format!(
            r#"{{"status":true,"data":{{"clients":[{}],"totalPages":3}}}}"#,
            rows.join(",")
        );
        let env: ApiEnvelope<crate::user::ClientPage> = serde_json::from_str(&body).unwrap();
        let page: Page<User> = env.data.unwrap().into();
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items[0].name, "Client 0");
    }
}
