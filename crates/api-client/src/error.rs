use std::fmt;

/// Failure at the HTTP boundary.
///
/// The three cases match how call sites experience them: the request never
/// produced a response, the backend said no, or the body didn't have the
/// shape the endpoint promises. All three are handled identically in the
/// views — logged, surfaced as a transient notification, and the triggering
/// UI state left as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Network, DNS, or TLS failure; no usable response arrived.
    Transport(String),
    /// The backend answered with `status: false`.
    Rejected(String),
    /// The response body did not match the expected envelope shape.
    Decode(String),
}

impl ApiError {
    /// Text for the transient notification shown at call sites. Backend
    /// rejection messages are shown verbatim; transport and decode details
    /// stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected(msg) if !msg.is_empty() => msg.clone(),
            _ => "Something went wrong. Please try again.".to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "transport error: {msg}"),
            ApiError::Rejected(msg) => write!(f, "rejected: {msg}"),
            ApiError::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_message_shown_verbatim() {
        let err = ApiError::Rejected("already blocked".to_string());
        assert_eq!(err.user_message(), "already blocked");
    }

    #[test]
    fn transport_details_stay_generic() {
        let err = ApiError::Transport("dns error: no such host".to_string());
        assert_eq!(err.user_message(), "Something went wrong. Please try again.");
    }

    #[test]
    fn empty_rejection_falls_back() {
        let err = ApiError::Rejected(String::new());
        assert_eq!(err.user_message(), "Something went wrong. Please try again.");
    }

    #[test]
    fn display_formats_variant() {
        let err = ApiError::Decode("missing field `clients`".to_string());
        assert_eq!(format!("{err}"), "decode error: missing field `clients`");
    }
}
