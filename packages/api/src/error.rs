use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("request failed"))]
    Http { status: u16, message: Option<String> },

    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected response: {0}")]
    Decode(String),

    /// An authenticated endpoint was called without a session token.
    #[error("not signed in")]
    MissingToken,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiError {
    /// Build an [`ApiError::Http`] from a status and raw body, keeping the server's
    /// `{"message": ...}` when there is one.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty());
        ApiError::Http { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text to show the user: the server's message if it sent one, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Http {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_is_preferred() {
        let err = ApiError::from_response(400, r#"{"message":"Email already in use"}"#);
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.user_message("An error occurred."), "Email already in use");
    }

    #[test]
    fn test_fallback_when_body_has_no_message() {
        let err = ApiError::from_response(500, "<html>oops</html>");
        assert_eq!(err.user_message("Failed to fetch clients"), "Failed to fetch clients");

        let err = ApiError::Network("offline".into());
        assert_eq!(err.user_message("Failed to fetch clients"), "Failed to fetch clients");
        assert_eq!(err.status(), None);
    }
}
