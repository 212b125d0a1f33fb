//! Error types shared by every request path.

use serde::Deserialize;

/// A failed request against either the catalog or the personal backend.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("{0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("Request failed with status code {status}")]
    Status {
        status: u16,
        /// The `error` field of the response body, when present.
        message: Option<String>,
    },
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("could not encode request body: {0}")]
    Encode(String),
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

impl ApiError {
    /// Build a status error, lifting `{"error": "..."}` out of the body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.trim().is_empty());
        ApiError::Status { status, message }
    }

    /// Message supplied by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => Some(message),
            _ => None,
        }
    }

    /// Server message, else this error's own message, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        if let Some(message) = self.server_message() {
            return message.to_string();
        }
        let own = self.to_string();
        if own.trim().is_empty() {
            fallback.to_string()
        } else {
            own
        }
    }
}

/// A failed catalog load, carrying what was being loaded.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("Failed to fetch {what}: {cause}")]
pub struct LoadError {
    pub what: &'static str,
    #[source]
    pub cause: ApiError,
}

impl LoadError {
    pub fn new(what: &'static str, cause: ApiError) -> Self {
        Self { what, cause }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_lifts_server_message() {
        let e = ApiError::from_status(401, r#"{"error": "Invalid credentials"}"#);
        assert_eq!(e.server_message(), Some("Invalid credentials"));
        assert_eq!(e.user_message("Login failed"), "Invalid credentials");
    }

    #[test]
    fn test_status_without_message() {
        let e = ApiError::from_status(500, "<html>oops</html>");
        assert_eq!(e.server_message(), None);
        assert_eq!(
            e.user_message("Could not add Pokemon."),
            "Request failed with status code 500"
        );

        let e = ApiError::from_status(400, r#"{"error": "  "}"#);
        assert_eq!(e.server_message(), None);
    }

    #[test]
    fn test_transport_message_then_fallback() {
        let e = ApiError::Transport("Network Error".to_string());
        assert_eq!(e.user_message("fallback"), "Network Error");

        let e = ApiError::Transport(String::new());
        assert_eq!(e.user_message("fallback"), "fallback");
    }

    #[test]
    fn test_load_error_display() {
        let e = LoadError::new("Pokémon list", ApiError::Transport("offline".to_string()));
        assert_eq!(e.to_string(), "Failed to fetch Pokémon list: offline");
    }
}
