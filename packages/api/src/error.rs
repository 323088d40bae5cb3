//! Client-side error taxonomy.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (connectivity, CORS, ...).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with an error status. `message` is the server's
    /// `{ "message": ... }` body when present, empty otherwise.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// A success response whose body could not be decoded.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Whether this error is the invalid-session signal.
    ///
    /// The rule is inherited from the consumed API: HTTP 401, **or** an error
    /// message containing the case-insensitive substring `token` — the
    /// backend serves expired-token errors with non-401 statuses. The
    /// substring half means a server error that merely mentions tokens in
    /// prose also logs the user out; that trade-off is accepted here and this
    /// method is the single place to change it.
    pub fn is_invalid_session(&self) -> bool {
        match self {
            ApiError::Status { status: 401, .. } => true,
            ApiError::Status { message, .. } => message.to_lowercase().contains("token"),
            _ => false,
        }
    }

    /// The string shown to the user: the server message when it said
    /// something, otherwise the per-operation fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status { message, .. } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_is_an_invalid_session() {
        let error = ApiError::Status {
            status: 401,
            message: String::new(),
        };
        assert!(error.is_invalid_session());
    }

    #[test]
    fn token_messages_are_invalid_sessions_regardless_of_status() {
        let error = ApiError::Status {
            status: 400,
            message: "Token expired".to_string(),
        };
        assert!(error.is_invalid_session());
    }

    #[test]
    fn other_failures_are_not() {
        let status = ApiError::Status {
            status: 500,
            message: "boom".to_string(),
        };
        let network = ApiError::Network("connection refused".to_string());
        assert!(!status.is_invalid_session());
        assert!(!network.is_invalid_session());
    }

    #[test]
    fn user_message_prefers_the_server_text() {
        let error = ApiError::Status {
            status: 409,
            message: "Email already in use".to_string(),
        };
        assert_eq!(
            error.user_message("Failed to create user"),
            "Email already in use"
        );

        let silent = ApiError::Status {
            status: 500,
            message: String::new(),
        };
        assert_eq!(
            silent.user_message("Failed to create user"),
            "Failed to create user"
        );
        assert_eq!(
            ApiError::Network("offline".to_string()).user_message("Failed to create user"),
            "Failed to create user"
        );
    }
}
