use thiserror::Error;

/// Error types for assessment bank operations
#[derive(Error, Debug)]
pub enum BankError {
    /// Record does not exist (HTTP 404)
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// Bank rejected the request (HTTP 400)
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// Proxy user was rejected (HTTP 401/403)
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// Any other non-success status
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Network or connection error
    #[error("Network error: {source}")]
    Network {
        #[from]
        source: reqwest::Error,
    },

    /// JSON parsing or serialization error
    #[error("Parse error: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },
}

impl BankError {
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn invalid_request<S: Into<String>>(message: S) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    pub fn authentication<S: Into<String>>(message: S) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    pub fn api_error(status: u16, message: String) -> Self {
        Self::Api { status, message }
    }

    /// Map a non-success HTTP status and body text to an error
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            400 => Self::invalid_request(message),
            401 | 403 => Self::authentication(message),
            404 => Self::not_found(message),
            _ => Self::api_error(status, message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_mapping() {
        assert!(matches!(
            BankError::from_status(400, "bad".into()),
            BankError::InvalidRequest { .. }
        ));
        assert!(matches!(
            BankError::from_status(401, "who".into()),
            BankError::Authentication { .. }
        ));
        assert!(matches!(
            BankError::from_status(403, "no".into()),
            BankError::Authentication { .. }
        ));
        assert!(matches!(
            BankError::from_status(404, "gone".into()),
            BankError::NotFound { .. }
        ));
        match BankError::from_status(503, "down".into()) {
            BankError::Api { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "down");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_error_display() {
        let err = BankError::api_error(500, "boom".to_string());
        assert_eq!(err.to_string(), "API error (status 500): boom");
    }
}
