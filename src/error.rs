/// Result type for video list operations
pub type Result<T> = std::result::Result<T, ListError>;

/// Error types for video list operations
#[derive(thiserror::Error, Debug)]
pub enum ListError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    #[error("Backend responded with {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ListError {
    /// Whether the error came from talking to the backend or decoding its answer.
    pub fn is_network_or_parse(&self) -> bool {
        matches!(
            self,
            ListError::Http(_)
                | ListError::Json(_)
                | ListError::Url(_)
                | ListError::Status { .. }
                | ListError::InvalidResponse(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = ListError::Status {
            status: 401,
            body: "unauthorized".to_string(),
        };
        assert_eq!(err.to_string(), "Backend responded with 401: unauthorized");
        assert!(err.is_network_or_parse());
    }

    #[test]
    fn test_json_error_is_network_or_parse() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: ListError = json_err.into();
        assert!(err.is_network_or_parse());
    }

    #[test]
    fn test_selection_error_is_local() {
        let err = ListError::InvalidSelection("limit must be positive".to_string());
        assert!(!err.is_network_or_parse());
    }
}
