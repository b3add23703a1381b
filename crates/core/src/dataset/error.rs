use thiserror::Error;

/// Errors returned by a [`ContractorFeed`](super::ContractorFeed).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FeedError {
    /// The request never produced a response (DNS, connect, reset, timeout).
    #[error("Request failed: {0}")]
    Transport(String),
    /// The response body could not be read.
    #[error("Failed to read response body: {0}")]
    Body(String),
}

/// Why a dataset load did not produce the real contractor list.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadFailure {
    /// The primary resource answered but its body is not a JSON array.
    #[error("Invalid contractor JSON: {0}")]
    JsonParse(String),
    /// Neither the primary nor the alternate resource could be loaded.
    #[error("Contractor data unavailable (primary: {primary}; alternate: {alternate})")]
    Unavailable { primary: String, alternate: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_error_display() {
        assert_eq!(
            FeedError::Transport("connection refused".to_string()).to_string(),
            "Request failed: connection refused"
        );
        assert_eq!(
            FeedError::Body("unexpected EOF".to_string()).to_string(),
            "Failed to read response body: unexpected EOF"
        );
    }

    #[test]
    fn test_load_failure_display() {
        assert_eq!(
            LoadFailure::JsonParse("expected value at line 1 column 1".to_string()).to_string(),
            "Invalid contractor JSON: expected value at line 1 column 1"
        );
        assert_eq!(
            LoadFailure::Unavailable {
                primary: "HTTP 404 Not Found".to_string(),
                alternate: "Request failed: timeout".to_string(),
            }
            .to_string(),
            "Contractor data unavailable (primary: HTTP 404 Not Found; alternate: Request failed: timeout)"
        );
    }
}
