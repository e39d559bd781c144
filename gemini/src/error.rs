use thiserror::Error;

/// Failure taxonomy for the generateContent call.
///
/// `RateLimited` and `Transport` are transient: the retry loop absorbs
/// them until the attempt budget runs out, then hands the last one back
/// unchanged. `Api` surfaces immediately.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("rate limited (HTTP 429)")]
    RateLimited,

    #[error("API error: HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("transport error: {0}")]
    Transport(String),
}

impl GenerateError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited | Self::Transport(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_and_transport_are_retryable() {
        assert!(GenerateError::RateLimited.is_retryable());
        assert!(GenerateError::Transport("connection reset".to_string()).is_retryable());
    }

    #[test]
    fn test_api_errors_are_not_retryable() {
        let err = GenerateError::Api {
            status: 500,
            message: "Internal Server Error".to_string(),
        };
        assert!(!err.is_retryable());
    }
}
