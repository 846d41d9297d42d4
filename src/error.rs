use thiserror::Error;

#[derive(Error, Debug)]
pub enum PexelsError {
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("validation error: {0}")]
    Validation(String),
}

impl PexelsError {
    /// HTTP status of a non-2xx response, if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            PexelsError::Http { status, .. } => Some(*status),
            PexelsError::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the service rejected the call for exceeding its quota.
    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(429)
    }
}

pub type Result<T> = std::result::Result<T, PexelsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status() {
        let err = PexelsError::Http {
            status: 429,
            message: "Too Many Requests".into(),
        };
        assert_eq!(err.status(), Some(429));
        assert!(err.is_rate_limited());
        assert_eq!(err.to_string(), "HTTP error 429: Too Many Requests");
    }

    #[test]
    fn test_validation_has_no_status() {
        let err = PexelsError::Validation("empty".into());
        assert_eq!(err.status(), None);
        assert!(!err.is_rate_limited());
    }
}
