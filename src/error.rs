//! Crate-wide error types.
//!
//! Failures are split along retry boundaries: 4xx responses are terminal
//! and never retried, 5xx and network-level failures are retried up to the
//! configured bound by the transport layer before the last one propagates.
//!
//! Two outcomes are deliberately NOT errors:
//! - "nothing matched" during resolution is a `None` return
//! - a lyrics page without a recognizable lyrics section is a `None` lyrics
//!   value on the resolved song

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by transport and resolution.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Operation requires an access token that was not supplied
    #[error("access token required for {0}")]
    MissingToken(&'static str),

    /// 401/403 from the API (bad or expired token)
    #[error("authentication failed (HTTP {status}): {message}")]
    Auth { status: u16, message: String },

    /// 429 from the API
    #[error("rate limited - try again later")]
    RateLimited,

    /// Any other 4xx response (malformed request, unknown entity)
    #[error("client error (HTTP {status}): {message}")]
    Client { status: u16, message: String },

    /// 5xx response; retried before propagating
    #[error("server error (HTTP {status}): {message}")]
    Server { status: u16, message: String },

    /// Connection/timeout failure with no status code; retried before propagating
    #[error("network error: {0}")]
    Network(String),

    /// Response body did not match the expected provider shape
    #[error("failed to parse response: {0}")]
    Parse(String),

    /// Bad configuration value (e.g. malformed exclusion pattern)
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Classify an HTTP status into the matching error variant.
    ///
    /// Only meaningful for non-2xx statuses; the transport layer checks
    /// success before calling this.
    pub(crate) fn from_status(status: u16, message: impl Into<String>) -> Self {
        match status {
            401 | 403 => Self::Auth {
                status,
                message: message.into(),
            },
            429 => Self::RateLimited,
            400..=499 => Self::Client {
                status,
                message: message.into(),
            },
            _ => Self::Server {
                status,
                message: message.into(),
            },
        }
    }

    /// Whether the transport layer may retry after this error.
    ///
    /// Client errors (4xx) are terminal: retrying a bad request or a
    /// missing entity cannot succeed.
    pub(crate) fn is_retryable(&self) -> bool {
        matches!(self, Self::Server { .. } | Self::Network(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert!(matches!(
            Error::from_status(401, "unauthorized"),
            Error::Auth { status: 401, .. }
        ));
        assert!(matches!(Error::from_status(429, ""), Error::RateLimited));
        assert!(matches!(
            Error::from_status(404, "not found"),
            Error::Client { status: 404, .. }
        ));
        assert!(matches!(
            Error::from_status(503, "unavailable"),
            Error::Server { status: 503, .. }
        ));
    }

    #[test]
    fn test_retryability() {
        assert!(Error::from_status(500, "").is_retryable());
        assert!(Error::Network("connection reset".into()).is_retryable());
        assert!(!Error::from_status(404, "").is_retryable());
        assert!(!Error::from_status(429, "").is_retryable());
        assert!(!Error::MissingToken("account").is_retryable());
    }

    #[test]
    fn test_error_display() {
        let err = Error::from_status(503, "Service Unavailable");
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("Service Unavailable"));
    }
}
