//! Failure taxonomy for normalized network calls.

use thiserror::Error;

/// Everything that can go wrong with a normalized call.
///
/// All faults are caught at the normalizer boundary and converted into
/// one of these; nothing escapes raw, and nothing is silently dropped.
/// Consumers that only render may treat the whole union opaquely.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The call completed with a non-success status code.
    #[error("http status {status}")]
    HttpStatus { status: u16 },

    /// The call completed successfully but carried no body.
    #[error("response body missing")]
    NullBody,

    /// The body decoded but failed the caller's validation.
    #[error("invalid response: {body}")]
    InvalidResponse { body: String },

    /// The call itself failed before yielding a response.
    #[error("network call failed: {source}")]
    Transport {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl FetchError {
    /// Wrap a fault raised by the transport.
    pub fn transport(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Transport {
            source: source.into(),
        }
    }

    /// Short classification string, stable across message changes.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::HttpStatus { .. } => "http_status",
            Self::NullBody => "null_body",
            Self::InvalidResponse { .. } => "invalid_response",
            Self::Transport { .. } => "transport",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_display_and_kind() {
        let err = FetchError::HttpStatus { status: 404 };
        assert_eq!(err.to_string(), "http status 404");
        assert_eq!(err.kind(), "http_status");
    }

    #[test]
    fn null_body_display_and_kind() {
        let err = FetchError::NullBody;
        assert_eq!(err.to_string(), "response body missing");
        assert_eq!(err.kind(), "null_body");
    }

    #[test]
    fn transport_chains_the_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset");
        let err = FetchError::transport(io);
        assert_eq!(err.kind(), "transport");
        assert!(std::error::Error::source(&err).is_some());
    }
}
