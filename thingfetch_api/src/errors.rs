//! Error types for the fetch service and its transport.

/// Errors returned by [`crate::DomainService::fetch`].
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The transport answered 404 for the requested thing.
    #[error("thing '{identifier}' does not exist")]
    NotFound { identifier: String },
    /// The transport answered with any other non-success status.
    #[error("communication failure: {status} {reason}")]
    CommunicationFailure { status: u16, reason: String },
    /// The request never produced an HTTP status.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

impl Error {
    /// The HTTP status behind this error, if the transport got one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::CommunicationFailure { status, .. } => Some(*status),
            Self::Transport(_) => None,
        }
    }
}

/// Errors raised by a [`crate::Transport`] before a status is available.
#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    #[error("invalid request url: {0}")]
    InvalidUrl(String),
    #[error("request failed")]
    Request(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = Error::NotFound {
            identifier: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "thing 'abc' does not exist");

        let err = Error::CommunicationFailure {
            status: 503,
            reason: "Service Unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "communication failure: 503 Service Unavailable");

        let err = Error::from(TransportError::InvalidUrl(
            "relative URL without a base".to_string(),
        ));
        assert!(err.to_string().starts_with("transport error"));
        assert!(err.to_string().contains("relative URL"));
    }

    #[test]
    fn status_is_known_only_for_http_outcomes() {
        let err = Error::NotFound {
            identifier: "x".to_string(),
        };
        assert_eq!(err.status(), Some(404));

        let err = Error::CommunicationFailure {
            status: 418,
            reason: "I'm a teapot".to_string(),
        };
        assert_eq!(err.status(), Some(418));

        let err = Error::Transport(TransportError::InvalidUrl("bad".to_string()));
        assert_eq!(err.status(), None);
    }
}
