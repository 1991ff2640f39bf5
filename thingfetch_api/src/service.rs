//! Domain fetch service: identifier in, thing value or typed error out.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::{
    config::TransportConfig,
    errors::TransportError,
    transport::{HttpTransport, Transport},
    Error,
};

/// Characters escaped when an identifier becomes a path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Looks up the value of a thing by its identifier.
#[async_trait]
pub trait DomainService: Send + Sync {
    async fn fetch(&self, identifier: &str) -> Result<String, Error>;
}

/// Request path for a thing: `/things/{identifier}`, with the identifier
/// encoded as a single segment.
pub fn things_path(identifier: &str) -> String {
    format!("/things/{}", utf8_percent_encode(identifier, PATH_SEGMENT))
}

/// `.` and `..` are dot segments to URL parsing, escaped or not, and would
/// resolve to a different path.
fn is_dot_segment(identifier: &str) -> bool {
    matches!(identifier, "." | "..")
}

/// [`DomainService`] that issues exactly one GET per fetch through `T`.
///
/// Holds nothing but the transport, so concurrent fetches are safe whenever
/// the transport is.
pub struct ThingService<T> {
    transport: T,
}

impl ThingService<HttpTransport> {
    /// Builds a service over an [`HttpTransport`] with the given settings.
    pub fn from_config(config: &TransportConfig) -> Result<Self, Error> {
        Ok(Self::new(HttpTransport::new(config)?))
    }
}

impl<T: Transport> ThingService<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

#[async_trait]
impl<T: Transport> DomainService for ThingService<T> {
    async fn fetch(&self, identifier: &str) -> Result<String, Error> {
        if is_dot_segment(identifier) {
            return Err(TransportError::InvalidUrl(format!(
                "identifier '{}' is a dot segment",
                identifier
            ))
            .into());
        }

        let path = things_path(identifier);
        tracing::debug!("GET {}", path);

        let resp = self.transport.get(&path).await?;
        tracing::debug!("GET {} -> {} {}", path, resp.status, resp.reason);

        match resp.status {
            _ if resp.is_success() => Ok(resp.body),
            404 => Err(Error::NotFound {
                identifier: identifier.to_string(),
            }),
            status => Err(Error::CommunicationFailure {
                status,
                reason: resp.reason,
            }),
        }
    }
}
