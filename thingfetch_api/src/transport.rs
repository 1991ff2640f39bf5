//! The HTTP capability the fetch service is built on.

use std::sync::Arc;

use async_trait::async_trait;
use url::Url;

use crate::{config::TransportConfig, errors::TransportError};

/// Raw outcome of a GET, before any domain interpretation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub reason: String,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs `GET <base><path>` and reports status, reason phrase and body.
///
/// Non-success statuses are returned as responses, not errors. Only failures
/// that leave no status behind surface as [`TransportError`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, path: &str) -> Result<TransportResponse, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn get(&self, path: &str) -> Result<TransportResponse, TransportError> {
        (**self).get(path).await
    }
}

/// [`Transport`] backed by a single `reqwest::Client`.
pub struct HttpTransport {
    client: reqwest::Client,
    /// Base address with any trailing `/` removed.
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &TransportConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Default settings with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, TransportError> {
        Self::new(&TransportConfig::default().with_base_url(base_url))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get_url(&self, path: &str) -> Result<Url, TransportError> {
        Url::parse(format!("{}{}", &self.base_url, path).as_str())
            .map_err(|e| TransportError::InvalidUrl(e.to_string()))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> Result<TransportResponse, TransportError> {
        let url = self.get_url(path)?;
        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        // hyper keeps the phrase only when it differs from the canonical one.
        let reason = resp
            .extensions()
            .get::<hyper::ext::ReasonPhrase>()
            .map(|phrase| String::from_utf8_lossy(phrase.as_bytes()).into_owned())
            .unwrap_or_else(|| status.canonical_reason().unwrap_or_default().to_string());
        let body = resp.text().await?;

        Ok(TransportResponse {
            status: status.as_u16(),
            reason,
            body,
        })
    }
}
