use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{StatusCode, header};
use thiserror::Error;

/// Failures below the API layer, before a response could be interpreted.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
    #[error("GET {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("no canned response matches {0}")]
    Unmatched(String),
}

/// A raw HTTP response: status plus undecoded body.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

/// The HTTP seam the GitHub client performs requests through.
///
/// Injected so tests can replay canned responses without touching the
/// network. Transports never interpret status codes; classifying non-2xx
/// responses belongs to the client layer.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError>;
}

/// Production transport backed by a shared `reqwest::Client`.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a client carrying the headers GitHub requires on every request.
    /// GitHub rejects requests without a `User-Agent`.
    pub fn new() -> Result<Self, TransportError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::USER_AGENT, header::HeaderValue::from_static("gitscope"));
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(TransportError::Build)?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError> {
        let response =
            self.client
                .get(url)
                .send()
                .await
                .map_err(|source| TransportError::Request {
                    url: url.to_string(),
                    source,
                })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| TransportError::Request {
                url: url.to_string(),
                source,
            })?;

        Ok(TransportResponse { status, body })
    }
}

#[derive(Debug, Clone)]
struct StubRule {
    fragment: String,
    status: StatusCode,
    body: Bytes,
    delay: Option<Duration>,
}

/// Canned-response transport for tests.
///
/// Rules are matched in registration order and the first rule whose fragment
/// is a substring of the requested URL wins, so register the more specific
/// `users/{name}/repos` fragment before `users/{name}`. A URL matching no
/// rule yields [`TransportError::Unmatched`].
#[derive(Debug, Clone, Default)]
pub struct StubTransport {
    rules: Vec<StubRule>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a canned response for any URL containing `fragment`.
    pub fn respond(mut self, fragment: &str, status: StatusCode, body: impl Into<Bytes>) -> Self {
        self.rules.push(StubRule {
            fragment: fragment.to_string(),
            status,
            body: body.into(),
            delay: None,
        });
        self
    }

    /// Like [`StubTransport::respond`], but the reply is held back for
    /// `delay` first.
    pub fn respond_after(
        mut self,
        fragment: &str,
        status: StatusCode,
        body: impl Into<Bytes>,
        delay: Duration,
    ) -> Self {
        self.rules.push(StubRule {
            fragment: fragment.to_string(),
            status,
            body: body.into(),
            delay: Some(delay),
        });
        self
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError> {
        let rule = self
            .rules
            .iter()
            .find(|rule| url.contains(&rule.fragment))
            .ok_or_else(|| TransportError::Unmatched(url.to_string()))?;

        if let Some(delay) = rule.delay {
            tokio::time::sleep(delay).await;
        }

        Ok(TransportResponse {
            status: rule.status,
            body: rule.body.clone(),
        })
    }
}
