use std::sync::Arc;

use thiserror::Error;

use super::transport::{Transport, TransportError};
use super::types::{GithubRepo, GithubUser};

/// Public GitHub REST API root.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Failure of a single GitHub API call, one variant per failure kind.
///
/// Every variant renders to a human-readable line; the loader surfaces them
/// in the presentation state as plain text while logs keep the kind.
#[derive(Debug, Error)]
pub enum GithubClientError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("GitHub API returned {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Typed client for the two public GitHub endpoints the loader needs.
#[derive(Clone)]
pub struct GithubClient {
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl GithubClient {
    /// No network activity happens at construction.
    pub fn new(base_url: String, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url,
            transport,
        }
    }

    /// GET `/users/{username}`.
    pub async fn get_user(&self, username: &str) -> Result<GithubUser, GithubClientError> {
        let url = format!("{}/users/{}", self.base_url, username);
        self.get_json(&url).await
    }

    /// GET `/users/{username}/repos`. Returns the list exactly as decoded;
    /// filtering is the caller's concern.
    pub async fn get_repos(&self, username: &str) -> Result<Vec<GithubRepo>, GithubClientError> {
        let url = format!("{}/users/{}/repos", self.base_url, username);
        self.get_json(&url).await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<T, GithubClientError> {
        tracing::debug!("Requesting {}", url);

        let response = match self.transport.get(url).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Request to {} failed: {}", url, e);
                return Err(e.into());
            }
        };

        if !response.status.is_success() {
            tracing::error!("GitHub API returned {} for {}", response.status, url);
            return Err(GithubClientError::Status {
                status: response.status,
                url: url.to_string(),
            });
        }

        serde_json::from_slice(&response.body).map_err(|source| {
            tracing::error!("Failed to decode response from {}: {}", url, source);
            GithubClientError::Decode {
                url: url.to_string(),
                source,
            }
        })
    }
}
