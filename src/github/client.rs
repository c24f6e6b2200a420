//! HTTP client for the GitHub gist endpoints and the mapping document.

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde::de::DeserializeOwned;

use super::GistSource;
use super::error::{FetchError, Result};
use super::types::{Gist, GistFork};
use crate::languages::LanguageEntry;

/// GitHub API base URL.
const GITHUB_API_URL: &str = "https://api.github.com";

/// User agent string for API requests.
const USER_AGENT_VALUE: &str = concat!(
    "gisthub/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/gisthub/gisthub)"
);

/// Async client for the two gist endpoints plus the static language document.
#[derive(Debug, Clone)]
pub struct GistClient {
    client: reqwest::Client,
    base_url: String,
}

impl GistClient {
    /// Create a client with the GitHub-recommended default headers.
    pub fn new() -> Result<Self> {
        Self::with_base_url(GITHUB_API_URL)
    }

    /// Create a client against a non-default API host. Used by tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| FetchError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Issue a GET, insist on a success status, and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!(url, "issuing request");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let value = response.json().await?;
        Ok(value)
    }
}

impl GistSource for GistClient {
    async fn user_gists(&self, username: &str) -> Result<Vec<Gist>> {
        let url = format!("{}/users/{}/gists", self.base_url, username);
        self.get_json(&url).await
    }

    async fn gist_forks(&self, forks_url: &str) -> Result<Vec<GistFork>> {
        self.get_json(forks_url).await
    }

    async fn language_entries(&self, url: &str) -> Result<Vec<LanguageEntry>> {
        self.get_json(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation_succeeds() {
        assert!(GistClient::new().is_ok());
    }
}
