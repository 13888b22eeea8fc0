//! HTTP transport and XML decoding for category documents.

use std::time::Duration;

use crate::{
    config::{Config, DEFAULT_REQUEST_TIMEOUT, DEFAULT_USER_AGENT},
    error::{transport::TransportError, Error},
    universe::{Region, Universe, UniverseId},
    xml::{parse_document, XmlElement},
};

/// Shared HTTP client for every universe created from it.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
}

pub struct ClientBuilder {
    user_agent: String,
    request_timeout: Duration,
}

impl ClientBuilder {
    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    pub fn request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    pub fn build(self) -> Result<Client, Error> {
        let http = reqwest::Client::builder()
            .user_agent(self.user_agent)
            .timeout(self.request_timeout)
            .build()
            .map_err(TransportError::Http)?;

        Ok(Client { http })
    }
}

impl Client {
    /// Client with the default user agent and timeout.
    pub fn new() -> Result<Self, Error> {
        Self::builder().build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, Error> {
        Self::builder()
            .user_agent(&config.user_agent)
            .request_timeout(config.request_timeout)
            .build()
    }

    /// Universe handle for a numbered or named server of `region`.
    pub fn universe(&self, id: impl Into<UniverseId>, region: Region) -> Universe {
        Universe::new(self, id, region)
    }

    /// Universe handle for an explicit API endpoint.
    pub fn universe_from_endpoint(&self, endpoint: impl Into<String>) -> Universe {
        Universe::from_endpoint(self, endpoint)
    }

    /// Fetches `{endpoint}/{category}.xml` and returns its `<category>` root.
    ///
    /// Transport, status and decode failures are returned as-is; nothing is retried.
    pub async fn fetch_category(
        &self,
        endpoint: &str,
        category: &str,
        query: &[(&str, String)],
    ) -> Result<XmlElement, TransportError> {
        let url = format!("{}/{}.xml", endpoint.trim_end_matches('/'), category);
        tracing::debug!("Fetching {} with query {:?}", url, query);

        let mut request = self.http.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status { url, status });
        }

        let body = response.text().await?;
        let document = parse_document(&body)?
            .filter(|document| document.root_name == category)
            .ok_or_else(|| TransportError::MissingRoot {
                category: category.to_string(),
            })?;

        tracing::trace!("Decoded {} document from {}", category, url);

        Ok(document.root)
    }
}
