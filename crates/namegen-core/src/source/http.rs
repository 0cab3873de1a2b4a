//! Remote object storage source
//!
//! Objects are fetched with plain `GET {base_url}/{object}` requests. An
//! optional bearer token is sent with every request.

use reqwest::blocking::Client;
use std::time::Duration;
use url::Url;

use super::{Source, TransportError};

/// Default timeout for source requests (30 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent sent with source requests
pub const USER_AGENT: &str = "namegen";

/// Builds HTTP client with the source user agent and `timeout`
///
/// # Errors
///
/// Returns error if client construction fails
pub fn build_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
}

/// Fetches the template and word table from an HTTP object store
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base_url: Url,
    template_object: String,
    word_table_object: String,
    access_token: Option<String>,
}

impl HttpSource {
    /// Create a source for two objects below `base_url`
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::InvalidUrl`] if `base_url` cannot carry
    /// path segments, or [`TransportError::Http`] if the client cannot be built.
    pub fn new(
        base_url: &str,
        template_object: impl Into<String>,
        word_table_object: impl Into<String>,
    ) -> Result<Self, TransportError> {
        let parsed = Url::parse(base_url).map_err(|e| TransportError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(TransportError::InvalidUrl {
                url: base_url.to_string(),
                reason: "URL cannot be a base".to_string(),
            });
        }

        let client = build_client(DEFAULT_TIMEOUT).map_err(|source| TransportError::Http {
            url: base_url.to_string(),
            source,
        })?;

        Ok(Self {
            client,
            base_url: parsed,
            template_object: template_object.into(),
            word_table_object: word_table_object.into(),
            access_token: None,
        })
    }

    /// Send `Authorization: Bearer <token>` with every request
    pub fn with_access_token(mut self, token: Option<String>) -> Self {
        self.access_token = token.filter(|t| !t.is_empty());
        self
    }

    /// URL of an object below the base URL
    pub fn object_url(&self, object: &str) -> Result<Url, TransportError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| TransportError::InvalidUrl {
                url: self.base_url.to_string(),
                reason: "URL cannot be a base".to_string(),
            })?
            .pop_if_empty()
            .extend(object.split('/').filter(|s| !s.is_empty()));
        Ok(url)
    }

    fn get(&self, object: &str) -> Result<String, TransportError> {
        let url = self.object_url(object)?;
        tracing::debug!(url = %url, "fetching source object");

        let mut request = self.client.get(url.clone());
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().map_err(|source| TransportError::Http {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().map_err(|source| TransportError::Http {
            url: url.to_string(),
            source,
        })
    }
}

impl Source for HttpSource {
    fn fetch_template_text(&self) -> Result<String, TransportError> {
        self.get(&self.template_object)
    }

    fn fetch_word_table(&self) -> Result<String, TransportError> {
        self.get(&self.word_table_object)
    }

    fn describe(&self) -> String {
        format!(
            "{} ({}, {})",
            self.base_url, self.template_object, self.word_table_object
        )
    }
}
