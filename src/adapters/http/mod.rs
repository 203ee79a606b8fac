//! HTTP feed source
//!
//! Issues a single blocking `GET <endpoint>?api_key=<key>`. There are no
//! retries; a timeout is only set when one is asked for.

use std::fmt;
use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};

use crate::core::ports::FeedSource;
use crate::error::CheckError;

/// Today's near-Earth-object feed
pub const DEFAULT_ENDPOINT: &str = "https://api.nasa.gov/neo/rest/v1/feed/today";

/// Feed source backed by `reqwest`
pub struct HttpFeedSource {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl HttpFeedSource {
    /// Create a source for `endpoint`, authenticated with `api_key`
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, CheckError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| CheckError::Network(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        })
    }

    fn request_url(&self) -> Result<Url, CheckError> {
        Url::parse_with_params(&self.endpoint, &[("api_key", self.api_key.as_str())])
            .map_err(|e| CheckError::Endpoint(format!("{}: {e}", self.endpoint)))
    }
}

impl fmt::Debug for HttpFeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpFeedSource")
            .field("client", &self.client)
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl FeedSource for HttpFeedSource {
    fn fetch(&self) -> Result<Vec<u8>, CheckError> {
        let url = self.request_url()?;
        debug!("GET {}", self.endpoint);

        // Errors are stripped of their URL so the key never reaches the output
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| CheckError::Network(e.without_url().to_string()))?;

        let status = response.status();
        debug!("Response status: {status}");
        if status != StatusCode::OK {
            return Err(CheckError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .map_err(|e| CheckError::Body(e.without_url().to_string()))?;
        Ok(body.to_vec())
    }
}
