/// Blocking MediaWiki client
///
/// One `reqwest::blocking::Client` is built up front and shared by every
/// worker thread; it pools connections internally.

use reqwest::blocking::Client;
use serde_json::Value;

use super::traits::{QueryParams, WikiApi};
use crate::shared::config::ApiConfig;
use crate::shared::error::ApiError;

/// HTTP implementation of [`WikiApi`]
#[derive(Debug, Clone)]
pub struct MediaWikiClient {
    http: Client,
    endpoint: String,
}

impl MediaWikiClient {
    /// Creates a client for the API described by `config`
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = Client::builder().user_agent(config.user_agent()).build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl WikiApi for MediaWikiClient {
    fn query(&self, params: &QueryParams) -> Result<Value, ApiError> {
        tracing::trace!("GET {} {:?}", self.endpoint, params);

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("format", "json")])
            .query(params)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = response.bytes()?;
        Ok(serde_json::from_slice(&body)?)
    }
}
