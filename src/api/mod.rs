//! JSON API call wrapper
//!
//! Every call goes to `{base_url}{endpoint}` with a default
//! `Content-Type: application/json` header. Failures are logged and handed
//! back to the caller unchanged; nothing is retried.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::Config;

mod errors;
pub mod models;
mod options;
mod strava;

pub use errors::ApiError;
pub use models::{SummaryActivity, SummaryAthlete};
pub use options::{ApiCallOptions, ResolvedOptions};
pub use strava::{ActivityQuery, StravaApi};

pub(crate) const USER_AGENT: &str = concat!("strava-connect/", env!("CARGO_PKG_VERSION"));

/// HTTP client bound to one base URL
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    debug: bool,
    http_client: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, debug: bool) -> Result<Self, ApiError> {
        let http_client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            base_url: base_url.into(),
            debug,
            http_client,
        })
    }

    /// Client for the backend named in the configuration
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Self::new(config.api_base_url.clone(), config.debug)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Call `endpoint` and return the decoded JSON body
    pub async fn call(
        &self,
        endpoint: &str,
        options: Option<ApiCallOptions>,
    ) -> Result<Value, ApiError> {
        self.call_as(endpoint, options).await
    }

    /// Call `endpoint` and decode the JSON body into `T`
    pub async fn call_as<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: Option<ApiCallOptions>,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let options = options.unwrap_or_default().resolve();

        if self.debug {
            log::info!("API Call: {} {} {:?}", options.method, url, options);
        }

        match self.send(&url, options).await {
            Ok(data) => Ok(data),
            Err(e) => {
                log::error!("API Call failed: {}", e);
                Err(e)
            }
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        url: &str,
        options: ResolvedOptions,
    ) -> Result<T, ApiError> {
        let mut request = self.http_client.request(options.method, url);
        for (name, value) in &options.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if let Some(body) = options.body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let response_text = response.text().await?;
        log::debug!("Raw API response from {}: {}", url, response_text);
        Ok(serde_json::from_str(&response_text)?)
    }
}
