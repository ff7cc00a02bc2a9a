//! Strava OAuth 2.0 authorization code flow
//!
//! # Examples
//!
//! ```no_run
//! use strava_connect::oauth::{OAuthSettings, StravaAuth};
//! use strava_connect::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let auth = StravaAuth::with_file_storage(
//!         Config::from_env(),
//!         OAuthSettings::new("client_secret"),
//!         std::env::current_dir()?,
//!     )?;
//!
//!     // Send the user here
//!     let url = auth.generate_login_url().await?;
//!     println!("Visit: {}", url);
//!
//!     // Strava redirects back with ?code=...&state=...
//!     let tokens = auth.exchange_code("code_from_redirect", "state_from_redirect").await?;
//!     auth.save_tokens(&tokens).await?;
//!
//!     Ok(())
//! }
//! ```

use reqwest::Client;
use std::path::PathBuf;

use crate::api::USER_AGENT;
use crate::config::Config;

mod config;
mod credentials;
mod errors;
mod flow;
mod storage;

pub use config::OAuthSettings;
pub use credentials::StravaTokens;
pub use errors::OAuthError;
pub use flow::{authorization_url, OAuthFlow};
pub use storage::{FileStorage, TokenStorage};

use credentials::TokenRequest;

/// Strava OAuth client
pub struct StravaAuth {
    config: Config,
    settings: OAuthSettings,
    http_client: Client,
    storage: Box<dyn TokenStorage>,
}

impl std::fmt::Debug for StravaAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StravaAuth")
            .field("config", &self.config)
            .field("settings", &self.settings)
            .field("http_client", &"<http_client>")
            .field("storage", &"<storage>")
            .finish()
    }
}

impl StravaAuth {
    /// Create a new OAuth client with the given configuration and storage
    pub fn new(
        config: Config,
        settings: OAuthSettings,
        storage: Box<dyn TokenStorage>,
    ) -> Result<Self, OAuthError> {
        let http_client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            config,
            settings,
            http_client,
            storage,
        })
    }

    /// Create a new OAuth client storing tokens as files in `storage_dir`
    pub fn with_file_storage(
        config: Config,
        settings: OAuthSettings,
        storage_dir: PathBuf,
    ) -> Result<Self, OAuthError> {
        Self::new(config, settings, Box::new(FileStorage::new(storage_dir)))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Generate a login URL carrying a fresh random state
    pub async fn generate_login_url(&self) -> Result<String, OAuthError> {
        let state = OAuthFlow::generate_state();

        OAuthFlow::save_oauth_state(
            self.storage.as_ref(),
            &state,
            self.settings.state_expiry_seconds,
        )
        .await?;

        Ok(OAuthFlow::build_authorization_url(
            &self.settings.authorize_url,
            &self.config,
            &state,
        ))
    }

    /// Exchange the code from the redirect for tokens
    pub async fn exchange_code(
        &self,
        authorization_code: &str,
        returned_state: &str,
    ) -> Result<StravaTokens, OAuthError> {
        let oauth_state = OAuthFlow::load_oauth_state(self.storage.as_ref()).await?;
        OAuthFlow::verify_oauth_state(&oauth_state, returned_state)?;

        let cleaned_code = OAuthFlow::clean_authorization_code(authorization_code);
        let tokens = self
            .request_tokens(TokenRequest {
                client_id: &self.config.client_id,
                client_secret: &self.settings.client_secret,
                code: Some(cleaned_code.as_str()),
                refresh_token: None,
                grant_type: "authorization_code",
            })
            .await?;

        if let Some(athlete) = &tokens.athlete {
            log::info!("Authorized Strava athlete {}", athlete.display_name());
        }

        Ok(tokens)
    }

    /// Trade a refresh token for a new access token
    pub async fn refresh_tokens(&self, refresh_token: &str) -> Result<StravaTokens, OAuthError> {
        self.request_tokens(TokenRequest {
            client_id: &self.config.client_id,
            client_secret: &self.settings.client_secret,
            code: None,
            refresh_token: Some(refresh_token),
            grant_type: "refresh_token",
        })
        .await
    }

    async fn request_tokens(&self, request: TokenRequest<'_>) -> Result<StravaTokens, OAuthError> {
        let response = self
            .http_client
            .post(&self.settings.token_url)
            .header("Accept", "application/json")
            .form(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            log::error!("Strava token request ({}) failed: {}", request.grant_type, status);
            return Err(OAuthError::TokenExchangeFailed(format!(
                "{} - {}",
                status, error_text
            )));
        }

        let response_text = response.text().await?;
        log::debug!("Raw OAuth token response: {}", response_text);
        Ok(serde_json::from_str(&response_text)?)
    }

    pub async fn save_tokens(&self, tokens: &StravaTokens) -> Result<(), OAuthError> {
        let json_content = serde_json::to_string_pretty(tokens)?;
        self.storage.save_tokens(json_content.into_bytes()).await?;
        Ok(())
    }

    pub async fn load_tokens(&self) -> Result<Option<StravaTokens>, OAuthError> {
        let content = match self.storage.load_tokens().await? {
            Some(bytes) => String::from_utf8(bytes)
                .map_err(|e| OAuthError::CustomHandlerError(format!("Invalid UTF-8: {}", e)))?,
            None => return Ok(None),
        };

        Ok(Some(serde_json::from_str(&content)?))
    }

    /// Stored access token, refreshed first when it has expired
    pub async fn valid_access_token(&self) -> Result<String, OAuthError> {
        let tokens = self
            .load_tokens()
            .await?
            .ok_or(OAuthError::NotAuthenticated)?;

        if !tokens.is_expired() {
            return Ok(tokens.access_token);
        }

        log::info!("Strava access token expired, refreshing");
        let fresh = self.refresh_tokens(&tokens.refresh_token).await?;
        let tokens = tokens.refreshed(fresh);
        self.save_tokens(&tokens).await?;

        Ok(tokens.access_token)
    }

    /// Clean up OAuth state after successful authentication
    pub async fn cleanup_state(&self) -> Result<(), OAuthError> {
        self.storage.remove_state().await?;
        Ok(())
    }
}
