use chrono::Utc;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::config::{Config, DEFAULT_STATE, STRAVA_AUTHORIZE_URL};
use crate::oauth::{errors::OAuthError, storage::TokenStorage};

/// Pending authorization, kept until the redirect comes back
#[derive(Debug, Serialize, Deserialize, Clone)]
pub(crate) struct OAuthState {
    pub state: String,
    pub timestamp: i64,
    pub expires_at: i64,
}

/// Strava authorization URL for `state`, or for the default state when none is given
pub fn authorization_url(config: &Config, state: Option<&str>) -> String {
    OAuthFlow::build_authorization_url(STRAVA_AUTHORIZE_URL, config, state.unwrap_or(DEFAULT_STATE))
}

/// OAuth flow helper methods
pub struct OAuthFlow;

impl OAuthFlow {
    pub fn build_authorization_url(endpoint: &str, config: &Config, state: &str) -> String {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("client_id", &config.client_id)
            .append_pair("response_type", "code")
            .append_pair("redirect_uri", &config.redirect_uri)
            .append_pair("approval_prompt", "force")
            .append_pair("scope", &config.scopes)
            .append_pair("state", state)
            .finish();

        format!("{}?{}", endpoint, query)
    }

    /// Random hex state for CSRF protection
    pub fn generate_state() -> String {
        let mut state_bytes = [0u8; 32];
        rand::rng().fill_bytes(&mut state_bytes);
        hex::encode(state_bytes)
    }

    pub(crate) async fn save_oauth_state(
        storage: &dyn TokenStorage,
        state: &str,
        state_expiry_seconds: i64,
    ) -> Result<(), OAuthError> {
        let current_time = Utc::now().timestamp();

        let oauth_state = OAuthState {
            state: state.to_string(),
            timestamp: current_time,
            expires_at: current_time + state_expiry_seconds,
        };

        let json_content = serde_json::to_string_pretty(&oauth_state)?;
        storage.save_state(json_content.into_bytes()).await?;

        Ok(())
    }

    pub(crate) async fn load_oauth_state(storage: &dyn TokenStorage) -> Result<OAuthState, OAuthError> {
        let content = match storage.load_state().await? {
            Some(bytes) => String::from_utf8(bytes)
                .map_err(|e| OAuthError::CustomHandlerError(format!("Invalid UTF-8: {}", e)))?,
            None => return Err(OAuthError::StateNotFound),
        };

        Ok(serde_json::from_str(&content)?)
    }

    /// The returned state must match the saved one and must not have expired
    pub(crate) fn verify_oauth_state(oauth_state: &OAuthState, returned_state: &str) -> Result<(), OAuthError> {
        if Utc::now().timestamp() > oauth_state.expires_at {
            log::warn!("OAuth state expired at {}", oauth_state.expires_at);
            return Err(OAuthError::InvalidState);
        }

        if oauth_state.state != returned_state {
            log::warn!("OAuth state mismatch");
            return Err(OAuthError::InvalidState);
        }

        Ok(())
    }

    /// Clean authorization code by removing URL fragments and parameters
    pub fn clean_authorization_code(auth_code: &str) -> String {
        auth_code
            .trim()
            .split('#')
            .next()
            .unwrap_or(auth_code)
            .split('&')
            .next()
            .unwrap_or(auth_code)
            .to_string()
    }
}
