use crate::config::{STRAVA_AUTHORIZE_URL, STRAVA_TOKEN_URL};

/// Server-side settings for the code exchange
#[derive(Clone)]
pub struct OAuthSettings {
    /// OAuth authorization URL
    pub authorize_url: String,
    /// OAuth token exchange URL
    pub token_url: String,
    /// Strava application secret
    pub client_secret: String,
    /// State expiration time in seconds (default: 600 = 10 minutes)
    pub state_expiry_seconds: i64,
}

impl OAuthSettings {
    pub fn new(client_secret: impl Into<String>) -> Self {
        Self {
            authorize_url: STRAVA_AUTHORIZE_URL.to_string(),
            token_url: STRAVA_TOKEN_URL.to_string(),
            client_secret: client_secret.into(),
            state_expiry_seconds: 600,
        }
    }
}

impl std::fmt::Debug for OAuthSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthSettings")
            .field("authorize_url", &self.authorize_url)
            .field("token_url", &self.token_url)
            .field("client_secret", &"<redacted>")
            .field("state_expiry_seconds", &self.state_expiry_seconds)
            .finish()
    }
}
