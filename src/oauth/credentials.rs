use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::api::SummaryAthlete;

/// Tokens returned by the Strava token endpoint
///
/// `athlete` is only present on the authorization-code exchange, never on
/// a refresh.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StravaTokens {
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub access_token: String,
    pub refresh_token: String,
    /// Expiry as a unix timestamp in seconds
    pub expires_at: i64,
    #[serde(default)]
    pub expires_in: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub athlete: Option<SummaryAthlete>,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

impl StravaTokens {
    /// Check if the access token is expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.expires_at
    }

    /// Get time until token expiration in seconds
    pub fn expires_in_seconds(&self) -> Option<i64> {
        let remaining = self.expires_at - Utc::now().timestamp();
        (remaining > 0).then_some(remaining)
    }

    /// Merge a refresh response, keeping the athlete from the original grant
    pub(crate) fn refreshed(self, mut fresh: StravaTokens) -> StravaTokens {
        if fresh.athlete.is_none() {
            fresh.athlete = self.athlete;
        }
        fresh
    }
}

/// Form body posted to the token endpoint
#[derive(Debug, Serialize)]
pub(crate) struct TokenRequest<'a> {
    pub client_id: &'a str,
    pub client_secret: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<&'a str>,
    pub grant_type: &'a str,
}
