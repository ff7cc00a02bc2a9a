use std::sync::OnceLock;

/// Strava OAuth authorization endpoint
pub const STRAVA_AUTHORIZE_URL: &str = "https://www.strava.com/oauth/authorize";
/// Strava OAuth token endpoint
pub const STRAVA_TOKEN_URL: &str = "https://www.strava.com/oauth/token";
/// Strava REST API root
pub const STRAVA_API_URL: &str = "https://www.strava.com/api/v3";

/// State sent with the authorization request when the caller gives none
pub const DEFAULT_STATE: &str = "friends_invite";

const CLIENT_ID_PLACEHOLDER: &str = "VOTRE_CLIENT_ID_STRAVA";
const PROJECT_ID_PLACEHOLDER: &str = "VOTRE-PROJECT-ID";
const NGROK_URL_PLACEHOLDER: &str = "VOTRE-NGROK-URL";

/// Client configuration for the Strava integration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Strava application client ID
    pub client_id: String,
    /// Page Strava redirects back to after authorization
    pub redirect_uri: String,
    /// Backend the API wrapper talks to
    pub api_base_url: String,
    /// Comma-separated Strava scopes
    pub scopes: String,
    /// Log every outgoing API call
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            client_id: "161590".to_string(),
            redirect_uri: "https://strava-jerome.web.app/callback.html".to_string(),
            api_base_url: "https://1455-78-245-248-89.ngrok-free.app".to_string(),
            scopes: "read_all,activity:read_all".to_string(),
            debug: true,
        }
    }
}

impl Config {
    /// Unconfigured record as shipped before the user fills in their own values
    pub fn template() -> Self {
        Self {
            client_id: CLIENT_ID_PLACEHOLDER.to_string(),
            redirect_uri: format!("https://{}.web.app/callback.html", PROJECT_ID_PLACEHOLDER),
            api_base_url: format!("https://{}.ngrok-free.app", NGROK_URL_PLACEHOLDER),
            ..Self::default()
        }
    }

    /// Defaults overlaid with `STRAVA_CLIENT_ID`, `STRAVA_REDIRECT_URI`,
    /// `API_BASE_URL`, `STRAVA_SCOPES` and `STRAVA_DEBUG`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            client_id: non_empty("STRAVA_CLIENT_ID").unwrap_or(defaults.client_id),
            redirect_uri: non_empty("STRAVA_REDIRECT_URI").unwrap_or(defaults.redirect_uri),
            api_base_url: non_empty("API_BASE_URL").unwrap_or(defaults.api_base_url),
            scopes: non_empty("STRAVA_SCOPES").unwrap_or(defaults.scopes),
            debug: non_empty("STRAVA_DEBUG")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.debug),
        }
    }

    /// Individual scopes, in the order they were configured
    pub fn scope_list(&self) -> Vec<&str> {
        self.scopes
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Report every user-supplied field still holding its placeholder
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.client_id.contains(CLIENT_ID_PLACEHOLDER) {
            errors.push("STRAVA_CLIENT_ID is not configured".to_string());
        }

        if self.redirect_uri.contains(PROJECT_ID_PLACEHOLDER) {
            errors.push(format!(
                "STRAVA_REDIRECT_URI is not configured - replace {} with your Firebase project ID",
                PROJECT_ID_PLACEHOLDER
            ));
        }

        if self.api_base_url.contains(NGROK_URL_PLACEHOLDER) {
            errors.push(
                "API_BASE_URL is not configured - replace it with your current ngrok URL"
                    .to_string(),
            );
        }

        errors
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Process-wide configuration, loaded from the environment on first access
pub fn config() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config = Config::from_env();
        log::info!("Configuration loaded: {:?}", config);
        config
    })
}
