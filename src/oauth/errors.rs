/// Errors that can occur during the Strava OAuth flow
#[derive(Debug, thiserror::Error)]
pub enum OAuthError {
    #[error("Invalid or expired OAuth state")]
    InvalidState,
    #[error("OAuth state not found")]
    StateNotFound,
    #[error("No Strava tokens stored")]
    NotAuthenticated,
    #[error("Failed to exchange authorization code: {0}")]
    TokenExchangeFailed(String),
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("URL parsing error: {0}")]
    UrlError(#[from] url::ParseError),
    #[error("Custom handler error: {0}")]
    CustomHandlerError(String),
}
