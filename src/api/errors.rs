/// Errors returned by the API call wrapper
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("API Error: {status} {status_text}")]
    Status { status: u16, status_text: String },
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status code for errors raised by a non-success response
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::HttpError(e) => e.status().map(|s| s.as_u16()),
            ApiError::JsonError(_) => None,
        }
    }
}
