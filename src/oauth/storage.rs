use crate::oauth::errors::OAuthError;
use std::path::PathBuf;

const TOKENS_FILE: &str = "strava_tokens.json";
const STATE_FILE: &str = "strava_oauth_state.json";

/// Trait for token storage operations
#[async_trait::async_trait]
pub trait TokenStorage: Send + Sync {
    /// Load tokens from storage
    async fn load_tokens(&self) -> Result<Option<Vec<u8>>, OAuthError>;

    /// Save tokens to storage
    async fn save_tokens(&self, data: Vec<u8>) -> Result<(), OAuthError>;

    /// Load OAuth state from storage
    async fn load_state(&self) -> Result<Option<Vec<u8>>, OAuthError>;

    /// Save OAuth state to storage
    async fn save_state(&self, data: Vec<u8>) -> Result<(), OAuthError>;

    /// Remove OAuth state from storage
    async fn remove_state(&self) -> Result<(), OAuthError>;
}

/// File-based storage implementation
pub struct FileStorage {
    storage_dir: PathBuf,
}

impl FileStorage {
    pub fn new(storage_dir: PathBuf) -> Self {
        Self { storage_dir }
    }

    async fn read_optional(&self, name: &str) -> Result<Option<Vec<u8>>, OAuthError> {
        match tokio::fs::read(self.storage_dir.join(name)).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(OAuthError::IoError(e)),
        }
    }
}

#[async_trait::async_trait]
impl TokenStorage for FileStorage {
    async fn load_tokens(&self) -> Result<Option<Vec<u8>>, OAuthError> {
        self.read_optional(TOKENS_FILE).await
    }

    async fn save_tokens(&self, data: Vec<u8>) -> Result<(), OAuthError> {
        tokio::fs::write(self.storage_dir.join(TOKENS_FILE), data).await?;
        Ok(())
    }

    async fn load_state(&self) -> Result<Option<Vec<u8>>, OAuthError> {
        self.read_optional(STATE_FILE).await
    }

    async fn save_state(&self, data: Vec<u8>) -> Result<(), OAuthError> {
        tokio::fs::write(self.storage_dir.join(STATE_FILE), data).await?;
        Ok(())
    }

    async fn remove_state(&self) -> Result<(), OAuthError> {
        match tokio::fs::remove_file(self.storage_dir.join(STATE_FILE)).await {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(OAuthError::IoError(e)),
        }
    }
}
