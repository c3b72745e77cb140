use crate::admin::application::domain::SessionId;

/// Prefix of the keys admin bearer tokens are persisted under.
pub const TOKEN_STORAGE_KEY: &str = "adminToken";

/// Each browser session keeps its token under its own key.
pub fn session_token_key(session: &SessionId) -> String {
    format!("{}:{}", TOKEN_STORAGE_KEY, session)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenStoreError {
    #[error("Storage I/O error: {0}")]
    Io(String),

    #[error("Storage file is corrupt: {0}")]
    Corrupt(String),
}

/// Small persistent key/value storage, the host-side stand-in for browser
/// local storage.
pub trait TokenStore: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<String>, TokenStoreError>;

    fn save(&self, key: &str, value: &str) -> Result<(), TokenStoreError>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), TokenStoreError>;
}
