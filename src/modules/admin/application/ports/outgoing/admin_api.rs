use async_trait::async_trait;

use crate::admin::application::domain::{
    AnalyticsSummary, ContactMessage, Credentials, MessageStatus, PhotoUpload, UploadReceipt,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdminApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Unexpected status code: {0}")]
    Status(u16),

    #[error("Malformed response body: {0}")]
    Decode(String),

    #[error("Invalid message id: {0:?}")]
    InvalidMessageId(String),
}

/// Privileged endpoints of the portfolio API. Every call except
/// [`AdminApi::login`] carries the bearer token.
#[async_trait]
pub trait AdminApi: Send + Sync {
    /// Returns the issued access token.
    async fn login(&self, credentials: &Credentials) -> Result<String, AdminApiError>;

    async fn verify_token(&self, token: &str) -> Result<(), AdminApiError>;

    async fn analytics_summary(&self, token: &str) -> Result<AnalyticsSummary, AdminApiError>;

    async fn list_messages(&self, token: &str) -> Result<Vec<ContactMessage>, AdminApiError>;

    async fn update_message_status(
        &self,
        token: &str,
        message_id: &str,
        status: MessageStatus,
    ) -> Result<(), AdminApiError>;

    async fn update_credentials(
        &self,
        token: &str,
        credentials: &Credentials,
    ) -> Result<(), AdminApiError>;

    async fn upload_photo(
        &self,
        token: &str,
        upload: PhotoUpload,
    ) -> Result<UploadReceipt, AdminApiError>;
}
