use async_trait::async_trait;

use crate::admin::application::{
    domain::{
        AnalyticsSummary, ContactMessage, Credentials, Dashboard, MessageStatus, PhotoUpload,
        SessionId, SessionState, UploadReceipt,
    },
    ports::outgoing::{AdminApiError, TokenStoreError},
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdminSessionError {
    #[error("Admin features are unavailable in a static deployment")]
    StaticDeployment,

    #[error("A login attempt is already in progress")]
    LoginInProgress,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Admin API error: {0}")]
    Api(#[from] AdminApiError),

    #[error("Token storage error: {0}")]
    Storage(#[from] TokenStoreError),
}

/// Outcome of the two parallel dashboard requests, each kept separately.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardLoad {
    pub analytics: Result<AnalyticsSummary, AdminApiError>,
    pub messages: Result<Vec<ContactMessage>, AdminApiError>,
}

impl DashboardLoad {
    pub fn is_complete(&self) -> bool {
        self.analytics.is_ok() && self.messages.is_ok()
    }

    /// What the panel shows: successes kept, failures left empty.
    pub fn to_dashboard(&self) -> Dashboard {
        Dashboard {
            analytics: self.analytics.as_ref().ok().cloned(),
            messages: self.messages.as_ref().ok().cloned().unwrap_or_default(),
        }
    }
}

/// The site owner's sessions against the admin endpoints, one per browser.
///
/// Every operation is scoped to the [`SessionId`] from the caller's cookie;
/// one browser's login never authenticates another. In a static-only
/// deployment every operation short-circuits with
/// [`AdminSessionError::StaticDeployment`] and no request is made.
#[async_trait]
pub trait AdminSessionUseCase: Send + Sync {
    /// First sight of `session` since startup: silently verifies the token
    /// stored for it, if any. Known sessions are answered from memory.
    async fn initialize(&self, session: &SessionId) -> SessionState;

    async fn state(&self, session: &SessionId) -> SessionState;

    async fn login(&self, session: &SessionId, credentials: Credentials) -> Result<(), AdminSessionError>;

    async fn logout(&self, session: &SessionId) -> Result<(), AdminSessionError>;

    async fn load_dashboard(&self, session: &SessionId) -> Result<DashboardLoad, AdminSessionError>;

    /// Result of the session's most recent dashboard load, if any.
    async fn dashboard(&self, session: &SessionId) -> Option<Dashboard>;

    /// One update request, then one full dashboard reload.
    async fn set_message_status(
        &self,
        session: &SessionId,
        message_id: &str,
        status: MessageStatus,
    ) -> Result<DashboardLoad, AdminSessionError>;

    async fn update_credentials(
        &self,
        session: &SessionId,
        credentials: Credentials,
    ) -> Result<(), AdminSessionError>;

    async fn upload_photo(
        &self,
        session: &SessionId,
        upload: PhotoUpload,
    ) -> Result<UploadReceipt, AdminSessionError>;
}
