use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::{
    admin::application::{
        domain::{
            Credentials, Dashboard, MessageStatus, PhotoUpload, SessionId, SessionState,
            UploadReceipt,
        },
        ports::{
            incoming::{AdminSessionError, AdminSessionUseCase, DashboardLoad},
            outgoing::{session_token_key, AdminApi, TokenStore},
        },
    },
    deployment::application::domain::DeploymentMode,
};

#[derive(Debug)]
struct SessionInner {
    state: SessionState,
    token: Option<String>,
    dashboard: Option<Dashboard>,
}

impl SessionInner {
    fn authenticated(token: String) -> Self {
        Self {
            state: SessionState::Authenticated,
            token: Some(token),
            dashboard: None,
        }
    }
}

/// Anonymous browsers have no entry.
type Sessions = HashMap<SessionId, SessionInner>;

pub struct AdminSessionService<A, S>
where
    A: AdminApi + Send + Sync,
    S: TokenStore + Send + Sync,
{
    mode: DeploymentMode,
    api: A,
    store: S,
    // Never held across an await.
    sessions: Mutex<Sessions>,
}

impl<A, S> AdminSessionService<A, S>
where
    A: AdminApi + Send + Sync,
    S: TokenStore + Send + Sync,
{
    pub fn new(mode: DeploymentMode, api: A, store: S) -> Self {
        Self {
            mode,
            api,
            store,
            sessions: Mutex::new(Sessions::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Sessions> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn ensure_backend(&self) -> Result<(), AdminSessionError> {
        if self.mode.is_static() {
            return Err(AdminSessionError::StaticDeployment);
        }
        Ok(())
    }

    async fn authenticated_token(&self, session: &SessionId) -> Result<String, AdminSessionError> {
        self.ensure_backend()?;
        self.initialize(session).await;

        let sessions = self.lock();
        match sessions.get(session) {
            Some(SessionInner {
                state: SessionState::Authenticated,
                token: Some(token),
                ..
            }) => Ok(token.clone()),
            _ => Err(AdminSessionError::NotAuthenticated),
        }
    }
}

fn discard_stored_token(store: &dyn TokenStore, session: &SessionId) {
    if let Err(e) = store.remove(&session_token_key(session)) {
        warn!(error = %e, "Could not remove stored admin token");
    }
}

/// Marks a login attempt in flight for one session. Failed, or dropped
/// before completion (the request future was cancelled), it leaves that
/// session anonymous in memory and in storage.
struct LoginAttempt<'a> {
    sessions: &'a Mutex<Sessions>,
    store: &'a dyn TokenStore,
    session: SessionId,
    finished: bool,
}

impl<'a> LoginAttempt<'a> {
    fn begin(
        sessions: &'a Mutex<Sessions>,
        store: &'a dyn TokenStore,
        session: &SessionId,
    ) -> Result<Self, AdminSessionError> {
        let mut guard = sessions.lock().unwrap_or_else(PoisonError::into_inner);
        let entry = guard.entry(session.clone()).or_insert(SessionInner {
            state: SessionState::Anonymous,
            token: None,
            dashboard: None,
        });
        if entry.state == SessionState::Authenticating {
            return Err(AdminSessionError::LoginInProgress);
        }
        entry.state = SessionState::Authenticating;
        Ok(Self {
            sessions,
            store,
            session: session.clone(),
            finished: false,
        })
    }

    fn succeed(mut self, token: String) {
        let mut guard = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        guard.insert(self.session.clone(), SessionInner::authenticated(token));
        self.finished = true;
    }

    fn fail(mut self) {
        self.reset();
        self.finished = true;
    }

    fn reset(&self) {
        self.sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.session);
        discard_stored_token(self.store, &self.session);
    }
}

impl Drop for LoginAttempt<'_> {
    fn drop(&mut self) {
        if !self.finished {
            self.reset();
        }
    }
}

#[async_trait]
impl<A, S> AdminSessionUseCase for AdminSessionService<A, S>
where
    A: AdminApi + Send + Sync,
    S: TokenStore + Send + Sync,
{
    async fn initialize(&self, session: &SessionId) -> SessionState {
        if self.mode.is_static() {
            return SessionState::Anonymous;
        }

        let known = self.lock().get(session).map(|inner| inner.state);
        if let Some(state) = known {
            return state;
        }

        let stored = match self.store.load(&session_token_key(session)) {
            Ok(Some(token)) => token,
            Ok(None) => return SessionState::Anonymous,
            Err(e) => {
                warn!(error = %e, "Could not read stored admin token");
                return SessionState::Anonymous;
            }
        };

        match self.api.verify_token(&stored).await {
            Ok(()) => {
                info!("Stored admin token verified");
                let mut sessions = self.lock();
                let inner = sessions
                    .entry(session.clone())
                    .or_insert_with(|| SessionInner::authenticated(stored));
                inner.state
            }
            Err(e) => {
                info!(reason = %e, "Stored admin token rejected, session is anonymous");
                discard_stored_token(&self.store, session);
                SessionState::Anonymous
            }
        }
    }

    async fn state(&self, session: &SessionId) -> SessionState {
        self.initialize(session).await
    }

    async fn login(&self, session: &SessionId, credentials: Credentials) -> Result<(), AdminSessionError> {
        self.ensure_backend()?;
        let attempt = LoginAttempt::begin(&self.sessions, &self.store, session)?;

        match self.api.login(&credentials).await {
            Ok(token) => {
                if let Err(e) = self.store.save(&session_token_key(session), &token) {
                    warn!(error = %e, "Admin token could not be persisted");
                }
                attempt.succeed(token);
                info!(username = credentials.username(), "Admin logged in");
                Ok(())
            }
            Err(e) => {
                attempt.fail();
                warn!(username = credentials.username(), error = %e, "Admin login failed");
                Err(AdminSessionError::InvalidCredentials)
            }
        }
    }

    async fn logout(&self, session: &SessionId) -> Result<(), AdminSessionError> {
        self.ensure_backend()?;
        discard_stored_token(&self.store, session);
        self.lock().remove(session);
        info!("Admin logged out");
        Ok(())
    }

    async fn load_dashboard(&self, session: &SessionId) -> Result<DashboardLoad, AdminSessionError> {
        let token = self.authenticated_token(session).await?;

        let (analytics, messages) = tokio::join!(
            self.api.analytics_summary(&token),
            self.api.list_messages(&token)
        );

        if let Err(e) = &analytics {
            error!(error = %e, "Failed to load analytics summary");
        }
        if let Err(e) = &messages {
            error!(error = %e, "Failed to load contact messages");
        }

        let load = DashboardLoad {
            analytics,
            messages,
        };

        // a logout or re-login while the requests were in flight wins
        if let Some(inner) = self.lock().get_mut(session) {
            if inner.state == SessionState::Authenticated
                && inner.token.as_deref() == Some(token.as_str())
            {
                inner.dashboard = Some(load.to_dashboard());
            }
        }

        Ok(load)
    }

    async fn dashboard(&self, session: &SessionId) -> Option<Dashboard> {
        self.lock()
            .get(session)
            .and_then(|inner| inner.dashboard.clone())
    }

    async fn set_message_status(
        &self,
        session: &SessionId,
        message_id: &str,
        status: MessageStatus,
    ) -> Result<DashboardLoad, AdminSessionError> {
        let token = self.authenticated_token(session).await?;

        self.api
            .update_message_status(&token, message_id, status)
            .await
            .map_err(|e| {
                error!(message_id, status = status.as_str(), error = %e, "Failed to update message status");
                AdminSessionError::Api(e)
            })?;

        self.load_dashboard(session).await
    }

    async fn update_credentials(
        &self,
        session: &SessionId,
        credentials: Credentials,
    ) -> Result<(), AdminSessionError> {
        let token = self.authenticated_token(session).await?;

        self.api
            .update_credentials(&token, &credentials)
            .await
            .map_err(AdminSessionError::Api)?;

        info!(username = credentials.username(), "Admin credentials updated");
        Ok(())
    }

    async fn upload_photo(
        &self,
        session: &SessionId,
        upload: PhotoUpload,
    ) -> Result<UploadReceipt, AdminSessionError> {
        let token = self.authenticated_token(session).await?;
        let file_name = upload.file_name.clone();

        let receipt = self
            .api
            .upload_photo(&token, upload)
            .await
            .map_err(AdminSessionError::Api)?;

        info!(file_name = %file_name, "Photo uploaded");
        Ok(receipt)
    }
}
