use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use maplit::btreemap;
use tokio::sync::Notify;

use crate::admin::application::{
    domain::{
        ActivityEvent, AnalyticsSummary, ContactMessage, Credentials, MessageStatus, PhotoUpload,
        UploadReceipt,
    },
    ports::outgoing::{AdminApi, AdminApiError},
};

pub const STUB_TOKEN: &str = "stub-token";

pub fn sample_messages() -> Vec<ContactMessage> {
    vec![
        ContactMessage {
            id: "msg-1".to_string(),
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            subject: "Consulting enquiry".to_string(),
            body: "Would you be available next quarter?".to_string(),
            status: MessageStatus::Unread,
            timestamp: Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap(),
        },
        ContactMessage {
            id: "msg-2".to_string(),
            name: "John Roe".to_string(),
            email: "john@example.com".to_string(),
            subject: "Speaking invitation".to_string(),
            body: "We would love to have you at our meetup.".to_string(),
            status: MessageStatus::Read,
            timestamp: Utc.with_ymd_and_hms(2025, 2, 20, 16, 5, 0).unwrap(),
        },
    ]
}

pub fn sample_analytics() -> AnalyticsSummary {
    AnalyticsSummary {
        total_views: 128,
        contact_submissions: 2,
        downloads: 5,
        section_views: btreemap! {
            "about".to_string() => 12,
            "projects".to_string() => 30,
        },
        recent_activity: vec![ActivityEvent {
            event_type: "section_view".to_string(),
            section: Some("projects".to_string()),
            timestamp: Utc.with_ymd_and_hms(2025, 3, 2, 8, 0, 0).unwrap(),
        }],
    }
}

/// Per-endpoint request counts seen by [`StubAdminApi`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StubCalls {
    pub login: usize,
    pub verify: usize,
    pub analytics: usize,
    pub messages: usize,
    pub update_status: usize,
    pub update_credentials: usize,
    pub upload: usize,
}

impl StubCalls {
    pub fn total(&self) -> usize {
        self.login
            + self.verify
            + self.analytics
            + self.messages
            + self.update_status
            + self.update_credentials
            + self.upload
    }
}

struct StubAdminApiInner {
    calls: Mutex<StubCalls>,
    accepts_login: bool,
    login_gate: Option<Arc<Notify>>,
    analytics_fails: bool,
    messages: Mutex<Vec<ContactMessage>>,
}

/// In-memory admin API: accepts `admin`/`admin123`, issues [`STUB_TOKEN`]
/// and keeps message status updates so reloads see them.
#[derive(Clone)]
pub struct StubAdminApi {
    inner: Arc<StubAdminApiInner>,
}

impl Default for StubAdminApi {
    fn default() -> Self {
        Self::build(true, None, false)
    }
}

impl StubAdminApi {
    fn build(accepts_login: bool, login_gate: Option<Arc<Notify>>, analytics_fails: bool) -> Self {
        Self {
            inner: Arc::new(StubAdminApiInner {
                calls: Mutex::new(StubCalls::default()),
                accepts_login,
                login_gate,
                analytics_fails,
                messages: Mutex::new(sample_messages()),
            }),
        }
    }

    pub fn rejecting_login() -> Self {
        Self::build(false, None, false)
    }

    /// Login blocks until [`StubAdminApi::login_gate`] is notified.
    pub fn gated_login() -> Self {
        Self::build(true, Some(Arc::new(Notify::new())), false)
    }

    pub fn failing_analytics() -> Self {
        Self::build(true, None, true)
    }

    pub fn login_gate(&self) -> Arc<Notify> {
        self.inner
            .login_gate
            .clone()
            .expect("stub was not built with gated_login")
    }

    pub fn calls(&self) -> StubCalls {
        self.inner.calls.lock().unwrap().clone()
    }

    pub async fn wait_for_login_calls(&self, expected: usize) {
        while self.calls().login < expected {
            tokio::task::yield_now().await;
        }
    }

    fn record(&self, bump: impl FnOnce(&mut StubCalls)) {
        bump(&mut self.inner.calls.lock().unwrap());
    }

    fn check_token(token: &str) -> Result<(), AdminApiError> {
        if token == STUB_TOKEN {
            Ok(())
        } else {
            Err(AdminApiError::Unauthorized)
        }
    }
}

#[async_trait]
impl AdminApi for StubAdminApi {
    async fn login(&self, credentials: &Credentials) -> Result<String, AdminApiError> {
        self.record(|c| c.login += 1);
        if let Some(gate) = &self.inner.login_gate {
            gate.notified().await;
        }

        if self.inner.accepts_login
            && credentials.username() == "admin"
            && credentials.password() == "admin123"
        {
            Ok(STUB_TOKEN.to_string())
        } else {
            Err(AdminApiError::Unauthorized)
        }
    }

    async fn verify_token(&self, token: &str) -> Result<(), AdminApiError> {
        self.record(|c| c.verify += 1);
        Self::check_token(token)
    }

    async fn analytics_summary(&self, token: &str) -> Result<AnalyticsSummary, AdminApiError> {
        self.record(|c| c.analytics += 1);
        Self::check_token(token)?;
        if self.inner.analytics_fails {
            return Err(AdminApiError::Status(500));
        }
        Ok(sample_analytics())
    }

    async fn list_messages(&self, token: &str) -> Result<Vec<ContactMessage>, AdminApiError> {
        self.record(|c| c.messages += 1);
        Self::check_token(token)?;
        Ok(self.inner.messages.lock().unwrap().clone())
    }

    async fn update_message_status(
        &self,
        token: &str,
        message_id: &str,
        status: MessageStatus,
    ) -> Result<(), AdminApiError> {
        self.record(|c| c.update_status += 1);
        Self::check_token(token)?;
        let mut messages = self.inner.messages.lock().unwrap();
        let message = messages
            .iter_mut()
            .find(|m| m.id == message_id)
            .ok_or(AdminApiError::Status(404))?;
        message.status = status;
        Ok(())
    }

    async fn update_credentials(
        &self,
        token: &str,
        _credentials: &Credentials,
    ) -> Result<(), AdminApiError> {
        self.record(|c| c.update_credentials += 1);
        Self::check_token(token)
    }

    async fn upload_photo(
        &self,
        token: &str,
        upload: PhotoUpload,
    ) -> Result<UploadReceipt, AdminApiError> {
        self.record(|c| c.upload += 1);
        Self::check_token(token)?;
        Ok(UploadReceipt {
            message: Some("Photo uploaded successfully".to_string()),
            filename: Some(upload.file_name),
            url: None,
        })
    }
}
