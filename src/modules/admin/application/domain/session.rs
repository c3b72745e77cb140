use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::admin::application::domain::{AnalyticsSummary, ContactMessage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Anonymous,
    Authenticating,
    Authenticated,
}

/// Key of one browser's admin session, carried in its session cookie.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// `None` for anything that is not a UUID.
    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw.trim()).ok().map(Self)
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// Whatever the last dashboard load managed to fetch.
///
/// A failed sub-request leaves its part empty; callers cannot tell
/// "no messages" from "messages failed to load".
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct Dashboard {
    pub analytics: Option<AnalyticsSummary>,
    pub messages: Vec<ContactMessage>,
}
