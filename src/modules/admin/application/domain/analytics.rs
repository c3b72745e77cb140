use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Aggregate counters from `GET /api/analytics/stats`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalyticsSummary {
    pub total_views: u64,
    pub contact_submissions: u64,
    pub downloads: u64,
    #[serde(default)]
    pub section_views: BTreeMap<String, u64>,
    #[serde(default)]
    pub recent_activity: Vec<ActivityEvent>,
}

impl AnalyticsSummary {
    pub fn section_views_total(&self) -> u64 {
        self.section_views.values().sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ActivityEvent {
    #[schema(example = "section_view")]
    pub event_type: String,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(with = "crate::shared::timestamp")]
    #[schema(value_type = String, format = DateTime)]
    pub timestamp: DateTime<Utc>,
}

impl ActivityEvent {
    /// `section_view` + `about` reads as `section view - about`.
    pub fn label(&self) -> String {
        let event = self.event_type.replacen('_', " ", 1);
        match self.section.as_deref().filter(|s| !s.is_empty()) {
            Some(section) => format!("{} - {}", event, section),
            None => event,
        }
    }
}
