use askama::Template;

use crate::admin::adapter::incoming::web::AdminTab;
use crate::admin::application::domain::{ContactMessage, Dashboard};

const WHEN_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

#[derive(Template)]
#[template(path = "admin/notice.html")]
pub struct ContactNoticePage {
    pub name: String,
    pub email: String,
}

#[derive(Template)]
#[template(path = "admin/login.html")]
pub struct LoginPage {
    pub error: String,
    pub in_progress: bool,
}

pub struct SectionRow {
    pub name: String,
    pub views: u64,
}

pub struct ActivityRow {
    pub label: String,
    pub when: String,
}

pub struct MessageRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub body: String,
    pub status: &'static str,
    pub when: String,
    /// Empty when no forward action is left.
    pub action_status: &'static str,
    pub action_label: &'static str,
}

impl From<&ContactMessage> for MessageRow {
    fn from(message: &ContactMessage) -> Self {
        let next = message.status.next();
        Self {
            id: message.id.clone(),
            name: message.name.clone(),
            email: message.email.clone(),
            subject: message.subject.clone(),
            body: message.body.clone(),
            status: message.status.as_str(),
            when: message.timestamp.format(WHEN_FORMAT).to_string(),
            action_status: next.map(|s| s.as_str()).unwrap_or_default(),
            action_label: next.map(|s| s.action_label()).unwrap_or_default(),
        }
    }
}

#[derive(Template)]
#[template(path = "admin/dashboard.html")]
pub struct DashboardPage {
    pub tab: &'static str,
    pub notice: String,
    pub has_analytics: bool,
    pub total_views: u64,
    pub contact_submissions: u64,
    pub downloads: u64,
    pub section_views_total: u64,
    pub sections: Vec<SectionRow>,
    pub activity: Vec<ActivityRow>,
    pub messages: Vec<MessageRow>,
}

impl DashboardPage {
    pub fn new(tab: AdminTab, dashboard: &Dashboard, notice: String) -> Self {
        let analytics = dashboard.analytics.clone().unwrap_or_default();

        Self {
            tab: tab.as_str(),
            notice,
            has_analytics: dashboard.analytics.is_some(),
            total_views: analytics.total_views,
            contact_submissions: analytics.contact_submissions,
            downloads: analytics.downloads,
            section_views_total: analytics.section_views_total(),
            sections: analytics
                .section_views
                .iter()
                .map(|(name, views)| SectionRow {
                    name: name.clone(),
                    views: *views,
                })
                .collect(),
            activity: analytics
                .recent_activity
                .iter()
                .map(|event| ActivityRow {
                    label: event.label(),
                    when: event.timestamp.format(WHEN_FORMAT).to_string(),
                })
                .collect(),
            messages: dashboard.messages.iter().map(MessageRow::from).collect(),
        }
    }
}
