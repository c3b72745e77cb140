use actix_web::HttpResponse;

use crate::admin::adapter::incoming::web::extractors::AdminClient;
use crate::admin::adapter::incoming::web::templates::{ContactNoticePage, DashboardPage, LoginPage};
use crate::admin::application::domain::{Dashboard, SessionState};
use crate::shared::web::render;
use crate::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Dashboard,
    Messages,
    Analytics,
}

impl AdminTab {
    /// Unknown or missing values fall back to the dashboard tab.
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("messages") => AdminTab::Messages,
            Some("analytics") => AdminTab::Analytics,
            _ => AdminTab::Dashboard,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AdminTab::Dashboard => "dashboard",
            AdminTab::Messages => "messages",
            AdminTab::Analytics => "analytics",
        }
    }
}

/// Static deployments get this instead of any admin UI.
pub fn contact_notice(state: &AppState) -> HttpResponse {
    let personal = &state.portfolio.data.personal;
    render(ContactNoticePage {
        name: personal.name.clone(),
        email: personal.email.clone(),
    })
}

/// Where the dashboard on an authenticated admin page comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardSource {
    /// Fetch analytics and messages again, as every visit to the panel does.
    Reload,
    /// The session's last load, without a request. Empty if there was none.
    LastLoad,
    /// A load the caller has just made.
    Loaded(Dashboard),
}

/// Login form, dashboard or the static notice, depending on mode and on the
/// requesting browser's session.
pub async fn render_admin_page(
    state: &AppState,
    client: &AdminClient,
    tab: AdminTab,
    notice: Option<String>,
    source: DashboardSource,
) -> HttpResponse {
    if state.deployment_mode.is_static() {
        return contact_notice(state);
    }

    let session = client.session();
    let notice = notice.unwrap_or_default();
    match state.admin_session.state(session).await {
        SessionState::Authenticated => {
            let dashboard = match source {
                DashboardSource::Loaded(dashboard) => dashboard,
                DashboardSource::LastLoad => state
                    .admin_session
                    .dashboard(session)
                    .await
                    .unwrap_or_default(),
                DashboardSource::Reload => state
                    .admin_session
                    .load_dashboard(session)
                    .await
                    .map(|load| load.to_dashboard())
                    .unwrap_or_default(),
            };
            render(DashboardPage::new(tab, &dashboard, notice))
        }
        session_state => render(LoginPage {
            error: notice,
            in_progress: session_state == SessionState::Authenticating,
        }),
    }
}
