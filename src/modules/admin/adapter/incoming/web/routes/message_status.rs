use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{info, warn};

use crate::{
    admin::{
        adapter::incoming::web::{
            contact_notice, extractors::AdminClient, render_admin_page, AdminTab, DashboardSource,
        },
        application::{domain::MessageStatus, ports::incoming::AdminSessionError},
    },
    shared::{api::ApiResponse, web::see_other},
    AppState,
};

#[derive(Deserialize)]
pub struct StatusForm {
    pub status: String,
}

/// Moves one message forward, then shows the messages tab from the reload
/// that follows the update.
#[post("/admin/messages/{message_id}/status")]
pub async fn set_message_status_handler(
    client: AdminClient,
    path: web::Path<String>,
    form: web::Form<StatusForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    if data.deployment_mode.is_static() {
        return contact_notice(&data);
    }

    let message_id = path.into_inner();
    let status = match form.status.parse::<MessageStatus>() {
        Ok(status) => status,
        Err(e) => return ApiResponse::bad_request("INVALID_STATUS", &e.to_string()),
    };

    let (notice, source) = match data
        .admin_session
        .set_message_status(client.session(), &message_id, status)
        .await
    {
        Ok(load) => {
            info!(
                message_id = %message_id,
                status = %status,
                complete = load.is_complete(),
                "Message status updated"
            );
            (None, DashboardSource::Loaded(load.to_dashboard()))
        }
        Err(AdminSessionError::NotAuthenticated) => return see_other("/admin"),
        Err(e) => {
            warn!(message_id = %message_id, error = %e, "Message status update failed");
            (
                Some(format!("Could not update message: {}", e)),
                DashboardSource::LastLoad,
            )
        }
    };

    render_admin_page(&data, &client, AdminTab::Messages, notice, source).await
}
