use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::warn;

use crate::{
    admin::{
        adapter::incoming::web::{
            contact_notice, extractors::AdminClient, render_admin_page, AdminTab, DashboardSource,
        },
        application::{domain::Credentials, ports::incoming::AdminSessionError},
    },
    shared::web::see_other,
    AppState,
};

#[derive(Deserialize)]
pub struct CredentialsForm {
    pub username: String,
    pub password: String,
}

/// Replaces the admin username/password on the backend.
#[post("/admin/credentials")]
pub async fn update_credentials_handler(
    client: AdminClient,
    form: web::Form<CredentialsForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    if data.deployment_mode.is_static() {
        return contact_notice(&data);
    }

    let form = form.into_inner();
    let notice = match Credentials::new(form.username, form.password) {
        Ok(credentials) => match data
            .admin_session
            .update_credentials(client.session(), credentials)
            .await
        {
            Ok(()) => "Credentials updated".to_string(),
            Err(AdminSessionError::NotAuthenticated) => return see_other("/admin"),
            Err(e) => {
                warn!(error = %e, "Credential update failed");
                format!("Could not update credentials: {}", e)
            }
        },
        Err(e) => e.to_string(),
    };
    render_admin_page(
        &data,
        &client,
        AdminTab::Dashboard,
        Some(notice),
        DashboardSource::LastLoad,
    )
    .await
}
