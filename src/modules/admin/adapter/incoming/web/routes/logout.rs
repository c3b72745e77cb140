use actix_web::{post, web, Responder};
use tracing::warn;

use crate::{
    admin::adapter::incoming::web::{contact_notice, extractors::AdminClient},
    AppState,
};

#[post("/admin/logout")]
pub async fn admin_logout_handler(client: AdminClient, data: web::Data<AppState>) -> impl Responder {
    if data.deployment_mode.is_static() {
        return contact_notice(&data);
    }

    if let Err(e) = data.admin_session.logout(client.session()).await {
        warn!(error = %e, "Logout did not complete cleanly");
    }
    client.see_other_clearing_session("/admin")
}
