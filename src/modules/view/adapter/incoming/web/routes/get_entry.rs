use actix_web::{get, web, HttpRequest, Responder};
use serde::Deserialize;

use crate::{
    admin::adapter::incoming::web::{extractors::AdminClient, AdminTab},
    view::{adapter::incoming::web::render_entry, application::domain::Location},
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct EntryQuery {
    /// Admin panel tab: `dashboard`, `messages` or `analytics`.
    pub tab: Option<String>,
}

async fn entry(req: &HttpRequest, query: EntryQuery, data: &AppState) -> impl Responder {
    let location = Location::new(req.path());
    let client = AdminClient::from_request_cookie(req);
    render_entry(
        data,
        &client,
        &location,
        AdminTab::from_query(query.tab.as_deref()),
    )
    .await
}

#[get("/")]
pub async fn index_handler(
    req: HttpRequest,
    query: web::Query<EntryQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    entry(&req, query.into_inner(), &data).await
}

/// Server-side spelling of the `#admin` deep link.
#[get("/admin")]
pub async fn admin_entry_handler(
    req: HttpRequest,
    query: web::Query<EntryQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    entry(&req, query.into_inner(), &data).await
}
