use actix_web::{get, web, Responder};

use crate::{
    api::schemas::SuccessResponse, shared::api::ApiResponse,
    view::application::services::ViewSnapshot, AppState,
};

/// Current view state
#[utoipa::path(
    get,
    path = "/api/site/view",
    tag = "site",
    responses(
        (status = 200, description = "View the site is currently on", body = inline(SuccessResponse<ViewSnapshot>))
    )
)]
#[get("/api/site/view")]
pub async fn get_view_handler(data: web::Data<AppState>) -> impl Responder {
    let snapshot = data.view_store.read().await.snapshot();
    ApiResponse::success(snapshot)
}
