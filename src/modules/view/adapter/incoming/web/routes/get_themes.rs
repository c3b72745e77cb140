use actix_web::{get, web, Responder};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    shared::api::ApiResponse,
    view::application::domain::{ThemeId, ThemeInfo, THEME_CATALOG},
};

/// List the five designs
#[utoipa::path(
    get,
    path = "/api/site/themes",
    tag = "site",
    responses(
        (status = 200, description = "Theme catalog in showcase order", body = inline(SuccessResponse<Vec<ThemeInfo>>))
    )
)]
#[get("/api/site/themes")]
pub async fn get_themes_handler() -> impl Responder {
    ApiResponse::success(&THEME_CATALOG[..])
}

/// One design by id (`option1`..`option5`)
#[utoipa::path(
    get,
    path = "/api/site/themes/{theme_id}",
    tag = "site",
    params(("theme_id" = String, Path, description = "Theme id, e.g. option2")),
    responses(
        (status = 200, description = "Theme found", body = inline(SuccessResponse<ThemeInfo>)),
        (status = 404, description = "Unknown theme id", body = ErrorResponse)
    )
)]
#[get("/api/site/themes/{theme_id}")]
pub async fn get_theme_handler(path: web::Path<String>) -> impl Responder {
    match path.parse::<ThemeId>() {
        Ok(theme) => ApiResponse::success(theme.info()),
        Err(e) => ApiResponse::not_found("UNKNOWN_THEME", &e.to_string()),
    }
}
