use std::sync::Arc;

use actix_web::{post, web, HttpResponse, Responder};
use tracing::warn;

use crate::{
    shared::{api::ApiResponse, web::see_other},
    view::application::domain::{ThemeId, ViewAction, ViewError},
    AppState,
};

async fn apply(data: &AppState, action: ViewAction, next: &str) -> HttpResponse {
    let result = data.view_store.write().await.dispatch(action);
    match result {
        Ok(_) => see_other(next),
        Err(e) => view_error_response(e),
    }
}

fn view_error_response(e: ViewError) -> HttpResponse {
    match e {
        ViewError::UnknownTheme(_) => ApiResponse::not_found("UNKNOWN_THEME", &e.to_string()),
        ViewError::InvalidTransition { .. } => {
            warn!(error = %e, "Rejected view transition");
            ApiResponse::conflict("INVALID_TRANSITION", &e.to_string())
        }
    }
}

/// Showcase card: open a theme over the resolved portfolio data.
#[post("/view/theme/{theme_id}")]
pub async fn select_theme_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let theme = match path.parse::<ThemeId>() {
        Ok(theme) => theme,
        Err(e) => return view_error_response(e),
    };

    let action = ViewAction::SelectTheme {
        theme,
        data: Arc::new(data.portfolio.data.clone()),
    };
    apply(&data, action, "/").await
}

/// Design panel: switch themes while one is on screen.
#[post("/view/preview/{theme_id}")]
pub async fn preview_theme_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match path.parse::<ThemeId>() {
        Ok(theme) => apply(&data, ViewAction::PreviewTheme(theme), "/").await,
        Err(e) => view_error_response(e),
    }
}

#[post("/view/showcase")]
pub async fn request_showcase_handler(data: web::Data<AppState>) -> impl Responder {
    apply(&data, ViewAction::RequestShowcase, "/").await
}

#[post("/view/admin")]
pub async fn request_admin_handler(data: web::Data<AppState>) -> impl Responder {
    apply(&data, ViewAction::RequestAdmin, "/admin").await
}
