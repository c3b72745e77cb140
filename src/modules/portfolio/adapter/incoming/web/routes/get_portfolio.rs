use actix_web::{get, web, Responder};

use crate::{
    api::schemas::SuccessResponse,
    portfolio::application::ports::incoming::ResolvedPortfolioResponse,
    shared::api::ApiResponse,
    AppState,
};

/// Portfolio data the site is rendering
///
/// Resolved once at startup. `origin` tells whether it came from the API or
/// the bundled dataset.
#[utoipa::path(
    get,
    path = "/api/site/portfolio",
    tag = "site",
    responses(
        (status = 200, description = "Resolved portfolio data", body = inline(SuccessResponse<ResolvedPortfolioResponse>))
    )
)]
#[get("/api/site/portfolio")]
pub async fn get_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(ResolvedPortfolioResponse::from(data.portfolio.as_ref()))
}
