use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::OpenApi;

use crate::admin::application::domain::UploadReceipt;
use crate::portfolio::application::domain::{
    AboutInfo, Experience, PersonalInfo, PortfolioData, Project, SkillCategory,
};
use crate::portfolio::application::ports::incoming::ResolvedPortfolioResponse;
use crate::view::application::domain::{ThemeId, ThemeInfo};
use crate::view::application::services::ViewSnapshot;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Site API",
        version = "1.0.0",
        description = "JSON surface of the portfolio site host: view state, theme catalog, resolved data and photo upload"
    ),
    paths(
        // Site endpoints
        crate::view::adapter::incoming::web::routes::get_view_handler,
        crate::view::adapter::incoming::web::routes::get_themes_handler,
        crate::view::adapter::incoming::web::routes::get_theme_handler,
        crate::portfolio::adapter::incoming::web::routes::get_portfolio_handler,

        // Admin endpoints
        crate::admin::adapter::incoming::web::routes::upload_photo_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<ViewSnapshot>,
            ErrorResponse,
            ErrorDetail,

            // Site DTOs
            ViewSnapshot,
            ThemeId,
            ThemeInfo,
            ResolvedPortfolioResponse,
            PortfolioData,
            PersonalInfo,
            AboutInfo,
            SkillCategory,
            Experience,
            Project,

            // Admin DTOs
            UploadReceipt
        )
    ),
    tags(
        (name = "site", description = "View state, themes and portfolio data"),
        (name = "admin", description = "Admin operations forwarded to the portfolio API"),
    )
)]
pub struct ApiDoc;
