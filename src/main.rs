pub mod modules;
pub use modules::{admin, deployment, portfolio, view};
mod api;
pub mod health;
mod shared;

use crate::admin::adapter::outgoing::{AdminApiHttp, FileTokenStore};
use crate::admin::application::ports::incoming::AdminSessionUseCase;
use crate::admin::application::services::AdminSessionService;
use crate::api::openapi::ApiDoc;
use crate::deployment::application::domain::DeploymentMode;
use crate::deployment::application::services::detect_deployment_mode;
use crate::portfolio::adapter::outgoing::PortfolioApiHttp;
use crate::portfolio::application::ports::incoming::{ResolvePortfolioUseCase, ResolvedPortfolio};
use crate::portfolio::application::services::ResolvePortfolioService;
use crate::shared::api::{custom_form_config, photo_payload_config};
use crate::shared::config::{load_env_files, SiteConfig};
use crate::shared::http::{build_http_client, ApiEndpoints};
use crate::view::application::services::ViewStore;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use tokio::sync::RwLock;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub deployment_mode: DeploymentMode,
    /// Resolved once at startup, never refetched.
    pub portfolio: Arc<ResolvedPortfolio>,
    pub view_store: Arc<RwLock<ViewStore>>,
    pub admin_session: Arc<dyn AdminSessionUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    load_env_files();
    let config = SiteConfig::from_env().context("Invalid site configuration")?;

    let deployment_mode = detect_deployment_mode(&config.deployment_inputs());
    info!(
        mode = deployment_mode.as_str(),
        rust_env = %config.rust_env,
        "Deployment mode detected"
    );

    let client = build_http_client().context("Failed to build HTTP client")?;
    let endpoints = ApiEndpoints::new(config.backend_url.as_deref().unwrap_or_default());

    // Portfolio data
    let resolver =
        ResolvePortfolioService::new(PortfolioApiHttp::new(client.clone(), endpoints.clone()));
    let portfolio = Arc::new(resolver.execute(deployment_mode).await);
    info!(origin = portfolio.origin.label(), "Portfolio data resolved");

    // View state
    let view_store = ViewStore::new(config.view_config(), Arc::new(portfolio.data.clone()));

    // Admin sessions, one per browser, restored from storage on first sight
    let admin_session = AdminSessionService::new(
        deployment_mode,
        AdminApiHttp::new(client, endpoints),
        FileTokenStore::new(config.token_store_path.clone()),
    );

    let state = AppState {
        deployment_mode,
        portfolio,
        view_store: Arc::new(RwLock::new(view_store)),
        admin_session: Arc::new(admin_session),
    };

    let server_url = config.bind_address();
    info!("Server run on: {}", server_url);

    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_form_config())
            .app_data(photo_payload_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {}", server_url))?
    .run()
    .await
    .context("Server stopped with an error")
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Pages
    cfg.service(crate::view::adapter::incoming::web::routes::index_handler);
    cfg.service(crate::view::adapter::incoming::web::routes::admin_entry_handler);
    // View navigation
    cfg.service(crate::view::adapter::incoming::web::routes::select_theme_handler);
    cfg.service(crate::view::adapter::incoming::web::routes::preview_theme_handler);
    cfg.service(crate::view::adapter::incoming::web::routes::request_showcase_handler);
    cfg.service(crate::view::adapter::incoming::web::routes::request_admin_handler);
    // Site JSON
    cfg.service(crate::view::adapter::incoming::web::routes::get_view_handler);
    cfg.service(crate::view::adapter::incoming::web::routes::get_themes_handler);
    cfg.service(crate::view::adapter::incoming::web::routes::get_theme_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_portfolio_handler);
    // Admin
    cfg.service(crate::admin::adapter::incoming::web::routes::admin_login_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::admin_logout_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::set_message_status_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::update_credentials_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::upload_photo_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
