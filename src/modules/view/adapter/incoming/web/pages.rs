use actix_web::HttpResponse;

use crate::admin::adapter::incoming::web::{
    extractors::AdminClient, render_admin_page, AdminTab, DashboardSource,
};
use crate::portfolio::application::domain::PortfolioData;
use crate::shared::web::render;
use crate::view::adapter::incoming::web::templates::{
    CreativeTechPage, DesignPanel, ExecutivePremiumPage, MinimalistCorporatePage,
    ModernPortfolioPage, PhotoHeroPage, ShowcasePage,
};
use crate::view::application::domain::{Location, ThemeId, ViewState};
use crate::AppState;

/// One theme over `data`, with the design panel on top.
pub fn render_theme(theme: ThemeId, data: &PortfolioData) -> HttpResponse {
    let panel = DesignPanel::for_theme(theme);
    match theme {
        ThemeId::MinimalistCorporate => render(MinimalistCorporatePage { p: data, panel }),
        ThemeId::CreativeTech => render(CreativeTechPage { p: data, panel }),
        ThemeId::ExecutivePremium => render(ExecutivePremiumPage { p: data, panel }),
        ThemeId::ModernPortfolio => render(ModernPortfolioPage { p: data, panel }),
        ThemeId::PhotoHero => render(PhotoHeroPage { p: data, panel }),
    }
}

pub fn render_showcase(data: &PortfolioData) -> HttpResponse {
    render(ShowcasePage::new(data))
}

/// Renders whatever the view store resolves for a page load at `location`.
/// Each load that lands on the admin panel fetches the dashboard afresh.
pub async fn render_entry(
    state: &AppState,
    client: &AdminClient,
    location: &Location,
    tab: AdminTab,
) -> HttpResponse {
    // release the store before any admin request goes out
    let (view, data) = {
        let store = state.view_store.read().await;
        (store.resolve_entry(location), store.data())
    };

    match view {
        ViewState::Showcase => render_showcase(&data),
        ViewState::Portfolio(theme) => render_theme(theme, &data),
        ViewState::Admin => {
            render_admin_page(state, client, tab, None, DashboardSource::Reload).await
        }
    }
}
