use askama::Template;

use crate::portfolio::application::domain::PortfolioData;
use crate::view::application::domain::{ThemeId, THEME_CATALOG};

pub struct PanelOption {
    pub id: &'static str,
    pub name: &'static str,
    pub active: bool,
}

/// Floating theme switcher rendered on top of every theme.
pub struct DesignPanel {
    pub options: Vec<PanelOption>,
}

impl DesignPanel {
    pub fn for_theme(current: ThemeId) -> Self {
        Self {
            options: THEME_CATALOG
                .iter()
                .map(|info| PanelOption {
                    id: info.id.as_str(),
                    name: info.name,
                    active: info.id == current,
                })
                .collect(),
        }
    }
}

pub struct ShowcaseCard {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Template)]
#[template(path = "view/showcase.html")]
pub struct ShowcasePage {
    pub owner: String,
    pub cards: Vec<ShowcaseCard>,
}

impl ShowcasePage {
    pub fn new(data: &PortfolioData) -> Self {
        Self {
            owner: data.personal.name.clone(),
            cards: THEME_CATALOG
                .iter()
                .map(|info| ShowcaseCard {
                    id: info.id.as_str(),
                    name: info.name,
                    description: info.description,
                    features: info.features,
                })
                .collect(),
        }
    }
}

#[derive(Template)]
#[template(path = "view/minimalist_corporate.html")]
pub struct MinimalistCorporatePage<'a> {
    pub p: &'a PortfolioData,
    pub panel: DesignPanel,
}

#[derive(Template)]
#[template(path = "view/creative_tech.html")]
pub struct CreativeTechPage<'a> {
    pub p: &'a PortfolioData,
    pub panel: DesignPanel,
}

#[derive(Template)]
#[template(path = "view/executive_premium.html")]
pub struct ExecutivePremiumPage<'a> {
    pub p: &'a PortfolioData,
    pub panel: DesignPanel,
}

#[derive(Template)]
#[template(path = "view/modern_portfolio.html")]
pub struct ModernPortfolioPage<'a> {
    pub p: &'a PortfolioData,
    pub panel: DesignPanel,
}

#[derive(Template)]
#[template(path = "view/photo_hero.html")]
pub struct PhotoHeroPage<'a> {
    pub p: &'a PortfolioData,
    pub panel: DesignPanel,
}
