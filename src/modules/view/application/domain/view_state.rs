use std::sync::Arc;

use serde::Serialize;

use crate::portfolio::application::domain::PortfolioData;
use crate::view::application::domain::ThemeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "view", content = "theme", rename_all = "snake_case")]
pub enum ViewState {
    Showcase,
    Portfolio(ThemeId),
    Admin,
}

impl ViewState {
    pub fn name(&self) -> &'static str {
        match self {
            ViewState::Showcase => "showcase",
            ViewState::Portfolio(_) => "portfolio",
            ViewState::Admin => "admin",
        }
    }
}

/// Discrete navigation events, applied one at a time.
#[derive(Debug, Clone)]
pub enum ViewAction {
    /// Showcase card picked: show the theme over `data`.
    SelectTheme {
        theme: ThemeId,
        data: Arc<PortfolioData>,
    },
    /// Design panel switch while a theme is already rendered.
    PreviewTheme(ThemeId),
    RequestShowcase,
    RequestAdmin,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    #[error("Cannot {action} while in {state} view")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },
}
