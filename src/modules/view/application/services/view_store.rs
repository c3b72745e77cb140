use std::sync::Arc;

use serde::Serialize;
use tracing::debug;
use utoipa::ToSchema;

use crate::portfolio::application::domain::PortfolioData;
use crate::view::application::domain::{Location, ThemeId, ViewAction, ViewError, ViewState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewConfig {
    pub default_theme: ThemeId,
    /// Start on the design showcase instead of the default theme.
    pub showcase_on_start: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            default_theme: ThemeId::default(),
            showcase_on_start: false,
        }
    }
}

/// Serializable picture of the store for `GET /api/site/view`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ViewSnapshot {
    #[schema(value_type = String, example = "portfolio")]
    pub view: &'static str,
    /// Theme being rendered, only set in the portfolio view.
    pub theme: Option<ThemeId>,
    /// Survives a trip to the admin panel, cleared by the showcase.
    pub selected_theme: Option<ThemeId>,
}

/// Owned navigation state. Every change goes through [`ViewStore::dispatch`].
#[derive(Debug, Clone)]
pub struct ViewStore {
    state: ViewState,
    selected_theme: Option<ThemeId>,
    data: Arc<PortfolioData>,
}

impl ViewStore {
    pub fn new(config: ViewConfig, data: Arc<PortfolioData>) -> Self {
        let (state, selected_theme) = if config.showcase_on_start {
            (ViewState::Showcase, None)
        } else {
            (
                ViewState::Portfolio(config.default_theme),
                Some(config.default_theme),
            )
        };

        Self {
            state,
            selected_theme,
            data,
        }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn selected_theme(&self) -> Option<ThemeId> {
        self.selected_theme
    }

    pub fn data(&self) -> Arc<PortfolioData> {
        Arc::clone(&self.data)
    }

    /// Applies one action. On error the store is left untouched.
    pub fn dispatch(&mut self, action: ViewAction) -> Result<ViewState, ViewError> {
        let from = self.state;
        match action {
            ViewAction::SelectTheme { theme, data } => {
                self.data = data;
                self.selected_theme = Some(theme);
                self.state = ViewState::Portfolio(theme);
            }
            ViewAction::PreviewTheme(theme) => {
                if !matches!(self.state, ViewState::Portfolio(_)) {
                    return Err(ViewError::InvalidTransition {
                        action: "preview a theme",
                        state: self.state.name(),
                    });
                }
                self.selected_theme = Some(theme);
                self.state = ViewState::Portfolio(theme);
            }
            ViewAction::RequestShowcase => {
                self.selected_theme = None;
                self.state = ViewState::Showcase;
            }
            ViewAction::RequestAdmin => {
                self.state = ViewState::Admin;
            }
        }

        debug!(from = from.name(), to = self.state.name(), "View transition");
        Ok(self.state)
    }

    /// State to render for a fresh page load at `location`.
    ///
    /// An admin deep link wins over whatever is current. Read-only: the
    /// stored state is not changed.
    pub fn resolve_entry(&self, location: &Location) -> ViewState {
        if location.is_admin_entry() {
            ViewState::Admin
        } else {
            self.state
        }
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            view: self.state.name(),
            theme: match self.state {
                ViewState::Portfolio(theme) => Some(theme),
                _ => None,
            },
            selected_theme: self.selected_theme,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::application::domain::static_portfolio;

    fn store() -> ViewStore {
        ViewStore::new(ViewConfig::default(), Arc::new(static_portfolio()))
    }

    fn other_data() -> Arc<PortfolioData> {
        let mut data = static_portfolio();
        data.personal.name = "Someone Else".to_string();
        Arc::new(data)
    }

    #[test]
    fn test_initial_state_is_default_theme() {
        let store = store();
        assert_eq!(store.state(), ViewState::Portfolio(ThemeId::CreativeTech));
        assert_eq!(store.selected_theme(), Some(ThemeId::CreativeTech));
    }

    #[test]
    fn test_initial_state_can_be_showcase() {
        let config = ViewConfig {
            default_theme: ThemeId::PhotoHero,
            showcase_on_start: true,
        };
        let store = ViewStore::new(config, Arc::new(static_portfolio()));
        assert_eq!(store.state(), ViewState::Showcase);
        assert_eq!(store.selected_theme(), None);
    }

    #[test]
    fn test_select_theme_adopts_data() {
        let mut store = store();
        store.dispatch(ViewAction::RequestShowcase).unwrap();

        let state = store
            .dispatch(ViewAction::SelectTheme {
                theme: ThemeId::ExecutivePremium,
                data: other_data(),
            })
            .unwrap();

        assert_eq!(state, ViewState::Portfolio(ThemeId::ExecutivePremium));
        assert_eq!(store.selected_theme(), Some(ThemeId::ExecutivePremium));
        assert_eq!(store.data().personal.name, "Someone Else");
    }

    #[test]
    fn test_request_showcase_clears_selection() {
        let mut store = store();
        store.dispatch(ViewAction::RequestShowcase).unwrap();

        assert_eq!(store.state(), ViewState::Showcase);
        assert_eq!(store.selected_theme(), None);
    }

    #[test]
    fn test_request_admin_keeps_selection() {
        let mut store = store();
        store.dispatch(ViewAction::PreviewTheme(ThemeId::ModernPortfolio)).unwrap();
        store.dispatch(ViewAction::RequestAdmin).unwrap();

        assert_eq!(store.state(), ViewState::Admin);
        assert_eq!(store.selected_theme(), Some(ThemeId::ModernPortfolio));
    }

    #[test]
    fn test_admin_then_showcase_always_ends_in_showcase() {
        let mut starts = vec![store()];
        for theme in ThemeId::ALL {
            let mut s = store();
            s.dispatch(ViewAction::PreviewTheme(theme)).unwrap();
            starts.push(s);
        }
        let mut from_showcase = store();
        from_showcase.dispatch(ViewAction::RequestShowcase).unwrap();
        starts.push(from_showcase);

        for mut s in starts {
            s.dispatch(ViewAction::RequestAdmin).unwrap();
            s.dispatch(ViewAction::RequestShowcase).unwrap();
            assert_eq!(s.state(), ViewState::Showcase);
            assert_eq!(s.selected_theme(), None);
        }
    }

    #[test]
    fn test_preview_outside_portfolio_is_rejected() {
        let mut store = store();
        store.dispatch(ViewAction::RequestAdmin).unwrap();

        let err = store
            .dispatch(ViewAction::PreviewTheme(ThemeId::PhotoHero))
            .unwrap_err();

        assert_eq!(
            err,
            ViewError::InvalidTransition {
                action: "preview a theme",
                state: "admin",
            }
        );
        assert_eq!(store.state(), ViewState::Admin);
    }

    #[test]
    fn test_resolve_entry_admin_fragment() {
        let store = store();
        assert_eq!(store.resolve_entry(&Location::parse("/#admin")), ViewState::Admin);
        assert_eq!(store.resolve_entry(&Location::new("/admin")), ViewState::Admin);
        assert_eq!(
            store.resolve_entry(&Location::parse("/")),
            ViewState::Portfolio(ThemeId::CreativeTech)
        );
        // entry resolution does not navigate
        assert_eq!(store.state(), ViewState::Portfolio(ThemeId::CreativeTech));
    }

    #[test]
    fn test_snapshot() {
        let mut store = store();
        assert_eq!(
            store.snapshot(),
            ViewSnapshot {
                view: "portfolio",
                theme: Some(ThemeId::CreativeTech),
                selected_theme: Some(ThemeId::CreativeTech),
            }
        );

        store.dispatch(ViewAction::RequestAdmin).unwrap();
        let snapshot = store.snapshot();
        assert_eq!(snapshot.view, "admin");
        assert_eq!(snapshot.theme, None);
        assert_eq!(snapshot.selected_theme, Some(ThemeId::CreativeTech));
    }
}
