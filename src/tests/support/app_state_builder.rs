use std::sync::Arc;

use actix_web::{cookie::Cookie, web};
use tokio::sync::RwLock;

use crate::admin::adapter::incoming::web::extractors::SESSION_COOKIE;
use crate::admin::adapter::outgoing::MemoryTokenStore;
use crate::admin::application::domain::{Credentials, SessionId};
use crate::admin::application::ports::outgoing::session_token_key;
use crate::admin::application::services::AdminSessionService;
use crate::deployment::application::domain::DeploymentMode;
use crate::portfolio::application::domain::static_portfolio;
use crate::portfolio::application::ports::incoming::{DataOrigin, ResolvedPortfolio};
use crate::tests::support::stubs::StubAdminApi;
use crate::view::application::services::{ViewConfig, ViewStore};
use crate::AppState;

const OWNER_SESSION: &str = "6f1c2a7e0b9d4e58a3c1f2d4b5e6a7c8";

/// The browser session tests log the owner in with.
pub fn owner_session() -> SessionId {
    SessionId::parse(OWNER_SESSION).unwrap()
}

/// Cookie that makes a test request come from the owner's browser.
pub fn owner_cookie() -> Cookie<'static> {
    Cookie::new(SESSION_COOKIE, owner_session().to_string())
}

pub struct TestAppStateBuilder {
    deployment_mode: DeploymentMode,
    portfolio: ResolvedPortfolio,
    view_config: ViewConfig,
    admin_api: StubAdminApi,
    stored_token: Option<String>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            deployment_mode: DeploymentMode::HasBackend,
            portfolio: ResolvedPortfolio {
                data: static_portfolio(),
                origin: DataOrigin::Remote,
            },
            view_config: ViewConfig::default(),
            admin_api: StubAdminApi::default(),
            stored_token: None,
        }
    }
}

impl TestAppStateBuilder {
    /// Static-only deployment serving the bundled data.
    pub fn static_only() -> Self {
        Self {
            deployment_mode: DeploymentMode::StaticOnly,
            portfolio: ResolvedPortfolio {
                data: static_portfolio(),
                origin: DataOrigin::StaticDeployment,
            },
            ..Self::default()
        }
    }

    pub fn with_portfolio(mut self, portfolio: ResolvedPortfolio) -> Self {
        self.portfolio = portfolio;
        self
    }

    pub fn with_view_config(mut self, config: ViewConfig) -> Self {
        self.view_config = config;
        self
    }

    /// Backs the real admin session service with `api`.
    pub fn with_admin_api(mut self, api: StubAdminApi) -> Self {
        self.admin_api = api;
        self
    }

    /// Token left in storage for the owner's session by an earlier run.
    pub fn with_stored_token(mut self, token: &str) -> Self {
        self.stored_token = Some(token.to_string());
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let store = match &self.stored_token {
            Some(token) => MemoryTokenStore::with_entry(&session_token_key(&owner_session()), token),
            None => MemoryTokenStore::default(),
        };
        let admin_session = Arc::new(AdminSessionService::new(
            self.deployment_mode,
            self.admin_api,
            store,
        ));

        let portfolio = Arc::new(self.portfolio);
        let view_store = ViewStore::new(self.view_config, Arc::new(portfolio.data.clone()));

        web::Data::new(AppState {
            deployment_mode: self.deployment_mode,
            portfolio,
            view_store: Arc::new(RwLock::new(view_store)),
            admin_session,
        })
    }

    /// Builds the state and logs the owner's session in with the stub's
    /// accepted credentials. Requests carrying [`owner_cookie`] act as owner.
    pub async fn build_authenticated(self) -> web::Data<AppState> {
        let state = self.build();
        let credentials = Credentials::new("admin".to_string(), "admin123".to_string()).unwrap();
        state
            .admin_session
            .login(&owner_session(), credentials)
            .await
            .unwrap();
        state
    }
}
