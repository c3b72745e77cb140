use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    deployment::application::domain::DeploymentMode,
    portfolio::application::{domain::PortfolioData, ports::outgoing::PortfolioSourceError},
};

/// Which path produced the portfolio data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataOrigin {
    /// Fetched from the portfolio API.
    Remote,
    /// Static-only deployment; no request was made.
    StaticDeployment,
    /// The request failed and the bundled dataset was used instead.
    Fallback(PortfolioSourceError),
}

impl DataOrigin {
    pub fn label(&self) -> &'static str {
        match self {
            DataOrigin::Remote => "remote",
            DataOrigin::StaticDeployment => "static_deployment",
            DataOrigin::Fallback(_) => "fallback",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPortfolio {
    pub data: PortfolioData,
    pub origin: DataOrigin,
}

impl ResolvedPortfolio {
    pub fn is_static_data(&self) -> bool {
        !matches!(self.origin, DataOrigin::Remote)
    }
}

/// JSON view of a resolved portfolio.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ResolvedPortfolioResponse {
    /// `remote`, `static_deployment` or `fallback`
    #[schema(value_type = String, example = "remote")]
    pub origin: &'static str,
    pub data: PortfolioData,
}

impl From<&ResolvedPortfolio> for ResolvedPortfolioResponse {
    fn from(resolved: &ResolvedPortfolio) -> Self {
        Self {
            origin: resolved.origin.label(),
            data: resolved.data.clone(),
        }
    }
}

/// Decides, once per process start, where the portfolio data comes from.
///
/// Never fails: fetch errors are absorbed and reported through
/// [`DataOrigin::Fallback`].
#[async_trait]
pub trait ResolvePortfolioUseCase: Send + Sync {
    async fn execute(&self, mode: DeploymentMode) -> ResolvedPortfolio;
}
