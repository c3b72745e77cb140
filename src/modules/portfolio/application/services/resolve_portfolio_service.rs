use async_trait::async_trait;
use tracing::{info, warn};

use crate::{
    deployment::application::domain::DeploymentMode,
    portfolio::application::{
        domain::static_portfolio,
        ports::{
            incoming::{DataOrigin, ResolvePortfolioUseCase, ResolvedPortfolio},
            outgoing::PortfolioSource,
        },
    },
};

#[derive(Debug, Clone)]
pub struct ResolvePortfolioService<S>
where
    S: PortfolioSource + Send + Sync,
{
    source: S,
}

impl<S> ResolvePortfolioService<S>
where
    S: PortfolioSource + Send + Sync,
{
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

#[async_trait]
impl<S> ResolvePortfolioUseCase for ResolvePortfolioService<S>
where
    S: PortfolioSource + Send + Sync,
{
    async fn execute(&self, mode: DeploymentMode) -> ResolvedPortfolio {
        if mode.is_static() {
            info!("Static-only deployment, serving bundled portfolio data");
            return ResolvedPortfolio {
                data: static_portfolio(),
                origin: DataOrigin::StaticDeployment,
            };
        }

        match self.source.fetch_portfolio().await {
            Ok(data) => {
                info!(projects = data.projects.len(), "Portfolio data fetched from API");
                ResolvedPortfolio {
                    data,
                    origin: DataOrigin::Remote,
                }
            }
            Err(e) => {
                warn!(error = %e, "Portfolio fetch failed, using bundled data");
                ResolvedPortfolio {
                    data: static_portfolio(),
                    origin: DataOrigin::Fallback(e),
                }
            }
        }
    }
}
