use async_trait::async_trait;

use crate::portfolio::application::domain::PortfolioData;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortfolioSourceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected status code: {0}")]
    Status(u16),

    #[error("Malformed portfolio body: {0}")]
    Decode(String),
}

/// Remote source of portfolio data.
#[async_trait]
pub trait PortfolioSource: Send + Sync {
    /// One `GET /api/portfolio`. No retry.
    async fn fetch_portfolio(&self) -> Result<PortfolioData, PortfolioSourceError>;
}
