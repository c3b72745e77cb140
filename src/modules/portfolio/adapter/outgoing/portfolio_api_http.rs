use async_trait::async_trait;
use reqwest::Client;

use crate::{
    portfolio::application::{
        domain::PortfolioData,
        ports::outgoing::{PortfolioSource, PortfolioSourceError},
    },
    shared::http::ApiEndpoints,
};

/// reqwest adapter for `GET /api/portfolio`.
#[derive(Debug, Clone)]
pub struct PortfolioApiHttp {
    client: Client,
    endpoints: ApiEndpoints,
}

impl PortfolioApiHttp {
    pub fn new(client: Client, endpoints: ApiEndpoints) -> Self {
        Self { client, endpoints }
    }
}

#[async_trait]
impl PortfolioSource for PortfolioApiHttp {
    async fn fetch_portfolio(&self) -> Result<PortfolioData, PortfolioSourceError> {
        let response = self
            .client
            .get(self.endpoints.portfolio())
            .send()
            .await
            .map_err(|e| PortfolioSourceError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PortfolioSourceError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| PortfolioSourceError::Network(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| PortfolioSourceError::Decode(e.to_string()))
    }
}
