use std::sync::Arc;

use crate::errors::ClientError;
use crate::gateway::ApiGateway;
use crate::models::portfolio::PortfolioResponse;

/// Portfolio endpoints.
pub struct PortfolioApi {
    gateway: Arc<ApiGateway>,
}

impl PortfolioApi {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    /// `GET /crypto-portfolio/get-portfolio` — the full position list.
    /// The result is owned by the requesting view and fully replaced on
    /// every fetch; nothing is cached here.
    pub async fn get_portfolio(&self) -> Result<PortfolioResponse, ClientError> {
        self.gateway.get("/crypto-portfolio/get-portfolio").await
    }
}
