use std::sync::Arc;

use crate::errors::ClientError;
use crate::gateway::ApiGateway;
use crate::models::market::{MarketAsset, PricesResponse};

/// Market overview endpoints.
pub struct OverviewApi {
    gateway: Arc<ApiGateway>,
}

impl OverviewApi {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    /// `GET /crypto-overview/prices`, flattened to the asset list
    /// regardless of which of the two observed response shapes the
    /// backend returns.
    pub async fn get_prices(&self) -> Result<Vec<MarketAsset>, ClientError> {
        let response: PricesResponse = self.gateway.get("/crypto-overview/prices").await?;
        Ok(response.into_assets())
    }
}
