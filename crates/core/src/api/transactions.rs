use std::sync::Arc;

use crate::errors::ClientError;
use crate::gateway::ApiGateway;
use crate::models::auth::{AddMoneyRequest, BuyRequest, SellRequest};
use crate::models::wallet::BalanceResponse;

/// Balance-affecting endpoints. Each returns the post-operation balance.
///
/// These are not atomic with respect to each other from the client's
/// perspective; ordering of concurrent mutations is the backend's
/// responsibility.
pub struct TransactionApi {
    gateway: Arc<ApiGateway>,
}

impl TransactionApi {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    /// `POST /transaction/add-money`.
    pub async fn add_money(&self, money_to_add: f64) -> Result<BalanceResponse, ClientError> {
        let body = AddMoneyRequest { money_to_add };
        self.gateway.post("/transaction/add-money", &body).await
    }

    /// `POST /transaction/buy-crypto` — market buy by invested amount.
    pub async fn buy_crypto(
        &self,
        crypto_id: &str,
        amount_invested: f64,
    ) -> Result<BalanceResponse, ClientError> {
        let body = BuyRequest {
            crypto_id: crypto_id.to_string(),
            amount_invested,
        };
        self.gateway.post("/transaction/buy-crypto", &body).await
    }

    /// `POST /transaction/sell-crypto` — sells one held position by order id.
    pub async fn sell_crypto(
        &self,
        crypto_id: &str,
        crypto_order_id: i64,
    ) -> Result<BalanceResponse, ClientError> {
        let body = SellRequest {
            crypto_id: crypto_id.to_string(),
            crypto_order_id,
        };
        self.gateway.post("/transaction/sell-crypto", &body).await
    }
}
