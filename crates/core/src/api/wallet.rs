use std::sync::Arc;

use crate::errors::ClientError;
use crate::gateway::ApiGateway;
use crate::models::auth::MessageResponse;
use crate::models::wallet::{BalanceResponse, StatementResponse};

/// Wallet endpoints.
pub struct WalletApi {
    gateway: Arc<ApiGateway>,
}

impl WalletApi {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    /// `GET /wallet/get-balance`. Rejection is interpreted upstream as
    /// "wallet does not exist yet", not as a hard error.
    pub async fn get_balance(&self) -> Result<BalanceResponse, ClientError> {
        self.gateway.get("/wallet/get-balance").await
    }

    /// `GET /wallet/create-wallet` — requires a validated wallet OTP.
    pub async fn create_wallet(&self) -> Result<MessageResponse, ClientError> {
        self.gateway.get("/wallet/create-wallet").await
    }

    /// `GET /wallet/block-unblock-wallet` — toggles the wallet's blocked state.
    pub async fn block_unblock(&self) -> Result<MessageResponse, ClientError> {
        self.gateway.get("/wallet/block-unblock-wallet").await
    }

    /// `GET /wallet/get-wallet-statement`.
    pub async fn get_statement(&self) -> Result<StatementResponse, ClientError> {
        self.gateway.get("/wallet/get-wallet-statement").await
    }
}
