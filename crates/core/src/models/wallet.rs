use serde::Deserialize;

/// Response carrying a wallet balance. `balance` is deliberately optional:
/// `None` signals "wallet does not exist yet" and gates the UI into a
/// creation flow rather than a funding flow.
#[derive(Debug, Clone, Deserialize)]
pub struct BalanceResponse {
    #[serde(default)]
    pub balance: Option<f64>,
}

/// Response of `GET /wallet/get-wallet-statement`. Statement entries are
/// rendered as-is; the client does not interpret their fields.
#[derive(Debug, Clone, Deserialize)]
pub struct StatementResponse {
    #[serde(default)]
    pub statements: Vec<serde_json::Value>,
}
