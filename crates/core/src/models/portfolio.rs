use serde::{Deserialize, Serialize};

/// One held (or partially held) purchase of a crypto asset, as returned
/// by the backend. `profit_loss` is computed server-side
/// (`current_value - amount_invested`); the client never recomputes it,
/// only derives percentages from it.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    #[serde(default)]
    pub crypto_id: String,

    #[serde(default)]
    pub crypto_name: String,

    #[serde(default)]
    pub crypto_symbol: Option<String>,

    /// Quantity of the asset acquired by this order.
    #[serde(default)]
    pub crypto_brought_quantity: f64,

    /// Market price of the asset at purchase time.
    #[serde(default)]
    pub crypto_brought_market_price: f64,

    #[serde(default)]
    pub amount_invested: f64,

    #[serde(default)]
    pub current_value: f64,

    #[serde(default)]
    pub profit_loss: f64,

    /// Backend order identifier, needed to sell this position.
    #[serde(default)]
    pub order_id: Option<i64>,
}

/// Response of `GET /crypto-portfolio/get-portfolio`: one entry per
/// completed buy order not yet fully sold. Fully replaced on every fetch,
/// never cached.
#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioResponse {
    #[serde(default)]
    pub portfolios: Vec<Position>,
}
