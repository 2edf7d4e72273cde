use serde::Deserialize;

/// Point-in-time snapshot of one market asset, as returned by the backend
/// overview endpoint or by CoinGecko directly. Never persisted.
///
/// Numeric fields may be absent and must degrade gracefully — they decode
/// to `None` rather than failing the whole response. Field name aliases
/// cover both the snake_case (CoinGecko) and camelCase (backend DTO)
/// spellings seen on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketAsset {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub symbol: Option<String>,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default, alias = "currentPrice")]
    pub current_price: Option<f64>,

    #[serde(default, alias = "priceChangePercentage24h")]
    pub price_change_percentage_24h: Option<f64>,

    #[serde(default, alias = "marketCap")]
    pub market_cap: Option<f64>,

    #[serde(default, alias = "totalVolume")]
    pub total_volume: Option<f64>,

    #[serde(default, alias = "circulatingSupply")]
    pub circulating_supply: Option<f64>,

    #[serde(default, alias = "marketCapRank")]
    pub market_cap_rank: Option<u32>,
}

/// Response of `GET /crypto-overview/prices`.
///
/// The backend has been observed returning either a bare array or an
/// object wrapping the array; both decode here.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PricesResponse {
    List(Vec<MarketAsset>),
    Wrapped {
        #[serde(alias = "cryptoTableDTOS", alias = "cryptoTableDTOs")]
        crypto_table_dtos: Vec<MarketAsset>,
    },
}

impl PricesResponse {
    /// Flatten either shape into the asset list.
    #[must_use]
    pub fn into_assets(self) -> Vec<MarketAsset> {
        match self {
            PricesResponse::List(assets) => assets,
            PricesResponse::Wrapped { crypto_table_dtos } => crypto_table_dtos,
        }
    }
}

/// One entry of CoinGecko's `/coins/list`: id plus display name/symbol.
#[derive(Debug, Clone, Deserialize)]
pub struct CoinListEntry {
    pub id: String,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// One point of a historical price series (chart data).
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub price: f64,
}
