use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::traits::{ChartInterval, MarketDataProvider};
use crate::errors::ClientError;
use crate::models::market::{ChartPoint, CoinListEntry, MarketAsset};

const BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// CoinGecko API provider for public cryptocurrency market data.
///
/// - **Free**: no API key required on the public tier.
/// - **Endpoints**: `/coins/markets`, `/coins/{id}/market_chart`,
///   `/coins/list`, `/simple/price`
///
/// CoinGecko uses lowercase ids like "bitcoin", "ethereum"; the same ids
/// the trading backend expects for buy orders.
pub struct CoinGeckoProvider {
    client: Client,
}

impl CoinGeckoProvider {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { client }
    }
}

impl Default for CoinGeckoProvider {
    fn default() -> Self {
        Self::new()
    }
}

// ── CoinGecko API response types ────────────────────────────────────

#[derive(Deserialize)]
struct MarketChartResponse {
    /// Pairs of (unix timestamp in milliseconds, price).
    prices: Vec<(i64, f64)>,
}

/// `/simple/price` nests rates as `{coin_id: {currency: rate}}`.
type SimplePriceResponse = HashMap<String, HashMap<String, f64>>;

#[async_trait]
impl MarketDataProvider for CoinGeckoProvider {
    fn name(&self) -> &str {
        "CoinGecko"
    }

    async fn top_markets(
        &self,
        vs_currency: &str,
        per_page: u32,
    ) -> Result<Vec<MarketAsset>, ClientError> {
        let url = format!("{BASE_URL}/coins/markets");
        let per_page = per_page.to_string();
        let assets: Vec<MarketAsset> = self
            .client
            .get(&url)
            .query(&[
                ("vs_currency", vs_currency),
                ("order", "market_cap_desc"),
                ("per_page", per_page.as_str()),
                ("page", "1"),
            ])
            .send()
            .await?
            .json()
            .await
            .map_err(|e| ClientError::Deserialization(format!(
                "Failed to parse CoinGecko markets response: {e}"
            )))?;
        Ok(assets)
    }

    async fn markets_by_ids(
        &self,
        vs_currency: &str,
        ids: &[String],
    ) -> Result<Vec<MarketAsset>, ClientError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let url = format!("{BASE_URL}/coins/markets");
        let joined = ids.join(",");
        let assets: Vec<MarketAsset> = self
            .client
            .get(&url)
            .query(&[("vs_currency", vs_currency), ("ids", joined.as_str())])
            .send()
            .await?
            .json()
            .await
            .map_err(|e| ClientError::Deserialization(format!(
                "Failed to parse CoinGecko markets response for ids {joined}: {e}"
            )))?;
        Ok(assets)
    }

    async fn market_chart(
        &self,
        coin_id: &str,
        vs_currency: &str,
        interval: ChartInterval,
    ) -> Result<Vec<ChartPoint>, ClientError> {
        let url = format!("{BASE_URL}/coins/{coin_id}/market_chart");
        let resp: MarketChartResponse = self
            .client
            .get(&url)
            .query(&[("vs_currency", vs_currency), ("days", interval.days())])
            .send()
            .await?
            .json()
            .await
            .map_err(|e| ClientError::Deserialization(format!(
                "Failed to parse chart data for {coin_id}: {e}"
            )))?;

        let points: Vec<ChartPoint> = resp
            .prices
            .into_iter()
            .filter_map(|(millis, price)| {
                let timestamp = chrono::DateTime::from_timestamp_millis(millis)?;
                Some(ChartPoint { timestamp, price })
            })
            .collect();

        Ok(points)
    }

    async fn coin_list(&self) -> Result<Vec<CoinListEntry>, ClientError> {
        let url = format!("{BASE_URL}/coins/list");
        let coins: Vec<CoinListEntry> = self
            .client
            .get(&url)
            .send()
            .await?
            .json()
            .await
            .map_err(|e| ClientError::Deserialization(format!(
                "Failed to parse CoinGecko coin list: {e}"
            )))?;
        Ok(coins)
    }

    async fn simple_price(
        &self,
        coin_id: &str,
        vs_currency: &str,
    ) -> Result<Option<f64>, ClientError> {
        let url = format!("{BASE_URL}/simple/price");
        let resp: SimplePriceResponse = self
            .client
            .get(&url)
            .query(&[("ids", coin_id), ("vs_currencies", vs_currency)])
            .send()
            .await?
            .json()
            .await
            .map_err(|e| ClientError::Deserialization(format!(
                "Failed to parse price for {coin_id}/{vs_currency}: {e}"
            )))?;

        Ok(resp
            .get(coin_id)
            .and_then(|rates| rates.get(&vs_currency.to_lowercase()))
            .copied())
    }
}
