use async_trait::async_trait;

use crate::errors::ClientError;
use crate::models::market::{ChartPoint, CoinListEntry, MarketAsset};

/// Time range selectable on the historical chart, mapped to the day
/// counts the market-data API expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartInterval {
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl ChartInterval {
    /// The `days` query value for this interval. The hourly view uses a
    /// one-day window; the API picks a finer granularity for it.
    #[must_use]
    pub fn days(self) -> &'static str {
        match self {
            ChartInterval::Hour | ChartInterval::Day => "1",
            ChartInterval::Week => "7",
            ChartInterval::Month => "30",
            ChartInterval::Year => "365",
        }
    }
}

/// Trait abstraction over the public market-data API.
///
/// The informational pages (overview fallback, converter, historical
/// chart, comparison) consume market data through this trait; if the
/// upstream API changes or is swapped out, only one implementation
/// moves — callers and tests are untouched.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Top assets by market cap, priced in `vs_currency`.
    async fn top_markets(
        &self,
        vs_currency: &str,
        per_page: u32,
    ) -> Result<Vec<MarketAsset>, ClientError>;

    /// Market snapshots for a specific set of coin ids (comparison view).
    async fn markets_by_ids(
        &self,
        vs_currency: &str,
        ids: &[String],
    ) -> Result<Vec<MarketAsset>, ClientError>;

    /// Historical price series for one coin over an interval.
    async fn market_chart(
        &self,
        coin_id: &str,
        vs_currency: &str,
        interval: ChartInterval,
    ) -> Result<Vec<ChartPoint>, ClientError>;

    /// Full list of known coin ids (converter's source dropdown).
    async fn coin_list(&self) -> Result<Vec<CoinListEntry>, ClientError>;

    /// Spot price of one coin in one currency; `None` when the pair is
    /// unknown to the API.
    async fn simple_price(
        &self,
        coin_id: &str,
        vs_currency: &str,
    ) -> Result<Option<f64>, ClientError>;
}
