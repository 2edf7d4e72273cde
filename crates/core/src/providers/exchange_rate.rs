use std::collections::HashMap;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::errors::ClientError;

const BASE_URL: &str = "https://api.exchangerate-api.com";

/// Public fiat exchange-rate provider.
///
/// One endpoint: `GET /v4/latest/{base}` returning the rate table of
/// every supported fiat currency against `base`. The converter view uses
/// the table's keys to populate its target-currency list.
pub struct ExchangeRateProvider {
    client: Client,
}

impl ExchangeRateProvider {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { client }
    }

    /// Fetch all rates against `base` (e.g. "USD").
    pub async fn latest_rates(&self, base: &str) -> Result<HashMap<String, f64>, ClientError> {
        let base = base.to_uppercase();
        let url = format!("{BASE_URL}/v4/latest/{base}");

        let resp: RatesResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .json()
            .await
            .map_err(|e| ClientError::Deserialization(format!(
                "Failed to parse exchange rates for base {base}: {e}"
            )))?;

        Ok(resp.rates)
    }

    /// Sorted list of currency codes quotable against `base`.
    pub async fn currency_codes(&self, base: &str) -> Result<Vec<String>, ClientError> {
        let rates = self.latest_rates(base).await?;
        let mut codes: Vec<String> = rates.into_keys().collect();
        codes.sort();
        Ok(codes)
    }
}

impl Default for ExchangeRateProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Deserialize)]
struct RatesResponse {
    rates: HashMap<String, f64>,
}
