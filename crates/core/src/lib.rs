pub mod api;
pub mod config;
pub mod errors;
pub mod gateway;
pub mod models;
pub mod providers;
pub mod services;
pub mod storage;

use std::sync::Arc;

use api::auth::AuthApi;
use api::overview::OverviewApi;
use api::portfolio::PortfolioApi;
use api::transactions::TransactionApi;
use api::wallet::WalletApi;
use config::ClientConfig;
use errors::ClientError;
use gateway::ApiGateway;
use models::auth::{LoginResponse, MessageResponse, RegisterRequest};
use models::market::{ChartPoint, CoinListEntry, MarketAsset};
use models::portfolio::Position;
use models::session::Session;
use models::wallet::StatementResponse;
use providers::coingecko::CoinGeckoProvider;
use providers::exchange_rate::ExchangeRateProvider;
use providers::prediction::PredictionClient;
use providers::traits::{ChartInterval, MarketDataProvider};
use storage::backend::{FileBackend, SessionBackend};
use storage::store::SessionStore;

/// Outcome of asking the external prediction service for a forecast.
/// The service being unreachable is expected, not an error.
#[derive(Debug, Clone)]
pub enum Prediction {
    Ready(serde_json::Value),
    Offline,
}

/// Main entry point for the Crypto Sim client library.
///
/// Owns the session store, the authenticated backend gateway, and the
/// public market-data providers. High-level operations validate input
/// before touching the network and apply session side effects; the raw
/// per-endpoint wrappers remain reachable through the `api` accessors
/// for callers that need untranslated results.
#[must_use]
pub struct CryptoSim {
    config: ClientConfig,
    session: Arc<SessionStore>,
    auth: AuthApi,
    wallet: WalletApi,
    transactions: TransactionApi,
    portfolio: PortfolioApi,
    overview: OverviewApi,
    market_data: Box<dyn MarketDataProvider>,
    exchange_rates: ExchangeRateProvider,
    prediction: PredictionClient,
}

impl CryptoSim {
    /// Build a client persisting the session under the configured
    /// directory.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let backend = FileBackend::new(config.session_dir.clone())?;
        Ok(Self::with_backend(config, Box::new(backend)))
    }

    /// Build a client with an explicit session backend (tests, embedders
    /// with platform-native storage).
    pub fn with_backend(config: ClientConfig, backend: Box<dyn SessionBackend>) -> Self {
        let session = Arc::new(SessionStore::new(backend));
        let gateway = Arc::new(ApiGateway::new(config.api_base_url.as_str(), Arc::clone(&session)));
        let prediction = PredictionClient::new(config.predict_base_url.as_str());

        Self {
            config,
            session,
            auth: AuthApi::new(Arc::clone(&gateway)),
            wallet: WalletApi::new(Arc::clone(&gateway)),
            transactions: TransactionApi::new(Arc::clone(&gateway)),
            portfolio: PortfolioApi::new(Arc::clone(&gateway)),
            overview: OverviewApi::new(gateway),
            market_data: Box::new(CoinGeckoProvider::new()),
            exchange_rates: ExchangeRateProvider::new(),
            prediction,
        }
    }

    /// Replace the market-data provider (tests use a mock here).
    pub fn set_market_data_provider(&mut self, provider: Box<dyn MarketDataProvider>) {
        self.market_data = provider;
    }

    // ── Session ─────────────────────────────────────────────────────

    /// Snapshot of the current session.
    #[must_use]
    pub fn session(&self) -> Session {
        self.session.session()
    }

    /// `true` iff a credential is present in the session store.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Authenticate against the backend, then record the identity and
    /// bearer credential so subsequent calls carry it.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ClientError> {
        if username.trim().is_empty() || password.trim().is_empty() {
            return Err(ClientError::Validation(
                "Username and password are required".into(),
            ));
        }

        let response = self.auth.login(username, password).await?;
        self.session
            .login(Some(username.to_string()), Some(response.token.clone()));
        Ok(response)
    }

    /// Clear the session locally. Idempotent; no backend call exists for
    /// logout.
    pub fn logout(&self) {
        self.session.logout();
    }

    // ── Registration & OTP ──────────────────────────────────────────

    pub async fn register(&self, request: &RegisterRequest) -> Result<MessageResponse, ClientError> {
        if request.username.trim().is_empty() || request.password.trim().is_empty() {
            return Err(ClientError::Validation(
                "Username and password are required".into(),
            ));
        }
        self.auth.register(request).await
    }

    /// Request an OTP for a username (account-recovery flow).
    pub async fn generate_otp(&self, username: &str) -> Result<MessageResponse, ClientError> {
        if username.trim().is_empty() {
            return Err(ClientError::Validation("Username is required".into()));
        }
        self.auth.generate_otp(username).await
    }

    /// Validate a username-keyed OTP (account-recovery flow).
    pub async fn validate_otp(
        &self,
        username: &str,
        otp: &str,
    ) -> Result<MessageResponse, ClientError> {
        if username.trim().is_empty() || otp.trim().is_empty() {
            return Err(ClientError::Validation("Username and OTP are required".into()));
        }
        self.auth.validate_otp(username, otp).await
    }

    /// Request the wallet-creation OTP for the logged-in user.
    pub async fn generate_wallet_otp(&self) -> Result<MessageResponse, ClientError> {
        self.auth.generate_wallet_otp().await
    }

    /// Validate the wallet-creation OTP.
    pub async fn validate_wallet_otp(&self, otp: &str) -> Result<MessageResponse, ClientError> {
        if otp.trim().is_empty() {
            return Err(ClientError::Validation("OTP is required".into()));
        }
        self.auth.validate_wallet_otp(otp).await
    }

    // ── Wallet ──────────────────────────────────────────────────────

    /// Current wallet balance, or `None` when the wallet does not exist
    /// yet. Any fetch failure is interpreted as the wallet being absent,
    /// which routes the caller into the creation flow instead of an
    /// error state.
    pub async fn wallet_balance(&self) -> Option<f64> {
        match self.wallet.get_balance().await {
            Ok(response) => response.balance,
            Err(e) => {
                tracing::debug!(error = %e, "Balance fetch failed; treating wallet as absent");
                None
            }
        }
    }

    /// Create the wallet (requires a previously validated wallet OTP).
    pub async fn create_wallet(&self) -> Result<MessageResponse, ClientError> {
        self.wallet.create_wallet().await
    }

    /// Toggle the wallet's blocked state.
    pub async fn block_unblock_wallet(&self) -> Result<MessageResponse, ClientError> {
        self.wallet.block_unblock().await
    }

    /// Fetch the wallet statement.
    pub async fn wallet_statement(&self) -> Result<StatementResponse, ClientError> {
        self.wallet.get_statement().await
    }

    /// Fund the wallet. Returns the updated balance.
    pub async fn add_money(&self, amount: f64) -> Result<Option<f64>, ClientError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ClientError::Validation("Amount must be positive".into()));
        }
        let response = self.transactions.add_money(amount).await?;
        Ok(response.balance)
    }

    // ── Trading ─────────────────────────────────────────────────────

    /// Execute a market buy of `crypto_id` for `amount_invested`.
    /// Returns the post-trade balance.
    pub async fn buy_crypto(
        &self,
        crypto_id: &str,
        amount_invested: f64,
    ) -> Result<Option<f64>, ClientError> {
        let crypto_id = crypto_id.trim();
        if crypto_id.is_empty() {
            return Err(ClientError::Validation("Crypto id is required".into()));
        }
        if !amount_invested.is_finite() || amount_invested <= 0.0 {
            return Err(ClientError::Validation("Amount must be positive".into()));
        }
        let response = self.transactions.buy_crypto(crypto_id, amount_invested).await?;
        Ok(response.balance)
    }

    /// Sell one held position by its order id. Returns the post-trade
    /// balance.
    pub async fn sell_crypto(
        &self,
        crypto_id: &str,
        crypto_order_id: i64,
    ) -> Result<Option<f64>, ClientError> {
        let crypto_id = crypto_id.trim();
        if crypto_id.is_empty() {
            return Err(ClientError::Validation("Crypto id is required".into()));
        }
        if crypto_order_id <= 0 {
            return Err(ClientError::Validation("Order id must be positive".into()));
        }
        let response = self
            .transactions
            .sell_crypto(crypto_id, crypto_order_id)
            .await?;
        Ok(response.balance)
    }

    // ── Portfolio & Overview ────────────────────────────────────────

    /// Fetch the full position list. The result replaces any previous
    /// fetch; aggregate figures come from `services::analytics`.
    pub async fn portfolio(&self) -> Result<Vec<Position>, ClientError> {
        let response = self.portfolio.get_portfolio().await?;
        Ok(response.portfolios)
    }

    /// The backend's market overview table.
    pub async fn market_overview(&self) -> Result<Vec<MarketAsset>, ClientError> {
        self.overview.get_prices().await
    }

    // ── Public market data ──────────────────────────────────────────

    /// Top assets by market cap, priced in USD.
    pub async fn top_markets(&self, per_page: u32) -> Result<Vec<MarketAsset>, ClientError> {
        self.market_data.top_markets("usd", per_page).await
    }

    /// Snapshots for a chosen set of coins (comparison view).
    pub async fn compare_markets(&self, ids: &[String]) -> Result<Vec<MarketAsset>, ClientError> {
        self.market_data.markets_by_ids("usd", ids).await
    }

    /// Historical USD price series for one coin.
    pub async fn historical_chart(
        &self,
        coin_id: &str,
        interval: ChartInterval,
    ) -> Result<Vec<ChartPoint>, ClientError> {
        self.market_data.market_chart(coin_id, "usd", interval).await
    }

    /// All coin ids known to the market-data API.
    pub async fn coin_list(&self) -> Result<Vec<CoinListEntry>, ClientError> {
        self.market_data.coin_list().await
    }

    /// Spot rate of one coin in one fiat currency; `None` when the pair
    /// is unknown.
    pub async fn conversion_rate(
        &self,
        coin_id: &str,
        vs_currency: &str,
    ) -> Result<Option<f64>, ClientError> {
        self.market_data.simple_price(coin_id, vs_currency).await
    }

    /// Convert `amount` of a coin into a fiat currency at the current
    /// spot rate.
    pub async fn convert(
        &self,
        amount: f64,
        coin_id: &str,
        vs_currency: &str,
    ) -> Result<Option<f64>, ClientError> {
        let rate = self.conversion_rate(coin_id, vs_currency).await?;
        Ok(services::analytics::convert_amount(amount, rate))
    }

    /// Fiat currency codes quotable against USD (converter dropdown).
    pub async fn fiat_currencies(&self) -> Result<Vec<String>, ClientError> {
        self.exchange_rates.currency_codes("USD").await
    }

    // ── Prediction ──────────────────────────────────────────────────

    /// Ask the external prediction service for a forecast. Any failure
    /// collapses to `Prediction::Offline`.
    pub async fn predict(&self, coin_id: &str) -> Prediction {
        match self.prediction.predict(coin_id).await {
            Ok(payload) => Prediction::Ready(payload),
            Err(e) => {
                tracing::debug!(error = %e, coin_id, "Prediction service unavailable");
                Prediction::Offline
            }
        }
    }

    // ── Accessors ───────────────────────────────────────────────────

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[must_use]
    pub fn session_store(&self) -> &Arc<SessionStore> {
        &self.session
    }
}

impl std::fmt::Debug for CryptoSim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CryptoSim")
            .field("api_base_url", &self.config.api_base_url)
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
