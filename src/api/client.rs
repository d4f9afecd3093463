//! SBEE REST API client implementation.
//!
//! The [`SbeeApiClient`] talks to the SBEE gateway, which fronts many
//! cryptocurrency exchanges behind one REST surface. Responses are returned
//! as raw [`serde_json::Value`] exactly as the gateway sent them.
//!
//! # Example
//!
//! ```rust,ignore
//! use sbee::api::SbeeApiClient;
//! use sbee::shared::{Exchange, TradeType};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SbeeApiClient::new("https://api.sbee.io/api", "<bearer token>")?;
//!
//!     let time = client.system_time(Exchange::Binance).await?;
//!     println!("server time: {time}");
//!
//!     let trades = client
//!         .recent_trades(Exchange::Binance, TradeType::Spot, "BTC-USDT", 20)
//!         .await?;
//!     println!("recent trades: {trades}");
//!
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::api::error::{ApiError, ApiResult};
use crate::api::types::*;
use crate::shared::{Exchange, KlineInterval, TradeType};

/// Builder for configuring [`SbeeApiClient`].
#[derive(Debug, Clone)]
pub struct SbeeApiClientBuilder {
    base_url: String,
    auth_token: String,
    timeout: Option<Duration>,
}

impl SbeeApiClientBuilder {
    /// Create a new builder with the given gateway root and bearer token.
    pub fn new(base_url: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth_token: auth_token.into(),
            timeout: None,
        }
    }

    /// Set an explicit request timeout.
    ///
    /// By default no timeout is set and the transport's own default applies.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the timeout in seconds.
    pub fn timeout_secs(self, secs: u64) -> Self {
        self.timeout(Duration::from_secs(secs))
    }

    /// Build the client.
    pub fn build(self) -> ApiResult<SbeeApiClient> {
        let mut builder = Client::builder().pool_max_idle_per_host(10);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;

        Ok(SbeeApiClient {
            http_client,
            base_url: self.base_url,
            auth_token: self.auth_token,
        })
    }
}

/// SBEE REST API client.
///
/// Holds only immutable configuration (gateway root and bearer token) plus a
/// pooled HTTP transport; it is cheap to clone and safe to share. Every
/// operation performs exactly one network round trip — no caching, no retry.
#[derive(Clone)]
pub struct SbeeApiClient {
    http_client: Client,
    base_url: String,
    auth_token: String,
}

// Manual Debug: the bearer token stays out of logs and panic output.
impl std::fmt::Debug for SbeeApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SbeeApiClient")
            .field("base_url", &self.base_url)
            .field("auth_token", &"<redacted>")
            .finish()
    }
}

impl SbeeApiClient {
    /// Create a new client with the given gateway root and bearer token.
    ///
    /// The token is issued by the gateway operator's account system and sent
    /// as `Authorization: Bearer …` on every request.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP transport cannot be initialized.
    pub fn new(base_url: impl Into<String>, auth_token: impl Into<String>) -> ApiResult<Self> {
        SbeeApiClientBuilder::new(base_url, auth_token).build()
    }

    /// Create a new client builder for custom configuration.
    pub fn builder(
        base_url: impl Into<String>,
        auth_token: impl Into<String>,
    ) -> SbeeApiClientBuilder {
        SbeeApiClientBuilder::new(base_url, auth_token)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =========================================================================
    // Request dispatch
    // =========================================================================

    /// Issue a single request to the gateway.
    ///
    /// Only GET and POST dispatch at all; a POST without a body degrades to
    /// a bodyless GET, and a body passed with GET is ignored.
    async fn dispatch<T, B>(&self, method: Method, url: &str, body: Option<&B>) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        if method != Method::GET && method != Method::POST {
            return Err(ApiError::InvalidMethod(method));
        }

        let request = match body {
            Some(payload) if method == Method::POST => self
                .http_client
                .post(url)
                .header(reqwest::header::CONTENT_TYPE, "application/json-patch+json")
                .json(payload),
            _ => self.http_client.get(url),
        };

        tracing::debug!(%method, url, "dispatching gateway request");

        let response = request
            .header(reqwest::header::ACCEPT, "text/plain")
            .bearer_auth(&self.auth_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), url, "gateway returned error status");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: body_text,
            });
        }

        response.json::<T>().await.map_err(|e| {
            ApiError::Deserialize(format!("failed to deserialize gateway response: {e}"))
        })
    }

    /// Execute a GET request.
    async fn get(&self, url: &str) -> ApiResult<Value> {
        self.dispatch::<Value, ()>(Method::GET, url, None).await
    }

    /// Execute a POST request with a JSON body.
    async fn post<B: Serialize + ?Sized>(&self, url: &str, body: &B) -> ApiResult<Value> {
        self.dispatch(Method::POST, url, Some(body)).await
    }

    // =========================================================================
    // Public market data
    // =========================================================================

    /// Get the addressed exchange's server time.
    ///
    /// `GET /Crypto/{Exchange}/SystemTime` — see
    /// <https://doc.sbee.io/api/get-system-time>.
    pub async fn system_time(&self, exchange: Exchange) -> ApiResult<Value> {
        let url = format!("{}/Crypto/{}/SystemTime", self.base_url, exchange);
        self.get(&url).await
    }

    /// Get recently fulfilled buy and sell orders for a pair.
    ///
    /// `GET /Crypto/{Exchange}/{Trade}/RecentTrades`.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Currency pair, e.g. `BTC-USDT`
    /// * `depth` - Number of trades to return
    pub async fn recent_trades(
        &self,
        exchange: Exchange,
        trade: TradeType,
        symbol: &str,
        depth: u32,
    ) -> ApiResult<Value> {
        let url = format!(
            "{}/Crypto/{}/{}/RecentTrades?symbol={}&depth={}",
            self.base_url,
            exchange,
            trade,
            urlencoding::encode(symbol),
            depth
        );
        self.get(&url).await
    }

    /// Get all tradable pairs and their quantity/price scales.
    pub async fn currencies(&self, exchange: Exchange, trade: TradeType) -> ApiResult<Value> {
        let url = format!("{}/Crypto/{}/{}/Currencies", self.base_url, exchange, trade);
        self.get(&url).await
    }

    /// Get historical candles for a pair.
    ///
    /// `GET /Crypto/{Exchange}/{Trade}/KLine`.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Currency pair, e.g. `BTC-USDT`
    /// * `interval` - Candle interval
    /// * `start_time` / `end_time` - Window bounds, epoch milliseconds
    /// * `limit` - Maximum number of candles
    pub async fn kline(
        &self,
        exchange: Exchange,
        trade: TradeType,
        symbol: &str,
        interval: KlineInterval,
        start_time: u64,
        end_time: u64,
        limit: u32,
    ) -> ApiResult<Value> {
        let url = format!(
            "{}/Crypto/{}/{}/KLine?symbol={}&interval={}&startTime={}&endTime={}&limit={}",
            self.base_url,
            exchange,
            trade,
            urlencoding::encode(symbol),
            interval,
            start_time,
            end_time,
            limit
        );
        self.get(&url).await
    }

    /// Get candles with technical-indicator overlays computed server-side.
    ///
    /// `POST /Crypto/{Exchange}/{Trade}/KlineFormation`.
    pub async fn kline_formation(
        &self,
        exchange: Exchange,
        trade: TradeType,
        request: &KlineFormationRequest,
    ) -> ApiResult<Value> {
        let url = format!(
            "{}/Crypto/{}/{}/KlineFormation",
            self.base_url, exchange, trade
        );
        self.post(&url, request).await
    }

    /// Get an instant snapshot of all open orders for a pair.
    pub async fn order_book(
        &self,
        exchange: Exchange,
        trade: TradeType,
        symbol: &str,
        depth: u32,
    ) -> ApiResult<Value> {
        let url = format!(
            "{}/Crypto/{}/{}/OrderBook?symbol={}&depth={}",
            self.base_url,
            exchange,
            trade,
            urlencoding::encode(symbol),
            depth
        );
        self.get(&url).await
    }

    /// Get the latest price, best bid/ask and 24h volume for a pair.
    pub async fn tickers(
        &self,
        exchange: Exchange,
        trade: TradeType,
        symbol: &str,
    ) -> ApiResult<Value> {
        let url = format!(
            "{}/Crypto/{}/{}/Tickers?symbol={}",
            self.base_url,
            exchange,
            trade,
            urlencoding::encode(symbol)
        );
        self.get(&url).await
    }

    // =========================================================================
    // Account endpoints
    // =========================================================================

    /// Read wallet cash balances.
    ///
    /// An empty `symbol` returns every coin in the wallet.
    pub async fn trading_balances(
        &self,
        exchange: Exchange,
        trade: TradeType,
        symbol: &str,
        credentials: &ApiCredentials,
    ) -> ApiResult<Value> {
        let url = format!(
            "{}/Crypto/{}/{}/TradingBalances",
            self.base_url, exchange, trade
        );
        let query = SymbolQuery {
            symbol: symbol.to_string(),
        };
        self.post(&url, &Authed::new(credentials, &query)).await
    }

    /// Read cash balances for many wallets in one call.
    pub async fn trading_balances_for_people(
        &self,
        exchange: Exchange,
        trade: TradeType,
        queries: &[WalletBalanceQuery],
    ) -> ApiResult<Value> {
        let url = format!(
            "{}/Crypto/{}/{}/TradingBalancesForPeople",
            self.base_url, exchange, trade
        );
        self.post(&url, queries).await
    }

    /// Get the wallet's own buy and sell orders.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Currency pair, e.g. `BTC-USDT`
    /// * `state` - Server-defined comma list, e.g. `NEW,ALL,FILLED,CANCELED`
    pub async fn order_history(
        &self,
        exchange: Exchange,
        trade: TradeType,
        symbol: &str,
        state: &str,
        credentials: &ApiCredentials,
    ) -> ApiResult<Value> {
        let url = format!(
            "{}/Crypto/{}/{}/OrderHistory",
            self.base_url, exchange, trade
        );
        let query = OrderHistoryQuery {
            symbol: symbol.to_string(),
            state: state.to_string(),
        };
        self.post(&url, &Authed::new(credentials, &query)).await
    }

    /// Set the leverage multiplier for a futures contract.
    pub async fn set_leverage(
        &self,
        exchange: Exchange,
        trade: TradeType,
        symbol: &str,
        leverage: u32,
        credentials: &ApiCredentials,
    ) -> ApiResult<Value> {
        let url = format!(
            "{}/Crypto/{}/{}/SetLeverage",
            self.base_url, exchange, trade
        );
        let request = SetLeverageRequest {
            symbol: symbol.to_string(),
            leverage,
        };
        self.post(&url, &Authed::new(credentials, &request)).await
    }

    // =========================================================================
    // Order endpoints
    // =========================================================================

    /// Place a limit buy or sell order.
    ///
    /// `POST /Crypto/{Exchange}/{Trade}/PlaceLimitOrder` — see
    /// <https://doc.sbee.io/api/spot/limit-order>.
    pub async fn place_limit_order(
        &self,
        exchange: Exchange,
        trade: TradeType,
        credentials: &ApiCredentials,
        order: &LimitOrderRequest,
    ) -> ApiResult<Value> {
        let url = format!(
            "{}/Crypto/{}/{}/PlaceLimitOrder",
            self.base_url, exchange, trade
        );
        self.post(&url, &Authed::new(credentials, order)).await
    }

    /// Place a buy or sell order at market price.
    pub async fn place_market_order(
        &self,
        exchange: Exchange,
        trade: TradeType,
        credentials: &ApiCredentials,
        order: &MarketOrderRequest,
    ) -> ApiResult<Value> {
        let url = format!(
            "{}/Crypto/{}/{}/PlaceMarketOrder",
            self.base_url, exchange, trade
        );
        self.post(&url, &Authed::new(credentials, order)).await
    }

    /// Place a stop-loss limit order.
    pub async fn place_limit_stop_loss_order(
        &self,
        exchange: Exchange,
        trade: TradeType,
        credentials: &ApiCredentials,
        order: &StopOrderRequest,
    ) -> ApiResult<Value> {
        let url = format!(
            "{}/Crypto/{}/{}/PlaceLimitStopLossOrder",
            self.base_url, exchange, trade
        );
        self.post(&url, &Authed::new(credentials, order)).await
    }

    /// Place a take-profit limit order closing an open position at a set
    /// price.
    pub async fn place_limit_take_profit_order(
        &self,
        exchange: Exchange,
        trade: TradeType,
        credentials: &ApiCredentials,
        order: &StopOrderRequest,
    ) -> ApiResult<Value> {
        let url = format!(
            "{}/Crypto/{}/{}/PlaceLimitTakeProfitOrder",
            self.base_url, exchange, trade
        );
        self.post(&url, &Authed::new(credentials, order)).await
    }

    /// Cancel one order by venue id and/or client id.
    pub async fn cancel_order(
        &self,
        exchange: Exchange,
        trade: TradeType,
        symbol: &str,
        order_id: &str,
        client_order_id: &str,
        credentials: &ApiCredentials,
    ) -> ApiResult<Value> {
        let url = format!(
            "{}/Crypto/{}/{}/CancelOrder",
            self.base_url, exchange, trade
        );
        let request = CancelOrderRequest {
            symbol: symbol.to_string(),
            order_id: order_id.to_string(),
            client_order_id: client_order_id.to_string(),
        };
        self.post(&url, &Authed::new(credentials, &request)).await
    }

    /// Cancel every open order on a pair.
    pub async fn cancel_orders_by_symbol(
        &self,
        exchange: Exchange,
        trade: TradeType,
        symbol: &str,
        credentials: &ApiCredentials,
    ) -> ApiResult<Value> {
        let url = format!(
            "{}/Crypto/{}/{}/CancelOrdersBySymbol",
            self.base_url, exchange, trade
        );
        let query = SymbolQuery {
            symbol: symbol.to_string(),
        };
        self.post(&url, &Authed::new(credentials, &query)).await
    }

    // =========================================================================
    // Batch order endpoints — single wallet
    // =========================================================================

    /// Place many limit orders from one wallet.
    pub async fn place_batch_limit_orders(
        &self,
        exchange: Exchange,
        trade: TradeType,
        credentials: &ApiCredentials,
        orders: &[BatchLimitOrderItem],
    ) -> ApiResult<Value> {
        let url = format!(
            "{}/Crypto/{}/{}/PlaceBatchLimitOrders",
            self.base_url, exchange, trade
        );
        self.post(&url, &WalletBatch::new(credentials, orders)).await
    }

    /// Place many market orders from one wallet.
    pub async fn place_batch_market_orders(
        &self,
        exchange: Exchange,
        trade: TradeType,
        credentials: &ApiCredentials,
        orders: &[BatchMarketOrderItem],
    ) -> ApiResult<Value> {
        let url = format!(
            "{}/Crypto/{}/{}/PlaceBatchMarketOrders",
            self.base_url, exchange, trade
        );
        self.post(&url, &WalletBatch::new(credentials, orders)).await
    }

    /// Cancel many orders from one wallet.
    pub async fn cancel_batch_orders(
        &self,
        exchange: Exchange,
        trade: TradeType,
        credentials: &ApiCredentials,
        orders: &[BatchCancelItem],
    ) -> ApiResult<Value> {
        let url = format!(
            "{}/Crypto/{}/{}/CancelBatchOrders",
            self.base_url, exchange, trade
        );
        self.post(&url, &WalletBatch::new(credentials, orders)).await
    }

    // =========================================================================
    // Batch order endpoints — one wallet per entry
    // =========================================================================

    /// Place limit orders across many wallets; each entry carries its own
    /// credentials.
    pub async fn place_limit_order_for_people(
        &self,
        exchange: Exchange,
        trade: TradeType,
        orders: &[WalletLimitOrder],
    ) -> ApiResult<Value> {
        let url = format!(
            "{}/Crypto/{}/{}/PlaceLimitOrderForPeople",
            self.base_url, exchange, trade
        );
        self.post(&url, orders).await
    }

    /// Place market orders across many wallets.
    pub async fn place_market_order_for_people(
        &self,
        exchange: Exchange,
        trade: TradeType,
        orders: &[WalletMarketOrder],
    ) -> ApiResult<Value> {
        let url = format!(
            "{}/Crypto/{}/{}/PlaceMarketOrderForPeople",
            self.base_url, exchange, trade
        );
        self.post(&url, orders).await
    }

    /// Cancel orders across many wallets.
    pub async fn cancel_batch_orders_for_people(
        &self,
        exchange: Exchange,
        trade: TradeType,
        orders: &[WalletCancel],
    ) -> ApiResult<Value> {
        let url = format!(
            "{}/Crypto/{}/{}/CancelBatchOrdersForPeople",
            self.base_url, exchange, trade
        );
        self.post(&url, orders).await
    }

    // =========================================================================
    // Multi-market endpoints
    // =========================================================================

    /// Get order-book depth for one pair aggregated across exchanges.
    ///
    /// `POST /Crypto/MultiMarket/{Trade}/OrderBook`.
    pub async fn multi_order_book(
        &self,
        trade: TradeType,
        query: &MultiMarketQuery,
    ) -> ApiResult<Value> {
        let url = format!("{}/Crypto/MultiMarket/{}/OrderBook", self.base_url, trade);
        self.post(&url, query).await
    }

    /// Get recent trades for one pair aggregated across exchanges.
    pub async fn multi_recent_trades(
        &self,
        trade: TradeType,
        query: &MultiMarketQuery,
    ) -> ApiResult<Value> {
        let url = format!(
            "{}/Crypto/MultiMarket/{}/RecentTrades",
            self.base_url, trade
        );
        self.post(&url, query).await
    }

    /// Get a stepped order book (fixed increments between price levels)
    /// aggregated across exchanges.
    pub async fn stepped_order_book(
        &self,
        trade: TradeType,
        query: &MultiMarketQuery,
    ) -> ApiResult<Value> {
        let url = format!(
            "{}/Crypto/MultiMarket/{}/SteppedOrderBook",
            self.base_url, trade
        );
        self.post(&url, query).await
    }

    // =========================================================================
    // Gateway info endpoints
    // =========================================================================

    /// List the exchanges the gateway fronts and their service endpoints.
    pub async fn markets(&self) -> ApiResult<Value> {
        let url = format!("{}/Crypto/Info/Markets", self.base_url);
        self.get(&url).await
    }

    /// Get fiat/crypto currency pair valuations.
    pub async fn money_pair_values(&self) -> ApiResult<Value> {
        let url = format!("{}/Fintech/MoneyPairValues", self.base_url);
        self.get(&url).await
    }

    /// List crypto news, paginated.
    pub async fn news(
        &self,
        language: &str,
        page_size: u32,
        page_number: u32,
    ) -> ApiResult<Value> {
        let url = format!(
            "{}/Crypto/News/List?language={}&pageSize={}&pageNumber={}",
            self.base_url,
            urlencoding::encode(language),
            page_size,
            page_number
        );
        self.get(&url).await
    }

    /// List countries known to the gateway.
    pub async fn country(&self) -> ApiResult<Value> {
        let url = format!("{}/Crypto/Country/List", self.base_url);
        self.get(&url).await
    }
}

// ============================================================================
// Body envelopes
// ============================================================================

/// Request body with wallet credentials spliced in at the top level.
#[derive(Serialize)]
struct Authed<'a, T: Serialize> {
    #[serde(flatten)]
    credentials: &'a ApiCredentials,
    #[serde(flatten)]
    body: &'a T,
}

impl<'a, T: Serialize> Authed<'a, T> {
    fn new(credentials: &'a ApiCredentials, body: &'a T) -> Self {
        Self { credentials, body }
    }
}

/// Same-wallet batch envelope: credentials once, orders as a list.
#[derive(Serialize)]
struct WalletBatch<'a, T: Serialize> {
    #[serde(flatten)]
    credentials: &'a ApiCredentials,
    orders: &'a [T],
}

impl<'a, T: Serialize> WalletBatch<'a, T> {
    fn new(credentials: &'a ApiCredentials, orders: &'a [T]) -> Self {
        Self { credentials, orders }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = SbeeApiClient::new("https://api.sbee.io/api", "token").unwrap();
        assert_eq!(client.base_url(), "https://api.sbee.io/api");
    }

    #[test]
    fn test_builder_strips_trailing_slash() {
        let client = SbeeApiClient::builder("https://api.sbee.io/api/", "token")
            .timeout_secs(60)
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://api.sbee.io/api");
    }

    #[test]
    fn test_debug_hides_token() {
        let client = SbeeApiClient::new("https://api.sbee.io/api", "super-secret").unwrap();
        let printed = format!("{client:?}");
        assert!(!printed.contains("super-secret"));
    }

    #[tokio::test]
    async fn test_invalid_method_rejected_before_network() {
        // The address is unroutable; reaching the network would surface an
        // Http error instead of InvalidMethod.
        let client = SbeeApiClient::new("http://192.0.2.1:1", "token").unwrap();
        let result = client
            .dispatch::<Value, ()>(Method::DELETE, "http://192.0.2.1:1/x", None)
            .await;
        assert!(matches!(result, Err(ApiError::InvalidMethod(_))));
    }

    #[test]
    fn test_authed_envelope_flattens() {
        let credentials = ApiCredentials::new("key", "secret", "pass");
        let query = SymbolQuery {
            symbol: "USDT".to_string(),
        };
        let json = serde_json::to_value(Authed::new(&credentials, &query)).unwrap();
        assert_eq!(json["apiKey"], "key");
        assert_eq!(json["apiSecret"], "secret");
        assert_eq!(json["apiPass"], "pass");
        assert_eq!(json["symbol"], "USDT");
    }

    #[test]
    fn test_wallet_batch_envelope() {
        let credentials = ApiCredentials::without_pass("key", "secret");
        let orders = vec![BatchCancelItem {
            symbol: "BTC-USDT".to_string(),
            client_order_id: "ID123".to_string(),
            order_id: "ID124".to_string(),
        }];
        let json = serde_json::to_value(WalletBatch::new(&credentials, &orders)).unwrap();
        assert_eq!(json["apiKey"], "key");
        assert_eq!(json["orders"][0]["clientOrderId"], "ID123");
        assert_eq!(json["orders"][0]["orderId"], "ID124");
    }
}
