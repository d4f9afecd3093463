//! Order request types for the SBEE REST API.
//!
//! Field names follow the gateway's wire schema exactly. Note the casing is
//! not uniform across endpoints: single-order placement sends
//! `ClientOrderId`, cancels and same-wallet batches send `clientOrderId`,
//! and the per-wallet limit batch sends `cliOrId`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::credentials::ApiCredentials;
use crate::shared::OrderSide;

/// Body for `POST /Crypto/{Exchange}/{Trade}/PlaceLimitOrder`
/// (credentials are injected by the client).
///
/// Exactly one of `quote_quantity`/`base_quantity` is meaningful per venue
/// convention; the other is sent as zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitOrderRequest {
    /// Currency pair, e.g. `BTC-USDT`
    pub symbol: String,
    /// Caller-chosen order identifier
    #[serde(rename = "ClientOrderId")]
    pub client_order_id: String,
    /// Limit price in quote currency
    pub price: Decimal,
    /// Order size expressed in quote currency
    pub quote_quantity: Decimal,
    /// Order size expressed in base currency
    pub base_quantity: Decimal,
    /// Buy or sell
    pub side: OrderSide,
}

/// Body for `POST /Crypto/{Exchange}/{Trade}/PlaceMarketOrder`.
///
/// `leverage` and `contract` only matter on futures markets; spot orders
/// send zero for both.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOrderRequest {
    /// Currency pair, e.g. `BTC-USDT`
    pub symbol: String,
    /// Caller-chosen order identifier
    #[serde(rename = "ClientOrderId")]
    pub client_order_id: String,
    /// Reference price in quote currency
    pub price: Decimal,
    /// Order size expressed in quote currency
    pub quote_quantity: Decimal,
    /// Order size expressed in base currency
    pub base_quantity: Decimal,
    /// Leverage multiplier (futures)
    pub leverage: u32,
    /// Contract selector (futures)
    pub contract: u32,
    /// Buy or sell
    pub side: OrderSide,
}

/// Body for the trigger-order endpoints `PlaceLimitStopLossOrder` and
/// `PlaceLimitTakeProfitOrder`, which share one request shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopOrderRequest {
    /// Currency pair, e.g. `BTC-USDT`
    pub symbol: String,
    /// Order size in base currency
    pub quantity: Decimal,
    /// Caller-chosen order identifier
    #[serde(rename = "ClientOrderId")]
    pub client_order_id: String,
    /// Trigger price
    pub stop_price: Decimal,
    /// Price of the order placed once triggered (zero lets the venue pick)
    pub order_price: Decimal,
    /// Limit price
    pub price: Decimal,
    /// Trailing offset; zero disables trailing
    pub trailing_delta: Decimal,
    /// Buy or sell
    pub side: OrderSide,
}

/// Body for `POST /Crypto/{Exchange}/{Trade}/CancelOrder`.
///
/// The gateway expects both identifiers as strings; venues match on
/// whichever one they support.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrderRequest {
    /// Currency pair, e.g. `BTC-USDT`
    pub symbol: String,
    /// Venue-assigned order identifier
    pub order_id: String,
    /// Caller-chosen order identifier
    pub client_order_id: String,
}

// ============================================================================
// Same-wallet batch items
// ============================================================================

/// One order of a `PlaceBatchLimitOrders` call (single wallet, many orders).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchLimitOrderItem {
    /// Currency pair, e.g. `BTC-USDT`
    pub symbol: String,
    /// Caller-chosen order identifier
    pub client_order_id: String,
    /// Limit price in quote currency
    pub price: Decimal,
    /// Order size expressed in quote currency
    pub quote_quantity: Decimal,
    /// Order size expressed in base currency
    pub base_quantity: Decimal,
    /// Buy or sell
    pub side: OrderSide,
}

/// One order of a `PlaceBatchMarketOrders` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchMarketOrderItem {
    /// Currency pair, e.g. `BTC-USDT`
    pub symbol: String,
    /// Order size expressed in quote currency
    pub quote_quantity: Decimal,
    /// Order size expressed in base currency
    pub base_quantity: Decimal,
    /// Caller-chosen order identifier
    pub client_order_id: String,
    /// Buy or sell
    pub side: OrderSide,
}

/// One cancel of a `CancelBatchOrders` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchCancelItem {
    /// Currency pair, e.g. `BTC-USDT`
    pub symbol: String,
    /// Caller-chosen order identifier
    pub client_order_id: String,
    /// Venue-assigned order identifier
    pub order_id: String,
}

// ============================================================================
// Per-wallet ("for people") items
// ============================================================================

/// One order of a `PlaceLimitOrderForPeople` call.
///
/// Each entry carries its own wallet credentials, so one call can fan an
/// order out across many accounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletLimitOrder {
    /// Credentials of the wallet placing this order
    #[serde(flatten)]
    pub credentials: ApiCredentials,
    /// Buy or sell
    pub side: OrderSide,
    /// Limit price in quote currency
    pub price: Decimal,
    /// Order size expressed in base currency
    pub base_quantity: Decimal,
    /// Order size expressed in quote currency
    pub quote_quantity: Decimal,
    /// Caller-chosen order identifier
    #[serde(rename = "cliOrId")]
    pub client_order_id: String,
    /// Currency pair, e.g. `BTC-USDT`
    pub symbol: String,
}

/// One order of a `PlaceMarketOrderForPeople` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletMarketOrder {
    /// Currency pair, e.g. `BTC-USDT`
    pub symbol: String,
    /// Order size expressed in quote currency
    pub quote_quantity: Decimal,
    /// Order size expressed in base currency
    pub base_quantity: Decimal,
    /// Caller-chosen order identifier
    #[serde(rename = "ClientOrderId")]
    pub client_order_id: String,
    /// Buy or sell
    pub side: OrderSide,
    /// Credentials of the wallet placing this order
    #[serde(flatten)]
    pub credentials: ApiCredentials,
}

/// One cancel of a `CancelBatchOrdersForPeople` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletCancel {
    /// Currency pair, e.g. `BTC-USDT`
    pub symbol: String,
    /// Venue-assigned order identifier; empty to match on the client id
    pub order_id: String,
    /// Caller-chosen order identifier
    pub client_order_id: String,
    /// Credentials of the wallet whose order is cancelled
    #[serde(flatten)]
    pub credentials: ApiCredentials,
}
