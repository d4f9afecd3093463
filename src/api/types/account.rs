//! Account-related request types: balances, order history, leverage.

use serde::{Deserialize, Serialize};

use super::credentials::ApiCredentials;

/// Single-symbol request body, used by `TradingBalances` (where an empty
/// symbol reads every cash balance in the wallet) and
/// `CancelOrdersBySymbol`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolQuery {
    /// Currency symbol or pair, e.g. `USDT` or `BTC-USDT`
    pub symbol: String,
}

/// One wallet's balance query for `TradingBalancesForPeople`.
///
/// Each entry carries its own exchange credentials, so one call can read
/// balances across many accounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletBalanceQuery {
    /// Currency pair or symbol to read, e.g. `BTC-USDT`
    pub symbol: String,
    /// Credentials of the wallet being read
    #[serde(flatten)]
    pub credentials: ApiCredentials,
}

/// Body for `POST /Crypto/{Exchange}/{Trade}/OrderHistory`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderHistoryQuery {
    /// Currency pair, e.g. `BTC-USDT`
    pub symbol: String,
    /// Order-state filter as a server-defined comma list,
    /// e.g. `NEW,ALL,FILLED,CANCELED`
    pub state: String,
}

/// Body for `POST /Crypto/{Exchange}/{Trade}/SetLeverage`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetLeverageRequest {
    /// Contract symbol, e.g. `BTC-USDT`
    pub symbol: String,
    /// Leverage multiplier to apply
    pub leverage: u32,
}
