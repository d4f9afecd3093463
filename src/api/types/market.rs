//! Multi-market query types for the SBEE REST API.

use serde::{Deserialize, Serialize};

use crate::shared::Exchange;

/// Body for the cross-exchange endpoints
/// `/Crypto/MultiMarket/{Trade}/{OrderBook,RecentTrades,SteppedOrderBook}`.
///
/// The gateway aggregates the answer over every listed exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiMarketQuery {
    /// Currency pair, e.g. `BTC-USDT`
    pub symbol: String,
    /// Depth per exchange (price levels or trades)
    pub depth: u32,
    /// Price-level rounding, in decimal places; only the aggregated order
    /// book honors it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,
    /// Exchanges to aggregate over
    pub exchanges: Vec<Exchange>,
}

impl MultiMarketQuery {
    /// Create a query over the given exchanges.
    pub fn new(symbol: impl Into<String>, depth: u32, exchanges: Vec<Exchange>) -> Self {
        Self {
            symbol: symbol.into(),
            depth,
            precision: None,
            exchanges,
        }
    }

    /// Round aggregated price levels to `precision` decimal places.
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = Some(precision);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precision_omitted_when_unset() {
        let query = MultiMarketQuery::new("BTC-USDT", 30, vec![Exchange::Binance]);
        let json = serde_json::to_value(&query).unwrap();
        assert!(json.get("precision").is_none());
        assert_eq!(json["exchanges"][0], "Binance");
    }

    #[test]
    fn test_precision_serialized_when_set() {
        let query =
            MultiMarketQuery::new("ADA-USDT", 50, vec![Exchange::Kraken]).with_precision(3);
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["precision"], 3);
    }
}
