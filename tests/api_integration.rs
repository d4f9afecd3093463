//! Integration tests for the SBEE REST API client.
//!
//! These tests verify the wire forms of the shared enums and request types —
//! the gateway matches on exact spellings and field names, so the serialized
//! shapes are load-bearing.

use rust_decimal::Decimal;
use sbee::prelude::*;

// =============================================================================
// Shared enum wire forms
// =============================================================================

mod shared_enums {
    use super::*;

    #[test]
    fn test_exchange_spellings() {
        assert_eq!(Exchange::Binance.as_str(), "Binance");
        assert_eq!(Exchange::BinanceUs.as_str(), "BinanceUS");
        assert_eq!(Exchange::GateIo.as_str(), "GateIO");
        assert_eq!(Exchange::CryptoCom.as_str(), "CryptoCom");
        assert_eq!(Exchange::WhiteBit.as_str(), "WhiteBit");
    }

    #[test]
    fn test_exchange_serde_matches_as_str() {
        for exchange in [
            Exchange::Biconomy,
            Exchange::Binance,
            Exchange::BinanceUs,
            Exchange::Bitfinex,
            Exchange::Bitget,
            Exchange::BitMart,
            Exchange::Bybit,
            Exchange::CoinW,
            Exchange::CryptoCom,
            Exchange::GateIo,
            Exchange::Huobi,
            Exchange::Kraken,
            Exchange::KuCoin,
            Exchange::Mexc,
            Exchange::Okx,
            Exchange::WhiteBit,
        ] {
            let json = serde_json::to_value(exchange).unwrap();
            assert_eq!(json, exchange.as_str());
        }
    }

    #[test]
    fn test_trade_type_spellings() {
        assert_eq!(TradeType::Spot.as_str(), "Spot");
        assert_eq!(TradeType::Futures.as_str(), "Futures");
        assert_eq!(TradeType::default(), TradeType::Spot);
    }

    #[test]
    fn test_order_side_wire_form() {
        assert_eq!(serde_json::to_value(OrderSide::Buy).unwrap(), "BUY");
        assert_eq!(serde_json::to_value(OrderSide::Sell).unwrap(), "SELL");

        let side: OrderSide = serde_json::from_str(r#""SELL""#).unwrap();
        assert_eq!(side, OrderSide::Sell);
    }

    #[test]
    fn test_kline_interval_wire_form() {
        assert_eq!(KlineInterval::OneMinute.as_str(), "1m");
        assert_eq!(KlineInterval::ThirtyMinutes.as_str(), "30m");
        // Minutes and months differ only by case on the wire.
        assert_eq!(KlineInterval::OneMonth.as_str(), "1M");

        let interval: KlineInterval = serde_json::from_str(r#""4h""#).unwrap();
        assert_eq!(interval, KlineInterval::FourHours);
    }
}

// =============================================================================
// Credential types
// =============================================================================

mod credential_types {
    use super::*;

    #[test]
    fn test_credentials_wire_names() {
        let credentials = ApiCredentials::new("my-key", "my-secret", "my-pass");
        let json = serde_json::to_value(&credentials).unwrap();
        assert_eq!(json["apiKey"], "my-key");
        assert_eq!(json["apiSecret"], "my-secret");
        assert_eq!(json["apiPass"], "my-pass");
    }

    #[test]
    fn test_without_pass_sends_empty_string() {
        let credentials = ApiCredentials::without_pass("my-key", "my-secret");
        let json = serde_json::to_value(&credentials).unwrap();
        assert_eq!(json["apiPass"], "");
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let credentials = ApiCredentials::new("tjN8nJZjob", "ueLdQVF928", "hunter2");
        let printed = format!("{credentials:?}");
        assert!(!printed.contains("ueLdQVF928"));
        assert!(!printed.contains("hunter2"));
        // A short key prefix stays visible for debugging.
        assert!(printed.contains("tjN8"));
        assert!(!printed.contains("tjN8nJZjob"));
    }
}

// =============================================================================
// Order request types
// =============================================================================

mod order_types {
    use super::*;

    #[test]
    fn test_limit_order_wire_names() {
        let order = LimitOrderRequest {
            symbol: "BTC-USDT".to_string(),
            client_order_id: "ID3231".to_string(),
            price: Decimal::new(16000, 0),
            quote_quantity: Decimal::ZERO,
            base_quantity: Decimal::new(5, 3),
            side: OrderSide::Buy,
        };
        let json = serde_json::to_value(&order).unwrap();
        // Single-order placement capitalizes the client id field.
        assert_eq!(json["ClientOrderId"], "ID3231");
        assert_eq!(json["price"], "16000");
        assert_eq!(json["quoteQuantity"], "0");
        assert_eq!(json["baseQuantity"], "0.005");
        assert_eq!(json["side"], "BUY");
    }

    #[test]
    fn test_market_order_carries_futures_fields() {
        let order = MarketOrderRequest {
            symbol: "BTC-USDT".to_string(),
            client_order_id: "ID326511".to_string(),
            price: Decimal::new(26000, 0),
            quote_quantity: Decimal::new(15, 0),
            base_quantity: Decimal::ZERO,
            leverage: 5,
            contract: 1,
            side: OrderSide::Buy,
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["leverage"], 5);
        assert_eq!(json["contract"], 1);
    }

    #[test]
    fn test_stop_order_wire_names() {
        let order = StopOrderRequest {
            symbol: "BTC-USDT".to_string(),
            quantity: Decimal::new(5, 4),
            client_order_id: "ID653".to_string(),
            stop_price: Decimal::new(28000, 0),
            order_price: Decimal::ZERO,
            price: Decimal::new(27500, 0),
            trailing_delta: Decimal::ZERO,
            side: OrderSide::Buy,
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["stopPrice"], "28000");
        assert_eq!(json["orderPrice"], "0");
        assert_eq!(json["trailingDelta"], "0");
        assert_eq!(json["quantity"], "0.0005");
    }

    #[test]
    fn test_cancel_request_uses_lowercase_client_id() {
        let request = CancelOrderRequest {
            symbol: "BTC-USDT".to_string(),
            order_id: "43523123123".to_string(),
            client_order_id: "ID3421".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["orderId"], "43523123123");
        assert_eq!(json["clientOrderId"], "ID3421");
        assert!(json.get("ClientOrderId").is_none());
    }

    #[test]
    fn test_wallet_limit_order_uses_cli_or_id() {
        let order = WalletLimitOrder {
            credentials: ApiCredentials::without_pass("key", "secret"),
            side: OrderSide::Buy,
            price: Decimal::new(10000, 0),
            base_quantity: Decimal::new(1, 3),
            quote_quantity: Decimal::ZERO,
            client_order_id: "UD01".to_string(),
            symbol: "BTC-USDT".to_string(),
        };
        let json = serde_json::to_value(&order).unwrap();
        // The per-wallet limit batch is the one endpoint using this spelling.
        assert_eq!(json["cliOrId"], "UD01");
        // Credentials flatten into the same object.
        assert_eq!(json["apiKey"], "key");
        assert_eq!(json["apiSecret"], "secret");
    }

    #[test]
    fn test_wallet_market_order_round_trip() {
        let order = WalletMarketOrder {
            symbol: "BTC-USDT".to_string(),
            quote_quantity: Decimal::new(11, 0),
            base_quantity: Decimal::ZERO,
            client_order_id: "UD01".to_string(),
            side: OrderSide::Buy,
            credentials: ApiCredentials::new("k", "s", "p"),
        };
        let json = serde_json::to_string(&order).unwrap();
        let parsed: WalletMarketOrder = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.client_order_id, order.client_order_id);
        assert_eq!(parsed.credentials, order.credentials);
    }
}

// =============================================================================
// Account request types
// =============================================================================

mod account_types {
    use super::*;

    #[test]
    fn test_wallet_balance_query_flattens_credentials() {
        let query = WalletBalanceQuery {
            symbol: "XRP-USDT".to_string(),
            credentials: ApiCredentials::without_pass("key", "secret"),
        };
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["symbol"], "XRP-USDT");
        assert_eq!(json["apiKey"], "key");
    }

    #[test]
    fn test_order_history_state_passes_through() {
        let query = OrderHistoryQuery {
            symbol: "BTC-USDT".to_string(),
            state: "NEW,FILLED".to_string(),
        };
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["state"], "NEW,FILLED");
    }
}
