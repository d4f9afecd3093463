//! Shared type definitions for the SBEE SDK.
//!
//! The gateway addresses exchanges, market kinds, order sides and candle
//! intervals by fixed server-side spellings. This module models each of those
//! vocabularies as a closed enum so an invalid value cannot reach the wire.

use serde::{Deserialize, Serialize};

// ============================================================================
// Exchange Enum
// ============================================================================

/// Upstream trading venue addressed through the gateway.
///
/// The wire form is the venue spelling the gateway routes on (embedded in
/// URL path segments and in multi-market request bodies).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Exchange {
    Biconomy,
    Binance,
    #[serde(rename = "BinanceUS")]
    BinanceUs,
    Bitfinex,
    Bitget,
    BitMart,
    Bybit,
    CoinW,
    CryptoCom,
    #[serde(rename = "GateIO")]
    GateIo,
    Huobi,
    Kraken,
    KuCoin,
    Mexc,
    Okx,
    WhiteBit,
}

impl Exchange {
    /// Get the gateway's spelling of the venue name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Biconomy => "Biconomy",
            Self::Binance => "Binance",
            Self::BinanceUs => "BinanceUS",
            Self::Bitfinex => "Bitfinex",
            Self::Bitget => "Bitget",
            Self::BitMart => "BitMart",
            Self::Bybit => "Bybit",
            Self::CoinW => "CoinW",
            Self::CryptoCom => "CryptoCom",
            Self::GateIo => "GateIO",
            Self::Huobi => "Huobi",
            Self::Kraken => "Kraken",
            Self::KuCoin => "KuCoin",
            Self::Mexc => "Mexc",
            Self::Okx => "Okx",
            Self::WhiteBit => "WhiteBit",
        }
    }
}

impl std::fmt::Display for Exchange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// TradeType Enum
// ============================================================================

/// Market kind on the addressed exchange.
///
/// Selects between spot and futures semantics; appears as a URL path segment
/// on every per-exchange and multi-market endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeType {
    #[default]
    Spot,
    Futures,
}

impl TradeType {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spot => "Spot",
            Self::Futures => "Futures",
        }
    }
}

impl std::fmt::Display for TradeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// OrderSide Enum
// ============================================================================

/// Order side (wire form `BUY` / `SELL`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderSide {
    /// Buy the base asset with the quote asset
    #[serde(rename = "BUY")]
    Buy,
    /// Sell the base asset for the quote asset
    #[serde(rename = "SELL")]
    Sell,
}

impl OrderSide {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
        }
    }
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// KlineInterval Enum
// ============================================================================

/// Candlestick interval for kline queries.
///
/// Used by both the raw kline endpoint and the indicator-overlay
/// (kline formation) endpoint.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum KlineInterval {
    /// 1 minute candles
    #[default]
    #[serde(rename = "1m")]
    OneMinute,
    /// 5 minute candles
    #[serde(rename = "5m")]
    FiveMinutes,
    /// 15 minute candles
    #[serde(rename = "15m")]
    FifteenMinutes,
    /// 30 minute candles
    #[serde(rename = "30m")]
    ThirtyMinutes,
    /// 1 hour candles
    #[serde(rename = "1h")]
    OneHour,
    /// 4 hour candles
    #[serde(rename = "4h")]
    FourHours,
    /// 1 day candles
    #[serde(rename = "1d")]
    OneDay,
    /// 1 month candles
    #[serde(rename = "1M")]
    OneMonth,
}

impl KlineInterval {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneMinute => "1m",
            Self::FiveMinutes => "5m",
            Self::FifteenMinutes => "15m",
            Self::ThirtyMinutes => "30m",
            Self::OneHour => "1h",
            Self::FourHours => "4h",
            Self::OneDay => "1d",
            Self::OneMonth => "1M",
        }
    }
}

impl std::fmt::Display for KlineInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
