//! Kline indicator-overlay (formation) request types.

use serde::{Deserialize, Serialize};

use crate::shared::KlineInterval;

/// One technical-indicator overlay computed by the gateway alongside the
/// candles, e.g. `MAX`, `DX` or `MACD`.
///
/// Which parameter fields apply depends on the formation: most take a
/// `TimePeriod` (and optionally a `Source` series such as `close`), while
/// `MACD` takes the fast/slow/signal period triple.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Indicator {
    /// Formation name as listed by the gateway docs, e.g. `MACD`
    #[serde(rename = "Formation")]
    pub formation: String,
    /// Lookback period, for single-period formations
    #[serde(rename = "TimePeriod", default, skip_serializing_if = "Option::is_none")]
    pub time_period: Option<u32>,
    /// MACD fast period
    #[serde(rename = "FastPeriod", default, skip_serializing_if = "Option::is_none")]
    pub fast_period: Option<u32>,
    /// MACD slow period
    #[serde(rename = "SlowPeriod", default, skip_serializing_if = "Option::is_none")]
    pub slow_period: Option<u32>,
    /// MACD signal period
    #[serde(rename = "SignalPeriod", default, skip_serializing_if = "Option::is_none")]
    pub signal_period: Option<u32>,
    /// Candle series the formation reads, e.g. `close`
    #[serde(rename = "Source", default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Indicator {
    /// Single-period formation over a source series, e.g. `MAX` over `close`.
    pub fn over_period(
        formation: impl Into<String>,
        time_period: u32,
        source: impl Into<String>,
    ) -> Self {
        Self {
            formation: formation.into(),
            time_period: Some(time_period),
            source: Some(source.into()),
            ..Self::default()
        }
    }

    /// Single-period formation without an explicit source, e.g. `DX`.
    pub fn with_period(formation: impl Into<String>, time_period: u32) -> Self {
        Self {
            formation: formation.into(),
            time_period: Some(time_period),
            ..Self::default()
        }
    }

    /// MACD with the fast/slow/signal period triple over a source series.
    pub fn macd(fast: u32, slow: u32, signal: u32, source: impl Into<String>) -> Self {
        Self {
            formation: "MACD".to_string(),
            fast_period: Some(fast),
            slow_period: Some(slow),
            signal_period: Some(signal),
            source: Some(source.into()),
            ..Self::default()
        }
    }
}

/// Body for `POST /Crypto/{Exchange}/{Trade}/KlineFormation`.
///
/// Absent time bounds are sent as JSON `null`, meaning "no bound".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KlineFormationRequest {
    /// Currency pair, e.g. `BTC-USDT`
    pub symbol: String,
    /// Candle interval
    pub interval: KlineInterval,
    /// Maximum number of candles
    pub limit: u32,
    /// Window start, epoch milliseconds
    pub start_time: Option<u64>,
    /// Window end, epoch milliseconds
    pub end_time: Option<u64>,
    /// Indicator overlays to compute
    pub formations: Vec<Indicator>,
}

impl KlineFormationRequest {
    /// Create a request over the most recent `limit` candles.
    pub fn new(
        symbol: impl Into<String>,
        interval: KlineInterval,
        limit: u32,
        formations: Vec<Indicator>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            interval,
            limit,
            start_time: None,
            end_time: None,
            formations,
        }
    }

    /// Restrict the request to a time window (epoch milliseconds).
    pub fn with_time_range(mut self, start_time: u64, end_time: u64) -> Self {
        self.start_time = Some(start_time);
        self.end_time = Some(end_time);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_wire_names() {
        let json = serde_json::to_value(Indicator::macd(12, 26, 9, "close")).unwrap();
        assert_eq!(json["Formation"], "MACD");
        assert_eq!(json["FastPeriod"], 12);
        assert_eq!(json["SlowPeriod"], 26);
        assert_eq!(json["SignalPeriod"], 9);
        assert_eq!(json["Source"], "close");
        assert!(json.get("TimePeriod").is_none());
    }

    #[test]
    fn test_unbounded_window_serializes_null() {
        let request = KlineFormationRequest::new(
            "BTC-USDT",
            KlineInterval::OneHour,
            100,
            vec![Indicator::with_period("DX", 14)],
        );
        let json = serde_json::to_value(&request).unwrap();
        assert!(json["startTime"].is_null());
        assert!(json["endTime"].is_null());
        assert_eq!(json["interval"], "1h");
    }
}
