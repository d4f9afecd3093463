//! # SBEE Rust SDK
//!
//! A Rust SDK for the SBEE exchange engine — an intermediary service that
//! connects applications to many cryptocurrency exchanges through one REST
//! API. A free bearer token from <https://www.sbee.io> authenticates every
//! request; the exchange to operate on is named per call.
//!
//! ## Modules
//!
//! - [`api`]: REST client for market data, account data, orders, batch and
//!   per-wallet batch orders, multi-exchange aggregation, news and listings
//! - [`shared`]: closed enums for the gateway's parameter vocabularies
//!   (exchange, trade type, order side, kline interval)
//! - [`network`]: gateway URL constants
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sbee::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SbeeApiClient::new(DEFAULT_API_URL, "<bearer token>")?;
//!
//!     // Exchange server time
//!     let time = client.system_time(Exchange::Binance).await?;
//!     println!("{time}");
//!
//!     // Candles with a MACD overlay computed server-side
//!     let request = KlineFormationRequest::new(
//!         "BTC-USDT",
//!         KlineInterval::OneHour,
//!         100,
//!         vec![Indicator::macd(12, 26, 9, "close")],
//!     );
//!     let candles = client
//!         .kline_formation(Exchange::Binance, TradeType::Spot, &request)
//!         .await?;
//!     println!("{candles}");
//!
//!     Ok(())
//! }
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// REST API client module for the SBEE gateway.
pub mod api;

/// Shared enums for the gateway's parameter vocabularies.
pub mod shared;

/// Network URL constants.
pub mod network;

// ============================================================================
// PRELUDE
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use sbee::prelude::*;
/// ```
pub mod prelude {
    // Client
    pub use crate::api::{ApiError, ApiResult, SbeeApiClient, SbeeApiClientBuilder};

    // Request types
    pub use crate::api::{
        ApiCredentials, BatchCancelItem, BatchLimitOrderItem, BatchMarketOrderItem,
        CancelOrderRequest, Indicator, KlineFormationRequest, LimitOrderRequest,
        MarketOrderRequest, MultiMarketQuery, OrderHistoryQuery, SetLeverageRequest,
        StopOrderRequest, SymbolQuery, WalletBalanceQuery, WalletCancel,
        WalletLimitOrder, WalletMarketOrder,
    };

    // Shared enums
    pub use crate::shared::{Exchange, KlineInterval, OrderSide, TradeType};

    // Network constants
    pub use crate::network::DEFAULT_API_URL;
}
