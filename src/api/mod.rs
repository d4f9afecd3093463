//! REST API client module for the SBEE gateway.
//!
//! This module provides the HTTP client for every gateway endpoint: market
//! data, account data, order placement and cancellation (single, batch, and
//! per-wallet batch), multi-exchange aggregation, and the info/news/country
//! listings.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use sbee::api::SbeeApiClient;
//! use sbee::shared::{Exchange, TradeType};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SbeeApiClient::new("https://api.sbee.io/api", "<bearer token>")?;
//!
//!     // Public market data
//!     let book = client
//!         .order_book(Exchange::Binance, TradeType::Spot, "BTC-USDT", 20)
//!         .await?;
//!     println!("order book: {book}");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! All methods return `ApiResult<serde_json::Value>`, an alias for
//! `Result<serde_json::Value, ApiError>`. The gateway's response body is
//! passed through unparsed beyond JSON decoding; its field schema is owned
//! by the server:
//!
//! ```rust,ignore
//! use sbee::api::{ApiError, SbeeApiClient};
//!
//! match client.tickers(exchange, trade, "BTC-USDT").await {
//!     Ok(tickers) => println!("{tickers}"),
//!     Err(ApiError::Status { status, body }) => eprintln!("gateway said {status}: {body}"),
//!     Err(e) => eprintln!("request failed: {e}"),
//! }
//! ```
//!
//! # Private Endpoints
//!
//! Operations that act on a wallet take [`ApiCredentials`] for the addressed
//! exchange alongside the gateway bearer token:
//!
//! ```rust,ignore
//! use rust_decimal::Decimal;
//! use sbee::api::{ApiCredentials, LimitOrderRequest, SbeeApiClient};
//! use sbee::shared::{Exchange, OrderSide, TradeType};
//!
//! let credentials = ApiCredentials::without_pass("key…", "secret…");
//! let order = LimitOrderRequest {
//!     symbol: "BTC-USDT".to_string(),
//!     client_order_id: "ID3231".to_string(),
//!     price: Decimal::new(16000, 0),
//!     quote_quantity: Decimal::ZERO,
//!     base_quantity: Decimal::new(5, 3),
//!     side: OrderSide::Buy,
//! };
//!
//! let response = client
//!     .place_limit_order(Exchange::Binance, TradeType::Spot, &credentials, &order)
//!     .await?;
//! ```

pub mod client;
pub mod error;
pub mod types;

// Re-export main types for convenience
pub use client::{SbeeApiClient, SbeeApiClientBuilder};
pub use error::{ApiError, ApiResult};
pub use types::*;
