//! Request types for the SBEE REST API.
//!
//! The gateway's responses are passed through as raw JSON
//! ([`serde_json::Value`]); only the request side is typed, organized here
//! by category.

pub mod account;
pub mod credentials;
pub mod kline;
pub mod market;
pub mod order;

// Re-export all types for convenience
pub use account::*;
pub use credentials::*;
pub use kline::*;
pub use market::*;
pub use order::*;
