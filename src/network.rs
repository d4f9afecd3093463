//! Network URL constants for the SBEE SDK.

/// Default REST API base URL for the SBEE gateway.
pub const DEFAULT_API_URL: &str = "https://api.sbee.io/api";

/// Documentation portal for the gateway's endpoint reference.
pub const DOC_URL: &str = "https://doc.sbee.io";
