//! Wallet credential types for the private (signed) gateway endpoints.

use serde::{Deserialize, Serialize};

/// Exchange wallet credentials copied into private request bodies.
///
/// These authenticate the caller to the *addressed exchange*; the bearer
/// token on the request authenticates the caller to the gateway itself.
/// Venues without a passphrase take an empty `api_pass`.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCredentials {
    /// Exchange API key
    pub api_key: String,
    /// Exchange API secret
    pub api_secret: String,
    /// Exchange API passphrase
    pub api_pass: String,
}

impl ApiCredentials {
    /// Create credentials for a venue that uses a passphrase.
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        api_pass: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            api_pass: api_pass.into(),
        }
    }

    /// Create credentials for a venue without a passphrase.
    pub fn without_pass(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self::new(api_key, api_secret, "")
    }
}

// Manual Debug: key material must not leak through logs or panic output.
impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let key_preview: String = self.api_key.chars().take(4).collect();
        f.debug_struct("ApiCredentials")
            .field("api_key", &format_args!("{}…", key_preview))
            .field("api_secret", &"<redacted>")
            .field("api_pass", &"<redacted>")
            .finish()
    }
}
