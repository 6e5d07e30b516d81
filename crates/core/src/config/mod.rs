mod normalized;
pub use normalized::{AuthScheme, NormalizedConfig};

mod read;
pub use read::{read_config, ReadConfigError};

use serde::{Deserialize, Serialize};

/// The `api` section of the client configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ApiConfig {
    pub baseurl: String,
    pub version: String,
    pub key: String,
}

/// The `account` section of the client configuration.
///
/// Parsed and carried with the client, nothing reads it yet.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AccountConfig {
    pub username: String,
    pub password: String,
}

/// Client configuration as it appears in the JSON config document.
///
/// ```json
/// {
///   "api": { "baseurl": "https://api.themoviedb.org", "version": "/3", "key": "..." },
///   "account": { "username": "...", "password": "..." }
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ApiClientConfig {
    pub api: ApiConfig,
    pub account: AccountConfig,
}

impl ApiClientConfig {
    /// Parses a configuration document from raw JSON bytes.
    pub fn from_slice(raw: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(raw)
    }

    /// Trims and joins the configured values into the form used to build requests.
    pub fn normalize(&self) -> NormalizedConfig {
        NormalizedConfig::new(&self.api)
    }
}
