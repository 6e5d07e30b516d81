use super::ApiConfig;

/// How the API key is presented to the service, chosen by the configured version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// `api_key=<key>` is merged into the query string (API version 3).
    QueryKey,
    /// `Authorization: Bearer <key>` header (API version 4).
    BearerToken,
    /// Any other version: the key is not sent at all.
    Unauthenticated,
}

impl AuthScheme {
    pub fn from_version(version: &str) -> Self {
        match version {
            "3" => AuthScheme::QueryKey,
            "4" => AuthScheme::BearerToken,
            _ => AuthScheme::Unauthenticated,
        }
    }
}

/// Configuration values trimmed and joined once, ready to build request URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedConfig {
    base_url: String,
    key: String,
    version: String,
    auth_scheme: AuthScheme,
}

impl NormalizedConfig {
    pub fn new(api: &ApiConfig) -> Self {
        let version = api.version.trim_matches('/').to_string();
        let base_url = format!("{}/{}", api.baseurl.trim_matches('/'), version);

        Self {
            base_url,
            key: api.key.clone(),
            auth_scheme: AuthScheme::from_version(&version),
            version,
        }
    }

    /// Base URL with the version segment joined on, e.g. `https://api.themoviedb.org/3`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn auth_scheme(&self) -> AuthScheme {
        self.auth_scheme
    }

    pub fn bearer_token(&self) -> String {
        format!("Bearer {}", self.key)
    }
}
