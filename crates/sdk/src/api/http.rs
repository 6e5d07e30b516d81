use std::time::Duration;

use bytes::Bytes;
use reqwest::{
    header::{AUTHORIZATION, CONTENT_TYPE},
    Client,
};
use tmdb_core::{ApiClientConfig, AuthScheme, Endpoint, NormalizedConfig};
use tracing::{debug, warn};

use crate::api::types::{ApiResult, BadRequestError};

const JSON_CONTENT_TYPE: &str = "application/json;charset=utf-8";

/// Owns the HTTP transport and the normalized configuration used to address the service.
pub struct HttpClient {
    client: Client,
    config: ApiClientConfig,
    normalized: NormalizedConfig,
}

impl HttpClient {
    /// Builds the transport with a per-request timeout. A timeout of `0` disables it.
    pub fn new(config: ApiClientConfig, timeout_seconds: u64) -> ApiResult<Self> {
        let mut builder = Client::builder();
        if timeout_seconds > 0 {
            builder = builder.timeout(Duration::from_secs(timeout_seconds));
        }

        let normalized = config.normalize();
        if normalized.auth_scheme() == AuthScheme::Unauthenticated {
            warn!(
                "API version '{}' is neither 3 nor 4, requests will be sent without the API key",
                normalized.version()
            );
        }

        Ok(Self { client: builder.build()?, config, normalized })
    }

    pub fn config(&self) -> &ApiClientConfig {
        &self.config
    }

    pub fn normalized(&self) -> &NormalizedConfig {
        &self.normalized
    }

    /// Formats the absolute URL for a rendered resource path.
    ///
    /// Version 3 merges `api_key` into the query string ahead of any parameters the
    /// endpoint carries. Every other version appends the path untouched.
    fn build_url_for(&self, resource: &str) -> String {
        let path = resource.trim_start_matches('/');

        if self.normalized.auth_scheme() != AuthScheme::QueryKey {
            return format!("{}/{}", self.normalized.base_url(), path);
        }

        let mut query = format!("api_key={}", self.normalized.key());
        let path = match path.split_once('?') {
            Some((path, existing)) => {
                query.push('&');
                query.push_str(existing);
                path
            }
            None => path,
        };

        format!("{}/{}?{}", self.normalized.base_url(), path, query)
    }

    pub fn build_url(&self, endpoint: &dyn Endpoint) -> String {
        self.build_url_for(&endpoint.render())
    }

    /// Strips the API key out of a URL before it is logged.
    fn redact(&self, url: &str) -> String {
        let key = self.normalized.key();
        if key.is_empty() {
            return url.to_string();
        }
        url.replace(&format!("api_key={}", key), "api_key=***")
    }

    /// Submits a GET for the endpoint and returns the raw response body.
    pub async fn get(&self, endpoint: &dyn Endpoint) -> ApiResult<Bytes> {
        let resource = endpoint.render();
        let url = self.build_url_for(&resource);

        let mut request = self.client.get(&url);
        if self.normalized.auth_scheme() == AuthScheme::BearerToken {
            request = request.header(AUTHORIZATION, self.normalized.bearer_token());
        }
        request = request.header(CONTENT_TYPE, JSON_CONTENT_TYPE);

        debug!("GET {}", self.redact(&url));
        let response = request.send().await?;

        let status = response.status();
        debug!("GET {} -> {}", resource, status);

        if status.as_u16() >= 400 {
            // drain so the connection goes back to the pool
            if let Err(e) = response.bytes().await {
                debug!("GET {} -> failed to drain error body: {}", resource, e);
            }
            return Err(BadRequestError::new(resource, status.as_u16()).into());
        }

        Ok(response.bytes().await?)
    }
}
