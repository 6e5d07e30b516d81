use std::{io::Read, path::Path, sync::Arc};

use async_trait::async_trait;
use bytes::Bytes;
use tmdb_core::{read_config, ApiClientConfig, Endpoint, NormalizedConfig};

use crate::api::{http::HttpClient, ApiResult, ApiSdkError, MovieApi, SearchApi};

/// The operations a TMDB client offers, kept as a trait so callers can swap in a test double.
#[async_trait]
pub trait ApiClientContract: Send + Sync {
    /// Formats the absolute request URL for an endpoint.
    fn build_url(&self, endpoint: &dyn Endpoint) -> String;

    /// Issues a GET for an endpoint and returns the raw response body.
    async fn get(&self, endpoint: &dyn Endpoint) -> ApiResult<Bytes>;
}

#[derive(Clone)]
pub struct Client {
    http: Arc<HttpClient>,
    pub movie: MovieApi,
    pub search: SearchApi,
}

impl Client {
    /// Create a client from a JSON configuration source.
    ///
    /// The whole source is read before parsing. `timeout_seconds` bounds every request,
    /// `0` means no timeout.
    pub fn new<R: Read>(mut config_source: R, timeout_seconds: u64) -> ApiResult<Self> {
        let mut raw = Vec::new();
        config_source.read_to_end(&mut raw).map_err(ApiSdkError::ConfigRead)?;

        let config = ApiClientConfig::from_slice(&raw).map_err(ApiSdkError::ConfigParse)?;

        Self::from_config(config, timeout_seconds)
    }

    /// Create a client from an already parsed configuration.
    pub fn from_config(config: ApiClientConfig, timeout_seconds: u64) -> ApiResult<Self> {
        let http = Arc::new(HttpClient::new(config, timeout_seconds)?);

        Ok(Self {
            movie: MovieApi::new(Arc::clone(&http)),
            search: SearchApi::new(Arc::clone(&http)),
            http,
        })
    }

    /// Create a client from a JSON config file, resolving `${VAR}` placeholders from the
    /// environment.
    pub fn from_file(path: &Path, timeout_seconds: u64) -> ApiResult<Self> {
        Self::from_config(read_config(path)?, timeout_seconds)
    }

    /// The configuration as it was parsed, account section included.
    pub fn config(&self) -> &ApiClientConfig {
        self.http.config()
    }

    pub fn normalized_config(&self) -> &NormalizedConfig {
        self.http.normalized()
    }

    pub fn build_url(&self, endpoint: &dyn Endpoint) -> String {
        self.http.build_url(endpoint)
    }

    pub async fn get(&self, endpoint: &dyn Endpoint) -> ApiResult<Bytes> {
        self.http.get(endpoint).await
    }
}

#[async_trait]
impl ApiClientContract for Client {
    fn build_url(&self, endpoint: &dyn Endpoint) -> String {
        Client::build_url(self, endpoint)
    }

    async fn get(&self, endpoint: &dyn Endpoint) -> ApiResult<Bytes> {
        Client::get(self, endpoint).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_server::{config_json, start_test_server, EchoResponse};
    use tmdb_core::{AuthScheme, MovieDetails, MovieSearch};

    fn client(baseurl: &str, version: &str) -> Client {
        Client::new(config_json(baseurl, version, "abc").as_bytes(), 10).unwrap()
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("source closed"))
        }
    }

    #[test]
    fn test_new_normalizes_config() {
        let client = client("https://api.example.org/", "/3/");

        assert_eq!(client.normalized_config().base_url(), "https://api.example.org/3");
        assert_eq!(client.normalized_config().auth_scheme(), AuthScheme::QueryKey);
        assert_eq!(client.config().account.username, "foo");
        assert_eq!(client.config().account.password, "bar");
    }

    #[test]
    fn test_new_fails_on_unreadable_source() {
        let result = Client::new(FailingReader, 10);
        assert!(matches!(result, Err(ApiSdkError::ConfigRead(_))));
    }

    #[test]
    fn test_new_fails_on_invalid_json() {
        let result = Client::new("{ not json".as_bytes(), 10);
        assert!(matches!(result, Err(ApiSdkError::ConfigParse(_))));
    }

    #[test]
    fn test_from_file_missing_variable() {
        let path = std::env::temp_dir()
            .join(format!("tmdb-sdk-config-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{ "api": { "baseurl": "https://api.example.org", "version": "3", "key": "${TMDB_SDK_TEST_UNSET_KEY}" } }"#,
        )
        .unwrap();

        let result = Client::from_file(&path, 10);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(ApiSdkError::Config(_))));
    }

    #[test]
    fn test_build_url_scenarios() {
        let v3 = client("https://api.example.org", "/3");
        let v4 = client("https://api.example.org", "/4");
        let details = MovieDetails::new("tt0102057");

        assert_eq!(v3.build_url(&details), "https://api.example.org/3/movie/tt0102057?api_key=abc");
        assert_eq!(v4.build_url(&details), "https://api.example.org/4/movie/tt0102057");
    }

    #[test]
    fn test_contract_matches_inherent_methods() {
        let client = client("https://api.example.org", "/3");
        let contract: &dyn ApiClientContract = &client;
        let search = MovieSearch::new("star wars");

        assert_eq!(contract.build_url(&search), client.build_url(&search));
    }

    #[tokio::test]
    async fn test_movie_api_requests() {
        let addr = start_test_server().await;
        let client = client(&format!("http://{}", addr), "/4");

        let cases = [
            (client.movie.details("tt0102057").await.unwrap(), "/4/movie/tt0102057"),
            (client.movie.keywords("tt0031381").await.unwrap(), "/4/movie/tt0031381/keywords"),
            (
                client.movie.watch_providers("tt3097934").await.unwrap(),
                "/4/movie/tt3097934/watch/providers",
            ),
            (client.movie.credits("tt0102057").await.unwrap(), "/4/movie/tt0102057/credits"),
        ];

        for (body, expected_path) in cases {
            let echo: EchoResponse = serde_json::from_slice(&body).unwrap();
            assert_eq!(echo.path, expected_path);
            assert_eq!(echo.authorization.as_deref(), Some("Bearer abc"));
        }
    }

    #[tokio::test]
    async fn test_search_api_request() {
        let addr = start_test_server().await;
        let client = client(&format!("http://{}", addr), "/3");

        let body = client.search.movies(&MovieSearch::new("hook").year(1991)).await.unwrap();
        let echo: EchoResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(echo.path, "/3/search/movie");
        assert_eq!(
            echo.query,
            "api_key=abc&query=hook&language=en-US&include_adult=false&page=1&year=1991"
        );
    }

    #[tokio::test]
    async fn test_not_found_through_contract() {
        let addr = start_test_server().await;
        let client = client(&format!("http://{}", addr), "/3");
        let contract: &dyn ApiClientContract = &client;

        let error = contract.get(&MovieDetails::new("missing")).await.unwrap_err();

        assert_eq!(error.bad_request(), Some(&crate::BadRequestError::not_found()));
        assert_eq!(error.bad_request().unwrap().resource, "/movie/missing");
    }

    #[tokio::test]
    async fn test_concurrent_requests_share_client() {
        let addr = start_test_server().await;
        let client = client(&format!("http://{}", addr), "/4");

        let handles: Vec<_> = ["tt0102057", "tt0031381", "tt3097934"]
            .into_iter()
            .map(|id| {
                let client = client.clone();
                tokio::spawn(async move { client.movie.details(id).await })
            })
            .collect();

        for handle in handles {
            assert!(handle.await.unwrap().is_ok());
        }
    }
}
