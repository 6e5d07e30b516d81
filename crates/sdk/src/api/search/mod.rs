use bytes::Bytes;
use std::sync::Arc;
use tmdb_core::MovieSearch;

use crate::api::{http::HttpClient, types::ApiResult};

#[derive(Clone)]
pub struct SearchApi {
    client: Arc<HttpClient>,
}

impl SearchApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Search movies by title
    ///
    /// # Arguments
    ///
    /// * `search` - The query, language, adult filter and page to request
    pub async fn movies(&self, search: &MovieSearch) -> ApiResult<Bytes> {
        self.client.get(search).await
    }
}
