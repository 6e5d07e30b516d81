use bytes::Bytes;
use std::sync::Arc;
use tmdb_core::{MovieCredits, MovieDetails, MovieKeywords, MovieWatchProviders};

use crate::api::{http::HttpClient, types::ApiResult};

#[derive(Clone)]
pub struct MovieApi {
    client: Arc<HttpClient>,
}

impl MovieApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Get the primary details of a movie
    ///
    /// GET /movie/{movie_id}
    pub async fn details(&self, movie_id: &str) -> ApiResult<Bytes> {
        self.client.get(&MovieDetails::new(movie_id)).await
    }

    /// Get the keywords used to describe a movie
    ///
    /// GET /movie/{movie_id}/keywords
    pub async fn keywords(&self, movie_id: &str) -> ApiResult<Bytes> {
        self.client.get(&MovieKeywords::new(movie_id)).await
    }

    /// Get the streaming services where a movie can be watched
    ///
    /// GET /movie/{movie_id}/watch/providers
    pub async fn watch_providers(&self, movie_id: &str) -> ApiResult<Bytes> {
        self.client.get(&MovieWatchProviders::new(movie_id)).await
    }

    /// Get the cast and crew of a movie
    ///
    /// GET /movie/{movie_id}/credits
    pub async fn credits(&self, movie_id: &str) -> ApiResult<Bytes> {
        self.client.get(&MovieCredits::new(movie_id)).await
    }
}
