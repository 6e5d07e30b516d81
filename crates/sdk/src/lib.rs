//! Minimal client for The Movie Database (TMDB) API.
//!
//! ```rust,no_run
//! use tmdb::{Client, MovieDetails};
//!
//! # async fn run() -> tmdb::ApiResult<()> {
//! let config = r#"{ "api": { "baseurl": "https://api.themoviedb.org", "version": "/3", "key": "..." } }"#;
//! let client = Client::new(config.as_bytes(), 10)?;
//!
//! let body = client.get(&MovieDetails::new("tt0102057")).await?;
//! let same = client.movie.details("tt0102057").await?;
//! # Ok(())
//! # }
//! ```
mod api;
mod clients;

pub use api::{ApiResult, ApiSdkError, BadRequestError, MovieApi, SearchApi};
pub use clients::{ApiClientContract, Client};
pub use tmdb_core::{
    ApiClientConfig, AuthScheme, Endpoint, MovieCredits, MovieDetails, MovieKeywords,
    MovieSearch, MovieWatchProviders, NormalizedConfig,
};
