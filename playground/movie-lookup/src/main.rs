use std::path::PathBuf;

use anyhow::{Context, Result};
use tmdb::{Client, Endpoint, MovieCredits, MovieDetails, MovieKeywords, MovieWatchProviders};
use tmdb_core::{load_env_from_project_path, setup_info_logger};
use tracing::{error, info};

const TIMEOUT_SECONDS: u64 = 10;

/// Looks up every movie id given on the command line.
///
/// Reads the client config from `TMDB_CONFIG` (default `tmdb.json`), after loading `.env`
/// so the file can reference `${TMDB_API_KEY}`.
#[tokio::main]
async fn main() -> Result<()> {
    setup_info_logger();

    let current_dir = std::env::current_dir()?;
    load_env_from_project_path(&current_dir);

    let config_path = std::env::var("TMDB_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| current_dir.join("tmdb.json"));
    let client = Client::from_file(&config_path, TIMEOUT_SECONDS)
        .with_context(|| format!("loading {}", config_path.display()))?;

    let movie_ids: Vec<String> = std::env::args().skip(1).collect();
    if movie_ids.is_empty() {
        info!("usage: movie-lookup <imdb id>...");
        return Ok(());
    }

    for movie_id in &movie_ids {
        let endpoints: [Box<dyn Endpoint>; 4] = [
            Box::new(MovieDetails::new(movie_id.as_str())),
            Box::new(MovieKeywords::new(movie_id.as_str())),
            Box::new(MovieWatchProviders::new(movie_id.as_str())),
            Box::new(MovieCredits::new(movie_id.as_str())),
        ];

        for endpoint in &endpoints {
            match client.get(endpoint.as_ref()).await {
                Ok(body) => {
                    let value: serde_json::Value = serde_json::from_slice(&body)?;
                    info!("{}", endpoint.render());
                    println!("{}", serde_json::to_string_pretty(&value)?);
                }
                Err(e) if e.bad_request().is_some() => {
                    error!("{} -> {}", endpoint.render(), e);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    Ok(())
}
