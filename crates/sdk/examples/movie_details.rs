use tmdb::{Client, MovieSearch};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = r#"{
        "api": { "baseurl": "https://api.themoviedb.org", "version": "/4", "key": "your_read_access_token" },
        "account": { "username": "", "password": "" }
    }"#;
    let client = Client::new(config.as_bytes(), 10)?;

    match client.movie.details("tt0102057").await {
        Ok(body) => println!("✅ Movie details: {}", String::from_utf8_lossy(&body)),
        Err(e) if e.is_not_found() => println!("❌ Movie not found"),
        Err(e) => println!("❌ Failed to get movie details: {}", e),
    }

    match client.search.movies(&MovieSearch::new("star wars")).await {
        Ok(body) => println!("✅ Search returned {} bytes", body.len()),
        Err(e) => println!("❌ Search failed: {}", e),
    }

    Ok(())
}
