use std::path::Path;

use dotenvy::{dotenv, from_path};

/// Loads environment variables from a .env file in the project directory.
///
/// Falls back to a .env in the current working directory (or just the process
/// environment) when the project directory has none. Useful before [`crate::read_config`]
/// so `${TMDB_API_KEY}` style placeholders resolve.
pub fn load_env_from_project_path(project_path: &Path) {
    if from_path(project_path.join(".env")).is_err() {
        dotenv().ok();
    }
}
