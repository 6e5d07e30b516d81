use std::{env, fs::File, io::Read, path::Path};

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use thiserror::Error;
use tracing::error;

use super::ApiClientConfig;

static ENV_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is valid"));

#[derive(Error, Debug)]
pub enum ReadConfigError {
    #[error("Can not find config file: {0}")]
    CanNotFindConfig(std::io::Error),

    #[error("Can not read config file: {0}")]
    CanNotReadConfig(std::io::Error),

    #[error("Config is invalid json and does not match the struct - {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Environment variable {0} not found")]
    EnvironmentVariableNotFound(String),
}

/// Replaces every `${NAME}` placeholder with the value of the environment variable `NAME`.
fn substitute_env_variables(contents: &str) -> Result<String, ReadConfigError> {
    let mut missing = None;

    let result = ENV_PLACEHOLDER.replace_all(contents, |caps: &Captures| {
        let var_name = &caps[1];
        match env::var(var_name) {
            Ok(val) => val,
            Err(_) => {
                error!("Environment variable {} not found", var_name);
                missing.get_or_insert_with(|| var_name.to_string());
                String::new()
            }
        }
    });

    match missing {
        Some(var_name) => Err(ReadConfigError::EnvironmentVariableNotFound(var_name)),
        None => Ok(result.into_owned()),
    }
}

/// Reads a JSON config file, filling `${VAR}` placeholders from the environment.
///
/// Keeps secrets such as the API key out of the file itself:
///
/// ```json
/// { "api": { "baseurl": "https://api.themoviedb.org", "version": "3", "key": "${TMDB_API_KEY}" } }
/// ```
pub fn read_config(file_path: &Path) -> Result<ApiClientConfig, ReadConfigError> {
    let mut file = File::open(file_path).map_err(ReadConfigError::CanNotFindConfig)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(ReadConfigError::CanNotReadConfig)?;

    let substituted_contents = substitute_env_variables(&contents)?;

    Ok(serde_json::from_str(&substituted_contents)?)
}
