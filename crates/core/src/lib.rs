mod config;
pub use config::{
    read_config, AccountConfig, ApiClientConfig, ApiConfig, AuthScheme, NormalizedConfig,
    ReadConfigError,
};
pub mod endpoint;
pub use endpoint::{
    Endpoint, MovieCredits, MovieDetails, MovieKeywords, MovieSearch, MovieWatchProviders,
};
mod environment;
pub use environment::load_env_from_project_path;
mod logger;
pub use logger::{setup_info_logger, setup_logger};

pub use tracing::level_filters::LevelFilter;
