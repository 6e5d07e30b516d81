use thiserror::Error;
use tmdb_core::ReadConfigError;

/// The service answered with a status code of 400 or above.
///
/// Two bad-request errors are equal when their status codes are equal; the resource is
/// informational only. Compare against [`BadRequestError::not_found`] to match any 404.
#[derive(Error, Debug, Clone)]
#[error("tmdb: bad request: {status_code}")]
pub struct BadRequestError {
    pub resource: String,
    pub status_code: u16,
}

impl BadRequestError {
    pub fn new(resource: impl Into<String>, status_code: u16) -> Self {
        Self { resource: resource.into(), status_code }
    }

    pub fn not_found() -> Self {
        Self::new(String::new(), 404)
    }
}

impl PartialEq for BadRequestError {
    fn eq(&self, other: &Self) -> bool {
        self.status_code == other.status_code
    }
}

impl Eq for BadRequestError {}

#[derive(Error, Debug)]
pub enum ApiSdkError {
    #[error(transparent)]
    BadRequest(#[from] BadRequestError),

    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Could not read config: {0}")]
    ConfigRead(std::io::Error),

    #[error("Config is invalid json and does not match the struct - {0}")]
    ConfigParse(serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ReadConfigError),
}

impl ApiSdkError {
    pub fn bad_request(&self) -> Option<&BadRequestError> {
        match self {
            ApiSdkError::BadRequest(error) => Some(error),
            _ => None,
        }
    }

    /// Status code of a bad-request error, `None` for every other kind.
    pub fn status_code(&self) -> Option<u16> {
        self.bad_request().map(|error| error.status_code)
    }

    pub fn is_not_found(&self) -> bool {
        self.bad_request() == Some(&BadRequestError::not_found())
    }
}

pub type ApiResult<T> = Result<T, ApiSdkError>;
