pub mod http;
mod movie;
mod search;
#[cfg(test)]
pub(crate) mod test_server;
mod types;

pub use movie::MovieApi;
pub use search::SearchApi;
pub use types::{ApiResult, ApiSdkError, BadRequestError};
