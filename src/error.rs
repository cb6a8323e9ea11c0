use crate::config::ConfigError;
use crate::http::ServerError;

/// Top-level error returned from startup and serving.
///
/// The health handler itself has no failure path; everything here happens
/// before the first request is accepted or while the listener is running.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Server(#[from] ServerError),
}

pub type Result<T> = std::result::Result<T, Error>;
