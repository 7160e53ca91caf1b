use thiserror::Error;

use crate::{client::ApiError, local_state::StorageError};

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("{0}")]
    Engine(#[from] engine::EngineError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("terminal error: {0}")]
    Terminal(String),
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("not logged in, run `expensa_cli login` first")]
    NotLoggedIn,
    #[error("unknown timezone: {0}")]
    InvalidTimezone(String),
}
