use crate::db::mongo::error::MongoError;
use crate::env_config::error::ConfigError;
use crate::logger::LoggerError;
use crate::server::ServerError;

/// Terminal error of [`crate::run`]; printed by `main` before exiting with 1.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Logger(#[from] LoggerError),

    #[error("create mongo: {0}")]
    Mongo(#[from] MongoError),

    #[error(transparent)]
    Server(#[from] ServerError),
}
