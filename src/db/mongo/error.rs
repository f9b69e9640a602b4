use mongodb::error::ErrorKind;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum MongoError {
    #[error("connect: {0}")]
    Connect(#[source] mongodb::error::Error),

    #[error("ping: {0}")]
    Ping(#[source] mongodb::error::Error),

    #[error("ping: no response within {0:?}")]
    PingTimeout(Duration),

    #[error("ping: context canceled")]
    Canceled,
}

/// Failure of a lookup. "No matching document" is not one of these.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("find one: {0}")]
    FindOne(#[source] mongodb::error::Error),

    #[error("decode result: {0}")]
    Decode(#[source] mongodb::error::Error),
}

impl From<mongodb::error::Error> for RepositoryError {
    fn from(err: mongodb::error::Error) -> Self {
        if matches!(*err.kind, ErrorKind::BsonDeserialization(_)) {
            RepositoryError::Decode(err)
        } else {
            RepositoryError::FindOne(err)
        }
    }
}
