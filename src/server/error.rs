use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("http server: {0}")]
    Listener(#[source] std::io::Error),

    #[error("http server: listener stopped unexpectedly")]
    Stopped,

    #[error("http server shutdown error: {0}")]
    Shutdown(#[source] std::io::Error),

    #[error("http server shutdown error: connections still open after {0:?}")]
    ShutdownTimeout(Duration),
}
