use super::error::ServerError;
use axum::Router;
use std::io;
use std::time::Duration;
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle, time::timeout};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Upper bound for draining in-flight requests once shutdown starts.
pub const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(10);

const COMPONENT: &str = "http-server";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8888,
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub struct HttpServer {
    router: Router,
    address: String,
    shutdown_timeout: Duration,
}

impl HttpServer {
    pub fn new(config: &ServerConfig, router: Router) -> Self {
        Self {
            router,
            address: config.address(),
            shutdown_timeout: SHUTDOWN_TIMEOUT,
        }
    }

    #[cfg(test)]
    fn with_shutdown_timeout(mut self, shutdown_timeout: Duration) -> Self {
        self.shutdown_timeout = shutdown_timeout;
        self
    }

    /// Serves until `shutdown` is cancelled or the listener stops by itself,
    /// whichever happens first.
    ///
    /// On cancellation in-flight requests are drained for at most the
    /// shutdown timeout. A listener that stops on its own (including a
    /// failed bind) is always an error.
    pub async fn run(self, shutdown: CancellationToken) -> Result<(), ServerError> {
        let drain = shutdown.child_token();
        let (done_tx, mut done_rx) = oneshot::channel::<io::Result<()>>();

        let address = self.address.clone();
        let router = self.router;
        let mut serve_task: JoinHandle<()> = tokio::spawn(async move {
            info!(component = COMPONENT, "http server will be started at {}", address);
            let result = serve(&address, router, drain).await;
            let _ = done_tx.send(result);
        });

        tokio::select! {
            _ = shutdown.cancelled() => {
                let result = match timeout(self.shutdown_timeout, &mut done_rx).await {
                    Ok(Ok(Ok(()))) => Ok(()),
                    Ok(Ok(Err(e))) => Err(ServerError::Shutdown(e)),
                    // Task ended without reporting; treat it like a failed drain.
                    Ok(Err(_)) => Err(ServerError::Shutdown(io::Error::other("server task exited"))),
                    Err(_) => {
                        serve_task.abort();
                        Err(ServerError::ShutdownTimeout(self.shutdown_timeout))
                    }
                };
                info!(component = COMPONENT, "http server stopped, reason: context canceled");
                result
            }
            outcome = &mut done_rx => {
                let err = match outcome {
                    Ok(Err(e)) => ServerError::Listener(e),
                    Ok(Ok(())) | Err(_) => ServerError::Stopped,
                };
                warn!(component = COMPONENT, error = %err, "http server stopped, reason: error from channel");
                let _ = (&mut serve_task).await;
                Err(err)
            }
        }
    }
}

async fn serve(address: &str, router: Router, drain: CancellationToken) -> io::Result<()> {
    let listener = TcpListener::bind(address).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(drain.cancelled_owned())
        .await
}
