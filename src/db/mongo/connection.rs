use crate::db::mongo::error::MongoError;
use crate::env_config::models::app_setting::AppSettings;
use mongodb::{
    Client, Database,
    bson::doc,
    options::{Acknowledgment, ClientOptions, WriteConcern},
};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

pub const PING_TIMEOUT: Duration = Duration::from_secs(10);
pub const DISCONNECT_TIMEOUT: Duration = Duration::from_secs(15);

const COMPONENT: &str = "mongodb-client";

#[derive(Clone)]
pub struct MongoConnection {
    client: Client,
    database: Database,
}

impl MongoConnection {
    /// Connects and pings the database. Gives up as soon as `shutdown` is
    /// cancelled, whatever stage the handshake is in.
    pub async fn new(
        settings: Arc<AppSettings>,
        shutdown: &CancellationToken,
    ) -> Result<Self, MongoError> {
        info!(component = COMPONENT, "Initializing MongoDB connection...");

        tokio::select! {
            biased;
            _ = shutdown.cancelled() => {
                info!(component = COMPONENT, "MongoDB connection canceled");
                Err(MongoError::Canceled)
            }
            result = Self::connect(&settings) => result,
        }
    }

    async fn connect(settings: &AppSettings) -> Result<Self, MongoError> {
        // URI and option errors are connect failures too.
        let mut options = ClientOptions::parse(&settings.app_env.mongodb_uri)
            .await
            .map_err(MongoError::Connect)?;

        // Shared client profile: writes must reach a majority and the journal.
        options.write_concern = Some(
            WriteConcern::builder()
                .w(Some(Acknowledgment::Majority))
                .journal(Some(true))
                .build(),
        );

        let client = Client::with_options(options).map_err(MongoError::Connect)?;
        let database = client.database(&settings.app_env.mongodb_name);

        debug!(component = COMPONENT, "Executing ping on MongoDB");
        match timeout(PING_TIMEOUT, database.run_command(doc! { "ping": 1 }, None)).await {
            Ok(Ok(_)) => info!(component = COMPONENT, "MongoDB connection successful"),
            Ok(Err(e)) => {
                error!(component = COMPONENT, error = %e, "Failed to ping MongoDB");
                return Err(MongoError::Ping(e));
            }
            Err(_) => {
                error!(component = COMPONENT, timeout = ?PING_TIMEOUT, "MongoDB ping timed out");
                return Err(MongoError::PingTimeout(PING_TIMEOUT));
            }
        }

        Ok(Self { client, database })
    }

    pub fn get_database(&self) -> &Database {
        &self.database
    }

    /// Disconnects within [`DISCONNECT_TIMEOUT`]. Failures are logged only.
    pub async fn close(&self) {
        match timeout(DISCONNECT_TIMEOUT, self.client.clone().shutdown()).await {
            Ok(()) => info!(component = COMPONENT, "mongodb connection closed"),
            Err(_) => error!(
                component = COMPONENT,
                error = "disconnect timed out",
                timeout = ?DISCONNECT_TIMEOUT,
                "close mongodb connection"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env_config::models::{
        app_config::AppConfig,
        app_env::{AppEnv, Env},
    };
    use std::time::Instant;

    fn settings_for(uri: &str) -> Arc<AppSettings> {
        Arc::new(AppSettings {
            app_config: AppConfig::default(),
            app_env: AppEnv {
                env: Env::Local,
                mongodb_uri: uri.to_string(),
                mongodb_name: "stocks".to_string(),
                mongodb_stocks_collection_name: "stocks".to_string(),
            },
        })
    }

    #[tokio::test]
    async fn test_cancelled_startup_returns_immediately() {
        let shutdown = CancellationToken::new();
        shutdown.cancel();

        let started = Instant::now();
        // Non-routable address: the ping alone would hang until its timeout.
        let result = MongoConnection::new(settings_for("mongodb://10.255.255.1:27017"), &shutdown).await;

        assert!(started.elapsed() < Duration::from_secs(2));
        match result {
            Err(err @ MongoError::Canceled) => assert_eq!(err.to_string(), "ping: context canceled"),
            Err(other) => panic!("expected cancellation, got {other}"),
            Ok(_) => panic!("expected cancellation, got a connection"),
        }
    }

    #[tokio::test]
    async fn test_cancel_during_ping_stops_waiting() {
        let shutdown = CancellationToken::new();
        let canceller = shutdown.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            canceller.cancel();
        });

        let started = Instant::now();
        let result = MongoConnection::new(settings_for("mongodb://10.255.255.1:27017"), &shutdown).await;

        assert!(started.elapsed() < Duration::from_secs(2));
        assert!(matches!(result, Err(MongoError::Canceled)));
    }

    #[tokio::test]
    async fn test_invalid_uri_is_connect_error() {
        let shutdown = CancellationToken::new();
        let result = MongoConnection::new(settings_for("not-a-mongodb-uri"), &shutdown).await;

        match result {
            Err(err @ MongoError::Connect(_)) => assert!(err.to_string().starts_with("connect: ")),
            Err(other) => panic!("expected connect error, got {other}"),
            Ok(_) => panic!("expected connect error, got a connection"),
        }
    }
}
