use crate::db::mongo::repository::stock_repository::TraitStockRepository;

use crate::db::mongo::{
    connection::MongoConnection, error::MongoError,
    repository::stock_repository::StructStockRepository,
};
use crate::env_config::models::app_setting::AppSettings;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

pub struct MongoService {
    pub connection: Arc<MongoConnection>,

    pub repository_stock: Arc<dyn TraitStockRepository + Send + Sync>,
}

impl MongoService {
    pub async fn new(
        settings: &Arc<AppSettings>,
        shutdown: &CancellationToken,
    ) -> Result<Self, MongoError> {
        info!("Initializing MongoDB service components");

        let mongo_connection = match MongoConnection::new(settings.clone(), shutdown).await {
            Ok(conn) => Arc::new(conn),
            Err(e) => {
                error!("Failed to establish MongoDB connection: {}", e);
                return Err(e);
            }
        };

        info!(
            collection = %settings.app_env.mongodb_stocks_collection_name,
            "Initializing repositories"
        );
        let stock_repository = Arc::new(StructStockRepository::new(
            mongo_connection.clone(),
            &settings.app_env.mongodb_stocks_collection_name,
        )) as Arc<dyn TraitStockRepository + Send + Sync>;

        info!("MongoDB service initialized successfully");
        Ok(Self {
            connection: mongo_connection,
            repository_stock: stock_repository,
        })
    }

    pub async fn close(&self) {
        self.connection.close().await;
    }
}
