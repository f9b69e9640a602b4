use crate::db::mongo::connection::MongoConnection;
use crate::db::mongo::error::RepositoryError;
use crate::db::mongo::models::stock_record::StockRecord;
use async_trait::async_trait;
use mongodb::{
    Collection,
    bson::{Document, doc},
    options::FindOneOptions,
};
use std::sync::Arc;
use tracing::debug;

#[async_trait]
pub trait TraitStockRepository {
    /// Symbol of the first record, by ascending symbol, whose `high` equals
    /// `high` exactly. `Ok(None)` when nothing matches.
    async fn find_high_stock(&self, high: f64) -> Result<Option<String>, RepositoryError>;
}

pub struct StructStockRepository {
    collection: Collection<StockRecord>,
}

impl StructStockRepository {
    pub fn new(connection: Arc<MongoConnection>, collection_name: &str) -> Self {
        Self {
            collection: connection.get_database().collection(collection_name),
        }
    }
}

fn high_filter(high: f64) -> Document {
    doc! { "high": high }
}

fn find_high_options() -> FindOneOptions {
    FindOneOptions::builder()
        .sort(doc! { "stock_symbol": 1 })
        .build()
}

#[async_trait]
impl TraitStockRepository for StructStockRepository {
    async fn find_high_stock(&self, high: f64) -> Result<Option<String>, RepositoryError> {
        debug!(high, collection = %self.collection.name(), "find high stock");

        let stock = self
            .collection
            .find_one(high_filter(high), find_high_options())
            .await?;

        Ok(stock.map(|record| record.symbol))
    }
}
