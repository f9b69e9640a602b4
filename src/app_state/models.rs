use crate::db::mongo::repository::stock_repository::TraitStockRepository;

use std::sync::Arc;

/// Handlers see the stock lookup capability, never the concrete store.
pub struct AppState {
    pub stock_repository: Arc<dyn TraitStockRepository + Send + Sync>,
}

impl AppState {
    pub fn new(stock_repository: Arc<dyn TraitStockRepository + Send + Sync>) -> Self {
        Self { stock_repository }
    }
}
