mod high_stock;
mod router;

pub use high_stock::{high_stock, method_not_allowed};
pub use router::create_router;
