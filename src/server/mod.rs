mod error;
mod http_server;

pub use error::ServerError;
pub use http_server::{HttpServer, ServerConfig};
