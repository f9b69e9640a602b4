mod config;

pub use config::{LoggerError, init_logger};
