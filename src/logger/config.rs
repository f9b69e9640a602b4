use std::fmt;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

/// Supported log format types
#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Plain,
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Plain => write!(f, "plain"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

impl From<&str> for LogFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Plain,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("init logger: invalid log level {level:?}: {reason}")]
    InvalidFilter { level: String, reason: String },

    #[error("init logger: {0}")]
    Init(String),
}

/// Installs the global subscriber writing to stdout. Local runs keep
/// timestamps, deployed runs drop them and report targets instead.
pub fn init_logger(log_level: &str, log_format: &str, is_local: bool) -> Result<(), LoggerError> {
    let filter = EnvFilter::try_new(log_level).map_err(|err| LoggerError::InvalidFilter {
        level: log_level.to_string(),
        reason: err.to_string(),
    })?;

    let format = LogFormat::from(log_format);

    let result = if is_local {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stdout)
            .with_target(false)
            .with_span_events(FmtSpan::CLOSE);

        match format {
            LogFormat::Json => builder.json().try_init(),
            LogFormat::Plain => builder.try_init(),
        }
    } else {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stdout)
            .with_target(true)
            .with_level(true)
            .with_span_events(FmtSpan::CLOSE)
            .without_time();

        match format {
            LogFormat::Json => builder.json().try_init(),
            LogFormat::Plain => builder.try_init(),
        }
    };

    result.map_err(|err| LoggerError::Init(err.to_string()))
}
