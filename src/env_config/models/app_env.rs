use std::fmt;
use std::str::FromStr;

use crate::env_config::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Env {
    Local,
    Dev,
    Prod,
}

impl FromStr for Env {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Env::Local),
            "dev" => Ok(Env::Dev),
            "prod" => Ok(Env::Prod),
            _ => Err(ConfigError::UnknownEnv(s.to_string())),
        }
    }
}

impl fmt::Display for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Env::Local => write!(f, "local"),
            Env::Dev => write!(f, "dev"),
            Env::Prod => write!(f, "prod"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppEnv {
    pub env: Env,
    pub mongodb_uri: String,
    pub mongodb_name: String,
    pub mongodb_stocks_collection_name: String,
}

impl AppEnv {
    pub fn is_local(&self) -> bool {
        self.env == Env::Local
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_from_str() {
        assert_eq!(Env::from_str("local").unwrap(), Env::Local);
        assert_eq!(Env::from_str("PROD").unwrap(), Env::Prod);
        assert_eq!(Env::from_str("dev").unwrap(), Env::Dev);
        assert!(matches!(
            Env::from_str("staging"),
            Err(ConfigError::UnknownEnv(name)) if name == "staging"
        ));
    }

    #[test]
    fn test_env_display_matches_config_file_name() {
        assert_eq!(Env::Local.to_string(), "local");
        assert_eq!(Env::Prod.to_string(), "prod");
    }
}
