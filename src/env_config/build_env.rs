use super::error::ConfigError;
use super::models::app_env::{AppEnv, Env};
use std::env;
use std::str::FromStr;

pub const MONGODB_URI: &str = "MONGODB_URI";
pub const MONGODB_NAME: &str = "MONGODB_NAME";
pub const MONGODB_STOCKS_COLLECTION_NAME: &str = "MONGODB_STOCKS_COLLECTION_NAME";

impl AppEnv {
    /// Reads the process environment.
    pub fn new() -> Result<AppEnv, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Resolves every variable through `lookup`. Required variables are
    /// checked in a fixed order and the first missing one is reported.
    pub fn from_lookup<F>(lookup: F) -> Result<AppEnv, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = match lookup("ENV").filter(|value| !value.is_empty()) {
            Some(value) => Env::from_str(&value)?,
            None => Env::Local,
        };

        Ok(AppEnv {
            env,
            mongodb_uri: required(&lookup, MONGODB_URI)?,
            mongodb_name: required(&lookup, MONGODB_NAME)?,
            mongodb_stocks_collection_name: required(&lookup, MONGODB_STOCKS_COLLECTION_NAME)?,
        })
    }
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const REQUIRED: [&str; 3] = [MONGODB_URI, MONGODB_NAME, MONGODB_STOCKS_COLLECTION_NAME];

    fn full_env() -> HashMap<&'static str, String> {
        HashMap::from([
            (MONGODB_URI, "mongodb://localhost:27017".to_string()),
            (MONGODB_NAME, "stocks".to_string()),
            (MONGODB_STOCKS_COLLECTION_NAME, "stocks".to_string()),
        ])
    }

    fn load(vars: &HashMap<&'static str, String>) -> Result<AppEnv, ConfigError> {
        AppEnv::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_all_variables_present() {
        let app_env = load(&full_env()).unwrap();
        assert_eq!(app_env.env, Env::Local);
        assert_eq!(app_env.mongodb_uri, "mongodb://localhost:27017");
        assert_eq!(app_env.mongodb_name, "stocks");
        assert_eq!(app_env.mongodb_stocks_collection_name, "stocks");
    }

    #[test]
    fn test_every_missing_combination_fails() {
        // Each bit of the mask removes one required variable.
        for mask in 1u8..(1 << REQUIRED.len()) {
            let mut vars = full_env();
            for (bit, name) in REQUIRED.iter().enumerate() {
                if mask & (1 << bit) != 0 {
                    vars.remove(name);
                }
            }

            let first_missing = REQUIRED
                .iter()
                .enumerate()
                .find(|(bit, _)| mask & (1 << *bit) != 0)
                .map(|(_, name)| *name)
                .unwrap();

            match load(&vars) {
                Err(ConfigError::MissingVar(name)) => assert_eq!(name, first_missing),
                other => panic!("mask {mask:03b}: expected missing var, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_empty_variable_is_missing() {
        let mut vars = full_env();
        vars.insert(MONGODB_NAME, String::new());

        let err = load(&vars).unwrap_err();
        assert_eq!(err.to_string(), "MONGODB_NAME environment variable not set");
    }

    #[test]
    fn test_env_selects_environment() {
        let mut vars = full_env();
        vars.insert("ENV", "prod".to_string());
        assert_eq!(load(&vars).unwrap().env, Env::Prod);

        vars.insert("ENV", "staging".to_string());
        assert!(matches!(load(&vars), Err(ConfigError::UnknownEnv(_))));
    }
}
