use super::error::ConfigError;
use super::models::{app_config::AppConfig, app_env::Env};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = "config";

impl AppConfig {
    /// Loads `config/<env>.toml`, falling back to defaults when the file
    /// does not exist.
    pub fn new(env: &Env) -> Result<AppConfig, ConfigError> {
        Self::from_dir(Path::new(CONFIG_DIR), env)
    }

    pub fn from_dir(dir: &Path, env: &Env) -> Result<AppConfig, ConfigError> {
        let path: PathBuf = dir.join(format!("{}.toml", env));

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(AppConfig::default()),
            Err(source) => return Err(ConfigError::ReadFile { path, source }),
        };

        toml::from_str(&raw).map_err(|source| ConfigError::ParseFile { path, source })
    }
}
