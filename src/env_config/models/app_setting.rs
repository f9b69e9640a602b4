use super::{app_config::AppConfig, app_env::AppEnv};
use crate::env_config::error::ConfigError;

#[derive(Debug)]
pub struct AppSettings {
    pub app_config: AppConfig,
    pub app_env: AppEnv,
}

impl AppSettings {
    /// Environment first, so a missing variable is reported before the
    /// config file is touched.
    pub fn load() -> Result<Self, ConfigError> {
        let app_env = AppEnv::new()?;
        let app_config = AppConfig::new(&app_env.env)?;
        Ok(Self {
            app_config,
            app_env,
        })
    }
}
