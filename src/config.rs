use std::collections::HashMap;
use std::net::IpAddr;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub bind_addr: IpAddr,
    pub products_path: PathBuf,
    pub sales_path: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let port = env_map
            .get("PORT")
            .map(|s| s.as_str())
            .unwrap_or("8080")
            .parse::<u16>()
            .map_err(|_| {
                ConfigError::InvalidValue("PORT".to_string(), "must be a valid u16".to_string())
            })?;

        let bind_addr = env_map
            .get("BIND_ADDR")
            .map(|s| s.as_str())
            .unwrap_or("127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|_| {
                ConfigError::InvalidValue(
                    "BIND_ADDR".to_string(),
                    "must be a valid IP address".to_string(),
                )
            })?;

        let products_path = env_map
            .get("PRODUCTS_PATH")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| ConfigError::MissingEnv("PRODUCTS_PATH".to_string()))?;

        let sales_path = env_map
            .get("SALES_PATH")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        Ok(Config {
            port,
            bind_addr,
            products_path,
            sales_path,
        })
    }
}
