use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct ChargingConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub service_name: String,
    /// Path to the JSON document holding the customer records.
    pub customer_data_path: String,
    /// Optional path to a JSON catalog of provided services; the built-in
    /// standard catalog is used when unset.
    pub catalog_path: Option<String>,
}

impl ChargingConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env and APP__ prefix)
        let common_config = core_config::Config::load()?;

        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(ChargingConfig {
            common: common_config,
            service_name: get_env("SERVICE_NAME", Some("charging-service"), is_prod)?,
            customer_data_path: get_env("CUSTOMER_DATA_PATH", Some("data/customers.json"), is_prod)?,
            catalog_path: env::var("CATALOG_PATH").ok(),
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(format!(
                    "{} is required in production but not set",
                    key
                ))))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(format!(
                    "{} is required but not set",
                    key
                ))))
            }
        }
    }
}
