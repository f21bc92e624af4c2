//! Company-provided service catalog.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use std::path::Path;

/// A company-provided service: base rate and charging-day policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    /// Base price per charged day, used unless the subscription overrides it.
    #[serde(rename = "price")]
    pub price_per_day: Decimal,
    /// Charge only Mon-Fri when set; every calendar day otherwise.
    #[serde(rename = "workingDays")]
    pub working_days_only: bool,
}

/// The set of services the company provides, keyed by exact name.
///
/// Built once at startup and read-only for the process lifetime.
#[derive(Debug, Clone)]
pub struct ServiceCatalog {
    entries: Vec<CatalogEntry>,
}

impl ServiceCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// The standard company offering.
    pub fn standard() -> Self {
        Self::new(vec![
            CatalogEntry {
                name: "A".to_string(),
                price_per_day: Decimal::new(2, 1),
                working_days_only: true,
            },
            CatalogEntry {
                name: "B".to_string(),
                price_per_day: Decimal::new(24, 2),
                working_days_only: true,
            },
            CatalogEntry {
                name: "C".to_string(),
                price_per_day: Decimal::new(4, 1),
                working_days_only: false,
            },
        ])
    }

    /// Load a catalog from a JSON array of entries.
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!(
                "Failed to read service catalog at {}: {}",
                path.display(),
                e
            ))
        })?;
        let entries: Vec<CatalogEntry> = serde_json::from_str(&raw).map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!(
                "Invalid service catalog at {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(Self::new(entries))
    }

    /// Case-sensitive lookup by exact service name.
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
