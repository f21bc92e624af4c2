//! JSON-file-backed customer store.
//!
//! The customer document is loaded once at startup; lookups are
//! read-only for the process lifetime.

use crate::models::Customer;
use serde::Deserialize;
use service_core::error::AppError;
use std::path::Path;

/// Top-level shape of the customer document.
#[derive(Debug, Deserialize)]
struct CustomerDocument {
    #[serde(rename = "Customers")]
    customers: Vec<Customer>,
}

/// Read-only customer lookup, keyed by customer id.
#[derive(Debug, Clone)]
pub struct CustomerStore {
    customers: Vec<Customer>,
}

impl CustomerStore {
    /// Load the store from a JSON document with a top-level `Customers`
    /// list. A missing or malformed file is a startup error.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!(
                "Failed to read customer data at {}: {}",
                path.display(),
                e
            ))
        })?;
        let document: CustomerDocument = serde_json::from_str(&raw).map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!(
                "Invalid customer data at {}: {}",
                path.display(),
                e
            ))
        })?;

        tracing::info!(
            path = %path.display(),
            customers = document.customers.len(),
            "Customer store loaded"
        );

        Ok(Self {
            customers: document.customers,
        })
    }

    /// Look up a customer by id. Ids are assumed unique; the first match
    /// wins if the document disagrees.
    pub fn find(&self, id: i64) -> Option<&Customer> {
        self.customers.iter().find(|customer| customer.id == id)
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}
