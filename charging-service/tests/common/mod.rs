//! Test helper module for charging-service integration tests.
//!
//! Provides common setup utilities for spawning the service against a
//! file-backed customer store.

#![allow(dead_code)]

use charging_service::config::ChargingConfig;
use charging_service::services::init_metrics;
use charging_service::startup::Application;
use service_core::config::Config as CoreConfig;
use std::io::Write;
use tempfile::NamedTempFile;

/// Customer document used by most endpoint tests. Catalog is the
/// standard one: A (0.2/day, working days), B (0.24/day, working days),
/// C (0.4/day, full week).
pub const DEFAULT_DATA: &str = r#"{
  "Customers": [
    { "id": 1, "services": [{ "name": "A" }] },
    { "id": 2, "freedays": 2, "services": [{ "name": "A" }] },
    {
      "id": 3,
      "services": [
        {
          "name": "B",
          "discount": { "start_date": "2019-01-01", "percentage": 50 }
        }
      ]
    },
    { "id": 4, "services": [{ "name": "A" }, { "name": "Z" }] },
    { "id": 5, "services": [] }
  ]
}"#;

/// Test application wrapper for integration tests.
pub struct TestApp {
    pub address: String,
    pub port: u16,
    // Keeps the store and catalog files alive for the lifetime of the app.
    _data_file: NamedTempFile,
    _catalog_file: Option<NamedTempFile>,
}

impl TestApp {
    /// Spawn a test application on a random port with the default data.
    pub async fn spawn() -> Self {
        Self::spawn_with_data(DEFAULT_DATA).await
    }

    /// Spawn a test application backed by the given customer document.
    pub async fn spawn_with_data(data: &str) -> Self {
        Self::spawn_inner(data, None).await
    }

    /// Spawn a test application with a file-loaded catalog instead of the
    /// standard one.
    pub async fn spawn_with_catalog(data: &str, catalog: &str) -> Self {
        Self::spawn_inner(data, Some(catalog)).await
    }

    async fn spawn_inner(data: &str, catalog: Option<&str>) -> Self {
        init_metrics();

        let mut data_file = NamedTempFile::new().expect("Failed to create temp data file");
        data_file
            .write_all(data.as_bytes())
            .expect("Failed to write temp data file");

        let catalog_file = catalog.map(|entries| {
            let mut file = NamedTempFile::new().expect("Failed to create temp catalog file");
            file.write_all(entries.as_bytes())
                .expect("Failed to write temp catalog file");
            file
        });

        let config = ChargingConfig {
            common: CoreConfig {
                port: 0, // Random port
                log_level: "warn".to_string(),
            },
            service_name: "charging-service-test".to_string(),
            customer_data_path: data_file.path().display().to_string(),
            catalog_path: catalog_file
                .as_ref()
                .map(|file| file.path().display().to_string()),
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");
        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            _data_file: data_file,
            _catalog_file: catalog_file,
        }
    }

    /// POST a charge request body to `/charges`.
    pub async fn post_charge(&self, body: &serde_json::Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{}/charges", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to send charge request")
    }
}

/// Build a charge request body.
pub fn charge_body(customer_id: i64, start_date: &str, end_date: &str) -> serde_json::Value {
    serde_json::json!({
        "customerId": customer_id,
        "start_date": start_date,
        "end_date": end_date,
    })
}
