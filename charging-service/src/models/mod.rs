//! Domain models for charging-service.

mod catalog;
mod customer;

pub use catalog::{CatalogEntry, ServiceCatalog};
pub use customer::{Customer, DiscountWindow, Subscription};
