//! Request/response DTOs for the charge endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /charges`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChargeRequest {
    #[serde(rename = "customerId")]
    #[validate(range(min = 1, message = "customerId must be a positive integer"))]
    pub customer_id: i64,
    /// Inclusive period start, strict `YYYY-MM-DD`.
    pub start_date: String,
    /// Inclusive period end, strict `YYYY-MM-DD`.
    pub end_date: String,
}

/// Computed charge plus one explanatory line per subscription, in the
/// customer's subscription order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeResponse {
    /// Total charge, rounded to 3 decimal places.
    pub charge_price: Decimal,
    pub info: Vec<String>,
}
