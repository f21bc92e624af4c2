//! Customer and subscription models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A customer record as stored in the customer document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    /// Grace period in days shifting the effective charging start forward.
    #[serde(
        rename = "freedays",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub free_days: Option<u32>,
    #[serde(default)]
    pub services: Vec<Subscription>,
}

/// A customer's enrollment in one catalog service, with optional overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    /// Must match a catalog entry to be chargeable; unmatched names
    /// contribute zero with an explanatory note.
    pub name: String,
    /// Overrides the catalog base price when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// The service is not chargeable before this date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<DiscountWindow>,
}

/// A bounded or open-ended interval during which a percentage reduction
/// applies. An absent end date means the discount runs to the end of the
/// queried period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscountWindow {
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Percentage off, 0-100.
    pub percentage: Decimal,
}
