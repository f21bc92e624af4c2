//! Discount window resolution.

use super::dates;
use crate::models::DiscountWindow;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Outcome of intersecting a discount window with the charging interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedDiscount {
    /// Chargeable days inside the window, counted with the same
    /// working-day policy as the service itself.
    pub days: i64,
    /// Fraction of the per-day price the discounted days still pay,
    /// e.g. a 25% discount retains 0.75.
    pub retained: Decimal,
}

impl ResolvedDiscount {
    pub fn none() -> Self {
        Self {
            days: 0,
            retained: Decimal::ZERO,
        }
    }
}

/// Intersect the subscription's discount window, if any, with the
/// already-adjusted charging interval `[adjusted_start, query_end]`.
///
/// A discount never applies before charging actually starts, and an
/// open-ended window runs to the end of the queried period.
pub fn resolve(
    window: Option<&DiscountWindow>,
    working_days_only: bool,
    adjusted_start: NaiveDate,
    query_end: NaiveDate,
) -> ResolvedDiscount {
    let Some(window) = window else {
        return ResolvedDiscount::none();
    };

    let effective_start = window.start_date.max(adjusted_start);
    let effective_end = window.end_date.unwrap_or(query_end).min(query_end);
    if effective_start > effective_end {
        return ResolvedDiscount::none();
    }

    let days = dates::count_billable_days(effective_start, effective_end, working_days_only);
    let retained = Decimal::ONE - window.percentage / Decimal::ONE_HUNDRED;

    ResolvedDiscount { days, retained }
}
