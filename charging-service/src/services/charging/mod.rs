//! The charge calculation engine.
//!
//! Pure functions of (catalog, customer record, date interval): no
//! internal state, no I/O. The aggregator walks a customer's
//! subscriptions in stored order, the evaluator prices one subscription,
//! delegating day counting to [`dates`] and discount intersection to
//! [`discount`].

pub mod dates;
pub mod discount;

use crate::models::{Customer, ServiceCatalog, Subscription};
use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

/// Price and explanation for a single subscription.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCharge {
    /// Full-precision amount; display rounding happens at the boundary.
    pub amount: Decimal,
    pub note: String,
}

impl ServiceCharge {
    fn zero(note: String) -> Self {
        Self {
            amount: Decimal::ZERO,
            note,
        }
    }
}

/// Total charge for a customer plus one note per subscription, in
/// subscription order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargeBreakdown {
    pub total: Decimal,
    pub info: Vec<String>,
}

/// Price one subscription over the inclusive interval
/// `[query_start, query_end]`.
///
/// Every disqualifying condition (unknown service, service not yet
/// started, grace period consuming the window) yields a zero amount with
/// an explanatory note; none of them is an error.
pub fn evaluate_service(
    catalog: &ServiceCatalog,
    customer: &Customer,
    subscription: &Subscription,
    query_start: NaiveDate,
    query_end: NaiveDate,
) -> ServiceCharge {
    let Some(entry) = catalog.get(&subscription.name) else {
        tracing::debug!(
            customer_id = customer.id,
            service = %subscription.name,
            "Subscription references a service outside the provided catalog"
        );
        return ServiceCharge::zero(format!(
            "Service {} does not exist in the provided services catalog",
            subscription.name
        ));
    };

    let mut effective_start = query_start;

    // A service-specific start date postpones charging; it never moves
    // the start backwards.
    if let Some(service_start) = subscription.start_date {
        if service_start > query_end {
            return ServiceCharge::zero(format!(
                "Service {} starts {}, after the end of the charging period",
                subscription.name, service_start
            ));
        }
        if service_start > effective_start {
            effective_start = service_start;
        }
    }

    let free_days = i64::from(customer.free_days.unwrap_or(0));
    effective_start = match effective_start.checked_add_signed(Duration::days(free_days)) {
        Some(shifted) if shifted <= query_end => shifted,
        // A shift past the representable calendar is past any query end.
        _ => {
            return ServiceCharge::zero(format!(
                "Free days of customer {} consumed the charging period for service {}",
                customer.id, subscription.name
            ));
        }
    };

    let total_days = dates::count_billable_days(effective_start, query_end, entry.working_days_only);
    let resolved = discount::resolve(
        subscription.discount.as_ref(),
        entry.working_days_only,
        effective_start,
        query_end,
    );

    let price_per_day = subscription.price.unwrap_or(entry.price_per_day);

    let full_price_charge = Decimal::from(total_days - resolved.days) * price_per_day;
    let discounted_charge = Decimal::from(resolved.days) * resolved.retained * price_per_day;
    let amount = full_price_charge + discounted_charge;

    let note = format!(
        "Customer {} is charged {} for service {}",
        customer.id,
        amount.round_dp(3),
        subscription.name
    );
    ServiceCharge { amount, note }
}

/// Sum the charges for every subscription of a customer over the
/// inclusive interval `[query_start, query_end]`.
///
/// The total is left unrounded; the caller rounds once when presenting
/// it. An empty subscription list yields a zero total and no notes.
pub fn calculate_total_cost(
    catalog: &ServiceCatalog,
    customer: &Customer,
    query_start: NaiveDate,
    query_end: NaiveDate,
) -> ChargeBreakdown {
    let mut total = Decimal::ZERO;
    let mut info = Vec::with_capacity(customer.services.len());

    for subscription in &customer.services {
        let charge = evaluate_service(catalog, customer, subscription, query_start, query_end);
        total += charge.amount;
        info.push(charge.note);
    }

    ChargeBreakdown { total, info }
}
