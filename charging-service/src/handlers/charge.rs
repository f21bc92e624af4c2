use crate::dtos::{ChargeRequest, ChargeResponse};
use crate::services::charging::{self, dates};
use crate::services::{
    record_charge_amount, record_charge_request, record_error, record_service_evaluation,
};
use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use service_core::error::AppError;
use validator::Validate;

/// Compute the charge for a customer over an inclusive date interval.
///
/// Malformed dates and unknown customers are client errors; an inverted
/// interval is a normal zero-charge result.
pub async fn calculate_charge(
    State(state): State<AppState>,
    Json(request): Json<ChargeRequest>,
) -> Result<impl IntoResponse, AppError> {
    request.validate()?;

    let start = dates::parse_date(&request.start_date).ok_or_else(|| {
        record_error("malformed_date", "/charges");
        AppError::BadRequest(anyhow::anyhow!(
            "start_date must be a YYYY-MM-DD calendar date, got {:?}",
            request.start_date
        ))
    })?;
    let end = dates::parse_date(&request.end_date).ok_or_else(|| {
        record_error("malformed_date", "/charges");
        AppError::BadRequest(anyhow::anyhow!(
            "end_date must be a YYYY-MM-DD calendar date, got {:?}",
            request.end_date
        ))
    })?;

    let customer = state.store.find(request.customer_id).ok_or_else(|| {
        record_error("customer_not_found", "/charges");
        AppError::NotFound(anyhow::anyhow!(
            "Found no customer with ID: {}",
            request.customer_id
        ))
    })?;

    if start > end {
        tracing::warn!(
            customer_id = customer.id,
            start_date = %start,
            end_date = %end,
            "Charging period is inverted, nothing to charge"
        );
        record_charge_request("inverted_interval");
        return Ok(Json(ChargeResponse {
            charge_price: Decimal::ZERO,
            info: vec![format!(
                "start_date {} is after end_date {}, nothing to charge",
                start, end
            )],
        }));
    }

    let timer = crate::services::metrics::CHARGE_COMPUTE_DURATION
        .with_label_values(&["/charges"])
        .start_timer();
    let breakdown = charging::calculate_total_cost(&state.catalog, customer, start, end);
    timer.observe_duration();

    for subscription in &customer.services {
        record_service_evaluation(&subscription.name);
    }
    record_charge_amount("/charges", breakdown.total.to_f64().unwrap_or(0.0));
    record_charge_request("charged");

    let charge_price = breakdown.total.round_dp(3);
    tracing::info!(
        customer_id = customer.id,
        charge_price = %charge_price,
        subscriptions = customer.services.len(),
        "Charge computed"
    );

    Ok(Json(ChargeResponse {
        charge_price,
        info: breakdown.info,
    }))
}
