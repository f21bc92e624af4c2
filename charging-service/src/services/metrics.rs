//! Metrics module for charging-service.
//! Provides Prometheus metrics for charge requests and per-service pricing.

use once_cell::sync::Lazy;
use prometheus::{
    histogram_opts, opts, register_histogram_vec, register_int_counter_vec, Encoder, HistogramVec,
    IntCounterVec, TextEncoder,
};
use std::sync::OnceLock;

/// Charge computation duration histogram
pub static CHARGE_COMPUTE_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    register_histogram_vec!(
        histogram_opts!(
            "charging_compute_duration_seconds",
            "Charge computation duration"
        ),
        &["endpoint"]
    )
    .expect("Failed to register CHARGE_COMPUTE_DURATION")
});

/// Charge requests counter by outcome
pub static CHARGE_REQUESTS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

/// Per-service evaluation counter
pub static SERVICE_EVALUATIONS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

/// Charged amount counter (monetary tracking)
pub static CHARGE_AMOUNT_TOTAL: OnceLock<prometheus::CounterVec> = OnceLock::new();

/// Error counter for alerting
pub static ERRORS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

/// Initialize all metrics. Call once at startup.
pub fn init_metrics() {
    // Charge requests by outcome
    CHARGE_REQUESTS_TOTAL.get_or_init(|| {
        register_int_counter_vec!(
            opts!(
                "charging_requests_total",
                "Total charge requests by outcome"
            ),
            &["outcome"]
        )
        .expect("Failed to register CHARGE_REQUESTS_TOTAL")
    });

    // Per-service evaluations
    SERVICE_EVALUATIONS_TOTAL.get_or_init(|| {
        register_int_counter_vec!(
            opts!(
                "charging_service_evaluations_total",
                "Total subscription evaluations by service name"
            ),
            &["service"]
        )
        .expect("Failed to register SERVICE_EVALUATIONS_TOTAL")
    });

    // Charged amount for financial tracking
    CHARGE_AMOUNT_TOTAL.get_or_init(|| {
        prometheus::register_counter_vec!(
            prometheus::opts!(
                "charging_amount_total",
                "Total amount charged across all customers"
            ),
            &["endpoint"]
        )
        .expect("Failed to register CHARGE_AMOUNT_TOTAL")
    });

    // Error counter for alerting
    ERRORS_TOTAL.get_or_init(|| {
        register_int_counter_vec!(
            opts!("charging_errors_total", "Total errors by type for alerting"),
            &["error_type", "endpoint"]
        )
        .expect("Failed to register ERRORS_TOTAL")
    });

    // Force initialization of lazy statics
    let _ = &*CHARGE_COMPUTE_DURATION;
}

/// Get metrics in Prometheus text format.
pub fn get_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .expect("Failed to encode metrics");
    String::from_utf8(buffer).expect("Failed to convert metrics to string")
}

/// Record a charge request outcome.
pub fn record_charge_request(outcome: &str) {
    if let Some(counter) = CHARGE_REQUESTS_TOTAL.get() {
        counter.with_label_values(&[outcome]).inc();
    }
}

/// Record a subscription evaluation.
pub fn record_service_evaluation(service: &str) {
    if let Some(counter) = SERVICE_EVALUATIONS_TOTAL.get() {
        counter.with_label_values(&[service]).inc();
    }
}

/// Record a charged amount for financial tracking.
pub fn record_charge_amount(endpoint: &str, amount: f64) {
    if let Some(counter) = CHARGE_AMOUNT_TOTAL.get() {
        counter.with_label_values(&[endpoint]).inc_by(amount.abs());
    }
}

/// Record an error for alerting.
pub fn record_error(error_type: &str, endpoint: &str) {
    if let Some(counter) = ERRORS_TOTAL.get() {
        counter.with_label_values(&[error_type, endpoint]).inc();
    }
}
