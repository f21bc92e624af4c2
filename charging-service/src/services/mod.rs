//! Services module for charging-service.

pub mod charging;
pub mod metrics;
pub mod store;

pub use charging::{calculate_total_cost, evaluate_service, ChargeBreakdown, ServiceCharge};
pub use metrics::{
    get_metrics, init_metrics, record_charge_amount, record_charge_request, record_error,
    record_service_evaluation,
};
pub use store::CustomerStore;
