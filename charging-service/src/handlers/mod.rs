mod charge;
mod health;

pub use charge::calculate_charge;
pub use health::{health_check, metrics_handler, readiness_check};
