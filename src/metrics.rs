use lazy_static::lazy_static;
use prometheus::{Counter, Gauge, register_counter, register_gauge};

lazy_static! {
    pub static ref CHECKS_TOTAL: Counter = register_counter!(
        "sensasi_ratelimit_checks_total",
        "Total number of rate limit decisions requested"
    )
    .unwrap();
    pub static ref CHECKS_ALLOWED: Counter = register_counter!(
        "sensasi_ratelimit_checks_allowed_total",
        "Total allowed decisions"
    )
    .unwrap();
    pub static ref CHECKS_DENIED: Counter = register_counter!(
        "sensasi_ratelimit_checks_denied_total",
        "Total denied decisions"
    )
    .unwrap();
    pub static ref IP_DENIED: Counter = register_counter!(
        "sensasi_ratelimit_ip_denied_total",
        "Requests rejected by the per-IP guard"
    )
    .unwrap();
    pub static ref TRACKED_KEYS: Gauge = register_gauge!(
        "sensasi_ratelimit_tracked_keys",
        "Current number of keys in the limiter store"
    )
    .unwrap();
}
