use crate::limiter::FixedWindowLimiter;

// app's shared state
pub struct AppState {
    pub limiter: FixedWindowLimiter,    // keyed decisions for the backend
    pub ip_limiter: FixedWindowLimiter, // per-client-IP guard on this service
}
