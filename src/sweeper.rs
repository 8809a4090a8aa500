use std::sync::Arc;
use tokio::time::{Duration, interval};

use crate::metrics::TRACKED_KEYS;
use crate::state::AppState;

// Background sweep - drops expired records so the stores stay bounded
pub async fn sweep_loop(state: Arc<AppState>, sweep_interval: Duration) {
    let mut ticker = interval(sweep_interval);

    println!("Sweeper started (interval: {:?})", sweep_interval);

    loop {
        ticker.tick().await;

        state.limiter.sweep();
        state.ip_limiter.sweep();

        TRACKED_KEYS.set(state.limiter.tracked_keys() as f64);
    }
}
