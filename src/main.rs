use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use sensasi_ratelimit::config::Args;
use sensasi_ratelimit::handlers::{check_handler, health_handler, metrics_handler};
use sensasi_ratelimit::limiter::{FixedWindowLimiter, LimiterConfig};
use sensasi_ratelimit::middleware::ip_guard;
use sensasi_ratelimit::state::AppState;
use sensasi_ratelimit::sweeper::sweep_loop;

#[tokio::main]
async fn main() {
    // parse cli arguments
    let args = Args::parse();
    let window = Duration::from_secs(args.rate_window);

    // creating shared state
    let state = Arc::new(AppState {
        limiter: FixedWindowLimiter::new(LimiterConfig {
            max_requests: args.rate_limit,
            window,
        }),
        ip_limiter: FixedWindowLimiter::new(LimiterConfig {
            max_requests: args.ip_rate_limit,
            window,
        }),
    });

    // spawn the background sweeper
    let sweep_state = Arc::clone(&state);
    tokio::spawn(async move {
        sweep_loop(sweep_state, Duration::from_secs(args.sweep_interval)).await;
    });

    // creating the router with routes
    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/api/check", post(check_handler))
        .route("/metrics", get(metrics_handler))
        .layer(axum_middleware::from_fn_with_state(
            Arc::clone(&state),
            ip_guard,
        ))
        .with_state(state);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    println!("Rate limit service running on http://localhost:{}", args.port);
    println!(
        "Limit: {} requests per {} seconds per key",
        args.rate_limit, args.rate_window
    );
    println!(
        "IP guard: {} requests per {} seconds, sweep every {} seconds",
        args.ip_rate_limit, args.rate_window, args.sweep_interval
    );
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}
