use clap::Parser;

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "sensasi-ratelimit")]
#[command(about = "Fixed-window rate limit service for the sensasiwangi.id backend")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    // Max requests allowed per key per window
    #[arg(long, default_value_t = 5)]
    pub rate_limit: u32,

    // Window length in seconds
    #[arg(long, default_value_t = 60)]
    pub rate_window: u64,

    // Max requests per client IP per window (guards this service itself)
    #[arg(long, default_value_t = 120)]
    pub ip_rate_limit: u32,

    // How often to sweep expired records, in seconds
    #[arg(long, default_value_t = 60)]
    pub sweep_interval: u64,
}
