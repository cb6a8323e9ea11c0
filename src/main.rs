//! Pulse: a liveness endpoint for monitoring and orchestration probes.
//!
//! This is the application entry point. It resolves configuration, initializes
//! tracing, and starts the HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pulse::config::{AppConfig, LogFormat, DEFAULT_LOG_FILTER};

/// Pulse: answers HTTP liveness probes
#[derive(Parser, Debug)]
#[command(name = "pulse", version, about)]
struct Args {
    /// Path to configuration file (defaults to config/default.toml when present)
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "pulse=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Listen host, overrides http.host
    #[arg(long, env = "PULSE_HOST")]
    host: Option<String>,

    /// Listen port, overrides http.port
    #[arg(short, long, env = "PULSE_PORT")]
    port: Option<u16>,
}

fn init_tracing(filter: &str, format: LogFormat) {
    let registry = tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(filter));

    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), pulse::Error> {
    let args = Args::parse();

    // Configuration first: the log format lives in it
    let config = AppConfig::resolve(args.config.as_deref())?.with_overrides(args.host, args.port);

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    init_tracing(&log_filter, config.logging.format);

    tracing::info!(
        addr = %config.http.addr(),
        timestamp = ?config.health.timestamp,
        log_format = ?config.logging.format,
        shutdown_grace_seconds = config.http.shutdown_grace_seconds,
        "Loaded configuration"
    );

    pulse::run(config).await
}
