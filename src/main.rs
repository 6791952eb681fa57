//! fibload entry point.
//!
//! Parses CLI arguments, loads configuration, initializes tracing, builds the
//! single-worker runtime, and serves the router until shutdown.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use fibload::config::{
    AppConfig, LogFormat, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER, FIB_INPUT, MAX_PARALLELISM,
};
use fibload::http::start_server;
use fibload::runtime::build_runtime;
use fibload::{create_router, AppState, Workload};

/// fibload: a single-core CPU load generator
#[derive(Parser, Debug)]
#[command(name = "fibload", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "fibload=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

fn init_tracing(filter: &str, format: LogFormat) {
    let registry = tracing_subscriber::registry().with(EnvFilter::new(filter));
    match format {
        LogFormat::Text => registry.with(fmt::layer()).init(),
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
    }
}

fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let workload = Workload::new(FIB_INPUT)?;

    let runtime = build_runtime()?;
    tracing::info!(
        workers = MAX_PARALLELISM,
        fib_input = workload.input(),
        "Runtime limited to a single worker thread"
    );

    let app = create_router(AppState::new(workload));
    runtime.block_on(start_server(app, &config))?;

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    // Load config before tracing so the log format can come from it
    let config = AppConfig::load_or_default(&args.config);
    let format = config
        .as_ref()
        .map(|c| c.logging.format)
        .unwrap_or_default();
    init_tracing(&log_filter, format);

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, path = %args.config, "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(path = %args.config, "Loaded configuration");

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Failed to start server");
            ExitCode::FAILURE
        }
    }
}
