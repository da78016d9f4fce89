//! AeraSync Aerator Server
//!
//! REST API server for the aerator comparison engine.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use aerator_server::config::{build_config, CliArgs as ConfigCliArgs};
use aerator_server::server::Server;

/// AeraSync Aerator Server - REST API for aerator comparison
#[derive(Parser, Debug)]
#[command(name = "aerator_server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (TOML format)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Host address to bind to
    #[arg(long, env = "AERATOR_SERVER_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "AERATOR_SERVER_PORT")]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "AERATOR_LOG_LEVEL")]
    log_level: Option<String>,

    /// Directory holding the grid JSON files (bundled tables when omitted)
    #[arg(long, env = "AERATOR_DATA_DIR", value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Comparison history log path (disabled when omitted)
    #[arg(long, env = "AERATOR_HISTORY_PATH", value_name = "FILE")]
    history_path: Option<PathBuf>,
}

impl From<Args> for ConfigCliArgs {
    fn from(args: Args) -> Self {
        ConfigCliArgs {
            config_file: args.config,
            host: args.host,
            port: args.port,
            log_level: args.log_level,
            data_dir: args.data_dir,
            history_path: args.history_path,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let cli_args: ConfigCliArgs = args.into();
    let config = build_config(&cli_args)?;

    // Initialize tracing
    init_tracing(config.log_level.as_filter_str());

    tracing::info!("AeraSync Aerator Server v{}", aerator_server::VERSION);
    tracing::info!(
        host = %config.host,
        port = %config.port,
        log_level = %config.log_level,
        environment = %config.environment,
        data_dir = ?config.data_dir,
        history_path = ?config.history_path,
        "Server configuration loaded"
    );

    // Create and start the server
    let server = Server::new(config)?;
    tracing::info!(address = %server.socket_addr(), "Starting server");

    server.run().await?;

    Ok(())
}
