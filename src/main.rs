//! User Service — CLI server
//!
//! ```sh
//! # Run with default config (~/.config/user-service/config.toml)
//! user-service
//!
//! # Custom config path and port
//! user-service --config /etc/user-service/config.toml --port 8080
//!
//! # Validate config without starting
//! user-service --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use user_service::server::{init_tracing, ServerHandle, ServerOptions};
use user_service::{default_config_path, AppConfig};

/// User CRUD REST service over an in-memory store.
#[derive(Parser, Debug)]
#[command(name = "user-service", version, about)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "USER_SERVICE_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listen host.
    #[arg(long)]
    host: Option<String>,

    /// Override the listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.unwrap_or_else(default_config_path);

    let mut config = match AppConfig::load(&config_path) {
        Ok(cfg) => cfg,
        Err(e) if cli.check => {
            eprintln!("Configuration is invalid: {}", e);
            return Err(e.into());
        }
        Err(e) => {
            let mut config = AppConfig::default();
            if let Some(ref level) = cli.log_level {
                config.logging.level = level.clone();
            }
            init_tracing(&config);
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
            return run(config, cli.host.as_deref(), cli.port).await;
        }
    };

    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   API address : {}", config.address());
        println!("   Failure mode: {:?}", config.api.failure_status);
        println!("   Seed users  : {}", config.storage.seed.len());
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    init_tracing(&config);
    info!("Configuration loaded from {}", config_path.display());

    run(config, cli.host.as_deref(), cli.port).await
}

async fn run(
    mut config: AppConfig,
    host: Option<&str>,
    port: Option<u16>,
) -> Result<(), Box<dyn std::error::Error>> {
    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(host) = host {
        info!("CLI override: host = {}", host);
        config.server.host = host.to_string();
    }
    if let Some(port) = port {
        info!("CLI override: port = {}", port);
        config.server.port = port;
    }

    let handle = ServerHandle::start(ServerOptions { config }).await?;

    // Install OS signal handlers (SIGTERM, SIGINT)
    handle.install_signal_handler();

    info!("Press Ctrl+C to shutdown gracefully.");

    handle.wait().await;
    info!("User service shutdown complete");

    Ok(())
}
