//! Pizzeria service - CLI server
//!
//! ```sh
//! # Run with default config (~/.config/pizzeria-service/config.toml)
//! pizzeria-service
//!
//! # Custom config path, port and sample data
//! pizzeria-service --config /etc/pizzeria/config.toml --port 8080 --seed
//!
//! # Print the resolved configuration without starting
//! pizzeria-service --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use pizzeria::config::AppConfig;
use pizzeria::server::{init_tracing, ServerHandle, ServerOptions};

/// Restaurants, pizzas and restaurant pizzas over HTTP.
#[derive(Parser, Debug)]
#[command(
    name = "pizzeria-service",
    version,
    about = "HTTP data service for restaurants and their pizzas",
    long_about = "Pizzeria service: REST API over a SQLite store of restaurants, \
                  pizzas and the prices restaurants charge for them.\n\n\
                  Default config: ~/.config/pizzeria-service/config.toml \
                  (or $PIZZERIA_CONFIG). DB_URI overrides the database URL."
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the HTTP listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Print the resolved configuration and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,

    /// Insert sample restaurants and pizzas when the database is empty.
    #[arg(long)]
    seed: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.unwrap_or_else(pizzeria::default_config_path);

    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    // ── Config check mode ──────────────────────────────────────
    if cli.check {
        if let Some(e) = load_error {
            return Err(e.into());
        }
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Address     : {}", config.server.address());
        println!("   Database    : {}", config.database.url);
        println!("   Log level   : {} ({})", config.logging.level, config.logging.format);
        println!("   Seed        : {}", config.seed.enabled || cli.seed);
        return Ok(());
    }

    init_tracing(&config);
    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => {
            error!("{}", e);
            error!("Using default configuration.");
        }
    }
    if let Some(port) = cli.port {
        info!("CLI override: port = {}", port);
    }

    // ── Start server ───────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
        seed: cli.seed,
    })
    .await?;

    handle.install_signal_handler();
    info!("Press Ctrl+C to shutdown gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
