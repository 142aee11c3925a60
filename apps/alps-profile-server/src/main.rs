mod config;
mod logging;

use std::path::{Path, PathBuf};

use alps_profile::AlpsProfileModule;
use alps_profile::api::rest::dto::AlpsDto;
use anyhow::Result;
use axum::Router;
use clap::{Parser, Subcommand};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;

/// ALPS Profile Server - serves profile documents for exposed domain types
#[derive(Parser)]
#[command(name = "alps-profile-server")]
#[command(about = "ALPS Profile Server - serves profile documents for exposed domain types")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and the exposed type catalog, then exit
    Check,
    /// Print a profile document to stdout and exit
    Dump {
        /// Collection relation of a single type; all types when omitted
        #[arg(long)]
        rel: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(ref path) = cli.config
        && !Path::new(path).is_file()
    {
        anyhow::bail!("config file does not exist: {}", path.to_string_lossy());
    }

    // Layered config:
    // 1) defaults -> 2) YAML (if provided) -> 3) env (ALPS__*) -> 4) CLI overrides
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(cli.port, cli.verbose);

    logging::init_logging(&config.logging);

    if cli.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(&config).await,
        Commands::Check => check_config(&config),
        Commands::Dump { rel } => dump_document(&config, rel.as_deref()),
    }
}

fn build_module(config: &AppConfig) -> Result<AlpsProfileModule> {
    let module = AlpsProfileModule::from_config(config.alps_profile.clone(), &config.catalog)?;
    Ok(module)
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    let module = build_module(config)?;
    let document = module.client().profile_document()?;

    println!("Configuration is valid");
    println!(
        "{} exposed types, {} top-level descriptors",
        config.catalog.entities.len(),
        document.descriptors.len()
    );
    Ok(())
}

fn dump_document(config: &AppConfig, rel: Option<&str>) -> Result<()> {
    let module = build_module(config)?;
    let client = module.client();
    let document = match rel {
        Some(rel) => client.entity_profile(rel)?,
        None => client.profile_document()?,
    };

    let dto = AlpsDto::from(document);
    let rendered = if config.alps_profile.pretty_print {
        serde_json::to_string_pretty(&dto)?
    } else {
        serde_json::to_string(&dto)?
    };
    println!("{rendered}");
    Ok(())
}

async fn run_server(config: &AppConfig) -> Result<()> {
    tracing::info!("ALPS Profile Server starting");

    let module = build_module(config)?;
    let app = module
        .register_rest(Router::new())
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.server.bind_addr, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        base_path = %config.alps_profile.base_path,
        "Listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("ALPS Profile Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
