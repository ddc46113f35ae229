//! ItemSrv entry point
//!
//! Loads configuration, initializes logging and storage, and serves the
//! item API plus the UI page.

use anyhow::Context;
use clap::{Parser, Subcommand};
use itemsrv::{create_routes, AppState, ItemsrvConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::{net::TcpListener, signal};
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "ItemSrv - item record management service")]
struct Args {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and storage connectivity
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match args.config {
        Some(path) => ItemsrvConfig::from_file(path)?,
        None => ItemsrvConfig::load()?,
    };
    config.validate()?;

    itemsrv::logging::init(&config.log.level);

    match args.command {
        Some(Commands::Check) => check_config(config).await,
        None => run_service(config).await,
    }
}

/// Run the HTTP service
async fn run_service(config: ItemsrvConfig) -> anyhow::Result<()> {
    info!("Starting itemsrv v{}", env!("CARGO_PKG_VERSION"));

    let pool = item_store::connect(&config.database.path)
        .await
        .context("failed to open database")?;
    item_store::ensure_schema(&pool)
        .await
        .context("failed to initialize schema")?;

    let addr = format!("{}:{}", config.api.host, config.api.port);
    let state = Arc::new(AppState::new(Arc::new(config), pool));
    let app = create_routes(state);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("HTTP server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server has shut down gracefully");
    Ok(())
}

/// Check configuration and storage without serving
async fn check_config(config: ItemsrvConfig) -> anyhow::Result<()> {
    println!("=== ItemSrv configuration check ===\n");

    println!("API address:  http://{}:{}", config.api.host, config.api.port);
    println!("Database:     {}", config.database.path);
    println!("Assets dir:   {}", config.assets.dir);
    println!("Log level:    {}", config.log.level);

    print!("\nDatabase connection: ");
    let pool = item_store::connect(&config.database.path).await?;
    item_store::ensure_schema(&pool).await?;
    let items = item_store::list_items(&pool).await?;
    println!("ok ({} items)", items.len());

    print!("UI page: ");
    let ui_path = std::path::Path::new(&config.assets.dir).join("ui.html");
    if ui_path.exists() {
        println!("ok ({})", ui_path.display());
    } else {
        println!("missing ({})", ui_path.display());
    }

    println!("\nAll checks passed");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
