//! divide-web - digitaldivide.ai atlas service
//!
//! Serves the world map of AI language-technology availability (ASR, NMT,
//! TTS) and its JSON API from a read-only PostgreSQL connection.

use std::net::{IpAddr, SocketAddr};

use anyhow::Result;
use clap::Parser;
use divide_common::config::DatabaseSettings;
use divide_web::{build_router, db, AppState};
use tracing::{error, info};

/// Command-line arguments for divide-web
#[derive(Parser, Debug)]
#[command(name = "divide-web")]
#[command(about = "digitaldivide.ai language-technology atlas")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "8080", env = "DIVIDE_PORT")]
    port: u16,

    /// Address to bind
    #[arg(short, long, default_value = "0.0.0.0", env = "DIVIDE_BIND")]
    bind: IpAddr,

    /// Postgres connection URL (overrides environment and config file)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file for local development (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "divide_web=info,tower_http=info".into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting digitaldivide.ai atlas (divide-web) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    let settings = DatabaseSettings::resolve(args.database_url.as_deref())?;

    let pool = match db::connect(&settings).await {
        Ok(pool) => {
            info!("✓ Connected to database (read-only)");
            pool
        }
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e);
        }
    };

    let state = AppState::new(pool);
    let app = build_router(state);

    let addr = SocketAddr::from((args.bind, args.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("divide-web listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
