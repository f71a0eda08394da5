use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use activities_portal::config::AppConfig;
use activities_portal::database::{self, schema};
use activities_portal::web;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        error!("server stopped: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    info!("connecting to database {}", config.database_url);

    let pool = database::connect(&config).await?;
    let report = schema::init_db(&pool).await?;
    info!(
        "database ready: seeded={}, existing={}",
        report.seeded, report.existing
    );

    let app = web::router(pool, &config.static_dir);

    let listener = bind_with_fallback(&config.host, config.port).await?;
    let bound_addr = listener.local_addr()?;
    info!("serving on http://{}", bound_addr);
    info!("portal at http://{}/static/index.html", bound_addr);

    axum::serve(listener, app).await?;
    Ok(())
}

// Tries `port`, then `port + 1` if the first bind fails.
async fn bind_with_fallback(host: &str, port: u16) -> std::io::Result<TcpListener> {
    let addr = parse_addr(host, port)?;
    match TcpListener::bind(addr).await {
        Ok(l) => Ok(l),
        Err(e) => {
            let fallback = parse_addr(host, port.saturating_add(1))?;
            warn!(
                "could not bind {}: {}, trying fallback {}",
                addr, e, fallback
            );
            TcpListener::bind(fallback).await
        }
    }
}

fn parse_addr(host: &str, port: u16) -> std::io::Result<SocketAddr> {
    format!("{}:{}", host, port)
        .parse()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))
}
