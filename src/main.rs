use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use mergington::config::Config;
use mergington::database::seed_directory;
use mergington::services::ActivitiesService;
use mergington::web;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();

    let directory = seed_directory();
    info!(activities = directory.len(), "directory seeded");
    let service = ActivitiesService::new(directory);

    let app = web::app(service, &config.static_dir);

    let addr = config.addr()?;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.fallback_addr()?;
            warn!(%addr, %fallback, error = %e, "bind failed, trying fallback port");
            tokio::net::TcpListener::bind(fallback).await?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("Server running on http://{}", bound_addr);
    info!("Open http://{}{}", bound_addr, web::LANDING_PAGE);

    axum::serve(listener, app).await?;
    Ok(())
}
