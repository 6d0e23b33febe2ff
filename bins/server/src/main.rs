//! Income Lens API Server
//!
//! Main entry point for the Income Lens backend service.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use incomelens_api::{AppState, create_router};
use incomelens_core::session::CompanySession;
use incomelens_market::{FmpClient, ProfileCache};
use incomelens_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "incomelens=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;

    // Create market data client
    let client = FmpClient::new(&config.upstream)?;
    info!(
        base_url = %config.upstream.base_url,
        period = %config.upstream.period,
        timeout_secs = config.upstream.timeout_secs,
        "Market data client configured"
    );

    // Create application state
    let state = AppState {
        source: Arc::new(client),
        profiles: ProfileCache::new(&config.cache),
        session: CompanySession::new(),
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
