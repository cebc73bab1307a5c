use anyhow::Result;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use days_api::{server, ApiConfig, ApiState};
use days_core::Ledger;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "days_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    // Get configuration
    let config = ApiConfig::from_env()?;

    // History lives as long as the server
    let state = ApiState::new(Arc::new(Ledger::new()));

    server::serve(&config.bind_addr(), state).await
}
