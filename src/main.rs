use std::sync::Arc;

use matinee_api::api::{create_router, AppState};
use matinee_api::config::Config;
use matinee_api::services::providers::JsonServerProvider;
use matinee_api::services::snapshot;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "matinee_api=debug,tower_http=info".into()),
        )
        .init();

    let provider = Arc::new(JsonServerProvider::new(config.data_service_url.clone()));

    // Load the initial snapshot before accepting traffic.
    let initial = snapshot::load_snapshot(provider.as_ref()).await?;
    let state = AppState::new(initial, provider);

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!(address = %listener.local_addr()?, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
