use lowscan::{build_router, config::AppConfig, AppState};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .init();

    info!("==================================================");
    info!("  LOWSCAN - 52-Week Low Scanner");
    info!("==================================================");

    let state = Arc::new(AppState::new(config.universe_seed));
    info!(
        "Universe generated: {} listings (seed {})",
        state.scanner().listing_count(),
        config.universe_seed
    );

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    info!("Server running on port {}", config.port);
    axum::serve(listener, app).await?;
    Ok(())
}
