use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use emotion_decoder::{
    api::{self, AppState},
    config::AppConfig,
    logging, manager,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init_tracing();

    let config = AppConfig::from_env()?;
    info!(model = %config.model_name(), device = %config.device, "loading emotion model");

    // Fatal on failure: nothing is served without a model.
    let analyzer = {
        let config = config.clone();
        tokio::task::spawn_blocking(move || manager::load_analyzer(&config))
            .await
            .context("model loading task aborted")??
    };

    let app = api::router(AppState::new(analyzer, config.model_name()));

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!("🌐 HTTP listening on http://{}", config.bind_addr);
    info!("🛠 Analyze API at http://{}/api/analyze", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
