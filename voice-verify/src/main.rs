use anyhow::Context;
use dotenvy::dotenv;
use std::sync::Arc;
use tracing::info;
use voice_verify::config::get_configuration;
use voice_verify::services::{MessageBirdClient, Metrics, Verifier};
use voice_verify::startup::build_router;
use voice_verify::telemetry::init_tracing;
use voice_verify::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Errors before this point have no subscriber; anyhow prints them on exit.
    let configuration = get_configuration().context("Failed to read configuration")?;
    init_tracing("voice-verify", &configuration.telemetry)?;

    let messagebird = MessageBirdClient::new(configuration.messagebird.clone())
        .context("Failed to create MessageBird client")?;
    info!(base_url = %messagebird.base_url(), "MessageBird client ready");

    let metrics = Arc::new(Metrics::new().context("Failed to register metrics")?);
    let app = build_router(AppState::new(Verifier::new(Arc::new(messagebird)), metrics));

    let address = format!(
        "{}:{}",
        configuration.server.host, configuration.server.port
    );
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind to address {}", address))?;

    info!("Starting voice-verify on {}", address);
    axum::serve(listener, app).await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })?;

    Ok(())
}
