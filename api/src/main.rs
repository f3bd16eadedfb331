use actix_web::{App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

use sf_api::{configure, telemetry, AppState};
use sf_infra::Infrastructure;
use sf_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    telemetry::init_tracing(&config.logging)?;

    tracing::info!(
        environment = %config.environment,
        sms_provider = %config.sms.provider,
        "Starting SMS forwarder"
    );

    let infrastructure = Infrastructure::build(&config)
        .await
        .context("Failed to initialize infrastructure")?;
    let state = AppState::new(infrastructure, &config);

    match state.monitoring.is_enabled().await {
        Ok(enabled) => tracing::info!(monitoring_enabled = enabled, "Monitoring state loaded"),
        Err(e) => tracing::warn!(error = %e, "Could not read monitoring state"),
    }

    let bind_address = config.server.bind_address();
    tracing::info!(address = %bind_address, "Server will bind");

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .configure(configure(state.clone()))
    })
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?;

    // 0 keeps actix-web's default of one worker per core
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.run().await?;

    tracing::info!("Server stopped");
    Ok(())
}
