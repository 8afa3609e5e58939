use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use visafee::config::{AppConfig, Config};
use visafee::middleware::RequestId;
use visafee::schedules::{FileScheduleRepository, ScheduleCatalog};

fn init_tracing(app: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("visafee={},actix_web=info", app.log_level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if app.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config
        .validate()
        .context("Configuration validation failed")?;

    init_tracing(&config.app);

    tracing::info!("Starting visa fee calculation service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Load the fee schedule snapshot
    let repository = FileScheduleRepository::new(config.schedule.path.clone())
        .context("Invalid fee schedule location")?;
    let catalog = ScheduleCatalog::load(Arc::new(repository))
        .await
        .with_context(|| {
            format!(
                "Failed to load fee schedule from {}",
                config.schedule.path.display()
            )
        })?;

    tracing::info!(
        "Fee schedule loaded ({} records)",
        catalog.snapshot().len()
    );

    let catalog = web::Data::new(catalog);

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .app_data(catalog.clone())
            .configure(visafee::configure_extractors)
            .configure(visafee::configure_routes)
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("Server terminated with an error")
}
