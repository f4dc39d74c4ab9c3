use hostelhub_api::{build_router, seed, state::AppState};
use hostelhub_config::Settings;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file (silently ignore if missing)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "hostelhub_api=debug,hostelhub_services=debug,hostelhub_store=debug,tower_http=debug"
                .into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load config
    let settings = Settings::load()?;
    info!(
        "Starting HostelHub API on {}:{}",
        settings.app.host, settings.app.port
    );

    // Build app state
    let app_state = AppState::new(settings.clone());

    // Load the demo dataset; all state is in-memory
    if settings.seed.enabled {
        seed::seed_demo_data(&app_state)?;
    }

    // Build router
    let app = build_router(app_state);

    // Start server
    let addr = format!("{}:{}", settings.app.host, settings.app.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
