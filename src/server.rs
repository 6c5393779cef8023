/// Server setup and initialization
///
/// Wires together the database, identity directory, workout store and
/// HTTP routes.

use crate::{
    api::{create_router, AppState},
    config::Config,
    identity::IdentityStore,
    store::Database,
    workout::WorkoutStore,
};
use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// Create the main Axum application with all routes
///
/// Opens the database (creating the schema if needed) and builds the
/// shared application state.
pub async fn create_app(config: &Config) -> Result<Router> {
    tracing::info!("🗄️ Connecting workout database");
    let database = Database::connect(&config.database)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to open workout database: {}", e))?;

    let state = AppState {
        store: WorkoutStore::new(database.pool().clone()),
        identities: IdentityStore::new(database.pool().clone()),
    };

    tracing::info!("📡 Creating HTTP router");
    let app = create_router(state);

    tracing::info!("✅ Application initialized successfully");

    Ok(app)
}

/// Start the HTTP server with the given configuration
pub async fn start_server(config: Config) -> Result<()> {
    // Initialize tracing subscriber for logging (RUST_LOG overrides)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_thread_ids(true)
        .with_level(true)
        .init();

    tracing::info!("Starting liftlog server...");

    let app = create_app(&config).await?;

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    tracing::info!("Server listening on http://{}", bind_addr);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
