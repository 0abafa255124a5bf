//! FairHub backend server
//!
//! Main application entry point

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use fairhub::{
    api::{build_router, shutdown_signal, AppState},
    config::Settings,
    database::{connection::create_pool, DatabaseService},
    services::ServiceFactory,
    utils::logging,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard must outlive the server
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting FairHub backend...");

    // Initialize database connection
    info!("Connecting to database...");
    let db_config = fairhub::database::connection::DatabaseConfig {
        url: settings.database.url.clone(),
        max_connections: settings.database.max_connections,
        min_connections: settings.database.min_connections,
        acquire_timeout: std::time::Duration::from_secs(30),
        idle_timeout: Some(std::time::Duration::from_secs(600)),
        max_lifetime: Some(std::time::Duration::from_secs(1800)),
    };
    let db_pool = create_pool(&db_config).await?;

    // Run database migrations
    info!("Running database migrations...");
    fairhub::database::run_migrations(&db_pool).await?;

    // Initialize services
    info!("Initializing services...");
    let database_service = DatabaseService::new(db_pool);
    let services = ServiceFactory::new(settings.clone(), database_service);

    let state = AppState {
        services: Arc::new(services),
        settings: Arc::new(settings.clone()),
    };

    let app = build_router(state);

    let address = format!("{}:{}", settings.server.host, settings.server.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("FairHub backend running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("FairHub backend has been shut down.");

    Ok(())
}
