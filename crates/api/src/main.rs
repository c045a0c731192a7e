//! Geofence reminder API server.
//!
//! Serves the reminder CRUD endpoints and the location-check endpoint
//! over an in-memory store, plus static client assets under `/static`.

use store::ReminderStore;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::info;

use api::config::Config;
use api::routes;
use api::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting reminder API server");

    // Build application state around a fresh in-memory store.
    // Reminders live for the lifetime of the process.
    let state = AppState::new(ReminderStore::new());

    // Build router
    let app = routes::router()
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .layer(CorsLayer::permissive())
        .with_state(state);

    // Start server
    info!(addr = %config.addr, "Reminder API listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
