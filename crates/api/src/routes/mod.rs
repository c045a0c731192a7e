//! Route handlers for the reminder API.

pub mod health;
pub mod location;
pub mod reminders;

use axum::routing::{get, post, put};
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health))
        // Reminder CRUD
        .route(
            "/api/reminders",
            get(reminders::list_reminders).post(reminders::create_reminder),
        )
        .route(
            "/api/reminders/:id",
            put(reminders::update_reminder).delete(reminders::delete_reminder),
        )
        // Geofence evaluation against the current location
        .route("/api/location/check", post(location::check_location))
}
