//! Location check route: which reminders contain a probe location.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use store::validation::validate_coordinates;
use store::Reminder;
use tracing::info;

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// A probe location submitted by the client.
#[derive(Debug, Default, Deserialize)]
pub struct LocationRequest {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// A reminder whose geofence contains the probe location.
#[derive(Debug, Serialize)]
pub struct TriggeredReminder {
    #[serde(flatten)]
    pub reminder: Reminder,
    /// Great-circle distance from the probe to the fence center.
    pub distance_meters: f64,
}

/// Evaluate every stored geofence against a probe location.
///
/// Returns the reminders whose fence contains the probe, boundary
/// inclusive, each with its distance in meters.
pub async fn check_location(
    State(state): State<AppState>,
    body: Option<Json<LocationRequest>>,
) -> Result<Json<Vec<TriggeredReminder>>> {
    let Some(Json(req)) = body else {
        return Err(ApiError::MissingBody);
    };

    let latitude = req.latitude.unwrap_or(f64::NAN);
    let longitude = req.longitude.unwrap_or(f64::NAN);
    validate_coordinates(latitude, longitude).map_err(ApiError::Store)?;

    let triggered: Vec<TriggeredReminder> = state
        .store
        .list()
        .await
        .into_iter()
        .filter_map(|reminder| {
            let distance_meters = geofence::haversine_distance(
                latitude,
                longitude,
                reminder.latitude,
                reminder.longitude,
            );
            (distance_meters <= reminder.radius).then_some(TriggeredReminder {
                reminder,
                distance_meters,
            })
        })
        .collect();

    info!(
        latitude,
        longitude,
        triggered = triggered.len(),
        "Checked location against geofences"
    );
    Ok(Json(triggered))
}
