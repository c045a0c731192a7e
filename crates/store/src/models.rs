//! Reminder records and the typed inputs that mutate them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A geofence-triggered reminder.
///
/// `latitude`/`longitude` define the fence center in decimal degrees,
/// `radius` the trigger distance in meters. Coordinates outside the
/// usual geographic ranges are accepted as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    /// UUID assigned at creation, immutable.
    pub id: String,
    /// Fence center latitude in decimal degrees.
    pub latitude: f64,
    /// Fence center longitude in decimal degrees.
    pub longitude: f64,
    /// Trigger radius in meters, always > 0.
    pub radius: f64,
    /// Reminder text, never empty or whitespace-only.
    pub text: String,
    /// Creation timestamp (UTC, ISO-8601 on the wire).
    pub created_at: DateTime<Utc>,
    /// Whether the reminder has fired. Defaults to false and is never
    /// set by any operation in this crate; clients carry it.
    pub triggered: bool,
}

/// Input for creating a reminder. All fields required; validation
/// happens in the store, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReminder {
    pub latitude: f64,
    pub longitude: f64,
    pub radius: f64,
    pub text: String,
}

/// Partial update for an existing reminder.
///
/// Each field is independently optional. Coordinates only travel as a
/// pair: a lone latitude or longitude cannot be expressed here, which
/// keeps half-updated centers impossible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReminderPatch {
    /// New trigger radius, if changing.
    pub radius: Option<f64>,
    /// New reminder text, if changing.
    pub text: Option<String>,
    /// New fence center as (latitude, longitude), if changing.
    pub coordinates: Option<(f64, f64)>,
}

impl ReminderPatch {
    /// True when the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.radius.is_none() && self.text.is_none() && self.coordinates.is_none()
    }
}
