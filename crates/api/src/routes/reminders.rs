//! Reminder CRUD routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use store::{NewReminder, Reminder, ReminderPatch, StoreError};
use tracing::info;

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Request body for creating a reminder.
///
/// All fields are optional at the wire level so that a missing field
/// maps to its validation error instead of a generic decode failure:
/// a missing radius behaves as zero, missing coordinates as
/// non-numeric. The store reports both with its usual messages.
#[derive(Debug, Default, Deserialize)]
pub struct CreateReminderRequest {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub radius: Option<f64>,
    #[serde(default)]
    pub text: Option<String>,
}

impl CreateReminderRequest {
    fn is_empty(&self) -> bool {
        self.latitude.is_none()
            && self.longitude.is_none()
            && self.radius.is_none()
            && self.text.is_none()
    }
}

/// Request body for updating a reminder. Every field optional;
/// latitude and longitude are only applied when both are present.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateReminderRequest {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub radius: Option<f64>,
    #[serde(default)]
    pub text: Option<String>,
}

impl UpdateReminderRequest {
    fn is_empty(&self) -> bool {
        self.latitude.is_none()
            && self.longitude.is_none()
            && self.radius.is_none()
            && self.text.is_none()
    }
}

/// List all reminders in insertion order.
pub async fn list_reminders(State(state): State<AppState>) -> Json<Vec<Reminder>> {
    Json(state.store.list().await)
}

/// Create a new reminder.
pub async fn create_reminder(
    State(state): State<AppState>,
    body: Option<Json<CreateReminderRequest>>,
) -> Result<(StatusCode, Json<Reminder>)> {
    let Some(Json(req)) = body else {
        return Err(ApiError::MissingBody);
    };
    if req.is_empty() {
        return Err(ApiError::MissingBody);
    }

    let reminder = state
        .store
        .create(NewReminder {
            latitude: req.latitude.unwrap_or(f64::NAN),
            longitude: req.longitude.unwrap_or(f64::NAN),
            radius: req.radius.unwrap_or(0.0),
            text: req.text.unwrap_or_default(),
        })
        .await?;

    info!(id = %reminder.id, radius = reminder.radius, "Created reminder");
    Ok((StatusCode::CREATED, Json(reminder)))
}

/// Update an existing reminder.
///
/// The existence check comes before the body check, so an unknown id
/// yields 404 even when no body was sent.
pub async fn update_reminder(
    Path(id): Path<String>,
    State(state): State<AppState>,
    body: Option<Json<UpdateReminderRequest>>,
) -> Result<Json<Reminder>> {
    if !state.store.contains(&id).await {
        return Err(StoreError::NotFound.into());
    }

    let Some(Json(req)) = body else {
        return Err(ApiError::MissingBody);
    };
    if req.is_empty() {
        return Err(ApiError::MissingBody);
    }

    let patch = ReminderPatch {
        radius: req.radius,
        text: req.text,
        coordinates: match (req.latitude, req.longitude) {
            (Some(latitude), Some(longitude)) => Some((latitude, longitude)),
            // A lone latitude or longitude is ignored.
            _ => None,
        },
    };

    let reminder = state.store.update(&id, patch).await?;
    info!(id = %id, "Updated reminder");
    Ok(Json(reminder))
}

/// Delete a reminder.
pub async fn delete_reminder(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Value>> {
    state.store.delete(&id).await?;
    info!(id = %id, "Deleted reminder");
    Ok(Json(json!({ "message": "Reminder deleted" })))
}
