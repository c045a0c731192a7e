//! In-memory reminder storage.
//!
//! This crate owns the authoritative collection of [`Reminder`]
//! records and enforces field validation on every mutation. Storage is
//! volatile: records live exactly as long as the process. It provides:
//!
//! - [`ReminderStore`] - the insertion-ordered, internally synchronized
//!   collection with create/read/update/delete operations
//! - [`Reminder`] / [`NewReminder`] / [`ReminderPatch`] - the record
//!   and its typed mutation inputs
//! - [`StoreError`] - the validation and lookup error taxonomy
//!
//! # Example
//!
//! ```rust
//! use store::{NewReminder, ReminderStore};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> store::Result<()> {
//!     let store = ReminderStore::new();
//!     let reminder = store
//!         .create(NewReminder {
//!             latitude: 40.7128,
//!             longitude: -74.0060,
//!             radius: 500.0,
//!             text: "Pick up groceries".to_string(),
//!         })
//!         .await?;
//!     assert!(!reminder.triggered);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod models;
pub mod validation;

pub use error::{Result, StoreError};
pub use models::{NewReminder, Reminder, ReminderPatch};

use std::sync::Arc;

use chrono::Utc;
use indexmap::IndexMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::validation::{validate_coordinates, validate_radius, validate_text};

/// The authoritative reminder collection.
///
/// Uses an `IndexMap` so listing returns records in insertion order,
/// behind a single `RwLock` so mutations never interleave. The handle
/// is cheap to clone; all clones share the same collection.
#[derive(Debug, Clone, Default)]
pub struct ReminderStore {
    reminders: Arc<RwLock<IndexMap<String, Reminder>>>,
}

impl ReminderStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// All current reminders in insertion order.
    pub async fn list(&self) -> Vec<Reminder> {
        let reminders = self.reminders.read().await;
        reminders.values().cloned().collect()
    }

    /// Look up a single reminder by id.
    pub async fn get(&self, id: &str) -> Option<Reminder> {
        let reminders = self.reminders.read().await;
        reminders.get(id).cloned()
    }

    /// Whether a reminder exists under the given id.
    pub async fn contains(&self, id: &str) -> bool {
        let reminders = self.reminders.read().await;
        reminders.contains_key(id)
    }

    /// Number of stored reminders.
    pub async fn len(&self) -> usize {
        let reminders = self.reminders.read().await;
        reminders.len()
    }

    /// Whether the store holds no reminders.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Validate and store a new reminder.
    ///
    /// Fields are checked in a fixed order for deterministic error
    /// reporting when several are invalid at once: radius, then
    /// coordinates, then text. On success the record gets a fresh
    /// UUID, a UTC creation timestamp, and `triggered = false`.
    pub async fn create(&self, new: NewReminder) -> Result<Reminder> {
        validate_radius(new.radius)?;
        validate_coordinates(new.latitude, new.longitude)?;
        let text = validate_text(&new.text)?.to_string();

        let reminder = Reminder {
            id: Uuid::new_v4().to_string(),
            latitude: new.latitude,
            longitude: new.longitude,
            radius: new.radius,
            text,
            created_at: Utc::now(),
            triggered: false,
        };

        let mut reminders = self.reminders.write().await;
        reminders.insert(reminder.id.clone(), reminder.clone());
        tracing::debug!(id = %reminder.id, "Created reminder");

        Ok(reminder)
    }

    /// Apply a partial update to an existing reminder.
    ///
    /// Every provided field is validated before any is applied, so a
    /// failing field leaves the record completely untouched. Returns
    /// the updated record.
    pub async fn update(&self, id: &str, patch: ReminderPatch) -> Result<Reminder> {
        let mut reminders = self.reminders.write().await;
        let reminder = reminders.get_mut(id).ok_or(StoreError::NotFound)?;

        // Validate everything up front; apply only if all pass.
        if let Some(radius) = patch.radius {
            validate_radius(radius)?;
        }
        let text = match &patch.text {
            Some(text) => Some(validate_text(text)?.to_string()),
            None => None,
        };
        if let Some((latitude, longitude)) = patch.coordinates {
            validate_coordinates(latitude, longitude)?;
        }

        if let Some(radius) = patch.radius {
            reminder.radius = radius;
        }
        if let Some(text) = text {
            reminder.text = text;
        }
        if let Some((latitude, longitude)) = patch.coordinates {
            reminder.latitude = latitude;
            reminder.longitude = longitude;
        }

        tracing::debug!(id = %id, "Updated reminder");
        Ok(reminder.clone())
    }

    /// Permanently remove a reminder.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let mut reminders = self.reminders.write().await;
        // shift_remove keeps the remaining records in insertion order.
        reminders.shift_remove(id).ok_or(StoreError::NotFound)?;
        tracing::debug!(id = %id, "Deleted reminder");
        Ok(())
    }
}
