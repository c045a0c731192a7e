//! Application state shared across handlers.

use store::ReminderStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The reminder collection.
    pub store: ReminderStore,
}

impl AppState {
    /// Create new application state.
    pub fn new(store: ReminderStore) -> Self {
        Self { store }
    }
}
