//! HTTP API for geofence-triggered reminders.
//!
//! Exposes CRUD over the in-memory [`store::ReminderStore`] plus a
//! location-check endpoint that reports which reminders a submitted
//! probe location falls inside of. Exported as a library so the router
//! can be driven directly in integration tests.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
