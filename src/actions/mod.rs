//! View Actions
//!
//! What happens when the user clicks something: patch the local list, call
//! one endpoint. Generic over the API traits and the `Roster` so the same
//! flows run against the reactive store in the browser and a fake in tests.
//!
//! Edits, deletes and status changes are applied locally before the request
//! goes out and are not rolled back on failure (last write wins).

pub mod tasks;
pub mod users;
