//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board::Roster;
use crate::models::{Task, User};

/// Cached copy of the remote task and user collections.
/// Dropped on page reload.
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All tasks, in fetch/creation order
    pub tasks: Vec<Task>,
    /// User roster (assignee choices and the Users view)
    pub users: Vec<User>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

impl Roster<Task> for AppStore {
    fn patch<R>(&self, f: impl FnOnce(&mut Vec<Task>) -> R) -> R {
        f(&mut self.tasks().write())
    }
}

impl Roster<User> for AppStore {
    fn patch<R>(&self, f: impl FnOnce(&mut Vec<User>) -> R) -> R {
        f(&mut self.users().write())
    }
}
