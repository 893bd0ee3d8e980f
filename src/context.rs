//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::Session;
use crate::session::{self, LocalSessionStore, SessionStore};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Whether the session flag is present - read
    pub logged_in: ReadSignal<bool>,
    /// Whether the session flag is present - write
    set_logged_in: WriteSignal<bool>,
}

impl AppContext {
    /// Seed from local storage so a reload keeps the user on `/`.
    pub fn new() -> Self {
        let (logged_in, set_logged_in) = signal(session::is_logged_in(&LocalSessionStore));
        Self { logged_in, set_logged_in }
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in.get()
    }

    /// Record a login; the flag itself is written by the login action
    pub fn signed_in(&self, session: &Session) {
        tracing::debug!(email = %session.email, "session started");
        self.set_logged_in.set(true);
    }

    /// Remove the flag from storage and drop the guard
    pub fn sign_out(&self) {
        if let Err(e) = LocalSessionStore.clear() {
            tracing::error!(error = %e, "failed to clear session flag");
        }
        self.set_logged_in.set(false);
    }
}
