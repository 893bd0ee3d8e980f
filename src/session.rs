//! Session Flag
//!
//! An unverified marker in local storage that only gates client-side routes.
//! It holds the submitted email, never a token.

#[cfg(test)]
use std::cell::RefCell;

use crate::config::SESSION_STORAGE_KEY;
use crate::error::SessionError;
use crate::models::Session;

pub trait SessionStore {
    /// Whether anything is stored under the session key
    fn has_flag(&self) -> Result<bool, SessionError>;
    fn read(&self) -> Result<Option<Session>, SessionError>;
    fn write(&self, session: &Session) -> Result<(), SessionError>;
    fn clear(&self) -> Result<(), SessionError>;
}

/// Presence of the flag is enough; a storage failure counts as logged out.
pub fn is_logged_in(store: &impl SessionStore) -> bool {
    match store.has_flag() {
        Ok(present) => present,
        Err(e) => {
            tracing::warn!(error = %e, "session read failed");
            false
        }
    }
}

/// `window.localStorage` backed store
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSessionStore;

impl LocalSessionStore {
    fn storage() -> Result<web_sys::Storage, SessionError> {
        web_sys::window()
            .ok_or(SessionError::StorageUnavailable)?
            .local_storage()
            .map_err(|e| SessionError::Storage(format!("{:?}", e)))?
            .ok_or(SessionError::StorageUnavailable)
    }
}

impl SessionStore for LocalSessionStore {
    fn has_flag(&self) -> Result<bool, SessionError> {
        Self::storage()?
            .get_item(SESSION_STORAGE_KEY)
            .map(|raw| raw.is_some())
            .map_err(|e| SessionError::Storage(format!("{:?}", e)))
    }

    fn read(&self) -> Result<Option<Session>, SessionError> {
        let raw = Self::storage()?
            .get_item(SESSION_STORAGE_KEY)
            .map_err(|e| SessionError::Storage(format!("{:?}", e)))?;
        raw.as_deref().map(decode).transpose()
    }

    fn write(&self, session: &Session) -> Result<(), SessionError> {
        Self::storage()?
            .set_item(SESSION_STORAGE_KEY, &encode(session)?)
            .map_err(|e| SessionError::Storage(format!("{:?}", e)))
    }

    fn clear(&self) -> Result<(), SessionError> {
        Self::storage()?
            .remove_item(SESSION_STORAGE_KEY)
            .map_err(|e| SessionError::Storage(format!("{:?}", e)))
    }
}

/// In-memory store holding the raw stored string
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    raw: RefCell<Option<String>>,
}

#[cfg(test)]
impl MemorySessionStore {
    pub fn with_raw(raw: &str) -> Self {
        Self { raw: RefCell::new(Some(raw.to_string())) }
    }

    pub fn raw(&self) -> Option<String> {
        self.raw.borrow().clone()
    }
}

#[cfg(test)]
impl SessionStore for MemorySessionStore {
    fn has_flag(&self) -> Result<bool, SessionError> {
        Ok(self.raw.borrow().is_some())
    }

    fn read(&self) -> Result<Option<Session>, SessionError> {
        self.raw.borrow().as_deref().map(decode).transpose()
    }

    fn write(&self, session: &Session) -> Result<(), SessionError> {
        *self.raw.borrow_mut() = Some(encode(session)?);
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        self.raw.borrow_mut().take();
        Ok(())
    }
}

fn encode(session: &Session) -> Result<String, SessionError> {
    serde_json::to_string(session).map_err(|e| SessionError::Corrupt(e.to_string()))
}

fn decode(raw: &str) -> Result<Session, SessionError> {
    serde_json::from_str(raw).map_err(|e| SessionError::Corrupt(e.to_string()))
}
