//! Runtime Configuration
//!
//! API endpoint and storage keys, resolved once at start-up.

use std::time::Duration;

/// Endpoint used when nothing else is configured
pub const DEFAULT_API_BASE: &str = "https://49e7s0q577.execute-api.us-east-1.amazonaws.com/Prod";

/// Local storage key holding an API base URL override
pub const API_URL_STORAGE_KEY: &str = "task_manager_api_url";

/// Local storage key of the session flag
pub const SESSION_STORAGE_KEY: &str = "session";

/// How long a toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub toast_duration: Duration,
}

impl AppConfig {
    /// Read the override from local storage, then the build-time env var.
    pub fn load() -> Self {
        let api_base_url = resolve_api_base(stored_api_base(), option_env!("TASK_MANAGER_API_URL"));
        tracing::info!(api_base_url = %api_base_url, "configuration loaded");
        Self {
            api_base_url,
            toast_duration: TOAST_DURATION,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_string(),
            toast_duration: TOAST_DURATION,
        }
    }
}

fn stored_api_base() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(API_URL_STORAGE_KEY).ok()?
}

/// First non-blank candidate wins; trailing slashes are dropped.
fn resolve_api_base(stored: Option<String>, build_time: Option<&str>) -> String {
    let url = stored
        .as_deref()
        .into_iter()
        .chain(build_time)
        .map(str::trim)
        .find(|candidate| !candidate.is_empty())
        .unwrap_or(DEFAULT_API_BASE);
    url.trim_end_matches('/').to_string()
}
