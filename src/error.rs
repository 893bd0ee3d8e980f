//! Client Errors
//!
//! Failures coming back from the REST layer and from browser storage.

/// Common result type for API calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors returned by the REST client
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Request never produced a response (offline, CORS, aborted)
    Network(String),
    /// Server answered with a non-2xx status
    Status { status: u16, message: String },
    /// Response body did not match the expected shape
    Decode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Status { status, message } => write!(f, "HTTP {}: {}", status, message),
            ApiError::Decode(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// Errors from the local session store
#[derive(Debug, Clone, PartialEq)]
pub enum SessionError {
    /// `window.localStorage` is missing or blocked
    StorageUnavailable,
    /// Storage call threw
    Storage(String),
    /// Stored value is not a session
    Corrupt(String),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::StorageUnavailable => write!(f, "Local storage is unavailable"),
            SessionError::Storage(msg) => write!(f, "Storage error: {}", msg),
            SessionError::Corrupt(msg) => write!(f, "Corrupt session: {}", msg),
        }
    }
}

impl std::error::Error for SessionError {}
