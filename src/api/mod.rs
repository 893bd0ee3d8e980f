//! REST API Bindings
//!
//! One function per endpoint, organized by resource. Views talk to the
//! service through the `TaskApi` / `UserApi` traits.

mod client;
mod tasks;
mod users;

#[cfg(test)]
pub mod fake;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{Credentials, Task, User};

pub use client::ApiClient;

/// `/tasks` resource
#[async_trait(?Send)]
pub trait TaskApi {
    async fn list_tasks(&self) -> ApiResult<Vec<Task>>;

    /// Returns the id assigned by the service
    async fn create_task(&self, task: &Task) -> ApiResult<String>;

    async fn update_task(&self, task: &Task) -> ApiResult<()>;

    async fn delete_task(&self, id: &str) -> ApiResult<()>;
}

/// `/users` resource and login
#[async_trait(?Send)]
pub trait UserApi {
    async fn list_users(&self) -> ApiResult<Vec<User>>;

    /// Returns the id assigned by the service
    async fn create_user(&self, user: &User) -> ApiResult<String>;

    async fn update_user(&self, user: &User) -> ApiResult<()>;

    async fn delete_user(&self, id: &str) -> ApiResult<()>;

    /// Succeeds when the service accepts the credentials; the auth cookie it
    /// sets is handled by the browser.
    async fn login(&self, credentials: &Credentials) -> ApiResult<()>;
}
