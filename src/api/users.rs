//! User Endpoints

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{ApiClient, UserApi};
use crate::error::ApiResult;
use crate::models::{Credentials, User};

/// Create/update bodies wrap the user: `{"user": {...}}`
#[derive(Serialize)]
struct UserEnvelope<'a> {
    user: &'a User,
}

/// `POST /users` response
#[derive(Debug, Deserialize)]
struct UserCreated {
    id: String,
}

#[async_trait(?Send)]
impl UserApi for ApiClient {
    async fn list_users(&self) -> ApiResult<Vec<User>> {
        self.get("/users").await
    }

    async fn create_user(&self, user: &User) -> ApiResult<String> {
        let created: UserCreated = self.post("/users", &UserEnvelope { user }).await?;
        Ok(created.id)
    }

    async fn update_user(&self, user: &User) -> ApiResult<()> {
        self.put("/users", &UserEnvelope { user }).await
    }

    async fn delete_user(&self, id: &str) -> ApiResult<()> {
        self.delete("/users", id).await
    }

    async fn login(&self, credentials: &Credentials) -> ApiResult<()> {
        self.post_unit("/users/login", credentials).await
    }
}
