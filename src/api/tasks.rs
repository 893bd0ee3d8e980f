//! Task Endpoints

use async_trait::async_trait;
use serde::Deserialize;

use super::{ApiClient, TaskApi};
use crate::error::ApiResult;
use crate::models::Task;

/// `POST /tasks` response
#[derive(Debug, Deserialize)]
struct TaskCreated {
    task_id: String,
}

#[async_trait(?Send)]
impl TaskApi for ApiClient {
    async fn list_tasks(&self) -> ApiResult<Vec<Task>> {
        self.get("/tasks").await
    }

    async fn create_task(&self, task: &Task) -> ApiResult<String> {
        let created: TaskCreated = self.post("/tasks", task).await?;
        Ok(created.task_id)
    }

    async fn update_task(&self, task: &Task) -> ApiResult<()> {
        self.put("/tasks", task).await
    }

    async fn delete_task(&self, id: &str) -> ApiResult<()> {
        self.delete("/tasks", id).await
    }
}
