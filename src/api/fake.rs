//! In-memory API double that records every call.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use super::{TaskApi, UserApi};
use crate::error::{ApiError, ApiResult};
use crate::models::{Credentials, Task, User};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListTasks,
    CreateTask(Task),
    UpdateTask(Task),
    DeleteTask(String),
    ListUsers,
    CreateUser(User),
    UpdateUser(User),
    DeleteUser(String),
    Login(Credentials),
}

#[derive(Default)]
pub struct FakeApi {
    pub tasks: Vec<Task>,
    pub users: Vec<User>,
    calls: RefCell<Vec<Call>>,
    failing: Cell<bool>,
    stalled_tasks: Cell<bool>,
    next_id: Cell<u32>,
}

impl FakeApi {
    pub fn with_data(tasks: Vec<Task>, users: Vec<User>) -> Self {
        Self { tasks, users, ..Default::default() }
    }

    /// Every subsequent call fails with HTTP 500
    pub fn fail(&self) {
        self.failing.set(true);
    }

    /// `list_tasks` never resolves
    pub fn stall_tasks(&self) {
        self.stalled_tasks.set(true);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) -> ApiResult<()> {
        self.calls.borrow_mut().push(call);
        if self.failing.get() {
            Err(ApiError::Status { status: 500, message: "boom".into() })
        } else {
            Ok(())
        }
    }

    fn fresh_id(&self) -> String {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        format!("new-{}", id)
    }
}

#[async_trait(?Send)]
impl TaskApi for FakeApi {
    async fn list_tasks(&self) -> ApiResult<Vec<Task>> {
        self.record(Call::ListTasks)?;
        if self.stalled_tasks.get() {
            std::future::pending::<()>().await;
        }
        Ok(self.tasks.clone())
    }

    async fn create_task(&self, task: &Task) -> ApiResult<String> {
        self.record(Call::CreateTask(task.clone()))?;
        Ok(self.fresh_id())
    }

    async fn update_task(&self, task: &Task) -> ApiResult<()> {
        self.record(Call::UpdateTask(task.clone()))
    }

    async fn delete_task(&self, id: &str) -> ApiResult<()> {
        self.record(Call::DeleteTask(id.to_string()))
    }
}

#[async_trait(?Send)]
impl UserApi for FakeApi {
    async fn list_users(&self) -> ApiResult<Vec<User>> {
        self.record(Call::ListUsers)?;
        Ok(self.users.clone())
    }

    async fn create_user(&self, user: &User) -> ApiResult<String> {
        self.record(Call::CreateUser(user.clone()))?;
        Ok(self.fresh_id())
    }

    async fn update_user(&self, user: &User) -> ApiResult<()> {
        self.record(Call::UpdateUser(user.clone()))
    }

    async fn delete_user(&self, id: &str) -> ApiResult<()> {
        self.record(Call::DeleteUser(id.to_string()))
    }

    async fn login(&self, credentials: &Credentials) -> ApiResult<()> {
        self.record(Call::Login(credentials.clone()))?;
        if credentials.password == "admin2025" {
            Ok(())
        } else {
            Err(ApiError::Status { status: 401, message: "Invalid password".into() })
        }
    }
}
