//! Dialog Form State
//!
//! The task and user dialogs either fill a fresh draft or edit a copy of an
//! existing record. Field edits go to whichever one is active.

use chrono::{DateTime, Utc};

use crate::models::{Task, TaskStatus, User};
use crate::validation::{self, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskField {
    Title,
    Description,
    Status,
    AssignedTo,
}

/// Fields of a task that has not been created yet
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub assigned_to: Option<String>,
}

impl TaskDraft {
    pub fn into_task(self, now: DateTime<Utc>) -> Task {
        Task {
            id: None,
            title: self.title,
            description: self.description,
            status: self.status,
            assigned_to: self.assigned_to,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TaskForm {
    New(TaskDraft),
    Edit(Task),
}

impl Default for TaskForm {
    fn default() -> Self {
        TaskForm::New(TaskDraft::default())
    }
}

impl TaskForm {
    pub fn is_editing(&self) -> bool {
        matches!(self, TaskForm::Edit(_))
    }

    pub fn title(&self) -> &str {
        match self {
            TaskForm::New(draft) => &draft.title,
            TaskForm::Edit(task) => &task.title,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            TaskForm::New(draft) => &draft.description,
            TaskForm::Edit(task) => &task.description,
        }
    }

    pub fn status(&self) -> TaskStatus {
        match self {
            TaskForm::New(draft) => draft.status,
            TaskForm::Edit(task) => task.status,
        }
    }

    pub fn assigned_to(&self) -> Option<&str> {
        match self {
            TaskForm::New(draft) => draft.assigned_to.as_deref(),
            TaskForm::Edit(task) => task.assigned_to.as_deref(),
        }
    }

    /// Apply a raw input value. Unknown status strings are ignored; an empty
    /// assignee means "None".
    pub fn set(&mut self, field: TaskField, value: String) {
        let (title, description, status, assigned_to) = match self {
            TaskForm::New(d) => (&mut d.title, &mut d.description, &mut d.status, &mut d.assigned_to),
            TaskForm::Edit(t) => (&mut t.title, &mut t.description, &mut t.status, &mut t.assigned_to),
        };
        match field {
            TaskField::Title => *title = value,
            TaskField::Description => *description = value,
            TaskField::Status => {
                if let Some(parsed) = TaskStatus::parse(&value) {
                    *status = parsed;
                }
            }
            TaskField::AssignedTo => *assigned_to = (!value.is_empty()).then_some(value),
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.title().is_empty()
    }

    pub fn heading(&self) -> &'static str {
        if self.is_editing() { "Edit Task" } else { "Add New Task" }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() { "Update" } else { "Add" }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Name,
    Email,
    Password,
}

/// Add/edit user dialog. `original` is set when editing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserForm {
    pub original: Option<User>,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl UserForm {
    pub fn edit(user: &User) -> Self {
        Self {
            original: Some(user.clone()),
            name: user.name.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.original.is_some()
    }

    pub fn set(&mut self, field: UserField, value: String) {
        match field {
            UserField::Name => self.name = value,
            UserField::Email => self.email = value,
            UserField::Password => self.password = value,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::validate_user(&self.name, &self.email, &self.password, self.is_editing())
    }

    pub fn into_new_user(self, now: DateTime<Utc>) -> User {
        User {
            id: None,
            name: self.name,
            email: self.email,
            password: self.password,
            created_at: now,
            updated_at: now,
        }
    }

    /// The edited record, or `None` when this form is adding a user
    pub fn into_edited_user(self) -> Option<User> {
        let original = self.original?;
        Some(User {
            name: self.name,
            email: self.email,
            password: self.password,
            ..original
        })
    }

    pub fn heading(&self) -> &'static str {
        if self.is_editing() { "Edit User" } else { "Add New User" }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() { "Update" } else { "Add" }
    }

    pub fn password_label(&self) -> &'static str {
        if self.is_editing() { "Password (Leave blank to keep current)" } else { "Password" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::fixtures::{at, task, user};

    #[test]
    fn test_new_task_form_defaults() {
        let form = TaskForm::default();
        assert_eq!(form.status(), TaskStatus::Todo);
        assert_eq!(form.assigned_to(), None);
        assert!(!form.can_submit());
        assert_eq!(form.heading(), "Add New Task");
        assert_eq!(form.submit_label(), "Add");
    }

    #[test]
    fn test_edits_go_to_active_target() {
        let mut form = TaskForm::Edit(task("1", "Old", TaskStatus::Todo));
        form.set(TaskField::Title, "New".into());
        form.set(TaskField::Status, "completed".into());
        form.set(TaskField::AssignedTo, "John Doe".into());
        match &form {
            TaskForm::Edit(t) => {
                assert_eq!(t.title, "New");
                assert_eq!(t.status, TaskStatus::Completed);
                assert_eq!(t.assigned_to.as_deref(), Some("John Doe"));
            }
            TaskForm::New(_) => panic!("form switched target"),
        }
        assert_eq!(form.heading(), "Edit Task");
    }

    #[test]
    fn test_blank_assignee_and_bad_status() {
        let mut form = TaskForm::default();
        form.set(TaskField::AssignedTo, "Jane".into());
        form.set(TaskField::AssignedTo, String::new());
        form.set(TaskField::Status, "archived".into());
        assert_eq!(form.assigned_to(), None);
        assert_eq!(form.status(), TaskStatus::Todo);
    }

    #[test]
    fn test_title_gates_submit() {
        let mut form = TaskForm::default();
        form.set(TaskField::Title, "Ship it".into());
        assert!(form.can_submit());
    }

    #[test]
    fn test_draft_into_task_stamps_both_dates() {
        let draft = TaskDraft { title: "T".into(), ..Default::default() };
        let t = draft.into_task(at(7));
        assert_eq!(t.created_at, at(7));
        assert_eq!(t.updated_at, at(7));
        assert!(t.id.is_none());
    }

    #[test]
    fn test_user_form_edit_keeps_identity() {
        let original = user("u1", "John", "john@example.com");
        let mut form = UserForm::edit(&original);
        form.set(UserField::Name, "Johnny".into());
        assert!(form.validate().is_ok());
        assert_eq!(form.password_label(), "Password (Leave blank to keep current)");

        let edited = form.into_edited_user().unwrap();
        assert_eq!(edited.id.as_deref(), Some("u1"));
        assert_eq!(edited.name, "Johnny");
        assert_eq!(edited.created_at, original.created_at);
    }

    #[test]
    fn test_user_form_add_requires_password() {
        let mut form = UserForm::default();
        form.set(UserField::Name, "Ann".into());
        form.set(UserField::Email, "ann@x.io".into());
        assert_eq!(form.validate(), Err(ValidationError::PasswordRequired));
        assert!(form.clone().into_edited_user().is_none());
        form.set(UserField::Password, "pw".into());
        assert_eq!(form.validate(), Ok(()));
    }
}
