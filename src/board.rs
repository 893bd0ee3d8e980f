//! Board Operations
//!
//! Pure functions that patch the in-memory task and user arrays, plus the
//! `Roster` seam that lets action flows write into either the reactive store
//! or a plain `RefCell` in tests.

use std::cell::RefCell;

use chrono::{DateTime, Utc};

use crate::models::{Task, TaskStatus, User};

/// A mutable list owned somewhere else (reactive store, test cell)
pub trait Roster<T> {
    fn patch<R>(&self, f: impl FnOnce(&mut Vec<T>) -> R) -> R;
}

impl<T> Roster<T> for RefCell<Vec<T>> {
    fn patch<R>(&self, f: impl FnOnce(&mut Vec<T>) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

// ========================
// Tasks
// ========================

/// Replace the task with the same id, stamping `updated_at`.
/// Returns the stored task, or `None` if no task has that id.
pub fn replace_task(tasks: &mut [Task], mut edited: Task, now: DateTime<Utc>) -> Option<Task> {
    let id = edited.id.clone()?;
    let slot = tasks.iter_mut().find(|task| task.has_id(&id))?;
    edited.updated_at = now;
    *slot = edited.clone();
    Some(edited)
}

/// Move a task to `status`, stamping `updated_at`.
pub fn set_task_status(tasks: &mut [Task], id: &str, status: TaskStatus, now: DateTime<Utc>) -> Option<Task> {
    let task = tasks.iter_mut().find(|task| task.has_id(id))?;
    task.status = status;
    task.updated_at = now;
    Some(task.clone())
}

pub fn remove_task(tasks: &mut Vec<Task>, id: &str) -> bool {
    let before = tasks.len();
    tasks.retain(|task| !task.has_id(id));
    tasks.len() != before
}

/// Per-status counts in `TaskStatus::ALL` order
pub fn status_counts(tasks: &[Task]) -> [(TaskStatus, usize); 3] {
    TaskStatus::ALL.map(|status| (status, tasks.iter().filter(|t| t.status == status).count()))
}

// ========================
// Users
// ========================

pub fn replace_user(users: &mut [User], mut edited: User, now: DateTime<Utc>) -> Option<User> {
    let id = edited.id.clone()?;
    let slot = users.iter_mut().find(|user| user.has_id(&id))?;
    edited.updated_at = now;
    *slot = edited.clone();
    Some(edited)
}

pub fn remove_user(users: &mut Vec<User>, id: &str) -> bool {
    let before = users.len();
    users.retain(|user| !user.has_id(id));
    users.len() != before
}

/// Case-insensitive substring match on name or email
pub fn filter_users<'a>(users: &'a [User], term: &str) -> Vec<&'a User> {
    let term = term.to_lowercase();
    users
        .iter()
        .filter(|user| user.name.to_lowercase().contains(&term) || user.email.to_lowercase().contains(&term))
        .collect()
}


#[cfg(test)]
mod tests {
    use super::fixtures::{at, task, user};
    use super::*;

    #[test]
    fn test_replace_task_stamps_updated_at() {
        let mut tasks = vec![task("1", "One", TaskStatus::Todo), task("2", "Two", TaskStatus::Todo)];
        let mut edited = tasks[1].clone();
        edited.title = "Two (edited)".into();

        let stored = replace_task(&mut tasks, edited, at(5)).unwrap();
        assert_eq!(stored.updated_at, at(5));
        assert_eq!(tasks[1].title, "Two (edited)");
        assert_eq!(tasks[0].updated_at, at(1));
    }

    #[test]
    fn test_replace_task_unknown_or_missing_id() {
        let mut tasks = vec![task("1", "One", TaskStatus::Todo)];
        let mut stray = task("9", "Nine", TaskStatus::Todo);
        assert!(replace_task(&mut tasks, stray.clone(), at(2)).is_none());
        stray.id = None;
        assert!(replace_task(&mut tasks, stray, at(2)).is_none());
        assert_eq!(tasks[0].title, "One");
    }

    #[test]
    fn test_set_status_touches_only_match() {
        let mut tasks = vec![task("1", "One", TaskStatus::Todo), task("2", "Two", TaskStatus::Todo)];
        let moved = set_task_status(&mut tasks, "2", TaskStatus::Completed, at(3)).unwrap();
        assert_eq!(moved.status, TaskStatus::Completed);
        assert_eq!(tasks[0].status, TaskStatus::Todo);
        assert_eq!(tasks[1].updated_at, at(3));
        assert!(set_task_status(&mut tasks, "nope", TaskStatus::Todo, at(3)).is_none());
    }

    #[test]
    fn test_remove_task() {
        let mut tasks = vec![task("1", "One", TaskStatus::Todo)];
        assert!(!remove_task(&mut tasks, "2"));
        assert!(remove_task(&mut tasks, "1"));
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_status_counts_sum_to_total() {
        let tasks = vec![
            task("1", "a", TaskStatus::Todo),
            task("2", "b", TaskStatus::InProgress),
            task("3", "c", TaskStatus::InProgress),
        ];
        let counts = status_counts(&tasks);
        assert_eq!(
            counts,
            [(TaskStatus::Todo, 1), (TaskStatus::InProgress, 2), (TaskStatus::Completed, 0)]
        );
        assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), tasks.len());
    }

    #[test]
    fn test_filter_users_name_or_email() {
        let users = vec![
            user("1", "John Doe", "john@example.com"),
            user("2", "Jane Roe", "jane@corp.io"),
        ];
        let hits: Vec<_> = filter_users(&users, "DOE").iter().map(|u| u.name.as_str()).collect();
        assert_eq!(hits, vec!["John Doe"]);
        assert_eq!(filter_users(&users, "corp").len(), 1);
        assert_eq!(filter_users(&users, "").len(), 2);
        assert!(filter_users(&users, "zzz").is_empty());
    }

    #[test]
    fn test_user_replace_and_remove() {
        let mut users = vec![user("1", "John", "john@example.com")];
        let mut edited = users[0].clone();
        edited.email = "j@example.com".into();
        replace_user(&mut users, edited, at(4)).unwrap();
        assert_eq!(users[0].email, "j@example.com");
        assert_eq!(users[0].updated_at, at(4));
        assert!(remove_user(&mut users, "1"));
    }

    #[test]
    fn test_refcell_roster() {
        let cell = RefCell::new(vec![1, 2]);
        let len = cell.patch(|v| {
            v.push(3);
            v.len()
        });
        assert_eq!(len, 3);
    }
}
