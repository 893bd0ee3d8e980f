//! Task Actions

use chrono::{DateTime, Utc};

use crate::api::TaskApi;
use crate::board::{self, Roster};
use crate::error::ApiResult;
use crate::forms::TaskDraft;
use crate::models::{Task, TaskStatus};

/// Fetch all tasks into the roster. On failure the roster is left untouched.
pub async fn load<A, R>(api: &A, roster: &R) -> ApiResult<usize>
where
    A: TaskApi + ?Sized,
    R: Roster<Task>,
{
    let tasks = api.list_tasks().await?;
    let count = tasks.len();
    roster.patch(|list| *list = tasks);
    tracing::info!(count, "tasks loaded");
    Ok(count)
}

/// Create a task from the draft and append it with the id the service returns.
pub async fn add<A, R>(api: &A, roster: &R, draft: TaskDraft, now: DateTime<Utc>) -> ApiResult<Task>
where
    A: TaskApi + ?Sized,
    R: Roster<Task>,
{
    let mut task = draft.into_task(now);
    let id = api.create_task(&task).await?;
    task.id = Some(id);
    roster.patch(|list| list.push(task.clone()));
    tracing::info!(id = ?task.id, "task created");
    Ok(task)
}

/// Save an edited task. Returns `Ok(false)` without a request when no task in
/// the roster has its id.
pub async fn update<A, R>(api: &A, roster: &R, edited: Task, now: DateTime<Utc>) -> ApiResult<bool>
where
    A: TaskApi + ?Sized,
    R: Roster<Task>,
{
    let Some(stored) = roster.patch(|list| board::replace_task(list, edited, now)) else {
        return Ok(false);
    };
    api.update_task(&stored).await?;
    Ok(true)
}

pub async fn set_status<A, R>(api: &A, roster: &R, id: &str, status: TaskStatus, now: DateTime<Utc>) -> ApiResult<bool>
where
    A: TaskApi + ?Sized,
    R: Roster<Task>,
{
    let Some(stored) = roster.patch(|list| board::set_task_status(list, id, status, now)) else {
        return Ok(false);
    };
    api.update_task(&stored).await?;
    Ok(true)
}

pub async fn delete<A, R>(api: &A, roster: &R, id: &str) -> ApiResult<()>
where
    A: TaskApi + ?Sized,
    R: Roster<Task>,
{
    roster.patch(|list| board::remove_task(list, id));
    api.delete_task(id).await
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::api::fake::{Call, FakeApi};
    use crate::board::fixtures::{at, task};

    fn roster(tasks: Vec<Task>) -> RefCell<Vec<Task>> {
        RefCell::new(tasks)
    }

    #[tokio::test]
    async fn test_load_fills_roster() {
        let api = FakeApi::with_data(
            vec![task("1", "Test Task 1", TaskStatus::Todo), task("2", "Test Task 2", TaskStatus::InProgress)],
            vec![],
        );
        let list = roster(vec![]);
        assert_eq!(load(&api, &list).await.unwrap(), 2);
        let titles: Vec<_> = list.borrow().iter().map(|t| t.title.clone()).collect();
        assert_eq!(titles, vec!["Test Task 1", "Test Task 2"]);
        assert_eq!(api.calls(), vec![Call::ListTasks]);
    }

    #[tokio::test]
    async fn test_load_failure_leaves_roster_empty() {
        let api = FakeApi::with_data(vec![task("1", "x", TaskStatus::Todo)], vec![]);
        api.fail();
        let list = roster(vec![]);
        assert!(load(&api, &list).await.is_err());
        assert!(list.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_add_posts_draft_and_appends_with_returned_id() {
        let api = FakeApi::default();
        let list = roster(vec![task("1", "Existing", TaskStatus::Todo)]);
        let draft = TaskDraft {
            title: "New Task".into(),
            description: "New Description".into(),
            ..Default::default()
        };

        let created = add(&api, &list, draft, at(9)).await.unwrap();
        assert_eq!(created.id.as_deref(), Some("new-1"));

        match api.calls().as_slice() {
            [Call::CreateTask(sent)] => {
                assert_eq!(sent.title, "New Task");
                assert_eq!(sent.description, "New Description");
                assert_eq!(sent.status, TaskStatus::Todo);
                assert!(sent.id.is_none());
                assert_eq!(sent.created_at, at(9));
            }
            other => panic!("unexpected calls: {:?}", other),
        }
        assert_eq!(list.borrow().len(), 2);
        assert_eq!(list.borrow()[1].id.as_deref(), Some("new-1"));
    }

    #[tokio::test]
    async fn test_add_failure_appends_nothing() {
        let api = FakeApi::default();
        api.fail();
        let list = roster(vec![]);
        let draft = TaskDraft { title: "T".into(), ..Default::default() };
        assert!(add(&api, &list, draft, at(2)).await.is_err());
        assert!(list.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_update_sends_stamped_task() {
        let api = FakeApi::default();
        let list = roster(vec![task("1", "One", TaskStatus::Todo)]);
        let mut edited = list.borrow()[0].clone();
        edited.description = "changed".into();

        assert!(update(&api, &list, edited, at(4)).await.unwrap());
        match api.calls().as_slice() {
            [Call::UpdateTask(sent)] => {
                assert_eq!(sent.id.as_deref(), Some("1"));
                assert_eq!(sent.description, "changed");
                assert_eq!(sent.updated_at, at(4));
            }
            other => panic!("unexpected calls: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_keeps_local_change_on_failure() {
        let api = FakeApi::default();
        api.fail();
        let list = roster(vec![task("1", "One", TaskStatus::Todo)]);
        let mut edited = list.borrow()[0].clone();
        edited.title = "Local".into();

        assert!(update(&api, &list, edited, at(4)).await.is_err());
        assert_eq!(list.borrow()[0].title, "Local");
    }

    #[tokio::test]
    async fn test_update_unknown_task_sends_nothing() {
        let api = FakeApi::default();
        let list = roster(vec![task("1", "One", TaskStatus::Todo)]);
        let stray = task("2", "Two", TaskStatus::Todo);
        assert!(!update(&api, &list, stray, at(4)).await.unwrap());
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_set_status() {
        let api = FakeApi::default();
        let list = roster(vec![task("1", "One", TaskStatus::Todo), task("2", "Two", TaskStatus::Todo)]);

        assert!(set_status(&api, &list, "2", TaskStatus::InProgress, at(6)).await.unwrap());
        assert_eq!(list.borrow()[1].status, TaskStatus::InProgress);
        assert_eq!(list.borrow()[0].status, TaskStatus::Todo);
        match api.calls().as_slice() {
            [Call::UpdateTask(sent)] => {
                assert_eq!(sent.id.as_deref(), Some("2"));
                assert_eq!(sent.status, TaskStatus::InProgress);
            }
            other => panic!("unexpected calls: {:?}", other),
        }

        assert!(!set_status(&api, &list, "9", TaskStatus::Completed, at(6)).await.unwrap());
        assert_eq!(api.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_removes_then_calls() {
        let api = FakeApi::default();
        let list = roster(vec![task("1", "One", TaskStatus::Todo), task("2", "Two", TaskStatus::Todo)]);
        delete(&api, &list, "1").await.unwrap();
        assert_eq!(list.borrow().len(), 1);
        assert_eq!(api.calls(), vec![Call::DeleteTask("1".into())]);
    }
}
