//! Home Page
//!
//! Owns the task/user caches for the signed-in session and switches between
//! the list, chart and users views.

use std::rc::Rc;

use chrono::{Datelike, Utc};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::api::{ApiClient, TaskApi, UserApi};
use crate::components::{ChartView, HomeView, ListView, NavBar, TaskDialog, UserView};
use crate::forms::TaskForm;
use crate::models::{Task, TaskStatus};
use crate::store::{use_app_store, AppStateStoreFields, AppStore};

/// Load tasks and users on separate tasks; a slow or failing request for one
/// never holds up the other.
fn fetch_collections<A>(api: Rc<A>, store: AppStore)
where
    A: TaskApi + UserApi + ?Sized + 'static,
{
    let tasks_api = Rc::clone(&api);
    spawn_local(async move {
        if let Err(e) = actions::tasks::load(&*tasks_api, &store).await {
            tracing::error!(error = %e, "failed to fetch tasks");
        }
    });
    spawn_local(async move {
        if let Err(e) = actions::users::load(&*api, &store).await {
            tracing::error!(error = %e, "failed to fetch users");
        }
    });
}

#[component]
pub fn HomePage() -> impl IntoView {
    let store = use_app_store();
    let api = expect_context::<ApiClient>();

    let (current_view, set_current_view) = signal(HomeView::default());
    let dialog = RwSignal::new(None::<TaskForm>);

    let tasks = Signal::derive(move || store.tasks().get());
    let users = Signal::derive(move || store.users().get());

    {
        let api = api.clone();
        Effect::new(move |_| fetch_collections(Rc::new(api.clone()), store));
    }

    let submit = {
        let api = api.clone();
        Callback::new(move |form: TaskForm| {
            let api = api.clone();
            match form {
                TaskForm::New(draft) => spawn_local(async move {
                    match actions::tasks::add(&api, &store, draft, Utc::now()).await {
                        Ok(_) => dialog.set(None),
                        Err(e) => tracing::error!(error = %e, "failed to add task"),
                    }
                }),
                TaskForm::Edit(task) => {
                    dialog.set(None);
                    spawn_local(async move {
                        if let Err(e) = actions::tasks::update(&api, &store, task, Utc::now()).await {
                            tracing::error!(error = %e, "failed to update task");
                        }
                    });
                }
            }
        })
    };

    let status_change = {
        let api = api.clone();
        Callback::new(move |(id, status): (String, TaskStatus)| {
            let api = api.clone();
            spawn_local(async move {
                if let Err(e) = actions::tasks::set_status(&api, &store, &id, status, Utc::now()).await {
                    tracing::error!(error = %e, id = %id, "failed to update task status");
                }
            });
        })
    };

    let delete = Callback::new(move |id: String| {
        let api = api.clone();
        spawn_local(async move {
            if let Err(e) = actions::tasks::delete(&api, &store, &id).await {
                tracing::error!(error = %e, id = %id, "failed to delete task");
            }
        });
    });

    let edit = Callback::new(move |task: Task| dialog.set(Some(TaskForm::Edit(task))));
    let open_new = Callback::new(move |_: ()| dialog.set(Some(TaskForm::default())));
    let close = Callback::new(move |_: ()| dialog.set(None));

    let year = Utc::now().year();

    view! {
        <div class="home">
            <NavBar
                current_view=current_view
                set_current_view=set_current_view
                on_add_task=open_new
            />

            <main class="home-main">
                {move || match current_view.get() {
                    HomeView::List => view! {
                        <ListView
                            tasks=tasks
                            on_status_change=status_change
                            on_edit=edit
                            on_delete=delete
                        />
                    }.into_any(),
                    HomeView::Chart => view! { <ChartView tasks=tasks /> }.into_any(),
                    HomeView::Users => view! { <UserView /> }.into_any(),
                }}
            </main>

            <TaskDialog form=dialog users=users on_submit=submit on_close=close />

            <footer class="app-footer">
                <p>{format!("Task Manager App © {}", year)}</p>
            </footer>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod web_tests {
    use leptos::task::Executor;
    use reactive_stores::Store;
    use wasm_bindgen_test::*;

    use super::*;
    use crate::api::fake::FakeApi;
    use crate::board::fixtures::{task, user};
    use crate::pages::test_support::{click_button, count, mount_page, settle, text};
    use crate::store::AppState;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn list_view_is_shown_first() {
        let root = mount_page(|| view! { <HomePage /> });
        settle().await;

        assert_eq!(count(&root, ".list-view"), 1);
        assert_eq!(count(&root, ".chart-view"), 0);
        assert_eq!(count(&root, ".user-view"), 0);
        assert!(text(&root).contains("Task Manager App ©"));
    }

    #[wasm_bindgen_test]
    async fn nav_switches_to_exactly_one_view() {
        let root = mount_page(|| view! { <HomePage /> });
        settle().await;

        click_button(&root, "Task Chart");
        settle().await;
        assert!(text(&root).contains("Task Status Chart"));
        assert_eq!(count(&root, ".list-view"), 0);
        assert_eq!(count(&root, ".chart-view"), 1);

        click_button(&root, "Users");
        settle().await;
        assert!(text(&root).contains("User Management"));
        assert_eq!(count(&root, ".chart-view"), 0);
        assert_eq!(count(&root, ".user-view"), 1);

        click_button(&root, "Task List");
        settle().await;
        assert_eq!(count(&root, ".list-view"), 1);
        assert_eq!(count(&root, ".user-view"), 0);
    }

    #[wasm_bindgen_test]
    async fn users_load_while_tasks_are_pending() {
        let _ = Executor::init_wasm_bindgen();
        let api = FakeApi::with_data(
            vec![task("1", "Write docs", TaskStatus::Todo)],
            vec![user("u1", "Ann", "ann@example.com")],
        );
        api.stall_tasks();
        let store = Store::new(AppState::default());

        fetch_collections(Rc::new(api), store);
        settle().await;

        assert_eq!(store.users().get_untracked().len(), 1);
        assert!(store.tasks().get_untracked().is_empty());
    }
}
