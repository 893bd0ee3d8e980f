//! Task List View
//!
//! One card per task with status chip, inline status select, edit and delete.

use leptos::prelude::*;

use crate::models::{Task, TaskStatus};

/// Short local date, as shown on cards and in the user table
pub fn format_date(at: &chrono::DateTime<chrono::Utc>) -> String {
    at.with_timezone(&chrono::Local).format("%Y-%m-%d").to_string()
}

#[component]
pub fn ListView(
    #[prop(into)] tasks: Signal<Vec<Task>>,
    #[prop(into)] on_status_change: Callback<(String, TaskStatus)>,
    #[prop(into)] on_edit: Callback<Task>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <section class="list-view">
            <h1 class="view-heading">"Tasks"</h1>
            <div class="card-grid">
                <Show
                    when=move || !tasks.with(Vec::is_empty)
                    fallback=|| view! {
                        <div class="empty-panel">
                            <p>"No tasks available. Click \"Add Task\" to create one."</p>
                        </div>
                    }
                >
                    <For
                        each=move || tasks.get()
                        key=|task| (task.id.clone(), task.updated_at, task.status)
                        children=move |task| view! {
                            <TaskCard
                                task=task
                                on_status_change=on_status_change
                                on_edit=on_edit
                                on_delete=on_delete
                            />
                        }
                    />
                </Show>
            </div>
        </section>
    }
}

#[component]
fn TaskCard(
    task: Task,
    on_status_change: Callback<(String, TaskStatus)>,
    on_edit: Callback<Task>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let id = task.id.clone().unwrap_or_default();
    let status = task.status;
    let select_id = format!("status-select-{}", id);
    let id_for_status = id.clone();
    let task_for_edit = task.clone();

    view! {
        <article class="task-card" style=format!("border-left: 4px solid {};", status.color())>
            <div class="task-card-content">
                <div class="task-card-header">
                    <h2 class="task-title">{task.title.clone()}</h2>
                    <span class="status-chip" style=format!("background-color: {};", status.color())>
                        {status.label()}
                    </span>
                </div>
                <p class="task-description">{task.description.clone()}</p>
                {task.assigned_to.clone().map(|name| view! {
                    <p class="task-assignee"><strong>"Assigned to:"</strong> " " {name}</p>
                })}
                <p class="task-date">"Created: " {format_date(&task.created_at)}</p>
                <p class="task-date">"Updated: " {format_date(&task.updated_at)}</p>
            </div>
            <div class="task-card-actions">
                <label class="sr-only" for=select_id.clone()>"Status"</label>
                <select
                    id=select_id
                    class="status-select"
                    on:change=move |ev| {
                        if let Some(next) = TaskStatus::parse(&event_target_value(&ev)) {
                            on_status_change.run((id_for_status.clone(), next));
                        }
                    }
                >
                    {TaskStatus::ALL.iter().map(|s| view! {
                        <option value=s.as_str() selected={*s == status}>{s.label()}</option>
                    }).collect_view()}
                </select>
                <button class="icon-btn edit-btn" title="Edit" on:click=move |_| on_edit.run(task_for_edit.clone())>
                    "✎"
                </button>
                <button class="icon-btn delete-btn" title="Delete" on:click=move |_| on_delete.run(id.clone())>
                    "🗑"
                </button>
            </div>
        </article>
    }
}
