//! Task Dialog Component
//!
//! Modal form for adding a new task or editing an existing one.

use leptos::prelude::*;

use crate::forms::{TaskField, TaskForm};
use crate::models::{TaskStatus, User};

/// Open while `form` holds `Some`
#[component]
pub fn TaskDialog(
    form: RwSignal<Option<TaskForm>>,
    #[prop(into)] users: Signal<Vec<User>>,
    #[prop(into)] on_submit: Callback<TaskForm>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let edit = move |field: TaskField| {
        move |ev: web_sys::Event| {
            let value = event_target_value(&ev);
            form.update(|f| {
                if let Some(f) = f {
                    f.set(field, value);
                }
            });
        }
    };
    let read = move |get: fn(&TaskForm) -> String| move || form.with(|f| f.as_ref().map(get).unwrap_or_default());

    let heading = move || form.with(|f| f.as_ref().map(TaskForm::heading).unwrap_or_default());
    let submit_label = move || form.with(|f| f.as_ref().map(TaskForm::submit_label).unwrap_or_default());
    let can_submit = move || form.with(|f| f.as_ref().is_some_and(TaskForm::can_submit));
    let status = move || form.with(|f| f.as_ref().map(TaskForm::status).unwrap_or_default());
    let assignee = read(|f| f.assigned_to().unwrap_or_default().to_string());

    let submit = move |_| {
        if let Some(current) = form.get_untracked() {
            if current.can_submit() {
                on_submit.run(current);
            }
        }
    };

    view! {
        <Show when=move || form.with(Option::is_some)>
            <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
                <div class="dialog" role="dialog" on:click=|ev| ev.stop_propagation()>
                    <div class="dialog-title">
                        <h2>{heading}</h2>
                        <button class="dialog-close" aria-label="close" on:click=move |_| on_close.run(())>"×"</button>
                    </div>
                    <div class="dialog-content">
                        <label class="field">
                            <span class="field-label">"Task Title *"</span>
                            <input
                                type="text"
                                name="title"
                                autofocus=true
                                required=true
                                prop:value=read(|f| f.title().to_string())
                                on:input=edit(TaskField::Title)
                            />
                        </label>
                        <label class="field">
                            <span class="field-label">"Description"</span>
                            <textarea
                                name="description"
                                rows="4"
                                prop:value=read(|f| f.description().to_string())
                                on:input=edit(TaskField::Description)
                            ></textarea>
                        </label>
                        <label class="field">
                            <span class="field-label">"Status"</span>
                            <select name="status" on:change=edit(TaskField::Status)>
                                {TaskStatus::ALL.iter().map(|s| {
                                    let s = *s;
                                    view! {
                                        <option value=s.as_str() selected=move || status() == s>{s.label()}</option>
                                    }
                                }).collect_view()}
                            </select>
                        </label>
                        <label class="field">
                            <span class="field-label">"Assigned To"</span>
                            <select name="assignedTo" on:change=edit(TaskField::AssignedTo)>
                                <option value="" selected=move || assignee().is_empty()>"None"</option>
                                <For
                                    each=move || users.get()
                                    key=|user| user.id.clone()
                                    children=move |user| {
                                        let value = user.name.clone();
                                        let selected_name = user.name.clone();
                                        view! {
                                            <option value=value selected=move || assignee() == selected_name>
                                                {user.name}
                                            </option>
                                        }
                                    }
                                />
                            </select>
                        </label>
                    </div>
                    <div class="dialog-actions">
                        <button class="btn" on:click=move |_| on_close.run(())>"Cancel"</button>
                        <button
                            class="btn btn-contained"
                            disabled=move || !can_submit()
                            on:click=submit
                        >
                            {submit_label}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
