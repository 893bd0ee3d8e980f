//! User Management View
//!
//! Searchable user table with add/edit dialog and delete confirmation.
//! Outcomes are reported through toasts.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::api::ApiClient;
use crate::board;
use crate::components::list_view::format_date;
use crate::components::toast::use_toaster;
use crate::components::ConfirmDialog;
use crate::forms::{UserField, UserForm};
use crate::models::User;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn UserView() -> impl IntoView {
    let store = use_app_store();
    let api = expect_context::<ApiClient>();
    let toaster = use_toaster();

    let (search, set_search) = signal(String::new());
    let dialog = RwSignal::new(None::<UserForm>);
    let deleting = RwSignal::new(None::<String>);

    let filtered = Memo::new(move |_| {
        let term = search.get();
        store
            .users()
            .with(|users| board::filter_users(users, &term).into_iter().cloned().collect::<Vec<_>>())
    });

    let save = {
        let api = api.clone();
        Callback::new(move |form: UserForm| {
            if let Err(e) = form.validate() {
                toaster.error(e.to_string());
                return;
            }
            let api = api.clone();
            if form.is_editing() {
                let Some(edited) = form.into_edited_user() else { return };
                dialog.set(None);
                spawn_local(async move {
                    match actions::users::update(&api, &store, edited, Utc::now()).await {
                        Ok(()) => toaster.success("User updated successfully"),
                        Err(e) => {
                            tracing::error!(error = %e, "user update failed");
                            toaster.error("User was not updated, please try again");
                        }
                    }
                });
            } else {
                let user = form.into_new_user(Utc::now());
                spawn_local(async move {
                    match actions::users::add(&api, &store, user).await {
                        Ok(_) => {
                            dialog.set(None);
                            toaster.success("User added successfully");
                        }
                        Err(e) => {
                            tracing::error!(error = %e, "user create failed");
                            toaster.error("Fail adding user, please try again");
                        }
                    }
                });
            }
        })
    };

    let confirm_delete = Callback::new(move |_: ()| {
        let Some(id) = deleting.get_untracked() else { return };
        deleting.set(None);
        let api = api.clone();
        spawn_local(async move {
            match actions::users::delete(&api, &store, &id).await {
                Ok(()) => toaster.info("User deleted successfully"),
                Err(e) => {
                    tracing::error!(error = %e, id = %id, "user delete failed");
                    toaster.error("User was not deleted, please try again");
                }
            }
        });
    });

    view! {
        <section class="user-view">
            <div class="view-header">
                <h1 class="view-heading">"User Management"</h1>
                <button class="fab" aria-label="add" on:click=move |_| dialog.set(Some(UserForm::default()))>
                    "+"
                </button>
            </div>

            <div class="panel">
                <div class="search-box">
                    <span class="search-icon">"🔍"</span>
                    <input
                        type="text"
                        placeholder="Search users by name or email"
                        prop:value=move || search.get()
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                    />
                    <Show when=move || !search.with(String::is_empty)>
                        <button class="search-clear" aria-label="clear" on:click=move |_| set_search.set(String::new())>
                            "×"
                        </button>
                    </Show>
                </div>

                <table class="user-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Created"</th>
                            <th>"Updated"</th>
                            <th class="align-right">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || filtered.get()
                            key=|user| (user.id.clone(), user.updated_at)
                            children=move |user: User| {
                                let id = user.id.clone().unwrap_or_default();
                                let for_edit = user.clone();
                                view! {
                                    <tr>
                                        <td>{user.name.clone()}</td>
                                        <td>{user.email.clone()}</td>
                                        <td>{format_date(&user.created_at)}</td>
                                        <td>{format_date(&user.updated_at)}</td>
                                        <td class="align-right">
                                            <button
                                                class="icon-btn edit-btn"
                                                title="Edit"
                                                on:click=move |_| dialog.set(Some(UserForm::edit(&for_edit)))
                                            >
                                                "✎"
                                            </button>
                                            <button
                                                class="icon-btn delete-btn"
                                                title="Delete"
                                                on:click=move |_| deleting.set(Some(id.clone()))
                                            >
                                                "🗑"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>

            <UserDialog form=dialog on_submit=save />

            <ConfirmDialog
                open=Signal::derive(move || deleting.with(Option::is_some))
                title="Confirm Delete"
                message="Are you sure you want to delete this user? This action cannot be undone."
                confirm_label="Delete"
                on_confirm=confirm_delete
                on_cancel=move |_| deleting.set(None)
            />
        </section>
    }
}

/// Add/edit user dialog. Open while `form` holds `Some`.
#[component]
fn UserDialog(form: RwSignal<Option<UserForm>>, on_submit: Callback<UserForm>) -> impl IntoView {
    let (show_password, set_show_password) = signal(false);

    let edit = move |field: UserField| {
        move |ev: web_sys::Event| {
            let value = event_target_value(&ev);
            form.update(|f| {
                if let Some(f) = f {
                    f.set(field, value);
                }
            });
        }
    };
    let read = move |get: fn(&UserForm) -> String| move || form.with(|f| f.as_ref().map(get).unwrap_or_default());
    let label = move |get: fn(&UserForm) -> &'static str| move || form.with(|f| f.as_ref().map(get).unwrap_or_default());
    let editing = move || form.with(|f| f.as_ref().is_some_and(UserForm::is_editing));

    let close = move |_| form.set(None);
    let submit = move |_| {
        if let Some(current) = form.get_untracked() {
            on_submit.run(current);
        }
    };

    view! {
        <Show when=move || form.with(Option::is_some)>
            <div class="dialog-backdrop" on:click=close>
                <div class="dialog" role="dialog" on:click=|ev| ev.stop_propagation()>
                    <div class="dialog-title">
                        <h2>{label(UserForm::heading)}</h2>
                    </div>
                    <div class="dialog-content">
                        <label class="field">
                            <span class="field-label">"Name *"</span>
                            <input
                                type="text"
                                name="name"
                                autofocus=true
                                required=true
                                prop:value=read(|f| f.name.clone())
                                on:input=edit(UserField::Name)
                            />
                        </label>
                        <label class="field">
                            <span class="field-label">"Email *"</span>
                            <input
                                type="email"
                                name="email"
                                required=true
                                prop:value=read(|f| f.email.clone())
                                on:input=edit(UserField::Email)
                            />
                        </label>
                        <label class="field">
                            <span class="field-label">{label(UserForm::password_label)}</span>
                            <div class="input-with-adornment">
                                <input
                                    type=move || if show_password.get() { "text" } else { "password" }
                                    name="password"
                                    required=move || !editing()
                                    prop:value=read(|f| f.password.clone())
                                    on:input=edit(UserField::Password)
                                />
                                <button
                                    type="button"
                                    class="icon-btn"
                                    aria-label="toggle password visibility"
                                    on:click=move |_| set_show_password.update(|v| *v = !*v)
                                >
                                    {move || if show_password.get() { "🙈" } else { "👁" }}
                                </button>
                            </div>
                        </label>
                    </div>
                    <div class="dialog-actions">
                        <button class="btn" on:click=close>"Cancel"</button>
                        <button class="btn btn-contained" on:click=submit>
                            {label(UserForm::submit_label)}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
