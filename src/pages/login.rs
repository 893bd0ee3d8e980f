//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::actions;
use crate::api::ApiClient;
use crate::components::use_toaster;
use crate::context::AppContext;
use crate::session::LocalSessionStore;
use crate::validation::{check_login, validate_email, validate_login_password};

const DEMO_EMAIL: &str = "admin@admin.com";
const DEMO_PASSWORD: &str = "admin2025";

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let ctx = expect_context::<AppContext>();
    let toaster = use_toaster();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (email_error, set_email_error) = signal(None::<String>);
    let (password_error, set_password_error) = signal(None::<String>);
    let (show_password, set_show_password) = signal(false);
    let (remember_me, set_remember_me) = signal(false);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let check_email = move || {
        set_email_error.set(validate_email(&email.get_untracked()).err().map(|e| e.to_string()));
    };
    let check_password = move || {
        set_password_error.set(validate_login_password(&password.get_untracked()).err().map(|e| e.to_string()));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        set_error.set(None);
        let checked = check_login(&email.get_untracked(), &password.get_untracked());
        let errors = checked.as_ref().err().copied().unwrap_or_default();
        set_email_error.set(errors.email.map(|e| e.to_string()));
        set_password_error.set(errors.password.map(|e| e.to_string()));
        let Ok(credentials) = checked else { return };

        let api = api.clone();
        let navigate = navigate.clone();
        set_loading.set(true);
        spawn_local(async move {
            match actions::users::login(&api, &LocalSessionStore, credentials).await {
                Ok(session) => {
                    ctx.signed_in(&session);
                    toaster.success("Login successful!");
                    navigate("/", NavigateOptions::default());
                }
                Err(e) => {
                    tracing::warn!(error = %e, "login rejected");
                    set_error.set(Some("Invalid email or password".to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-avatar">"🔒"</div>
                <h1 class="login-heading">"Sign in"</h1>

                <Show when=move || error.with(Option::is_some)>
                    <div class="alert alert-error" role="alert">{move || error.get()}</div>
                </Show>

                <form class="login-form" novalidate=true on:submit=on_submit>
                    <label class="field">
                        <span class="field-label">"Email Address *"</span>
                        <input
                            type="email"
                            name="email"
                            autocomplete="email"
                            autofocus=true
                            class:invalid=move || email_error.with(Option::is_some)
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            on:blur=move |_| check_email()
                        />
                        <span class="field-error">{move || email_error.get()}</span>
                    </label>

                    <label class="field">
                        <span class="field-label">"Password *"</span>
                        <div class="input-with-adornment">
                            <input
                                type=move || if show_password.get() { "text" } else { "password" }
                                name="password"
                                autocomplete="current-password"
                                class:invalid=move || password_error.with(Option::is_some)
                                prop:value=move || password.get()
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                on:blur=move |_| check_password()
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
                        <span class="field-error">{move || password_error.get()}</span>
                    </label>

                    <label class="checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || remember_me.get()
                            on:change=move |ev| set_remember_me.set(event_target_checked(&ev))
                        />
                        "Remember me"
                    </label>

                    <button type="submit" class="btn btn-contained btn-block" disabled=move || loading.get()>
                        <Show when=move || loading.get() fallback=|| "Sign In">
                            <span class="spinner" aria-label="loading"></span>
                        </Show>
                    </button>
                </form>

                <p class="login-hint">
                    "Demo credentials: " {DEMO_EMAIL} " / " {DEMO_PASSWORD}
                </p>
            </div>
        </div>
    }
}
