//! Task Manager App
//!
//! Root component: shared context, routes and the toast host.

use leptos::prelude::*;
use leptos_router::components::{ProtectedRoute, Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::components::{ToastHost, Toaster};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::pages::{HomePage, LoginPage, NotFound};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let ctx = provide_app_context(&AppConfig::load());

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/login") view=LoginPage />
                <ProtectedRoute
                    path=path!("/")
                    view=HomePage
                    condition=move || Some(ctx.is_logged_in())
                    redirect_path=|| "/login"
                />
            </Routes>
        </Router>
        <ToastHost />
    }
}

/// Provide the API client, toaster, store and session context to all children
pub(crate) fn provide_app_context(config: &AppConfig) -> AppContext {
    provide_context(ApiClient::new(&config.api_base_url));
    provide_context(Toaster::new(config.toast_duration));
    provide_context(Store::new(AppState::default()));
    let ctx = AppContext::new();
    provide_context(ctx);
    ctx
}
