//! Navigation Bar Component
//!
//! App bar with view switching, "Add Task", logout, and a drawer for narrow
//! screens.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::context::AppContext;

/// Sub-view shown by the home page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HomeView {
    #[default]
    List,
    Chart,
    Users,
}

/// (view, label, icon) in display order
pub const NAV_ITEMS: &[(HomeView, &str, &str)] = &[
    (HomeView::List, "Task List", "☰"),
    (HomeView::Chart, "Task Chart", "◔"),
    (HomeView::Users, "Users", "👥"),
];

/// Keyboard focus moves (Tab, Shift) must not toggle the drawer
pub fn drawer_key_toggles(key: &str) -> bool {
    !matches!(key, "Tab" | "Shift")
}

#[component]
pub fn NavBar(
    current_view: ReadSignal<HomeView>,
    set_current_view: WriteSignal<HomeView>,
    #[prop(into)] on_add_task: Callback<()>,
) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let navigate = use_navigate();
    let (drawer_open, set_drawer_open) = signal(false);

    let logout = move |_| {
        ctx.sign_out();
        navigate("/login", NavigateOptions { replace: true, ..Default::default() });
    };

    let nav_class = move |view: HomeView| {
        if current_view.get() == view { "nav-btn active" } else { "nav-btn" }
    };

    view! {
        <header class="app-bar">
            <button
                class="menu-btn"
                aria-label="menu"
                on:click=move |_| set_drawer_open.set(true)
            >
                "☰"
            </button>
            <h6 class="app-title">"Task Manager"</h6>
            <nav class="nav-inline">
                {NAV_ITEMS.iter().map(|&(view, label, icon)| {
                    view! {
                        <button class=move || nav_class(view) on:click=move |_| set_current_view.set(view)>
                            <span class="nav-icon">{icon}</span>
                            {label}
                        </button>
                    }
                }).collect_view()}
            </nav>
            <button class="add-task-btn" on:click=move |_| on_add_task.run(())>
                "+ Add Task"
            </button>
            <button class="logout-btn" title="Logout" aria-label="logout" on:click=logout>
                "⏻"
            </button>
        </header>

        <Show when=move || drawer_open.get()>
            <div class="drawer-backdrop" on:click=move |_| set_drawer_open.set(false)>
                <aside
                    class="drawer"
                    role="presentation"
                    on:click=move |_| set_drawer_open.set(false)
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if drawer_key_toggles(&ev.key()) {
                            set_drawer_open.set(false);
                        }
                    }
                >
                    <ul class="drawer-list">
                        {NAV_ITEMS.iter().map(|&(view, label, icon)| {
                            view! {
                                <li
                                    class=move || if current_view.get() == view { "drawer-item selected" } else { "drawer-item" }
                                    on:click=move |_| set_current_view.set(view)
                                >
                                    <span class="nav-icon">{icon}</span>
                                    <span class="drawer-label">{label}</span>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                </aside>
            </div>
        </Show>
    }
}
