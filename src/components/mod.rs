//! UI Components
//!
//! Reusable Leptos components.

mod chart_view;
mod confirm_dialog;
mod list_view;
mod nav_bar;
mod task_dialog;
mod toast;
mod user_view;

pub use chart_view::ChartView;
pub use confirm_dialog::ConfirmDialog;
pub use list_view::ListView;
pub use nav_bar::{HomeView, NavBar};
pub use task_dialog::TaskDialog;
pub use toast::{use_toaster, ToastHost, Toaster};
pub use user_view::UserView;
