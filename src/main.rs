//! Task Manager Frontend Entry Point

mod actions;
mod api;
mod app;
mod board;
mod components;
mod config;
mod context;
mod error;
mod forms;
mod logging;
mod models;
mod pages;
mod session;
mod store;
mod validation;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(App);
}
