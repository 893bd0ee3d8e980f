//! Toast Notification Component
//!
//! One message at a time with a severity; hides itself after the configured
//! duration or when closed.

use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    fn icon_and_class(&self) -> (&'static str, &'static str) {
        match self {
            Severity::Success => ("✓", "toast toast-success"),
            Severity::Error => ("✕", "toast toast-error"),
            Severity::Info => ("ℹ", "toast toast-info"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct ToastMessage {
    id: u64,
    text: String,
    severity: Severity,
}

/// Toast handle provided via context
#[derive(Clone, Copy)]
pub struct Toaster {
    current: RwSignal<Option<ToastMessage>>,
    next_id: StoredValue<u64>,
    duration: StoredValue<Duration>,
}

impl Toaster {
    pub fn new(duration: Duration) -> Self {
        Self {
            current: RwSignal::new(None),
            next_id: StoredValue::new(0),
            duration: StoredValue::new(duration),
        }
    }

    pub fn show(&self, text: impl Into<String>, severity: Severity) {
        let id = self.next_id.get_value() + 1;
        self.next_id.set_value(id);
        self.current.set(Some(ToastMessage { id, text: text.into(), severity }));

        // Only the toast that scheduled the timer may be hidden by it
        let current = self.current;
        let millis = self.duration.get_value().as_millis().min(u32::MAX as u128) as u32;
        spawn_local(async move {
            TimeoutFuture::new(millis).await;
            if current.with_untracked(|msg| msg.as_ref().map(|m| m.id)) == Some(id) {
                current.set(None);
            }
        });
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(text, Severity::Success);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(text, Severity::Error);
    }

    pub fn info(&self, text: impl Into<String>) {
        self.show(text, Severity::Info);
    }

    pub fn close(&self) {
        self.current.set(None);
    }
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

/// Toast notification container
#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        {move || {
            toaster.current.get().map(|msg| {
                let (icon, class) = msg.severity.icon_and_class();
                view! {
                    <div class=class role="alert">
                        <span class="toast-icon">{icon}</span>
                        <span class="toast-text">{msg.text}</span>
                        <button class="toast-close" aria-label="close" on:click=move |_| toaster.close()>
                            "×"
                        </button>
                    </div>
                }
            })
        }}
    }
}
