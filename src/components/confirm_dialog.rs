//! Confirm Dialog Component
//!
//! Modal yes/no confirmation for destructive actions.

use leptos::prelude::*;

/// Confirmation dialog
///
/// # Arguments
/// * `open` - Whether the dialog is shown
/// * `title` - Dialog heading (e.g. "Confirm Delete")
/// * `message` - Body text
/// * `confirm_label` - Label of the destructive button
/// * `on_confirm` - Callback when the user confirms
/// * `on_cancel` - Callback when the user cancels or clicks outside
#[component]
pub fn ConfirmDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into)] confirm_label: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
                <div class="dialog dialog-small" role="alertdialog" on:click=|ev| ev.stop_propagation()>
                    <div class="dialog-title">
                        <h2>{title.clone()}</h2>
                    </div>
                    <div class="dialog-content">
                        <p>{message.clone()}</p>
                    </div>
                    <div class="dialog-actions">
                        <button class="btn" on:click=move |_| on_cancel.run(())>"Cancel"</button>
                        <button class="btn btn-contained btn-danger" on:click=move |_| on_confirm.run(())>
                            {confirm_label.clone()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
