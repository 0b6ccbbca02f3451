//! Confirmation dialog shown before a post is deleted.

use leptos::prelude::*;

#[component]
pub fn DeleteConfirmation(title: String, on_confirm: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_cancel.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div
                class="dialog dialog--danger"
                role="alertdialog"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <h2>"Delete Post"</h2>
                <p>"Are you sure you want to delete " <strong>{format!("\"{title}\"")}</strong> "?"</p>
                <p class="dialog__hint">"This action cannot be undone."</p>
                <div class="dialog__actions">
                    <button class="btn btn--ghost" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
