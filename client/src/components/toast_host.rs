//! Corner stack rendering the shared toast queue.

use leptos::prelude::*;

use crate::state::toast::{ToastQueue, ToastVariant};

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastQueue>>();

    view! {
        <div class="toast-host" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .items
                    .into_iter()
                    .map(|(id, toast)| {
                        let destructive = toast.variant == ToastVariant::Destructive;
                        view! {
                            <div class="toast" class:toast--destructive=destructive role="status">
                                <div class="toast__body">
                                    <strong class="toast__title">{toast.title}</strong>
                                    <p class="toast__description">{toast.description}</p>
                                </div>
                                <button
                                    class="toast__close"
                                    aria-label="Dismiss"
                                    on:click=move |_| toasts.update(|q| q.dismiss(id))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
