//! Messages tab: contact-form submissions with mark-as-read.

use content::inbox::MessageStatus;
use leptos::prelude::*;

use crate::state::admin::{AdminAction, AdminState, apply};
use crate::state::toast::ToastQueue;
use crate::state::ui::AdminUi;

#[component]
pub fn MessagesPanel() -> impl IntoView {
    let admin = expect_context::<RwSignal<AdminState>>();
    let ui = expect_context::<RwSignal<AdminUi>>();
    let toasts = expect_context::<RwSignal<ToastQueue>>();

    let messages = move || admin.with(|state| ui.with(|ui| state.visible_messages(ui)));

    view! {
        <section class="admin-panel">
            <header class="admin-panel__header">
                <h2>"Messages"</h2>
                <span class="badge">{move || format!("{} unread", admin.with(|s| s.inbox.unread_count()))}</span>
            </header>
            {move || {
                let list = messages();
                if list.is_empty() {
                    return view! { <p class="admin-panel__empty">"No messages found."</p> }.into_any();
                }
                list.into_iter()
                    .map(|m| {
                        let id = m.id;
                        let unread = m.status == MessageStatus::Unread;
                        view! {
                            <article class="message-row" class:message-row--unread=unread>
                                <header class="message-row__header">
                                    <strong>{m.name}</strong>
                                    <a href={format!("mailto:{}", m.email)}>{m.email.clone()}</a>
                                    <time>{m.timestamp.format("%Y-%m-%d %H:%M").to_string()}</time>
                                </header>
                                <h4 class="message-row__subject">{m.subject}</h4>
                                <p class="message-row__body">{m.message}</p>
                                <Show when=move || unread>
                                    <button
                                        class="btn btn--ghost"
                                        on:click=move |_| apply(admin, toasts, AdminAction::MarkRead(id))
                                    >
                                        "Mark as Read"
                                    </button>
                                </Show>
                            </article>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </section>
    }
}
