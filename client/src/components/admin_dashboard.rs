//! Dashboard tab: headline counts and the latest messages and payments.

use content::inbox::MessageStatus;
use leptos::prelude::*;

use crate::state::admin::AdminState;
use crate::state::ui::{AdminTab, AdminUi};

#[component]
fn StatCard(label: &'static str, value: usize, #[prop(into)] detail: String) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__label">{label}</span>
            <span class="stat-card__value">{value}</span>
            <span class="stat-card__detail">{detail}</span>
        </div>
    }
}

#[component]
pub fn DashboardPanel() -> impl IntoView {
    let admin = expect_context::<RwSignal<AdminState>>();
    let ui = expect_context::<RwSignal<AdminUi>>();
    let dashboard = Memo::new(move |_| admin.with(|state| ui.with(|ui| state.dashboard(ui))));

    view! {
        <section class="admin-panel admin-panel--dashboard">
            {move || {
                let d = dashboard.get();
                view! {
                    <div class="stat-grid">
                        <StatCard label="Total Posts" value={d.total_posts} detail={format!("{} published", d.published_posts)}/>
                        <StatCard label="Messages" value={d.messages} detail={format!("{} unread", d.unread_messages)}/>
                        <StatCard label="Payments" value={d.payments} detail={format!("{} pending", d.pending_payments)}/>
                    </div>
                    <div class="recent-grid">
                        <div class="recent">
                            <header class="recent__header">
                                <h3>"Recent Messages"</h3>
                                <button class="btn btn--link" on:click=move |_| ui.update(|u| u.select_tab(AdminTab::Messages))>
                                    "View all"
                                </button>
                            </header>
                            {if d.recent_messages.is_empty() {
                                view! { <p class="recent__empty">"No messages yet."</p> }.into_any()
                            } else {
                                d.recent_messages
                                    .into_iter()
                                    .map(|m| {
                                        view! {
                                            <div class="recent__row">
                                                <strong>{m.name}</strong>
                                                <span>{m.subject}</span>
                                                <span class="badge">{if m.status == MessageStatus::Unread { "unread" } else { "read" }}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }}
                        </div>
                        <div class="recent">
                            <header class="recent__header">
                                <h3>"Recent Payments"</h3>
                                <button class="btn btn--link" on:click=move |_| ui.update(|u| u.select_tab(AdminTab::Payments))>
                                    "View all"
                                </button>
                            </header>
                            {if d.recent_payments.is_empty() {
                                view! { <p class="recent__empty">"No payments yet."</p> }.into_any()
                            } else {
                                d.recent_payments
                                    .into_iter()
                                    .map(|p| {
                                        view! {
                                            <div class="recent__row">
                                                <strong>{p.email}</strong>
                                                <span>{format!("${}", p.amount)}</span>
                                                <span class="badge">{p.status.as_str()}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }}
                        </div>
                    </div>
                }
            }}
        </section>
    }
}
