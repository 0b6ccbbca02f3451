//! Admin panel route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Gated by the session flag: visitors without it are sent to `/login` once
//! the flag has been read. On entry the inbox and ledger are re-read from
//! storage so submissions made on the public pages show up.
//!
//! ARCHITECTURE
//! ============
//! Provides `RwSignal<AdminUi>` to the tab panels; domain data comes from the
//! app-level `RwSignal<AdminState>`. The header search feeds whichever tab is
//! active.

use content::session::{ADMIN_ROUTE, SessionState};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::admin_dashboard::DashboardPanel;
use crate::components::admin_messages::MessagesPanel;
use crate::components::admin_payments::PaymentsPanel;
use crate::components::admin_posts::PostsPanel;
use crate::components::admin_settings::SettingsPanel;
use crate::state::admin::AdminState;
use crate::state::auth::AuthState;
use crate::state::toast::{Toast, ToastQueue, notify};
use crate::state::ui::{AdminTab, AdminUi};
use crate::util::auth::{install_route_guard, session_gate};

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let admin = expect_context::<RwSignal<AdminState>>();
    let toasts = expect_context::<RwSignal<ToastQueue>>();
    let ui = RwSignal::new(AdminUi::default());
    provide_context(ui);
    let navigate = use_navigate();

    // Also handles the post-logout redirect to the login page.
    install_route_guard(auth, ADMIN_ROUTE, navigate);

    Effect::new(move || {
        if !auth.get().is_logged_in() {
            return;
        }
        if let Some(Err(e)) = admin.try_update(AdminState::reload_records) {
            notify(toasts, Toast::from_error(&e));
        }
    });

    let on_logout = Callback::new(move |()| {
        if let Err(e) = session_gate().logout() {
            notify(toasts, Toast::from_error(&e));
            return;
        }
        auth.set(AuthState::resolved(SessionState::LoggedOut));
        notify(toasts, Toast::info("Logged Out 👋", "You have been successfully logged out."));
    });

    let active = move || ui.with(|u| u.active_tab);

    view! {
        <Show
            when=move || auth.get().is_logged_in()
            fallback=move || {
                view! {
                    <div class="admin-page">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="admin-page">
                <header class="admin-page__header">
                    <div>
                        <h1>"Admin Dashboard"</h1>
                        <p class="admin-page__subtitle">"Manage your portfolio content and settings"</p>
                    </div>
                    <input
                        class="admin-page__search"
                        type="search"
                        placeholder=move || format!("Search {}...", active().label().to_lowercase())
                        prop:value=move || ui.with(|u| u.global_search.clone())
                        on:input=move |ev| ui.update(|u| u.global_search = event_target_value(&ev))
                    />
                    <img class="admin-page__avatar" src=move || ui.with(|u| u.profile_picture().to_owned()) alt="Profile"/>
                    <button class="btn btn--ghost" on:click=move |_| on_logout.run(())>
                        "Logout"
                    </button>
                </header>
                <nav class="admin-tabs">
                    {AdminTab::ALL
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <button
                                    class="admin-tabs__tab"
                                    class:admin-tabs__tab--active=move || active() == tab
                                    on:click=move |_| ui.update(|u| u.select_tab(tab))
                                >
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                    <select
                        class="admin-tabs__select"
                        on:change=move |ev| {
                            if let Some(tab) = AdminTab::from_id(&event_target_value(&ev)) {
                                ui.update(|u| u.select_tab(tab));
                            }
                        }
                    >
                        {AdminTab::ALL
                            .into_iter()
                            .map(|tab| view! { <option value={tab.id()} selected=move || active() == tab>{tab.label()}</option> })
                            .collect_view()}
                    </select>
                </nav>
                {move || match active() {
                    AdminTab::Dashboard => view! { <DashboardPanel/> }.into_any(),
                    AdminTab::Posts => view! { <PostsPanel/> }.into_any(),
                    AdminTab::Messages => view! { <MessagesPanel/> }.into_any(),
                    AdminTab::Payments => view! { <PaymentsPanel/> }.into_any(),
                    AdminTab::Settings => view! { <SettingsPanel on_logout=on_logout/> }.into_any(),
                }}
            </div>
        </Show>
    }
}
