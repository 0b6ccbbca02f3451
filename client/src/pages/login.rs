//! Admin login page.

use content::session::{ADMIN_ROUTE, SessionState};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::toast::{Toast, ToastQueue, notify};
use crate::util::auth::session_gate;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastQueue>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        match session_gate().attempt_login(email_value.trim(), &password_value) {
            Ok(()) => {
                auth.set(AuthState::resolved(SessionState::LoggedIn));
                notify(toasts, Toast::info("Login Successful! 🎉", "Welcome to the admin dashboard."));
                navigate(ADMIN_ROUTE, NavigateOptions::default());
            }
            Err(e) => {
                password.set(String::new());
                notify(toasts, Toast::from_error(&e));
            }
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Admin Login"</h1>
                <p class="login-card__subtitle">"Sign in to manage posts, messages and payments."</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="username"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <div class="login-input__wrap">
                        <input
                            class="login-input"
                            type=move || if show_password.get() { "text" } else { "password" }
                            placeholder="Password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="login-input__reveal"
                            on:click=move |_| show_password.update(|shown| *shown = !*shown)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                    <button class="login-button" type="submit">
                        "Sign In"
                    </button>
                </form>
                <a href="/" class="login-card__back">"Back to site"</a>
            </div>
        </div>
    }
}
