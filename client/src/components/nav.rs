//! Top navigation bar shown on every route.

use leptos::prelude::*;

use crate::state::auth::AuthState;

const LINKS: [(&str, &str); 6] = [
    ("/", "Home"),
    ("/about", "About"),
    ("/projects", "Projects"),
    ("/blog", "Blog"),
    ("/upcoming", "Upcoming"),
    ("/contact", "Contact"),
];

#[component]
pub fn Nav() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let menu_open = RwSignal::new(false);

    let account_href = move || if auth.get().is_logged_in() { "/admin" } else { "/login" };
    let account_label = move || if auth.get().is_logged_in() { "Admin" } else { "Login" };

    view! {
        <nav class="site-nav">
            <div class="site-nav__inner">
                <a href="/" class="site-nav__brand">"Portfolio"</a>
                <button
                    class="site-nav__toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    "☰"
                </button>
                <div class="site-nav__links" class:site-nav__links--open=move || menu_open.get()>
                    {LINKS
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <a href=href class="site-nav__link" on:click=move |_| menu_open.set(false)>
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a href=account_href class="site-nav__link site-nav__link--account" on:click=move |_| menu_open.set(false)>
                        {account_label}
                    </a>
                </div>
            </div>
        </nav>
    }
}
