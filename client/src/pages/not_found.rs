//! Catch-all page for unknown routes.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();

    view! {
        <div class="not-found-page">
            <h1>"404"</h1>
            <p class="not-found-page__title">"Page not found"</p>
            <p class="not-found-page__path">{move || location.pathname.get()}</p>
            <a href="/" class="btn btn--primary">"Return Home"</a>
        </div>
    }
}
