//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav::Nav;
use crate::components::toast_host::ToastHost;
use crate::pages::{
    about::AboutPage, admin::AdminPage, blog::BlogPage, contact::ContactPage, home::HomePage, login::LoginPage,
    not_found::NotFoundPage, payment::PaymentPage, projects::ProjectsPage, upcoming::UpcomingPage,
};
use crate::state::{admin::AdminState, auth::AuthState, toast::ToastQueue};
use crate::util::auth::install_session_loader;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, admin data and toast contexts and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let admin = RwSignal::new(AdminState::default());
    let toasts = RwSignal::new(ToastQueue::default());

    provide_context(auth);
    provide_context(admin);
    provide_context(toasts);

    install_session_loader(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/folio.css"/>
        <Title text="Portfolio"/>

        <Router>
            <Nav/>
            <main class="site-main">
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                    <Route path=StaticSegment("projects") view=ProjectsPage/>
                    <Route path=StaticSegment("blog") view=BlogPage/>
                    <Route path=StaticSegment("upcoming") view=UpcomingPage/>
                    <Route path=StaticSegment("admin") view=AdminPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("payment") view=PaymentPage/>
                </Routes>
            </main>
            <ToastHost/>
        </Router>
    }
}
