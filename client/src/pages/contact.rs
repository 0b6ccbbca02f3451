//! Contact page: info cards and the contact form feeding the admin inbox.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form validates immediately, then settles for a couple of seconds
//! before the message is appended to the inbox in browser storage. Leaving
//! the page during that wait cancels the submission.

use content::clock::SystemClock;
use content::inbox::ContactDraft;
use content::submission::{self, CONTACT_DELAY, CancelToken, Outcome};
use leptos::prelude::*;

use crate::state::toast::{Toast, ToastQueue, notify};
use crate::util::settle::TimerSettle;
use crate::util::storage::load_inbox;

const CONTACT_INFO: [(&str, &str, Option<&str>, &str); 4] = [
    ("Email", "kyim@dev.com", Some("mailto:kyimshia@outlook.com"), "Best way to reach me"),
    ("Phone", "+92 325-7613860", Some("tel:+92325-7613860"), "Available for consultations"),
    ("Location", "University Of Mangement & Technology, Lahore", None, "Open to remote work"),
    ("Response Time", "Within 24 hours", None, "Quick response guaranteed"),
];

#[component]
pub fn ContactPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastQueue>>();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let body = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let token = StoredValue::new(CancelToken::new());
    on_cleanup(move || token.get_value().cancel());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let draft = ContactDraft {
            name: name.get_untracked(),
            email: email.get_untracked(),
            subject: subject.get_untracked(),
            message: body.get_untracked(),
        };
        let message = match draft.submit(&SystemClock) {
            Ok(message) => message,
            Err(e) => {
                notify(toasts, Toast::from_error(&e));
                return;
            }
        };
        busy.set(true);
        let token = token.get_value();
        leptos::task::spawn_local(async move {
            let outcome = submission::run(&TimerSettle, CONTACT_DELAY, &token, || load_inbox()?.append(message)).await;
            match outcome {
                Outcome::Completed(()) => {
                    notify(
                        toasts,
                        Toast::info(
                            "Message Sent Successfully! 🎉",
                            "Thank you for reaching out. I'll get back to you within 24 hours!",
                        ),
                    );
                    for field in [name, email, subject, body] {
                        let _ = field.try_set(String::new());
                    }
                }
                Outcome::Failed(e) => notify(toasts, Toast::from_error(&e)),
                Outcome::Cancelled => {}
            }
            let _ = busy.try_set(false);
        });
    };

    let field = move |label: &'static str, kind: &'static str, value: RwSignal<String>, placeholder: &'static str| {
        view! {
            <label class="field">
                <span>{label}</span>
                <input
                    type=kind
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <div class="contact-page">
            <h1>"Get In Touch"</h1>
            <div class="contact-page__layout">
                <form class="contact-form" on:submit=on_submit>
                    {field("Name", "text", name, "John Doe")}
                    {field("Email", "email", email, "john@example.com")}
                    {field("Subject", "text", subject, "Project collaboration")}
                    <label class="field">
                        <span>"Message"</span>
                        <textarea
                            rows="6"
                            placeholder="Tell me about your project..."
                            prop:value=move || body.get()
                            on:input=move |ev| body.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                        {move || if busy.get() { "Sending..." } else { "Send Message" }}
                    </button>
                </form>
                <aside class="contact-info">
                    {CONTACT_INFO
                        .into_iter()
                        .map(|(label, value, action, description)| {
                            view! {
                                <div class="contact-info__card">
                                    <h3>{label}</h3>
                                    {match action {
                                        Some(href) => view! { <a href=href>{value}</a> }.into_any(),
                                        None => view! { <span>{value}</span> }.into_any(),
                                    }}
                                    <p class="contact-info__hint">{description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </aside>
            </div>
        </div>
    }
}
