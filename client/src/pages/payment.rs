//! Payment page: Binance Pay instructions and the receipt upload form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Buyers land here from the purchase dialog. A submitted receipt becomes a
//! pending entry in the payment ledger, which the admin later marks
//! completed or rejected.

use content::clock::SystemClock;
use content::payments::PaymentDraft;
use content::submission::{self, CancelToken, Outcome, PAYMENT_DELAY};
use leptos::prelude::*;

use crate::catalog::BINANCE_PAY_ID;
use crate::components::image_picker::ImagePicker;
use crate::state::toast::{Toast, ToastQueue, notify};
use crate::util::qr::qr_code_url;
use crate::util::settle::TimerSettle;
use crate::util::storage::load_ledger;

const QR_SIZE: u32 = 250;

#[component]
pub fn PaymentPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastQueue>>();
    let email = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());
    let screenshot = RwSignal::new(None::<String>);
    let note = RwSignal::new(String::new());
    let transaction_id = RwSignal::new(String::new());
    let copied = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let token = StoredValue::new(CancelToken::new());
    on_cleanup(move || token.get_value().cancel());

    let on_copy = move |_| {
        leptos::task::spawn_local(async move {
            if crate::util::clipboard::write_text(BINANCE_PAY_ID).await {
                copied.set(true);
                notify(toasts, Toast::info("Copied! 📋", "Binance Pay ID has been copied to clipboard."));
                #[cfg(feature = "hydrate")]
                {
                    gloo_timers::future::sleep(std::time::Duration::from_secs(3)).await;
                    let _ = copied.try_set(false);
                }
            } else {
                notify(toasts, Toast::error("Copy Failed", "Please copy manually."));
            }
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let draft = PaymentDraft {
            email: email.get_untracked(),
            amount: amount.get_untracked(),
            screenshot: screenshot.get_untracked(),
            message: note.get_untracked(),
            transaction_id: transaction_id.get_untracked(),
        };
        let payment = match draft.submit(&SystemClock) {
            Ok(payment) => payment,
            Err(e) => {
                notify(toasts, Toast::from_error(&e));
                return;
            }
        };
        busy.set(true);
        let token = token.get_value();
        leptos::task::spawn_local(async move {
            let outcome = submission::run(&TimerSettle, PAYMENT_DELAY, &token, || load_ledger()?.append(payment)).await;
            match outcome {
                Outcome::Completed(()) => {
                    notify(
                        toasts,
                        Toast::info(
                            "Payment Submitted Successfully! 🎉",
                            "Your payment is being verified. You'll receive confirmation within 24 hours.",
                        ),
                    );
                    for field in [email, amount, note, transaction_id] {
                        let _ = field.try_set(String::new());
                    }
                    let _ = screenshot.try_set(None);
                }
                Outcome::Failed(e) => notify(toasts, Toast::from_error(&e)),
                Outcome::Cancelled => {}
            }
            let _ = busy.try_set(false);
        });
    };

    view! {
        <div class="payment-page">
            <h1>"Complete Your Payment"</h1>
            <div class="payment-page__layout">
                <form class="payment-form" on:submit=on_submit>
                    <h2>"Payment Details"</h2>
                    <label class="field">
                        <span>"Email Address *"</span>
                        <input
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span>"Amount (USD) *"</span>
                        <input
                            type="text"
                            inputmode="decimal"
                            placeholder="29"
                            prop:value=move || amount.get()
                            on:input=move |ev| amount.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span>"Transaction ID"</span>
                        <input
                            type="text"
                            placeholder="Optional"
                            prop:value=move || transaction_id.get()
                            on:input=move |ev| transaction_id.set(event_target_value(&ev))
                        />
                    </label>
                    <ImagePicker
                        label="Payment Screenshot * (max 5MB)"
                        id="screenshot-upload"
                        on_pick=Callback::new(move |uri| screenshot.set(Some(uri)))
                    />
                    {move || {
                        screenshot.get().map(|src| view! { <img class="payment-form__preview" src=src alt="Payment screenshot preview"/> })
                    }}
                    <label class="field">
                        <span>"Message"</span>
                        <textarea
                            rows="3"
                            placeholder="Anything we should know?"
                            prop:value=move || note.get()
                            on:input=move |ev| note.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                        {move || if busy.get() { "Submitting..." } else { "Submit Payment" }}
                    </button>
                </form>
                <aside class="binance-pay">
                    <h2>"Binance Pay"</h2>
                    <img class="binance-pay__qr" src={qr_code_url(BINANCE_PAY_ID, QR_SIZE)} alt="Binance Pay QR code"/>
                    <div class="binance-pay__id">
                        <span>"Binance Pay ID"</span>
                        <code>{BINANCE_PAY_ID}</code>
                        <button type="button" class="btn btn--ghost" on:click=on_copy>
                            {move || if copied.get() { "Copied" } else { "Copy" }}
                        </button>
                    </div>
                    <ol class="binance-pay__steps">
                        <li>"Open the Binance app and choose Pay."</li>
                        <li>"Scan the QR code or enter the Pay ID."</li>
                        <li>"Send the amount and take a screenshot of the receipt."</li>
                        <li>"Upload the screenshot with this form."</li>
                    </ol>
                </aside>
            </div>
        </div>
    }
}
