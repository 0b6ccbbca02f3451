//! Purchase dialog for a catalogue project.
//!
//! SYSTEM CONTEXT
//! ==============
//! Opened from a project card. Shows the Binance Pay id and QR code, then
//! simulates processing before handing the buyer to `/payment` to upload a
//! receipt. Closing the dialog cancels a pending processing timer.

use content::submission::{self, CancelToken, PURCHASE_DELAY};
use leptos::prelude::*;

use crate::catalog::BINANCE_PAY_ID;
use crate::state::purchase::{PurchaseDialog, PurchaseStep};
use crate::state::toast::{Toast, ToastQueue, notify};
use crate::util::qr::qr_code_url;
use crate::util::settle::TimerSettle;

#[component]
pub fn PurchaseModal(dialog: RwSignal<PurchaseDialog>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastQueue>>();
    let token = StoredValue::new(CancelToken::new());

    let close = move || {
        token.get_value().cancel();
        dialog.update(PurchaseDialog::close);
    };

    let on_copy = move |_| {
        leptos::task::spawn_local(async move {
            if crate::util::clipboard::write_text(BINANCE_PAY_ID).await {
                dialog.update(|d| d.copied = true);
                notify(toasts, Toast::info("Pay ID Copied! 📋", "Binance Pay ID has been copied to clipboard."));
            } else {
                notify(toasts, Toast::error("Copy Failed", "Please copy the Pay ID manually."));
            }
        });
    };

    let on_sent = move |_| {
        if !dialog.try_update(PurchaseDialog::start_processing).unwrap_or(false) {
            return;
        }
        let run_token = CancelToken::new();
        token.set_value(run_token.clone());
        leptos::task::spawn_local(async move {
            let outcome = submission::run(&TimerSettle, PURCHASE_DELAY, &run_token, || Ok(())).await;
            if outcome.is_completed() {
                dialog.update(PurchaseDialog::finish_processing);
            }
        });
    };

    let title = move || dialog.with(|d| d.item.as_ref().map(|i| i.title.clone()).unwrap_or_default());
    let price = move || dialog.with(|d| d.item.as_ref().map(|i| i.price.clone()).unwrap_or_default());
    let step = move || dialog.with(|d| d.step);

    view! {
        <Show when=move || dialog.with(PurchaseDialog::is_open)>
            <div class="dialog-backdrop" on:click=move |_| close()>
                <div class="dialog dialog--purchase" on:click=move |ev| ev.stop_propagation()>
                    <header class="dialog__header">
                        <h2>
                            {move || {
                                if step() == PurchaseStep::Redirect {
                                    "Complete Payment".to_owned()
                                } else {
                                    format!("Purchase {}", title())
                                }
                            }}
                        </h2>
                        <button class="dialog__close" aria-label="Close" on:click=move |_| close()>
                            "×"
                        </button>
                    </header>
                    {move || match step() {
                        PurchaseStep::Payment => {
                            view! {
                                <div class="purchase">
                                    <div class="purchase__price">{price()}</div>
                                    <span class="badge badge--yellow">"Binance Pay"</span>
                                    <img
                                        class="purchase__qr"
                                        src={qr_code_url(BINANCE_PAY_ID, 200)}
                                        alt={format!("Binance Pay QR Code for {}", title())}
                                    />
                                    <p class="purchase__hint">"Scan with Binance app"</p>
                                    <div class="purchase__pay-id">
                                        <span>"Binance Pay ID"</span>
                                        <code>{BINANCE_PAY_ID}</code>
                                        <button class="btn btn--ghost" on:click=on_copy>
                                            {move || if dialog.with(|d| d.copied) { "Copied" } else { "Copy" }}
                                        </button>
                                    </div>
                                    <button class="btn btn--primary" on:click=on_sent>
                                        "I've Sent the Payment"
                                    </button>
                                </div>
                            }
                                .into_any()
                        }
                        PurchaseStep::Processing => {
                            view! {
                                <div class="purchase purchase--processing">
                                    <div class="spinner" aria-hidden="true"></div>
                                    <p>"Processing your payment..."</p>
                                </div>
                            }
                                .into_any()
                        }
                        PurchaseStep::Redirect => {
                            view! {
                                <div class="purchase purchase--redirect">
                                    <p>
                                        "Upload your payment screenshot so we can verify the transfer and deliver "
                                        {title()} "."
                                    </p>
                                    <a href="/payment" class="btn btn--primary" on:click=move |_| close()>
                                        "Go to Payment Page"
                                    </a>
                                </div>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </div>
        </Show>
    }
}
