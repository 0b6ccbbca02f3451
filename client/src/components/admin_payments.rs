//! Payments tab: receipts awaiting review and the payment setup dialog.

use content::payments::{Payment, PaymentStatus};
use leptos::prelude::*;

use crate::catalog::BINANCE_PAY_ID;
use crate::state::admin::{AdminAction, AdminState, apply};
use crate::state::toast::ToastQueue;
use crate::state::ui::AdminUi;
use crate::util::qr::qr_code_url;

#[cfg(test)]
#[path = "admin_payments_test.rs"]
mod admin_payments_test;

/// Screenshot thumbnail that opens the full image in a new tab.
#[component]
pub(crate) fn ReceiptLink(src: String) -> impl IntoView {
    let href = src.clone();
    view! {
        <a href=href target="_blank" rel="noopener" class="payment-row__receipt">
            <img src=src alt="Payment screenshot"/>
        </a>
    }
}

#[component]
fn PaymentRow(payment: Payment) -> impl IntoView {
    let admin = expect_context::<RwSignal<AdminState>>();
    let toasts = expect_context::<RwSignal<ToastQueue>>();
    let id = payment.id;
    let status = payment.status;
    let set_status = move |to: PaymentStatus| move |_| apply(admin, toasts, AdminAction::SetPaymentStatus(id, to));

    view! {
        <article class="payment-row">
            <header class="payment-row__header">
                <strong>{payment.email}</strong>
                <span class="payment-row__amount">{format!("${}", payment.amount)}</span>
                <span class={format!("badge badge--{}", status.as_str())}>{status.as_str()}</span>
            </header>
            <dl class="payment-row__meta">
                <dt>"Method"</dt>
                <dd>{payment.method}</dd>
                <dt>"Submitted"</dt>
                <dd>{payment.timestamp.format("%Y-%m-%d %H:%M").to_string()}</dd>
                {payment.transaction_id.map(|tx| view! { <dt>"Transaction"</dt> <dd><code>{tx}</code></dd> })}
            </dl>
            {payment.message.map(|note| view! { <p class="payment-row__note">{note}</p> })}
            {payment.screenshot.map(|src| view! { <ReceiptLink src=src/> })}
            <Show when=move || !status.is_terminal()>
                <div class="payment-row__actions">
                    <button class="btn btn--primary" on:click={set_status(PaymentStatus::Completed)}>
                        "Mark Completed"
                    </button>
                    <button class="btn btn--danger" on:click={set_status(PaymentStatus::Rejected)}>
                        "Reject"
                    </button>
                </div>
            </Show>
        </article>
    }
}

#[component]
pub fn PaymentsPanel() -> impl IntoView {
    let admin = expect_context::<RwSignal<AdminState>>();
    let ui = expect_context::<RwSignal<AdminUi>>();

    let payments = move || admin.with(|state| ui.with(|ui| state.visible_payments(ui)));

    view! {
        <section class="admin-panel">
            <header class="admin-panel__header">
                <h2>"Payments"</h2>
                <span class="badge">{move || format!("{} pending", admin.with(|s| s.ledger.pending_count()))}</span>
                <button class="btn btn--ghost" on:click=move |_| ui.update(|u| u.show_payment_setup = true)>
                    "Payment Setup"
                </button>
            </header>
            {move || {
                let list = payments();
                if list.is_empty() {
                    return view! { <p class="admin-panel__empty">"No payments found."</p> }.into_any();
                }
                list.into_iter().map(|payment| view! { <PaymentRow payment=payment/> }).collect_view().into_any()
            }}
            <Show when=move || ui.with(|u| u.show_payment_setup)>
                <div class="dialog-backdrop" on:click=move |_| ui.update(|u| u.show_payment_setup = false)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Payment Setup"</h2>
                        <p>"Buyers pay through Binance Pay using this id."</p>
                        <img class="purchase__qr" src={qr_code_url(BINANCE_PAY_ID, 200)} alt="Binance Pay QR code"/>
                        <code class="purchase__pay-id">{BINANCE_PAY_ID}</code>
                        <div class="dialog__actions">
                            <button class="btn btn--ghost" on:click=move |_| ui.update(|u| u.show_payment_setup = false)>
                                "Close"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </section>
    }
}
