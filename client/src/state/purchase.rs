//! Purchase dialog opened from a project card.
//!
//! The dialog walks `Payment -> Processing -> Redirect`. Closing it at any
//! step resets it to `Payment`, and a processing timer that fires after the
//! close is ignored.

#[cfg(test)]
#[path = "purchase_test.rs"]
mod purchase_test;

use content::Result;
use content::payments::parse_amount;
use rust_decimal::Decimal;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PurchaseStep {
    #[default]
    Payment,
    Processing,
    Redirect,
}

/// Project being bought, as shown on its card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PurchaseItem {
    pub title: String,
    /// Display label such as `$29`.
    pub price: String,
}

impl PurchaseItem {
    /// Price in USD.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the label is not a positive amount.
    pub fn amount(&self) -> Result<Decimal> {
        parse_price(&self.price)
    }
}

/// Parse a card price label such as `$29`.
///
/// # Errors
///
/// Returns a validation error when the label is not a positive amount.
pub fn parse_price(label: &str) -> Result<Decimal> {
    parse_amount(label)
}

/// Dialog state. `item == None` means closed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PurchaseDialog {
    pub item: Option<PurchaseItem>,
    pub step: PurchaseStep,
    /// Pay id was copied; cleared on close.
    pub copied: bool,
}

impl PurchaseDialog {
    pub fn is_open(&self) -> bool {
        self.item.is_some()
    }

    pub fn open(&mut self, item: PurchaseItem) {
        *self = Self { item: Some(item), ..Self::default() };
    }

    /// "I've sent the payment": move to `Processing`. Returns `false` when
    /// the dialog is closed or already past the first step.
    pub fn start_processing(&mut self) -> bool {
        if !self.is_open() || self.step != PurchaseStep::Payment {
            return false;
        }
        self.step = PurchaseStep::Processing;
        true
    }

    /// Processing delay elapsed. Ignored unless still processing.
    pub fn finish_processing(&mut self) {
        if self.is_open() && self.step == PurchaseStep::Processing {
            self.step = PurchaseStep::Redirect;
        }
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }
}
