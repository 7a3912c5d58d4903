use crate::domain::{PaymentMethod, PricedOrder};

use super::views::{ConfirmationView, OrderView};

/// The discrete user intents a checkout session responds to.
///
/// Every mutating intent answers with a freshly recomputed [`OrderView`];
/// totals are never patched incrementally.
#[derive(Debug, Clone)]
pub enum SessionAction {
    SetSize(String),
    SetMilk(String),
    ToggleExtra(String),
    SetDeliveryOption(String),
    SetPaymentMethod(PaymentMethod),
    /// Read the current stage's view model without mutating anything.
    View,
    /// Advance past the summary stage, freezing the priced snapshot.
    Checkout,
    /// Enter the terminal confirmed stage.
    Confirm,
}

/// Results from session actions - variants match the action that produced them.
#[derive(Debug, Clone)]
pub enum SessionActionResult {
    View(OrderView),
    Checkout(PricedOrder),
    Confirm(ConfirmationView),
}
