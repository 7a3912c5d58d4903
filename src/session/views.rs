//! Read-only view models handed to the presentation layer, one per stage.

use bigdecimal::BigDecimal;

use crate::catalog::options;
use crate::domain::{money, PricedOrder, Selection};
use crate::pricing;

/// View model for the customization and summary stages.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderView {
    pub product_name: String,
    pub base_price: BigDecimal,
    pub size: String,
    pub milk: String,
    pub extras: Vec<String>,
    pub subtotal: BigDecimal,
    pub shipping_cost: BigDecimal,
    pub total: BigDecimal,
}

impl OrderView {
    /// Builds the view with totals recomputed from the selection.
    pub fn from_selection(selection: &Selection) -> Self {
        let quote = pricing::quote(selection);
        Self::build(selection, quote.subtotal, quote.shipping_cost, quote.total)
    }

    /// Builds the view from a frozen order, reusing its snapshot totals.
    pub fn from_order(order: &PricedOrder) -> Self {
        Self::build(
            &order.selection,
            order.subtotal.clone(),
            order.shipping_cost.clone(),
            order.total.clone(),
        )
    }

    fn build(
        selection: &Selection,
        subtotal: BigDecimal,
        shipping_cost: BigDecimal,
        total: BigDecimal,
    ) -> Self {
        let extras_table = options::extras();
        Self {
            product_name: selection.product.name.clone(),
            base_price: selection.product.price.clone(),
            size: options::label_or_key(&options::sizes(), &selection.size),
            milk: options::label_or_key(&options::milks(), &selection.milk),
            extras: selection
                .extras
                .iter()
                .map(|e| options::label_or_key(&extras_table, e))
                .collect(),
            subtotal,
            shipping_cost,
            total,
        }
    }

    pub fn total_display(&self) -> String {
        money::display(&self.total)
    }
}

/// View model for the post-purchase confirmation stage.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmationView {
    pub order_number: String,
    pub product_name: String,
    pub payment_summary: String,
    pub total_paid: BigDecimal,
}

impl ConfirmationView {
    pub fn from_order(order: &PricedOrder) -> Self {
        let payment = &order.selection.payment_method;
        Self {
            order_number: order.order_number.clone(),
            product_name: order.selection.product.name.clone(),
            payment_summary: format!("{} {}", payment.label, payment.detail),
            total_paid: order.total.clone(),
        }
    }

    pub fn total_paid_display(&self) -> String {
        money::display(&self.total_paid)
    }
}
