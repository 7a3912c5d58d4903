//! The single pricing engine consumed by every checkout stage.
//!
//! Totals are a pure function of the current [`Selection`]: every change
//! recomputes from scratch rather than patching a running total, so repeated
//! edits cannot drift. The delivery modifier alone determines the shipping
//! cost; there is no separate flat shipping charge.

use bigdecimal::BigDecimal;

use crate::catalog::options;
use crate::domain::Selection;

/// Derived totals for one selection, bundled for handoff to the next stage.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    pub subtotal: BigDecimal,
    pub shipping_cost: BigDecimal,
    pub total: BigDecimal,
}

/// Base product price plus the size delta plus the sum of all extra deltas.
///
/// An empty extras set contributes 0. Unknown keys also contribute 0.
pub fn subtotal(selection: &Selection) -> BigDecimal {
    let sizes = options::sizes();
    let extras = options::extras();

    let mut amount = selection.product.price.clone();
    amount = amount + options::delta_or_zero(&sizes, &selection.size);
    for extra in &selection.extras {
        amount = amount + options::delta_or_zero(&extras, extra);
    }
    amount
}

/// The delivery-speed delta; may be negative for the slow option.
pub fn shipping_cost(selection: &Selection) -> BigDecimal {
    options::delta_or_zero(&options::delivery_options(), &selection.delivery_option)
}

pub fn total(selection: &Selection) -> BigDecimal {
    subtotal(selection) + shipping_cost(selection)
}

pub fn quote(selection: &Selection) -> PriceQuote {
    PriceQuote {
        subtotal: subtotal(selection),
        shipping_cost: shipping_cost(selection),
        total: total(selection),
    }
}
