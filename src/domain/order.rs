use bigdecimal::BigDecimal;

use crate::domain::Selection;

/// An immutable snapshot of a selection plus its computed totals, frozen at
/// the moment the customer confirms the purchase.
///
/// Downstream stages treat this as historical record; nothing mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedOrder {
    pub order_number: String,
    pub selection: Selection,
    pub subtotal: BigDecimal,
    pub shipping_cost: BigDecimal,
    pub total: BigDecimal,
}
