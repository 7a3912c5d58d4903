//! The order handoff contract: the payload carried between checkout stages.
//!
//! Every field is individually optional and defaults in isolation; a missing
//! milk never invalidates a present size. A stage entered with no payload at
//! all resolves to a fresh selection for the fallback Cappuccino. This is
//! the only path by which checkout sessions come into existence.

use bigdecimal::BigDecimal;

use crate::catalog::{self, options};
use crate::domain::{PaymentMethod, Product, Selection};
use crate::pricing;

/// Opaque stage-transition payload. Frozen totals ride along only at the
/// summary-to-confirmation boundary; earlier stages leave them `None` and
/// recompute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StagePayload {
    pub product: Option<Product>,
    pub size: Option<String>,
    pub milk: Option<String>,
    pub extras: Option<Vec<String>>,
    pub delivery_option: Option<String>,
    pub payment_method: Option<PaymentMethod>,
    pub subtotal: Option<BigDecimal>,
    pub shipping_cost: Option<BigDecimal>,
    pub total: Option<BigDecimal>,
}

impl StagePayload {
    /// Payload for a product freshly picked from the catalog.
    pub fn for_product(product: Product) -> Self {
        Self {
            product: Some(product),
            ..Self::default()
        }
    }

    /// Snapshot of an in-progress selection, with current totals attached.
    pub fn snapshot(selection: &Selection) -> Self {
        let quote = pricing::quote(selection);
        Self {
            product: Some(selection.product.clone()),
            size: Some(selection.size.clone()),
            milk: Some(selection.milk.clone()),
            extras: Some(selection.extras.clone()),
            delivery_option: Some(selection.delivery_option.clone()),
            payment_method: Some(selection.payment_method.clone()),
            subtotal: Some(quote.subtotal),
            shipping_cost: Some(quote.shipping_cost),
            total: Some(quote.total),
        }
    }

    /// Resolves the payload into a full selection, applying each field's
    /// fallback independently. Duplicate extras from stale payloads are
    /// dropped, keeping the first occurrence.
    pub fn resolve(self) -> Selection {
        let mut extras: Vec<String> = Vec::new();
        for extra in self.extras.unwrap_or_default() {
            if !extras.contains(&extra) {
                extras.push(extra);
            }
        }

        Selection {
            product: self.product.unwrap_or_else(catalog::fallback_product),
            size: self.size.unwrap_or_else(|| options::DEFAULT_SIZE.to_string()),
            milk: self.milk.unwrap_or_else(|| options::DEFAULT_MILK.to_string()),
            extras,
            delivery_option: self
                .delivery_option
                .unwrap_or_else(|| options::DEFAULT_DELIVERY.to_string()),
            payment_method: self.payment_method.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::cents;

    #[test]
    fn empty_payload_falls_back_to_cappuccino() {
        let selection = StagePayload::default().resolve();
        assert_eq!(selection.product.name, "Cappuccino");
        assert_eq!(selection.product.price, cents(220));
        assert_eq!(selection.size, "regular");
        assert_eq!(selection.milk, "entera");
        assert!(selection.extras.is_empty());
        assert_eq!(selection.delivery_option, "normal");
    }

    #[test]
    fn fields_default_independently() {
        // A present size must survive a missing milk, and vice versa.
        let payload = StagePayload {
            size: Some("grande".to_string()),
            ..StagePayload::default()
        };
        let selection = payload.resolve();
        assert_eq!(selection.size, "grande");
        assert_eq!(selection.milk, "entera");

        let payload = StagePayload {
            milk: Some("soya".to_string()),
            delivery_option: Some("rapida".to_string()),
            ..StagePayload::default()
        };
        let selection = payload.resolve();
        assert_eq!(selection.size, "regular");
        assert_eq!(selection.milk, "soya");
        assert_eq!(selection.delivery_option, "rapida");
    }

    #[test]
    fn stale_duplicate_extras_are_dropped() {
        let payload = StagePayload {
            extras: Some(vec![
                "crema".to_string(),
                "caramelo".to_string(),
                "crema".to_string(),
            ]),
            ..StagePayload::default()
        };
        let selection = payload.resolve();
        assert_eq!(
            selection.extras,
            vec!["crema".to_string(), "caramelo".to_string()]
        );
    }

    #[test]
    fn snapshot_round_trips_choices() {
        let mut selection = Selection::for_product(catalog::fallback_product());
        selection.size = "grande".to_string();
        selection.toggle_extra("crema");
        selection.delivery_option = "esperar".to_string();

        let payload = StagePayload::snapshot(&selection);
        assert_eq!(payload.subtotal, Some(cents(300)));
        assert_eq!(payload.shipping_cost, Some(cents(-50)));
        assert_eq!(payload.total, Some(cents(250)));
        assert_eq!(payload.resolve(), selection);
    }
}
