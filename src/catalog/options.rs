//! The four static option tables: sizes, milk types, extras, and delivery
//! speeds. Each table lists [`OptionModifier`]s with a signed price delta.
//!
//! Lookup-miss policy: an unknown key prices as delta 0 and renders as its
//! raw key. Selections can be seeded from stale navigation payloads, so a
//! miss must never fail the pricing computation.

use bigdecimal::BigDecimal;

use crate::domain::money::{cents, zero};
use crate::domain::OptionModifier;

pub const DEFAULT_SIZE: &str = "regular";
pub const DEFAULT_MILK: &str = "entera";
pub const DEFAULT_DELIVERY: &str = "normal";

pub fn sizes() -> Vec<OptionModifier> {
    vec![
        OptionModifier::new("pequeño", "Pequeño", cents(-30)),
        OptionModifier::new("regular", "Regular", cents(0)),
        OptionModifier::new("grande", "Grande", cents(50)),
    ]
}

pub fn milks() -> Vec<OptionModifier> {
    vec![
        OptionModifier::new("entera", "Leche entera", cents(0)),
        OptionModifier::new("descremada", "Leche descremada", cents(0)),
        OptionModifier::new("almendra", "Leche de almendra", cents(0)),
        OptionModifier::new("soya", "Leche de soya", cents(0)),
    ]
}

pub fn extras() -> Vec<OptionModifier> {
    vec![
        OptionModifier::new("extra-shot", "Shot extra de café", cents(50)),
        OptionModifier::new("crema", "Crema batida", cents(30)),
        OptionModifier::new("caramelo", "Jarabe de caramelo", cents(40)),
    ]
}

pub fn delivery_options() -> Vec<OptionModifier> {
    vec![
        OptionModifier::new("rapida", "Rápida", cents(200)),
        OptionModifier::new("normal", "Normal", cents(0)),
        OptionModifier::new("esperar", "Puedo esperar", cents(-50)),
    ]
}

pub fn find<'a>(table: &'a [OptionModifier], key: &str) -> Option<&'a OptionModifier> {
    table.iter().find(|m| m.key == key)
}

/// Price delta for `key`, or 0 when the key is unknown.
pub fn delta_or_zero(table: &[OptionModifier], key: &str) -> BigDecimal {
    find(table, key).map(|m| m.delta.clone()).unwrap_or_else(zero)
}

/// Display label for `key`; an unknown key is echoed back as-is.
pub fn label_or_key(table: &[OptionModifier], key: &str) -> String {
    find(table, key)
        .map(|m| m.label.to_string())
        .unwrap_or_else(|| key.to_string())
}
