use bigdecimal::BigDecimal;

/// A named price adjustment applied atop a base product price.
///
/// Modifiers come from one of four static tables (sizes, milks, extras,
/// delivery options). The delta may be negative, representing a discount.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionModifier {
    pub key: &'static str,
    pub label: &'static str,
    pub delta: BigDecimal,
}

impl OptionModifier {
    pub fn new(key: &'static str, label: &'static str, delta: BigDecimal) -> Self {
        Self { key, label, delta }
    }
}
