//! Exact decimal money amounts.
//!
//! All prices are built from integer cents so repeated recomputation never
//! accumulates rounding error. Rounding to two fractional digits happens only
//! when an amount is rendered for display.

use bigdecimal::BigDecimal;

/// Builds an exact amount from integer cents: `cents(220)` is `2.20`.
pub fn cents(amount: i64) -> BigDecimal {
    BigDecimal::from(amount) / BigDecimal::from(100)
}

/// An amount that is exactly zero.
pub fn zero() -> BigDecimal {
    BigDecimal::from(0)
}

/// Renders an amount with two fractional digits, e.g. `"3.40"`.
pub fn display(amount: &BigDecimal) -> String {
    amount.with_scale(2).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cents_are_exact() {
        assert_eq!(cents(220) + cents(50) + cents(30) + cents(40), cents(340));
    }

    #[test]
    fn negative_cents() {
        assert_eq!(cents(340) + cents(-50), cents(290));
    }

    #[test]
    fn display_pads_to_two_digits() {
        assert_eq!(display(&cents(220)), "2.20");
        assert_eq!(display(&cents(300)), "3.00");
        assert_eq!(display(&cents(-30)), "-0.30");
    }
}
