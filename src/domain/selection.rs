use crate::catalog::options;
use crate::domain::Product;

/// How the customer pays for the order.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentMethod {
    pub label: String,
    pub detail: String,
}

impl PaymentMethod {
    pub fn new(label: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            detail: detail.into(),
        }
    }
}

impl Default for PaymentMethod {
    fn default() -> Self {
        Self::new("Tarjeta de crédito", "•••• 4767")
    }
}

/// The mutable record of one in-progress order.
///
/// Holds only the customer's choices. Derived totals are always recomputed
/// by the pricing module, never cached here.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub product: Product,
    /// Size key, always exactly one (default "regular").
    pub size: String,
    /// Milk key, always exactly one (default "entera").
    pub milk: String,
    /// Extra keys, duplicate-free; order only matters for display.
    pub extras: Vec<String>,
    /// Delivery key, always exactly one (default "normal").
    pub delivery_option: String,
    pub payment_method: PaymentMethod,
}

impl Selection {
    /// Seeds a selection for a freshly chosen product with all defaults.
    pub fn for_product(product: Product) -> Self {
        Self {
            product,
            size: options::DEFAULT_SIZE.to_string(),
            milk: options::DEFAULT_MILK.to_string(),
            extras: Vec::new(),
            delivery_option: options::DEFAULT_DELIVERY.to_string(),
            payment_method: PaymentMethod::default(),
        }
    }

    /// Symmetric membership toggle: a present key is removed, an absent key
    /// is appended.
    pub fn toggle_extra(&mut self, key: &str) {
        if let Some(position) = self.extras.iter().position(|e| e == key) {
            self.extras.remove(position);
        } else {
            self.extras.push(key.to_string());
        }
    }
}
