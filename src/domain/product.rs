use bigdecimal::BigDecimal;

/// Category tag for a catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Bebida,
    Postre,
}

impl Category {
    pub fn tag(&self) -> &'static str {
        match self {
            Category::Bebida => "bebida",
            Category::Postre => "postre",
        }
    }
}

/// A purchasable product from the static catalog.
///
/// Products are never created or destroyed at runtime; every instance is a
/// copy of a catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: BigDecimal,
    pub category: Category,
    pub recommended: bool,
}

impl Product {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        price: BigDecimal,
        category: Category,
        recommended: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            category,
            recommended,
        }
    }
}
