//! The static product catalog: a constant lookup table with no mutation
//! operations. Every call sees the same nine entries.

pub mod options;

use crate::domain::money::cents;
use crate::domain::{Category, Product};

/// Maximum number of products a category listing shows.
pub const PAGE_SIZE: usize = 4;

/// All purchasable products, in display order.
pub fn all() -> Vec<Product> {
    vec![
        Product::new(1, "Cappuccino", cents(220), Category::Bebida, true),
        Product::new(2, "Latte", cents(250), Category::Bebida, true),
        Product::new(3, "Americano", cents(180), Category::Bebida, true),
        Product::new(4, "Espresso", cents(150), Category::Bebida, false),
        Product::new(5, "Mocha", cents(300), Category::Bebida, false),
        Product::new(6, "Croissant", cents(300), Category::Postre, true),
        Product::new(7, "Muffin", cents(250), Category::Postre, false),
        Product::new(8, "Brownie", cents(320), Category::Postre, false),
        Product::new(9, "Cheesecake", cents(400), Category::Postre, false),
    ]
}

pub fn find_by_id(id: u32) -> Option<Product> {
    all().into_iter().find(|p| p.id == id)
}

/// Products in the given category, capped at [`PAGE_SIZE`].
pub fn by_category(category: Category) -> Vec<Product> {
    all()
        .into_iter()
        .filter(|p| p.category == category)
        .take(PAGE_SIZE)
        .collect()
}

/// Recommended products, capped at [`PAGE_SIZE`].
pub fn recommended() -> Vec<Product> {
    all()
        .into_iter()
        .filter(|p| p.recommended)
        .take(PAGE_SIZE)
        .collect()
}

/// Case-insensitive substring search over product names, unbounded.
///
/// Callers must treat an empty query as "no search active" and not call
/// this at all; an empty needle would match every product.
pub fn search(query: &str) -> Vec<Product> {
    let needle = query.to_lowercase();
    all()
        .into_iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .collect()
}

/// The hardcoded product a stage falls back to when it is entered without a
/// prior selection: Cappuccino at 2.20.
pub fn fallback_product() -> Product {
    Product::new(1, "Cappuccino", cents(220), Category::Bebida, true)
}
