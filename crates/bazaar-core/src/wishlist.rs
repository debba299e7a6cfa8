//! # Wishlist
//!
//! Idempotent membership management for saved products.
//!
//! The wishlist is a set keyed by product id: adding a product twice leaves
//! one entry, removing an absent product is a no-op. Toggling is a
//! caller-side composition of a membership check followed by add or remove -
//! it is deliberately not a primitive here, so the collection stays
//! order-preserving and dumb.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Product;

/// Saved products, unique by product id.
///
/// Backed by a Vec rather than a set type so snapshots serialize in a
/// stable, insertion-ordered shape; uniqueness is enforced by [`Wishlist::add`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Wishlist {
    products: Vec<Product>,
}

impl Wishlist {
    /// Creates an empty wishlist.
    pub fn new() -> Self {
        Wishlist::default()
    }

    /// Checks membership by product id.
    pub fn contains(&self, product_id: &str) -> bool {
        self.products.iter().any(|p| p.id == product_id)
    }

    /// Adds a product; a no-op when it is already saved.
    ///
    /// Returns `true` when the product was inserted.
    pub fn add(&mut self, product: &Product) -> bool {
        if self.contains(&product.id) {
            return false;
        }

        self.products.push(product.clone());
        true
    }

    /// Removes a product by id; a no-op when it is not saved.
    ///
    /// Returns `true` when something was removed.
    pub fn remove(&mut self, product_id: &str) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != product_id);
        self.products.len() != before
    }

    /// The saved products, oldest first.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of saved products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if nothing is saved.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn test_product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            description: String::new(),
            price_cents: 1000,
            original_price_cents: None,
            images: vec![],
            category: "Electronics".to_string(),
            brand: "AudioTech".to_string(),
            rating: 4.0,
            review_count: 1,
            in_stock: true,
            stock_quantity: 5,
            tags: vec![],
            features: vec![],
            specifications: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_double_add_keeps_one_entry() {
        let mut wishlist = Wishlist::new();
        let product = test_product("1");

        assert!(wishlist.add(&product));
        assert!(!wishlist.add(&product));

        assert_eq!(wishlist.len(), 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut wishlist = Wishlist::new();
        wishlist.add(&test_product("1"));

        assert!(!wishlist.remove("2"));
        assert_eq!(wishlist.len(), 1);

        assert!(wishlist.remove("1"));
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_contains() {
        let mut wishlist = Wishlist::new();
        wishlist.add(&test_product("1"));

        assert!(wishlist.contains("1"));
        assert!(!wishlist.contains("2"));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut wishlist = Wishlist::new();
        wishlist.add(&test_product("b"));
        wishlist.add(&test_product("a"));
        wishlist.add(&test_product("c"));

        let ids: Vec<&str> = wishlist.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }
}
