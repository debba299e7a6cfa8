//! # Recently-Viewed Ring
//!
//! A bounded, most-recent-first list of viewed products.
//!
//! Recording a view removes any existing entry for the same product,
//! prepends the product, and truncates to the ten most recent entries. The
//! two invariants fall out directly: no duplicates, and a hard upper bound
//! on size.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Product;

/// How many viewed products are remembered.
pub const RECENTLY_VIEWED_CAPACITY: usize = 10;

/// The viewing history, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RecentlyViewed {
    products: Vec<Product>,
}

impl RecentlyViewed {
    /// Creates an empty history.
    pub fn new() -> Self {
        RecentlyViewed::default()
    }

    /// Records a product view.
    ///
    /// Re-viewing a product moves it to the front rather than duplicating
    /// it; the oldest entry falls off once the capacity is reached.
    pub fn record(&mut self, product: &Product) {
        self.products.retain(|p| p.id != product.id);
        self.products.insert(0, product.clone());
        self.products.truncate(RECENTLY_VIEWED_CAPACITY);
    }

    /// The history, most recent first.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The most recently viewed product, if any.
    pub fn most_recent(&self) -> Option<&Product> {
        self.products.first()
    }

    /// Number of remembered products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the history is empty.
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
            category: "Books".to_string(),
            brand: "TechBooks".to_string(),
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
    fn test_most_recent_first() {
        let mut viewed = RecentlyViewed::new();
        viewed.record(&test_product("1"));
        viewed.record(&test_product("2"));
        viewed.record(&test_product("3"));

        let ids: Vec<&str> = viewed.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["3", "2", "1"]);
        assert_eq!(viewed.most_recent().unwrap().id, "3");
    }

    #[test]
    fn test_reviewing_moves_to_front_without_duplicating() {
        let mut viewed = RecentlyViewed::new();
        viewed.record(&test_product("1"));
        viewed.record(&test_product("2"));
        viewed.record(&test_product("1"));

        let ids: Vec<&str> = viewed.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[test]
    fn test_capacity_bound_with_mid_sequence_reviews() {
        let mut viewed = RecentlyViewed::new();

        // View 11 distinct products, re-viewing an early one mid-sequence
        for i in 1..=6 {
            viewed.record(&test_product(&i.to_string()));
        }
        viewed.record(&test_product("2"));
        for i in 7..=11 {
            viewed.record(&test_product(&i.to_string()));
        }

        assert_eq!(viewed.len(), RECENTLY_VIEWED_CAPACITY);

        let ids: Vec<&str> = viewed.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["11", "10", "9", "8", "7", "2", "6", "5", "4", "3"]);

        // No duplicates survived
        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), ids.len());
    }
}
