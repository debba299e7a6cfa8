//! # Demo Fixtures
//!
//! The storefront's entire "database": six products across five categories
//! and one demo account. The catalog is read-only by construction - every
//! caller gets an owned [`Catalog`] and the core never mutates products.
//!
//! Prices are stored in cents (the `$199.99` headphones are `19999`), and
//! timestamps are fixed so sort-by-newest is deterministic.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use bazaar_core::types::{
    Address, AddressKind, Product, ProductCategory, User, UserPreferences,
};
use bazaar_core::Catalog;

/// Email of the demo account the mock login accepts.
pub const DEMO_EMAIL: &str = "john.doe@example.com";

/// Password of the demo account the mock login accepts.
pub const DEMO_PASSWORD: &str = "password";

/// Parses a fixture timestamp. Inputs are compile-time constants.
fn ts(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .expect("fixture timestamps are valid RFC 3339")
        .with_timezone(&Utc)
}

fn specs(pairs: &[(&str, &str)]) -> Option<BTreeMap<String, String>> {
    Some(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

// =============================================================================
// Catalog
// =============================================================================

/// Builds the demo catalog: six products, five categories.
pub fn demo_catalog() -> Catalog {
    Catalog::new(demo_products(), demo_categories())
}

/// The five browsable categories.
pub fn demo_categories() -> Vec<ProductCategory> {
    vec![
        ProductCategory {
            id: "1".to_string(),
            name: "Electronics".to_string(),
            slug: "electronics".to_string(),
            description: Some("Latest gadgets and electronic devices".to_string()),
            image: Some("https://images.unsplash.com/photo-1498049794561-7780e7231661?w=400&h=300&fit=crop&crop=center".to_string()),
        },
        ProductCategory {
            id: "2".to_string(),
            name: "Clothing".to_string(),
            slug: "clothing".to_string(),
            description: Some("Fashion and apparel for all occasions".to_string()),
            image: Some("https://images.unsplash.com/photo-1441986300917-64674bd600d8?w=400&h=300&fit=crop&crop=center".to_string()),
        },
        ProductCategory {
            id: "3".to_string(),
            name: "Home & Garden".to_string(),
            slug: "home-garden".to_string(),
            description: Some("Everything for your home and garden".to_string()),
            image: Some("https://images.unsplash.com/photo-1586023492125-27b2c045efd7?w=400&h=300&fit=crop&crop=center".to_string()),
        },
        ProductCategory {
            id: "4".to_string(),
            name: "Sports & Outdoors".to_string(),
            slug: "sports-outdoors".to_string(),
            description: Some("Gear for active lifestyle".to_string()),
            image: Some("https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=400&h=300&fit=crop&crop=center".to_string()),
        },
        ProductCategory {
            id: "5".to_string(),
            name: "Books".to_string(),
            slug: "books".to_string(),
            description: Some("Books for every reader".to_string()),
            image: Some("https://images.unsplash.com/photo-1481627834876-b7833e8f5570?w=400&h=300&fit=crop&crop=center".to_string()),
        },
    ]
}

/// The six demo products.
pub fn demo_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: "Wireless Bluetooth Headphones".to_string(),
            description: "Premium quality wireless headphones with noise cancellation and 30-hour battery life.".to_string(),
            price_cents: 19999,
            original_price_cents: Some(24999),
            images: strings(&[
                "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=500&h=500&fit=crop&crop=center",
                "https://images.unsplash.com/photo-1484704849700-f032a568e944?w=500&h=500&fit=crop&crop=center",
                "https://images.unsplash.com/photo-1583394838336-acd977736f90?w=500&h=500&fit=crop&crop=center",
            ]),
            category: "Electronics".to_string(),
            brand: "AudioTech".to_string(),
            rating: 4.5,
            review_count: 128,
            in_stock: true,
            stock_quantity: 45,
            tags: strings(&["wireless", "bluetooth", "noise-cancelling"]),
            features: strings(&[
                "Active Noise Cancellation",
                "30-hour battery life",
                "Quick charge (5 min = 3 hours)",
                "Premium comfort design",
            ]),
            specifications: specs(&[
                ("Battery Life", "30 hours"),
                ("Charging Time", "2 hours"),
                ("Weight", "250g"),
                ("Connectivity", "Bluetooth 5.0"),
            ]),
            created_at: ts("2024-01-15T10:00:00Z"),
            updated_at: ts("2024-01-15T10:00:00Z"),
        },
        Product {
            id: "2".to_string(),
            name: "Smart Fitness Watch".to_string(),
            description: "Advanced fitness tracking with heart rate monitoring, GPS, and smartphone integration.".to_string(),
            price_cents: 29999,
            original_price_cents: None,
            images: strings(&[
                "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=500&h=500&fit=crop&crop=center",
                "https://images.unsplash.com/photo-1434493789847-2f02dc6ca35d?w=500&h=500&fit=crop&crop=center",
            ]),
            category: "Electronics".to_string(),
            brand: "FitTech".to_string(),
            rating: 4.3,
            review_count: 89,
            in_stock: true,
            stock_quantity: 23,
            tags: strings(&["fitness", "smartwatch", "gps"]),
            features: strings(&[
                "Heart rate monitoring",
                "Built-in GPS",
                "Water resistant",
                "7-day battery life",
            ]),
            specifications: specs(&[
                ("Display", "1.4\" AMOLED"),
                ("Battery Life", "7 days"),
                ("Water Resistance", "5ATM"),
                ("Sensors", "Heart rate, GPS, Accelerometer"),
            ]),
            created_at: ts("2024-01-10T10:00:00Z"),
            updated_at: ts("2024-01-10T10:00:00Z"),
        },
        Product {
            id: "3".to_string(),
            name: "Organic Cotton T-Shirt".to_string(),
            description: "Comfortable and sustainable organic cotton t-shirt in various colors.".to_string(),
            price_cents: 2999,
            original_price_cents: None,
            images: strings(&[
                "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=500&h=500&fit=crop&crop=center",
                "https://images.unsplash.com/photo-1503341504253-dff4815485f1?w=500&h=500&fit=crop&crop=center",
            ]),
            category: "Clothing".to_string(),
            brand: "EcoWear".to_string(),
            rating: 4.7,
            review_count: 156,
            in_stock: true,
            stock_quantity: 78,
            tags: strings(&["organic", "cotton", "sustainable"]),
            features: strings(&[
                "100% Organic Cotton",
                "Pre-shrunk",
                "Machine washable",
                "Available in 8 colors",
            ]),
            specifications: specs(&[
                ("Material", "100% Organic Cotton"),
                ("Fit", "Regular"),
                ("Care", "Machine wash cold"),
                ("Origin", "Made in USA"),
            ]),
            created_at: ts("2024-01-05T10:00:00Z"),
            updated_at: ts("2024-01-05T10:00:00Z"),
        },
        Product {
            id: "4".to_string(),
            name: "Professional Coffee Maker".to_string(),
            description: "Programmable coffee maker with built-in grinder and thermal carafe.".to_string(),
            price_cents: 14999,
            original_price_cents: Some(17999),
            images: strings(&[
                "https://images.unsplash.com/photo-1495474472287-4d71bcdd2085?w=500&h=500&fit=crop&crop=center",
                "https://images.unsplash.com/photo-1559056199-641a0ac8b55e?w=500&h=500&fit=crop&crop=center",
            ]),
            category: "Home & Garden".to_string(),
            brand: "BrewMaster".to_string(),
            rating: 4.4,
            review_count: 67,
            in_stock: true,
            stock_quantity: 12,
            tags: strings(&["coffee", "kitchen", "programmable"]),
            features: strings(&[
                "Built-in grinder",
                "Programmable timer",
                "Thermal carafe",
                "12-cup capacity",
            ]),
            specifications: specs(&[
                ("Capacity", "12 cups"),
                ("Grinder", "Burr grinder"),
                ("Carafe", "Thermal stainless steel"),
                ("Dimensions", "14\" x 10\" x 16\""),
            ]),
            created_at: ts("2024-01-01T10:00:00Z"),
            updated_at: ts("2024-01-01T10:00:00Z"),
        },
        Product {
            id: "5".to_string(),
            name: "Yoga Mat Premium".to_string(),
            description: "Non-slip yoga mat with excellent grip and cushioning for all yoga practices.".to_string(),
            price_cents: 4999,
            original_price_cents: None,
            images: strings(&[
                "https://images.unsplash.com/photo-1544367567-0f2fcb009e0b?w=500&h=500&fit=crop&crop=center",
                "https://images.unsplash.com/photo-1506629905607-c60f6c3e7db1?w=500&h=500&fit=crop&crop=center",
            ]),
            category: "Sports & Outdoors".to_string(),
            brand: "ZenFit".to_string(),
            rating: 4.6,
            review_count: 203,
            in_stock: true,
            stock_quantity: 34,
            tags: strings(&["yoga", "fitness", "non-slip"]),
            features: strings(&[
                "Non-slip surface",
                "Extra thick cushioning",
                "Eco-friendly materials",
                "Carrying strap included",
            ]),
            specifications: specs(&[
                ("Thickness", "6mm"),
                ("Material", "TPE (Eco-friendly)"),
                ("Size", "72\" x 24\""),
                ("Weight", "2.5 lbs"),
            ]),
            created_at: ts("2023-12-28T10:00:00Z"),
            updated_at: ts("2023-12-28T10:00:00Z"),
        },
        Product {
            id: "6".to_string(),
            name: "JavaScript: The Complete Guide".to_string(),
            description: "Comprehensive guide to modern JavaScript programming with practical examples.".to_string(),
            price_cents: 3999,
            original_price_cents: None,
            images: strings(&[
                "https://images.unsplash.com/photo-1544716278-ca5e3f4abd8c?w=500&h=500&fit=crop&crop=center",
            ]),
            category: "Books".to_string(),
            brand: "TechBooks".to_string(),
            rating: 4.8,
            review_count: 94,
            in_stock: true,
            stock_quantity: 67,
            tags: strings(&["programming", "javascript", "education"]),
            features: strings(&[
                "800+ pages",
                "Practical examples",
                "Modern ES6+ syntax",
                "Online resources included",
            ]),
            specifications: specs(&[
                ("Pages", "856"),
                ("Publisher", "TechBooks Publishing"),
                ("Language", "English"),
                ("Format", "Paperback"),
            ]),
            created_at: ts("2023-12-20T10:00:00Z"),
            updated_at: ts("2023-12-20T10:00:00Z"),
        },
    ]
}

// =============================================================================
// Demo Account
// =============================================================================

/// The demo account the mock login accepts.
pub fn demo_user() -> User {
    User {
        id: "1".to_string(),
        email: DEMO_EMAIL.to_string(),
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        avatar: Some("https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop&crop=face".to_string()),
        phone: Some("+1 (555) 123-4567".to_string()),
        addresses: vec![
            Address {
                id: "1".to_string(),
                kind: AddressKind::Shipping,
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                company: None,
                street: "123 Main St".to_string(),
                city: "New York".to_string(),
                state: "NY".to_string(),
                zip_code: "10001".to_string(),
                country: "United States".to_string(),
                is_default: true,
            },
            Address {
                id: "2".to_string(),
                kind: AddressKind::Billing,
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                company: None,
                street: "123 Main St".to_string(),
                city: "New York".to_string(),
                state: "NY".to_string(),
                zip_code: "10001".to_string(),
                country: "United States".to_string(),
                is_default: true,
            },
        ],
        preferences: UserPreferences {
            newsletter: true,
            notifications: true,
            currency: "USD".to_string(),
            language: "en".to_string(),
        },
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
