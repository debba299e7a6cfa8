//! # Domain Types
//!
//! Core domain types used throughout the Bazaar storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │     Order       │   │      User       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  price_cents    │   │  order_number   │   │  email          │       │
//! │  │  rating, tags   │   │  status, items  │   │  addresses      │       │
//! │  │  stock_quantity │   │  totals (cents) │   │  preferences    │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    TaxRate      │   │  OrderStatus    │   │  PaymentKind    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  bps (u32)      │   │  Pending        │   │  CreditCard     │       │
//! │  │  800 = 8%       │   │  Confirmed ...  │   │  Paypal ...     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All types serialize with camelCase field names: the snapshots cross into
//! a TypeScript frontend unchanged, and ts-rs exports the matching `.ts`
//! declarations.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 1 basis point = 0.01% = 1/10000, so 800 bps = 8%, the storefront's flat
/// sales tax rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the storefront catalog.
///
/// Catalog products are immutable snapshots supplied by the backend; the
/// core never mutates them. Invariant: `price_cents >= 0`. When
/// `original_price_cents` is present it is expected to be at least
/// `price_cents` (a markdown), but this is not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Longer marketing description.
    pub description: String,

    /// Current price in cents.
    pub price_cents: i64,

    /// Pre-markdown price in cents, when the product is on sale.
    pub original_price_cents: Option<i64>,

    /// Image URLs, in display order.
    pub images: Vec<String>,

    /// Category name (matches a `ProductCategory::name`).
    pub category: String,

    /// Brand name.
    pub brand: String,

    /// Average review rating, 0.0 to 5.0. Not money, so a float is fine.
    pub rating: f64,

    /// Number of reviews behind the rating.
    pub review_count: i64,

    /// Whether the product is currently purchasable.
    pub in_stock: bool,

    /// Units on hand. Non-negative.
    pub stock_quantity: i64,

    /// Free-form search tags.
    pub tags: Vec<String>,

    /// Marketing feature bullets, in display order.
    pub features: Vec<String>,

    /// Specification name → value. Ordered so exports are deterministic.
    pub specifications: Option<BTreeMap<String, String>>,

    /// When the product was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the product was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the pre-markdown price, when present.
    #[inline]
    pub fn original_price(&self) -> Option<Money> {
        self.original_price_cents.map(Money::from_cents)
    }

    /// Checks whether the product is marked down from a higher price.
    pub fn is_on_sale(&self) -> bool {
        self.original_price_cents
            .is_some_and(|original| original > self.price_cents)
    }

    /// Checks whether the requested quantity can be supplied from stock.
    ///
    /// Used by the session layer to clamp cart quantities before they reach
    /// the ledger; the ledger itself never consults stock.
    pub fn can_supply(&self, quantity: i64) -> bool {
        self.in_stock && self.stock_quantity >= quantity
    }
}

// =============================================================================
// Product Category
// =============================================================================

/// A browsable category of the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductCategory {
    pub id: String,

    /// Display name, matched (exactly) by facet counting.
    pub name: String,

    /// URL-safe identifier used by category routes.
    pub slug: String,

    pub description: Option<String>,

    /// Hero image URL.
    pub image: Option<String>,
}

// =============================================================================
// Product Variant
// =============================================================================

/// A selectable variant of a product (size, color, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductVariant {
    pub id: String,

    /// Variant dimension, e.g. "Color".
    pub name: String,

    /// Chosen value, e.g. "Midnight Blue".
    pub value: String,

    /// Price adjustment relative to the base product, in cents.
    pub price_modifier_cents: Option<i64>,
}

// =============================================================================
// User & Addresses
// =============================================================================

/// Whether an address is used for billing or shipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AddressKind {
    Billing,
    Shipping,
}

/// A saved postal address.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Address {
    pub id: String,
    pub kind: AddressKind,
    pub first_name: String,
    pub last_name: String,
    pub company: Option<String>,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub is_default: bool,
}

/// Account-level preferences.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UserPreferences {
    pub newsletter: bool,
    pub notifications: bool,
    pub currency: String,
    pub language: String,
}

/// A storefront account.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: Option<String>,
    pub phone: Option<String>,
    pub addresses: Vec<Address>,
    pub preferences: UserPreferences,
}

impl User {
    /// Returns the default address of the given kind, if one is saved.
    pub fn default_address(&self, kind: AddressKind) -> Option<&Address> {
        self.addresses
            .iter()
            .find(|a| a.kind == kind && a.is_default)
    }
}

// =============================================================================
// Orders
// =============================================================================

/// Lifecycle status of a placed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

/// How an order was paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PaymentKind {
    CreditCard,
    DebitCard,
    Paypal,
    ApplePay,
    GooglePay,
}

/// A placed order.
///
/// Uses the snapshot pattern: the cart's lines and derived totals are frozen
/// into the order at checkout, so later catalog or cart changes never touch
/// order history.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Order {
    pub id: String,

    /// Human-readable business identifier (`ORD-...`).
    pub order_number: String,

    pub status: OrderStatus,

    /// Cart lines frozen at checkout.
    pub items: Vec<crate::cart::CartLine>,

    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub shipping_cents: i64,
    pub discount_cents: i64,
    pub total_cents: i64,

    pub shipping_address: Address,
    pub billing_address: Address,
    pub payment: PaymentKind,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    #[ts(as = "Option<String>")]
    pub estimated_delivery: Option<DateTime<Utc>>,

    pub tracking_number: Option<String>,
}

impl Order {
    /// Returns the grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
