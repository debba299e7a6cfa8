//! # bazaar-core: Pure Business Logic for the Bazaar Storefront
//!
//! This crate is the **heart** of the storefront. It contains all business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Bazaar Storefront Architecture                     │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (TypeScript)                        │   │
//! │  │    Search UI ──► Product UI ──► Cart UI ──► Checkout UI         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON snapshots                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                bazaar-api (Simulated Backend)                   │   │
//! │  │    fixtures, artificial latency, mock auth, order placement     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bazaar-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌─────────┐  │   │
//! │  │  │  types  │ │  money  │ │  cart   │ │ catalog  │ │wishlist/│  │   │
//! │  │  │ Product │ │  Money  │ │  Cart   │ │ filters  │ │ recent  │  │   │
//! │  │  │  Order  │ │ TaxRate │ │CartLine │ │  facets  │ │  ring   │  │   │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └──────────┘ └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO STORAGE • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Category, User, Order, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The cart ledger: line items plus derived totals
//! - [`catalog`] - The catalog query engine: filter, sort, facets
//! - [`wishlist`] - Idempotent product membership set
//! - [`recently_viewed`] - Bounded most-recent-first viewing history
//! - [`error`] - Domain error types
//! - [`validation`] - Boundary validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, and storage access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use bazaar_core::money::Money;
//! use bazaar_core::types::TaxRate;
//!
//! // Create money from cents (never from floats!)
//! let price = Money::from_cents(19999); // $199.99
//!
//! // Sales tax at the storefront's flat 8% rate
//! let rate = TaxRate::from_bps(800);
//! let tax = price.calculate_tax(rate);
//! assert_eq!(tax.cents(), 1600); // $16.00
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod recently_viewed;
pub mod types;
pub mod validation;
pub mod wishlist;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bazaar_core::Money` instead of
// `use bazaar_core::money::Money`

pub use cart::{Cart, CartLine};
pub use catalog::{
    Catalog, CatalogFacets, FacetCount, PriceRange, SearchFilters, SearchResults, SortKey,
    SortOrder, DEFAULT_PAGE_SIZE,
};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use recently_viewed::RecentlyViewed;
pub use types::*;
pub use wishlist::Wishlist;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single product per cart line.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
/// Enforced at the session boundary via [`validation::validate_quantity`],
/// never by the ledger itself - callers are also expected to clamp against
/// the product's stock level before dispatching.
pub const MAX_LINE_QUANTITY: i64 = 999;

/// Maximum accepted length of a free-text search query, in characters.
pub const MAX_QUERY_LENGTH: usize = 100;
