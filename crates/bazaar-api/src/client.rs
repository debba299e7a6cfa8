//! # Mock API Client
//!
//! The storefront's stand-in for a network client.
//!
//! ## How a Call Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Anatomy of a Simulated Call                         │
//! │                                                                         │
//! │  frontend intent                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  sleep(base latency × configured scale)   ← the "network"               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate input at the boundary (bazaar-core::validation)               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  answer from the fixture via bazaar-core ──► Ok(payload) / ApiError     │
//! │                                                                         │
//! │  Calls are fire-and-forget from the core's perspective: nothing         │
//! │  suspends mid-operation, retries, or times out.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Base latencies mirror the storefront's stock delays per endpoint
//! (300-1500 ms); the scale knob in [`ApiConfig`] shrinks or disables them.

use std::time::Duration;

use chrono::{Duration as ChronoDuration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;
use uuid::Uuid;

use bazaar_core::types::{Address, Order, OrderStatus, PaymentKind, Product, ProductCategory, User};
use bazaar_core::validation::{validate_rating_bound, validate_search_query};
use bazaar_core::{Cart, Catalog, CoreError, SearchFilters, SearchResults, DEFAULT_PAGE_SIZE};

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::fixtures;

// =============================================================================
// Base Latencies (milliseconds)
// =============================================================================
// One constant per endpoint, matching the stock storefront delays.

const LATENCY_LOGIN_MS: u64 = 1000;
const LATENCY_REGISTER_MS: u64 = 1200;
const LATENCY_LOGOUT_MS: u64 = 500;
const LATENCY_CURRENT_USER_MS: u64 = 800;
const LATENCY_PRODUCTS_MS: u64 = 600;
const LATENCY_PRODUCT_MS: u64 = 400;
const LATENCY_FEATURED_MS: u64 = 500;
const LATENCY_SEARCH_MS: u64 = 700;
const LATENCY_CATEGORIES_MS: u64 = 300;
const LATENCY_BY_CATEGORY_MS: u64 = 500;
const LATENCY_PLACE_ORDER_MS: u64 = 1500;
const LATENCY_ORDERS_MS: u64 = 800;

/// Prefix of every token the mock auth issues.
const TOKEN_PREFIX: &str = "mock-token-";

// =============================================================================
// Payload Shapes
// =============================================================================

/// Login form payload.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Registration form payload.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RegisterCredentials {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// A successful authentication: the account plus its opaque session token.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AuthSession {
    pub user: User,
    pub token: String,
}

/// One page of the product listing.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductPage {
    pub products: Vec<Product>,
    /// Catalog-wide product count, not the page size.
    pub total: usize,
}

// =============================================================================
// Mock API
// =============================================================================

/// The simulated backend client.
///
/// Owns the fixture catalog and demo account; every method sleeps its
/// artificial latency, then answers from `bazaar-core`.
#[derive(Debug, Clone)]
pub struct MockApi {
    catalog: Catalog,
    demo_user: User,
    config: ApiConfig,
}

impl MockApi {
    /// Creates a client over the standard demo fixture.
    pub fn new(config: ApiConfig) -> Self {
        MockApi {
            catalog: fixtures::demo_catalog(),
            demo_user: fixtures::demo_user(),
            config,
        }
    }

    /// Creates a client over a custom catalog and account.
    pub fn with_fixture(catalog: Catalog, demo_user: User, config: ApiConfig) -> Self {
        MockApi {
            catalog,
            demo_user,
            config,
        }
    }

    /// The catalog this client answers from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Sleeps for the scaled artificial latency of one endpoint.
    async fn simulate_latency(&self, base_ms: u64) {
        let ms = (base_ms as f64 * self.config.latency_scale).round() as u64;
        if ms > 0 {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }

    // -------------------------------------------------------------------------
    // Authentication (mock - no security implemented or implied)
    // -------------------------------------------------------------------------

    /// Signs in. Only the demo credentials are accepted.
    pub async fn login(&self, credentials: &LoginCredentials) -> ApiResult<AuthSession> {
        self.simulate_latency(LATENCY_LOGIN_MS).await;

        debug!(email = %credentials.email, "Login attempt");

        if credentials.email == self.demo_user.email
            && credentials.password == fixtures::DEMO_PASSWORD
        {
            Ok(AuthSession {
                user: self.demo_user.clone(),
                token: mint_token(),
            })
        } else {
            Err(ApiError::InvalidCredentials)
        }
    }

    /// Registers a new account.
    ///
    /// The mock personalizes the demo account rather than storing anything:
    /// a fresh id, the submitted name and email, demo addresses and
    /// preferences.
    pub async fn register(&self, credentials: &RegisterCredentials) -> ApiResult<AuthSession> {
        self.simulate_latency(LATENCY_REGISTER_MS).await;

        debug!(email = %credentials.email, "Registering account");

        let user = User {
            id: Uuid::new_v4().to_string(),
            email: credentials.email.clone(),
            first_name: credentials.first_name.clone(),
            last_name: credentials.last_name.clone(),
            ..self.demo_user.clone()
        };

        Ok(AuthSession {
            user,
            token: mint_token(),
        })
    }

    /// Signs out. Token invalidation is the caller's concern (the session
    /// container drops it); the mock just simulates the round trip.
    pub async fn logout(&self) -> ApiResult<()> {
        self.simulate_latency(LATENCY_LOGOUT_MS).await;
        debug!("Logout");
        Ok(())
    }

    /// Returns the account behind a session token.
    pub async fn current_user(&self, token: &str) -> ApiResult<User> {
        self.simulate_latency(LATENCY_CURRENT_USER_MS).await;

        if token.starts_with(TOKEN_PREFIX) {
            Ok(self.demo_user.clone())
        } else {
            Err(ApiError::NotAuthenticated)
        }
    }

    // -------------------------------------------------------------------------
    // Catalog
    // -------------------------------------------------------------------------

    /// One page of the catalog. Page numbers are 1-based; pages past the
    /// end are empty, not an error.
    pub async fn products(&self, page: usize, per_page: usize) -> ApiResult<ProductPage> {
        self.simulate_latency(LATENCY_PRODUCTS_MS).await;

        let (products, total) = self.catalog.page(page, per_page);
        debug!(page, per_page, count = products.len(), "Listed products");

        Ok(ProductPage {
            products: products.into_iter().cloned().collect(),
            total,
        })
    }

    /// The first page at the storefront's default page size.
    pub async fn first_page(&self) -> ApiResult<ProductPage> {
        self.products(1, DEFAULT_PAGE_SIZE).await
    }

    /// Looks up one product.
    pub async fn product(&self, id: &str) -> ApiResult<Product> {
        self.simulate_latency(LATENCY_PRODUCT_MS).await;

        self.catalog
            .product_by_id(id)
            .cloned()
            .ok_or_else(|| ApiError::ProductNotFound(id.to_string()))
    }

    /// The home page's featured picks.
    pub async fn featured_products(&self) -> ApiResult<Vec<Product>> {
        self.simulate_latency(LATENCY_FEATURED_MS).await;

        Ok(self.catalog.featured().into_iter().cloned().collect())
    }

    /// Runs a catalog search.
    ///
    /// The boundary validates and normalizes the filters (query length and
    /// trimming, rating bounds) before the engine runs; the engine itself
    /// never fails and an empty result is a valid outcome.
    pub async fn search(&self, filters: &SearchFilters) -> ApiResult<SearchResults> {
        self.simulate_latency(LATENCY_SEARCH_MS).await;

        let mut filters = filters.clone();
        if let Some(query) = filters.query.as_deref() {
            filters.query = Some(validate_search_query(query).map_err(CoreError::from)?);
        }
        if let Some(rating) = filters.min_rating {
            validate_rating_bound(rating).map_err(CoreError::from)?;
        }

        let results = self.catalog.search(&filters);
        debug!(
            query = filters.query.as_deref().unwrap_or(""),
            total = results.total,
            "Search complete"
        );

        Ok(results)
    }

    /// All known categories.
    pub async fn categories(&self) -> ApiResult<Vec<ProductCategory>> {
        self.simulate_latency(LATENCY_CATEGORIES_MS).await;

        Ok(self.catalog.categories().to_vec())
    }

    /// Products in the category behind a URL slug.
    pub async fn products_by_category(&self, slug: &str) -> ApiResult<Vec<Product>> {
        self.simulate_latency(LATENCY_BY_CATEGORY_MS).await;

        let category = self
            .catalog
            .category_by_slug(slug)
            .ok_or_else(|| ApiError::CategoryNotFound(slug.to_string()))?;

        Ok(self
            .catalog
            .products_by_category(&category.name)
            .into_iter()
            .cloned()
            .collect())
    }

    // -------------------------------------------------------------------------
    // Orders
    // -------------------------------------------------------------------------

    /// Places an order, freezing the cart's lines and derived totals.
    ///
    /// The mock confirms immediately and estimates delivery a week out.
    /// No payment is processed.
    pub async fn place_order(
        &self,
        cart: &Cart,
        shipping_address: Address,
        billing_address: Address,
        payment: PaymentKind,
    ) -> ApiResult<Order> {
        self.simulate_latency(LATENCY_PLACE_ORDER_MS).await;

        let now = Utc::now();
        let order = Order {
            id: Uuid::new_v4().to_string(),
            order_number: mint_order_number(),
            status: OrderStatus::Confirmed,
            items: cart.items.clone(),
            subtotal_cents: cart.subtotal_cents,
            tax_cents: cart.tax_cents,
            shipping_cents: cart.shipping_cents,
            discount_cents: cart.discount_cents.unwrap_or(0),
            total_cents: cart.total_cents,
            shipping_address,
            billing_address,
            payment,
            created_at: now,
            estimated_delivery: Some(now + ChronoDuration::days(7)),
            tracking_number: None,
        };

        debug!(
            order_number = %order.order_number,
            total_cents = order.total_cents,
            "Order placed"
        );

        Ok(order)
    }

    /// The account's order history. The demo has none.
    pub async fn orders(&self) -> ApiResult<Vec<Order>> {
        self.simulate_latency(LATENCY_ORDERS_MS).await;

        Ok(Vec::new())
    }
}

/// Mints an opaque session token.
fn mint_token() -> String {
    format!("{}{}", TOKEN_PREFIX, Uuid::new_v4())
}

/// Mints a human-readable order number.
fn mint_order_number() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("ORD-{}", id[..12].to_uppercase())
}

// =============================================================================
// Unit Tests
// =============================================================================
