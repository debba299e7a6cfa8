//! # Bazaar Storefront Demo
//!
//! Headless driver for the storefront: signs in as the demo shopper,
//! browses and searches the catalog, fills the cart, applies a voucher,
//! and places an order - logging each step.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Scripted Session                                 │
//! │                                                                         │
//! │  login ──► categories ──► search ──► view products ──► wishlist         │
//! │                                          │                              │
//! │                                          ▼                              │
//! │              receipt ◄── place order ◄── voucher ◄── fill cart          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Set `BAZAAR_LATENCY_SCALE=0` to skip the simulated network delays.

use tracing::info;
use tracing_subscriber::EnvFilter;

use bazaar_api::{ApiConfig, LoginCredentials, MockApi};
use bazaar_core::types::{AddressKind, PaymentKind};
use bazaar_core::{Money, SearchFilters, SortKey, SortOrder};
use bazaar_demo::SessionState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting Bazaar storefront demo...");

    // Load configuration
    let config = ApiConfig::from_env()?;
    info!(latency_scale = config.latency_scale, "Configuration loaded");

    let api = MockApi::new(config);
    let session = SessionState::new();

    // Sign in as the demo shopper
    let auth = api
        .login(&LoginCredentials {
            email: "john.doe@example.com".to_string(),
            password: "password".to_string(),
        })
        .await?;
    info!(user = %auth.user.email, "Signed in");
    session.login(auth);

    // Browse the catalog
    let categories = api.categories().await?;
    info!(count = categories.len(), "Fetched categories");

    let featured = api.featured_products().await?;
    info!(count = featured.len(), "Fetched featured picks");

    // Search Electronics, cheapest first
    let results = api
        .search(&SearchFilters {
            category: Some("Electronics".to_string()),
            sort_by: Some(SortKey::Price),
            sort_order: SortOrder::Asc,
            ..Default::default()
        })
        .await?;
    info!(total = results.total, "Searched Electronics by price");
    for product in &results.products {
        info!(name = %product.name, price = %product.price(), "  result");
    }

    // View a couple of product pages and heart one of them
    let headphones = api.product("1").await?;
    session.record_view(&headphones);
    let tshirt = api.product("3").await?;
    session.record_view(&tshirt);
    session.toggle_wishlist(&tshirt);
    info!(
        wishlist = session.wishlist().len(),
        recently_viewed = session.recently_viewed().len(),
        "Browsing state updated"
    );

    // Fill the cart and apply a voucher
    session.add_to_cart(&headphones, 1)?;
    session.add_to_cart(&tshirt, 2)?;
    let cart = session.apply_discount("WELCOME20", Money::from_cents(2000))?;
    info!(
        lines = cart.line_count(),
        subtotal = %cart.subtotal(),
        tax = %cart.tax(),
        shipping = %cart.shipping(),
        total = %cart.total(),
        "Cart ready"
    );

    // Check out
    let user = api.current_user(&session.token().unwrap_or_default()).await?;
    let shipping = user
        .default_address(AddressKind::Shipping)
        .ok_or("demo user has no shipping address")?
        .clone();
    let billing = user
        .default_address(AddressKind::Billing)
        .ok_or("demo user has no billing address")?
        .clone();

    let order = api
        .place_order(&cart, shipping, billing, PaymentKind::CreditCard)
        .await?;
    info!(
        order_number = %order.order_number,
        status = ?order.status,
        total = %order.total(),
        "Order placed"
    );

    // Sign out; the session drops the cart with the credentials
    api.logout().await?;
    session.logout();
    info!(
        cart_empty = session.cart().is_empty(),
        "Signed out - session complete"
    );

    Ok(())
}
