//! End-to-end storefront flows against the simulated backend.
//!
//! These tests walk the same path a shopper does: sign in, browse and
//! search, fill the cart, apply a voucher, place the order.

use bazaar_api::{ApiConfig, ApiError, LoginCredentials, MockApi};
use bazaar_core::types::{AddressKind, OrderStatus, PaymentKind};
use bazaar_core::{Cart, Money, SearchFilters, SortKey, SortOrder};

fn api() -> MockApi {
    MockApi::new(ApiConfig::instant())
}

fn demo_credentials() -> LoginCredentials {
    LoginCredentials {
        email: "john.doe@example.com".to_string(),
        password: "password".to_string(),
    }
}

#[tokio::test]
async fn browse_search_cart_checkout() {
    let api = api();

    // Sign in as the demo shopper
    let session = api.login(&demo_credentials()).await.unwrap();
    let user = api.current_user(&session.token).await.unwrap();
    assert_eq!(user.first_name, "John");

    // Browse: five categories, six products
    let categories = api.categories().await.unwrap();
    assert_eq!(categories.len(), 5);

    // Search Electronics by price, cheapest first
    let results = api
        .search(&SearchFilters {
            category: Some("Electronics".to_string()),
            sort_by: Some(SortKey::Price),
            sort_order: SortOrder::Asc,
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(results.total, 2);
    assert_eq!(results.products[0].name, "Wireless Bluetooth Headphones");
    assert_eq!(results.products[1].name, "Smart Fitness Watch");

    // Fill the cart: headphones ($199.99) and two t-shirts ($29.99 each)
    let headphones = results.products[0].clone();
    let tshirt = api.product("3").await.unwrap();

    let mut cart = Cart::new();
    cart.add_item(&headphones, 1);
    cart.add_item(&tshirt, 2);

    assert_eq!(cart.subtotal_cents, 19999 + 2 * 2999);
    assert_eq!(cart.shipping_cents, 0); // comfortably above $50
    assert_eq!(
        cart.total_cents,
        cart.subtotal_cents + cart.tax_cents + cart.shipping_cents
    );

    // A voucher knocks $20 off
    cart.apply_discount("WELCOME20", Money::from_cents(2000));
    let discounted_total = cart.total_cents;

    // Place the order and check the freeze
    let shipping = user.default_address(AddressKind::Shipping).unwrap().clone();
    let billing = user.default_address(AddressKind::Billing).unwrap().clone();
    let order = api
        .place_order(&cart, shipping, billing, PaymentKind::CreditCard)
        .await
        .unwrap();

    assert_eq!(order.status, OrderStatus::Confirmed);
    assert!(order.order_number.starts_with("ORD-"));
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.subtotal_cents, cart.subtotal_cents);
    assert_eq!(order.discount_cents, 2000);
    assert_eq!(order.total_cents, discounted_total);
    assert!(order.estimated_delivery.is_some());

    // Order history stays empty in the demo
    assert!(api.orders().await.unwrap().is_empty());

    api.logout().await.unwrap();
}

#[tokio::test]
async fn searching_organic_finds_exactly_one_product() {
    let results = api()
        .search(&SearchFilters {
            query: Some("organic".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(results.total, 1);
    assert_eq!(results.products[0].name, "Organic Cotton T-Shirt");
}

#[tokio::test]
async fn facets_describe_the_full_catalog_even_when_filtered() {
    let results = api()
        .search(&SearchFilters {
            query: Some("organic".to_string()),
            category: Some("Clothing".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    // One match, but the facets still count all six products
    assert_eq!(results.total, 1);
    let total_faceted: usize = results.facets.categories.iter().map(|f| f.count).sum();
    assert_eq!(total_faceted, 6);
    assert_eq!(results.facets.price_range.min, Money::from_cents(2999));
    assert_eq!(results.facets.price_range.max, Money::from_cents(29999));
}

#[tokio::test]
async fn cart_boundary_cases_survive_a_session() {
    let api = api();
    let headphones = api.product("1").await.unwrap();
    let book = api.product("6").await.unwrap();

    let mut cart = Cart::new();

    // Same product twice merges: quantities 1 and 2 yield one line of 3
    cart.add_item(&headphones, 1);
    cart.add_item(&headphones, 2);
    assert_eq!(cart.line_count(), 1);
    assert_eq!(cart.items[0].quantity, 3);

    // A $39.99 book alone stays under the free-shipping bar
    cart.clear();
    cart.add_item(&book, 1);
    assert_eq!(cart.shipping_cents, 999);

    // Update-to-zero removes the line
    let line_id = cart.items[0].id.clone();
    cart.update_quantity(&line_id, 0);
    assert!(cart.is_empty());

    // Clearing twice lands on the same empty snapshot
    cart.clear();
    let once = cart.clone();
    cart.clear();
    assert_eq!(cart, once);
}

#[tokio::test]
async fn wrong_credentials_are_rejected() {
    let err = api()
        .login(&LoginCredentials {
            email: "mallory@example.com".to_string(),
            password: "password".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::InvalidCredentials));
}
