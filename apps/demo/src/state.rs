//! # Session State
//!
//! The storefront's session-wide state container.
//!
//! ## Single Writer By Construction
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Session State Operations                           │
//! │                                                                         │
//! │  Shopper Action           Session Method          State Change          │
//! │  ──────────────           ──────────────          ────────────          │
//! │                                                                         │
//! │  Add to Cart ───────────► add_to_cart() ────────► validate, clamp,      │
//! │                                                   ledger add            │
//! │  Change Quantity ───────► update_cart_quantity()► normalize or set      │
//! │                                                                         │
//! │  Heart a Product ───────► toggle_wishlist() ────► contains? remove:add  │
//! │                                                                         │
//! │  Open Product Page ─────► record_view() ────────► ring record           │
//! │                                                                         │
//! │  Sign In / Out ─────────► login() / logout() ───► auth set; logout      │
//! │                                                   also clears the cart  │
//! │                                                                         │
//! │  Every mutation goes through a method on SessionState, which locks      │
//! │  the Mutex for the duration. Actions are processed to completion        │
//! │  before the next is accepted; there is no other path to the fields.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Methods hand back cloned snapshots, so the presentation layer renders
//! from immutable data and never holds the lock.

use std::sync::{Arc, Mutex};

use bazaar_api::AuthSession;
use bazaar_core::types::{Product, User};
use bazaar_core::validation::{
    validate_discount_cents, validate_discount_code, validate_quantity,
};
use bazaar_core::{Cart, CoreError, CoreResult, Money, RecentlyViewed, Wishlist};

// =============================================================================
// Auth State
// =============================================================================

/// Who is signed in, if anyone.
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
}

impl AuthState {
    /// Checks if a shopper is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

// =============================================================================
// Session
// =============================================================================

/// Everything a browsing session accumulates.
///
/// Created empty at session start; the cart is additionally cleared on
/// logout. Nothing here outlives the process - persistence is explicitly
/// not this layer's job.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub auth: AuthState,
    pub cart: Cart,
    pub wishlist: Wishlist,
    pub recently_viewed: RecentlyViewed,
}

// =============================================================================
// Session State Container
// =============================================================================

/// Shared handle to the session.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Session>>`:
/// - `Arc`: shared ownership across tasks
/// - `Mutex`: one mutation at a time, preserving the reducer discipline
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    inner: Arc<Mutex<Session>>,
}

impl SessionState {
    /// Creates a fresh, signed-out session.
    pub fn new() -> Self {
        SessionState::default()
    }

    /// Executes a function with read access to the session.
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Session) -> R,
    {
        let session = self.inner.lock().expect("Session mutex poisoned");
        f(&session)
    }

    /// Executes a function with write access to the session.
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Session) -> R,
    {
        let mut session = self.inner.lock().expect("Session mutex poisoned");
        f(&mut session)
    }

    // -------------------------------------------------------------------------
    // Cart intents
    // -------------------------------------------------------------------------

    /// Adds a product to the cart.
    ///
    /// This is the validating boundary the permissive ledger relies on:
    /// the quantity must be positive and within bounds, and the merged
    /// line quantity must be coverable by stock.
    pub fn add_to_cart(&self, product: &Product, quantity: i64) -> CoreResult<Cart> {
        validate_quantity(quantity)?;

        self.with_session_mut(|session| {
            let already_in_cart = session
                .cart
                .line_for_product(&product.id)
                .map_or(0, |line| line.quantity);

            let requested = already_in_cart + quantity;
            if !product.can_supply(requested) {
                return Err(CoreError::InsufficientStock {
                    product_id: product.id.clone(),
                    available: product.stock_quantity,
                    requested,
                });
            }

            session.cart.add_item(product, quantity);
            Ok(session.cart.clone())
        })
    }

    /// Sets a cart line's quantity.
    ///
    /// Zero and below normalize to removal, exactly like the ledger;
    /// positive quantities are validated and clamped against the stock
    /// frozen in the line's product snapshot. Unknown lines are a no-op.
    pub fn update_cart_quantity(&self, line_id: &str, quantity: i64) -> CoreResult<Cart> {
        if quantity > 0 {
            validate_quantity(quantity)?;
        }

        self.with_session_mut(|session| {
            if quantity > 0 {
                if let Some(line) = session.cart.items.iter().find(|l| l.id == line_id) {
                    if !line.product.can_supply(quantity) {
                        return Err(CoreError::InsufficientStock {
                            product_id: line.product.id.clone(),
                            available: line.product.stock_quantity,
                            requested: quantity,
                        });
                    }
                }
            }

            session.cart.update_quantity(line_id, quantity);
            Ok(session.cart.clone())
        })
    }

    /// Removes a cart line. Unknown lines are a silent no-op.
    pub fn remove_from_cart(&self, line_id: &str) -> Cart {
        self.with_session_mut(|session| {
            session.cart.remove_item(line_id);
            session.cart.clone()
        })
    }

    /// Empties the cart.
    pub fn clear_cart(&self) -> Cart {
        self.with_session_mut(|session| {
            session.cart.clear();
            session.cart.clone()
        })
    }

    /// Applies a discount voucher to the cart.
    pub fn apply_discount(&self, code: &str, amount: Money) -> CoreResult<Cart> {
        validate_discount_code(code)?;
        validate_discount_cents(amount.cents())?;

        self.with_session_mut(|session| {
            session.cart.apply_discount(code, amount);
            Ok(session.cart.clone())
        })
    }

    /// Current cart snapshot.
    pub fn cart(&self) -> Cart {
        self.with_session(|session| session.cart.clone())
    }

    // -------------------------------------------------------------------------
    // Wishlist & viewing history intents
    // -------------------------------------------------------------------------

    /// Toggles wishlist membership: the caller-side composition of a
    /// membership check followed by add or remove.
    ///
    /// Returns `true` when the product is saved after the call.
    pub fn toggle_wishlist(&self, product: &Product) -> bool {
        self.with_session_mut(|session| {
            if session.wishlist.contains(&product.id) {
                session.wishlist.remove(&product.id);
                false
            } else {
                session.wishlist.add(product);
                true
            }
        })
    }

    /// Current wishlist snapshot.
    pub fn wishlist(&self) -> Wishlist {
        self.with_session(|session| session.wishlist.clone())
    }

    /// Records a product-page view.
    pub fn record_view(&self, product: &Product) {
        self.with_session_mut(|session| session.recently_viewed.record(product));
    }

    /// Current viewing-history snapshot.
    pub fn recently_viewed(&self) -> RecentlyViewed {
        self.with_session(|session| session.recently_viewed.clone())
    }

    // -------------------------------------------------------------------------
    // Auth intents
    // -------------------------------------------------------------------------

    /// Stores a successful sign-in.
    pub fn login(&self, auth: AuthSession) {
        self.with_session_mut(|session| {
            session.auth = AuthState {
                user: Some(auth.user),
                token: Some(auth.token),
            };
        });
    }

    /// Signs out, clearing the cart along with the credentials. The
    /// wishlist and viewing history survive - they belong to the browser,
    /// not the account.
    pub fn logout(&self) {
        self.with_session_mut(|session| {
            session.auth = AuthState::default();
            session.cart.clear();
        });
    }

    /// Checks if a shopper is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.with_session(|session| session.auth.is_authenticated())
    }

    /// The signed-in account's session token, if any.
    pub fn token(&self) -> Option<String> {
        self.with_session(|session| session.auth.token.clone())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use bazaar_api::fixtures;

    fn product(id: &str) -> Product {
        fixtures::demo_products()
            .into_iter()
            .find(|p| p.id == id)
            .unwrap()
    }

    fn auth_session() -> AuthSession {
        AuthSession {
            user: fixtures::demo_user(),
            token: "mock-token-test".to_string(),
        }
    }

    #[test]
    fn test_add_to_cart_rejects_nonpositive_quantity() {
        let state = SessionState::new();
        let headphones = product("1");

        assert!(state.add_to_cart(&headphones, 0).is_err());
        assert!(state.add_to_cart(&headphones, -2).is_err());
        assert!(state.cart().is_empty());
    }

    #[test]
    fn test_add_to_cart_clamps_against_stock() {
        let state = SessionState::new();
        let coffee_maker = product("4"); // 12 in stock

        state.add_to_cart(&coffee_maker, 10).unwrap();

        // 10 already in the cart; 3 more would need 13
        let err = state.add_to_cart(&coffee_maker, 3).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InsufficientStock { requested: 13, .. }
        ));

        // The failed intent must not have touched the cart
        assert_eq!(state.cart().items[0].quantity, 10);
    }

    #[test]
    fn test_update_quantity_normalizes_and_clamps() {
        let state = SessionState::new();
        let coffee_maker = product("4");
        state.add_to_cart(&coffee_maker, 2).unwrap();
        let line_id = state.cart().items[0].id.clone();

        assert!(state.update_cart_quantity(&line_id, 13).is_err());

        let cart = state.update_cart_quantity(&line_id, 0).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_toggle_wishlist_is_a_composition() {
        let state = SessionState::new();
        let book = product("6");

        assert!(state.toggle_wishlist(&book));
        assert_eq!(state.wishlist().len(), 1);

        assert!(!state.toggle_wishlist(&book));
        assert!(state.wishlist().is_empty());
    }

    #[test]
    fn test_logout_clears_cart_but_not_wishlist() {
        let state = SessionState::new();
        state.login(auth_session());
        assert!(state.is_authenticated());

        state.add_to_cart(&product("1"), 1).unwrap();
        state.toggle_wishlist(&product("6"));
        state.record_view(&product("3"));

        state.logout();

        assert!(!state.is_authenticated());
        assert!(state.cart().is_empty());
        assert_eq!(state.cart().total_cents, 0);
        assert_eq!(state.wishlist().len(), 1);
        assert_eq!(state.recently_viewed().len(), 1);
    }

    #[test]
    fn test_apply_discount_validates_at_the_boundary() {
        let state = SessionState::new();
        state.add_to_cart(&product("1"), 1).unwrap();

        assert!(state.apply_discount("", Money::from_cents(500)).is_err());
        assert!(state
            .apply_discount("SAVE5", Money::from_cents(0))
            .is_err());

        let cart = state
            .apply_discount("SAVE5", Money::from_cents(500))
            .unwrap();
        assert_eq!(cart.discount_code.as_deref(), Some("SAVE5"));
    }
}
