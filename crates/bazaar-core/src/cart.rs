//! # Cart Ledger
//!
//! Owns the cart's line items and keeps the derived totals consistent with
//! them at all times.
//!
//! ## Ledger Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cart Ledger Operations                             │
//! │                                                                         │
//! │  Frontend Action          Intent                  Ledger Change         │
//! │  ───────────────          ──────                  ─────────────         │
//! │                                                                         │
//! │  Click Add to Cart ─────► add_item() ───────────► merge or append line  │
//! │                                                                         │
//! │  Change Quantity ───────► update_quantity() ────► set qty / drop line   │
//! │                                                                         │
//! │  Click Remove ──────────► remove_item() ────────► drop line (no-op ok)  │
//! │                                                                         │
//! │  Click Clear ───────────► clear() ──────────────► empty snapshot        │
//! │                                                                         │
//! │  Enter Voucher ─────────► apply_discount() ─────► overwrite, re-total   │
//! │                                                                         │
//! │  EVERY mutation ends in recalculate(): derived totals are a pure        │
//! │  function of the lines plus the stored discount, never caller-set.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Totals Policy
//!
//! Fixed storefront policy, written as literals rather than configuration:
//! - subtotal = Σ line price × quantity
//! - tax      = subtotal × 8%
//! - shipping = free strictly above $50.00, else $9.99 flat
//! - total    = subtotal + tax + shipping − discount, floored at zero

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::money::Money;
use crate::types::{Product, ProductVariant, TaxRate};

// =============================================================================
// Pricing Policy Constants
// =============================================================================

/// Flat storefront sales tax: 8%.
pub const TAX_RATE_BPS: u32 = 800;

/// Shipping is free strictly above this subtotal. A $50.00 subtotal still
/// pays shipping.
pub const FREE_SHIPPING_THRESHOLD_CENTS: i64 = 5000;

/// Flat shipping charge below the free-shipping threshold: $9.99.
pub const FLAT_SHIPPING_CENTS: i64 = 999;

// =============================================================================
// Cart Line
// =============================================================================

/// One line of the cart: a product snapshot paired with a quantity.
///
/// ## Design Notes
/// - `id` is unique per LINE, not per product. Adding a product already in
///   the cart merges into the existing line instead of minting a new id.
/// - `product` is an owned snapshot frozen at add time, so the cart renders
///   consistent data even if the catalog changes afterwards.
/// - `quantity` is always > 0; a line that would drop to zero is removed.
/// - The selected variant is carried for display; line totals use the
///   product's base price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    /// Line identifier (UUID v4), minted when the line is first created.
    pub id: String,

    /// Product snapshot at add time.
    pub product: Product,

    /// Units of the product in this line. Always positive.
    pub quantity: i64,

    /// Variant chosen when the product was added, if any.
    pub selected_variant: Option<ProductVariant>,
}

impl CartLine {
    fn new(product: &Product, quantity: i64, variant: Option<ProductVariant>) -> Self {
        CartLine {
            id: Uuid::new_v4().to_string(),
            product: product.clone(),
            quantity,
            selected_variant: variant,
        }
    }

    /// Line total before tax (unit price × quantity).
    pub fn line_total_cents(&self) -> i64 {
        self.product.price_cents * self.quantity
    }

    /// Line total as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.line_total_cents())
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The cart: an ordered collection of lines plus derived totals.
///
/// ## Invariants
/// - Lines keep insertion order
/// - Lines are unique by product id (adding the same product merges)
/// - Every line has quantity > 0
/// - The derived fields below `items` are recomputed on every mutation and
///   are never assigned by callers
///
/// Lives only for the in-memory session: created empty, cleared on explicit
/// clear or logout, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cart {
    /// Lines in insertion order.
    pub items: Vec<CartLine>,

    /// Derived: Σ line price × quantity.
    pub subtotal_cents: i64,

    /// Derived: subtotal × 8%.
    pub tax_cents: i64,

    /// Derived: $9.99 flat, or zero strictly above a $50.00 subtotal.
    pub shipping_cents: i64,

    /// Derived: subtotal + tax + shipping − discount, floored at zero.
    pub total_cents: i64,

    /// Voucher code currently applied, if any.
    pub discount_code: Option<String>,

    /// Voucher amount currently applied, in cents.
    pub discount_cents: Option<i64>,
}

impl Cart {
    /// Creates a new empty cart. All derived totals are zero.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds a product to the cart.
    ///
    /// ## Behavior
    /// - If a line already holds the same product id: that line's quantity
    ///   is incremented by `quantity` (its id and variant are kept)
    /// - Otherwise: a new line is appended with a fresh line id
    ///
    /// Quantity is NOT validated here; the session boundary rejects
    /// non-positive quantities and clamps against stock before dispatching.
    pub fn add_item(&mut self, product: &Product, quantity: i64) {
        self.add_item_with_variant(product, quantity, None);
    }

    /// Adds a product with a selected variant.
    ///
    /// Merging is by product id only, matching the storefront rule that one
    /// product occupies one line; the first-added variant wins.
    pub fn add_item_with_variant(
        &mut self,
        product: &Product,
        quantity: i64,
        variant: Option<ProductVariant>,
    ) {
        if let Some(line) = self.items.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity += quantity;
        } else {
            self.items.push(CartLine::new(product, quantity, variant));
        }

        self.recalculate();
    }

    /// Removes the line with the given line id.
    ///
    /// Removing an id that is not present is a silent no-op, never an error.
    pub fn remove_item(&mut self, line_id: &str) {
        self.items.retain(|l| l.id != line_id);
        self.recalculate();
    }

    /// Sets the quantity of the line with the given line id.
    ///
    /// ## Behavior
    /// - `quantity <= 0` behaves exactly like [`Cart::remove_item`]
    /// - Unknown line ids are a silent no-op
    /// - No upper bound is enforced here; callers clamp against stock
    pub fn update_quantity(&mut self, line_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(line_id);
            return;
        }

        if let Some(line) = self.items.iter_mut().find(|l| l.id == line_id) {
            line.quantity = quantity;
        }

        self.recalculate();
    }

    /// Drops all lines and the discount, returning to the empty snapshot.
    ///
    /// Idempotent: clearing an already-empty cart yields the same snapshot.
    pub fn clear(&mut self) {
        self.items.clear();
        self.discount_code = None;
        self.discount_cents = None;
        self.subtotal_cents = 0;
        self.tax_cents = 0;
        self.shipping_cents = 0;
        self.total_cents = 0;
    }

    /// Applies a discount voucher.
    ///
    /// Repeated calls overwrite the previous voucher - discounts never
    /// stack. The amount is subtracted from the computed total, floored at
    /// zero; whether the amount is sensible for the cart is the caller's
    /// concern.
    pub fn apply_discount(&mut self, code: impl Into<String>, amount: Money) {
        self.discount_code = Some(code.into());
        self.discount_cents = Some(amount.cents());
        self.recalculate();
    }

    // -------------------------------------------------------------------------
    // Derived totals
    // -------------------------------------------------------------------------

    /// Recomputes every derived field from the lines and stored discount.
    ///
    /// The shipping formula applies to whatever lines remain: a cart emptied
    /// by removals is quoted the flat charge, exactly as the storefront
    /// always has. Only [`Cart::new`] and [`Cart::clear`] produce the
    /// all-zero snapshot.
    fn recalculate(&mut self) {
        let subtotal = Money::from_cents(self.items.iter().map(CartLine::line_total_cents).sum());
        let tax = subtotal.calculate_tax(TaxRate::from_bps(TAX_RATE_BPS));
        let shipping = if subtotal.cents() > FREE_SHIPPING_THRESHOLD_CENTS {
            Money::zero()
        } else {
            Money::from_cents(FLAT_SHIPPING_CENTS)
        };

        let mut total = subtotal + tax + shipping;
        if let Some(discount) = self.discount_cents {
            total = total.sub_to_zero(Money::from_cents(discount));
        }

        self.subtotal_cents = subtotal.cents();
        self.tax_cents = tax.cents();
        self.shipping_cents = shipping.cents();
        self.total_cents = total.cents();
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }

    /// Tax as Money.
    #[inline]
    pub fn tax(&self) -> Money {
        Money::from_cents(self.tax_cents)
    }

    /// Shipping as Money.
    #[inline]
    pub fn shipping(&self) -> Money {
        Money::from_cents(self.shipping_cents)
    }

    /// Grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Applied discount as Money, if any.
    #[inline]
    pub fn discount(&self) -> Option<Money> {
        self.discount_cents.map(Money::from_cents)
    }

    /// Finds the line holding the given product id, if any.
    pub fn line_for_product(&self, product_id: &str) -> Option<&CartLine> {
        self.items.iter().find(|l| l.product.id == product_id)
    }

    /// Number of lines in the cart.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Total units across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|l| l.quantity).sum()
    }

    /// Checks if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
