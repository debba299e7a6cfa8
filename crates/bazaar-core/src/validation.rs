//! # Validation Module
//!
//! Input validation for the storefront session boundary.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Session dispatch (Rust)                                      │
//! │  └── THIS MODULE: quantity, discount, query rules                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: The ledger and query engine                                  │
//! │  └── Deliberately permissive: no-ops and normalization, not errors     │
//! │                                                                         │
//! │  The ledger never validates - a missing line id is a no-op and a       │
//! │  quantity update to zero is a removal. Rejection happens here, once,   │
//! │  before an intent is dispatched.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bazaar_core::validation::{validate_quantity, validate_search_query};
//!
//! validate_quantity(5).unwrap();
//! let query = validate_search_query("  organic  ").unwrap();
//! assert_eq!(query, "organic");
//! ```

use crate::error::ValidationError;
use crate::{MAX_LINE_QUANTITY, MAX_QUERY_LENGTH};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a cart quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_LINE_QUANTITY (999)
///
/// Clamping against a product's stock level is a separate, caller-side
/// concern (the session checks `Product::can_supply` with the catalog at
/// hand).
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_LINE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_LINE_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use bazaar_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(19999).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a discount amount in cents.
///
/// ## Rules
/// - Must be positive (> 0); a zero discount is a removal, not an apply
///
/// Whether the amount exceeds the cart total is NOT checked here - the
/// ledger floors the total at zero instead.
pub fn validate_discount_cents(cents: i64) -> ValidationResult<()> {
    if cents <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "discount amount".to_string(),
        });
    }

    Ok(())
}

/// Validates a minimum-rating filter threshold.
///
/// ## Rules
/// - Must lie in the rating scale, 0.0 to 5.0 inclusive
pub fn validate_rating_bound(rating: f64) -> ValidationResult<()> {
    if !(0.0..=5.0).contains(&rating) {
        return Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: 0,
            max: 5,
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a free-text search query.
///
/// ## Rules
/// - Can be empty (an empty query means "no constraint")
/// - Maximum 100 characters after trimming
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.len() > MAX_QUERY_LENGTH {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_QUERY_LENGTH,
        });
    }

    Ok(query.to_string())
}

/// Validates a discount code.
///
/// ## Rules
/// - Must not be empty
/// - Must contain only alphanumeric characters and hyphens
pub fn validate_discount_code(code: &str) -> ValidationResult<()> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "discount code".to_string(),
        });
    }

    if !code.chars().all(|c| c.is_alphanumeric() || c == '-') {
        return Err(ValidationError::InvalidFormat {
            field: "discount code".to_string(),
            reason: "must contain only letters, numbers, and hyphens".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(100).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(19999).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_validate_discount_cents() {
        assert!(validate_discount_cents(1000).is_ok());
        assert!(validate_discount_cents(0).is_err());
        assert!(validate_discount_cents(-500).is_err());
    }

    #[test]
    fn test_validate_rating_bound() {
        assert!(validate_rating_bound(0.0).is_ok());
        assert!(validate_rating_bound(4.5).is_ok());
        assert!(validate_rating_bound(5.0).is_ok());

        assert!(validate_rating_bound(-0.1).is_err());
        assert!(validate_rating_bound(5.1).is_err());
    }

    #[test]
    fn test_validate_search_query_trims() {
        assert_eq!(validate_search_query("  organic ").unwrap(), "organic");
        assert_eq!(validate_search_query("").unwrap(), "");
        assert!(validate_search_query(&"a".repeat(200)).is_err());
    }

    #[test]
    fn test_validate_discount_code() {
        assert!(validate_discount_code("SAVE10").is_ok());
        assert!(validate_discount_code("spring-sale").is_ok());

        assert!(validate_discount_code("").is_err());
        assert!(validate_discount_code("   ").is_err());
        assert!(validate_discount_code("bad code").is_err());
    }
}
