//! # API Error Types
//!
//! What the frontend sees when a simulated call fails.
//!
//! Nothing here is transient: the backend is an in-memory fixture, so every
//! failure is deterministic and none is worth retrying. The surrounding
//! presentation layer translates these into user-visible messages.

use thiserror::Error;

use bazaar_core::CoreError;

// =============================================================================
// Api Error
// =============================================================================

/// Simulated-backend failures.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No product with the requested id.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// No category with the requested slug.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// Login rejected: the mock only accepts the demo credentials.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The call requires a session token and none (or a bad one) was given.
    #[error("No authentication token found")]
    NotAuthenticated,

    /// A domain rule rejected the request.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for Results with ApiError.
pub type ApiResult<T> = Result<T, ApiError>;

// =============================================================================
// Unit Tests
// =============================================================================
