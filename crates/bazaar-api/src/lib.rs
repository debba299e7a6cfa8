//! # bazaar-api: The Simulated Backend
//!
//! The storefront runs entirely client-side against mock data. This crate
//! plays the part of the network: a fixture catalog, a demo account, and a
//! [`MockApi`] whose async operations sleep for a configurable artificial
//! latency before answering from `bazaar-core`.
//!
//! ## What Is (and Is Not) Simulated
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SIMULATED                            NOT PRESENT                       │
//! │  ─────────────────────────────        ─────────────────────────────     │
//! │  • Per-call latency                   • Real authentication             │
//! │  • Auth against the demo user         • Payment processing              │
//! │  • Catalog search + facets            • Persistence of any kind         │
//! │  • Order placement                    • Retries / backpressure          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Failures are part of the simulation too: wrong demo credentials, unknown
//! product ids, and unknown category slugs surface as typed [`ApiError`]s
//! for the frontend to render.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod client;
pub mod config;
pub mod error;
pub mod fixtures;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use client::{AuthSession, LoginCredentials, MockApi, ProductPage, RegisterCredentials};
pub use config::{ApiConfig, ConfigError};
pub use error::{ApiError, ApiResult};
