//! # bazaar-demo: The Composition Root
//!
//! Owns the storefront's session-wide state and wires the pure core to the
//! simulated backend. The binary in `main.rs` drives a scripted shopping
//! session; the [`state`] module is the part worth reading - it is where
//! the single-writer discipline lives.

pub mod state;

pub use state::{AuthState, Session, SessionState};
