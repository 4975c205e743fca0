//! Skive compiler version information.
//!
//! ## Notes
//!
//! - The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.
//! - The emitter banner reads this constant; prefer it over repeating `env!("CARGO_PKG_VERSION")`.

/// The Skive compiler version string (for example, `0.1.0`).
pub const SKIVE_VERSION: &str = env!("CARGO_PKG_VERSION");
