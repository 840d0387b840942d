//! errloom version information.
//!
//! The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time. Prefer this
//! constant over repeating `env!("CARGO_PKG_VERSION")`.

/// The errloom version string (for example, `0.3.0`).
pub const ERRLOOM_VERSION: &str = env!("CARGO_PKG_VERSION");
