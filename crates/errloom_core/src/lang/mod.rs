//! Synapseware vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: ego (role) markers, context-reset
//! markers, and the delimiters that shape a tag.
//!
//! The design goal is to avoid stringly-typed checks scattered across the parser and tooling.
//! Instead, callers work with **stable IDs** (e.g. `EgoId`, `ResetId`) and look up spellings and
//! metadata via registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no span types, no IO, no side effects.
//! - The parser enforces syntax; registries provide spellings and metadata for shared use (diagnostics,
//!   formatting, docs).
//!
//! ## Examples
//! ```rust
//! use errloom_core::lang::egos::{self, EgoId};
//!
//! assert_eq!(egos::from_marker("o_o"), Some(EgoId::User));
//! assert_eq!(egos::marker(EgoId::Assistant), Some("@_@"));
//! ```

pub mod delimiters;
pub mod egos;
pub mod reference;
pub mod registry;
pub mod resets;
