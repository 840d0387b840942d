//! Provide the canonical synapseware vocabulary shared by the errloom parser and tooling.
//!
//! This crate is intentionally small and dependency-free. It holds the spellings of every marker the
//! synapseware micro-language recognizes (ego markers, context-reset markers, delimiters) as
//! registry tables keyed by stable IDs, so the parser, the formatter and the CLI agree on them.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global state, and no parser types.
//! - Matching is always **case-sensitive**; markers are literal punctuation-like tokens.

pub mod lang;
