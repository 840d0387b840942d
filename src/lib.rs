#![forbid(unsafe_code)]
//! errloom synapseware tooling
//!
//! Synapseware is the conversation-template markup used to build training rollouts: plain text
//! interleaved with `<| ... |>` tags for role switches, sampling points, variable references,
//! context resets and directives. The parsing engine lives in `errloom_syntax`; this crate adds
//! the canonical formatter, span rendering and the `errloom` command line tool.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod format;
pub mod render;
pub mod version;

pub use errloom_core::lang;
pub use errloom_syntax::{comments, diagnostics, parser};
pub use errloom_syntax::{
    ClassSpan, ContextResetSpan, Ego, EgoSpan, Kargs, Kwargs, ObjSpan, ParseError, SampleSpan, Segment, Span,
    SynapseWare, TextSpan,
};

pub use format::{FormatConfig, check_formatted, format_diff, format_source, format_source_with_config};
pub use parser::parse;
