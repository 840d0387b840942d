//! Synapseware parsing engine for errloom: comment filter, tag attributes, span builders, parser.
//!
//! A synapseware document is a conversation template. Plain text is literal content; tags enclosed
//! in `<| ... |>` switch the speaking role, request a sample from the model, reference external
//! variables, reset the context, or name a generic directive. Parsing turns one document into a
//! [`SynapseWare`]: an immutable, ordered sequence of typed [`Span`]s.
//!
//! This crate is intentionally “syntax-only”: it does not sample, substitute variables, or compute
//! rewards. Those consumers iterate the span sequence produced here.
//!
//! ## Examples
//! ```rust
//! use errloom_syntax::{parser, Span};
//!
//! let ware = parser::parse("You compress text.\n<|o_o|>Hello\n<|@_@ goal=compress|>").unwrap();
//! assert_eq!(ware.len(), 6);
//! assert!(matches!(ware.spans()[0], Span::Ego(_)));
//! ```
//!
//! ## See also
//! - `errloom_core::lang` for the marker and delimiter vocabulary.

pub mod attrs;
pub mod builders;
pub mod comments;
pub mod diagnostics;
pub mod parser;
pub mod range;
pub mod synapseware;

pub use diagnostics::ParseError;
pub use errloom_core::lang::egos::EgoId as Ego;
pub use synapseware::{
    ClassSpan, ContextResetSpan, EgoSpan, Kargs, Kwargs, ObjSpan, SampleSpan, Segment, Span, SynapseWare, TextSpan,
};
