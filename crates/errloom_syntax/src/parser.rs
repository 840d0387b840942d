//! Synapse parser: turns a synapseware document into a [`SynapseWare`] span sequence.
//!
//! ## Examples
//!
//! ```rust
//! use errloom_syntax::{parser, Span};
//!
//! let ware = parser::parse("<|o_o|>Hello<|@_@|>World").unwrap();
//! assert_eq!(ware.len(), 4);
//! assert!(matches!(&ware.spans()[1], Span::Text(t) if t.text == "Hello"));
//! ```

use crate::attrs::{AttrError, TagParts, parse_span_tag};
use crate::builders::{
    BaseError, build_class_span, build_context_reset_span, build_ego_or_sampler_span, build_obj_span,
};
use crate::comments::filter_comments;
use crate::diagnostics::{Location, ParseError};
use crate::range::TextRange;
use crate::synapseware::{Span, SynapseWare};
use errloom_core::lang::delimiters::{CORRELATION_SEP, OBJECT_SEP, TAG_CLOSE, TAG_OPEN};
use errloom_core::lang::egos::{self, EgoId};
use errloom_core::lang::registry::Stability;
use errloom_core::lang::resets::{self, ResetId};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module while keeping each file focused.

include!("parser/core.rs");
include!("parser/dispatch.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
