//! Delimiter vocabulary.
//!
//! This module defines the punctuation that shapes synapseware source: tag delimiters, the
//! whole-line comment marker, and the separators used inside a tag.
//!
//! ## Notes
//! - This module is vocabulary only (spellings + metadata). It does not scan source text.
//!
//! ## Examples
//! ```rust
//! use errloom_core::lang::delimiters::{self, DelimiterId};
//!
//! assert_eq!(delimiters::as_str(DelimiterId::TagOpen), "<|");
//! assert_eq!(delimiters::from_str("|>"), Some(DelimiterId::TagClose));
//! ```

use super::registry::{Since, Stability};

/// Stable identifier for delimiter tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DelimiterId {
    TagOpen,
    TagClose,
    Comment,
    SpecialAttr,
    KeywordSep,
    ObjectSep,
    CorrelationSep,
}

/// Where a delimiter is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DelimiterScope {
    /// Recognized anywhere in the document body.
    Document,
    /// Recognized only at the start of a line (after leading whitespace).
    LineStart,
    /// Recognized only inside tag content.
    Tag,
}

/// Metadata for a delimiter.
#[derive(Debug, Clone, Copy)]
pub struct DelimiterInfo {
    pub id: DelimiterId,
    pub canonical: &'static str,
    pub scope: DelimiterScope,
    pub since: Since,
    pub stability: Stability,
}

/// Opening tag delimiter.
pub const TAG_OPEN: &str = "<|";
/// Closing tag delimiter.
pub const TAG_CLOSE: &str = "|>";
/// Whole-line comment marker.
pub const COMMENT: &str = "#";
/// Special-attribute marker; also the reserved keyword key holding its value.
pub const SPECIAL_ATTR: &str = "<>";
/// Keyword argument separator (`key=value`).
pub const KEYWORD_SEP: char = '=';
/// Separator between variable identifiers of an object reference.
pub const OBJECT_SEP: char = '|';
/// Separator between an ego marker and its correlation id.
pub const CORRELATION_SEP: char = ':';

/// Registry of all delimiters.
pub const DELIMITERS: &[DelimiterInfo] = &[
    info(DelimiterId::TagOpen, TAG_OPEN, DelimiterScope::Document),
    info(DelimiterId::TagClose, TAG_CLOSE, DelimiterScope::Document),
    info(DelimiterId::Comment, COMMENT, DelimiterScope::LineStart),
    info(DelimiterId::SpecialAttr, SPECIAL_ATTR, DelimiterScope::Tag),
    info(DelimiterId::KeywordSep, "=", DelimiterScope::Tag),
    info(DelimiterId::ObjectSep, "|", DelimiterScope::Tag),
    info(DelimiterId::CorrelationSep, ":", DelimiterScope::Tag),
];

/// Return the canonical spelling for a delimiter.
pub fn as_str(id: DelimiterId) -> &'static str {
    info_for(id).canonical
}

/// Return the scope in which a delimiter is recognized.
pub fn scope(id: DelimiterId) -> DelimiterScope {
    info_for(id).scope
}

/// Return the full metadata entry for a delimiter.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: DelimiterId) -> &'static DelimiterInfo {
    DELIMITERS
        .iter()
        .find(|d| d.id == id)
        .expect("delimiter info missing")
}

/// Resolve a delimiter spelling to its identifier.
pub fn from_str(s: &str) -> Option<DelimiterId> {
    DELIMITERS.iter().find(|d| d.canonical == s).map(|d| d.id)
}

const fn info(id: DelimiterId, canonical: &'static str, scope: DelimiterScope) -> DelimiterInfo {
    DelimiterInfo {
        id,
        canonical,
        scope,
        since: Since(0, 1),
        stability: Stability::Stable,
    }
}
