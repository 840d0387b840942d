//! Tag attribute parsing.
//!
//! The content of a tag is split on whitespace. The first token is the **base**; every other token
//! is classified on its own:
//!
//! - `<>value`: the special attribute, stored under the reserved key `<>`
//! - `key=value`: a keyword argument (split on the first `=`, last duplicate wins)
//! - anything else: a positional argument
//!
//! Positional and keyword tokens may be interleaved; only their relative order within each
//! category is kept.

use errloom_core::lang::delimiters::{KEYWORD_SEP, SPECIAL_ATTR};
use thiserror::Error;

use crate::synapseware::{Kargs, Kwargs};

/// Errors produced while splitting a single tag's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AttrError {
    #[error("Empty <> attribute")]
    EmptySpecialAttribute,

    #[error("empty tag")]
    EmptyTag,
}

/// A tag split into its base, positional arguments, and keyword arguments.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagParts {
    pub base: String,
    pub kargs: Kargs,
    pub kwargs: Kwargs,
}

/// Split tag content into [`TagParts`].
///
/// ## Errors
/// - [`AttrError::EmptyTag`] if `content` has no tokens.
/// - [`AttrError::EmptySpecialAttribute`] if a `<>` token carries no value.
///
/// ## Examples
/// ```rust
/// use errloom_syntax::attrs::parse_span_tag;
///
/// let parts = parse_span_tag("MyClass arg1 key1=val1 arg2").unwrap();
/// assert_eq!(parts.base, "MyClass");
/// assert_eq!(parts.kargs, vec!["arg1", "arg2"]);
/// assert_eq!(parts.kwargs["key1"], "val1");
/// ```
pub fn parse_span_tag(content: &str) -> Result<TagParts, AttrError> {
    let mut tokens = content.split_whitespace();
    let Some(base) = tokens.next() else {
        return Err(AttrError::EmptyTag);
    };

    let mut kargs = Kargs::new();
    let mut kwargs = Kwargs::new();

    for token in tokens {
        if let Some(value) = token.strip_prefix(SPECIAL_ATTR) {
            if value.is_empty() {
                return Err(AttrError::EmptySpecialAttribute);
            }
            kwargs.insert(SPECIAL_ATTR.to_string(), value.to_string());
        } else if let Some((key, value)) = token.split_once(KEYWORD_SEP) {
            kwargs.insert(key.to_string(), value.to_string());
        } else {
            kargs.push(token.to_string());
        }
    }

    Ok(TagParts {
        base: base.to_string(),
        kargs,
        kwargs,
    })
}
