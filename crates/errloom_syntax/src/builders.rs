//! Span builders, one per tag family.
//!
//! Each builder takes a parsed tag (base, positional and keyword arguments) and returns the spans
//! it produces. Builders are pure: the parser concatenates their output in document order.

use errloom_core::lang::delimiters::{CORRELATION_SEP, OBJECT_SEP, SPECIAL_ATTR};
use errloom_core::lang::egos;
use thiserror::Error;

use crate::synapseware::{
    ClassSpan, ContextResetSpan, EgoSpan, Kargs, Kwargs, ObjSpan, SampleSpan, Span,
};

/// Keyword moved out of a sampler's kwargs into [`SampleSpan::goal`].
pub const GOAL_KEY: &str = "goal";

/// A tag base that its builder cannot turn into spans.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BaseError {
    #[error("`{0}` is not an ego marker")]
    UnknownEgo(String),

    #[error("empty correlation id after `:`")]
    EmptyCorrelationId,

    #[error("empty variable id in object reference")]
    EmptyVarId,

    #[error("`{0}` is not a valid directive name")]
    InvalidDirectiveName(String),
}

/// Build a generic directive span, named by `base`.
///
/// ## Errors
/// - [`BaseError::InvalidDirectiveName`] if `base` contains `=` or starts with `<>`, which would not
///   survive a round trip through the attribute syntax.
pub fn build_class_span(base: &str, kargs: Kargs, kwargs: Kwargs) -> Result<Vec<Span>, BaseError> {
    if base.is_empty() || base.contains('=') || base.starts_with(SPECIAL_ATTR) {
        return Err(BaseError::InvalidDirectiveName(base.to_string()));
    }
    Ok(vec![
        ClassSpan {
            class_name: base.to_string(),
            kargs,
            kwargs,
        }
        .into(),
    ])
}

/// Build an ego span, followed by a sample span when the tag carries any arguments.
///
/// `base` is an ego marker optionally suffixed with `:uuid`. The sample span shares the ego's
/// uuid, copies `kargs` verbatim and moves the `goal` keyword into its dedicated field.
///
/// ## Errors
/// - [`BaseError::UnknownEgo`] if the marker is not a registered ego marker.
/// - [`BaseError::EmptyCorrelationId`] for a trailing `:` with nothing after it.
pub fn build_ego_or_sampler_span(base: &str, kargs: Kargs, mut kwargs: Kwargs) -> Result<Vec<Span>, BaseError> {
    let (marker, uuid) = match base.split_once(CORRELATION_SEP) {
        Some((_, "")) => return Err(BaseError::EmptyCorrelationId),
        Some((marker, uuid)) => (marker, Some(uuid.to_string())),
        None => (base, None),
    };
    let ego = egos::from_marker(marker).ok_or_else(|| BaseError::UnknownEgo(marker.to_string()))?;

    let mut spans: Vec<Span> = vec![
        EgoSpan {
            ego,
            uuid: uuid.clone(),
        }
        .into(),
    ];

    if !kargs.is_empty() || !kwargs.is_empty() {
        let goal = kwargs.remove(GOAL_KEY);
        spans.push(
            SampleSpan {
                uuid,
                kargs,
                goal,
                kwargs,
            }
            .into(),
        );
    }

    Ok(spans)
}

/// Build a context-reset span. Arguments on a reset tag carry no meaning and are dropped.
pub fn build_context_reset_span(train: bool) -> Vec<Span> {
    vec![ContextResetSpan { train }.into()]
}

/// Build an object span from a `|`-separated list of variable ids.
///
/// ## Errors
/// - [`BaseError::EmptyVarId`] if any id between separators is empty.
pub fn build_obj_span(base: &str, kargs: Kargs, kwargs: Kwargs) -> Result<Vec<Span>, BaseError> {
    let var_ids: Vec<String> = base.split(OBJECT_SEP).map(str::to_string).collect();
    if var_ids.iter().any(String::is_empty) {
        return Err(BaseError::EmptyVarId);
    }
    Ok(vec![ObjSpan { var_ids, kargs, kwargs }.into()])
}
