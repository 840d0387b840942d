//! Span definitions and the [`SynapseWare`] sequence produced by the parser.
//!
//! Spans are value objects: each variant is built once by the parser and never mutated. There are no
//! cross-references between spans; their position in the sequence is the only relationship.

use std::collections::BTreeMap;

use errloom_core::lang::delimiters::SPECIAL_ATTR;
use errloom_core::lang::egos::EgoId;

/// Positional tag arguments, in source order.
pub type Kargs = Vec<String>;

/// Keyword tag arguments. The reserved key `<>` holds the special attribute.
pub type Kwargs = BTreeMap<String, String>;

/// Literal content appearing outside any tag. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub text: String,
}

/// Start of a conversational turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EgoSpan {
    pub ego: EgoId,
    /// Correlates an assistant turn with a later sampling result.
    pub uuid: Option<String>,
}

/// A point where the model must generate content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleSpan {
    pub uuid: Option<String>,
    pub kargs: Kargs,
    pub goal: Option<String>,
    pub kwargs: Kwargs,
}

/// A generic directive, named by the tag base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSpan {
    pub class_name: String,
    pub kargs: Kargs,
    pub kwargs: Kwargs,
}

impl ClassSpan {
    /// Inline body carried by the special attribute (`<>body`), if any.
    pub fn body(&self) -> Option<&str> {
        self.kwargs.get(SPECIAL_ATTR).map(String::as_str)
    }
}

/// Reference to one or more external variables, substituted at execution time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjSpan {
    pub var_ids: Vec<String>,
    pub kargs: Kargs,
    pub kwargs: Kwargs,
}

/// Boundary at which the accumulated context is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextResetSpan {
    /// Whether the segment just closed contributes to the loss.
    pub train: bool,
}

/// One typed unit of a parsed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Text(TextSpan),
    Ego(EgoSpan),
    Sample(SampleSpan),
    Class(ClassSpan),
    Obj(ObjSpan),
    ContextReset(ContextResetSpan),
}

impl Span {
    /// Short lowercase name of the variant, used in listings and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Span::Text(_) => "text",
            Span::Ego(_) => "ego",
            Span::Sample(_) => "sample",
            Span::Class(_) => "class",
            Span::Obj(_) => "obj",
            Span::ContextReset(_) => "reset",
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        TextSpan { text: text.into() }.into()
    }

    pub fn ego(ego: EgoId, uuid: Option<String>) -> Self {
        EgoSpan { ego, uuid }.into()
    }
}

macro_rules! impl_from_span {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Span {
                fn from(span: $ty) -> Self {
                    Span::$variant(span)
                }
            }
        )*
    };
}

impl_from_span!(
    Text(TextSpan),
    Ego(EgoSpan),
    Sample(SampleSpan),
    Class(ClassSpan),
    Obj(ObjSpan),
    ContextReset(ContextResetSpan),
);

/// A run of spans between two context resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub spans: &'a [Span],
    /// `train` flag of the reset that closed this segment; `None` for the trailing open segment.
    pub train: Option<bool>,
}

/// The ordered span sequence produced by parsing one document.
///
/// ## Notes
/// - Only the parser constructs a `SynapseWare`; it is read-only afterwards and `Send + Sync`, so one
///   parsed template can be shared across concurrent rollouts.
/// - Text spans are never empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynapseWare {
    spans: Vec<Span>,
}

impl SynapseWare {
    pub(crate) fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Span> {
        self.spans.iter()
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Span> {
        self.spans.get(index)
    }

    /// All sampling requests, in document order.
    pub fn samplers(&self) -> impl Iterator<Item = &SampleSpan> {
        self.spans.iter().filter_map(|span| match span {
            Span::Sample(sample) => Some(sample),
            _ => None,
        })
    }

    /// Every referenced variable id, deduplicated, in order of first reference.
    pub fn var_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = Vec::new();
        for span in &self.spans {
            if let Span::Obj(obj) = span {
                for id in &obj.var_ids {
                    if !ids.contains(&id.as_str()) {
                        ids.push(id);
                    }
                }
            }
        }
        ids
    }

    /// Directive names of all class spans, in document order.
    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.spans.iter().filter_map(|span| match span {
            Span::Class(class) => Some(class.class_name.as_str()),
            _ => None,
        })
    }

    /// Split the sequence at its context resets.
    ///
    /// Reset spans themselves are not part of any segment. A document ending in a reset has no
    /// trailing open segment.
    pub fn segments(&self) -> Vec<Segment<'_>> {
        let mut segments = Vec::new();
        let mut start = 0;
        for (i, span) in self.spans.iter().enumerate() {
            if let Span::ContextReset(reset) = span {
                segments.push(Segment {
                    spans: &self.spans[start..i],
                    train: Some(reset.train),
                });
                start = i + 1;
            }
        }
        if start < self.spans.len() {
            segments.push(Segment {
                spans: &self.spans[start..],
                train: None,
            });
        }
        segments
    }

    pub fn into_spans(self) -> Vec<Span> {
        self.spans
    }
}

impl<'a> IntoIterator for &'a SynapseWare {
    type Item = &'a Span;
    type IntoIter = std::slice::Iter<'a, Span>;

    fn into_iter(self) -> Self::IntoIter {
        self.spans.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obj(ids: &[&str]) -> Span {
        Span::Obj(ObjSpan {
            var_ids: ids.iter().map(|s| s.to_string()).collect(),
            kargs: Vec::new(),
            kwargs: Kwargs::new(),
        })
    }

    #[test]
    fn test_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SynapseWare>();
    }

    #[test]
    fn test_var_ids_deduplicated_in_first_reference_order() {
        let ware = SynapseWare::new(vec![obj(&["b", "a"]), Span::text("x"), obj(&["a", "c", "b"])]);
        assert_eq!(ware.var_ids(), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_segments_split_at_resets() {
        let ware = SynapseWare::new(vec![
            Span::ego(EgoId::User, None),
            Span::text("one"),
            Span::ContextReset(ContextResetSpan { train: true }),
            Span::text("two"),
            Span::ContextReset(ContextResetSpan { train: false }),
            Span::text("three"),
        ]);
        let segments = ware.segments();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].spans.len(), 2);
        assert_eq!(segments[0].train, Some(true));
        assert_eq!(segments[1].spans, &[Span::text("two")]);
        assert_eq!(segments[1].train, Some(false));
        assert_eq!(segments[2].train, None);
    }

    #[test]
    fn test_segments_without_trailing_open_segment() {
        let ware = SynapseWare::new(vec![Span::text("x"), Span::ContextReset(ContextResetSpan { train: true })]);
        assert_eq!(ware.segments().len(), 1);
        assert!(SynapseWare::default().segments().is_empty());
    }

    #[test]
    fn test_class_body() {
        let mut kwargs = Kwargs::new();
        kwargs.insert("<>".to_string(), "inline".to_string());
        let class = ClassSpan {
            class_name: "Note".to_string(),
            kargs: Vec::new(),
            kwargs,
        };
        assert_eq!(class.body(), Some("inline"));
    }
}
