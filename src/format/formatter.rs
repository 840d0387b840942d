//! Core formatting logic for synapseware
//!
//! Walks a [`SynapseWare`] and emits canonical markup that parses back to the same spans.

use errloom_core::lang::delimiters::{COMMENT, CORRELATION_SEP, OBJECT_SEP};
use errloom_core::lang::egos::{self, EgoId};
use errloom_core::lang::resets;
use errloom_syntax::builders::GOAL_KEY;
use errloom_syntax::{EgoSpan, Kargs, Kwargs, SampleSpan, Span, SynapseWare};

use super::config::FormatConfig;
use super::writer::MarkupWriter;

/// Formatter that transforms spans back to markup
pub struct Formatter {
    writer: MarkupWriter,
    config: FormatConfig,
}

impl Formatter {
    /// Create a new formatter with the given config
    pub fn new(config: FormatConfig) -> Self {
        Self {
            writer: MarkupWriter::new(),
            config,
        }
    }

    /// Format a parsed document and return the markup
    pub fn format(mut self, ware: &SynapseWare) -> String {
        let spans = ware.spans();
        let mut i = 0;

        // The system ego is never written; the parser re-synthesizes it in front of leading text.
        if let Some(Span::Ego(EgoSpan { ego: EgoId::System, .. })) = spans.first() {
            i = 1;
        }

        while i < spans.len() {
            match &spans[i] {
                Span::Ego(ego) => {
                    let sample = match spans.get(i + 1) {
                        Some(Span::Sample(sample)) if sample.uuid == ego.uuid => Some(sample),
                        _ => None,
                    };
                    self.format_ego(ego, sample);
                    if sample.is_some() {
                        i += 1;
                    }
                }
                Span::Sample(sample) => {
                    tracing::warn!(uuid = ?sample.uuid, "sample span without a preceding ego; skipping");
                }
                Span::Text(text) => self.format_text(&text.text),
                Span::Class(class) => {
                    self.begin_tag();
                    self.writer.tag(&class.class_name, &class.kargs, &[], &class.kwargs);
                }
                Span::Obj(obj) => {
                    self.begin_tag();
                    let sep = OBJECT_SEP.to_string();
                    let base = obj.var_ids.join(sep.as_str());
                    self.writer.tag(&base, &obj.kargs, &[], &obj.kwargs);
                }
                Span::ContextReset(reset) => {
                    self.begin_tag();
                    let marker = resets::marker(resets::for_train(reset.train));
                    self.writer.tag(marker, &Kargs::new(), &[], &Kwargs::new());
                }
            }
            i += 1;
        }

        self.writer.finish()
    }

    fn format_ego(&mut self, ego: &EgoSpan, sample: Option<&SampleSpan>) {
        let Some(marker) = egos::marker(ego.ego) else {
            tracing::warn!(ego = %ego.ego, "ego has no marker outside the document start; skipping");
            return;
        };

        if self.config.blank_line_between_turns {
            self.writer.blank_line();
        }
        self.begin_tag();

        let base = match &ego.uuid {
            Some(uuid) => format!("{marker}{CORRELATION_SEP}{uuid}"),
            None => marker.to_string(),
        };

        match sample {
            Some(sample) => {
                let goal: Vec<(&str, &str)> = sample.goal.iter().map(|goal| (GOAL_KEY, goal.as_str())).collect();
                self.writer.tag(&base, &sample.kargs, &goal, &sample.kwargs);
            }
            None => self.writer.tag(&base, &Kargs::new(), &[], &Kwargs::new()),
        }
    }

    fn format_text(&mut self, text: &str) {
        // A text block starting with `#` must not land at a line start, or it would read back as a
        // comment; it stays glued to the preceding tag.
        if self.config.tags_on_own_line && !text.starts_with(COMMENT) {
            self.writer.end_line();
        }
        self.writer.write(text);
    }

    fn begin_tag(&mut self) {
        if self.config.tags_on_own_line {
            self.writer.end_line();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use errloom_syntax::parser;

    fn fmt(source: &str, config: FormatConfig) -> String {
        let ware = parser::parse(source).unwrap();
        Formatter::new(config).format(&ware)
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(fmt("# nothing here\n", FormatConfig::default()), "");
    }

    #[test]
    fn test_implicit_system_is_omitted() {
        assert_eq!(fmt("  Be brief.  <|o_o|>hi", FormatConfig::default()), "Be brief.\n\n<|o_o|>\nhi\n");
    }

    #[test]
    fn test_sampler_merges_into_ego_tag() {
        assert_eq!(
            fmt("<|@_@:a n=1   goal=x fence|>", FormatConfig::default()),
            "<|@_@:a fence goal=x n=1|>\n"
        );
    }

    #[test]
    fn test_compact_layout() {
        assert_eq!(
            fmt("<|o_o|>\n  Hello\n<|@_@|>\nWorld\n<|+++|>", FormatConfig::compact()),
            "<|o_o|>Hello<|@_@|>World<|+++|>\n"
        );
    }

    #[test]
    fn test_hash_text_stays_glued_to_tag() {
        assert_eq!(fmt("<|o_o|>#topic", FormatConfig::default()), "<|o_o|>#topic\n");
    }

    #[test]
    fn test_objects_classes_and_resets() {
        assert_eq!(
            fmt("<|o_o|><|a|b x|><|Note k=v <>body|><|===|>", FormatConfig::default()),
            "<|o_o|>\n<|a|b x|>\n<|Note k=v <>body|>\n<|===|>\n"
        );
    }

    #[test]
    fn test_tokens_ending_in_angle_bracket_round_trip() {
        let source = "<|#\n< |><|Note k=a< |><|Doc <>b< |><|o_o:x< |><|a|b< |>";
        let formatted = fmt(source, FormatConfig::default());
        assert_eq!(
            formatted,
            "<|# < |>\n<|Note k=a< |>\n<|Doc <>b< |>\n\n<|o_o:x< |>\n<|a|b< |>\n"
        );
        assert_eq!(parser::parse(&formatted).unwrap(), parser::parse(source).unwrap());

        let compact = fmt(source, FormatConfig::compact());
        assert_eq!(parser::parse(&compact).unwrap(), parser::parse(source).unwrap());
    }
}
