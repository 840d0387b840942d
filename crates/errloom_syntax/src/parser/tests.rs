#[cfg(test)]
/// Parser unit tests.
///
/// These cover tag dispatch priority, the implicit system ego, text trimming, and the error
/// taxonomy. End-to-end document tests live in the root crate's `tests/`.
mod tests {
    use super::*;
    use crate::synapseware::ContextResetSpan;

    fn parse_ok(source: &str) -> Vec<Span> {
        parse(source).expect("parse failed").into_spans()
    }

    fn ego(ego: EgoId) -> Span {
        Span::ego(ego, None)
    }

    #[test]
    fn test_blank_documents_are_empty() {
        for source in ["", "   \n\t ", "# only a comment", "  # a\n\n# b\n"] {
            assert!(parse_ok(source).is_empty(), "expected no spans for {source:?}");
        }
    }

    #[test]
    fn test_just_text_gets_implicit_system_ego() {
        assert_eq!(
            parse_ok("  just text \n"),
            vec![ego(EgoId::System), Span::text("just text")]
        );
    }

    #[test]
    fn test_single_ego_tags() {
        assert_eq!(parse_ok("<|o_o|>"), vec![ego(EgoId::User)]);
        assert_eq!(parse_ok("<|@_@|>"), vec![ego(EgoId::Assistant)]);
    }

    #[test]
    fn test_tag_then_text() {
        assert_eq!(parse_ok("<|o_o|>Hello"), vec![ego(EgoId::User), Span::text("Hello")]);
    }

    #[test]
    fn test_text_then_tag() {
        assert_eq!(
            parse_ok("Hello<|o_o|>"),
            vec![ego(EgoId::System), Span::text("Hello"), ego(EgoId::User)]
        );
    }

    #[test]
    fn test_alternating_turns() {
        assert_eq!(
            parse_ok("<|o_o|>Hello<|@_@|>World"),
            vec![
                ego(EgoId::User),
                Span::text("Hello"),
                ego(EgoId::Assistant),
                Span::text("World"),
            ]
        );
    }

    #[test]
    fn test_whitespace_between_tags_is_dropped() {
        assert_eq!(
            parse_ok("<|o_o|>\n\n<|@_@|>\n"),
            vec![ego(EgoId::User), ego(EgoId::Assistant)]
        );
    }

    #[test]
    fn test_leading_whitespace_before_tag_has_no_system_ego() {
        assert_eq!(parse_ok("\n   <|o_o|>hi"), vec![ego(EgoId::User), Span::text("hi")]);
    }

    #[test]
    fn test_comment_lines_between_turns() {
        let source = "# header\n<|o_o|>\nquestion\n# note to self\n<|@_@|>";
        assert_eq!(
            parse_ok(source),
            vec![ego(EgoId::User), Span::text("question"), ego(EgoId::Assistant)]
        );
    }

    #[test]
    fn test_sampler_tag() {
        let spans = parse_ok("<|@_@:sum fence goal=summarize n=2|>");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0], Span::ego(EgoId::Assistant, Some("sum".to_string())));
        let Span::Sample(sample) = &spans[1] else {
            panic!("Expected sample span, got {:?}", spans[1]);
        };
        assert_eq!(sample.uuid.as_deref(), Some("sum"));
        assert_eq!(sample.kargs, vec!["fence"]);
        assert_eq!(sample.goal.as_deref(), Some("summarize"));
        assert_eq!(sample.kwargs.get("n").map(String::as_str), Some("2"));
        assert!(!sample.kwargs.contains_key("goal"));
    }

    #[test]
    fn test_context_resets() {
        assert_eq!(
            parse_ok("<|o_o|>a<|+++|>b<|===|>"),
            vec![
                ego(EgoId::User),
                Span::text("a"),
                Span::ContextReset(ContextResetSpan { train: true }),
                Span::text("b"),
                Span::ContextReset(ContextResetSpan { train: false }),
            ]
        );
    }

    #[test]
    fn test_context_reset_ignores_arguments() {
        assert_eq!(
            parse_ok("<|+++ extra k=v|>"),
            vec![Span::ContextReset(ContextResetSpan { train: true })]
        );
    }

    #[test]
    fn test_object_tag() {
        let spans = parse_ok("<|o_o|>Compress: <|input|context karg|>");
        let Span::Obj(obj) = &spans[2] else {
            panic!("Expected obj span, got {:?}", spans[2]);
        };
        assert_eq!(obj.var_ids, vec!["input", "context"]);
        assert_eq!(obj.kargs, vec!["karg"]);
    }

    #[test]
    fn test_class_fallback_with_body() {
        let spans = parse_ok("<|Rubric strict <>inline weight=2|>");
        let Span::Class(class) = &spans[0] else {
            panic!("Expected class span, got {:?}", spans[0]);
        };
        assert_eq!(class.class_name, "Rubric");
        assert_eq!(class.kargs, vec!["strict"]);
        assert_eq!(class.body(), Some("inline"));
        assert_eq!(class.kwargs.get("weight").map(String::as_str), Some("2"));
    }

    #[test]
    fn test_tag_content_is_trimmed() {
        assert_eq!(parse_ok("<|  o_o \n |>"), vec![ego(EgoId::User)]);
    }

    #[test]
    fn test_dispatch_priority() {
        assert_eq!(classify("+++"), TagFamily::ContextReset(ResetId::Train));
        assert_eq!(classify("==="), TagFamily::ContextReset(ResetId::Frozen));
        assert_eq!(classify("o_o"), TagFamily::Ego(EgoId::User));
        assert_eq!(classify("@_@:a|b"), TagFamily::Ego(EgoId::Assistant));
        assert_eq!(classify("a|b"), TagFamily::Object);
        assert_eq!(classify("+++:x"), TagFamily::Class);
        assert_eq!(classify("o_o_o"), TagFamily::Class);
    }

    #[test]
    fn test_uuid_with_pipe_is_still_an_ego() {
        let spans = parse_ok("<|@_@:a|b|>");
        assert_eq!(spans, vec![Span::ego(EgoId::Assistant, Some("a|b".to_string()))]);
    }

    #[test]
    fn test_stray_closer_is_text() {
        assert_eq!(parse_ok("a |> b"), vec![ego(EgoId::System), Span::text("a |> b")]);
    }

    #[test]
    fn test_inline_hash_is_not_a_comment() {
        assert_eq!(
            parse_ok("<|o_o|>Use #tags freely"),
            vec![ego(EgoId::User), Span::text("Use #tags freely")]
        );
    }

    #[test]
    fn test_empty_special_attribute_error() {
        let err = parse("<|o_o|>\n<|Note <>|>").unwrap_err();
        assert!(matches!(err, ParseError::EmptySpecialAttribute { .. }), "got {err:?}");
        assert_eq!(err.tag(), "<|Note <>|>");
        assert_eq!(err.location().line, 2);
        assert!(err.to_string().contains("Empty <> attribute"));
    }

    #[test]
    fn test_unterminated_tag_error() {
        let err = parse("hello <|o_o goal=x\nmore").unwrap_err();
        assert!(matches!(err, ParseError::UnterminatedTag { .. }), "got {err:?}");
        assert_eq!(err.tag(), "<|o_o goal=x");
        assert_eq!(err.location().column, 7);
    }

    #[test]
    fn test_nested_open_reports_outer_tag() {
        let err = parse("<|o_o <|@_@|>").unwrap_err();
        assert!(matches!(err, ParseError::UnterminatedTag { .. }), "got {err:?}");
        assert_eq!(err.tag(), "<|o_o");
    }

    #[test]
    fn test_malformed_tags() {
        for source in ["<||>", "<|   |>", "<|o_o:|>", "<|a||b|>", "<|k=v|>", "<|<>x|>"] {
            let err = parse(source).unwrap_err();
            assert!(
                matches!(err, ParseError::MalformedTag { .. }),
                "expected malformed tag for {source:?}, got {err:?}"
            );
            assert_eq!(err.tag(), source);
        }
    }

    #[test]
    fn test_error_location_survives_comment_lines() {
        let err = parse("# comment\n# another\n  <|x <>|>").unwrap_err();
        assert_eq!(err.location().line, 3);
        assert_eq!(err.location().column, 3);
    }

    #[test]
    fn test_parser_on_prefiltered_text() {
        let ware = SynapseParser::new("<|o_o|>hi").parse().unwrap();
        assert_eq!(ware.len(), 2);
        assert_eq!(ware.samplers().count(), 0);
    }

    #[test]
    fn test_error_rendering_snapshots() {
        let unterminated = parse("<|o_o|>\nHello <|@_@ goal=reply").unwrap_err();
        insta::assert_snapshot!(
            crate::diagnostics::format_error("chat.syn", &unterminated),
            @"chat.syn:2:7: Unterminated tag `<|@_@ goal=reply`: missing closing `|>`"
        );

        let malformed = parse("<|o_o|>Hi\n<|o_o:|>").unwrap_err();
        insta::assert_snapshot!(
            crate::diagnostics::format_error("chat.syn", &malformed),
            @"chat.syn:2:1: Malformed tag `<|o_o:|>`: empty correlation id after `:`"
        );
    }
}
