// Tag dispatch: an ordered classifier over the tag base, then the matching builder.

/// The span family a tag belongs to, decided from its base alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagFamily {
    ContextReset(ResetId),
    Ego(EgoId),
    Object,
    Class,
}

/// Classify a tag base. Rules are tried in priority order and the first match wins:
///
/// 1. exact context-reset marker (`+++`, `===`)
/// 2. ego marker, ignoring an optional `:uuid` suffix (`o_o`, `@_@:id`)
/// 3. contains `|` (object reference)
/// 4. anything else names a directive
pub fn classify(base: &str) -> TagFamily {
    if let Some(reset) = resets::from_marker(base) {
        return TagFamily::ContextReset(reset);
    }

    let marker = base.split_once(CORRELATION_SEP).map_or(base, |(marker, _)| marker);
    if let Some(ego) = egos::from_marker(marker) {
        return TagFamily::Ego(ego);
    }

    if base.contains(OBJECT_SEP) {
        return TagFamily::Object;
    }

    TagFamily::Class
}

impl SynapseParser<'_> {
    /// Interpret one tag's trimmed `content` and append the spans it builds.
    fn tag(&mut self, content: &str, range: TextRange) -> Result<(), ParseError> {
        let TagParts { base, kargs, kwargs } = parse_span_tag(content).map_err(|err| self.attr_error(err, range))?;

        let family = classify(&base);
        tracing::debug!(base = %base, ?family, kargs = kargs.len(), kwargs = kwargs.len(), "dispatching tag");

        let stability = match family {
            TagFamily::ContextReset(reset) => Some(resets::info_for(reset).stability),
            TagFamily::Ego(ego) => Some(egos::info_for(ego).stability),
            TagFamily::Object | TagFamily::Class => None,
        };
        if stability == Some(Stability::Deprecated) {
            tracing::warn!(base = %base, "deprecated marker");
        }

        let built = match family {
            TagFamily::ContextReset(reset) => {
                if !kargs.is_empty() || !kwargs.is_empty() {
                    tracing::debug!(base = %base, "ignoring arguments on context reset");
                }
                Ok(build_context_reset_span(resets::train(reset)))
            }
            TagFamily::Ego(_) => build_ego_or_sampler_span(&base, kargs, kwargs),
            TagFamily::Object => build_obj_span(&base, kargs, kwargs),
            TagFamily::Class => build_class_span(&base, kargs, kwargs),
        };

        let spans = built.map_err(|err| self.base_error(err, range))?;
        self.spans.extend(spans);
        Ok(())
    }

    fn attr_error(&self, err: AttrError, range: TextRange) -> ParseError {
        let tag = self.source[range.start..range.end].to_string();
        let at = Location::new(self.source, range);
        match err {
            AttrError::EmptySpecialAttribute => ParseError::EmptySpecialAttribute { tag, at },
            AttrError::EmptyTag => ParseError::MalformedTag {
                tag,
                reason: err.to_string(),
                at,
            },
        }
    }

    fn base_error(&self, err: BaseError, range: TextRange) -> ParseError {
        ParseError::MalformedTag {
            tag: self.source[range.start..range.end].to_string(),
            reason: err.to_string(),
            at: Location::new(self.source, range),
        }
    }
}
