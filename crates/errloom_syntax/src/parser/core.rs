// Parser state and the scanning loop.
//
// The scan is a single left-to-right pass over already comment-filtered text. Text between
// tags is trimmed; regions that are empty after trimming produce no span.

/// Parser state.
///
/// ## Notes
/// - Unlike a recovering parser, the first malformed tag stops the parse: a document either yields
///   a complete [`SynapseWare`] or a single [`ParseError`].
pub struct SynapseParser<'a> {
    source: &'a str,
    pos: usize,
    spans: Vec<Span>,
}

impl<'a> SynapseParser<'a> {
    /// Create a parser over comment-filtered source text.
    ///
    /// ## Parameters
    /// - `source`: text produced by [`filter_comments`]. Unfiltered text is accepted too, but its
    ///   comment lines are then treated as literal content.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            spans: Vec::new(),
        }
    }

    /// Parse the entire source into a [`SynapseWare`].
    ///
    /// ## Errors
    /// Returns the first [`ParseError`] encountered; no partial output is produced.
    pub fn parse(mut self) -> Result<SynapseWare, ParseError> {
        if self.source.trim().is_empty() {
            return Ok(SynapseWare::default());
        }

        let source = self.source;
        while self.pos < source.len() {
            let Some(rel) = source[self.pos..].find(TAG_OPEN) else {
                self.push_text(self.pos, source.len());
                break;
            };

            let open = self.pos + rel;
            self.push_text(self.pos, open);
            self.pos = self.scan_tag(open)?;
        }

        Ok(SynapseWare::new(self.spans))
    }

    /// Scan the tag opening at `open`, dispatch it, and return the offset just past its closer.
    fn scan_tag(&mut self, open: usize) -> Result<usize, ParseError> {
        let source = self.source;
        let content_start = open + TAG_OPEN.len();
        let after_open = &source[content_start..];

        let close = after_open.find(TAG_CLOSE).map(|rel| content_start + rel);
        let nested = after_open.find(TAG_OPEN).map(|rel| content_start + rel);

        let close = match (close, nested) {
            (Some(close), Some(nested)) if nested < close => return Err(self.unterminated(open, nested)),
            (Some(close), _) => close,
            (None, _) => {
                let end = nested.unwrap_or_else(|| self.line_end(open));
                return Err(self.unterminated(open, end));
            }
        };

        let end = close + TAG_CLOSE.len();
        let range = TextRange::new(open, end);
        let content = source[content_start..close].trim();
        self.tag(content, range)?;
        Ok(end)
    }

    /// Emit literal text for `source[start..end]`, synthesizing the system ego in front of a
    /// document that begins with text.
    fn push_text(&mut self, start: usize, end: usize) {
        let source = self.source;
        let text = source[start..end].trim();
        if text.is_empty() {
            return;
        }
        if self.spans.is_empty() {
            tracing::trace!("document starts with text; inserting implicit system ego");
            self.spans.push(Span::ego(EgoId::System, None));
        }
        self.spans.push(Span::text(text));
    }

    fn line_end(&self, from: usize) -> usize {
        self.source[from..]
            .find('\n')
            .map(|rel| from + rel)
            .unwrap_or(self.source.len())
    }

    fn unterminated(&self, open: usize, end: usize) -> ParseError {
        let range = TextRange::new(open, end);
        ParseError::UnterminatedTag {
            tag: self.source[open..end].trim_end().to_string(),
            at: Location::new(self.source, range),
        }
    }
}
