/// Parse a synapseware document into a [`SynapseWare`].
///
/// This is the main public entrypoint: comment lines are filtered out first, then the filtered
/// text is scanned by [`SynapseParser`].
///
/// ## Errors
/// Returns the first [`ParseError`] found; parsing is all-or-nothing per document.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse(source: &str) -> Result<SynapseWare, ParseError> {
    let filtered = filter_comments(source);
    SynapseParser::new(&filtered).parse()
}
