//! Whole-line comment filtering.
//!
//! A line whose first non-whitespace character is `#` is a comment. Comment lines are blanked
//! rather than removed, so line numbers and the columns of every surviving line stay valid for
//! diagnostics. A `#` anywhere else on a line is ordinary content.

use errloom_core::lang::delimiters::COMMENT;

/// Blank every comment line of `source`, keeping the line count unchanged.
///
/// ## Examples
/// ```rust
/// use errloom_syntax::comments::filter_comments;
///
/// assert_eq!(filter_comments("a\n  # note\nb"), "a\n\nb");
/// assert_eq!(filter_comments("x = '#value'"), "x = '#value'");
/// ```
pub fn filter_comments(source: &str) -> String {
    source
        .split('\n')
        .map(|line| if is_comment_line(line) { "" } else { line })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Return `true` if `line` is a whole-line comment.
pub fn is_comment_line(line: &str) -> bool {
    line.trim_start().starts_with(COMMENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_comments_empty() {
        assert_eq!(filter_comments(""), "");
    }

    #[test]
    fn test_filter_comments_no_comments() {
        let content = "line 1\nline 2";
        assert_eq!(filter_comments(content), content);
    }

    #[test]
    fn test_filter_comments_only_comments() {
        assert_eq!(filter_comments("# comment 1\n# comment 2"), "\n");
    }

    #[test]
    fn test_filter_comments_mixed() {
        assert_eq!(filter_comments("line 1\n# comment\nline 2"), "line 1\n\nline 2");
    }

    #[test]
    fn test_filter_comments_with_leading_whitespace() {
        assert_eq!(filter_comments("  # comment with leading whitespace"), "");
        assert_eq!(filter_comments("\t#tabbed\nkeep"), "\nkeep");
    }

    #[test]
    fn test_filter_comments_inline_hash_is_content() {
        let content = "line_with_hash = '#value'";
        assert_eq!(filter_comments(content), content);
    }

    #[test]
    fn test_filter_comments_preserves_trailing_newline() {
        assert_eq!(filter_comments("a\n# b\n"), "a\n\n");
    }
}
