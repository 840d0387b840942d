//! Synapseware formatter
//!
//! Renders a parsed document back to canonical markup:
//! - the implicit system ego is not written
//! - a sampled turn is written as one ego tag carrying its arguments
//! - positional arguments first, then `goal`, then keywords sorted by key, then `<>body`
//! - one blank line between turns (configurable)
//!
//! Formatting preserves meaning: the output parses to the same spans as the input. Comment lines
//! do not survive formatting.

mod config;
mod formatter;
mod writer;

pub use config::FormatConfig;
pub use formatter::Formatter;
pub use writer::MarkupWriter;

use errloom_syntax::{ParseError, SynapseWare, parser};

/// Format an already parsed document with custom configuration
pub fn format_ware(ware: &SynapseWare, config: FormatConfig) -> String {
    Formatter::new(config).format(ware)
}

/// Format synapseware source with default settings
pub fn format_source(source: &str) -> Result<String, ParseError> {
    format_source_with_config(source, FormatConfig::default())
}

/// Format synapseware source with custom configuration
pub fn format_source_with_config(source: &str, config: FormatConfig) -> Result<String, ParseError> {
    let ware = parser::parse(source)?;
    Ok(format_ware(&ware, config))
}

/// Check if source is already formatted
pub fn check_formatted(source: &str) -> Result<bool, ParseError> {
    let formatted = format_source(source)?;
    Ok(source == formatted)
}

/// Get the diff between original and formatted source
pub fn format_diff(source: &str) -> Result<Option<String>, ParseError> {
    let formatted = format_source(source)?;

    if source == formatted {
        return Ok(None);
    }

    Ok(Some(line_diff(source, &formatted)))
}

/// Simple line-by-line diff: `-NNNN | old` / `+NNNN | new` for every line that differs
pub fn line_diff(original: &str, formatted: &str) -> String {
    let mut diff = String::new();
    let original_lines: Vec<&str> = original.lines().collect();
    let formatted_lines: Vec<&str> = formatted.lines().collect();

    let max_lines = original_lines.len().max(formatted_lines.len());

    for i in 0..max_lines {
        let orig = original_lines.get(i).unwrap_or(&"");
        let fmt = formatted_lines.get(i).unwrap_or(&"");

        if orig != fmt {
            if !orig.is_empty() {
                diff.push_str(&format!("-{:4} | {}\n", i + 1, orig));
            }
            if !fmt.is_empty() {
                diff.push_str(&format!("+{:4} | {}\n", i + 1, fmt));
            }
        }
    }

    diff
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_source_invalid_syntax() {
        assert!(format_source("<|o_o").is_err());
    }

    #[test]
    fn test_check_formatted() {
        assert!(check_formatted("<|o_o|>\nhi\n").unwrap());
        assert!(!check_formatted("<|o_o|>hi").unwrap());
    }

    #[test]
    fn test_format_diff_none_when_formatted() {
        assert_eq!(format_diff("<|o_o|>\nhi\n").unwrap(), None);
    }

    #[test]
    fn test_format_diff_reports_changed_lines() {
        let diff = format_diff("<|o_o|>hi").unwrap().unwrap();
        assert_eq!(diff, "-   1 | <|o_o|>hi\n+   1 | <|o_o|>\n+   2 | hi\n");
    }

    #[test]
    fn test_line_diff_marks_changed_lines() {
        assert_eq!(line_diff("a\nb\n", "a\nc\n"), "-   2 | b\n+   2 | c\n");
    }
}
